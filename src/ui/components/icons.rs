use leptos::*;

/// Tray-with-arrow glyph shown inside the drop zone
#[component]
pub fn UploadIcon(#[prop(default = 48)] size: u32) -> impl IntoView {
  view! {
    <svg
      class="dropzone-icon"
      width=size
      height=size
      viewBox="0 0 24 24"
      fill="none"
      stroke="currentColor"
      stroke-width="2"
      xmlns="http://www.w3.org/2000/svg"
    >
      <path
        stroke-linecap="round"
        stroke-linejoin="round"
        d="M7 16V4m0 0L3 8m4-4l4 4m6 4v6a2 2 0 01-2 2H5a2 2 0 01-2-2v-6m12-4h4m-4 0l-4 4"
      />
    </svg>
  }
}
