//! Drop zone and file picker

use super::{SelectedFiles, UploadIcon};
use crate::upload::{normalize, DragGesture, RenderModel, UploadState, SUBTITLE, TITLE};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, HtmlInputElement};

#[component]
pub fn FileUpload() -> impl IntoView {
  let state = create_rw_signal(UploadState::<File>::new());
  let model = create_memo(move |_| state.with(RenderModel::from_state));

  // Enter / over / leave. Dragover fires continuously, so only write on change.
  let on_drag = move |gesture: DragGesture| {
    move |ev: DragEvent| {
      ev.prevent_default();
      ev.stop_propagation();
      let changed = state.with_untracked(|s| s.drag.next(gesture) != s.drag);
      if changed {
        state.update(|s| *s = s.drag(gesture));
      }
    }
  };

  let on_drop = move |ev: DragEvent| {
    ev.prevent_default();
    ev.stop_propagation();
    let files = normalize(ev.data_transfer().and_then(|dt| dt.files()).as_ref());
    state.update(|s| *s = s.drop(files));
  };

  let on_picker_change = move |ev: web_sys::Event| {
    let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
      return;
    };
    let files = normalize(input.files().as_ref());
    // Picking the same file again must still fire `change`
    input.set_value("");
    state.update(|s| *s = s.picker_change(files));
  };

  let on_clear = Callback::new(move |_| state.update(|s| *s = s.clear()));

  view! {
    <div class="filedrop-page">
      <div class="filedrop-card">
        <h2 class="filedrop-title">{TITLE}</h2>
        <p class="filedrop-subtitle">{SUBTITLE}</p>

        <div
          class=move || model.with(|m| m.dropzone_class())
          on:dragenter=on_drag(DragGesture::Enter)
          on:dragover=on_drag(DragGesture::Over)
          on:dragleave=on_drag(DragGesture::Leave)
          on:drop=on_drop
        >
          <input
            type="file"
            multiple=true
            class="dropzone-input"
            on:change=on_picker_change
          />
          <UploadIcon size=48/>
          <p class="dropzone-text">{move || model.with(|m| m.dropzone_text())}</p>
        </div>

        <Show when=move || model.with(|m| m.show_file_list())>
          <SelectedFiles model=model on_clear=on_clear/>
        </Show>
      </div>
    </div>
  }
}
