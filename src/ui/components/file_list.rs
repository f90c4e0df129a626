//! List of selected files with the clear and upload controls

use crate::upload::RenderModel;
use leptos::*;

#[component]
pub fn SelectedFiles(model: Memo<RenderModel>, on_clear: Callback<()>) -> impl IntoView {
  view! {
    <div class="file-list">
      <h3 class="file-list-header">{move || model.with(|m| m.header())}</h3>
      <ul class="file-list-items">
        {move || {
          model.with(|m| {
            m.rows.iter().map(|row| {
              let name = row.name.clone();
              let size = row.size.clone();
              view! {
                <li class="file-row">
                  <span class="file-name" title=name.clone()>{name}</span>
                  <span class="file-size">{size}</span>
                </li>
              }
            }).collect_view()
          })
        }}
      </ul>
      <button class="btn btn-clear" on:click=move |_| on_clear.call(())>
        {move || model.with(|m| m.clear_label())}
      </button>
    </div>
    // Placeholder only: disabled, no handler
    <button
      class="btn btn-upload"
      disabled=move || model.with(|m| m.upload_disabled())
    >
      {move || model.with(|m| m.upload_label())}
    </button>
  }
}
