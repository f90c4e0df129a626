//! File drop widget - Client-Side Rendered (WASM)

use filedrop::ui::FileUpload;
use leptos::*;

fn main() {
  console_error_panic_hook::set_once();
  mount_to_body(|| view! { <FileUpload/> });
}
