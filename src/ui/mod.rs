//! Browser widget (Leptos, client-side rendered)

pub mod components;

pub use components::FileUpload;
