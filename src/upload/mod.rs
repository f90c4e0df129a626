//! Toolkit-independent core of the file drop widget.
//!
//! Holds the selection and drag state, the normalization shared by the
//! picker and drop paths, and the render model the browser view is built
//! from. Nothing here touches the DOM, so it runs and tests natively.

mod file;
mod format;
mod render;
mod state;

pub use file::{normalize, FileHandle, FileMeta, FileSource};
pub use format::format_size_kb;
pub use render::{FileRow, RenderModel};
pub use state::{DragGesture, DragState, Selection, UploadState};

/// Heading above the drop zone
pub const TITLE: &str = "Upload Your Files";
/// Hint under the heading
pub const SUBTITLE: &str = "Drag & drop or click to select files";
/// Drop zone text while a drag hovers over it
pub const DROP_TEXT_ACTIVE: &str = "Drop files here!";
/// Drop zone text at rest
pub const DROP_TEXT_IDLE: &str = "Drop files or click to upload";
/// Label of the clear button
pub const CLEAR_LABEL: &str = "Clear Files";
/// Label of the inert upload placeholder
pub const UPLOAD_LABEL: &str = "Upload to S3 (Coming Soon)";
