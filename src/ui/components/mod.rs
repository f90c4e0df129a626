//! Widget components

mod file_list;
mod icons;
mod upload;

pub use file_list::SelectedFiles;
pub use icons::UploadIcon;
pub use upload::FileUpload;
