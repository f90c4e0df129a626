//! What the widget shows for a given state

use super::file::FileHandle;
use super::format::format_size_kb;
use super::state::UploadState;
use super::{CLEAR_LABEL, DROP_TEXT_ACTIVE, DROP_TEXT_IDLE, UPLOAD_LABEL};

const DROPZONE_BASE: &str = "dropzone";
const DROPZONE_ACTIVE: &str = "dropzone dropzone-active";
const DROPZONE_IDLE: &str = "dropzone dropzone-idle";

/// One line of the file list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRow {
  pub name: String,
  pub size: String,
}

/// Snapshot of everything visible, computed from state alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderModel {
  pub drag_active: bool,
  pub rows: Vec<FileRow>,
}

impl RenderModel {
  pub fn from_state<F>(state: &UploadState<F>) -> Self
  where
    F: FileHandle + Clone,
  {
    Self {
      drag_active: state.is_drag_active(),
      rows: state
        .selection
        .iter()
        .map(|file| FileRow {
          name: file.name(),
          size: format_size_kb(file.size()),
        })
        .collect(),
    }
  }

  pub fn dropzone_class(&self) -> &'static str {
    dropzone_class(self.drag_active)
  }

  pub fn dropzone_text(&self) -> &'static str {
    dropzone_text(self.drag_active)
  }

  pub fn header(&self) -> String {
    selected_header(self.rows.len())
  }

  pub fn show_file_list(&self) -> bool {
    !self.rows.is_empty()
  }

  pub fn show_clear(&self) -> bool {
    self.show_file_list()
  }

  pub fn show_upload(&self) -> bool {
    self.show_file_list()
  }

  pub fn clear_label(&self) -> &'static str {
    CLEAR_LABEL
  }

  /// The upload control is a placeholder and is never enabled.
  pub fn upload_disabled(&self) -> bool {
    true
  }

  pub fn upload_label(&self) -> &'static str {
    UPLOAD_LABEL
  }
}

pub(crate) fn dropzone_class(drag_active: bool) -> &'static str {
  if drag_active {
    DROPZONE_ACTIVE
  } else {
    DROPZONE_IDLE
  }
}

pub(crate) fn dropzone_text(drag_active: bool) -> &'static str {
  if drag_active {
    DROP_TEXT_ACTIVE
  } else {
    DROP_TEXT_IDLE
  }
}

pub(crate) fn selected_header(count: usize) -> String {
  format!("Selected Files ({})", count)
}
