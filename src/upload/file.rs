//! File handles and the normalization shared by both input paths

/// A user-selected file as seen by the widget: a display name and a size.
/// Contents are never read.
pub trait FileHandle {
  fn name(&self) -> String;
  fn size(&self) -> u64;
}

/// Plain file metadata, used wherever no browser `File` exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
  pub name: String,
  pub size: u64,
}

impl FileMeta {
  pub fn new(name: impl Into<String>, size: u64) -> Self {
    Self {
      name: name.into(),
      size,
    }
  }
}

impl FileHandle for FileMeta {
  fn name(&self) -> String {
    self.name.clone()
  }

  fn size(&self) -> u64 {
    self.size
  }
}

/// An indexed "list of files" as the host environment hands it over
/// (a picker's `FileList`, a drag payload's `DataTransfer.files`).
pub trait FileSource {
  type Item;

  fn len(&self) -> u32;
  fn item(&self, index: u32) -> Option<Self::Item>;

  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl<T: Clone> FileSource for [T] {
  type Item = T;

  fn len(&self) -> u32 {
    u32::try_from(<[T]>::len(self)).unwrap_or(u32::MAX)
  }

  fn item(&self, index: u32) -> Option<T> {
    self.get(index as usize).cloned()
  }
}

impl<T: Clone> FileSource for Vec<T> {
  type Item = T;

  fn len(&self) -> u32 {
    FileSource::len(self.as_slice())
  }

  fn item(&self, index: u32) -> Option<T> {
    FileSource::item(self.as_slice(), index)
  }
}

/// Convert a host file list into a plain ordered sequence.
///
/// Both the picker and the drop handler go through here, so the rest of
/// the widget never knows which modality produced the files. A missing
/// list (an input that reports none) is an empty selection.
pub fn normalize<S>(source: Option<&S>) -> Vec<S::Item>
where
  S: FileSource + ?Sized,
{
  let Some(source) = source else {
    return Vec::new();
  };
  let mut files = Vec::with_capacity(source.len() as usize);
  for i in 0..source.len() {
    if let Some(file) = source.item(i) {
      files.push(file);
    }
  }
  files
}

#[cfg(feature = "csr")]
mod web {
  use super::{FileHandle, FileSource};
  use web_sys::{File, FileList};

  impl FileHandle for File {
    fn name(&self) -> String {
      File::name(self)
    }

    // Browsers report sizes as doubles; they are always whole bytes.
    fn size(&self) -> u64 {
      File::size(self) as u64
    }
  }

  impl FileSource for FileList {
    type Item = File;

    fn len(&self) -> u32 {
      self.length()
    }

    fn item(&self, index: u32) -> Option<File> {
      self.get(index)
    }
  }
}
