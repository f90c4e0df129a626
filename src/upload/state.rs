//! Selection and drag state with replace-on-write transitions

use std::sync::Arc;

/// Pointer gestures the drop surface reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragGesture {
  Enter,
  Over,
  Leave,
  Drop,
}

/// Whether a drag is currently hovering over the drop surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
  #[default]
  Idle,
  Active,
}

impl DragState {
  pub fn next(self, gesture: DragGesture) -> Self {
    match gesture {
      DragGesture::Enter | DragGesture::Over => Self::Active,
      DragGesture::Leave | DragGesture::Drop => Self::Idle,
    }
  }

  pub fn is_active(self) -> bool {
    self == Self::Active
  }
}

/// Ordered files chosen so far. Never edited in place: every change
/// produces a new value, and clones share the backing storage.
#[derive(Debug)]
pub struct Selection<F> {
  files: Arc<[F]>,
}

impl<F> Selection<F> {
  pub fn new() -> Self {
    Self {
      files: Arc::from(Vec::new()),
    }
  }

  pub fn len(&self) -> usize {
    self.files.len()
  }

  pub fn is_empty(&self) -> bool {
    self.files.is_empty()
  }

  pub fn files(&self) -> &[F] {
    &self.files
  }

  pub fn iter(&self) -> std::slice::Iter<'_, F> {
    self.files.iter()
  }

  pub fn cleared(&self) -> Self {
    Self::new()
  }
}

impl<F: Clone> Selection<F> {
  /// This selection followed by `added`, in order. Duplicates stay.
  pub fn appended(&self, added: Vec<F>) -> Self {
    if added.is_empty() {
      return self.clone();
    }
    let mut files = Vec::with_capacity(self.files.len() + added.len());
    files.extend(self.files.iter().cloned());
    files.extend(added);
    Self {
      files: Arc::from(files),
    }
  }
}

impl<F> Clone for Selection<F> {
  fn clone(&self) -> Self {
    Self {
      files: Arc::clone(&self.files),
    }
  }
}

impl<F> Default for Selection<F> {
  fn default() -> Self {
    Self::new()
  }
}

impl<F> From<Vec<F>> for Selection<F> {
  fn from(files: Vec<F>) -> Self {
    Self {
      files: Arc::from(files),
    }
  }
}

impl<'a, F> IntoIterator for &'a Selection<F> {
  type Item = &'a F;
  type IntoIter = std::slice::Iter<'a, F>;

  fn into_iter(self) -> Self::IntoIter {
    self.files.iter()
  }
}

/// Everything the widget remembers between events.
///
/// Each operation returns the next state instead of mutating, so a view
/// swaps the whole value at once and never renders a half-applied update.
#[derive(Clone, Debug)]
pub struct UploadState<F> {
  pub selection: Selection<F>,
  pub drag: DragState,
}

impl<F> Default for UploadState<F> {
  fn default() -> Self {
    Self {
      selection: Selection::new(),
      drag: DragState::Idle,
    }
  }
}

impl<F: Clone> UploadState<F> {
  /// Initial state on mount: nothing selected, no drag in progress
  pub fn new() -> Self {
    Self::default()
  }

  /// Files chosen through the native dialog
  pub fn picker_change(&self, files: Vec<F>) -> Self {
    tracing::debug!(added = files.len(), total = self.selection.len() + files.len(), "picker change");
    Self {
      selection: self.selection.appended(files),
      drag: self.drag,
    }
  }

  /// Enter, over or leave. A drop goes through [`UploadState::drop`] so its
  /// payload is never lost.
  pub fn drag(&self, gesture: DragGesture) -> Self {
    let drag = self.drag.next(gesture);
    if drag != self.drag {
      tracing::trace!(?gesture, ?drag, "drag state changed");
    }
    Self {
      selection: self.selection.clone(),
      drag,
    }
  }

  /// Files released over the drop surface. Ends the drag.
  pub fn drop(&self, files: Vec<F>) -> Self {
    tracing::debug!(added = files.len(), total = self.selection.len() + files.len(), "drop");
    Self {
      selection: self.selection.appended(files),
      drag: self.drag.next(DragGesture::Drop),
    }
  }

  /// Empty the selection. The drag flag is left as it is.
  pub fn clear(&self) -> Self {
    tracing::debug!(removed = self.selection.len(), "clear selection");
    Self {
      selection: self.selection.cleared(),
      drag: self.drag,
    }
  }

  pub fn is_drag_active(&self) -> bool {
    self.drag.is_active()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_drag_machine() {
    assert_eq!(DragState::default(), DragState::Idle);
    assert_eq!(DragState::Idle.next(DragGesture::Enter), DragState::Active);
    assert_eq!(DragState::Idle.next(DragGesture::Over), DragState::Active);
    assert_eq!(DragState::Active.next(DragGesture::Over), DragState::Active);
    assert_eq!(DragState::Active.next(DragGesture::Leave), DragState::Idle);
    assert_eq!(DragState::Active.next(DragGesture::Drop), DragState::Idle);
    assert_eq!(DragState::Idle.next(DragGesture::Leave), DragState::Idle);
  }

  #[test]
  fn test_append_replaces_value() {
    let first = Selection::from(vec![1, 2]);
    let second = first.appended(vec![3]);
    assert_eq!(first.files(), &[1, 2]);
    assert_eq!(second.files(), &[1, 2, 3]);
  }

  #[test]
  fn test_empty_append_shares_storage() {
    let first = Selection::from(vec![1]);
    let second = first.appended(Vec::new());
    assert!(Arc::ptr_eq(&first.files, &second.files));
  }

  #[test]
  fn test_clear_keeps_drag() {
    let state = UploadState::<u8>::new().drag(DragGesture::Enter).picker_change(vec![1]);
    let cleared = state.clear();
    assert!(cleared.selection.is_empty());
    assert!(cleared.is_drag_active());
  }
}
