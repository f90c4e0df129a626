use filedrop::upload::{normalize, DragGesture, DragState, FileMeta, Selection, UploadState};

fn files(names: &[(&str, u64)]) -> Vec<FileMeta> {
  names.iter().map(|(n, s)| FileMeta::new(*n, *s)).collect()
}

fn names(state: &UploadState<FileMeta>) -> Vec<String> {
  state.selection.iter().map(|f| f.name.clone()).collect()
}

#[test]
fn test_initial_state() {
  let state = UploadState::<FileMeta>::new();
  assert!(state.selection.is_empty());
  assert_eq!(state.drag, DragState::Idle);
  assert!(!state.is_drag_active());
}

#[test]
fn test_picker_appends_in_order() {
  let state = UploadState::new()
    .picker_change(files(&[("a.txt", 1), ("b.txt", 2)]))
    .picker_change(files(&[("c.txt", 3)]));
  assert_eq!(names(&state), vec!["a.txt", "b.txt", "c.txt"]);
}

#[test]
fn test_mixed_events_concatenate() {
  let batches = [
    files(&[("1", 1), ("2", 2), ("3", 3)]),
    files(&[]),
    files(&[("4", 4)]),
    files(&[("5", 5), ("6", 6)]),
  ];

  let mut state = UploadState::new();
  for (i, batch) in batches.iter().enumerate() {
    state = if i % 2 == 0 {
      state.picker_change(batch.clone())
    } else {
      state.drag(DragGesture::Enter).drop(batch.clone())
    };
  }

  let expected: Vec<FileMeta> = batches.concat();
  assert_eq!(state.selection.len(), 6);
  assert_eq!(state.selection.files(), expected.as_slice());
}

#[test]
fn test_duplicates_are_kept() {
  let state = UploadState::new()
    .picker_change(files(&[("same.txt", 10)]))
    .picker_change(files(&[("same.txt", 10)]));
  assert_eq!(state.selection.len(), 2);
  assert_eq!(state.selection.files()[0], state.selection.files()[1]);
}

#[test]
fn test_empty_picker_is_noop() {
  let state = UploadState::new().picker_change(files(&[("a", 1)]));
  let cancelled = state.picker_change(normalize::<Vec<FileMeta>>(None));
  assert_eq!(names(&cancelled), vec!["a"]);
  assert_eq!(cancelled.drag, state.drag);
}

#[test]
fn test_previous_state_untouched() {
  let before = UploadState::new().picker_change(files(&[("a", 1)]));
  let after = before.picker_change(files(&[("b", 2)])).clear();
  assert_eq!(names(&before), vec!["a"]);
  assert!(after.selection.is_empty());
}

#[test]
fn test_drag_flags() {
  let state = UploadState::<FileMeta>::new();
  assert!(state.drag(DragGesture::Enter).is_drag_active());
  assert!(state.drag(DragGesture::Over).is_drag_active());

  let active = state.drag(DragGesture::Enter);
  assert!(active.drag(DragGesture::Over).is_drag_active());
  assert!(!active.drag(DragGesture::Leave).is_drag_active());
  assert!(!active.drop(Vec::new()).is_drag_active());
}

#[test]
fn test_drag_does_not_touch_selection() {
  let state = UploadState::new().picker_change(files(&[("a", 1)]));
  let moved = state
    .drag(DragGesture::Enter)
    .drag(DragGesture::Over)
    .drag(DragGesture::Leave);
  assert_eq!(names(&moved), vec!["a"]);
}

#[test]
fn test_drop_ends_drag_and_appends() {
  let state = UploadState::new()
    .drag(DragGesture::Enter)
    .drop(files(&[("c.pdf", 10240)]));
  assert_eq!(state.drag, DragState::Idle);
  assert_eq!(names(&state), vec!["c.pdf"]);
}

#[test]
fn test_clear_resets_and_is_idempotent() {
  let state = UploadState::new().picker_change(files(&[("a", 1), ("b", 2), ("c", 3)]));
  let cleared = state.clear();
  assert_eq!(cleared.selection.len(), 0);
  let again = cleared.clear();
  assert_eq!(again.selection.len(), 0);
}

#[test]
fn test_clear_leaves_drag_flag() {
  let idle = UploadState::new().picker_change(files(&[("a", 1)])).clear();
  assert!(!idle.is_drag_active());

  let active = UploadState::new()
    .picker_change(files(&[("a", 1)]))
    .drag(DragGesture::Over)
    .clear();
  assert!(active.is_drag_active());
}

#[test]
fn test_selection_from_vec() {
  let selection = Selection::from(vec![FileMeta::new("x", 1)]);
  let grown = selection.appended(vec![FileMeta::new("y", 2)]);
  assert_eq!(selection.len(), 1);
  assert_eq!(grown.len(), 2);
  assert_eq!((&grown).into_iter().count(), 2);
  assert!(grown.cleared().is_empty());
}

#[test]
fn test_normalize_skips_nothing_and_keeps_order() {
  let source = files(&[("z", 26), ("a", 1), ("m", 13)]);
  let normalized = normalize(Some(&source));
  assert_eq!(normalized, source);
}
