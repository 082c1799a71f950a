use super::*;

// =============================================================
// TabDirection
// =============================================================

#[test]
fn shift_means_backward() {
    assert_eq!(TabDirection::from_shift(true), TabDirection::Backward);
    assert_eq!(TabDirection::from_shift(false), TabDirection::Forward);
}

// =============================================================
// wrap_target
// =============================================================

#[test]
fn forward_from_last_wraps_to_first() {
    let scope = FocusScope::new(vec!["close", "repo", "article"]);
    assert_eq!(scope.wrap_target(Some(&"article"), TabDirection::Forward), Some(&"close"));
}

#[test]
fn backward_from_first_wraps_to_last() {
    let scope = FocusScope::new(vec!["close", "repo", "article"]);
    assert_eq!(scope.wrap_target(Some(&"close"), TabDirection::Backward), Some(&"article"));
}

#[test]
fn middle_items_are_left_to_browser() {
    let scope = FocusScope::new(vec!["close", "repo", "article"]);
    assert_eq!(scope.wrap_target(Some(&"repo"), TabDirection::Forward), None);
    assert_eq!(scope.wrap_target(Some(&"repo"), TabDirection::Backward), None);
}

#[test]
fn forward_from_first_and_backward_from_last_are_left_to_browser() {
    let scope = FocusScope::new(vec![1, 2, 3]);
    assert_eq!(scope.wrap_target(Some(&1), TabDirection::Forward), None);
    assert_eq!(scope.wrap_target(Some(&3), TabDirection::Backward), None);
}

#[test]
fn single_item_wraps_onto_itself() {
    let scope = FocusScope::new(vec!["close"]);
    assert_eq!(scope.wrap_target(Some(&"close"), TabDirection::Forward), Some(&"close"));
    assert_eq!(scope.wrap_target(Some(&"close"), TabDirection::Backward), Some(&"close"));
}

#[test]
fn empty_scope_never_traps() {
    let scope: FocusScope<u8> = FocusScope::new(Vec::new());
    assert_eq!(scope.wrap_target(Some(&1), TabDirection::Forward), None);
    assert_eq!(scope.wrap_target(Some(&1), TabDirection::Backward), None);
}

#[test]
fn focus_outside_scope_is_left_to_browser() {
    let scope = FocusScope::new(vec![1, 2, 3]);
    assert_eq!(scope.wrap_target(None, TabDirection::Forward), None);
    assert_eq!(scope.wrap_target(Some(&9), TabDirection::Backward), None);
}

// =============================================================
// FocusMemory
// =============================================================

#[test]
fn close_restores_element_focused_before_open() {
    let mut memory = FocusMemory::new();
    memory.remember(Some("post-link-2"));
    assert_eq!(memory.take(), Some("post-link-2"));
}

#[test]
fn restore_happens_once_per_open() {
    let mut memory = FocusMemory::new();
    memory.remember(Some(7));
    assert_eq!(memory.take(), Some(7));
    assert_eq!(memory.take(), None);
}

#[test]
fn reopening_replaces_remembered_element() {
    let mut memory = FocusMemory::new();
    memory.remember(Some("first"));
    memory.remember(Some("second"));
    assert_eq!(memory.take(), Some("second"));
}

#[test]
fn nothing_focused_at_open_restores_nothing() {
    let mut memory = FocusMemory::new();
    memory.remember(Some(1));
    memory.remember(None);
    assert_eq!(memory.take(), None);
}

#[test]
fn fresh_memory_is_empty() {
    let mut memory: FocusMemory<u8> = FocusMemory::default();
    assert_eq!(memory.take(), None);
}
