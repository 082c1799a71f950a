use super::*;

// =============================================================
// fragment_selector
// =============================================================

#[test]
fn bare_or_empty_hash_is_left_to_browser() {
    assert_eq!(fragment_selector(None), None);
    assert_eq!(fragment_selector(Some("")), None);
    assert_eq!(fragment_selector(Some("#")), None);
}

#[test]
fn fragment_is_used_as_selector() {
    assert_eq!(fragment_selector(Some("#projects")), Some("#projects"));
}

#[test]
fn non_fragment_href_is_ignored() {
    assert_eq!(fragment_selector(Some("/blog/")), None);
}

// =============================================================
// Offsets
// =============================================================

#[test]
fn header_offset_uses_measurement() {
    assert!((header_offset(Some(64.0), 72.0) - 64.0).abs() < f64::EPSILON);
}

#[test]
fn header_offset_falls_back_when_missing_or_zero() {
    assert!((header_offset(None, 72.0) - 72.0).abs() < f64::EPSILON);
    assert!((header_offset(Some(0.0), 72.0) - 72.0).abs() < f64::EPSILON);
}

#[test]
fn scroll_top_subtracts_header_and_padding() {
    // Target 500px below the viewport top, page already scrolled 1000px.
    let top = scroll_top(500.0, 1000.0, 72.0, 8.0);
    assert!((top - 1420.0).abs() < f64::EPSILON);
}

#[test]
fn scroll_top_can_go_negative_near_page_start() {
    assert!(scroll_top(20.0, 0.0, 72.0, 8.0) < 0.0);
}
