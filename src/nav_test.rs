use super::*;

fn open_machine() -> NavMachine {
    let mut nav = NavMachine::default();
    nav.handle(NavEvent::ToggleClicked);
    nav
}

// =============================================================
// NavState
// =============================================================

#[test]
fn state_from_expanded_attr() {
    assert_eq!(NavState::from_expanded_attr(Some("true")), NavState::Open);
    assert_eq!(NavState::from_expanded_attr(Some("false")), NavState::Closed);
    assert_eq!(NavState::from_expanded_attr(None), NavState::Closed);
    assert_eq!(NavState::from_expanded_attr(Some("TRUE")), NavState::Closed);
}

#[test]
fn machine_starts_closed() {
    assert!(!NavMachine::default().is_open());
    assert_eq!(NavMachine::default().sync(), NavEffects { open: false, focus: FocusTarget::Keep });
}

// =============================================================
// Opening
// =============================================================

#[test]
fn toggle_opens_and_focuses_first_link() {
    let mut nav = NavMachine::default();
    let fx = nav.handle(NavEvent::ToggleClicked).unwrap();
    assert!(nav.is_open());
    assert!(fx.open);
    assert_eq!(fx.expanded_attr(), "true");
    assert_eq!(fx.label(), "Cerrar menú");
    assert!(fx.scroll_locked());
    assert_eq!(fx.focus, FocusTarget::FirstLink);
}

#[test]
fn closed_menu_ignores_dismiss_events() {
    let mut nav = NavMachine::default();
    for event in [NavEvent::LinkSelected, NavEvent::Escape, NavEvent::OutsideClick, NavEvent::Resized { width: 2000.0 }] {
        assert_eq!(nav.handle(event), None);
        assert!(!nav.is_open());
    }
}

// =============================================================
// Closing
// =============================================================

#[test]
fn toggle_escape_and_outside_click_return_focus_to_toggle() {
    for event in [NavEvent::ToggleClicked, NavEvent::Escape, NavEvent::OutsideClick] {
        let mut nav = open_machine();
        let fx = nav.handle(event).unwrap();
        assert!(!nav.is_open());
        assert_eq!(fx.focus, FocusTarget::Toggle);
        assert_eq!(fx.expanded_attr(), "false");
        assert_eq!(fx.label(), "Abrir menú");
        assert!(!fx.scroll_locked());
    }
}

#[test]
fn link_selection_closes_without_stealing_focus() {
    let mut nav = open_machine();
    let fx = nav.handle(NavEvent::LinkSelected).unwrap();
    assert!(!fx.open);
    assert_eq!(fx.focus, FocusTarget::Keep);
}

#[test]
fn resize_above_breakpoint_closes() {
    let mut nav = open_machine();
    let fx = nav.handle(NavEvent::Resized { width: 901.0 }).unwrap();
    assert!(!fx.open);
    assert_eq!(fx.focus, FocusTarget::Keep);
}

#[test]
fn resize_at_or_below_breakpoint_keeps_open() {
    let mut nav = open_machine();
    assert_eq!(nav.handle(NavEvent::Resized { width: 900.0 }), None);
    assert_eq!(nav.handle(NavEvent::Resized { width: 320.0 }), None);
    assert!(nav.is_open());
}

#[test]
fn custom_breakpoint_is_honored() {
    let mut nav = NavMachine::new(NavState::Open, 1200.0);
    assert_eq!(nav.handle(NavEvent::Resized { width: 1000.0 }), None);
    assert!(nav.handle(NavEvent::Resized { width: 1300.0 }).is_some());
}

// =============================================================
// Invariants
// =============================================================

#[test]
fn every_transition_keeps_attr_and_class_in_step() {
    let events = [
        NavEvent::ToggleClicked,
        NavEvent::LinkSelected,
        NavEvent::ToggleClicked,
        NavEvent::Escape,
        NavEvent::ToggleClicked,
        NavEvent::OutsideClick,
        NavEvent::ToggleClicked,
        NavEvent::Resized { width: 1400.0 },
        NavEvent::ToggleClicked,
        NavEvent::ToggleClicked,
    ];
    let mut nav = NavMachine::default();
    for event in events {
        if let Some(fx) = nav.handle(event) {
            assert_eq!(fx.expanded_attr() == "true", fx.open);
            assert_eq!(fx.open, nav.is_open());
            assert_eq!(fx.scroll_locked(), nav.is_open());
        }
    }
}

#[test]
fn sync_reflects_state_without_focus_change() {
    let nav = NavMachine::new(NavState::Open, 900.0);
    assert_eq!(nav.sync(), NavEffects { open: true, focus: FocusTarget::Keep });
}

#[test]
fn escape_key_aliases() {
    assert!(is_escape_key("Escape"));
    assert!(is_escape_key("Esc"));
    assert!(!is_escape_key("Enter"));
}
