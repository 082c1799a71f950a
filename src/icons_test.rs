use super::*;

// =============================================================
// IconSet
// =============================================================

#[test]
fn icon_set_from_id_known() {
    assert_eq!(IconSet::from_id("sun-moon"), IconSet::SunMoon);
    assert_eq!(IconSet::from_id("lamp"), IconSet::Lamp);
}

#[test]
fn icon_set_from_id_unknown_falls_back() {
    assert_eq!(IconSet::from_id(""), IconSet::SunMoon);
    assert_eq!(IconSet::from_id("LAMP"), IconSet::SunMoon);
}

#[test]
fn icon_set_id_round_trips() {
    for set in [IconSet::SunMoon, IconSet::Lamp] {
        assert_eq!(IconSet::from_id(set.id()), set);
    }
}

#[test]
fn each_set_has_distinct_light_and_dark_icons() {
    for set in [IconSet::SunMoon, IconSet::Lamp] {
        assert_ne!(set.icon(false), set.icon(true));
    }
}

// =============================================================
// Markup
// =============================================================

#[test]
fn sun_markup_has_core_and_eight_rays() {
    let svg = IconSet::SunMoon.icon(false).markup();
    assert!(svg.starts_with("<svg viewBox=\"0 0 24 24\""));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r#"<circle cx="12" cy="12" r="4.2" fill="currentColor"/>"#));
    assert_eq!(svg.matches("<path d=").count(), 8);
    assert_eq!(svg.matches("<g stroke=\"currentColor\"").count(), 2);
}

#[test]
fn moon_markup_is_single_filled_path() {
    let svg = IconSet::SunMoon.icon(true).markup();
    assert_eq!(svg.matches("<path").count(), 1);
    assert!(svg.contains(r#"fill="currentColor" d="M21 12.79"#));
    assert!(!svg.contains("<g"));
}

#[test]
fn markup_is_hidden_from_assistive_tech() {
    for set in [IconSet::SunMoon, IconSet::Lamp] {
        for dark in [false, true] {
            let svg = set.icon(dark).markup();
            assert!(svg.contains(r#"aria-hidden="true""#));
            assert!(svg.contains(r#"focusable="false""#));
        }
    }
}

#[test]
fn lit_lamp_has_two_paths() {
    let svg = IconSet::Lamp.icon(true).markup();
    assert_eq!(svg.matches("<path fill=\"currentColor\"").count(), 2);
}

// =============================================================
// Swap plan
// =============================================================

#[test]
fn swap_plan_marks_then_sets_then_clears() {
    let swap = IconSwap::plan(IconSet::SunMoon, true);
    assert_eq!(swap.immediate, IconEffect::MarkChanging);
    assert_eq!(swap.steps[0].after_ms, 40);
    assert_eq!(swap.steps[0].effect, IconEffect::SetMarkup(IconSet::SunMoon.icon(true).markup()));
    assert_eq!(swap.steps[1].after_ms, 340);
    assert_eq!(swap.steps[1].effect, IconEffect::ClearChanging);
    assert_eq!(swap.steps.iter().map(|s| s.after_ms).sum::<u32>(), 380);
}

#[test]
fn swap_plan_is_deterministic() {
    assert_eq!(IconSwap::plan(IconSet::Lamp, false), IconSwap::plan(IconSet::Lamp, false));
}

#[test]
fn swap_plan_custom_timing() {
    let swap = IconSwap::with_timing(IconSet::Lamp, false, 0, 10);
    assert_eq!(swap.steps[0].after_ms, 0);
    assert_eq!(swap.steps[1].after_ms, 10);
    assert_eq!(swap.steps[0].effect, IconEffect::SetMarkup(IconSet::Lamp.icon(false).markup()));
}
