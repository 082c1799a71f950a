use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_page_constants() {
    let config = Config::default();
    assert_eq!(config.storage_key, "ll_theme");
    assert_eq!(config.icon_set(), IconSet::SunMoon);
    assert!((config.nav_breakpoint_px - 900.0).abs() < f64::EPSILON);
    assert_eq!(config.resize_debounce_ms, 120);
    assert_eq!(config.submit_delay_ms, 900);
    assert_eq!(config.post_path_prefix, "/blog/");
    assert_eq!(config.log_level(), log::Level::Info);
}

#[test]
fn absent_meta_yields_defaults() {
    assert_eq!(Config::from_meta(None), Ok(Config::default()));
    assert_eq!(Config::from_meta(Some("   ")), Ok(Config::default()));
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn partial_json_overrides_only_named_fields() {
    let config = Config::from_json(r#"{"icon_set": "lamp", "nav_breakpoint_px": 1024}"#).unwrap();
    assert_eq!(config.icon_set(), IconSet::Lamp);
    assert!((config.nav_breakpoint_px - 1024.0).abs() < f64::EPSILON);
    assert_eq!(config.storage_key, "ll_theme");
    assert_eq!(config.submit_delay_ms, 900);
}

#[test]
fn unknown_icon_set_falls_back_to_default() {
    let config = Config::from_json(r#"{"icon_set": "neon"}"#).unwrap();
    assert_eq!(config.icon_set(), IconSet::SunMoon);
}

#[test]
fn malformed_json_is_parse_error() {
    assert!(matches!(Config::from_json("{icon_set:"), Err(ConfigError::Parse(_))));
}

#[test]
fn unknown_field_is_parse_error() {
    assert!(matches!(Config::from_json(r#"{"colour": "red"}"#), Err(ConfigError::Parse(_))));
}

#[test]
fn log_level_is_case_insensitive() {
    let config = Config::from_json(r#"{"log_level": "DEBUG"}"#).unwrap();
    assert_eq!(config.log_level(), log::Level::Debug);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn zero_breakpoint_is_rejected() {
    let err = Config::from_json(r#"{"nav_breakpoint_px": 0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "nav_breakpoint_px", .. }));
}

#[test]
fn negative_padding_is_rejected() {
    let err = Config::from_json(r#"{"scroll_padding_px": -1}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "scroll_padding_px", .. }));
}

#[test]
fn relative_post_prefix_is_rejected() {
    let err = Config::from_json(r#"{"post_path_prefix": "blog/"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "post_path_prefix", .. }));
}

#[test]
fn empty_storage_key_is_rejected() {
    let err = Config::from_json(r#"{"storage_key": ""}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "storage_key", .. }));
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = Config::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "log_level", .. }));
    assert!(err.to_string().contains("loud"));
}
