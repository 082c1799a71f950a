//! Page configuration parsed from a `<meta name="portfolio-config">` tag.
//!
//! Every field is optional. The page may supply a JSON object such as
//! `{"icon_set": "lamp", "nav_breakpoint_px": 1024}`; omitted fields keep
//! their defaults from [`crate::consts`].
//!
//! Fields:
//! - `storage_key`: `localStorage` key for the theme flag (default `ll_theme`)
//! - `icon_set`: `sun-moon` (default) or `lamp`; unknown ids fall back to `sun-moon`
//! - `nav_breakpoint_px`: width above which the open menu auto-closes (default 900)
//! - `resize_debounce_ms`: default 120
//! - `submit_delay_ms`: simulated contact form latency (default 900)
//! - `scroll_padding_px`: default 8
//! - `fallback_header_px`: default 72
//! - `post_path_prefix`: prefix for slug-derived post URLs (default `/blog/`)
//! - `log_level`: `error`, `warn`, `info` (default), `debug` or `trace`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::icons::IconSet;

/// Errors produced while reading the page configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The meta content is not a valid JSON object of the expected shape.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// A field parsed but holds an unusable value.
    #[error("invalid config field {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub storage_key: String,
    pub icon_set: String,
    pub nav_breakpoint_px: f64,
    pub resize_debounce_ms: u32,
    pub submit_delay_ms: u32,
    pub scroll_padding_px: f64,
    pub fallback_header_px: f64,
    pub post_path_prefix: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            icon_set: IconSet::default().id().to_owned(),
            nav_breakpoint_px: consts::NAV_BREAKPOINT_PX,
            resize_debounce_ms: consts::RESIZE_DEBOUNCE_MS,
            submit_delay_ms: consts::SUBMIT_DELAY_MS,
            scroll_padding_px: consts::SCROLL_PADDING_PX,
            fallback_header_px: consts::FALLBACK_HEADER_PX,
            post_path_prefix: consts::POST_PATH_PREFIX.to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl Config {
    /// Parse and validate the JSON carried by the config meta tag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Invalid`] for values that fail validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the optional meta content, treating absence as "all defaults".
    ///
    /// # Errors
    ///
    /// Propagates [`Config::from_json`] errors for present content.
    pub fn from_meta(content: Option<&str>) -> Result<Self, ConfigError> {
        match content.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(raw) => Self::from_json(raw),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::Invalid { field: "storage_key", reason: "must not be empty".into() });
        }
        if !(self.nav_breakpoint_px.is_finite() && self.nav_breakpoint_px > 0.0) {
            return Err(ConfigError::Invalid {
                field: "nav_breakpoint_px",
                reason: format!("expected a positive width, got {}", self.nav_breakpoint_px),
            });
        }
        for (field, value) in [("scroll_padding_px", self.scroll_padding_px), ("fallback_header_px", self.fallback_header_px)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid { field, reason: format!("expected a non-negative length, got {value}") });
            }
        }
        if !self.post_path_prefix.starts_with('/') {
            return Err(ConfigError::Invalid {
                field: "post_path_prefix",
                reason: format!("must start with '/', got {:?}", self.post_path_prefix),
            });
        }
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::Invalid { field: "log_level", reason: format!("unknown level {:?}", self.log_level) })?;
        Ok(())
    }

    /// The configured icon set; unknown ids resolve to the default set.
    #[must_use]
    pub fn icon_set(&self) -> IconSet {
        IconSet::from_id(&self.icon_set)
    }

    /// The configured log level, `Info` when unparseable.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
