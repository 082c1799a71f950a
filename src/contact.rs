//! Contact form submission flow.
//!
//! Submission is simulated: a valid form shows an interim status, waits a
//! fixed delay, then reports success and resets. No request is sent.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::consts::{MSG_FORM_INVALID, MSG_FORM_SENDING, MSG_FORM_SENT};

/// Color role of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Alert,
    Muted,
    Success,
}

impl Tone {
    /// CSS color value for the status element.
    #[must_use]
    pub fn css_color(self) -> &'static str {
        match self {
            Self::Alert => "var(--accent)",
            Self::Muted => "var(--muted)",
            Self::Success => "var(--accent-2)",
        }
    }
}

/// Text and tone shown in the form's status region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub text: &'static str,
    pub tone: Tone,
}

impl StatusLine {
    pub const INVALID: Self = Self { text: MSG_FORM_INVALID, tone: Tone::Alert };
    pub const SENDING: Self = Self { text: MSG_FORM_SENDING, tone: Tone::Muted };
    pub const SENT: Self = Self { text: MSG_FORM_SENT, tone: Tone::Success };
}

/// What a submit attempt does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Validation failed: show the line and stop.
    Rejected(StatusLine),
    /// Show `interim`, wait `delay_ms`, show `done`, reset the fields.
    Accepted { interim: StatusLine, delay_ms: u32, done: StatusLine },
}

impl Submission {
    /// Decide the outcome from the form's built-in validity.
    #[must_use]
    pub fn evaluate(valid: bool, delay_ms: u32) -> Self {
        if valid {
            Self::Accepted { interim: StatusLine::SENDING, delay_ms, done: StatusLine::SENT }
        } else {
            Self::Rejected(StatusLine::INVALID)
        }
    }

    /// Whether the form fields are cleared at the end.
    #[must_use]
    pub fn resets_form(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
