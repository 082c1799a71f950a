//! Theme toggle icons.
//!
//! Icons are static descriptors (a list of SVG layers) rather than markup
//! strings, and [`Icon::markup`] renders them. The swap animation is a plan,
//! [`IconSwap`], that the browser bindings execute step by step.
//!
//! The icon shows the *current* theme: a sun (or unlit lamp) for light, a
//! moon (or lit lamp) for dark.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use crate::consts::{ICON_SWAP_DELAY_MS, ICON_SWAP_HOLD_MS};

/// One SVG primitive, filled or stroked with `currentColor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled circle.
    Circle { cx: f32, cy: f32, r: f32 },
    /// Path drawn by the enclosing layer's stroke.
    Stroke(&'static str),
    /// Filled path.
    Fill(&'static str),
}

/// A group of shapes sharing presentation attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layer {
    /// Wrapped in a rounded `currentColor` stroke group.
    Stroked(&'static [Shape]),
    /// Emitted as-is.
    Plain(&'static [Shape]),
}

/// A 24×24 icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icon {
    pub layers: &'static [Layer],
}

const SUN: Icon = Icon {
    layers: &[
        Layer::Stroked(&[Shape::Circle { cx: 12.0, cy: 12.0, r: 4.2 }]),
        Layer::Stroked(&[
            Shape::Stroke("M12 1.75v2.5"),
            Shape::Stroke("M12 19.75v2.5"),
            Shape::Stroke("M4.22 4.22l1.77 1.77"),
            Shape::Stroke("M17.99 17.99l1.77 1.77"),
            Shape::Stroke("M1.75 12h2.5"),
            Shape::Stroke("M19.75 12h2.5"),
            Shape::Stroke("M4.22 19.78l1.77-1.77"),
            Shape::Stroke("M17.99 6.01l1.77-1.77"),
        ]),
    ],
};

const MOON: Icon = Icon {
    layers: &[Layer::Plain(&[Shape::Fill("M21 12.79A9 9 0 1111.21 3 7 7 0 0021 12.79z")])],
};

const LAMP_OFF: Icon = Icon {
    layers: &[Layer::Plain(&[Shape::Fill("M9 21h6v-1a3 3 0 00-6 0v1zM13 7a3 3 0 10-2 5.196V14h2v-1.804A3 3 0 0013 7z")])],
};

const LAMP_ON: Icon = Icon {
    layers: &[Layer::Plain(&[
        Shape::Fill("M12 2a5 5 0 00-5 5c0 2.5 2 4.5 4.5 4.95V14h1v-2.05A4.99 4.99 0 0017 7a5 5 0 00-5-5z"),
        Shape::Fill("M9 21h6v-1a3 3 0 00-6 0v1z"),
    ])],
};

/// Built-in icon pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSet {
    #[default]
    SunMoon,
    Lamp,
}

impl IconSet {
    /// Resolve a configured id; unknown ids get the default set.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id {
            "lamp" => Self::Lamp,
            "sun-moon" => Self::SunMoon,
            other => {
                log::debug!("icons: unknown icon set {other:?}, using default");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::SunMoon => "sun-moon",
            Self::Lamp => "lamp",
        }
    }

    /// Icon shown for the given theme state.
    #[must_use]
    pub fn icon(self, dark: bool) -> Icon {
        match (self, dark) {
            (Self::SunMoon, false) => SUN,
            (Self::SunMoon, true) => MOON,
            (Self::Lamp, false) => LAMP_OFF,
            (Self::Lamp, true) => LAMP_ON,
        }
    }
}

const STROKE_ATTRS: &str =
    r#"stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round""#;

impl Icon {
    /// Inline SVG for this icon, hidden from assistive technology.
    #[must_use]
    pub fn markup(&self) -> String {
        let mut out = String::from(
            r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" aria-hidden="true" focusable="false">"#,
        );
        for layer in self.layers {
            match layer {
                Layer::Stroked(shapes) => {
                    out.push_str(&format!("<g {STROKE_ATTRS}>"));
                    push_shapes(&mut out, shapes);
                    out.push_str("</g>");
                }
                Layer::Plain(shapes) => push_shapes(&mut out, shapes),
            }
        }
        out.push_str("</svg>");
        out
    }
}

fn push_shapes(out: &mut String, shapes: &[Shape]) {
    for shape in shapes {
        let element = match shape {
            Shape::Circle { cx, cy, r } => format!(r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="currentColor"/>"#),
            Shape::Stroke(d) => format!(r#"<path d="{d}"/>"#),
            Shape::Fill(d) => format!(r#"<path fill="currentColor" d="{d}"/>"#),
        };
        out.push_str(&element);
    }
}

// =============================================================================
// SWAP ANIMATION
// =============================================================================

/// A single DOM effect of an icon swap.
#[derive(Debug, Clone, PartialEq)]
pub enum IconEffect {
    /// Add the transient `changing` class to the toggle.
    MarkChanging,
    /// Replace the icon slot's content with this markup.
    SetMarkup(String),
    /// Remove the `changing` class.
    ClearChanging,
}

/// An effect to run `after_ms` after the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledEffect {
    pub after_ms: u32,
    pub effect: IconEffect,
}

/// Swap plan: one immediate effect followed by two delayed steps.
///
/// Overlapping plans are harmless since every effect is idempotent and the
/// last markup written wins.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSwap {
    pub immediate: IconEffect,
    pub steps: [ScheduledEffect; 2],
}

impl IconSwap {
    /// Plan the swap to the icon for `dark` using the default timing.
    #[must_use]
    pub fn plan(set: IconSet, dark: bool) -> Self {
        Self::with_timing(set, dark, ICON_SWAP_DELAY_MS, ICON_SWAP_HOLD_MS)
    }

    #[must_use]
    pub fn with_timing(set: IconSet, dark: bool, delay_ms: u32, hold_ms: u32) -> Self {
        Self {
            immediate: IconEffect::MarkChanging,
            steps: [
                ScheduledEffect { after_ms: delay_ms, effect: IconEffect::SetMarkup(set.icon(dark).markup()) },
                ScheduledEffect { after_ms: hold_ms, effect: IconEffect::ClearChanging },
            ],
        }
    }
}
