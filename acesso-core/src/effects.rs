//! Derivation of visual effects from the preference record.
//!
//! Everything here is a pure function of [`AccessibilityPrefs`]; the web
//! layer applies the results to the DOM unconditionally after every
//! mutation, so each derivation must be idempotent and complete (stale
//! values from a prior state are overwritten, never left behind).

use crate::prefs::{AccessibilityPrefs, Dalton};

/// Marker classes toggled on the document body, in declaration order.
pub const MARKER_CLASSES: [&str; 5] = [
    "acess-night",
    "acess-dyslexia",
    "acess-reading",
    "acess-links",
    "acess-reduce-motion",
];

/// Pair each marker class with whether the record enables it.
///
/// Contrast and grayscale have no marker class; they are expressed through
/// the filter chain instead.
#[must_use]
pub fn marker_classes(prefs: &AccessibilityPrefs) -> [(&'static str, bool); 5] {
    [
        ("acess-night", prefs.night),
        ("acess-dyslexia", prefs.dyslexia),
        ("acess-reading", prefs.reading),
        ("acess-links", prefs.links),
        ("acess-reduce-motion", prefs.reduce_motion),
    ]
}

/// Compute the body filter value for the current record.
///
/// Entries compose in fixed order: contrast, grayscale, then the
/// color-blindness hue/saturation pair. The hue-rotate/saturate constants
/// are a visible-behavior contract; do not re-derive them. An empty chain
/// yields the literal `"none"` so a previously set filter is cleared.
#[must_use]
pub fn filter_chain(prefs: &AccessibilityPrefs) -> String {
    let mut filters: Vec<&str> = Vec::new();
    if prefs.contrast {
        filters.push("contrast(1.35)");
    }
    if prefs.grayscale {
        filters.push("grayscale(1)");
    }
    match prefs.dalton {
        Dalton::Prot => filters.push("hue-rotate(25deg) saturate(1.2)"),
        Dalton::Deut => filters.push("hue-rotate(320deg) saturate(1.1)"),
        Dalton::Trit => filters.push("hue-rotate(180deg) saturate(1.1)"),
        Dalton::None => {}
    }
    if filters.is_empty() {
        String::from("none")
    } else {
        filters.join(" ")
    }
}

/// Root font-size percentage for the current scale step.
#[must_use]
pub fn font_size_pct(prefs: &AccessibilityPrefs) -> i32 {
    100 + i32::from(AccessibilityPrefs::clamp_font_scale(prefs.font_scale)) * 10
}
