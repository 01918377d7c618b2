use serde::{Deserialize, Serialize};

/// Lowest font-size step a user can select.
pub const FONT_SCALE_MIN: i8 = -2;
/// Highest font-size step a user can select.
pub const FONT_SCALE_MAX: i8 = 4;

/// Color-blindness filter mode.
///
/// Exactly one mode is active at a time; the serialized names are part of
/// the persisted-record contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dalton {
    #[default]
    None,
    Prot,
    Deut,
    Trit,
}

/// The persisted accessibility preference record.
///
/// Every field carries `#[serde(default)]` so a record persisted by an
/// older build (or with keys missing) deserializes by default-filling the
/// gaps rather than failing. Field names are pinned to the storage layout.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccessibilityPrefs {
    #[serde(default)]
    pub contrast: bool,
    #[serde(default)]
    pub night: bool,
    #[serde(default)]
    pub grayscale: bool,
    #[serde(default, rename = "fontScale")]
    pub font_scale: i8,
    #[serde(default)]
    pub dalton: Dalton,
    #[serde(default)]
    pub dyslexia: bool,
    #[serde(default)]
    pub reading: bool,
    #[serde(default)]
    pub links: bool,
    #[serde(default, rename = "reduceMotion")]
    pub reduce_motion: bool,
}

/// A single user command against the preference record.
///
/// Every control on the page maps to exactly one action; all mutation of
/// [`AccessibilityPrefs`] flows through [`AccessibilityPrefs::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleContrast,
    ToggleNight,
    ToggleGrayscale,
    FontDecrease,
    FontIncrease,
    FontReset,
    SetDalton(Dalton),
    ToggleDyslexia,
    ToggleReading,
    ToggleLinks,
    ToggleReduceMotion,
    Reset,
}

impl AccessibilityPrefs {
    /// Clamp the font-scale step to its valid range.
    #[must_use]
    pub fn clamp_font_scale(value: i8) -> i8 {
        value.clamp(FONT_SCALE_MIN, FONT_SCALE_MAX)
    }

    /// Apply one action to the record.
    ///
    /// Font operations saturate at the scale bounds; `SetDalton` is
    /// mutually exclusive by construction (the field is a single enum);
    /// `Reset` restores the default record wholesale.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::ToggleContrast => self.contrast = !self.contrast,
            Action::ToggleNight => self.night = !self.night,
            Action::ToggleGrayscale => self.grayscale = !self.grayscale,
            Action::FontDecrease => {
                self.font_scale = Self::clamp_font_scale(self.font_scale.saturating_sub(1));
            }
            Action::FontIncrease => {
                self.font_scale = Self::clamp_font_scale(self.font_scale.saturating_add(1));
            }
            Action::FontReset => self.font_scale = 0,
            Action::SetDalton(mode) => self.dalton = mode,
            Action::ToggleDyslexia => self.dyslexia = !self.dyslexia,
            Action::ToggleReading => self.reading = !self.reading,
            Action::ToggleLinks => self.links = !self.links,
            Action::ToggleReduceMotion => self.reduce_motion = !self.reduce_motion,
            Action::Reset => *self = Self::default(),
        }
        // A record loaded from storage may carry an out-of-range scale.
        self.font_scale = Self::clamp_font_scale(self.font_scale);
    }
}
