//! Adjustment options.
//!
//! Options only affect how bearings are reported and how the display
//! rendering is formatted. The adjustment arithmetic is the same for every
//! combination.

use serde::Deserialize;

/// How input bearings are carried into the results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BearingInput {
    /// Report bearings exactly as entered, e.g. -30 or 400.
    #[default]
    AsGiven,
    /// Fold bearings into [0, 360) when the legs are parsed.
    Normalized,
}

impl BearingInput {
    /// Parse from a string name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "as_given" | "asgiven" | "raw" => Some(Self::AsGiven),
            "normalized" | "normalised" | "normalize" => Some(Self::Normalized),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdjustOptions {
    pub bearings: BearingInput,
    /// Decimals for lengths and corrections in the display rendering.
    pub length_decimals: usize,
    /// Decimals for leg bearings in the display rendering.
    pub bearing_decimals: usize,
    /// Decimals for the closing-error bearing in the display rendering.
    pub error_bearing_decimals: usize,
}

impl Default for AdjustOptions {
    fn default() -> Self {
        Self {
            bearings: BearingInput::AsGiven,
            length_decimals: 3,
            bearing_decimals: 3,
            error_bearing_decimals: 2,
        }
    }
}

impl AdjustOptions {
    pub fn with_bearings(mut self, bearings: BearingInput) -> Self {
        self.bearings = bearings;
        self
    }
}
