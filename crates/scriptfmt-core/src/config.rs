//! Formatting configuration.
//!
//! [`FormatConfig`] is a caller-owned value object: the engine never mutates
//! it. Size percentages are validated on assignment; an out-of-range value
//! resets the field to its compiled-in default instead of erroring, so a
//! config is fully self-consistent at all times.

use serde::{Deserialize, Serialize};

/// Default superscript size, in percent of the base text size.
pub const DEFAULT_SUPERSCRIPT_SIZE: f32 = 60.0;
/// Default subscript size, in percent of the base text size.
pub const DEFAULT_SUBSCRIPT_SIZE: f32 = 60.0;
/// Default fraction size, in percent of the base text size.
pub const DEFAULT_FRACTION_SIZE: f32 = 70.0;

/// Options controlling the formatting pipeline.
///
/// The five `convert_*` toggles enable or disable individual rewrite passes;
/// all default to enabled. Sizes are kept private so every assignment goes
/// through validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawConfig")]
pub struct FormatConfig {
    superscript_size: f32,
    subscript_size: f32,
    fraction_size: f32,
    /// Convert Unicode super/subscript glyphs (`x²` style).
    pub convert_unicode: bool,
    /// Convert caret exponents (`x^2`, `e^{i*pi}`).
    pub convert_caret: bool,
    /// Convert underscore subscripts (`a_0`, `x_{n}`).
    pub convert_underscore: bool,
    /// Convert bare fractions (`1/2`, `(n+1)/(n)`).
    pub convert_fractions: bool,
    /// Convert chemical formula digits (`H2O`, `CO2`).
    pub convert_chemical_formulas: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            superscript_size: DEFAULT_SUPERSCRIPT_SIZE,
            subscript_size: DEFAULT_SUBSCRIPT_SIZE,
            fraction_size: DEFAULT_FRACTION_SIZE,
            convert_unicode: true,
            convert_caret: true,
            convert_underscore: true,
            convert_fractions: true,
            convert_chemical_formulas: true,
        }
    }
}

impl FormatConfig {
    /// Creates a config with all passes enabled and default sizes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Superscript size in percent of the base text size.
    pub fn superscript_size(&self) -> f32 {
        self.superscript_size
    }

    /// Subscript size in percent of the base text size.
    pub fn subscript_size(&self) -> f32 {
        self.subscript_size
    }

    /// Fraction size in percent of the base text size.
    pub fn fraction_size(&self) -> f32 {
        self.fraction_size
    }

    /// Sets the superscript size. Values outside `(0, 200]` reset the field
    /// to [`DEFAULT_SUPERSCRIPT_SIZE`].
    pub fn set_superscript_size(&mut self, pct: f32) {
        self.superscript_size = validate_size(pct, DEFAULT_SUPERSCRIPT_SIZE, "superscript");
    }

    /// Sets the subscript size. Values outside `(0, 200]` reset the field
    /// to [`DEFAULT_SUBSCRIPT_SIZE`].
    pub fn set_subscript_size(&mut self, pct: f32) {
        self.subscript_size = validate_size(pct, DEFAULT_SUBSCRIPT_SIZE, "subscript");
    }

    /// Sets the fraction size. Values outside `(0, 200]` reset the field
    /// to [`DEFAULT_FRACTION_SIZE`].
    pub fn set_fraction_size(&mut self, pct: f32) {
        self.fraction_size = validate_size(pct, DEFAULT_FRACTION_SIZE, "fraction");
    }
}

fn validate_size(pct: f32, default: f32, field: &str) -> f32 {
    if pct > 0.0 && pct <= 200.0 {
        pct
    } else {
        log::warn!("{field} size {pct}% is outside (0, 200]; using default {default}%");
        default
    }
}

/// Deserialization shadow of [`FormatConfig`]; funnels incoming sizes through
/// the same validation as the setters.
#[derive(Deserialize)]
#[serde(default)]
struct RawConfig {
    superscript_size: f32,
    subscript_size: f32,
    fraction_size: f32,
    convert_unicode: bool,
    convert_caret: bool,
    convert_underscore: bool,
    convert_fractions: bool,
    convert_chemical_formulas: bool,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            superscript_size: DEFAULT_SUPERSCRIPT_SIZE,
            subscript_size: DEFAULT_SUBSCRIPT_SIZE,
            fraction_size: DEFAULT_FRACTION_SIZE,
            convert_unicode: true,
            convert_caret: true,
            convert_underscore: true,
            convert_fractions: true,
            convert_chemical_formulas: true,
        }
    }
}

impl From<RawConfig> for FormatConfig {
    fn from(raw: RawConfig) -> Self {
        let mut config = FormatConfig {
            convert_unicode: raw.convert_unicode,
            convert_caret: raw.convert_caret,
            convert_underscore: raw.convert_underscore,
            convert_fractions: raw.convert_fractions,
            convert_chemical_formulas: raw.convert_chemical_formulas,
            ..FormatConfig::default()
        };
        config.set_superscript_size(raw.superscript_size);
        config.set_subscript_size(raw.subscript_size);
        config.set_fraction_size(raw.fraction_size);
        config
    }
}
