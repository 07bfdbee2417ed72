//! Pass orchestration.
//!
//! [`format`] runs the enabled passes in a fixed order, each one consuming
//! the full output of the previous. The order is part of the contract:
//! Unicode glyphs are tagged first so later passes never re-match a digit
//! that already sits inside generated markup, and the chemical pass runs
//! last because it is the only one that has to look at tag boundaries.

use crate::config::FormatConfig;
use crate::passes;

/// Formats `input`, rewriting every enabled notation into markup.
///
/// An empty input returns an empty string. Callers holding an optional
/// string get the absent-in/absent-out behavior with `Option::map`:
///
/// ```
/// use scriptfmt_core::{format, FormatConfig};
///
/// let config = FormatConfig::default();
/// let text: Option<&str> = None;
/// assert_eq!(text.map(|t| format(t, &config)), None);
/// ```
pub fn format(input: &str, config: &FormatConfig) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut text = input.to_string();
    if config.convert_unicode {
        text = passes::unicode_pass(&text, config);
    }
    if config.convert_caret {
        text = passes::caret_pass(&text, config);
    }
    if config.convert_underscore {
        text = passes::underscore_pass(&text, config);
    }
    if config.convert_fractions {
        text = passes::fraction_pass(&text, config);
    }
    if config.convert_chemical_formulas {
        text = passes::chemical_pass(&text, config);
    }
    log::debug!("formatted {} bytes into {} bytes", input.len(), text.len());
    text
}

/// [`format`] with the default configuration.
pub fn format_default(input: &str) -> String {
    format(input, &FormatConfig::default())
}
