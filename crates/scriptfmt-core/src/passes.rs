//! The five rewrite passes.
//!
//! Each pass is a pure `&str -> String` transform parameterized by
//! [`FormatConfig`]: it replaces every non-overlapping match with generated
//! markup and lets everything else through untouched. Malformed notation
//! (empty exponent, empty fraction operand) is left as literal text rather
//! than dropped or half-converted.
//!
//! Pass order matters and is owned by [`crate::pipeline`]; the passes
//! themselves make no assumptions about each other except for the chemical
//! pass's tag guard, documented below.

use crate::config::FormatConfig;
use crate::{glyphs, markup};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `^` followed by a brace group, a paren group, or a maximal run of word
/// characters, `+`, or `-`.
static CARET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\^(\{[^{}]*\}|\([^()]*\)|[\w+-]+)").unwrap());

/// `_` followed by the same operand shapes as [`CARET`].
static UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_(\{[^{}]*\}|\([^()]*\)|[\w+-]+)").unwrap());

/// `A/B` where each operand is a digit run, a paren group, or a brace group.
static FRACTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+|\([^()]*\)|\{[^{}]*\})/(\d+|\([^()]*\)|\{[^{}]*\})").unwrap()
});

/// An element token (one uppercase letter, optionally one lowercase letter)
/// immediately followed by a digit run.
static ELEMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z][a-z]?)(\d+)").unwrap());

/// Strips at most one layer of enclosing `{}` or `()` delimiters.
fn strip_delimiters(operand: &str) -> &str {
    let stripped = operand
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .or_else(|| operand.strip_prefix('(').and_then(|s| s.strip_suffix(')')));
    stripped.unwrap_or(operand)
}

/// Replaces every known Unicode super/subscript glyph with markup around its
/// ASCII base character. Runs character by character; unmapped characters
/// pass through unchanged.
pub fn unicode_pass(input: &str, config: &FormatConfig) -> String {
    let mut out = String::with_capacity(input.len());
    let mut buf = [0u8; 4];
    for c in input.chars() {
        if let Some(base) = glyphs::superscript_base(c) {
            let base = base.encode_utf8(&mut buf);
            out.push_str(&markup::superscript(base, config.superscript_size()));
        } else if let Some(base) = glyphs::subscript_base(c) {
            let base = base.encode_utf8(&mut buf);
            out.push_str(&markup::subscript(base, config.subscript_size()));
        } else {
            out.push(c);
        }
    }
    out
}

/// Rewrites caret exponents (`x^2`, `e^{i*pi}`, `2^(n-1)`) into superscript
/// markup. An empty operand (`x^{}`) leaves the match as literal text.
pub fn caret_pass(input: &str, config: &FormatConfig) -> String {
    let size = config.superscript_size();
    CARET
        .replace_all(input, |caps: &Captures<'_>| {
            let content = strip_delimiters(&caps[1]);
            if content.is_empty() {
                caps[0].to_string()
            } else {
                markup::superscript(content, size)
            }
        })
        .into_owned()
}

/// Rewrites underscore subscripts (`a_0`, `x_{n+1}`) into subscript markup.
/// Matching and delimiter stripping mirror [`caret_pass`].
pub fn underscore_pass(input: &str, config: &FormatConfig) -> String {
    let size = config.subscript_size();
    UNDERSCORE
        .replace_all(input, |caps: &Captures<'_>| {
            let content = strip_delimiters(&caps[1]);
            if content.is_empty() {
                caps[0].to_string()
            } else {
                markup::subscript(content, size)
            }
        })
        .into_owned()
}

/// Rewrites bare fractions (`1/2`, `(n+1)/(n)`) into superscript/subscript
/// markup. An operand left empty after delimiter stripping leaves the whole
/// match as literal text.
pub fn fraction_pass(input: &str, config: &FormatConfig) -> String {
    let size = config.fraction_size();
    FRACTION
        .replace_all(input, |caps: &Captures<'_>| {
            let numerator = strip_delimiters(&caps[1]);
            let denominator = strip_delimiters(&caps[2]);
            if numerator.is_empty() || denominator.is_empty() {
                caps[0].to_string()
            } else {
                markup::fraction(numerator, denominator, size)
            }
        })
        .into_owned()
}

/// Rewrites chemical formula digits (`H2O`, `CO2`) into subscript markup.
/// Only the digit run is wrapped; the element letters stay as plain text.
///
/// Earlier passes leave tag text with embedded digits in the buffer (size
/// percentages, stripped exponents), so a match that lies between a `<` and
/// the next `>` is rejected. The guard tracks raw angle brackets rather than
/// parsing a tag tree; literal `<`/`>` in the input participate like tag
/// delimiters do.
pub fn chemical_pass(input: &str, config: &FormatConfig) -> String {
    let size = config.subscript_size();
    let mut out = String::with_capacity(input.len());
    let mut inside_tag = false;
    let mut scanned = 0;
    let mut last = 0;
    for caps in ELEMENT.captures_iter(input) {
        let m = caps.get(0).unwrap();
        for c in input[scanned..m.start()].chars() {
            match c {
                '<' => inside_tag = true,
                '>' => inside_tag = false,
                _ => {}
            }
        }
        scanned = m.end();
        if inside_tag {
            continue;
        }
        out.push_str(&input[last..m.start()]);
        out.push_str(&caps[1]);
        out.push_str(&markup::subscript(&caps[2], size));
        last = m.end();
    }
    out.push_str(&input[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FormatConfig {
        FormatConfig::default()
    }

    #[test]
    fn test_strip_delimiters() {
        assert_eq!(strip_delimiters("{n+1}"), "n+1");
        assert_eq!(strip_delimiters("(ab)"), "ab");
        assert_eq!(strip_delimiters("42"), "42");
        // Only one layer comes off.
        assert_eq!(strip_delimiters("{(x)}"), "(x)");
        // Mismatched delimiters stay put.
        assert_eq!(strip_delimiters("{x)"), "{x)");
    }

    #[test]
    fn test_unicode_pass() {
        assert_eq!(
            unicode_pass("x²", &config()),
            "x<sup><size=60%>2</size></sup>"
        );
        assert_eq!(
            unicode_pass("A₀", &config()),
            "A<sub><size=60%>0</size></sub>"
        );
        assert_eq!(unicode_pass("plain text", &config()), "plain text");
    }

    #[test]
    fn test_caret_bare_run() {
        assert_eq!(
            caret_pass("E = mc^2", &config()),
            "E = mc<sup><size=60%>2</size></sup>"
        );
        // Maximal run includes +, - and word characters.
        assert_eq!(
            caret_pass("x^n+1", &config()),
            "x<sup><size=60%>n+1</size></sup>"
        );
    }

    #[test]
    fn test_caret_delimited_groups() {
        assert_eq!(
            caret_pass("e^{i*pi}", &config()),
            "e<sup><size=60%>i*pi</size></sup>"
        );
        assert_eq!(
            caret_pass("2^(n-1)", &config()),
            "2<sup><size=60%>n-1</size></sup>"
        );
    }

    #[test]
    fn test_caret_empty_operand_is_literal() {
        assert_eq!(caret_pass("x^", &config()), "x^");
        assert_eq!(caret_pass("x^{}", &config()), "x^{}");
        assert_eq!(caret_pass("x^()", &config()), "x^()");
    }

    #[test]
    fn test_underscore_pass() {
        assert_eq!(
            underscore_pass("a_0", &config()),
            "a<sub><size=60%>0</size></sub>"
        );
        assert_eq!(
            underscore_pass("x_{n+1}", &config()),
            "x<sub><size=60%>n+1</size></sub>"
        );
        assert_eq!(underscore_pass("a_", &config()), "a_");
    }

    #[test]
    fn test_fraction_pass() {
        assert_eq!(
            fraction_pass("1/2", &config()),
            "<sup><size=70%>1</size></sup>/<sub><size=70%>2</size></sub>"
        );
        assert_eq!(
            fraction_pass("(n+1)/(n)", &config()),
            "<sup><size=70%>n+1</size></sup>/<sub><size=70%>n</size></sub>"
        );
    }

    #[test]
    fn test_fraction_invalid_operands_are_literal() {
        // Letters are not a valid bare operand.
        assert_eq!(fraction_pass("a/b", &config()), "a/b");
        assert_eq!(fraction_pass("a/", &config()), "a/");
        // Empty group on either side fails open.
        assert_eq!(fraction_pass("()/2", &config()), "()/2");
        assert_eq!(fraction_pass("1/{}", &config()), "1/{}");
    }

    #[test]
    fn test_chemical_pass() {
        assert_eq!(
            chemical_pass("H2O", &config()),
            "H<sub><size=60%>2</size></sub>O"
        );
        assert_eq!(
            chemical_pass("C6H12O6", &config()),
            "C<sub><size=60%>6</size></sub>H<sub><size=60%>12</size></sub>O<sub><size=60%>6</size></sub>"
        );
        // Two-letter element symbol.
        assert_eq!(
            chemical_pass("Fe2O3", &config()),
            "Fe<sub><size=60%>2</size></sub>O<sub><size=60%>3</size></sub>"
        );
    }

    #[test]
    fn test_chemical_pass_skips_matches_inside_tags() {
        // The digits of an element token between '<' and '>' stay untouched.
        assert_eq!(chemical_pass("<Fe2>O2", &config()), "<Fe2>O<sub><size=60%>2</size></sub>");
        // Re-running over already generated markup leaves it alone.
        let formatted = chemical_pass("H2O", &config());
        assert_eq!(chemical_pass(&formatted, &config()), formatted);
    }

    #[test]
    fn test_passes_leave_unmatched_text_untouched() {
        let text = "no notation here";
        assert_eq!(caret_pass(text, &config()), text);
        assert_eq!(underscore_pass(text, &config()), text);
        assert_eq!(fraction_pass(text, &config()), text);
        assert_eq!(chemical_pass(text, &config()), text);
    }
}
