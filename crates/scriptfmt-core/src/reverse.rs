//! Markup → Unicode reverse conversion.
//!
//! [`unicode`] recognizes the exact tag template the engine generates
//! (`<sup><size=P%>…</size></sup>` and the subscript twin) and substitutes
//! Unicode glyphs back in. Substitution is all-or-nothing per tag: if any
//! character of the inner content has no glyph, the tag degrades to its bare
//! content instead of a partially converted mixture. A full round trip is
//! only guaranteed for markup the unicode pass itself produced; exponents
//! like `n+1` from the caret pass simply come back as plain text.

use crate::glyphs;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SUP_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<sup><size=[^>]*>([^<]*)</size></sup>").unwrap());

static SUB_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<sub><size=[^>]*>([^<]*)</size></sub>").unwrap());

/// Converts generated markup back to Unicode glyphs where possible.
///
/// Superscript tags are processed first, then subscript tags; the rest of
/// the string passes through untouched.
pub fn unicode(input: &str) -> String {
    let superscripts = SUP_TAG.replace_all(input, |caps: &Captures<'_>| {
        restore(&caps[1], glyphs::superscript_glyph)
    });
    SUB_TAG
        .replace_all(&superscripts, |caps: &Captures<'_>| {
            restore(&caps[1], glyphs::subscript_glyph)
        })
        .into_owned()
}

/// Maps every character of `content` through `lookup`; on the first failure
/// the bare content is returned unchanged.
fn restore(content: &str, lookup: fn(char) -> Option<char>) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match lookup(c) {
            Some(glyph) => out.push(glyph),
            None => return content.to_string(),
        }
    }
    out
}
