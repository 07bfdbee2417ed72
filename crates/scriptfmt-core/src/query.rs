//! Read-only queries over markup and plain strings.

use crate::{glyphs, markup};
use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Removes every angle-bracket-delimited tag, leaving only the text content.
pub fn plain_text(input: &str) -> String {
    TAG.replace_all(input, "").into_owned()
}

/// Returns true if `input` contains any generated container opener.
pub fn has_formatting(input: &str) -> bool {
    input.contains(markup::SUPERSCRIPT_OPEN)
        || input.contains(markup::SUBSCRIPT_OPEN)
        || input.contains(markup::SIZE_OPEN_PREFIX)
}

/// Returns true if any character of `input` is a superscript glyph.
pub fn has_unicode_superscript(input: &str) -> bool {
    input.chars().any(glyphs::is_superscript_glyph)
}

/// Returns true if any character of `input` is a subscript glyph.
pub fn has_unicode_subscript(input: &str) -> bool {
    input.chars().any(glyphs::is_subscript_glyph)
}

/// Returns true if any character of `input` is a super- or subscript glyph.
pub fn has_unicode_scripts(input: &str) -> bool {
    has_unicode_superscript(input) || has_unicode_subscript(input)
}

/// Every distinct superscript glyph in `input`, in first-occurrence order.
pub fn unicode_superscripts(input: &str) -> Vec<char> {
    distinct_glyphs(input, glyphs::is_superscript_glyph)
}

/// Every distinct subscript glyph in `input`, in first-occurrence order.
pub fn unicode_subscripts(input: &str) -> Vec<char> {
    distinct_glyphs(input, glyphs::is_subscript_glyph)
}

fn distinct_glyphs(input: &str, is_glyph: fn(char) -> bool) -> Vec<char> {
    let mut found = Vec::new();
    for c in input.chars() {
        if is_glyph(c) && !found.contains(&c) {
            found.push(c);
        }
    }
    found
}
