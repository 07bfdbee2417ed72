//! Bidirectional Unicode super/subscript glyph tables.
//!
//! Two independent tables exist, one for superscript glyphs and one for
//! subscript glyphs. The forward direction maps a Unicode glyph to its ASCII
//! base character (`'²'` → `'2'`); the reverse direction is derived from the
//! forward table once, behind a [`Lazy`], and is safe for unsynchronized
//! concurrent reads afterwards.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Superscript glyph → ASCII base character.
const SUPERSCRIPTS: &[(char, char)] = &[
    ('\u{2070}', '0'), // ⁰
    ('\u{00B9}', '1'), // ¹
    ('\u{00B2}', '2'), // ²
    ('\u{00B3}', '3'), // ³
    ('\u{2074}', '4'), // ⁴
    ('\u{2075}', '5'), // ⁵
    ('\u{2076}', '6'), // ⁶
    ('\u{2077}', '7'), // ⁷
    ('\u{2078}', '8'), // ⁸
    ('\u{2079}', '9'), // ⁹
    ('\u{207A}', '+'), // ⁺
    ('\u{207B}', '-'), // ⁻
    ('\u{207C}', '='), // ⁼
    ('\u{207D}', '('), // ⁽
    ('\u{207E}', ')'), // ⁾
    ('\u{2071}', 'i'), // ⁱ
    ('\u{207F}', 'n'), // ⁿ
];

/// Subscript glyph → ASCII base character.
const SUBSCRIPTS: &[(char, char)] = &[
    ('\u{2080}', '0'), // ₀
    ('\u{2081}', '1'), // ₁
    ('\u{2082}', '2'), // ₂
    ('\u{2083}', '3'), // ₃
    ('\u{2084}', '4'), // ₄
    ('\u{2085}', '5'), // ₅
    ('\u{2086}', '6'), // ₆
    ('\u{2087}', '7'), // ₇
    ('\u{2088}', '8'), // ₈
    ('\u{2089}', '9'), // ₉
    ('\u{208A}', '+'), // ₊
    ('\u{208B}', '-'), // ₋
    ('\u{208C}', '='), // ₌
    ('\u{208D}', '('), // ₍
    ('\u{208E}', ')'), // ₎
    ('\u{2090}', 'a'), // ₐ
    ('\u{2091}', 'e'), // ₑ
    ('\u{2095}', 'h'), // ₕ
    ('\u{2096}', 'k'), // ₖ
    ('\u{2097}', 'l'), // ₗ
    ('\u{2098}', 'm'), // ₘ
    ('\u{2099}', 'n'), // ₙ
    ('\u{2092}', 'o'), // ₒ
    ('\u{209A}', 'p'), // ₚ
    ('\u{2093}', 'x'), // ₓ
    ('\u{209B}', 's'), // ₛ
    ('\u{209C}', 't'), // ₜ
];

static SUPERSCRIPT_FORWARD: Lazy<HashMap<char, char>> =
    Lazy::new(|| SUPERSCRIPTS.iter().copied().collect());

static SUBSCRIPT_FORWARD: Lazy<HashMap<char, char>> =
    Lazy::new(|| SUBSCRIPTS.iter().copied().collect());

static SUPERSCRIPT_REVERSE: Lazy<HashMap<char, char>> =
    Lazy::new(|| SUPERSCRIPTS.iter().map(|&(glyph, base)| (base, glyph)).collect());

static SUBSCRIPT_REVERSE: Lazy<HashMap<char, char>> =
    Lazy::new(|| SUBSCRIPTS.iter().map(|&(glyph, base)| (base, glyph)).collect());

/// Returns the ASCII base character for a superscript glyph, if `c` is one.
pub fn superscript_base(c: char) -> Option<char> {
    SUPERSCRIPT_FORWARD.get(&c).copied()
}

/// Returns the ASCII base character for a subscript glyph, if `c` is one.
pub fn subscript_base(c: char) -> Option<char> {
    SUBSCRIPT_FORWARD.get(&c).copied()
}

/// Returns the superscript glyph for an ASCII base character, if one exists.
pub fn superscript_glyph(base: char) -> Option<char> {
    SUPERSCRIPT_REVERSE.get(&base).copied()
}

/// Returns the subscript glyph for an ASCII base character, if one exists.
pub fn subscript_glyph(base: char) -> Option<char> {
    SUBSCRIPT_REVERSE.get(&base).copied()
}

/// Returns true if `c` is a superscript glyph known to the table.
pub fn is_superscript_glyph(c: char) -> bool {
    SUPERSCRIPT_FORWARD.contains_key(&c)
}

/// Returns true if `c` is a subscript glyph known to the table.
pub fn is_subscript_glyph(c: char) -> bool {
    SUBSCRIPT_FORWARD.contains_key(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superscript_round_trip() {
        // reverse(forward(c)) == c for every mapped glyph
        for &(glyph, base) in SUPERSCRIPTS {
            assert_eq!(superscript_base(glyph), Some(base));
            assert_eq!(superscript_glyph(base), Some(glyph));
        }
    }

    #[test]
    fn test_subscript_round_trip() {
        for &(glyph, base) in SUBSCRIPTS {
            assert_eq!(subscript_base(glyph), Some(base));
            assert_eq!(subscript_glyph(base), Some(glyph));
        }
    }

    #[test]
    fn test_tables_are_disjoint() {
        for &(glyph, _) in SUPERSCRIPTS {
            assert!(
                !is_subscript_glyph(glyph),
                "{glyph:?} appears in both tables"
            );
        }
    }

    #[test]
    fn test_unmapped_characters() {
        assert_eq!(superscript_base('2'), None);
        assert_eq!(subscript_base('A'), None);
        assert_eq!(superscript_glyph('q'), None);
    }

    #[test]
    fn test_common_glyphs() {
        assert_eq!(superscript_base('²'), Some('2'));
        assert_eq!(subscript_base('₀'), Some('0'));
        assert_eq!(subscript_glyph('0'), Some('₀'));
    }
}
