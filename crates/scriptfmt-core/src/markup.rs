//! Markup tag builders.
//!
//! The tag shapes are part of the engine's contract with rendering hosts and
//! must stay bit-exact: `<sup><size=P%>…</size></sup>` for superscripts,
//! `<sub><size=P%>…</size></sub>` for subscripts.

/// Opening tag of a superscript container.
pub const SUPERSCRIPT_OPEN: &str = "<sup>";
/// Closing tag of a superscript container.
pub const SUPERSCRIPT_CLOSE: &str = "</sup>";
/// Opening tag of a subscript container.
pub const SUBSCRIPT_OPEN: &str = "<sub>";
/// Closing tag of a subscript container.
pub const SUBSCRIPT_CLOSE: &str = "</sub>";
/// Prefix of a size container opener (`<size=60%>`).
pub const SIZE_OPEN_PREFIX: &str = "<size=";
/// Closing tag of a size container.
pub const SIZE_CLOSE: &str = "</size>";

/// Wraps `content` in a superscript container at `size_pct` percent of the
/// base text size. Empty content is returned unchanged, no tag is emitted.
pub fn superscript(content: &str, size_pct: f32) -> String {
    if content.is_empty() {
        return String::new();
    }
    format!("<sup><size={size_pct}%>{content}</size></sup>")
}

/// Wraps `content` in a subscript container at `size_pct` percent of the
/// base text size. Empty content is returned unchanged, no tag is emitted.
pub fn subscript(content: &str, size_pct: f32) -> String {
    if content.is_empty() {
        return String::new();
    }
    format!("<sub><size={size_pct}%>{content}</size></sub>")
}

/// Builds fraction markup: superscript numerator, literal `/`, subscript
/// denominator. If either operand is empty the literal `num/den` text is
/// returned instead; a fraction never degrades to a half-formatted tag.
pub fn fraction(numerator: &str, denominator: &str, size_pct: f32) -> String {
    if numerator.is_empty() || denominator.is_empty() {
        return format!("{numerator}/{denominator}");
    }
    format!(
        "{}/{}",
        superscript(numerator, size_pct),
        subscript(denominator, size_pct)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superscript_shape() {
        assert_eq!(superscript("2", 60.0), "<sup><size=60%>2</size></sup>");
    }

    #[test]
    fn test_subscript_shape() {
        assert_eq!(subscript("n+1", 60.0), "<sub><size=60%>n+1</size></sub>");
    }

    #[test]
    fn test_fractional_size_is_preserved() {
        // Whole percentages render without a decimal point, others keep it.
        assert_eq!(superscript("2", 62.5), "<sup><size=62.5%>2</size></sup>");
    }

    #[test]
    fn test_empty_content_emits_no_tag() {
        assert_eq!(superscript("", 60.0), "");
        assert_eq!(subscript("", 60.0), "");
    }

    #[test]
    fn test_fraction_shape() {
        assert_eq!(
            fraction("1", "2", 70.0),
            "<sup><size=70%>1</size></sup>/<sub><size=70%>2</size></sub>"
        );
    }

    #[test]
    fn test_fraction_degrades_on_empty_operand() {
        assert_eq!(fraction("", "2", 70.0), "/2");
        assert_eq!(fraction("1", "", 70.0), "1/");
        assert_eq!(fraction("", "", 70.0), "/");
    }
}
