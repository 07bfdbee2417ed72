//! # ScriptFmt Core
//!
//! Converts plain-text pseudo-scientific notation into nested inline-markup
//! text, and back again.
//!
//! ## Overview
//!
//! The engine rewrites five notations into `<sup>`/`<sub>`/`<size=…%>`
//! markup understood by rich-text rendering hosts:
//!
//! - **Unicode glyphs**: `x²` → `x<sup><size=60%>2</size></sup>`
//! - **Caret exponents**: `E = mc^2`, `e^{i*pi}`, `2^(n-1)`
//! - **Underscore subscripts**: `a_0`, `x_{n+1}`
//! - **Bare fractions**: `1/2`, `(n+1)/(n)`
//! - **Chemical formulas**: `H2O` → `H<sub><size=60%>2</size></sub>O`
//!
//! Everything is a pure function from `(input, FormatConfig)` to output
//! text; there is no session state, no I/O, and no fatal error class.
//! Malformed notation fails open: the offending match stays in the output
//! as literal text.
//!
//! ## Architecture
//!
//! ```text
//! raw text ──► unicode ──► caret ──► underscore ──► fraction ──► chemical ──► markup
//!              (each pass toggleable via FormatConfig)
//! ```
//!
//! The pass order is part of the contract: Unicode glyphs are tagged before
//! the pattern passes run, so a `²` can never be re-matched by a rule that
//! expects ASCII digits, and the chemical pass runs last with a guard that
//! skips digits already inside a tag.
//!
//! ## Examples
//!
//! ### Formatting
//!
//! ```
//! use scriptfmt_core::{format, FormatConfig};
//!
//! let config = FormatConfig::default();
//! assert_eq!(
//!     format("E = mc^2", &config),
//!     "E = mc<sup><size=60%>2</size></sup>"
//! );
//! ```
//!
//! ### Reversing and stripping
//!
//! ```
//! use scriptfmt_core::{plain_text, unicode};
//!
//! assert_eq!(unicode("A<sub><size=60%>0</size></sub>"), "A₀");
//! assert_eq!(plain_text("A<sub><size=60%>0</size></sub>"), "A0");
//! ```
//!
//! ### Queries
//!
//! ```
//! use scriptfmt_core::{has_unicode_scripts, unicode_superscripts};
//!
//! assert!(has_unicode_scripts("x²₁"));
//! assert_eq!(unicode_superscripts("x²y³z⁴"), vec!['²', '³', '⁴']);
//! ```
//!
//! ## Concurrency
//!
//! Glyph tables are immutable after their one-time lazy initialization and
//! safe for unsynchronized concurrent reads; configs are caller-owned
//! values. Independent calls may run in parallel with no coordination.

/// Feature toggles and size percentages.
pub mod config;
/// Bidirectional Unicode glyph tables.
pub mod glyphs;
/// Tag builders for the generated markup shapes.
pub mod markup;
/// The five rewrite passes.
pub mod passes;
/// Fixed-order pass orchestration.
pub mod pipeline;
/// Markup → Unicode reverse conversion.
pub mod reverse;
/// Presence checks, glyph enumeration, and tag stripping.
pub mod query;

pub use config::{
    DEFAULT_FRACTION_SIZE, DEFAULT_SUBSCRIPT_SIZE, DEFAULT_SUPERSCRIPT_SIZE, FormatConfig,
};
pub use markup::{fraction, subscript, superscript};
pub use pipeline::{format, format_default};
pub use query::{
    has_formatting, has_unicode_scripts, has_unicode_subscript, has_unicode_superscript,
    plain_text, unicode_subscripts, unicode_superscripts,
};
pub use reverse::unicode;
