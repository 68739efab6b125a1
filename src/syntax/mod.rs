//! Syntax highlighting module
//!
//! A single-pass, per-row highlighter driven by static language profiles:
//! - Language selection by filename (extension or basename substring)
//! - Per-character classification of a row's render text
//! - Open-block-comment state carried forward across rows
//!
//! The scan itself is stateless between calls; cross-row propagation is
//! driven by the buffer, which re-runs the scan on following rows while the
//! open-comment state keeps changing.

mod highlight;
mod languages;

pub use highlight::{highlight_row, is_separator, Highlight};
pub use languages::{select_syntax, Keyword, KeywordTier, Syntax, SYNTAXES};
