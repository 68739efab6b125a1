//! The per-row highlight scan.
//!
//! A single left-to-right pass over a row's render text. Four mutually
//! exclusive lexical states: inside a line comment (consumes the rest of the
//! row), inside a block comment (may be carried in from the previous row),
//! inside a string (remembers the opening quote), and the default state.

use super::languages::{KeywordTier, Syntax};

/// Classification of one render character, used to pick a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Normal,
    Comment,
    BlockComment,
    Keyword1,
    Keyword2,
    String,
    Number,
    /// Transient search-match overlay; never produced by the scan itself.
    Match,
}

/// Characters that end a word for keyword and number-start detection,
/// besides whitespace and NUL.
const SEPARATOR_CHARS: &str = ",.()+-/*=~%<>[];";

/// A separator boundary governs where keywords and numeric literals may
/// start.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\0' || SEPARATOR_CHARS.contains(c)
}

/// True when `pat` occurs in `chars` starting at `at`.
fn matches_at(chars: &[char], at: usize, pat: &str) -> bool {
    let mut i = at;
    for pc in pat.chars() {
        if chars.get(i) != Some(&pc) {
            return false;
        }
        i += 1;
    }
    true
}

/// Scan one row's render text and classify every character.
///
/// `prev_open_comment` is the open-block-comment state at the end of the
/// previous row (false for the first row). Returns the classification tags,
/// one per render character, and whether a block comment is still open at
/// the end of this row. Without a profile everything is Normal and no
/// comment state is carried.
pub fn highlight_row(
    render: &str,
    syntax: Option<&Syntax>,
    prev_open_comment: bool,
) -> (Vec<Highlight>, bool) {
    let chars: Vec<char> = render.chars().collect();
    let mut hl = vec![Highlight::Normal; chars.len()];

    let Some(syntax) = syntax else {
        return (hl, false);
    };

    let scs = syntax.singleline_comment.unwrap_or("");
    let mcs = syntax.block_comment_start.unwrap_or("");
    let mce = syntax.block_comment_end.unwrap_or("");

    let mut prev_sep = true;
    let mut in_string: Option<char> = None;
    let mut in_comment = prev_open_comment;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let prev_hl = if i > 0 { hl[i - 1] } else { Highlight::Normal };

        // A line comment wins over everything except an open string or
        // block comment, and consumes the rest of the row.
        if !scs.is_empty() && in_string.is_none() && !in_comment && matches_at(&chars, i, scs) {
            for tag in &mut hl[i..] {
                *tag = Highlight::Comment;
            }
            break;
        }

        if !mcs.is_empty() && !mce.is_empty() && in_string.is_none() {
            if in_comment {
                hl[i] = Highlight::BlockComment;
                if matches_at(&chars, i, mce) {
                    let end = i + mce.chars().count();
                    for tag in &mut hl[i..end] {
                        *tag = Highlight::BlockComment;
                    }
                    i = end;
                    in_comment = false;
                    // The end marker acts as a fresh separator boundary.
                    prev_sep = true;
                } else {
                    i += 1;
                }
                continue;
            } else if matches_at(&chars, i, mcs) {
                let end = i + mcs.chars().count();
                for tag in &mut hl[i..end] {
                    *tag = Highlight::BlockComment;
                }
                i = end;
                in_comment = true;
                continue;
            }
        }

        if syntax.highlight_strings {
            if let Some(quote) = in_string {
                hl[i] = Highlight::String;
                // A backslash escapes the next character, which stays part
                // of the string even if it is the quote.
                if c == '\\' && i + 1 < chars.len() {
                    hl[i + 1] = Highlight::String;
                    i += 2;
                    continue;
                }
                if c == quote {
                    in_string = None;
                }
                i += 1;
                prev_sep = true;
                continue;
            } else if c == '"' || c == '\'' {
                in_string = Some(c);
                hl[i] = Highlight::String;
                i += 1;
                continue;
            }
        }

        if syntax.highlight_numbers
            && ((c.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number))
                || (c == '.' && prev_hl == Highlight::Number))
        {
            hl[i] = Highlight::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep {
            // Longest matching keyword wins; the character after it must be
            // a separator (end of row counts).
            let matched = syntax
                .keywords
                .iter()
                .filter(|kw| {
                    matches_at(&chars, i, kw.text)
                        && chars
                            .get(i + kw.text.chars().count())
                            .map_or(true, |&next| is_separator(next))
                })
                .max_by_key(|kw| kw.text.chars().count());

            if let Some(kw) = matched {
                let tag = match kw.tier {
                    KeywordTier::Primary => Highlight::Keyword1,
                    KeywordTier::Secondary => Highlight::Keyword2,
                };
                let end = i + kw.text.chars().count();
                for slot in &mut hl[i..end] {
                    *slot = tag;
                }
                i = end;
                prev_sep = false;
                continue;
            }
        }

        prev_sep = is_separator(c);
        i += 1;
    }

    (hl, in_comment)
}
