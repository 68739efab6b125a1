//! Highlighting tests - cross-row comment propagation and profile selection

use strand::syntax::select_syntax;
use strand::{Buffer, Highlight};

fn c_buffer(lines: &[&str]) -> Buffer {
    let mut buf = Buffer::new(4);
    for (i, line) in lines.iter().enumerate() {
        buf.insert_row(i, line).unwrap();
    }
    buf.select_syntax("main.c");
    buf
}

fn tags(buf: &Buffer, row: usize) -> &[Highlight] {
    buf.row(row).unwrap().highlight()
}

// ========================================================================
// Open-comment propagation
// ========================================================================

#[test]
fn test_open_comment_spans_rows() {
    let buf = c_buffer(&["/* a", "b */ c"]);

    assert!(buf.row(0).unwrap().open_comment());
    assert!(!buf.row(1).unwrap().open_comment());

    // Row 1: "b " is inside the comment, " c" is not.
    let hl = tags(&buf, 1);
    assert!(hl[..4].iter().all(|&t| t == Highlight::BlockComment));
    assert_eq!(hl[4], Highlight::Normal);
    assert_eq!(hl[5], Highlight::Normal);
}

#[test]
fn test_closing_a_comment_recascades() {
    let mut buf = c_buffer(&["/* a", "b", "c"]);
    assert!(tags(&buf, 2).iter().all(|&t| t == Highlight::BlockComment));

    // Close the comment on row 0; rows 1 and 2 must fall back to Normal.
    let len = buf.row(0).unwrap().len();
    buf.insert_char(0, len, '*');
    buf.insert_char(0, len + 1, '/');

    assert!(!buf.row(0).unwrap().open_comment());
    assert!(tags(&buf, 1).iter().all(|&t| t == Highlight::Normal));
    assert!(tags(&buf, 2).iter().all(|&t| t == Highlight::Normal));
}

#[test]
fn test_propagation_stops_when_state_stabilizes() {
    let mut buf = c_buffer(&["a", "/* b */", "c"]);

    // An edit inside row 1 that keeps the comment balanced does not change
    // any row's open state.
    buf.insert_char(1, 3, 'x');
    assert!(!buf.row(1).unwrap().open_comment());
    assert!(tags(&buf, 2).iter().all(|&t| t == Highlight::Normal));
}

#[test]
fn test_splitting_inside_comment_carries_state() {
    let mut buf = c_buffer(&["/* one two */"]);
    buf.split_row(0, 7).unwrap();

    assert!(buf.row(0).unwrap().open_comment());
    assert!(!buf.row(1).unwrap().open_comment());
    assert!(tags(&buf, 1)
        .iter()
        .all(|&t| t == Highlight::BlockComment));
}

// ========================================================================
// Profile behavior
// ========================================================================

#[test]
fn test_no_profile_degrades_to_normal() {
    let mut buf = Buffer::new(4);
    buf.insert_row(0, "/* if 42 \"s\" */").unwrap();
    assert!(tags(&buf, 0).iter().all(|&t| t == Highlight::Normal));
    assert!(!buf.row(0).unwrap().open_comment());
}

#[test]
fn test_profile_without_block_comments() {
    // Fish has only a line comment; "/*" is plain text there.
    let mut buf = Buffer::new(4);
    buf.insert_row(0, "/* set x").unwrap();
    buf.select_syntax("config.fish");

    assert!(!buf.row(0).unwrap().open_comment());
    let hl = tags(&buf, 0);
    assert_eq!(hl[0], Highlight::Normal);
    assert_eq!(hl[3], Highlight::Keyword1); // "set"
}

#[test]
fn test_registry_selection_order() {
    assert_eq!(select_syntax("kernel.c").unwrap().filetype, "c");
    assert_eq!(select_syntax("view.html").unwrap().filetype, "html");
    assert_eq!(select_syntax("routine.mps").unwrap().filetype, "mumps");
    assert!(select_syntax("data.csv").is_none());
}

#[test]
fn test_ruby_block_comment_markers() {
    let buf = {
        let mut buf = Buffer::new(4);
        for (i, line) in ["=begin", "hidden", "=end"].iter().enumerate() {
            buf.insert_row(i, line).unwrap();
        }
        buf.select_syntax("app.rb");
        buf
    };

    assert!(buf.row(0).unwrap().open_comment());
    assert!(tags(&buf, 1).iter().all(|&t| t == Highlight::BlockComment));
    assert!(!buf.row(2).unwrap().open_comment());
}

// ========================================================================
// Keyword and literal classification through the buffer
// ========================================================================

#[test]
fn test_keywords_and_numbers_in_context() {
    let buf = c_buffer(&["if (x == 3.14) return 0;"]);
    let hl = tags(&buf, 0);

    assert_eq!(hl[0], Highlight::Keyword1); // if
    assert_eq!(hl[1], Highlight::Keyword1);
    assert_eq!(hl[3], Highlight::Normal); // (
    assert!(hl[9..13].iter().all(|&t| t == Highlight::Number)); // 3.14
    assert_eq!(hl[15], Highlight::Keyword1); // return
}

#[test]
fn test_tab_expansion_feeds_highlighter() {
    // The scan runs over render text, so the keyword after a tab starts at
    // a separator boundary.
    let buf = c_buffer(&["\tif x"]);
    let hl = tags(&buf, 0);
    assert_eq!(hl.len(), 8); // 4 spaces + "if x"
    assert_eq!(hl[4], Highlight::Keyword1);
    assert_eq!(hl[5], Highlight::Keyword1);
}
