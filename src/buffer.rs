//! The row store: an ordered, randomly-indexable sequence of rows, plus the
//! derivation pipeline that keeps every row's render form and highlight tags
//! in sync with its raw characters.
//!
//! Structural operations (`insert_row`, `delete_row`) signal out-of-range
//! indices to the caller; per-character operations clamp or no-op instead,
//! since cursor arithmetic routinely points one past the end.

use thiserror::Error;
use tracing::debug;

use crate::row::Row;
use crate::syntax::{self, Syntax};

/// Failure of a structural row operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("row {at} out of range (buffer has {len} rows)")]
    OutOfRange { at: usize, len: usize },
}

/// The document's rows, in order, with `rows[i].index == i` at all times.
#[derive(Debug)]
pub struct Buffer {
    rows: Vec<Row>,
    syntax: Option<&'static Syntax>,
    tab_stop: usize,
    dirty: usize,
}

impl Buffer {
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            syntax: None,
            tab_stop,
            dirty: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    /// Number of mutations since the last [`mark_clean`](Self::mark_clean).
    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    pub fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    pub fn syntax(&self) -> Option<&'static Syntax> {
        self.syntax
    }

    /// Select the language profile for `filename` and re-highlight every row
    /// in index order.
    pub fn select_syntax(&mut self, filename: &str) {
        self.syntax = syntax::select_syntax(filename);
        debug!(
            filename,
            filetype = self.syntax.map(|s| s.filetype),
            "selected syntax profile"
        );
        for at in 0..self.rows.len() {
            self.update_syntax(at);
        }
    }

    /// Drop the profile, degrading every row to Normal classification.
    pub fn clear_syntax(&mut self) {
        self.syntax = None;
        for at in 0..self.rows.len() {
            self.update_syntax(at);
        }
    }

    /// Splice a new row at `at`, shifting and renumbering trailing rows.
    pub fn insert_row(&mut self, at: usize, text: &str) -> Result<(), BufferError> {
        if at > self.rows.len() {
            return Err(BufferError::OutOfRange {
                at,
                len: self.rows.len(),
            });
        }
        self.rows.insert(at, Row::new(at, text));
        self.renumber_from(at + 1);
        self.update_row(at);
        self.dirty += 1;
        Ok(())
    }

    /// Remove the row at `at`, shifting and renumbering trailing rows.
    pub fn delete_row(&mut self, at: usize) -> Result<(), BufferError> {
        if at >= self.rows.len() {
            return Err(BufferError::OutOfRange {
                at,
                len: self.rows.len(),
            });
        }
        self.rows.remove(at);
        self.renumber_from(at);
        self.dirty += 1;
        Ok(())
    }

    /// Insert `ch` into a row, clamping `at` to the row length. No-op for a
    /// nonexistent row.
    pub fn insert_char(&mut self, row: usize, at: usize, ch: char) {
        let Some(r) = self.rows.get_mut(row) else {
            return;
        };
        r.insert_char(at, ch);
        self.update_row(row);
        self.dirty += 1;
    }

    /// Delete the character at `at` in a row. No-op when out of bounds.
    pub fn delete_char(&mut self, row: usize, at: usize) {
        let Some(r) = self.rows.get_mut(row) else {
            return;
        };
        if !r.delete_char(at) {
            return;
        }
        self.update_row(row);
        self.dirty += 1;
    }

    /// Concatenate `text` onto a row's raw characters (the row-merge path of
    /// a backward delete across a row boundary).
    pub fn append_string(&mut self, row: usize, text: &str) {
        let Some(r) = self.rows.get_mut(row) else {
            return;
        };
        r.append_str(text);
        self.update_row(row);
        self.dirty += 1;
    }

    /// Split a row at character index `col`: the row keeps the head, the
    /// tail becomes a new row directly below it.
    pub fn split_row(&mut self, at: usize, col: usize) -> Result<(), BufferError> {
        let Some(r) = self.rows.get_mut(at) else {
            return Err(BufferError::OutOfRange {
                at,
                len: self.rows.len(),
            });
        };
        let tail = r.split_off(col);
        self.update_row(at);
        self.insert_row(at + 1, &tail)
    }

    /// Concatenate every row's raw characters, each followed by a newline.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(row.chars());
            out.push('\n');
        }
        out
    }

    fn renumber_from(&mut self, at: usize) {
        for i in at..self.rows.len() {
            self.rows[i].index = i;
        }
    }

    /// Regenerate the row's render form and re-run the highlighter.
    fn update_row(&mut self, at: usize) {
        if let Some(r) = self.rows.get_mut(at) {
            r.update_render(self.tab_stop);
        }
        self.update_syntax(at);
    }

    /// Re-highlight the row at `at`, then walk forward while the open
    /// block-comment state keeps changing. The walk is bounded by the row
    /// count and stops as soon as a row's state is unchanged.
    fn update_syntax(&mut self, at: usize) {
        let mut idx = at;
        while idx < self.rows.len() {
            let prev_open = idx > 0 && self.rows[idx - 1].open_comment;
            let (hl, open) =
                syntax::highlight_row(self.rows[idx].render(), self.syntax, prev_open);
            let changed = self.rows[idx].open_comment != open;
            self.rows[idx].highlight = hl;
            self.rows[idx].open_comment = open;
            if !changed {
                break;
            }
            idx += 1;
        }
    }

    pub(crate) fn row_mut(&mut self, at: usize) -> Option<&mut Row> {
        self.rows.get_mut(at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Highlight;

    fn buffer(lines: &[&str]) -> Buffer {
        let mut buf = Buffer::new(4);
        for (i, line) in lines.iter().enumerate() {
            buf.insert_row(i, line).unwrap();
        }
        buf
    }

    fn assert_invariants(buf: &Buffer) {
        for (i, row) in buf.rows().iter().enumerate() {
            assert_eq!(row.index, i, "row index out of sync at {}", i);
            assert_eq!(
                row.highlight().len(),
                row.render_len(),
                "highlight length out of sync at {}",
                i
            );
        }
    }

    #[test]
    fn test_insert_row_renumbers_trailing_rows() {
        let mut buf = buffer(&["a", "c"]);
        buf.insert_row(1, "b").unwrap();
        assert_eq!(buf.row(0).unwrap().chars(), "a");
        assert_eq!(buf.row(1).unwrap().chars(), "b");
        assert_eq!(buf.row(2).unwrap().chars(), "c");
        assert_invariants(&buf);
    }

    #[test]
    fn test_insert_row_out_of_range() {
        let mut buf = buffer(&["a"]);
        assert_eq!(
            buf.insert_row(5, "x"),
            Err(BufferError::OutOfRange { at: 5, len: 1 })
        );
    }

    #[test]
    fn test_delete_row_renumbers_trailing_rows() {
        let mut buf = buffer(&["a", "b", "c"]);
        buf.delete_row(1).unwrap();
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.row(1).unwrap().chars(), "c");
        assert_invariants(&buf);
    }

    #[test]
    fn test_delete_row_out_of_range() {
        let mut buf = buffer(&["a"]);
        assert_eq!(
            buf.delete_row(1),
            Err(BufferError::OutOfRange { at: 1, len: 1 })
        );
    }

    #[test]
    fn test_insert_then_delete_restores_row() {
        let mut buf = buffer(&["hello"]);
        buf.insert_char(0, 2, 'X');
        assert_eq!(buf.row(0).unwrap().chars(), "heXllo");
        buf.delete_char(0, 2);
        assert_eq!(buf.row(0).unwrap().chars(), "hello");
        assert_invariants(&buf);
    }

    #[test]
    fn test_split_then_append_restores_row() {
        let mut buf = buffer(&["hello world"]);
        buf.split_row(0, 5).unwrap();
        assert_eq!(buf.row(0).unwrap().chars(), "hello");
        assert_eq!(buf.row(1).unwrap().chars(), " world");

        let tail = buf.row(1).unwrap().chars().to_string();
        buf.append_string(0, &tail);
        buf.delete_row(1).unwrap();
        assert_eq!(buf.row(0).unwrap().chars(), "hello world");
        assert_eq!(buf.len(), 1);
        assert_invariants(&buf);
    }

    #[test]
    fn test_serialize_appends_newlines() {
        let buf = buffer(&["one", "", "three"]);
        assert_eq!(buf.serialize(), "one\n\nthree\n");
    }

    #[test]
    fn test_dirty_counter() {
        let mut buf = buffer(&["a"]);
        buf.mark_clean();
        assert!(!buf.is_dirty());
        buf.insert_char(0, 0, 'x');
        assert!(buf.is_dirty());
        buf.mark_clean();
        assert!(!buf.is_dirty());
    }

    #[test]
    fn test_highlight_invariant_after_tab_edits() {
        let mut buf = buffer(&["a\tb"]);
        buf.select_syntax("test.c");
        buf.insert_char(0, 1, '\t');
        assert_invariants(&buf);
        buf.delete_char(0, 1);
        assert_invariants(&buf);
    }

    #[test]
    fn test_open_comment_propagates_on_edit() {
        let mut buf = buffer(&["int a;", "int b;"]);
        buf.select_syntax("test.c");
        assert!(!buf.row(0).unwrap().open_comment());

        // Typing a block-comment opener on row 0 must re-highlight row 1.
        for (i, ch) in "/* ".chars().enumerate() {
            buf.insert_char(0, i, ch);
        }
        assert!(buf.row(0).unwrap().open_comment());
        assert!(buf
            .row(1)
            .unwrap()
            .highlight()
            .iter()
            .all(|&t| t == Highlight::BlockComment));
        assert_invariants(&buf);
    }

    #[test]
    fn test_comment_close_stops_propagation() {
        let mut buf = buffer(&["/* a", "b */ c", "int x;"]);
        buf.select_syntax("test.c");

        let row1 = buf.row(1).unwrap();
        assert!(!row1.open_comment());
        assert!(row1.highlight()[..4]
            .iter()
            .all(|&t| t == Highlight::BlockComment));
        assert_eq!(row1.highlight()[5], Highlight::Normal);

        // Row 2 is untouched by the comment.
        assert_eq!(buf.row(2).unwrap().highlight()[0], Highlight::Keyword2);
    }

    #[test]
    fn test_select_syntax_rehighlights_all_rows() {
        let mut buf = buffer(&["if x", "return 1"]);
        assert_eq!(buf.row(0).unwrap().highlight()[0], Highlight::Normal);

        buf.select_syntax("main.c");
        assert_eq!(buf.row(0).unwrap().highlight()[0], Highlight::Keyword1);
        assert_eq!(buf.row(1).unwrap().highlight()[0], Highlight::Keyword1);

        buf.clear_syntax();
        assert_eq!(buf.row(0).unwrap().highlight()[0], Highlight::Normal);
    }
}
