//! A single line of the document: raw text, its tab-expanded render form,
//! and the per-character highlight classification.
//!
//! `render` and `highlight` are derived state. They are regenerated in full
//! by the owning [`Buffer`](crate::buffer::Buffer) whenever `chars` changes;
//! nothing in this module patches them incrementally.

use crate::syntax::Highlight;

/// One logical line of the document.
#[derive(Debug, Clone)]
pub struct Row {
    /// Position of this row in the buffer. Equals the row's array index at
    /// all times; the buffer renumbers neighbors on every structural change.
    pub index: usize,
    /// Raw line content, no trailing newline.
    chars: String,
    /// Display form with tabs expanded to the next tab stop.
    render: String,
    /// One classification tag per `render` character.
    pub(crate) highlight: Vec<Highlight>,
    /// True when an unterminated block comment is still open after this row.
    pub(crate) open_comment: bool,
}

impl Row {
    pub(crate) fn new(index: usize, text: &str) -> Self {
        Self {
            index,
            chars: text.to_string(),
            render: String::new(),
            highlight: Vec::new(),
            open_comment: false,
        }
    }

    /// Raw line content.
    pub fn chars(&self) -> &str {
        &self.chars
    }

    /// Tab-expanded display form.
    pub fn render(&self) -> &str {
        &self.render
    }

    /// Per-render-character classification tags.
    pub fn highlight(&self) -> &[Highlight] {
        &self.highlight
    }

    /// Whether a block comment opened on (or before) this row is still
    /// unterminated at its end.
    pub fn open_comment(&self) -> bool {
        self.open_comment
    }

    /// Length of the raw line in characters.
    pub fn len(&self) -> usize {
        self.chars.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Length of the render form in characters.
    pub fn render_len(&self) -> usize {
        self.render.chars().count()
    }

    /// Convert a character index into the corresponding render column.
    ///
    /// Each tab advances the render column to the next multiple of
    /// `tab_stop`; every other character advances it by one. `cx` may be one
    /// past the last character (the cursor can sit there).
    pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
        let mut rx = 0;
        for ch in self.chars.chars().take(cx) {
            if ch == '\t' {
                rx += (tab_stop - 1) - (rx % tab_stop);
            }
            rx += 1;
        }
        rx
    }

    /// Inverse of [`cx_to_rx`](Self::cx_to_rx): the character index whose
    /// expansion first reaches or exceeds `rx`. A render column past the end
    /// of the row clamps to the character length.
    pub fn rx_to_cx(&self, rx: usize, tab_stop: usize) -> usize {
        let mut cur_rx = 0;
        for (cx, ch) in self.chars.chars().enumerate() {
            if ch == '\t' {
                cur_rx += (tab_stop - 1) - (cur_rx % tab_stop);
            }
            cur_rx += 1;

            if cur_rx > rx {
                return cx;
            }
        }
        self.len()
    }

    /// Regenerate the render form from `chars`, expanding tabs to the next
    /// multiple of `tab_stop`.
    pub(crate) fn update_render(&mut self, tab_stop: usize) {
        self.render = String::with_capacity(self.chars.len());
        let mut width = 0;
        for ch in self.chars.chars() {
            if ch == '\t' {
                self.render.push(' ');
                width += 1;
                while width % tab_stop != 0 {
                    self.render.push(' ');
                    width += 1;
                }
            } else {
                self.render.push(ch);
                width += 1;
            }
        }
    }

    /// Insert `ch` at character index `at`, clamping past-the-end positions
    /// to an append.
    pub(crate) fn insert_char(&mut self, at: usize, ch: char) {
        let at = at.min(self.len());
        let byte = char_to_byte(&self.chars, at);
        self.chars.insert(byte, ch);
    }

    /// Delete the character at `at`. No-op when `at` is out of bounds.
    pub(crate) fn delete_char(&mut self, at: usize) -> bool {
        if at >= self.len() {
            return false;
        }
        let byte = char_to_byte(&self.chars, at);
        self.chars.remove(byte);
        true
    }

    pub(crate) fn append_str(&mut self, s: &str) {
        self.chars.push_str(s);
    }

    /// Truncate the row at character index `at` and return the tail.
    pub(crate) fn split_off(&mut self, at: usize) -> String {
        let byte = char_to_byte(&self.chars, at);
        self.chars.split_off(byte)
    }

    /// Overlay the Match tag onto a range of render columns, clamped to the
    /// row. The caller is responsible for saving and restoring the previous
    /// highlight.
    pub(crate) fn overlay_match(&mut self, start: usize, len: usize) {
        let end = (start + len).min(self.highlight.len());
        for tag in &mut self.highlight[start.min(end)..end] {
            *tag = Highlight::Match;
        }
    }
}

/// Convert a character index to a byte offset, clamping to the end.
fn char_to_byte(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAB_STOP: usize = 4;

    fn row(text: &str) -> Row {
        let mut row = Row::new(0, text);
        row.update_render(TAB_STOP);
        row
    }

    #[test]
    fn test_render_expands_tabs_to_next_stop() {
        assert_eq!(row("\tx").render(), "    x");
        assert_eq!(row("a\tb").render(), "a   b");
        assert_eq!(row("abc\td").render(), "abc d");
        assert_eq!(row("abcd\te").render(), "abcd    e");
    }

    #[test]
    fn test_render_without_tabs_is_identity() {
        assert_eq!(row("hello world").render(), "hello world");
    }

    #[test]
    fn test_cx_to_rx_tab_alignment() {
        let r = row("a\tb");
        assert_eq!(r.cx_to_rx(0, TAB_STOP), 0);
        assert_eq!(r.cx_to_rx(1, TAB_STOP), 1);
        assert_eq!(r.cx_to_rx(2, TAB_STOP), 4); // tab expands to column 4
        assert_eq!(r.cx_to_rx(3, TAB_STOP), 5); // one past the end is valid
    }

    #[test]
    fn test_rx_to_cx_inverse_walk() {
        let r = row("a\tb");
        assert_eq!(r.rx_to_cx(0, TAB_STOP), 0);
        assert_eq!(r.rx_to_cx(1, TAB_STOP), 1);
        assert_eq!(r.rx_to_cx(2, TAB_STOP), 1); // inside the tab expansion
        assert_eq!(r.rx_to_cx(3, TAB_STOP), 1);
        assert_eq!(r.rx_to_cx(4, TAB_STOP), 2);
        assert_eq!(r.rx_to_cx(99, TAB_STOP), 3); // clamped, not an error
    }

    #[test]
    fn test_coordinate_round_trip() {
        let r = row("\tfn\tmain()\t{");
        for cx in 0..=r.len() {
            let rx = r.cx_to_rx(cx, TAB_STOP);
            let back = r.rx_to_cx(rx, TAB_STOP);
            // The round trip lands on the nearest index whose expansion does
            // not exceed the original.
            assert!(r.cx_to_rx(back, TAB_STOP) <= rx);
            assert!(back <= cx);
        }
    }

    #[test]
    fn test_insert_char_clamps_past_end() {
        let mut r = row("ab");
        r.insert_char(10, 'X');
        assert_eq!(r.chars(), "abX");
    }

    #[test]
    fn test_delete_char_out_of_bounds_is_noop() {
        let mut r = row("ab");
        assert!(!r.delete_char(5));
        assert_eq!(r.chars(), "ab");
    }

    #[test]
    fn test_split_off_at_char_boundary() {
        let mut r = row("héllo");
        let tail = r.split_off(2);
        assert_eq!(r.chars(), "hé");
        assert_eq!(tail, "llo");
    }
}
