//! Incremental wrap-around search over the row store's render text.
//!
//! Search state lives in an explicit [`Search`] object owned by the prompt
//! that drives it. Matches are reported in character-index space; the
//! temporary Match overlay is written into the matched row's highlight tags
//! and the prior tags are restored verbatim on the next step or when the
//! session ends.

use tracing::debug;

use crate::buffer::Buffer;
use crate::syntax::Highlight;

/// Search direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// How a search step was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Continue past the last match, forward.
    Next,
    /// Continue past the last match, backward.
    Prev,
    /// The query changed (or a non-directional key arrived): restart from
    /// scratch, forward.
    Restart,
}

/// Scan at most `buffer.len()` rows starting one step from `start` in
/// `direction`, wrapping past either end. Returns the first row containing
/// `query` as `(row, char_index)`.
pub fn find(
    buffer: &Buffer,
    query: &str,
    start: Option<usize>,
    direction: Direction,
) -> Option<(usize, usize)> {
    find_render(buffer, query, start, direction).map(|(row, rx)| {
        let cx = buffer
            .row(row)
            .map(|r| r.rx_to_cx(rx, buffer.tab_stop()))
            .unwrap_or(0);
        (row, cx)
    })
}

/// The raw scan: returns the match position as a render column.
fn find_render(
    buffer: &Buffer,
    query: &str,
    start: Option<usize>,
    direction: Direction,
) -> Option<(usize, usize)> {
    if query.is_empty() || buffer.is_empty() {
        return None;
    }

    let len = buffer.len();
    let mut current = start;
    for _ in 0..len {
        current = Some(match (current, direction) {
            (None, Direction::Forward) => 0,
            (None, Direction::Backward) => len - 1,
            (Some(row), Direction::Forward) => {
                if row + 1 == len {
                    0
                } else {
                    row + 1
                }
            }
            (Some(row), Direction::Backward) => {
                if row == 0 {
                    len - 1
                } else {
                    row - 1
                }
            }
        });

        let row = current.and_then(|at| buffer.row(at))?;
        if let Some(byte) = row.render().find(query) {
            let rx = row.render()[..byte].chars().count();
            return Some((row.index, rx));
        }
    }
    None
}

/// State of one incremental search session.
#[derive(Debug, Default)]
pub struct Search {
    last_match: Option<usize>,
    direction: Direction,
    saved: Option<SavedHighlight>,
}

/// The matched row's highlight tags, saved verbatim before the overlay.
#[derive(Debug)]
struct SavedHighlight {
    row: usize,
    highlight: Vec<Highlight>,
}

impl Search {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one search step. Restores the previous overlay first, then scans
    /// one step from the last match in the requested direction. On a match,
    /// overlays the Match tag and returns `(row, char_index)`; on a miss,
    /// buffer state is left unchanged.
    pub fn step(&mut self, buffer: &mut Buffer, query: &str, motion: Motion) -> Option<(usize, usize)> {
        self.restore(buffer);

        match motion {
            Motion::Next => self.direction = Direction::Forward,
            Motion::Prev => self.direction = Direction::Backward,
            Motion::Restart => {
                self.last_match = None;
                self.direction = Direction::Forward;
            }
        }
        // Without a previous match there is nothing to step backward from.
        if self.last_match.is_none() {
            self.direction = Direction::Forward;
        }

        let (row, rx) = find_render(buffer, query, self.last_match, self.direction)?;
        self.last_match = Some(row);
        debug!(query, row, rx, "search match");

        let match_len = query.chars().count();
        let tab_stop = buffer.tab_stop();
        if let Some(r) = buffer.row_mut(row) {
            self.saved = Some(SavedHighlight {
                row,
                highlight: r.highlight().to_vec(),
            });
            r.overlay_match(rx, match_len);
            let cx = r.rx_to_cx(rx, tab_stop);
            return Some((row, cx));
        }
        None
    }

    /// End the session: restore the overlaid row and reset to the default
    /// state (no last match, forward).
    pub fn finish(&mut self, buffer: &mut Buffer) {
        self.restore(buffer);
        self.last_match = None;
        self.direction = Direction::Forward;
    }

    fn restore(&mut self, buffer: &mut Buffer) {
        if let Some(saved) = self.saved.take() {
            if let Some(row) = buffer.row_mut(saved.row) {
                row.highlight = saved.highlight;
            }
        }
    }
}
