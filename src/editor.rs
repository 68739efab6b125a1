//! The editing session: cursor, viewport offsets, status message, and the
//! editor-level operations that drive the row store.
//!
//! One [`Editor`] owns one document. Everything the C-style global editor
//! state would hold lives here and is passed by reference into the input
//! and view layers.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::buffer::Buffer;
use crate::config::Config;

/// How long a status message stays visible.
const STATUS_TTL_SECS: u64 = 5;

/// Cursor movement directions driven by the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug)]
struct StatusMessage {
    text: String,
    time: Instant,
}

/// One editing session over one document.
#[derive(Debug)]
pub struct Editor {
    buffer: Buffer,
    /// Cursor position: row and character index within the row. `cy` may be
    /// one past the last row (the virtual row after the document).
    cx: usize,
    cy: usize,
    row_offset: usize,
    col_offset: usize,
    filename: Option<PathBuf>,
    status: Option<StatusMessage>,
    config: Config,
}

impl Editor {
    pub fn new(config: Config) -> Self {
        Self {
            buffer: Buffer::new(config.tab_stop),
            cx: 0,
            cy: 0,
            row_offset: 0,
            col_offset: 0,
            filename: None,
            status: None,
            config,
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cx(&self) -> usize {
        self.cx
    }

    pub fn cy(&self) -> usize {
        self.cy
    }

    pub fn set_cursor(&mut self, cy: usize, cx: usize) {
        self.cy = cy.min(self.buffer.len());
        self.cx = cx;
        self.snap_cx();
    }

    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    pub fn col_offset(&self) -> usize {
        self.col_offset
    }

    pub fn set_row_offset(&mut self, offset: usize) {
        self.row_offset = offset;
    }

    pub fn set_col_offset(&mut self, offset: usize) {
        self.col_offset = offset;
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.buffer.is_dirty()
    }

    /// Display name for the status bar.
    pub fn display_name(&self) -> String {
        self.filename
            .as_deref()
            .and_then(Path::to_str)
            .unwrap_or("[No Name]")
            .to_string()
    }

    // === File operations ===

    /// Load `path` into the buffer. A nonexistent path starts an empty
    /// buffer that will be created on save.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        self.set_filename(path.to_path_buf());

        if !path.exists() {
            info!(path = %path.display(), "opening new file");
            return Ok(());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        for (i, line) in content.lines().enumerate() {
            self.buffer
                .insert_row(i, line)
                .with_context(|| format!("Failed to load line {}", i + 1))?;
        }
        self.buffer.mark_clean();
        info!(path = %path.display(), rows = self.buffer.len(), "opened file");
        Ok(())
    }

    /// Serialize the buffer and write it to the current filename. Returns
    /// the number of bytes written.
    pub fn save(&mut self) -> Result<usize> {
        let Some(path) = self.filename.clone() else {
            bail!("no filename set");
        };
        let content = self.buffer.serialize();
        std::fs::write(&path, &content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        self.buffer.mark_clean();
        info!(path = %path.display(), bytes = content.len(), "saved file");
        Ok(content.len())
    }

    /// Set the filename and select the matching language profile, which
    /// re-highlights the whole buffer.
    pub fn set_filename(&mut self, path: PathBuf) {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            self.buffer.select_syntax(name);
        }
        self.filename = Some(path);
    }

    /// Reset to an empty, unnamed buffer.
    pub fn kill_buffer(&mut self) {
        self.buffer = Buffer::new(self.config.tab_stop);
        self.cx = 0;
        self.cy = 0;
        self.row_offset = 0;
        self.col_offset = 0;
        self.filename = None;
        self.status = None;
    }

    // === Editing operations ===

    /// Insert a character at the cursor. On the virtual row past the end of
    /// the document a fresh row is created first, so callers never
    /// special-case the empty document.
    pub fn insert_char(&mut self, ch: char) {
        if self.cy == self.buffer.len() {
            self.buffer.insert_row(self.cy, "").ok();
        }
        self.buffer.insert_char(self.cy, self.cx, ch);
        self.cx += 1;
    }

    /// Split the current row at the cursor (or open an empty row above when
    /// the cursor is at column 0).
    pub fn insert_newline(&mut self) {
        if self.cx == 0 {
            self.buffer.insert_row(self.cy, "").ok();
        } else {
            self.buffer.split_row(self.cy, self.cx).ok();
        }
        self.cy += 1;
        self.cx = 0;
    }

    /// Backward delete: remove the character left of the cursor, or merge
    /// the current row into the previous one at a row boundary. No-op at
    /// the very start of the document and on the virtual row.
    pub fn delete_char(&mut self) {
        if self.cy == self.buffer.len() {
            return;
        }
        if self.cx == 0 && self.cy == 0 {
            return;
        }

        if self.cx > 0 {
            self.buffer.delete_char(self.cy, self.cx - 1);
            self.cx -= 1;
        } else {
            let Some(prev) = self.buffer.row(self.cy - 1) else {
                return;
            };
            let prev_len = prev.len();
            let tail = self
                .buffer
                .row(self.cy)
                .map(|r| r.chars().to_string())
                .unwrap_or_default();
            self.buffer.append_string(self.cy - 1, &tail);
            self.buffer.delete_row(self.cy).ok();
            self.cy -= 1;
            self.cx = prev_len;
        }
    }

    // === Cursor movement ===

    pub fn move_cursor(&mut self, mv: Move) {
        let row_len = self.buffer.row(self.cy).map(|r| r.len());

        match mv {
            Move::Left => {
                if self.cx > 0 {
                    self.cx -= 1;
                } else if self.cy > 0 {
                    // Wrap to the end of the previous line.
                    self.cy -= 1;
                    self.cx = self.buffer.row(self.cy).map_or(0, |r| r.len());
                }
            }
            Move::Right => {
                if let Some(len) = row_len {
                    if self.cx < len {
                        self.cx += 1;
                    } else {
                        // Wrap to the start of the next line.
                        self.cy += 1;
                        self.cx = 0;
                    }
                }
            }
            Move::Up => {
                self.cy = self.cy.saturating_sub(1);
            }
            Move::Down => {
                if self.cy < self.buffer.len() {
                    self.cy += 1;
                }
            }
        }

        self.snap_cx();
    }

    pub fn line_home(&mut self) {
        self.cx = 0;
    }

    pub fn line_end(&mut self) {
        self.cx = self.buffer.row(self.cy).map_or(0, |r| r.len());
    }

    pub fn page_up(&mut self, screen_rows: usize) {
        self.cy = self.row_offset;
        for _ in 0..screen_rows {
            self.move_cursor(Move::Up);
        }
    }

    pub fn page_down(&mut self, screen_rows: usize) {
        self.cy = (self.row_offset + screen_rows.saturating_sub(1)).min(self.buffer.len());
        for _ in 0..screen_rows {
            self.move_cursor(Move::Down);
        }
    }

    /// Move the cursor to a 0-indexed line, clamped to the buffer.
    pub fn goto_line(&mut self, line: usize) {
        self.cy = line.min(self.buffer.len());
        self.snap_cx();
    }

    /// Moving between lines of different lengths snaps the cursor back to
    /// the end of the new line.
    fn snap_cx(&mut self) {
        let len = self.buffer.row(self.cy).map_or(0, |r| r.len());
        if self.cx > len {
            self.cx = len;
        }
    }

    // === Viewport ===

    /// Keep the cursor inside the window, adjusting the scroll offsets.
    /// Returns the cursor's render column.
    pub fn scroll(&mut self, screen_rows: usize, screen_cols: usize) -> usize {
        let rx = self
            .buffer
            .row(self.cy)
            .map_or(0, |r| r.cx_to_rx(self.cx, self.config.tab_stop));

        if self.cy < self.row_offset {
            self.row_offset = self.cy;
        }
        if self.cy >= self.row_offset + screen_rows {
            self.row_offset = self.cy + 1 - screen_rows;
        }
        if rx < self.col_offset {
            self.col_offset = rx;
        }
        if rx >= self.col_offset + screen_cols {
            self.col_offset = rx + 1 - screen_cols;
        }

        rx
    }

    // === Status message ===

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            time: Instant::now(),
        });
    }

    /// The current status message, if it has not expired.
    pub fn status(&self) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|m| m.time.elapsed().as_secs() < STATUS_TTL_SECS)
            .map(|m| m.text.as_str())
    }
}
