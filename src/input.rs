//! Keypress dispatch and the status-bar prompt.
//!
//! The prompt is incremental: a callback observes every keystroke with the
//! current input, which is what drives search-as-you-type.

use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::editor::{Editor, Move};
use crate::search::{Motion, Search};
use crate::terminal::Terminal;
use crate::view;

/// What the main loop should do after a keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// What happened to the prompt on the last keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptKey {
    /// The input text changed.
    Edited,
    Forward,
    Backward,
    Submit,
    Cancel,
}

/// Per-session input state: the quit-confirmation countdown.
pub struct InputHandler {
    quit_times: usize,
}

impl InputHandler {
    pub fn new(quit_times: usize) -> Self {
        Self { quit_times }
    }

    /// Read and dispatch one keypress.
    pub fn process(&mut self, editor: &mut Editor) -> Result<Action> {
        let key = Terminal::read_key()?;
        let (screen_rows, _) = Terminal::size()?;
        let text_rows = view::text_rows(screen_rows);

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                if editor.is_dirty() && self.quit_times > 0 {
                    editor.set_status(format!(
                        "WARNING!!! File has unsaved changes. \
                         Press Ctrl-Q {} more times to quit.",
                        self.quit_times
                    ));
                    self.quit_times -= 1;
                    return Ok(Action::Continue);
                }
                return Ok(Action::Quit);
            }

            (KeyCode::Enter, _) => editor.insert_newline(),
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => save(editor)?,
            (KeyCode::Char('o'), KeyModifiers::CONTROL) => open_file(editor)?,
            (KeyCode::Char('k'), KeyModifiers::CONTROL) => editor.kill_buffer(),
            (KeyCode::Char('f'), KeyModifiers::CONTROL) => find(editor)?,
            (KeyCode::Char('g'), KeyModifiers::CONTROL) => goto_line(editor)?,

            (KeyCode::Home, _) | (KeyCode::Char('b'), KeyModifiers::CONTROL) => {
                editor.line_home()
            }
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => editor.line_end(),

            (KeyCode::Backspace, _) | (KeyCode::Char('h'), KeyModifiers::CONTROL) => {
                editor.delete_char()
            }
            (KeyCode::Delete, _) => {
                editor.move_cursor(Move::Right);
                editor.delete_char();
            }

            (KeyCode::PageUp, _) => editor.page_up(text_rows),
            (KeyCode::PageDown, _) => editor.page_down(text_rows),

            (KeyCode::Up, _) => editor.move_cursor(Move::Up),
            (KeyCode::Down, _) => editor.move_cursor(Move::Down),
            (KeyCode::Left, _) => editor.move_cursor(Move::Left),
            (KeyCode::Right, _) => editor.move_cursor(Move::Right),

            // Traditionally refreshes the screen; the next frame does that
            // anyway.
            (KeyCode::Char('l'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {}

            (KeyCode::Tab, _) => editor.insert_char('\t'),
            (KeyCode::Char(ch), mods)
                if !mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                editor.insert_char(ch)
            }

            _ => {}
        }

        self.quit_times = editor.config().quit_times;
        Ok(Action::Continue)
    }
}

/// Run a status-bar prompt until Enter or Esc. The callback sees the input
/// after every keystroke. Returns None when cancelled.
fn prompt<F>(editor: &mut Editor, prefix: &str, mut callback: F) -> Result<Option<String>>
where
    F: FnMut(&mut Editor, &str, PromptKey),
{
    let mut input = String::new();
    loop {
        editor.set_status(format!("{}{}", prefix, input));
        let (rows, cols) = Terminal::size()?;
        view::refresh(editor, rows, cols)?;

        let KeyEvent {
            code, modifiers, ..
        } = Terminal::read_key()?;

        match (code, modifiers) {
            (KeyCode::Esc, _) => {
                editor.set_status("");
                callback(editor, &input, PromptKey::Cancel);
                return Ok(None);
            }
            (KeyCode::Enter, _) if !input.is_empty() => {
                editor.set_status("");
                callback(editor, &input, PromptKey::Submit);
                return Ok(Some(input));
            }
            (KeyCode::Backspace, _)
            | (KeyCode::Delete, _)
            | (KeyCode::Char('h'), KeyModifiers::CONTROL) => {
                input.pop();
                callback(editor, &input, PromptKey::Edited);
            }
            (KeyCode::Right, _) | (KeyCode::Down, _) => {
                callback(editor, &input, PromptKey::Forward);
            }
            (KeyCode::Left, _) | (KeyCode::Up, _) => {
                callback(editor, &input, PromptKey::Backward);
            }
            (KeyCode::Char(ch), mods)
                if !mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                input.push(ch);
                callback(editor, &input, PromptKey::Edited);
            }
            _ => {}
        }
    }
}

/// Incremental search. Arrows step between matches, Esc restores the
/// cursor, Enter leaves it on the match.
fn find(editor: &mut Editor) -> Result<()> {
    let saved_cursor = (editor.cy(), editor.cx());
    let saved_offsets = (editor.row_offset(), editor.col_offset());

    let mut search = Search::new();
    let accepted = prompt(
        editor,
        "Search (ESC/Arrows/Enter): ",
        |ed, query, key| {
            let motion = match key {
                PromptKey::Forward => Motion::Next,
                PromptKey::Backward => Motion::Prev,
                PromptKey::Edited => Motion::Restart,
                PromptKey::Submit | PromptKey::Cancel => {
                    search.finish(ed.buffer_mut());
                    return;
                }
            };
            if let Some((row, cx)) = search.step(ed.buffer_mut(), query, motion) {
                ed.set_cursor(row, cx);
                // Scroll so the next refresh lands the match at the top of
                // the window.
                ed.set_row_offset(ed.buffer().len());
            }
        },
    )?;

    if accepted.is_none() {
        let (cy, cx) = saved_cursor;
        editor.set_cursor(cy, cx);
        editor.set_row_offset(saved_offsets.0);
        editor.set_col_offset(saved_offsets.1);
    }
    Ok(())
}

/// Save the buffer, prompting for a filename first if there is none.
fn save(editor: &mut Editor) -> Result<()> {
    if editor.filename().is_none() {
        match prompt(editor, "Save as (ESC to cancel): ", |_, _, _| {})? {
            Some(name) => editor.set_filename(PathBuf::from(name)),
            None => {
                editor.set_status("Save aborted");
                return Ok(());
            }
        }
    }

    match editor.save() {
        Ok(bytes) => editor.set_status(format!("{} bytes written to disk", bytes)),
        Err(e) => {
            warn!("save failed: {:#}", e);
            editor.set_status(format!("Can't save! I/O error: {}", e));
        }
    }
    Ok(())
}

/// Prompt for a path, replacing the current buffer with its contents.
fn open_file(editor: &mut Editor) -> Result<()> {
    let Some(name) = prompt(editor, "Open (ESC to cancel): ", |_, _, _| {})? else {
        return Ok(());
    };

    editor.kill_buffer();
    if let Err(e) = editor.open(&PathBuf::from(name)) {
        warn!("open failed: {:#}", e);
        editor.set_status(format!("Can't open! I/O error: {}", e));
    }
    Ok(())
}

/// Prompt for a 1-based line number and jump to it.
fn goto_line(editor: &mut Editor) -> Result<()> {
    let Some(input) = prompt(editor, "Go to line (ESC to cancel): ", |_, _, _| {})? else {
        return Ok(());
    };

    match input.trim().parse::<usize>() {
        Ok(line) => editor.goto_line(line.saturating_sub(1)),
        Err(_) => editor.set_status(format!("Not a line number: {}", input)),
    }
    Ok(())
}
