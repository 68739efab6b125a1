//! Frame composition: text rows with per-character color, the key-hint bar,
//! the status bar, and the message bar.
//!
//! Each refresh queues the whole frame into one buffered writer and flushes
//! it with a single write, with the cursor hidden while drawing.

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::editor::Editor;
use crate::syntax::Highlight;

/// Rows reserved at the bottom of the screen: key hints, status, message.
const CHROME_ROWS: usize = 3;

const KEY_HINTS: &[(&str, &str)] = &[
    ("^Q", " Quit "),
    ("^S", " Save "),
    ("^O", " Open "),
    ("^K", " Kill "),
    ("^F", " Find "),
    ("^G", " GoTo "),
];

/// Number of rows available for document text.
pub fn text_rows(screen_rows: usize) -> usize {
    screen_rows.saturating_sub(CHROME_ROWS)
}

/// The fixed highlight-tag to terminal-color table.
fn color_for(tag: Highlight) -> Color {
    match tag {
        Highlight::Comment | Highlight::BlockComment => Color::Cyan,
        Highlight::Keyword1 => Color::Yellow,
        Highlight::Keyword2 => Color::Green,
        Highlight::String => Color::Magenta,
        Highlight::Number => Color::Red,
        Highlight::Match => Color::Blue,
        Highlight::Normal => Color::Reset,
    }
}

/// Compose and flush one frame.
pub fn refresh(editor: &mut Editor, screen_rows: usize, screen_cols: usize) -> Result<()> {
    let text_rows = text_rows(screen_rows);
    let rx = editor.scroll(text_rows, screen_cols);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    queue!(out, Hide, MoveTo(0, 0))?;

    draw_rows(editor, &mut out, text_rows, screen_cols)?;
    draw_key_hints(&mut out, screen_cols)?;
    draw_status_bar(editor, &mut out, screen_cols)?;
    draw_message_bar(editor, &mut out, screen_cols)?;

    let cursor_col = rx.saturating_sub(editor.col_offset()) as u16;
    let cursor_row = editor.cy().saturating_sub(editor.row_offset()) as u16;
    queue!(out, MoveTo(cursor_col, cursor_row), Show)?;

    out.flush()?;
    Ok(())
}

fn draw_rows(
    editor: &Editor,
    out: &mut impl Write,
    text_rows: usize,
    screen_cols: usize,
) -> Result<()> {
    for y in 0..text_rows {
        let file_row = y + editor.row_offset();

        match editor.buffer().row(file_row) {
            None => {
                if editor.buffer().is_empty() && y == text_rows / 3 {
                    draw_welcome(out, screen_cols)?;
                } else {
                    queue!(out, Print("~"))?;
                }
            }
            Some(row) => {
                let visible = row
                    .render()
                    .chars()
                    .zip(row.highlight().iter().copied())
                    .skip(editor.col_offset())
                    .take(screen_cols);

                let mut current: Option<Color> = None;
                for (ch, tag) in visible {
                    if ch.is_control() {
                        // Render control bytes as inverted @-offset symbols.
                        let sym = if (ch as u32) <= 26 {
                            char::from_u32('@' as u32 + ch as u32).unwrap_or('?')
                        } else {
                            '?'
                        };
                        queue!(
                            out,
                            SetAttribute(Attribute::Reverse),
                            Print(sym),
                            SetAttribute(Attribute::NoReverse)
                        )?;
                        if let Some(color) = current {
                            queue!(out, SetForegroundColor(color))?;
                        }
                    } else {
                        let color = color_for(tag);
                        if current != Some(color) {
                            queue!(out, SetForegroundColor(color))?;
                            current = Some(color);
                        }
                        queue!(out, Print(ch))?;
                    }
                }
                queue!(out, SetForegroundColor(Color::Reset))?;
            }
        }

        queue!(out, Clear(ClearType::UntilNewLine), Print("\r\n"))?;
    }
    Ok(())
}

fn draw_welcome(out: &mut impl Write, screen_cols: usize) -> Result<()> {
    let mut welcome = format!("strand editor -- version {}", env!("CARGO_PKG_VERSION"));
    welcome.truncate(screen_cols);

    let mut padding = (screen_cols.saturating_sub(welcome.len())) / 2;
    if padding > 0 {
        queue!(out, Print("~"))?;
        padding -= 1;
    }
    queue!(out, Print(" ".repeat(padding)), Print(welcome))?;
    Ok(())
}

fn draw_key_hints(out: &mut impl Write, screen_cols: usize) -> Result<()> {
    let mut used = 0;
    for (key, label) in KEY_HINTS {
        if used + key.len() + label.len() > screen_cols {
            break;
        }
        queue!(
            out,
            SetAttribute(Attribute::Reverse),
            Print(key),
            SetAttribute(Attribute::NoReverse),
            Print(label)
        )?;
        used += key.len() + label.len();
    }
    queue!(out, Clear(ClearType::UntilNewLine), Print("\r\n"))?;
    Ok(())
}

fn draw_status_bar(editor: &Editor, out: &mut impl Write, screen_cols: usize) -> Result<()> {
    let mut name = editor.display_name();
    name.truncate(20);
    let modified = if editor.is_dirty() { " (modified)" } else { "" };
    let mut left = format!("{} - {} lines{}", name, editor.buffer().len(), modified);

    let filetype = editor
        .buffer()
        .syntax()
        .map(|s| s.filetype)
        .unwrap_or("no ft");
    let right = format!(
        "{} | {}/{}",
        filetype,
        editor.cy() + 1,
        editor.buffer().len()
    );

    left.truncate(screen_cols);
    let gap = screen_cols.saturating_sub(left.len() + right.len());

    queue!(out, SetAttribute(Attribute::Reverse), Print(&left))?;
    if left.len() + right.len() <= screen_cols {
        queue!(out, Print(" ".repeat(gap)), Print(&right))?;
    } else {
        queue!(out, Print(" ".repeat(gap)))?;
    }
    queue!(
        out,
        SetAttribute(Attribute::NoReverse),
        Print("\r\n")
    )?;
    Ok(())
}

fn draw_message_bar(editor: &Editor, out: &mut impl Write, screen_cols: usize) -> Result<()> {
    queue!(out, Clear(ClearType::UntilNewLine))?;
    if let Some(message) = editor.status() {
        let mut message = message.to_string();
        message.truncate(screen_cols);
        queue!(out, Print(message))?;
    }
    Ok(())
}
