//! Raw-mode terminal session and key input.
//!
//! [`Terminal`] is a guard: constructing it enters raw mode and the
//! alternate screen, dropping it restores the terminal even on early
//! returns and panics that unwind.

use std::io;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::debug;

pub struct Terminal;

impl Terminal {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::MoveTo(0, 0))?;
        debug!("entered raw mode");
        Ok(Self)
    }

    /// Current screen size as `(rows, cols)`.
    pub fn size() -> Result<(usize, usize)> {
        let (cols, rows) = terminal::size()?;
        Ok((rows as usize, cols as usize))
    }

    /// Block until the next key press.
    pub fn read_key() -> Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                // Release events arrive on some platforms; keypresses only.
                if key.kind != KeyEventKind::Release {
                    return Ok(key);
                }
            }
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
        debug!("left raw mode");
    }
}
