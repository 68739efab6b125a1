//! strand binary entrypoint: CLI parsing, logging, and the main loop.

use anyhow::Result;
use clap::Parser;

use strand::cli::CliArgs;
use strand::config::Config;
use strand::editor::Editor;
use strand::input::{Action, InputHandler};
use strand::terminal::Terminal;
use strand::view;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let _log_guard = strand::tracing::init();

    let config = Config::load();
    let mut editor = Editor::new(config);

    // Open the file before touching the terminal, so load errors print
    // normally.
    if let Some(path) = &args.path {
        editor.open(path)?;
    }
    if let Some(line) = args.initial_line() {
        editor.goto_line(line);
    }

    editor.set_status("HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find");

    let _terminal = Terminal::new()?;
    let mut input = InputHandler::new(editor.config().quit_times);

    loop {
        let (rows, cols) = Terminal::size()?;
        view::refresh(&mut editor, rows, cols)?;
        if input.process(&mut editor)? == Action::Quit {
            break;
        }
    }

    Ok(())
}
