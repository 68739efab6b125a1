//! Command-line argument parsing for the editor

use clap::Parser;
use std::path::PathBuf;

/// A small terminal text editor
#[derive(Parser, Debug)]
#[command(name = "strand", version, about = "A small terminal text editor")]
pub struct CliArgs {
    /// File to open
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Go to line N in the opened file
    #[arg(long, value_name = "N")]
    pub line: Option<usize>,
}

impl CliArgs {
    /// Initial cursor line, 0-indexed (the user counts from 1).
    pub fn initial_line(&self) -> Option<usize> {
        self.line.map(|n| n.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_is_one_indexed() {
        let args = CliArgs {
            path: None,
            line: Some(42),
        };
        assert_eq!(args.initial_line(), Some(41));
    }

    #[test]
    fn test_line_zero_clamps() {
        let args = CliArgs {
            path: None,
            line: Some(0),
        };
        assert_eq!(args.initial_line(), Some(0));
    }
}
