use clap::Parser;
use std::path::PathBuf;

use crate::{
    board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE},
    command::parse_board_size,
};

#[derive(Parser, Debug)]
#[command(version, about = "Tic-tac-toe on an N×N board with move history")]
pub struct Args {
    /// Board side length (3 to 99)
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = board_size)]
    pub size: usize,

    /// Comma-separated cell indices to play in order, e.g. "0,4,8"
    #[arg(long, value_name = "CELLS")]
    pub moves: Option<String>,

    /// File with one command per line: play N | jump N | resize N | sort
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Evaluate a board given row by row, e.g. "XOX/OXO/OXO"
    #[arg(long, value_name = "ROWS", conflicts_with_all = ["moves", "script"])]
    pub board: Option<String>,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,
}

impl Args {
    /// True when the run should print a result instead of opening the UI.
    pub fn is_headless(&self) -> bool {
        self.moves.is_some() || self.script.is_some() || self.board.is_some()
    }
}

fn board_size(raw: &str) -> Result<usize, String> {
    parse_board_size(raw).ok_or_else(|| {
        format!(
            "expected an integer from {} to {}, got {:?}",
            MIN_BOARD_SIZE, MAX_BOARD_SIZE, raw
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["tictactoe-history"]).unwrap();
        assert_eq!(args.size, 3);
        assert!(!args.is_headless());
        assert_eq!(args.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_size_validation() {
        assert!(Args::try_parse_from(["t", "--size", "2"]).is_err());
        assert!(Args::try_parse_from(["t", "--size", "x"]).is_err());
        assert!(Args::try_parse_from(["t", "--size", "4294967296"]).is_err());
        let args = Args::try_parse_from(["t", "--size", "9"]).unwrap();
        assert_eq!(args.size, 9);
    }

    #[test]
    fn test_headless_flags() {
        let args = Args::try_parse_from(["t", "--moves", "0,4", "--json"]).unwrap();
        assert!(args.is_headless());
        assert!(args.json);
        assert!(Args::try_parse_from(["t", "--moves", "0", "--board", "XXX/.../..."]).is_err());
    }
}
