use std::path::PathBuf;

use crate::game::{Placement, COLS};

/// Reasons a column drop is rejected. The board is never modified when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (expected 0-{max})", max = COLS - 1)]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised while interpreting a line of player input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("malformed input '{0}': enter a column number or the forfeit token")]
    Malformed(String),
}

/// Errors raised when building a position from raw player boards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("both players occupy column {}, row {}", .0.column, .0.row)]
    Overlap(Placement),

    #[error("disc at column {}, row {} is floating above an empty cell", .0.column, .0.row)]
    Floating(Placement),
}

/// Errors that end the turn loop without a game result.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("input closed before the game finished")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
