use std::path::PathBuf;

/// Errors raised by board construction and token placement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions: got {rows} rows with a row of {cols} cells")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("column {0} is outside the board")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors from playing a move in a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur while saving or loading a game.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("no save file found at {0}")]
    InvalidFileName(PathBuf),

    #[error("failed to read save file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse save data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("saved board is malformed: {0}")]
    Board(#[from] BoardError),

    #[error("saved current player '{0}' is not seated in this game")]
    UnknownPlayer(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that end an interactive session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before the game finished")]
    InputClosed,
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
