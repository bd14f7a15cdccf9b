use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cell ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("pattern row {row} has {found} cells, expected {expected}")]
    RaggedPattern {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("stopwatch is already running")]
    AlreadyStarted,

    #[error("stopwatch was not started")]
    NotStarted,

    #[error("invalid interval: {micros}us between start and stop")]
    InvalidInterval { micros: i64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
