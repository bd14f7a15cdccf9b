pub mod config;
pub mod draw;
pub mod error;
pub mod proc;
pub mod timer;

pub use error::{Error, Result};
pub use proc::{Board, DEFAULT_DENSITY};
pub use timer::Stopwatch;
