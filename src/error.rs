//! Error types for the parts of the program that touch the outside world.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("high score file {path:?} holds {len} bytes, expected 8")]
    CorruptHighScore { path: PathBuf, len: usize },
}
