use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::GameError;

/// The Tetris high score, stored as a little-endian u64.
#[derive(Clone, Debug)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file means no high score yet.
    pub fn load(&self) -> Result<u64, GameError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no high score file");
                return Ok(0);
            }
            Err(e) => return Err(e.into()),
        };
        let raw: [u8; 8] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| GameError::CorruptHighScore {
                path: self.path.clone(),
                len: bytes.len(),
            })?;
        Ok(u64::from_le_bytes(raw))
    }

    /// Persist `max(score, previous)` and return what was written.
    pub fn save(&self, score: u64, previous: u64) -> Result<u64, GameError> {
        let best = score.max(previous);
        fs::write(&self.path, best.to_le_bytes())?;
        info!(path = %self.path.display(), high_score = best, "high score saved");
        Ok(best)
    }
}
