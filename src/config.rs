// Shared game UI/constants.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const BOARD_W: usize = 10;
pub const BOARD_H: usize = 20;
pub const CELL_W: usize = 2; // render each block as two characters wide
pub const PLAY_W: usize = BOARD_W * CELL_W + 2; // inner width plus side walls
pub const PLAY_H: usize = BOARD_H + 2; // inner height plus ceiling/floor
pub const MIN_PANE_WIDTH: u16 = (PLAY_W as u16) + 2;

pub const CHECKERS_SIZE: usize = 8;
pub const SQUARE_W: usize = 4; // checkers squares are wider to read as squares
pub const CHECKERS_PLAY_W: usize = CHECKERS_SIZE * SQUARE_W + 2;
pub const CHECKERS_PLAY_H: usize = CHECKERS_SIZE * 2 + 2;

pub const GRAVITY_MS: u64 = 500;
pub const FRAME_MS: u64 = 16;
pub const HIGH_SCORE_FILE: &str = "high_score.dat";
pub const LOG_FILE: &str = "juegos.log";

/// Runtime settings, read once at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Where the Tetris high score is kept between sessions
    pub high_score_path: PathBuf,

    /// Log file; the terminal belongs to the UI
    pub log_path: PathBuf,

    /// Interval between gravity ticks
    pub gravity: Duration,

    /// Flat points added every time a piece locks
    pub placement_bonus: u64,

    /// Checkers: only capturing moves are legal while one exists
    pub forced_capture: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            high_score_path: PathBuf::from(HIGH_SCORE_FILE),
            log_path: PathBuf::from(LOG_FILE),
            gravity: Duration::from_millis(GRAVITY_MS),
            placement_bonus: 0,
            forced_capture: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Missing or unparsable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let high_score_path = lookup("JUEGOS_HIGH_SCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.high_score_path);

        let log_path = lookup("JUEGOS_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_path);

        let gravity = lookup("JUEGOS_GRAVITY_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.gravity);

        let placement_bonus = lookup("JUEGOS_PLACEMENT_BONUS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.placement_bonus);

        let forced_capture = lookup("JUEGOS_FORCED_CAPTURE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.forced_capture);

        Self {
            high_score_path,
            log_path,
            gravity,
            placement_bonus,
            forced_capture,
        }
    }
}
