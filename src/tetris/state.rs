use tracing::{debug, info};

use super::grid::{Cell, Grid};
use super::piece::{ActivePiece, RandomShapes, Shape, ShapeSource};
use crate::config::{BOARD_H, BOARD_W};

/// Outcome of one gravity tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Stepped,
    Locked,
    GameOver,
}

pub struct Game {
    grid: Grid,
    current: ActivePiece,
    source: Box<dyn ShapeSource>,
    game_over: bool,
    score: u64,
    high_score: u64,
    lines_cleared: u64,
    pieces_placed: u64,
    placement_bonus: u64,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Box::new(RandomShapes::new()))
    }
}

impl Game {
    pub fn new(source: Box<dyn ShapeSource>) -> Self {
        Self::with_size(BOARD_W, BOARD_H, source)
    }

    pub fn with_size(width: usize, height: usize, source: Box<dyn ShapeSource>) -> Self {
        Self::from_grid(Grid::new(width, height), source)
    }

    /// Start on a grid that may already hold locked cells.
    pub fn from_grid(grid: Grid, mut source: Box<dyn ShapeSource>) -> Self {
        let current = ActivePiece::spawn(source.next_kind(), grid.width());
        let mut game = Self {
            grid,
            current,
            source,
            game_over: false,
            score: 0,
            high_score: 0,
            lines_cleared: 0,
            pieces_placed: 0,
            placement_bonus: 0,
        };
        if !game.fits(&game.current) {
            game.game_over = true;
        }
        game
    }

    /// Best score from earlier sessions, shown alongside the live score.
    pub fn with_high_score(mut self, high_score: u64) -> Self {
        self.high_score = high_score;
        self
    }

    /// Flat points awarded every time a piece locks.
    pub fn with_placement_bonus(mut self, bonus: u64) -> Self {
        self.placement_bonus = bonus;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current(&self) -> &ActivePiece {
        &self.current
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// The value to persist at shutdown.
    pub fn best_score(&self) -> u64 {
        self.score.max(self.high_score)
    }

    pub fn lines_cleared(&self) -> u64 {
        self.lines_cleared
    }

    pub fn pieces_placed(&self) -> u64 {
        self.pieces_placed
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Whether `shape` fits with its top-left at (x, y). Rows above the grid
    /// are allowed; columns outside it and filled cells are not.
    pub fn valid(&self, shape: &Shape, x: i32, y: i32) -> bool {
        let width = self.grid.width() as i32;
        let height = self.grid.height() as i32;
        shape.offsets().all(|(dx, dy)| {
            let (Some(cx), Some(cy)) = (x.checked_add(dx), y.checked_add(dy)) else {
                return false;
            };
            if cx < 0 || cx >= width || cy >= height {
                return false;
            }
            cy < 0 || self.grid.get(cx as usize, cy as usize) == Some(Cell::Empty)
        })
    }

    fn fits(&self, piece: &ActivePiece) -> bool {
        self.valid(&piece.shape, piece.x, piece.y)
    }

    /// Replace the active piece with a fresh one from the source. Sets game
    /// over when it does not fit where it spawns.
    pub fn try_spawn(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.current = ActivePiece::spawn(self.source.next_kind(), self.grid.width());
        if self.fits(&self.current) {
            true
        } else {
            info!(score = self.score, kind = ?self.current.kind, "spawn blocked, game over");
            self.game_over = true;
            false
        }
    }

    pub fn move_current(&mut self, dx: i32, dy: i32) -> bool {
        if self.game_over {
            return false;
        }
        match self.current.shifted(dx, dy) {
            Some(next) if self.fits(&next) => {
                self.current = next;
                true
            }
            _ => false,
        }
    }

    /// No wall kicks: a blocked rotation is dropped.
    pub fn rotate_current(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let rotated = self.current.shape.rotated();
        if self.valid(&rotated, self.current.x, self.current.y) {
            self.current.shape = rotated;
            true
        } else {
            false
        }
    }

    /// Gravity: step down one row, or lock if that is blocked.
    pub fn tick(&mut self) -> Tick {
        if self.game_over {
            return Tick::GameOver;
        }
        if self.move_current(0, 1) {
            return Tick::Stepped;
        }
        self.lock_piece();
        if self.game_over { Tick::GameOver } else { Tick::Locked }
    }

    pub fn hard_drop(&mut self) -> Tick {
        if self.game_over {
            return Tick::GameOver;
        }
        while self.move_current(0, 1) {}
        self.lock_piece();
        if self.game_over { Tick::GameOver } else { Tick::Locked }
    }

    /// Where the active piece would land.
    pub fn ghost(&self) -> ActivePiece {
        let mut ghost = self.current.clone();
        while let Some(below) = ghost.shifted(0, 1).filter(|p| self.fits(p)) {
            ghost = below;
        }
        ghost
    }

    /// Write the active piece into the grid, score, clear rows, spawn the next one.
    pub fn lock_piece(&mut self) {
        if self.game_over {
            return;
        }
        for (x, y) in self.current.cells() {
            // Cells still above the grid are dropped.
            if x >= 0 && y >= 0 {
                self.grid.set(x as usize, y as usize, Cell::Filled(self.current.color));
            }
        }
        self.pieces_placed += 1;
        self.score += self.placement_bonus;
        debug!(kind = ?self.current.kind, x = self.current.x, y = self.current.y, "piece locked");

        self.clear_lines();
        self.try_spawn();
    }

    /// Clear full rows and score `lines^2 * 100` for them. Returns the count.
    pub fn clear_lines(&mut self) -> usize {
        if self.game_over {
            return 0;
        }
        let cleared = self.grid.clear_full_rows();
        if cleared > 0 {
            let n = cleared as u64;
            self.lines_cleared += n;
            self.score += n * n * 100;
            info!(lines = cleared, score = self.score, "lines cleared");
        }
        cleared
    }
}
