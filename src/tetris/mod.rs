pub mod grid;
pub mod piece;
pub mod state;

pub use grid::{Cell, Color, Grid};
pub use piece::{ActivePiece, RandomShapes, Shape, ShapeSource, Tetromino};
pub use state::{Game, Tick};
