pub mod board;
pub mod moves;
pub mod state;

pub use board::{Board, Cell, Piece, PieceId, Side, Square};
pub use moves::{valid_moves, MoveSet};
pub use state::{Game, Rules};
