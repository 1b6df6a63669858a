//! Terminal checkers ("damas") and Tetris.
//!
//! The rule engines in [`checkers`] and [`tetris`] hold all game state and
//! never draw or read input; [`app`] drives them and [`ui`] renders them.

pub mod app;
pub mod checkers;
pub mod config;
pub mod error;
pub mod io;
pub mod tetris;
pub mod ui;

pub use error::GameError;
