//! Crosses - Terminal Noughts and Crosses
//!
//! A generalized tic-tac-toe on a configurable rectangular field: first
//! player to line up a configurable number of marks wins. This library
//! exposes the game core for testing and external use; the binary adds
//! the terminal front end.

pub mod build_info;
pub mod constants;
pub mod game;
pub mod input;
pub mod ui;

pub use game::{Board, ConfigError, Game, GameConfig, GameMode, GameStatus, Mark, MoveError, Player};
