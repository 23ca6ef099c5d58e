//! Game core: board, win detection, turn state machine, computer opponent.

pub mod logic;
pub mod types;

pub use logic::{find_computer_move, has_winning_run, is_draw, submit_move, GameInput};
pub use types::{
    Board, ConfigError, Game, GameConfig, GameMode, GameStatus, Mark, MoveError, Player,
};
