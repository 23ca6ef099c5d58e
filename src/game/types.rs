//! Core data types: cell marks, players, configuration, board, game state.

use crate::constants::{FIELD_SIZE_MAX, FIELD_SIZE_MIN};
use serde::{Deserialize, Serialize};

/// Contents of a single field cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    Human,
    Computer,
}

/// A participant in the game.
///
/// In two-player mode the second human plays the `Computer` mark; the
/// names follow the marks, not who is behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(&self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// The mark this player places on the field.
    pub fn mark(&self) -> Mark {
        match self {
            Player::Human => Mark::Human,
            Player::Computer => Mark::Computer,
        }
    }
}

/// Game mode selected on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    HumanVsComputer,
    HumanVsHuman,
}

impl GameMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HumanVsComputer => "Human vs Computer",
            Self::HumanVsHuman => "Human vs Human",
        }
    }
}

/// Game state. Transitions only forward: once a terminal state is
/// reached the game never returns to `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    HumanWon,
    ComputerWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

/// Errors from game setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("field side {0} is outside the allowed range 3..=10")]
    SizeOutOfRange(usize),

    #[error("win length must be at least 1")]
    RunTooShort,

    #[error("win length {run} cannot exceed the longer field side {side}")]
    RunTooLong { run: usize, side: usize },
}

/// Errors from submitting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell ({x}, {y}) is outside the field")]
    OutOfBounds { x: usize, y: usize },

    #[error("cell ({x}, {y}) is already occupied")]
    Occupied { x: usize, y: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Per-game configuration, chosen on the setup screen. Immutable for
/// the duration of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: GameMode,
    pub width: usize,
    pub height: usize,
    /// Consecutive marks needed to win.
    pub run_length: usize,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for side in [self.width, self.height] {
            if !(FIELD_SIZE_MIN..=FIELD_SIZE_MAX).contains(&side) {
                return Err(ConfigError::SizeOutOfRange(side));
            }
        }
        if self.run_length < 1 {
            return Err(ConfigError::RunTooShort);
        }
        // A run longer than the longest side could never be completed and
        // every game would silently end in a draw; reject it up front.
        let side = self.width.max(self.height);
        if self.run_length > side {
            return Err(ConfigError::RunTooLong {
                run: self.run_length,
                side,
            });
        }
        Ok(())
    }
}

/// The playing field. Cells are stored row-major; `(x, y)` addresses
/// column `x` of row `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Mark>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Mark::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a position lies on the field. Signed coordinates so that
    /// line scans can probe past the edge.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Mark at `(x, y)`. Position must be on the field.
    pub fn get(&self, x: usize, y: usize) -> Mark {
        self.cells[y * self.width + x]
    }

    /// Check if a cell is free. Position must be on the field.
    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == Mark::Empty
    }

    /// Place a mark into a free cell. Placing outside the field or onto
    /// an occupied cell is a caller bug and fails with a `MoveError`
    /// rather than silently doing nothing.
    pub fn place(&mut self, x: usize, y: usize, mark: Mark) -> Result<(), MoveError> {
        if !self.in_bounds(x as i32, y as i32) {
            return Err(MoveError::OutOfBounds { x, y });
        }
        if !self.is_empty(x, y) {
            return Err(MoveError::Occupied { x, y });
        }
        self.cells[y * self.width + x] = mark;
        Ok(())
    }

    /// Overwrite a cell unconditionally. The computer opponent uses this
    /// for its tentative place-check-undo scans.
    pub(crate) fn set(&mut self, x: usize, y: usize, mark: Mark) {
        self.cells[y * self.width + x] = mark;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// All positions in row-major order. The computer opponent relies on
    /// this order for its deterministic first-found scans.
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}

/// A single game: board, configuration, and turn state. Created fresh
/// for every game; the previous board is discarded outright.
#[derive(Debug, Clone)]
pub struct Game {
    /// The playing field.
    pub board: Board,
    /// Settings the game was started with.
    pub config: GameConfig,
    /// Current terminal / non-terminal state.
    pub status: GameStatus,
    /// Whose turn it is. The human (player 1) always moves first.
    pub current_player: Player,
    /// Cursor position (x, y) for keyboard play.
    pub cursor: (usize, usize),
    /// Last move position for highlighting.
    pub last_move: Option<(usize, usize)>,
}

impl Game {
    /// Start a new game with the given settings.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.width, config.height),
            config,
            status: GameStatus::InProgress,
            current_player: Player::Human,
            cursor: (config.width / 2, config.height / 2),
            last_move: None,
        })
    }

    /// Hand the turn to the other player.
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Move the cursor, clamped to the field.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let new_x = (self.cursor.0 as i32 + dx).clamp(0, self.config.width as i32 - 1) as usize;
        let new_y = (self.cursor.1 as i32 + dy).clamp(0, self.config.height as i32 - 1) as usize;
        self.cursor = (new_x, new_y);
    }
}
