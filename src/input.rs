//! Input handling for the game screen: maps key events to game actions.

use crate::game::logic::{process_input, GameInput};
use crate::game::Game;
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

/// Result of handling a game-screen key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep playing.
    Continue,
    /// Return to the setup screen.
    NewGame,
    /// Leave the application.
    Quit,
}

/// Dispatch a key event on the game screen.
pub fn handle_game_input<R: Rng>(key: KeyEvent, game: &mut Game, rng: &mut R) -> InputResult {
    // A finished game leaves on any key except quit
    if game.status.is_over() {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('q') => InputResult::Quit,
            _ => InputResult::NewGame,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => InputResult::Quit,
        KeyCode::Char('n') => InputResult::NewGame,
        code => {
            let input = match code {
                KeyCode::Up | KeyCode::Char('w') => GameInput::Up,
                KeyCode::Down | KeyCode::Char('s') => GameInput::Down,
                KeyCode::Left | KeyCode::Char('a') => GameInput::Left,
                KeyCode::Right | KeyCode::Char('d') => GameInput::Right,
                KeyCode::Enter | KeyCode::Char(' ') => GameInput::PlaceMark,
                _ => GameInput::Other,
            };
            process_input(game, input, rng);
            InputResult::Continue
        }
    }
}
