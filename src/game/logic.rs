//! Win detection, move processing, and the computer opponent.

use super::types::{Board, Game, GameMode, GameStatus, Mark, MoveError, Player};
use rand::seq::SliceRandom;
use rand::Rng;

/// Line directions scanned for winning runs: right, down, down-right,
/// up-right. With every cell tried as a start point these four cover
/// horizontals, verticals and both diagonals without double-counting.
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Check whether `mark` has `run_length` consecutive cells anywhere on
/// the field. Scans every cell in row-major order as a potential run
/// start and returns on the first complete run.
pub fn has_winning_run(board: &Board, mark: Mark, run_length: usize) -> bool {
    for (x, y) in board.coords() {
        for (dx, dy) in DIRECTIONS {
            if check_line(board, x, y, dx, dy, run_length, mark) {
                return true;
            }
        }
    }
    false
}

/// Check one run of `len` cells starting at `(x, y)` stepping by
/// `(dx, dy)`. A run whose end cell falls off the field is skipped
/// without inspecting any cells.
fn check_line(
    board: &Board,
    x: usize,
    y: usize,
    dx: i32,
    dy: i32,
    len: usize,
    mark: Mark,
) -> bool {
    let end_x = x as i32 + (len as i32 - 1) * dx;
    let end_y = y as i32 + (len as i32 - 1) * dy;
    if !board.in_bounds(end_x, end_y) {
        return false;
    }

    for i in 0..len as i32 {
        let cx = (x as i32 + i * dx) as usize;
        let cy = (y as i32 + i * dy) as usize;
        if board.get(cx, cy) != mark {
            return false;
        }
    }
    true
}

/// Check for a draw: the field is full. Callers rule out a win for the
/// mark that just moved before consulting this.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}

/// Apply the current player's move at `(x, y)`.
///
/// In human-vs-computer mode a successful human move is answered by the
/// computer before this returns; the returned status reflects both
/// moves. On error nothing changes.
pub fn submit_move<R: Rng>(
    game: &mut Game,
    x: usize,
    y: usize,
    rng: &mut R,
) -> Result<GameStatus, MoveError> {
    if game.status.is_over() {
        return Err(MoveError::GameOver);
    }

    let mover = game.current_player;
    game.board.place(x, y, mover.mark())?;
    game.last_move = Some((x, y));

    if resolve_endgame(game, mover) {
        return Ok(game.status);
    }

    match game.config.mode {
        GameMode::HumanVsHuman => game.switch_player(),
        GameMode::HumanVsComputer => {
            if let Some((cx, cy)) = find_computer_move(&mut game.board, game.config.run_length, rng)
            {
                game.board.set(cx, cy, Mark::Computer);
                game.last_move = Some((cx, cy));
                resolve_endgame(game, Player::Computer);
            }
        }
    }

    Ok(game.status)
}

/// Check win first, then draw, for the player that just moved. Returns
/// true if the game ended.
fn resolve_endgame(game: &mut Game, mover: Player) -> bool {
    if has_winning_run(&game.board, mover.mark(), game.config.run_length) {
        game.status = match mover {
            Player::Human => GameStatus::HumanWon,
            Player::Computer => GameStatus::ComputerWon,
        };
        return true;
    }
    if is_draw(&game.board) {
        game.status = GameStatus::Draw;
        return true;
    }
    false
}

/// Choose the computer's reply, in strict priority order:
/// 1. take the first cell that completes the computer's own run,
/// 2. block the first cell that would complete the human's run,
/// 3. otherwise pick a random free cell.
///
/// Scans run row-major, so ties resolve to the first cell found. Returns
/// `None` only on a full field, which callers rule out beforehand.
pub fn find_computer_move<R: Rng>(
    board: &mut Board,
    run_length: usize,
    rng: &mut R,
) -> Option<(usize, usize)> {
    if let Some(cell) = winning_cell(board, Mark::Computer, run_length) {
        return Some(cell);
    }
    if let Some(cell) = winning_cell(board, Mark::Human, run_length) {
        return Some(cell);
    }

    let free: Vec<(usize, usize)> = board
        .coords()
        .filter(|&(x, y)| board.is_empty(x, y))
        .collect();
    free.choose(rng).copied()
}

/// Find the first free cell (row-major) where placing `mark` completes a
/// run. Each tentative mark is removed again before the next cell is
/// tried, so the field is unchanged when this returns.
fn winning_cell(board: &mut Board, mark: Mark, run_length: usize) -> Option<(usize, usize)> {
    for y in 0..board.height() {
        for x in 0..board.width() {
            if !board.is_empty(x, y) {
                continue;
            }
            board.set(x, y, mark);
            let wins = has_winning_run(board, mark, run_length);
            board.set(x, y, Mark::Empty);
            if wins {
                return Some((x, y));
            }
        }
    }
    None
}

/// Input actions for the game screen (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Up,
    Down,
    Left,
    Right,
    PlaceMark,
    Other,
}

/// Process a key input during an active game. Returns true if the input
/// was handled. Placing onto an occupied cell is simply ignored, like
/// clicking an occupied cell.
pub fn process_input<R: Rng>(game: &mut Game, input: GameInput, rng: &mut R) -> bool {
    if game.status.is_over() {
        return false;
    }

    match input {
        GameInput::Up => game.move_cursor(0, -1),
        GameInput::Down => game.move_cursor(0, 1),
        GameInput::Left => game.move_cursor(-1, 0),
        GameInput::Right => game.move_cursor(1, 0),
        GameInput::PlaceMark => {
            let (x, y) = game.cursor;
            let _ = submit_move(game, x, y, rng);
        }
        GameInput::Other => {}
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::GameConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn board_with(marks: &[(usize, usize, Mark)], width: usize, height: usize) -> Board {
        let mut board = Board::new(width, height);
        for &(x, y, mark) in marks {
            board.place(x, y, mark).unwrap();
        }
        board
    }

    fn game(mode: GameMode, width: usize, height: usize, run_length: usize) -> Game {
        Game::new(GameConfig {
            mode,
            width,
            height,
            run_length,
        })
        .unwrap()
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_with(
            &[
                (0, 1, Mark::Human),
                (1, 1, Mark::Human),
                (2, 1, Mark::Human),
            ],
            3,
            3,
        );
        assert!(has_winning_run(&board, Mark::Human, 3));
        assert!(!has_winning_run(&board, Mark::Computer, 3));
    }

    #[test]
    fn test_vertical_win() {
        let board = board_with(
            &[
                (2, 0, Mark::Computer),
                (2, 1, Mark::Computer),
                (2, 2, Mark::Computer),
            ],
            3,
            3,
        );
        assert!(has_winning_run(&board, Mark::Computer, 3));
    }

    #[test]
    fn test_diagonal_win() {
        let board = board_with(
            &[
                (0, 0, Mark::Human),
                (1, 1, Mark::Human),
                (2, 2, Mark::Human),
            ],
            3,
            3,
        );
        assert!(has_winning_run(&board, Mark::Human, 3));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(
            &[
                (0, 2, Mark::Human),
                (1, 1, Mark::Human),
                (2, 0, Mark::Human),
            ],
            3,
            3,
        );
        assert!(has_winning_run(&board, Mark::Human, 3));
    }

    #[test]
    fn test_no_win_with_shorter_run() {
        let board = board_with(&[(0, 0, Mark::Human), (1, 0, Mark::Human)], 3, 3);
        assert!(!has_winning_run(&board, Mark::Human, 3));
    }

    #[test]
    fn test_run_length_one_wins_immediately() {
        let board = board_with(&[(2, 2, Mark::Human)], 3, 3);
        assert!(has_winning_run(&board, Mark::Human, 1));
    }

    #[test]
    fn test_run_does_not_wrap_around_edge() {
        // Two at the right edge plus one at the left of the next row is
        // not a run
        let board = board_with(
            &[
                (1, 0, Mark::Human),
                (2, 0, Mark::Human),
                (0, 1, Mark::Human),
            ],
            3,
            3,
        );
        assert!(!has_winning_run(&board, Mark::Human, 3));
    }

    #[test]
    fn test_longer_field_run_length() {
        let marks: Vec<_> = (2..6).map(|x| (x, 3, Mark::Computer)).collect();
        let board = board_with(&marks, 7, 6);
        assert!(has_winning_run(&board, Mark::Computer, 4));
        assert!(!has_winning_run(&board, Mark::Computer, 5));
    }

    #[test]
    fn test_submit_move_flips_turn_in_two_player_mode() {
        let mut game = game(GameMode::HumanVsHuman, 3, 3, 3);
        let status = submit_move(&mut game, 0, 0, &mut rng()).unwrap();
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(game.current_player, Player::Computer);
        assert_eq!(game.board.get(0, 0), Mark::Human);

        submit_move(&mut game, 1, 0, &mut rng()).unwrap();
        assert_eq!(game.current_player, Player::Human);
        assert_eq!(game.board.get(1, 0), Mark::Computer);
    }

    #[test]
    fn test_submit_move_computer_replies_synchronously() {
        let mut game = game(GameMode::HumanVsComputer, 3, 3, 3);
        submit_move(&mut game, 1, 1, &mut rng()).unwrap();

        let computer_marks = game
            .board
            .coords()
            .filter(|&(x, y)| game.board.get(x, y) == Mark::Computer)
            .count();
        assert_eq!(computer_marks, 1);
        assert_eq!(game.current_player, Player::Human);
        assert_eq!(game.status, GameStatus::InProgress);
    }

    #[test]
    fn test_submit_move_rejects_occupied_cell() {
        let mut game = game(GameMode::HumanVsHuman, 3, 3, 3);
        submit_move(&mut game, 0, 0, &mut rng()).unwrap();
        let before = game.board.clone();

        let err = submit_move(&mut game, 0, 0, &mut rng()).unwrap_err();
        assert_eq!(err, MoveError::Occupied { x: 0, y: 0 });
        assert_eq!(game.board, before);
        assert_eq!(game.current_player, Player::Computer);
    }

    #[test]
    fn test_submit_move_rejects_out_of_bounds() {
        let mut game = game(GameMode::HumanVsHuman, 3, 3, 3);
        let err = submit_move(&mut game, 5, 0, &mut rng()).unwrap_err();
        assert_eq!(err, MoveError::OutOfBounds { x: 5, y: 0 });
    }

    #[test]
    fn test_submit_move_rejects_finished_game() {
        let mut game = game(GameMode::HumanVsHuman, 3, 3, 3);
        game.status = GameStatus::Draw;
        assert_eq!(
            submit_move(&mut game, 0, 0, &mut rng()),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_win_short_circuits_computer_reply() {
        let mut game = game(GameMode::HumanVsComputer, 3, 3, 3);
        game.board.set(0, 0, Mark::Human);
        game.board.set(1, 0, Mark::Human);

        let status = submit_move(&mut game, 2, 0, &mut rng()).unwrap();
        assert_eq!(status, GameStatus::HumanWon);
        // No computer mark appeared after the winning move
        let computer_marks = game
            .board
            .coords()
            .filter(|&(x, y)| game.board.get(x, y) == Mark::Computer)
            .count();
        assert_eq!(computer_marks, 0);
    }

    #[test]
    fn test_computer_takes_winning_move() {
        let mut board = board_with(
            &[(0, 1, Mark::Computer), (1, 1, Mark::Computer)],
            3,
            3,
        );
        let cell = find_computer_move(&mut board, 3, &mut rng());
        assert_eq!(cell, Some((2, 1)));
    }

    #[test]
    fn test_computer_prefers_winning_over_blocking() {
        // Both sides threaten a win; the computer must complete its own
        // line rather than block
        let mut board = board_with(
            &[
                (0, 0, Mark::Human),
                (1, 0, Mark::Human),
                (0, 1, Mark::Computer),
                (1, 1, Mark::Computer),
            ],
            3,
            3,
        );
        let cell = find_computer_move(&mut board, 3, &mut rng());
        assert_eq!(cell, Some((2, 1)));
    }

    #[test]
    fn test_computer_blocks_human_win() {
        let mut board = board_with(&[(0, 0, Mark::Human), (1, 0, Mark::Human)], 3, 3);
        let cell = find_computer_move(&mut board, 3, &mut rng());
        assert_eq!(cell, Some((2, 0)));
    }

    #[test]
    fn test_computer_block_takes_first_threat_in_scan_order() {
        // Several human threats at once; the blocking cell closest to
        // the top-left in row-major order wins the tie. Here (1, 0)
        // completes the vertical threat and precedes every other
        // completion cell in scan order.
        let mut board = board_with(
            &[
                (1, 1, Mark::Human),
                (2, 1, Mark::Human),
                (1, 2, Mark::Human),
            ],
            4,
            4,
        );
        let cell = find_computer_move(&mut board, 3, &mut rng());
        assert_eq!(cell, Some((1, 0)));
    }

    #[test]
    fn test_computer_scan_leaves_board_unchanged() {
        let mut board = board_with(&[(0, 0, Mark::Human), (1, 0, Mark::Human)], 3, 3);
        let before = board.clone();
        find_computer_move(&mut board, 3, &mut rng());
        assert_eq!(board, before);
    }

    #[test]
    fn test_computer_fallback_picks_a_free_cell() {
        let mut board = board_with(&[(1, 1, Mark::Human)], 3, 3);
        let cell = find_computer_move(&mut board, 3, &mut rng()).unwrap();
        assert!(board.is_empty(cell.0, cell.1));
    }

    #[test]
    fn test_computer_fallback_is_deterministic_per_seed() {
        let mut a = board_with(&[(1, 1, Mark::Human)], 3, 3);
        let mut b = a.clone();
        let first = find_computer_move(&mut a, 3, &mut rng());
        let second = find_computer_move(&mut b, 3, &mut rng());
        assert_eq!(first, second);
    }

    #[test]
    fn test_draw_on_full_board() {
        // Fill a 3x3 two-player game without a run of three:
        //   X O X
        //   X O O
        //   O X X
        let mut game = game(GameMode::HumanVsHuman, 3, 3, 3);
        let moves = [
            (0, 0),
            (1, 0),
            (2, 0),
            (1, 1),
            (0, 1),
            (2, 1),
            (1, 2),
            (0, 2),
            (2, 2),
        ];
        let mut status = GameStatus::InProgress;
        for &(x, y) in &moves {
            status = submit_move(&mut game, x, y, &mut rng()).unwrap();
        }
        assert_eq!(status, GameStatus::Draw);
        assert_eq!(game.status, GameStatus::Draw);
    }

    #[test]
    fn test_process_input_moves_cursor_and_places() {
        let mut game = game(GameMode::HumanVsHuman, 3, 3, 3);
        assert_eq!(game.cursor, (1, 1));

        process_input(&mut game, GameInput::Up, &mut rng());
        assert_eq!(game.cursor, (1, 0));
        process_input(&mut game, GameInput::Left, &mut rng());
        assert_eq!(game.cursor, (0, 0));

        process_input(&mut game, GameInput::PlaceMark, &mut rng());
        assert_eq!(game.board.get(0, 0), Mark::Human);
    }

    #[test]
    fn test_process_input_ignored_after_game_over() {
        let mut game = game(GameMode::HumanVsHuman, 3, 3, 3);
        game.status = GameStatus::HumanWon;
        assert!(!process_input(&mut game, GameInput::Up, &mut rng()));
        assert_eq!(game.cursor, (1, 1));
    }
}
