//! Game screen rendering: the field, status bar, and info panel.

use super::game_common::{
    create_game_layout, render_game_over_banner, render_info_panel_frame, render_status_bar,
    GameLayout, GameResultType,
};
use crate::game::{Game, GameMode, GameStatus, Mark, Player};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the game scene.
pub fn render_game_scene(frame: &mut Frame, area: Rect, game: &Game) {
    let content_min_height = game.config.height as u16;
    let layout: GameLayout =
        create_game_layout(frame, area, " Crosses ", Color::Cyan, content_min_height, 24);

    render_field(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);

    if game.status.is_over() {
        render_result_banner(frame, layout.content, game);
    }
}

fn render_field(frame: &mut Frame, area: Rect, game: &Game) {
    let width = game.config.width;
    let height = game.config.height;

    // Center the field in the content area, "X " per cell
    let field_height = height as u16;
    let field_width = (width * 2 - 1) as u16;
    let y_offset = area.y + (area.height.saturating_sub(field_height)) / 2;
    let x_offset = area.x + (area.width.saturating_sub(field_width)) / 2;

    let human_color = Color::White;
    let computer_color = Color::LightRed;
    let cursor_color = Color::Yellow;
    let last_move_color = Color::Green;
    let empty_color = Color::DarkGray;

    let show_cursor = !game.status.is_over();

    for y in 0..height {
        let mut spans = Vec::new();
        for x in 0..width {
            let is_cursor = show_cursor && game.cursor == (x, y);
            let is_last_move = game.last_move == Some((x, y));

            let (symbol, style) = match game.board.get(x, y) {
                Mark::Human => {
                    let base_style = Style::default()
                        .fg(human_color)
                        .add_modifier(Modifier::BOLD);
                    if is_cursor {
                        ("X", base_style.bg(Color::DarkGray))
                    } else if is_last_move {
                        ("X", base_style.fg(last_move_color))
                    } else {
                        ("X", base_style)
                    }
                }
                Mark::Computer => {
                    let base_style = Style::default()
                        .fg(computer_color)
                        .add_modifier(Modifier::BOLD);
                    if is_cursor {
                        ("O", base_style.bg(Color::DarkGray))
                    } else if is_last_move {
                        ("O", base_style.fg(last_move_color))
                    } else {
                        ("O", base_style)
                    }
                }
                Mark::Empty => {
                    if is_cursor {
                        (
                            "□",
                            Style::default()
                                .fg(cursor_color)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else {
                        ("·", Style::default().fg(empty_color))
                    }
                }
            };

            spans.push(Span::styled(symbol, style));
            if x < width - 1 {
                spans.push(Span::raw(" "));
            }
        }

        let line = Paragraph::new(Line::from(spans));
        frame.render_widget(
            line,
            Rect::new(x_offset, y_offset + y as u16, field_width, 1),
        );
    }
}

/// Name of the participant behind a player, depending on the game mode.
fn player_name(game: &Game, player: Player) -> &'static str {
    match (game.config.mode, player) {
        (GameMode::HumanVsComputer, Player::Human) => "You",
        (GameMode::HumanVsComputer, Player::Computer) => "The computer",
        (GameMode::HumanVsHuman, Player::Human) => "Player 1",
        (GameMode::HumanVsHuman, Player::Computer) => "Player 2",
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &Game) {
    if game.status.is_over() {
        return;
    }

    let status_text = match game.config.mode {
        GameMode::HumanVsComputer => "Your turn".to_string(),
        GameMode::HumanVsHuman => match game.current_player {
            Player::Human => "Player 1 (X) to move".to_string(),
            Player::Computer => "Player 2 (O) to move".to_string(),
        },
    };

    render_status_bar(
        frame,
        area,
        &status_text,
        Color::White,
        &[
            ("[Arrows]", "Move"),
            ("[Enter]", "Place"),
            ("[N]", "New game"),
            ("[Q]", "Quit"),
        ],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &Game) {
    let inner = render_info_panel_frame(frame, area);

    let (x_label, o_label) = match game.config.mode {
        GameMode::HumanVsComputer => ("You: ", "  Computer: "),
        GameMode::HumanVsHuman => ("P1: ", "  P2: "),
    };

    let lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "RULES",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("First to get {}", game.config.run_length),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "in a row wins.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Mode: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.config.mode.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Field: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}x{}", game.config.width, game.config.height),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(x_label, Style::default().fg(Color::White)),
            Span::styled(
                "X",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(o_label, Style::default().fg(Color::Gray)),
            Span::styled("O", Style::default().fg(Color::LightRed)),
        ]),
    ];

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}

fn render_result_banner(frame: &mut Frame, area: Rect, game: &Game) {
    let run = game.config.run_length;
    let (result_type, title, message) = match game.status {
        GameStatus::HumanWon => (
            GameResultType::Win,
            "VICTORY!",
            format!("{} made {} in a row!", player_name(game, Player::Human), run),
        ),
        GameStatus::ComputerWon => {
            let result_type = match game.config.mode {
                // The second human winning is still somebody's victory
                GameMode::HumanVsHuman => GameResultType::Win,
                GameMode::HumanVsComputer => GameResultType::Loss,
            };
            (
                result_type,
                match game.config.mode {
                    GameMode::HumanVsHuman => "VICTORY!",
                    GameMode::HumanVsComputer => "DEFEAT",
                },
                format!(
                    "{} made {} in a row.",
                    player_name(game, Player::Computer),
                    run
                ),
            )
        }
        GameStatus::Draw => (
            GameResultType::Draw,
            "DRAW",
            "The field is full with no winner.".to_string(),
        ),
        GameStatus::InProgress => return,
    };

    render_game_over_banner(frame, area, result_type, title, &message);
}
