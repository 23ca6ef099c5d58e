//! New game setup screen: mode, field size, and win length selection.

use crate::constants::{FIELD_SIZE_MAX, FIELD_SIZE_MIN};
use crate::game::{GameConfig, GameMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows of the setup screen, top to bottom.
const ROW_MODE: usize = 0;
const ROW_WIDTH: usize = 1;
const ROW_HEIGHT: usize = 2;
const ROW_RUN: usize = 3;
const ROW_COUNT: usize = 4;

/// State of the new-game setup screen.
pub struct SetupScreen {
    pub selected_row: usize,
    pub mode: GameMode,
    pub width: usize,
    pub height: usize,
    pub run_length: usize,
    pub validation_error: Option<String>,
}

impl SetupScreen {
    pub fn new() -> Self {
        Self {
            selected_row: ROW_MODE,
            mode: GameMode::HumanVsComputer,
            width: FIELD_SIZE_MIN,
            height: FIELD_SIZE_MIN,
            run_length: FIELD_SIZE_MIN,
            validation_error: None,
        }
    }

    pub fn navigate_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn navigate_down(&mut self) {
        self.selected_row = (self.selected_row + 1).min(ROW_COUNT - 1);
    }

    /// Adjust the selected row's value by one step. Shrinking the field
    /// drags the win length down with it, the way a win-length slider
    /// maximum follows the size slider.
    pub fn adjust(&mut self, delta: i32) {
        self.validation_error = None;
        match self.selected_row {
            ROW_MODE => {
                self.mode = match self.mode {
                    GameMode::HumanVsComputer => GameMode::HumanVsHuman,
                    GameMode::HumanVsHuman => GameMode::HumanVsComputer,
                };
            }
            ROW_WIDTH => self.width = clamp_side(self.width as i32 + delta),
            ROW_HEIGHT => self.height = clamp_side(self.height as i32 + delta),
            ROW_RUN => {
                let max_run = self.width.min(self.height);
                self.run_length = (self.run_length as i32 + delta)
                    .clamp(FIELD_SIZE_MIN as i32, max_run as i32)
                    as usize;
            }
            _ => {}
        }
        let max_run = self.width.min(self.height);
        self.run_length = self.run_length.min(max_run);
    }

    /// The configuration currently on screen.
    pub fn config(&self) -> GameConfig {
        GameConfig {
            mode: self.mode,
            width: self.width,
            height: self.height,
            run_length: self.run_length,
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" New Game ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(ROW_COUNT as u16 + 1),
                Constraint::Length(2), // Validation feedback
                Constraint::Min(0),    // Filler
                Constraint::Length(1), // Controls
            ])
            .split(inner);

        let title = Paragraph::new("Noughts and Crosses")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let rows = [
            ("Mode", self.mode.name().to_string()),
            ("Field width", self.width.to_string()),
            ("Field height", self.height.to_string()),
            ("Win length", self.run_length.to_string()),
        ];

        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .map(|(i, (label, value))| {
                let selected = i == self.selected_row;
                let prefix = if selected { "> " } else { "  " };
                let style = if selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(Span::styled(
                    format!("{}{:<13} ◄ {} ►", prefix, label, value),
                    style,
                ))
            })
            .collect();

        let list = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(list, chunks[1]);

        if let Some(error) = &self.validation_error {
            let feedback = Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center);
            frame.render_widget(feedback, chunks[2]);
        }

        let help = Paragraph::new("[↑/↓] Select  [←/→] Adjust  [Enter] Start  [Q] Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, chunks[4]);
    }
}

impl Default for SetupScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_side(value: i32) -> usize {
    value.clamp(FIELD_SIZE_MIN as i32, FIELD_SIZE_MAX as i32) as usize
}
