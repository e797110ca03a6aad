use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameState, Mode, Position};
use crate::metrics::GameMetrics;

/// What occupies a grid cell when drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Head,
    Body,
    Food,
    Obstacle,
    Empty,
}

impl Cell {
    pub fn at(state: &GameState, pos: Position) -> Self {
        if pos == state.snake.head() {
            Cell::Head
        } else if state.snake.body.contains(&pos) {
            Cell::Body
        } else if pos == state.food {
            Cell::Food
        } else if state.obstacles.contains(&pos) {
            Cell::Obstacle
        } else {
            Cell::Empty
        }
    }

    fn span(self) -> Span<'static> {
        match self {
            Cell::Head => Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::Body => Span::styled("■ ", Style::default().fg(Color::Green)),
            Cell::Food => Span::styled(
                "● ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::Obstacle => Span::styled("█ ", Style::default().fg(Color::Gray)),
            Cell::Empty => Span::styled("  ", Style::default()),
        }
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(2), // Banner
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);
        frame.render_widget(self.render_grid(state), chunks[1]);
        frame.render_widget(self.render_banner(state), chunks[2]);
        frame.render_widget(self.render_controls(state), chunks[3]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'static> {
        let lines: Vec<Line> = (0..state.grid_height)
            .map(|y| {
                let spans: Vec<Span> = (0..state.grid_width)
                    .map(|x| Cell::at(state, Position::new(x as i32, y as i32)).span())
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Plain)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake Game "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled(
                state.hud_text(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Best level: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_level.to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Food eaten: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.food_eaten.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Games played: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.games_played.to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_banner(&self, state: &GameState) -> Paragraph<'static> {
        let color = match state.mode {
            Mode::GameOver | Mode::LevelFailed { .. } => Color::Red,
            Mode::GamePassed | Mode::LevelPassed { .. } => Color::Green,
            Mode::Playing => Color::White,
        };

        let line = match state.status_text() {
            Some(text) => Line::from(Span::styled(
                text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            None => Line::from(""),
        };

        Paragraph::new(line).alignment(Alignment::Center)
    }

    fn render_controls(&self, state: &GameState) -> Paragraph<'static> {
        let mut spans = vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
        ];
        if state.mode.is_terminal() {
            spans.push(Span::styled("R", Style::default().fg(Color::Green)));
            spans.push(Span::raw(" to restart | "));
        }
        spans.push(Span::styled("Q", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" to quit"));

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
