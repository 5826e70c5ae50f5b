//! Terminal UI rendering with ratatui
//!
//! Draws a `Snapshot`; nothing here can change the game.

use crate::board::{Cell, EMPTY};
use crate::game::{GameState, Snapshot};
use crate::settings::KeyBindings;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const BLOCK: &str = "██";
const EMPTY_CELL: &str = " .";

/// Width of the stats column next to the board
const STATS_WIDTH: u16 = 18;

/// Key names shown in the controls hint and the game over overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlLabels {
    pub move_left: String,
    pub move_right: String,
    pub rotate: String,
    pub soft_drop: String,
    pub quit: String,
}

impl ControlLabels {
    /// Label each action with its first bound key
    pub fn from_bindings(keys: &KeyBindings) -> Self {
        fn first(keys: &[String]) -> String {
            keys.first().cloned().unwrap_or_else(|| "-".to_string())
        }
        Self {
            move_left: first(&keys.move_left),
            move_right: first(&keys.move_right),
            rotate: first(&keys.rotate),
            soft_drop: first(&keys.soft_drop),
            quit: first(&keys.quit),
        }
    }
}

impl Default for ControlLabels {
    fn default() -> Self {
        Self::from_bindings(&KeyBindings::default())
    }
}

/// Terminal cells needed for `count` board cells plus two border cells
fn framed_len(count: usize, cell_width: u16) -> u16 {
    u16::try_from(count)
        .unwrap_or(u16::MAX)
        .saturating_mul(cell_width)
        .saturating_add(2)
}

/// Render one frame of the game
pub fn render_game(frame: &mut Frame, snapshot: &Snapshot, controls: &ControlLabels) {
    let area = frame.area();
    let board_width = framed_len(snapshot.board.cols(), 2);
    let board_height = framed_len(snapshot.board.rows(), 1);

    let game_area = center_rect(
        area,
        board_width.saturating_add(STATS_WIDTH),
        board_height,
    );

    // Create main layout: board | stats
    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(board_width),
            Constraint::Length(STATS_WIDTH),
        ])
        .split(game_area);

    render_board(frame, main_layout[0], snapshot);
    render_stats(frame, main_layout[1], snapshot, controls);

    if snapshot.state == GameState::GameOver {
        let subtitle = format!("Press {} to quit", controls.quit);
        render_overlay(frame, area, "GAME OVER", &subtitle);
    }
}

/// Color for a settled or falling cell id
pub fn cell_color(id: Cell) -> Color {
    match id {
        1 => Color::Rgb(0xa8, 0x55, 0xf7), // purple
        2 => Color::Rgb(0x60, 0xa5, 0xfa), // blue
        3 => Color::Rgb(0x34, 0xd3, 0x99), // green
        4 => Color::Rgb(0xfb, 0xbf, 0x24), // yellow
        5 => Color::Rgb(0xfb, 0x71, 0x85), // pink
        6 => Color::Rgb(0xf9, 0x73, 0x16), // orange
        7 => Color::Rgb(0x22, 0xd3, 0xee), // cyan
        _ => Color::DarkGray,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

fn render_board(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let piece = snapshot.piece;
    let piece_id = piece.id();
    let piece_cells: Vec<(i32, i32)> = piece.block_positions().collect();

    let lines: Vec<Line> = snapshot
        .board
        .iter_rows()
        .enumerate()
        .map(|(row, cells)| {
            let spans: Vec<Span> = cells
                .iter()
                .enumerate()
                .map(|(col, &cell)| {
                    let falling = piece_cells.contains(&(row as i32, col as i32));
                    let id = if falling { piece_id } else { cell };
                    if id == EMPTY {
                        Span::styled(EMPTY_CELL, Style::default().fg(Color::DarkGray))
                    } else {
                        Span::styled(BLOCK, Style::default().fg(cell_color(id)))
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_stats(frame: &mut Frame, area: Rect, snapshot: &Snapshot, controls: &ControlLabels) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let score = snapshot.score;
    let hint = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled("SCORE", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            format!("{}", score.points),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::raw(""),
        Line::from(Span::styled("LINES", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            format!("{}", score.lines),
            Style::default().fg(Color::Green),
        )),
        Line::raw(""),
        Line::from(Span::styled("PIECES", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            format!("{}", score.pieces),
            Style::default().fg(Color::Cyan),
        )),
        Line::raw(""),
        Line::styled(
            format!("{}/{} move", controls.move_left, controls.move_right),
            hint,
        ),
        Line::styled(format!("{} rotate", controls.rotate), hint),
        Line::styled(format!("{} drop", controls.soft_drop), hint),
        Line::styled(format!("{} quit", controls.quit), hint),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_overlay(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let popup_width = 24u16;
    let popup_height = 5u16;
    let popup_area = center_rect(area, popup_width, popup_height);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let text = vec![
        Line::styled(title, Style::default().fg(Color::Yellow).bold()),
        Line::raw(""),
        Line::styled(subtitle, Style::default().fg(Color::Gray)),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::game::Game;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered_text(game: &Game, controls: &ControlLabels, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_game(frame, &game.snapshot(), controls))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_every_piece_id_has_a_color() {
        for id in 1..=7 {
            assert_ne!(cell_color(id), Color::DarkGray);
        }
    }

    #[test]
    fn test_render_shows_score_and_piece() {
        let game = Game::with_seed(SessionConfig::default(), 11).unwrap();
        let text = rendered_text(&game, &ControlLabels::default(), 60, 26);
        assert!(text.contains("SCORE"));
        assert!(text.contains("█"));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let game = Game::with_seed(SessionConfig::default(), 11).unwrap();
        rendered_text(&game, &ControlLabels::default(), 10, 5);
    }

    #[test]
    fn test_oversized_board_does_not_panic() {
        let config = SessionConfig {
            rows: 4,
            cols: 40_000,
            ..SessionConfig::default()
        };
        let game = Game::with_seed(config, 3).unwrap();
        let text = rendered_text(&game, &ControlLabels::default(), 60, 26);
        assert!(!text.is_empty());
    }

    #[test]
    fn test_framed_len_saturates() {
        assert_eq!(framed_len(10, 2), 22);
        assert_eq!(framed_len(20, 1), 22);
        assert_eq!(framed_len(40_000, 2), u16::MAX);
        assert_eq!(framed_len(usize::MAX, 1), u16::MAX);
    }

    #[test]
    fn test_hints_follow_rebound_keys() {
        let mut keys = KeyBindings::default();
        keys.rotate = vec!["x".to_string()];
        keys.quit = vec!["Esc".to_string()];
        let controls = ControlLabels::from_bindings(&keys);
        let game = Game::with_seed(SessionConfig::default(), 11).unwrap();

        let text = rendered_text(&game, &controls, 60, 26);
        assert!(text.contains("x rotate"));
        assert!(text.contains("Esc quit"));
        assert!(!text.contains("q quit"));
    }

    #[test]
    fn test_game_over_names_the_quit_key() {
        let config = SessionConfig {
            rows: 4,
            cols: 1,
            ..SessionConfig::default()
        };
        let game = Game::with_seed(config, 5).unwrap();
        assert_eq!(game.state(), GameState::GameOver);

        let mut keys = KeyBindings::default();
        keys.quit = vec!["Esc".to_string()];
        let text = rendered_text(&game, &ControlLabels::from_bindings(&keys), 60, 26);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Press Esc to quit"));
        assert!(!text.contains("Press Q"));
    }

    #[test]
    fn test_unbound_action_is_labelled() {
        let mut keys = KeyBindings::default();
        keys.soft_drop.clear();
        assert_eq!(ControlLabels::from_bindings(&keys).soft_drop, "-");
    }
}
