//! Stateless rendering of a snapshot.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{Cell, Mark, Position, Snapshot};

/// Renders the whole screen from the current snapshot.
pub fn draw(frame: &mut Frame, snapshot: &Snapshot, cursor: Position) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board or menu
            Constraint::Length(5), // Message, scores, key help
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    if snapshot.show_mode_select {
        draw_mode_select(frame, chunks[1]);
    } else if snapshot.show_board {
        draw_board(frame, chunks[1], snapshot, cursor);
    }

    draw_status(frame, chunks[2], snapshot);
}

fn draw_mode_select(frame: &mut Frame, area: Rect) {
    let menu = Paragraph::new(vec![
        Line::from(""),
        Line::from("h - two players at this keyboard"),
        Line::from("c - play against the computer"),
        Line::from(""),
        Line::from("q - quit"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().title("Choose a game").borders(Borders::ALL));
    frame.render_widget(menu, area);
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position) {
    let board_area = center_rect(area, 23, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1]);
        }
        draw_row(frame, rows[row * 2], snapshot, cursor, row);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for col in 0..3 {
        if col > 0 {
            draw_separator_vertical(frame, cols[col * 2 - 1]);
        }
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], snapshot, cursor, pos);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position, pos: Position) {
    let (symbol, base_style) = match snapshot.board.get(pos) {
        Cell::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Mark::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    // Cursor highlight only while moves are accepted
    let style = if pos == cursor && !snapshot.terminal {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let vcenter = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, vcenter[1]);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("───────┼───────┼───────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_status(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let mut lines = Vec::new();

    if snapshot.show_message {
        if let Some(message) = &snapshot.message {
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        }
    } else if snapshot.show_board {
        lines.push(Line::from(format!("{} to move", snapshot.turn)));
    }

    if snapshot.show_scores {
        lines.push(Line::from(format!(
            "{}   {}",
            snapshot.player_score, snapshot.computer_score
        )));
    }

    lines.push(Line::from(Span::styled(
        "1-9 or arrows+enter to play, r to restart, q to quit",
        Style::default().fg(Color::DarkGray),
    )));

    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
