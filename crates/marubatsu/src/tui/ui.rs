//! Stateless UI rendering for marubatsu.

use super::app::App;
use marubatsu_core::{Cell, Mark};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Width of one cell including its border.
const CELL_WIDTH: u16 = 7;
/// Height of one cell including its border.
const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen and returns where each cell was drawn.
pub fn draw(frame: &mut Frame, app: &App) -> Vec<(Cell, Rect)> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Board
            Constraint::Length(4), // Turn and result
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    let title = Paragraph::new("Marubatsu")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let hit_areas = draw_board(frame, chunks[1], app);

    let info = Paragraph::new(vec![
        Line::from(app.turn_text().to_string()),
        Line::from(Span::styled(
            app.result_text().to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(info, chunks[2]);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    hit_areas
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> Vec<(Cell, Rect)> {
    let board = app.game().state().board();
    let n = u16::try_from(board.size()).unwrap_or(u16::MAX);
    let board_area = center_rect(
        area,
        n.saturating_mul(CELL_WIDTH),
        n.saturating_mul(CELL_HEIGHT),
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CELL_HEIGHT); board.size()])
        .split(board_area);

    let mut hit_areas = Vec::with_capacity(board.size() * board.size());
    for (r, row_area) in rows.iter().enumerate() {
        if row_area.is_empty() {
            continue;
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(CELL_WIDTH); board.size()])
            .split(*row_area);
        for (c, cell_area) in cols.iter().enumerate() {
            // Cells squeezed out by a small terminal are not drawn.
            if cell_area.is_empty() {
                continue;
            }
            let cell = Cell::new(r, c);
            draw_cell(frame, *cell_area, app, cell);
            hit_areas.push((cell, *cell_area));
        }
    }
    hit_areas
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, cell: Cell) {
    let mark = app.game().state().board().get(cell).unwrap_or_default();
    let symbol = app.presenter().glyph(mark).to_string();

    let base_style = match mark {
        Mark::Empty => Style::default().fg(Color::DarkGray),
        Mark::First => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Mark::Second => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let style = if cell == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
