//! Cursor movement and mouse hit-testing.

use crossterm::event::KeyCode;
use marubatsu_core::Cell;
use ratatui::layout::Rect;

/// Moves the cursor with the arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Cell, key: KeyCode, size: usize) -> Cell {
    let last = size.saturating_sub(1);
    match key {
        KeyCode::Up | KeyCode::Char('k') => Cell::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down | KeyCode::Char('j') => Cell::new((cursor.row + 1).min(last), cursor.col),
        KeyCode::Left | KeyCode::Char('h') => Cell::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => Cell::new(cursor.row, (cursor.col + 1).min(last)),
        _ => cursor,
    }
}

/// Maps a digit key to a cell, numbering cells 1.. in row-major order.
///
/// Only boards with at most nine cells can be addressed this way.
pub fn digit_cell(key: KeyCode, size: usize) -> Option<Cell> {
    let KeyCode::Char(c) = key else {
        return None;
    };
    let digit = c.to_digit(10)? as usize;
    if digit == 0 || digit > size * size {
        return None;
    }
    Some(Cell::new((digit - 1) / size, (digit - 1) % size))
}

/// Finds the cell drawn at terminal position `(column, row)`.
pub fn cell_at(hit_areas: &[(Cell, Rect)], column: u16, row: u16) -> Option<Cell> {
    hit_areas
        .iter()
        .find(|(_, area)| {
            column >= area.x
                && column < area.x.saturating_add(area.width)
                && row >= area.y
                && row < area.y.saturating_add(area.height)
        })
        .map(|(cell, _)| *cell)
}
