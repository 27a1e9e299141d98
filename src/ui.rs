#![cfg(feature = "std")]

//! Text rendering of boards.

use std::fmt::Write;

use crate::{
    board::{Board, CellState},
    common::Cell,
    config::BOARD_SIZE,
    registry::ShipRegistry,
};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Symbol for an intact ship cell in the fleet view.
const SHIP_SYMBOL: char = 'S';

fn render_grid(title: &str, symbol_at: impl Fn(Cell) -> char) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    out.push_str("   ");
    for c in 0..GRID_SIZE {
        let _ = write!(out, " {}", c);
    }
    out.push('\n');
    for r in 0..GRID_SIZE {
        let _ = write!(out, "{:2} ", r);
        for c in 0..GRID_SIZE {
            let _ = write!(out, " {}", symbol_at(Cell::new(r, c)));
        }
        out.push('\n');
    }
    out
}

/// Grid of `.`, `X`, `O` with row and column headers.
pub fn render_board(board: &Board, title: &str) -> String {
    render_grid(title, |cell| {
        board
            .get(cell)
            .map(CellState::symbol)
            .unwrap_or(CellState::Unknown.symbol())
    })
}

/// A fleet as seen by its owner: `incoming` shots plus intact ship cells.
pub fn render_fleet(fleet: &ShipRegistry, incoming: &Board, title: &str) -> String {
    render_grid(title, |cell| match incoming.get(cell) {
        Ok(CellState::Unknown) if fleet.ship_at(cell).is_some() => SHIP_SYMBOL,
        Ok(state) => state.symbol(),
        Err(_) => CellState::Unknown.symbol(),
    })
}
