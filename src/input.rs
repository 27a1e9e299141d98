//! Parsing of coordinate text typed by the player.
//!
//! A move is `"row,col"`; a ship is a whitespace separated list of moves,
//! e.g. `"0,0 0,1 0,2"`. Both are zero-based.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::common::{Cell, GameError, ParseError};

/// Parse a single `"row,col"` coordinate and check it lies on the grid.
pub fn parse_move(input: &str) -> Result<Cell, GameError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty.into());
    }
    let tokens: Vec<&str> = input.split(',').map(str::trim).collect();
    if tokens.len() != 2 {
        return Err(ParseError::WrongTokenCount {
            expected: 2,
            found: tokens.len(),
        }
        .into());
    }
    let row = parse_index(tokens[0])?;
    let col = parse_index(tokens[1])?;
    Cell::checked(row, col)
}

/// Parse the coordinates of one ship, e.g. `"3,4 3,5 3,6"`.
pub fn parse_ship(input: &str) -> Result<Vec<Cell>, GameError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.is_empty() {
        return Err(ParseError::Empty.into());
    }
    parts.into_iter().map(parse_move).collect()
}

fn parse_index(token: &str) -> Result<usize, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::NotAnInteger(token.to_string()))
}
