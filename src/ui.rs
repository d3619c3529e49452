#![cfg(feature = "std")]

//! Text rendering and coordinate parsing for the terminal front end.

use std::fmt::Write as _;
use std::string::String;

use crate::cell::Cell;
use crate::config::BOARD_SIZE;
use crate::game::GameSession;

/// Parse `"r,c"` (or `"r c"`) into a cell. Range checks are left to the session.
pub fn parse_cell(input: &str) -> Result<Cell, String> {
    let mut parts = input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|s| !s.is_empty());
    let row = parts.next().ok_or("Empty input")?;
    let col = parts
        .next()
        .ok_or_else(|| format!("Missing column in '{}' - expected ROW,COL", input.trim()))?;
    if parts.next().is_some() {
        return Err(format!("Too many numbers in '{}' - expected ROW,COL", input.trim()));
    }
    let row: usize = row
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 0-9", row))?;
    let col: usize = col
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number 0-9", col))?;
    Ok(Cell::new(row, col))
}

/// Parse a whitespace separated list of `r,c` pairs.
pub fn parse_cells(input: &str) -> Result<Vec<Cell>, String> {
    input.split_whitespace().map(parse_cell).collect()
}

/// Render the box as the player sees it. With `reveal`, unfound atoms are shown too.
pub fn render_board(session: &GameSession, reveal: bool) -> String {
    let used = session.used_border();
    let found = session.found();
    let wrong = session.wrong_guesses();
    let atoms = session.reveal_atoms();

    let mut out = String::new();
    out.push_str("    ");
    for c in 0..BOARD_SIZE as usize {
        let _ = write!(out, " {}", c);
    }
    out.push('\n');
    for r in 0..BOARD_SIZE as usize {
        let _ = write!(out, "  {} ", r);
        for c in 0..BOARD_SIZE as usize {
            let cell = Cell::new(r, c);
            let ch = if cell.is_border() {
                if used.contains(cell) { '#' } else { '·' }
            } else if !cell.is_interior() {
                ' '
            } else if found.contains(cell) {
                'A'
            } else if wrong.contains(cell) {
                'x'
            } else if reveal && atoms.contains(cell) {
                'O'
            } else {
                '.'
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    if reveal {
        out.push_str("  Legend: #=used point  A=found  O=missed atom  x=wrong guess\n");
    } else {
        out.push_str("  Legend: #=used point  A=found  x=wrong guess\n");
    }
    out
}

pub fn print_board(session: &GameSession, reveal: bool) {
    print!("{}", render_board(session, reveal));
}
