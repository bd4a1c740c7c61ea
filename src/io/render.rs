//! Box-drawing rendering of cells and whole maps
//!
//! Each cell becomes a 3x5 block of characters chosen purely from its four
//! edge states and its role. Fully resolved cells use one of sixteen fixed
//! blocks; cells with unknown edges fall back to a diagnostic block made of
//! placeholders.

use crate::io::configuration::{
    BAND_FILL, BAND_JUNCTION, CELL_GLYPH_HEIGHT, CELL_GLYPH_WIDTH, CELL_SEPARATOR, HOME_MARKER,
    START_MARKER, UNKNOWN_MARKER,
};
use crate::spatial::cell::{Cell, CellRole, EdgeState};
use crate::spatial::direction::Direction;
use crate::spatial::grid::Grid;

/// Rendered characters of a single cell, indexed `[row][column]`
pub type GlyphBlock = [[char; CELL_GLYPH_WIDTH]; CELL_GLYPH_HEIGHT];

const VERTICAL: char = '║';
const HORIZONTAL: char = '═';

/// Render one cell, overlaying the start or home marker at its center
pub fn render_cell(cell: &Cell) -> GlyphBlock {
    let mut block = base_block(cell);

    let marker = match cell.role() {
        CellRole::Normal => None,
        CellRole::Start => Some(START_MARKER),
        CellRole::Home => Some(HOME_MARKER),
    };
    if let Some(marker) = marker
        && let Some(center) = block
            .get_mut(CELL_GLYPH_HEIGHT / 2)
            .and_then(|row| row.get_mut(CELL_GLYPH_WIDTH / 2))
    {
        *center = marker;
    }

    block
}

/// Render a whole grid as text rows
///
/// Every grid row becomes three text rows of cell blocks joined by `│`.
/// Rows of cells are separated by a `─────┼─────…` line; there is no
/// separator after the last row.
pub fn render_grid(grid: &Grid) -> Vec<String> {
    let (width, height) = grid.dimensions();
    let separator = band_separator(width);
    let cell_separator = CELL_SEPARATOR.to_string();
    let mut lines = Vec::with_capacity(height * (CELL_GLYPH_HEIGHT + 1));

    for y in 0..height {
        let blocks: Vec<[String; CELL_GLYPH_HEIGHT]> = (0..width)
            .filter_map(|x| grid.cell([x, y]))
            .map(|cell| block_lines(&render_cell(cell)))
            .collect();

        for row in 0..CELL_GLYPH_HEIGHT {
            let parts: Vec<&str> = blocks
                .iter()
                .filter_map(|block| block.get(row))
                .map(String::as_str)
                .collect();
            lines.push(parts.join(cell_separator.as_str()));
        }

        if y + 1 < height {
            lines.push(separator.clone());
        }
    }

    lines
}

fn band_separator(width: usize) -> String {
    let segment: String = std::iter::repeat_n(BAND_FILL, CELL_GLYPH_WIDTH).collect();
    vec![segment; width].join(BAND_JUNCTION.to_string().as_str())
}

fn base_block(cell: &Cell) -> GlyphBlock {
    let north = cell.get(Direction::North);
    let east = cell.get(Direction::East);
    let south = cell.get(Direction::South);
    let west = cell.get(Direction::West);

    match (north.value(), east.value(), south.value(), west.value()) {
        (Some(n), Some(e), Some(s), Some(w)) => resolved_block(n, e, s, w),
        _ => unresolved_block(north, east, south, west),
    }
}

/// Fixed block for a fully resolved cell, keyed by (north, east, south, west)
fn resolved_block(north: bool, east: bool, south: bool, west: bool) -> GlyphBlock {
    let rows = match (north, east, south, west) {
        (true, true, true, true) => ["  ║  ", "══╬══", "  ║  "],
        (true, true, true, false) => ["  ║  ", "  ╠══", "  ║  "],
        (true, true, false, true) => ["  ║  ", "══╩══", "     "],
        (true, true, false, false) => ["  ║  ", "  ╚══", "     "],
        (true, false, true, true) => ["  ║  ", "══╣  ", "  ║  "],
        (true, false, true, false) => ["  ║  ", "  ║  ", "  ║  "],
        (true, false, false, true) => ["  ║  ", "══╝  ", "     "],
        (true, false, false, false) => ["  ║  ", "     ", "     "],
        (false, true, true, true) => ["     ", "══╦══", "  ║  "],
        (false, true, true, false) => ["     ", "  ╔══", "  ║  "],
        (false, true, false, true) => ["     ", "═════", "     "],
        (false, true, false, false) => ["     ", "   ══", "     "],
        (false, false, true, true) => ["     ", "══╗  ", "  ║  "],
        (false, false, true, false) => ["     ", "     ", "  ║  "],
        (false, false, false, true) => ["     ", "══   ", "     "],
        (false, false, false, false) => ["     ", "     ", "     "],
    };
    block_from_rows(rows)
}

/// Diagnostic block for a cell that still has unknown edges
///
/// Each side shows its road glyph when open, a blank when closed and a
/// placeholder when unknown. Corners and the center are placeholders.
fn unresolved_block(
    north: EdgeState,
    east: EdgeState,
    south: EdgeState,
    west: EdgeState,
) -> GlyphBlock {
    let up = side_glyph(north, VERTICAL);
    let right = side_glyph(east, HORIZONTAL);
    let down = side_glyph(south, VERTICAL);
    let left = side_glyph(west, HORIZONTAL);
    let q = UNKNOWN_MARKER;

    [
        [q, q, up, q, q],
        [left, left, q, right, right],
        [q, q, down, q, q],
    ]
}

const fn side_glyph(edge: EdgeState, road: char) -> char {
    match edge {
        EdgeState::Unknown => UNKNOWN_MARKER,
        EdgeState::Open => road,
        EdgeState::Closed => ' ',
    }
}

fn block_from_rows(rows: [&str; CELL_GLYPH_HEIGHT]) -> GlyphBlock {
    let mut block = [[' '; CELL_GLYPH_WIDTH]; CELL_GLYPH_HEIGHT];
    for (row, text) in block.iter_mut().zip(rows) {
        for (slot, glyph) in row.iter_mut().zip(text.chars()) {
            *slot = glyph;
        }
    }
    block
}

/// Join a block's rows into strings
pub fn block_lines(block: &GlyphBlock) -> [String; CELL_GLYPH_HEIGHT] {
    block.map(|row| row.iter().collect())
}
