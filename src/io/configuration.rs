//! Map constants and rendering defaults

// Map dimensions are fixed; the command line does not expose them
/// Number of columns in a generated map
pub const MAP_WIDTH: usize = 10;
/// Number of rows in a generated map
pub const MAP_HEIGHT: usize = 5;

/// Text rows per rendered cell
pub const CELL_GLYPH_HEIGHT: usize = 3;
/// Characters per rendered cell row
pub const CELL_GLYPH_WIDTH: usize = 5;

/// Marker drawn at the center of the start cell
pub const START_MARKER: char = 'S';
/// Marker drawn at the center of the home cell
pub const HOME_MARKER: char = 'H';
/// Placeholder for anything an unresolved cell cannot show yet
pub const UNKNOWN_MARKER: char = '?';

/// Separator between horizontally adjacent cells
pub const CELL_SEPARATOR: char = '│';
/// Fill character of the line between rows of cells
pub const BAND_FILL: char = '─';
/// Crossing of the row separator with a cell separator
pub const BAND_JUNCTION: char = '┼';

/// Prompt shown between maps in interactive mode
pub const REGENERATE_PROMPT: &str = "Press enter to regenerate.";
