//! Grid ownership, neighbor lookup and initial map layout
//!
//! The grid owns every cell in an `ndarray` indexed `[x, y]`. Its logical
//! iteration order is therefore x outer, y inner, which is the scan order the
//! collapse loop relies on for tie-breaking.

use ndarray::Array2;

use crate::algorithm::propagation::propagate;
use crate::algorithm::random::RandomSource;
use crate::io::error::{MapError, Result};
use crate::spatial::cell::{Cell, CellRole};
use crate::spatial::direction::Direction;

/// Rectangular street map under construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
    start: [usize; 2],
    home: [usize; 2],
}

impl Grid {
    /// Build a fresh grid with randomly placed start and home cells
    ///
    /// Draws the start row first, then the home row.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidDimensions`] if the grid has no columns or
    /// no rows.
    pub fn new<R: RandomSource>(width: usize, height: usize, rng: &mut R) -> Result<Self> {
        validate_dimensions(width, height)?;
        let start_row = rng.pick_index(height);
        let home_row = rng.pick_index(height);
        Self::with_roles(width, height, start_row, home_row)
    }

    /// Build a fresh grid with start and home on explicit rows
    ///
    /// Perimeter edges are closed, the start cell opens westward out of the
    /// map, and the home cell opens on all four sides. The home cell's open
    /// edges are propagated to its neighbors before returning.
    ///
    /// In a single-column grid both cells share column 0; when they also
    /// share a row, the home role replaces the start role.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidDimensions`] for unusable dimensions and
    /// [`MapError::InvalidParameter`] if either row is outside the grid.
    pub fn with_roles(
        width: usize,
        height: usize,
        start_row: usize,
        home_row: usize,
    ) -> Result<Self> {
        validate_dimensions(width, height)?;
        for (parameter, row) in [("start_row", start_row), ("home_row", home_row)] {
            if row >= height {
                return Err(MapError::InvalidParameter {
                    parameter,
                    value: row.to_string(),
                    reason: format!("must be below the grid height {height}"),
                });
            }
        }

        let cells = Array2::from_shape_fn((width, height), |(x, y)| {
            let mut cell = Cell::new([x, y], width, height);
            if x == 0 {
                cell.set_resolved(Direction::West, false);
            }
            if y == 0 {
                cell.set_resolved(Direction::North, false);
            }
            if x + 1 == width {
                cell.set_resolved(Direction::East, false);
            }
            if y + 1 == height {
                cell.set_resolved(Direction::South, false);
            }
            cell
        });

        let start = [0, start_row];
        let home = [width - 1, home_row];
        let mut grid = Self { cells, start, home };

        let start_cell = grid.try_cell_mut(start)?;
        start_cell.set_role(CellRole::Start);
        start_cell.set_resolved(Direction::West, true);

        let home_cell = grid.try_cell_mut(home)?;
        home_cell.set_role(CellRole::Home);
        for direction in Direction::ALL {
            home_cell.set_resolved(direction, true);
        }
        propagate(&mut grid, home)?;

        Ok(grid)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.dim().0
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.dim().1
    }

    /// Position of the start cell
    pub const fn start(&self) -> [usize; 2] {
        self.start
    }

    /// Position of the home cell
    pub const fn home(&self) -> [usize; 2] {
        self.home
    }

    /// Cell at a position, if inside the grid
    pub fn cell(&self, position: [usize; 2]) -> Option<&Cell> {
        self.cells.get(position)
    }

    /// Mutable cell at a position, if inside the grid
    pub fn cell_mut(&mut self, position: [usize; 2]) -> Option<&mut Cell> {
        self.cells.get_mut(position)
    }

    /// Cell at a position that is expected to exist
    ///
    /// # Errors
    ///
    /// Returns [`MapError::CoordinateOutOfBounds`] if the position lies
    /// outside the grid.
    pub fn try_cell(&self, position: [usize; 2]) -> Result<&Cell> {
        let dimensions = self.dimensions();
        self.cells
            .get(position)
            .ok_or(MapError::CoordinateOutOfBounds {
                position,
                dimensions,
            })
    }

    /// Mutable cell at a position that is expected to exist
    ///
    /// # Errors
    ///
    /// Returns [`MapError::CoordinateOutOfBounds`] if the position lies
    /// outside the grid.
    pub fn try_cell_mut(&mut self, position: [usize; 2]) -> Result<&mut Cell> {
        let dimensions = self.dimensions();
        self.cells
            .get_mut(position)
            .ok_or(MapError::CoordinateOutOfBounds {
                position,
                dimensions,
            })
    }

    /// Grid dimensions as `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Position one step away in `direction`, if it lies inside the grid
    pub fn neighbor(&self, position: [usize; 2], direction: Direction) -> Option<[usize; 2]> {
        let [x, y] = position;
        let nx = x.checked_add_signed(direction.dx())?;
        let ny = y.checked_add_signed(direction.dy())?;
        (nx < self.width() && ny < self.height()).then_some([nx, ny])
    }

    /// All positions in scan order (x outer, y inner)
    pub fn positions(&self) -> impl Iterator<Item = [usize; 2]> + use<> {
        let (width, height) = self.dimensions();
        (0..width).flat_map(move |x| (0..height).map(move |y| [x, y]))
    }

    /// All cells in scan order (x outer, y inner)
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Mutable access to all cells in scan order
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Shared edges whose two sides disagree
    ///
    /// Each shared edge is reported once, from the cell on its west or north
    /// side, as that cell's position and the direction of the edge.
    pub fn edge_conflicts(&self) -> Vec<([usize; 2], Direction)> {
        let mut conflicts = Vec::new();
        for position in self.positions() {
            let Some(cell) = self.cell(position) else {
                continue;
            };
            for direction in [Direction::East, Direction::South] {
                let Some(other) = self
                    .neighbor(position, direction)
                    .and_then(|neighbor| self.cell(neighbor))
                else {
                    continue;
                };
                if cell.get(direction) != other.get(direction.opposite()) {
                    conflicts.push((position, direction));
                }
            }
        }
        conflicts
    }
}

fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 {
        return Err(MapError::InvalidDimensions {
            width,
            height,
            reason: "the grid needs at least one column",
        });
    }
    if height == 0 {
        return Err(MapError::InvalidDimensions {
            width,
            height,
            reason: "the grid needs at least one row",
        });
    }
    Ok(())
}
