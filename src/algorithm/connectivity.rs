//! Reachability check and pruning of disconnected streets
//!
//! Local propagation only guarantees that neighbors agree on shared edges.
//! It can still leave islands, loops and branches that never meet the start.
//! A flood fill from the start decides whether home is reachable and, if it
//! is, everything the fill did not touch is closed off.

use crate::io::error::{MapError, Result};
use crate::spatial::cell::CellRole;
use crate::spatial::direction::Direction;
use crate::spatial::grid::Grid;

/// Find the start cell by scanning the first column
pub fn find_start(grid: &Grid) -> Option<[usize; 2]> {
    (0..grid.height())
        .map(|y| [0, y])
        .find(|&position| {
            grid.cell(position)
                .is_some_and(|cell| cell.role() == CellRole::Start)
        })
}

/// Mark every cell reachable from `start` through open edges
///
/// Clears all previous path marks first. Returns whether the home cell was
/// reached.
///
/// # Errors
///
/// Returns [`MapError::CoordinateOutOfBounds`] if `start` is outside the
/// grid.
pub fn mark_reachable(grid: &mut Grid, start: [usize; 2]) -> Result<bool> {
    for cell in grid.cells_mut() {
        cell.reset_path();
    }

    let mut reached_home = false;
    let mut pending = vec![start];

    while let Some(position) = pending.pop() {
        let cell = grid.try_cell_mut(position)?;
        if cell.is_on_path() {
            continue;
        }
        cell.mark_on_path();
        reached_home |= cell.role() == CellRole::Home;

        let open: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&direction| cell.get(direction).is_open())
            .collect();

        // Reversed so exploration follows direction order
        for direction in open.into_iter().rev() {
            if let Some(neighbor) = grid.neighbor(position, direction) {
                pending.push(neighbor);
            }
        }
    }

    Ok(reached_home)
}

/// Check that home is reachable from start and prune everything else
///
/// Returns `Ok(false)` when home cannot be reached; the grid is then only
/// marked, not pruned, and should be discarded by the caller. On success
/// every cell off the start-to-home network has all its edges closed.
///
/// # Errors
///
/// Returns [`MapError::MissingStart`] if the first column holds no start
/// cell.
pub fn validate_and_prune(grid: &mut Grid) -> Result<bool> {
    let start = find_start(grid).ok_or(MapError::MissingStart)?;

    if !mark_reachable(grid, start)? {
        return Ok(false);
    }

    for cell in grid.cells_mut() {
        if !cell.is_on_path() {
            cell.clear();
        }
    }

    Ok(true)
}
