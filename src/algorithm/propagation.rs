//! Edge propagation between neighboring cells
//!
//! Resolving an edge on one cell fixes the mirrored edge on the neighbor
//! across it. Mirroring can trip the neighbor's forced-resolution rule, which
//! resolves more edges and cascades further. The cascade runs on an explicit
//! stack so deep chains never grow the call stack.

use crate::io::error::Result;
use crate::spatial::direction::Direction;
use crate::spatial::grid::Grid;

/// Propagate every resolved edge of `origin` through the grid
///
/// All resolved edges of a cell are mirrored onto its neighbors before any
/// neighbor is visited; changed neighbors are then processed depth-first in
/// direction order. Mirroring a whole cell at once means a closed edge is
/// never left pending while a neighbor opens its facing edge, so the grid
/// ends every propagation with matching shared edges.
///
/// Returns the number of edges changed on neighboring cells.
///
/// # Errors
///
/// Returns [`MapError::CoordinateOutOfBounds`](crate::MapError) if `origin`
/// is outside the grid.
pub fn propagate(grid: &mut Grid, origin: [usize; 2]) -> Result<usize> {
    let mut pending = vec![origin];
    let mut changes = 0;

    while let Some(position) = pending.pop() {
        let changed = mirror_edges(grid, position)?;
        changes += changed.len();
        // Reversed so the first changed neighbor is popped next
        pending.extend(changed.into_iter().rev());
    }

    Ok(changes)
}

/// Copy each resolved edge of one cell onto the facing edge of its neighbor
///
/// Returns the neighbors whose facing edge was still unknown and therefore
/// changed, in direction order.
///
/// # Errors
///
/// Returns [`MapError::CoordinateOutOfBounds`](crate::MapError) if
/// `position` is outside the grid.
pub fn mirror_edges(grid: &mut Grid, position: [usize; 2]) -> Result<Vec<[usize; 2]>> {
    let cell = grid.try_cell(position)?;
    let resolved: Vec<(Direction, bool)> = Direction::ALL
        .into_iter()
        .filter_map(|direction| cell.get(direction).value().map(|open| (direction, open)))
        .collect();

    let mut changed = Vec::with_capacity(resolved.len());
    for (direction, open) in resolved {
        let Some(neighbor) = grid.neighbor(position, direction) else {
            continue;
        };
        if grid
            .try_cell_mut(neighbor)?
            .try_resolve(direction.opposite(), open)
        {
            changed.push(neighbor);
        }
    }

    Ok(changed)
}
