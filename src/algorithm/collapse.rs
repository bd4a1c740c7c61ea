//! Grid-wide collapse loop driven by lowest entropy

use tracing::trace;

use crate::algorithm::propagation::propagate;
use crate::algorithm::random::RandomSource;
use crate::io::error::Result;
use crate::spatial::grid::Grid;

/// Counters describing one full collapse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollapseStats {
    /// Number of cells collapsed directly
    pub steps: usize,
    /// Number of edges resolved on neighbors by propagation
    pub propagated_edges: usize,
}

/// Position of the unresolved cell with the fewest unknown edges
///
/// Ties go to the first cell in scan order (x outer, y inner). Returns
/// `None` once every cell is fully resolved.
pub fn lowest_entropy(grid: &Grid) -> Option<[usize; 2]> {
    let mut lowest: Option<([usize; 2], usize)> = None;

    for position in grid.positions() {
        let Some(cell) = grid.cell(position) else {
            continue;
        };
        let entropy = cell.entropy();
        if entropy == 0 {
            continue;
        }
        if lowest.is_none_or(|(_, best)| entropy < best) {
            lowest = Some((position, entropy));
        }
    }

    lowest.map(|(position, _)| position)
}

/// Resolve every edge in the grid
///
/// Repeatedly collapses the lowest-entropy cell and propagates its edges
/// until nothing is unknown. Total entropy strictly decreases every step, so
/// the loop always terminates.
///
/// # Errors
///
/// Returns [`MapError::CoordinateOutOfBounds`](crate::MapError) only if the
/// grid's own scan produced a position it cannot address.
pub fn collapse_grid<R: RandomSource>(grid: &mut Grid, rng: &mut R) -> Result<CollapseStats> {
    let mut stats = CollapseStats::default();

    while let Some(position) = lowest_entropy(grid) {
        grid.try_cell_mut(position)?.collapse(rng);
        let propagated = propagate(grid, position)?;

        stats.steps += 1;
        stats.propagated_edges += propagated;
        trace!(x = position[0], y = position[1], propagated, "collapsed cell");
    }

    Ok(stats)
}
