//! Street map generation with an edge-constraint wave function collapse
//!
//! Every cell of a fixed grid carries four edges that are either open (a road
//! crosses) or closed. Edges are collapsed at random in lowest-entropy order
//! and propagated to neighbors, then a flood fill from the start cell keeps
//! only the streets connected to it. Grids whose home cell stays unreachable
//! are regenerated from scratch.

#![forbid(unsafe_code)]

/// Collapse, propagation, connectivity validation and the generation driver
pub mod algorithm;
/// Rendering, configuration, errors and the command-line session
pub mod io;
/// Cells, directions and the grid
pub mod spatial;

pub use io::error::{MapError, Result};
