//! Spatial data structures for the street map
//!
//! This module contains spatial-related functionality including:
//! - Compass directions and grid offsets
//! - Per-cell edge constraints
//! - Grid ownership, neighbor lookup and initial layout

/// Per-cell edge states, roles and the forced-resolution rule
pub mod cell;
/// Compass directions
pub mod direction;
/// Grid ownership and neighbor lookup
pub mod grid;

pub use cell::{Cell, CellRole, EdgeState};
pub use direction::Direction;
pub use grid::Grid;
