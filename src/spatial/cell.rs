//! Per-cell edge constraints
//!
//! A cell carries one tri-state edge per compass direction. Edges start
//! unknown and are resolved exactly once to open (road crosses the edge) or
//! closed (no road), apart from [`Cell::clear`] which closes everything while
//! pruning.

use crate::algorithm::random::RandomSource;
use crate::spatial::direction::Direction;

/// Resolution state of a single cell edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeState {
    /// Not yet decided
    #[default]
    Unknown,
    /// A road continues across this edge
    Open,
    /// No road crosses this edge
    Closed,
}

impl EdgeState {
    /// Resolved state matching a road/no-road decision
    pub const fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    /// Whether the edge has been decided
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Whether a road crosses the edge
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether the edge is decided as having no road
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// The decided value, if any
    pub const fn value(self) -> Option<bool> {
        match self {
            Self::Unknown => None,
            Self::Open => Some(true),
            Self::Closed => Some(false),
        }
    }
}

/// What a cell represents on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellRole {
    /// Ordinary street cell
    #[default]
    Normal,
    /// Entry point of the map, always in the westmost column
    Start,
    /// Destination hub, always in the eastmost column
    Home,
}

/// A single grid cell with its four edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: [usize; 2],
    north: EdgeState,
    south: EdgeState,
    east: EdgeState,
    west: EdgeState,
    role: CellRole,
    on_path: bool,
    interior: bool,
}

impl Cell {
    /// Create a cell with all edges unknown
    ///
    /// The grid dimensions are only used to decide whether the cell is
    /// interior; edges on the perimeter are closed by the grid, not here.
    pub const fn new(position: [usize; 2], width: usize, height: usize) -> Self {
        let [x, y] = position;
        let interior = x != 0 && y != 0 && x + 1 < width && y + 1 < height;

        Self {
            position,
            north: EdgeState::Unknown,
            south: EdgeState::Unknown,
            east: EdgeState::Unknown,
            west: EdgeState::Unknown,
            role: CellRole::Normal,
            on_path: false,
            interior,
        }
    }

    /// Grid coordinates `[x, y]` of this cell
    pub const fn position(&self) -> [usize; 2] {
        self.position
    }

    /// Edge state on the given side
    pub const fn get(&self, direction: Direction) -> EdgeState {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    const fn edge_mut(&mut self, direction: Direction) -> &mut EdgeState {
        match direction {
            Direction::North => &mut self.north,
            Direction::South => &mut self.south,
            Direction::East => &mut self.east,
            Direction::West => &mut self.west,
        }
    }

    /// Resolve an edge, then apply the forced-resolution rule
    ///
    /// An interior cell that ends up with exactly two closed edges gets all
    /// of its remaining unknown edges opened, so interior streets never end
    /// in a stub. Perimeter cells are exempt.
    pub fn set_resolved(&mut self, direction: Direction, open: bool) {
        *self.edge_mut(direction) = EdgeState::from_open(open);

        if self.interior && self.closed_count() == 2 {
            for unresolved in self.unresolved_directions() {
                *self.edge_mut(unresolved) = EdgeState::Open;
            }
        }
    }

    /// Resolve an edge only if it is still unknown
    ///
    /// Returns whether anything changed; propagation stops at cells that
    /// report no change.
    pub fn try_resolve(&mut self, direction: Direction, open: bool) -> bool {
        if self.get(direction).is_resolved() {
            return false;
        }
        self.set_resolved(direction, open);
        true
    }

    /// Resolve every remaining unknown edge at random
    ///
    /// Picks one unknown side uniformly, then flips a fair coin for its
    /// value. The unknown set is recomputed after each step because the
    /// forced-resolution rule can settle several edges at once.
    pub fn collapse<R: RandomSource>(&mut self, rng: &mut R) {
        loop {
            let unresolved = self.unresolved_directions();
            let Some(direction) = rng.pick(&unresolved) else {
                break;
            };
            let open = rng.next_bool();
            self.set_resolved(direction, open);
        }
    }

    /// Close all four edges unconditionally
    pub const fn clear(&mut self) {
        self.north = EdgeState::Closed;
        self.south = EdgeState::Closed;
        self.east = EdgeState::Closed;
        self.west = EdgeState::Closed;
    }

    /// Number of unknown edges (0..=4)
    pub fn entropy(&self) -> usize {
        self.count(|edge| !edge.is_resolved())
    }

    /// Number of edges resolved to closed
    pub fn closed_count(&self) -> usize {
        self.count(EdgeState::is_closed)
    }

    /// Number of edges resolved to open
    pub fn open_count(&self) -> usize {
        self.count(EdgeState::is_open)
    }

    /// Whether every edge has been decided
    pub fn is_resolved(&self) -> bool {
        self.entropy() == 0
    }

    /// Whether the cell has a neighbor on every side
    pub const fn is_interior(&self) -> bool {
        self.interior
    }

    /// Unknown sides in canonical direction order
    pub fn unresolved_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| !self.get(direction).is_resolved())
            .collect()
    }

    /// Role of this cell on the map
    pub const fn role(&self) -> CellRole {
        self.role
    }

    /// Assign the role of this cell
    pub const fn set_role(&mut self, role: CellRole) {
        self.role = role;
    }

    /// Whether the connectivity search reached this cell
    pub const fn is_on_path(&self) -> bool {
        self.on_path
    }

    /// Record that the connectivity search reached this cell
    pub const fn mark_on_path(&mut self) {
        self.on_path = true;
    }

    /// Forget a previous connectivity search
    pub const fn reset_path(&mut self) {
        self.on_path = false;
    }

    fn count(&self, predicate: impl Fn(EdgeState) -> bool) -> usize {
        Direction::ALL
            .into_iter()
            .filter(|&direction| predicate(self.get(direction)))
            .count()
    }
}
