//! Static grid geometry.
//!
//! The board is an `N x N` grid (N odd) of alternating building and road
//! cells. Cell kind is a pure function of coordinate parity, so the board
//! itself only carries its side length.

use serde::{Deserialize, Serialize};

use crate::rules::RuleError;

/// Default side length of the grid (5x5 buildings).
pub const DEFAULT_GRID_SIZE: i32 = 9;

/// Largest accepted side length.
pub const MAX_GRID_SIZE: i32 = 99;

/// A grid coordinate. Signed so that out-of-range input can be represented
/// and rejected rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// The coordinate shifted by `(dx, dy)`, or `None` on overflow.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Coord> {
        Some(Coord::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// Per-axis absolute deltas to another coordinate.
    pub const fn deltas(self, other: Coord) -> (i32, i32) {
        ((self.x - other.x).abs(), (self.y - other.y).abs())
    }

    /// Returns true if `other` lies on the same row or column at exactly
    /// `stride` cells away.
    pub const fn is_orthogonal_at(self, other: Coord, stride: i32) -> bool {
        let (dx, dy) = self.deltas(other);
        (dx == stride && dy == 0) || (dx == 0 && dy == stride)
    }

    /// Returns true if `other` is one of the four diagonal neighbors.
    pub const fn is_diagonal_neighbor(self, other: Coord) -> bool {
        let (dx, dy) = self.deltas(other);
        dx == 1 && dy == 1
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// The kind of a grid cell.
///
/// `Intersection` is a road cell; use [`CellKind::is_road`] when any road
/// will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Building,
    Road,
    Intersection,
}

impl CellKind {
    pub const fn is_road(self) -> bool {
        matches!(self, CellKind::Road | CellKind::Intersection)
    }
}

const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Grid geometry for a board of a given side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: i32,
}

impl Board {
    /// Creates a board with side length `size`. Callers are expected to have
    /// validated the size (see `GameConfig::validate`).
    pub const fn new(size: i32) -> Self {
        Board { size }
    }

    /// Returns true if the coordinate lies inside `[0, N)` on both axes.
    pub const fn contains(self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.size && c.y < self.size
    }

    /// Classifies a cell by coordinate parity.
    pub fn classify(self, c: Coord) -> Result<CellKind, RuleError> {
        if !self.contains(c) {
            return Err(RuleError::OutOfRange(c));
        }
        let kind = match (c.x % 2 == 0, c.y % 2 == 0) {
            (true, true) => CellKind::Building,
            (false, false) => CellKind::Intersection,
            _ => CellKind::Road,
        };
        Ok(kind)
    }

    /// Convenience wrapper: true if `c` is in range and a building.
    pub fn is_building(self, c: Coord) -> bool {
        matches!(self.classify(c), Ok(CellKind::Building))
    }

    /// The in-range diagonal neighbors of `c` that are buildings.
    ///
    /// For an intersection these are the (up to) four buildings a searcher
    /// standing there may inspect. Other road cells have none.
    pub fn adjacent_buildings(self, c: Coord) -> Vec<Coord> {
        DIAGONAL
            .iter()
            .filter_map(|&(dx, dy)| c.offset(dx, dy))
            .filter(|&n| self.is_building(n))
            .collect()
    }

    /// The in-range cells orthogonally `stride` away from `c`.
    pub fn step_targets(self, c: Coord, stride: i32) -> Vec<Coord> {
        ORTHOGONAL
            .iter()
            .filter_map(|&(dx, dy)| c.offset(dx.checked_mul(stride)?, dy.checked_mul(stride)?))
            .filter(|&n| self.contains(n))
            .collect()
    }

    /// All building cells in row-major order.
    pub fn buildings(self) -> Vec<Coord> {
        self.cells().filter(|&c| self.is_building(c)).collect()
    }

    /// All intersection cells in row-major order.
    pub fn intersections(self) -> Vec<Coord> {
        self.cells()
            .filter(|&c| matches!(self.classify(c), Ok(CellKind::Intersection)))
            .collect()
    }

    fn cells(self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Coord::new(x, y)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_GRID_SIZE)
    }
}
