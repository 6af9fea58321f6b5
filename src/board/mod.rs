//! Board geometry and game-state types.
//!
//! Contains the grid classification, roles and searcher units, and the
//! overall game state owned by the engine.

pub mod geometry;
pub mod state;
pub mod unit;

pub use geometry::{Board, CellKind, Coord, DEFAULT_GRID_SIZE, MAX_GRID_SIZE};
pub use state::{EndReason, GameState, Outcome, Phase, TrailEntry, TurnState};
pub use unit::{unit_label, Role, SEARCHER_COUNT};
