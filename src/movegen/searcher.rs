//! Searcher move generation.
//!
//! Enumerates placements, road moves and searchable buildings for a single
//! searcher unit. Results agree with the validator for the same state.

use crate::board::{Coord, GameState};

/// Free intersections available for setup placement.
pub fn legal_placements(state: &GameState) -> Vec<Coord> {
    state
        .board
        .intersections()
        .into_iter()
        .filter(|&c| state.searcher_at(c).is_none())
        .collect()
}

/// Road cells the unit can move to under the configured stride rule.
///
/// Returns an empty vec for an unknown or unplaced unit.
pub fn legal_searcher_moves(state: &GameState, unit: usize) -> Vec<Coord> {
    let from = match state.searchers.get(unit).copied().flatten() {
        Some(c) => c,
        None => return Vec::new(),
    };
    let board = state.board;
    let mut targets = Vec::new();
    for &stride in state.config.searcher_stride.strides() {
        for c in board.step_targets(from, stride) {
            let is_road = board.classify(c).map(|k| k.is_road()).unwrap_or(false);
            if is_road && state.searcher_at(c).is_none() {
                targets.push(c);
            }
        }
    }
    targets
}

/// Buildings the unit can inspect from where it stands.
pub fn legal_searches(state: &GameState, unit: usize) -> Vec<Coord> {
    match state.searchers.get(unit).copied().flatten() {
        Some(from) => state.board.adjacent_buildings(from),
        None => Vec::new(),
    }
}
