//! Legal move generation.
//!
//! Enumerates the legal evader moves and searcher actions for a given game
//! state. Used by the computer evader, encirclement detection and the
//! random searcher used in benchmarks and simulations.

pub mod evader;
pub mod searcher;

use rand::Rng;

use crate::board::{Coord, GameState};

pub use evader::{is_encircled, legal_evader_moves};
pub use searcher::{legal_placements, legal_searcher_moves, legal_searches};

/// One searcher unit's action within a Searchers turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearcherAction {
    Move(Coord),
    Search(Coord),
    Hold,
}

/// All moves and searches available to `unit`, moves first.
///
/// Hold is only listed when the unit has nothing else to do.
pub fn legal_searcher_actions(state: &GameState, unit: usize) -> Vec<SearcherAction> {
    let mut actions: Vec<SearcherAction> = legal_searcher_moves(state, unit)
        .into_iter()
        .map(SearcherAction::Move)
        .collect();
    actions.extend(legal_searches(state, unit).into_iter().map(SearcherAction::Search));
    if actions.is_empty() {
        actions.push(SearcherAction::Hold);
    }
    actions
}

/// Picks one of `unit`'s legal actions uniformly at random.
pub fn random_searcher_action(
    state: &GameState,
    unit: usize,
    rng: &mut impl Rng,
) -> SearcherAction {
    let legal = legal_searcher_actions(state, unit);
    let idx = rng.gen_range(0..legal.len());
    legal[idx]
}
