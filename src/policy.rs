//! Computer-controlled evader.
//!
//! Picks uniformly at random among the legal moves. The random source is
//! supplied by the caller so games can be replayed from a seed.

use rand::Rng;

use crate::board::{Coord, GameState};
use crate::movegen::legal_evader_moves;

/// The evader policy's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaderChoice {
    /// Place on or move to this building.
    Move(Coord),
    /// No legal move remains.
    Encircled,
}

/// Chooses the evader's next building.
///
/// An unplaced evader picks any building; a placed one picks among its
/// unvisited stride-2 neighbors, or reports encirclement.
pub fn choose_move(state: &GameState, rng: &mut impl Rng) -> EvaderChoice {
    let legal = legal_evader_moves(state);
    if legal.is_empty() {
        return EvaderChoice::Encircled;
    }
    let idx = rng.gen_range(0..legal.len());
    EvaderChoice::Move(legal[idx])
}
