//! Evader move generation.

use crate::board::{Coord, GameState};

/// Returns every building the evader could occupy next.
///
/// Before placement this is every building on the board. Afterwards it is
/// the in-range stride-2 orthogonal hops onto buildings not yet in the
/// trail. Turn order is not considered.
pub fn legal_evader_moves(state: &GameState) -> Vec<Coord> {
    let board = state.board;
    match state.evader {
        None => board.buildings(),
        Some(from) => board
            .step_targets(from, 2)
            .into_iter()
            .filter(|&c| board.is_building(c) && !state.in_trail(c))
            .collect(),
    }
}

/// True if a placed evader has nowhere left to go.
pub fn is_encircled(state: &GameState) -> bool {
    state.evader.is_some() && legal_evader_moves(state).is_empty()
}
