//! Move legality checks.
//!
//! Pure predicates over a read-only `GameState`. Each returns `Ok(())` when
//! the action is legal right now, or the reason it is not. The engine calls
//! these before any mutation.

use crate::board::{CellKind, Coord, GameState, Role, TurnState, SEARCHER_COUNT};

use super::error::RuleError;

fn require_turn(state: &GameState, expected: TurnState) -> Result<(), RuleError> {
    let current = state.turn_state();
    if current == expected {
        return Ok(());
    }
    let why = match current {
        TurnState::GameOver(_) => "the game is over",
        TurnState::SettingUp => "searcher units are still being placed",
        TurnState::EvaderTurn => "it is the evader's turn",
        TurnState::SearchersTurn => "it is the searchers' turn",
    };
    Err(RuleError::WrongPhaseOrRole(why))
}

fn require_kind(state: &GameState, pos: Coord, expected: CellKind) -> Result<(), RuleError> {
    let kind = state.board.classify(pos)?;
    let ok = match expected {
        CellKind::Building => kind == CellKind::Building,
        CellKind::Intersection => kind == CellKind::Intersection,
        CellKind::Road => kind.is_road(),
    };
    if ok {
        Ok(())
    } else {
        let expected = match expected {
            CellKind::Building => "building",
            CellKind::Intersection => "intersection",
            CellKind::Road => "road",
        };
        Err(RuleError::WrongCellKind { at: pos, expected })
    }
}

fn require_unit(unit: usize) -> Result<(), RuleError> {
    if unit < SEARCHER_COUNT {
        Ok(())
    } else {
        Err(RuleError::UnknownUnit(unit))
    }
}

/// Checks that `unit` may still act in the current Searchers turn and
/// returns its position.
fn ready_unit(state: &GameState, unit: usize) -> Result<Coord, RuleError> {
    require_turn(state, TurnState::SearchersTurn)?;
    require_unit(unit)?;
    if state.acted[unit] {
        return Err(RuleError::UnitAlreadyActed(unit));
    }
    state.searchers[unit].ok_or(RuleError::WrongPhaseOrRole("unit has not been placed"))
}

/// The evader's opening placement: any building, once.
pub fn can_place_evader(state: &GameState, pos: Coord) -> Result<(), RuleError> {
    require_turn(state, TurnState::EvaderTurn)?;
    if state.evader.is_some() {
        return Err(RuleError::WrongPhaseOrRole("the evader is already placed"));
    }
    require_kind(state, pos, CellKind::Building)
}

/// A stride-2 orthogonal hop onto a building the evader has never visited.
pub fn can_move_evader(state: &GameState, pos: Coord) -> Result<(), RuleError> {
    require_turn(state, TurnState::EvaderTurn)?;
    let from = state
        .evader
        .ok_or(RuleError::WrongPhaseOrRole("the evader has not been placed"))?;
    require_kind(state, pos, CellKind::Building)?;
    if !from.is_orthogonal_at(pos, 2) {
        return Err(RuleError::WrongStride(pos));
    }
    if state.in_trail(pos) {
        return Err(RuleError::AlreadyVisited(pos));
    }
    Ok(())
}

/// Setup placement of `unit` onto a free intersection.
pub fn can_place_searcher(state: &GameState, unit: usize, pos: Coord) -> Result<(), RuleError> {
    require_turn(state, TurnState::SettingUp)?;
    require_unit(unit)?;
    if state.searchers[unit].is_some() {
        return Err(RuleError::WrongPhaseOrRole("that unit is already placed"));
    }
    if state.config.placement_order == crate::config::PlacementOrder::Sequential
        && state.next_unplaced() != Some(unit)
    {
        return Err(RuleError::WrongPhaseOrRole("units must be placed in order"));
    }
    require_kind(state, pos, CellKind::Intersection)?;
    if state.searcher_at(pos).is_some() {
        return Err(RuleError::Occupied(pos));
    }
    Ok(())
}

/// An orthogonal move of `unit` along the roads, with the configured stride
/// rule, onto a cell no other unit holds.
pub fn can_move_searcher(state: &GameState, unit: usize, pos: Coord) -> Result<(), RuleError> {
    let from = ready_unit(state, unit)?;
    require_kind(state, pos, CellKind::Road)?;
    let (dx, dy) = from.deltas(pos);
    let stride = dx.max(dy);
    if dx.min(dy) != 0 || !state.config.searcher_stride.allows(stride) {
        return Err(RuleError::WrongStride(pos));
    }
    if state.searcher_at(pos).is_some() {
        return Err(RuleError::Occupied(pos));
    }
    Ok(())
}

/// Inspection of a building diagonally adjacent to `unit`.
pub fn can_search(state: &GameState, unit: usize, pos: Coord) -> Result<(), RuleError> {
    let from = ready_unit(state, unit)?;
    require_kind(state, pos, CellKind::Building)?;
    if !from.is_diagonal_neighbor(pos) {
        return Err(RuleError::NotAdjacent(pos));
    }
    Ok(())
}

/// `unit` forgoing its action this turn.
pub fn can_hold(state: &GameState, unit: usize) -> Result<(), RuleError> {
    ready_unit(state, unit).map(|_| ())
}

/// Checks that `role` is the side whose turn it is (setup counts as the
/// searchers' turn).
pub fn is_turn_of(state: &GameState, role: Role) -> bool {
    !state.is_over() && state.active == role
}
