//! Rejection reasons for player commands.
//!
//! Every variant is a recoverable, user-facing rejection. None of them
//! leave a trace in the game state.

use crate::board::Coord;

/// Why a command was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("{0} is outside the grid")]
    OutOfRange(Coord),

    #[error("{at} is not a {expected}")]
    WrongCellKind { at: Coord, expected: &'static str },

    #[error("{0} is not an orthogonal hop of an allowed stride")]
    WrongStride(Coord),

    #[error("{0} is not diagonally adjacent to the unit")]
    NotAdjacent(Coord),

    #[error("{0} is already occupied by another unit")]
    Occupied(Coord),

    #[error("the evader has already visited {0}")]
    AlreadyVisited(Coord),

    #[error("not allowed now: {0}")]
    WrongPhaseOrRole(&'static str),

    #[error("unit {} has already acted this turn", .0 + 1)]
    UnitAlreadyActed(usize),

    #[error("there is no searcher unit {0}")]
    UnknownUnit(usize),
}

impl RuleError {
    /// Stable machine-readable reason code.
    pub const fn code(&self) -> &'static str {
        match self {
            RuleError::OutOfRange(_) => "out_of_range",
            RuleError::WrongCellKind { .. } => "wrong_cell_kind",
            RuleError::WrongStride(_) => "wrong_stride",
            RuleError::NotAdjacent(_) => "not_adjacent",
            RuleError::Occupied(_) => "occupied",
            RuleError::AlreadyVisited(_) => "already_visited",
            RuleError::WrongPhaseOrRole(_) => "wrong_phase_or_role",
            RuleError::UnitAlreadyActed(_) => "unit_already_acted",
            RuleError::UnknownUnit(_) => "unknown_unit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_readable() {
        assert_eq!(
            RuleError::OutOfRange(Coord::new(9, 0)).to_string(),
            "9,0 is outside the grid"
        );
        assert_eq!(
            RuleError::UnitAlreadyActed(0).to_string(),
            "unit 1 has already acted this turn"
        );
        assert_eq!(RuleError::AlreadyVisited(Coord::new(2, 2)).code(), "already_visited");
    }
}
