//! Game rules: rejection reasons and legality predicates.

pub mod error;
pub mod validate;

pub use error::RuleError;
pub use validate::{
    can_hold, can_move_evader, can_move_searcher, can_place_evader, can_place_searcher,
    can_search, is_turn_of,
};
