//! Game state representation.
//!
//! Holds the complete snapshot of a game at a given point in time: evader
//! position and trail, searcher positions, discovered trail, round counter,
//! phase, active role, and per-turn action bookkeeping.

use serde::{Deserialize, Serialize};

use super::geometry::{Board, Coord};
use super::unit::{Role, SEARCHER_COUNT};
use crate::config::GameConfig;

/// Whether searcher units are still being placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Setup,
    Play,
}

/// A building the evader occupied, tagged with the round it arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrailEntry {
    pub position: Coord,
    pub round: u32,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    EvaderFound,
    RoundLimitExceeded,
    EvaderEncircled,
}

impl EndReason {
    pub const fn winner(self) -> Role {
        match self {
            EndReason::EvaderFound | EndReason::EvaderEncircled => Role::Searchers,
            EndReason::RoundLimitExceeded => Role::Evader,
        }
    }
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EndReason::EvaderFound => "evader found",
            EndReason::RoundLimitExceeded => "round limit exceeded",
            EndReason::EvaderEncircled => "evader encircled",
        };
        f.write_str(s)
    }
}

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Role,
    pub reason: EndReason,
}

impl From<EndReason> for Outcome {
    fn from(reason: EndReason) -> Self {
        Outcome {
            winner: reason.winner(),
            reason,
        }
    }
}

/// The turn-level view of the state machine, derived from phase, active
/// role and outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnState {
    SettingUp,
    EvaderTurn,
    SearchersTurn,
    GameOver(Outcome),
}

/// Complete game state at a point in time.
///
/// Only the engine mutates a live `GameState`; everyone else sees a shared
/// reference or a cloned snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub board: Board,
    pub round: u32,
    pub phase: Phase,
    pub active: Role,
    pub evader: Option<Coord>,
    /// Every building the evader has occupied, in visit order. Positions are unique.
    pub trail: Vec<TrailEntry>,
    /// Trail entries a searcher has inspected. Always a subset of `trail`.
    pub discovered: Vec<TrailEntry>,
    pub searchers: [Option<Coord>; SEARCHER_COUNT],
    /// Units that have already acted in the current Searchers turn.
    pub acted: [bool; SEARCHER_COUNT],
    /// Unit targeted by move/search/hold commands.
    pub selected: usize,
    pub outcome: Option<Outcome>,
}

impl GameState {
    /// Creates the initial state for a new game.
    pub fn new(config: GameConfig) -> Self {
        GameState {
            board: Board::new(config.grid_size),
            round: 1,
            phase: Phase::Setup,
            active: config.first_mover,
            evader: None,
            trail: Vec::new(),
            discovered: Vec::new(),
            searchers: [None; SEARCHER_COUNT],
            acted: [false; SEARCHER_COUNT],
            selected: 0,
            outcome: None,
            config,
        }
    }

    pub fn turn_state(&self) -> TurnState {
        if let Some(outcome) = self.outcome {
            return TurnState::GameOver(outcome);
        }
        match (self.active, self.phase) {
            (Role::Evader, _) => TurnState::EvaderTurn,
            (Role::Searchers, Phase::Setup) => TurnState::SettingUp,
            (Role::Searchers, Phase::Play) => TurnState::SearchersTurn,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns true if the evader has ever occupied `pos`.
    pub fn in_trail(&self, pos: Coord) -> bool {
        self.trail.iter().any(|t| t.position == pos)
    }

    pub fn trail_at(&self, pos: Coord) -> Option<TrailEntry> {
        self.trail.iter().copied().find(|t| t.position == pos)
    }

    pub fn is_discovered(&self, pos: Coord) -> bool {
        self.discovered.iter().any(|t| t.position == pos)
    }

    /// Index of the searcher unit standing on `pos`, if any.
    pub fn searcher_at(&self, pos: Coord) -> Option<usize> {
        self.searchers.iter().position(|s| *s == Some(pos))
    }

    /// Lowest-indexed unit that has not been placed yet.
    pub fn next_unplaced(&self) -> Option<usize> {
        self.searchers.iter().position(|s| s.is_none())
    }

    pub fn placed_count(&self) -> usize {
        self.searchers.iter().filter(|s| s.is_some()).count()
    }

    pub fn acted_count(&self) -> usize {
        self.acted.iter().filter(|a| **a).count()
    }

    pub(crate) fn push_trail(&mut self, position: Coord) {
        self.trail.push(TrailEntry {
            position,
            round: self.round,
        });
    }

    /// Adds the trail entry at `pos` to the discovered set. Returns the entry
    /// only when it was newly discovered.
    pub(crate) fn discover(&mut self, pos: Coord) -> Option<TrailEntry> {
        let entry = self.trail_at(pos)?;
        if self.is_discovered(pos) {
            return None;
        }
        self.discovered.push(entry);
        Some(entry)
    }

    pub(crate) fn reset_actions(&mut self) {
        self.acted = [false; SEARCHER_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(GameConfig::default())
    }

    #[test]
    fn initial_state_is_setup() {
        let s = state();
        assert_eq!(s.round, 1);
        assert_eq!(s.phase, Phase::Setup);
        assert_eq!(s.turn_state(), TurnState::SettingUp);
        assert!(s.evader.is_none());
        assert!(s.trail.is_empty());
        assert_eq!(s.placed_count(), 0);
        assert_eq!(s.next_unplaced(), Some(0));
    }

    #[test]
    fn evader_first_starts_on_evader_turn() {
        let config = GameConfig {
            first_mover: Role::Evader,
            ..GameConfig::default()
        };
        let s = GameState::new(config);
        assert_eq!(s.turn_state(), TurnState::EvaderTurn);
        assert_eq!(s.phase, Phase::Setup);
    }

    #[test]
    fn trail_records_round() {
        let mut s = state();
        s.round = 3;
        s.push_trail(Coord::new(2, 2));
        assert!(s.in_trail(Coord::new(2, 2)));
        assert_eq!(s.trail_at(Coord::new(2, 2)).map(|t| t.round), Some(3));
    }

    #[test]
    fn discover_is_idempotent_and_requires_trail() {
        let mut s = state();
        s.push_trail(Coord::new(0, 0));
        assert!(s.discover(Coord::new(2, 2)).is_none());
        assert!(s.discover(Coord::new(0, 0)).is_some());
        assert!(s.discover(Coord::new(0, 0)).is_none());
        assert_eq!(s.discovered.len(), 1);
    }

    #[test]
    fn searcher_lookup() {
        let mut s = state();
        s.searchers[1] = Some(Coord::new(3, 3));
        assert_eq!(s.searcher_at(Coord::new(3, 3)), Some(1));
        assert_eq!(s.next_unplaced(), Some(0));
        assert_eq!(s.placed_count(), 1);
    }

    #[test]
    fn end_reason_winners() {
        assert_eq!(Outcome::from(EndReason::EvaderFound).winner, Role::Searchers);
        assert_eq!(Outcome::from(EndReason::EvaderEncircled).winner, Role::Searchers);
        assert_eq!(Outcome::from(EndReason::RoundLimitExceeded).winner, Role::Evader);
        assert_eq!(EndReason::RoundLimitExceeded.to_string(), "round limit exceeded");
    }
}
