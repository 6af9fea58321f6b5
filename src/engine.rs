//! Turn engine.
//!
//! Owns the live `GameState` and is its only writer. Every command is
//! validated first; a rejected command changes nothing and queues a single
//! error log line. Accepted commands mutate the state, run the turn and
//! termination rules, and queue events for the presentation layer.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::board::{unit_label, Coord, EndReason, GameState, Outcome, Phase, Role, SEARCHER_COUNT};
use crate::config::{ConfigError, Controller, GameConfig, PlacementOrder};
use crate::event::{Event, LogCategory};
use crate::movegen::is_encircled;
use crate::policy::{choose_move, EvaderChoice};
use crate::rules::{self, RuleError};

const NO_GAME: RuleError = RuleError::WrongPhaseOrRole("no game in progress");

/// Events produced while applying one accepted command.
#[derive(Default)]
struct Batch {
    ended: Option<Outcome>,
    logs: Vec<Event>,
}

impl Batch {
    fn log(&mut self, category: LogCategory, message: impl Into<String>) {
        self.logs.push(Event::log(category, message));
    }
}

/// Holds the game between commands.
pub struct Engine {
    state: Option<GameState>,
    events: Vec<Event>,
    rng: SmallRng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with no game in progress.
    pub fn new() -> Self {
        Engine {
            state: None,
            events: Vec::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// The live game state, if a game has been started.
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Takes all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Returns true when the host should invoke `play_computer_evader`.
    pub fn needs_computer_move(&self) -> bool {
        match &self.state {
            Some(s) => {
                s.config.evader_controller == Controller::Computer
                    && rules::is_turn_of(s, Role::Evader)
            }
            None => false,
        }
    }

    /// Starts a new game, discarding any game in progress.
    pub fn start_game(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        info!(?config, "starting game");
        let state = GameState::new(config);
        let mut batch = Batch::default();
        batch.log(LogCategory::Success, "game started");
        announce_turn(&state, &mut batch);
        self.state = Some(state);
        self.commit(batch);
        Ok(())
    }

    /// Returns to the pre-game lifecycle.
    pub fn reset(&mut self) {
        info!("game reset");
        self.state = None;
        self.events.push(Event::log(LogCategory::Info, "game reset"));
    }

    /// Places a searcher unit during setup. With no explicit unit, the next
    /// unit in order is placed (or the selected one under free placement).
    pub fn place_searcher(&mut self, unit: Option<usize>, pos: Coord) -> Result<(), RuleError> {
        let unit = match &self.state {
            Some(s) => placement_target(s, unit),
            None => return self.reject(NO_GAME),
        };
        self.apply(
            |s| rules::can_place_searcher(s, unit, pos),
            |s, batch| {
                s.searchers[unit] = Some(pos);
                batch.log(
                    LogCategory::Searchers,
                    format!("unit {} placed at {}", unit_label(unit), pos),
                );
                if s.placed_count() == SEARCHER_COUNT {
                    s.phase = Phase::Play;
                    batch.log(LogCategory::Info, "all searcher units placed");
                    end_searchers_turn(s, batch);
                }
            },
        )
    }

    /// The human evader's opening placement.
    pub fn place_evader(&mut self, pos: Coord) -> Result<(), RuleError> {
        self.apply(
            |s| {
                require_human_evader(s)?;
                rules::can_place_evader(s, pos)
            },
            |s, batch| settle_evader(s, batch, pos),
        )
    }

    /// A human evader move.
    pub fn move_evader(&mut self, pos: Coord) -> Result<(), RuleError> {
        self.apply(
            |s| {
                require_human_evader(s)?;
                rules::can_move_evader(s, pos)
            },
            |s, batch| settle_evader(s, batch, pos),
        )
    }

    /// Runs the evader policy for one Evader turn.
    pub fn play_computer_evader(&mut self) -> Result<(), RuleError> {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return self.reject(NO_GAME),
        };
        if state.config.evader_controller != Controller::Computer {
            return self.reject(RuleError::WrongPhaseOrRole("the evader is human-controlled"));
        }
        if !rules::is_turn_of(state, Role::Evader) {
            return self.reject(RuleError::WrongPhaseOrRole("it is not the evader's turn"));
        }

        let mut batch = Batch::default();
        match choose_move(state, &mut self.rng) {
            EvaderChoice::Move(pos) => {
                let check = match state.evader {
                    None => rules::can_place_evader(state, pos),
                    Some(_) => rules::can_move_evader(state, pos),
                };
                if let Err(e) = check {
                    return self.reject(e);
                }
                settle_evader(state, &mut batch, pos);
            }
            EvaderChoice::Encircled => finish(state, &mut batch, EndReason::EvaderEncircled),
        }
        self.commit(batch);
        Ok(())
    }

    /// Sets which unit subsequent move/search/hold commands target.
    pub fn select_searcher(&mut self, unit: usize) -> Result<(), RuleError> {
        self.apply(
            |s| {
                if s.is_over() {
                    return Err(RuleError::WrongPhaseOrRole("the game is over"));
                }
                if unit >= SEARCHER_COUNT {
                    return Err(RuleError::UnknownUnit(unit));
                }
                Ok(())
            },
            |s, batch| {
                s.selected = unit;
                batch.log(LogCategory::Searchers, format!("unit {} selected", unit_label(unit)));
            },
        )
    }

    /// Moves the selected unit along the roads.
    pub fn move_searcher(&mut self, pos: Coord) -> Result<(), RuleError> {
        self.apply(
            |s| rules::can_move_searcher(s, s.selected, pos),
            |s, batch| {
                let unit = s.selected;
                s.searchers[unit] = Some(pos);
                batch.log(
                    LogCategory::Searchers,
                    format!("unit {} moved to {}", unit_label(unit), pos),
                );
                mark_acted(s, batch, unit);
            },
        )
    }

    /// Inspects a building next to the selected unit.
    pub fn search_building(&mut self, pos: Coord) -> Result<(), RuleError> {
        self.apply(
            |s| rules::can_search(s, s.selected, pos),
            |s, batch| {
                let unit = s.selected;
                if s.evader == Some(pos) {
                    batch.log(
                        LogCategory::Success,
                        format!("unit {} found the evader at {}", unit_label(unit), pos),
                    );
                    finish(s, batch, EndReason::EvaderFound);
                    return;
                }
                let already_known = s.is_discovered(pos);
                match s.discover(pos) {
                    Some(entry) => batch.log(
                        LogCategory::Success,
                        format!("trail found at {} (round {})", pos, entry.round),
                    ),
                    None if already_known => {
                        batch.log(LogCategory::Info, format!("{} was already searched", pos))
                    }
                    None => batch.log(LogCategory::Info, format!("nothing found at {}", pos)),
                }
                mark_acted(s, batch, unit);
            },
        )
    }

    /// The selected unit forgoes its action this turn.
    pub fn hold_searcher(&mut self) -> Result<(), RuleError> {
        self.apply(
            |s| rules::can_hold(s, s.selected),
            |s, batch| {
                let unit = s.selected;
                batch.log(LogCategory::Searchers, format!("unit {} holds", unit_label(unit)));
                mark_acted(s, batch, unit);
            },
        )
    }

    /// Validates against the live state, then applies and commits. A
    /// failed check is rejected without touching the state.
    fn apply(
        &mut self,
        check: impl FnOnce(&GameState) -> Result<(), RuleError>,
        act: impl FnOnce(&mut GameState, &mut Batch),
    ) -> Result<(), RuleError> {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return self.reject(NO_GAME),
        };
        if let Err(e) = check(state) {
            return self.reject(e);
        }
        let mut batch = Batch::default();
        act(state, &mut batch);
        self.commit(batch);
        Ok(())
    }

    fn reject(&mut self, err: RuleError) -> Result<(), RuleError> {
        debug!(code = err.code(), %err, "command rejected");
        self.events.push(Event::log(LogCategory::Error, err.to_string()));
        Err(err)
    }

    /// Queues a batch: the terminal event first, then log lines, then the
    /// new snapshot.
    fn commit(&mut self, batch: Batch) {
        if let Some(outcome) = batch.ended {
            self.events.push(Event::GameEnded {
                winner: outcome.winner,
                reason: outcome.reason,
            });
        }
        self.events.extend(batch.logs);
        if let Some(state) = &self.state {
            self.events.push(Event::StateChanged {
                snapshot: Box::new(state.clone()),
            });
        }
    }
}

fn placement_target(state: &GameState, unit: Option<usize>) -> usize {
    if let Some(u) = unit {
        return u;
    }
    let selected_free = state.searchers.get(state.selected) == Some(&None);
    if state.config.placement_order == PlacementOrder::Free && selected_free {
        state.selected
    } else {
        state.next_unplaced().unwrap_or(state.selected)
    }
}

fn require_human_evader(state: &GameState) -> Result<(), RuleError> {
    if state.config.evader_controller == Controller::Computer {
        return Err(RuleError::WrongPhaseOrRole("the evader is computer-controlled"));
    }
    Ok(())
}

/// Records the evader on `pos` and hands the turn to the searchers.
fn settle_evader(state: &mut GameState, batch: &mut Batch, pos: Coord) {
    let placing = state.evader.is_none();
    state.evader = Some(pos);
    state.push_trail(pos);
    debug!(round = state.round, placing, "evader acted");
    let verb = if placing { "placed" } else { "moved" };
    batch.log(LogCategory::Evader, format!("the evader has {} (round {})", verb, state.round));

    state.active = Role::Searchers;
    state.reset_actions();
    announce_turn(state, batch);
}

fn mark_acted(state: &mut GameState, batch: &mut Batch, unit: usize) {
    state.acted[unit] = true;
    if state.acted_count() == SEARCHER_COUNT {
        end_searchers_turn(state, batch);
    }
}

/// Closes a Searchers turn (setup or play). The round advances only once
/// the evader has acted in it.
fn end_searchers_turn(state: &mut GameState, batch: &mut Batch) {
    state.reset_actions();
    if state.evader.is_some() {
        state.round += 1;
        debug!(round = state.round, "round advanced");
        if state.round > state.config.round_limit {
            finish(state, batch, EndReason::RoundLimitExceeded);
            return;
        }
        batch.log(LogCategory::Info, format!("--- round {} ---", state.round));
    }
    state.active = Role::Evader;
    if is_encircled(state) {
        finish(state, batch, EndReason::EvaderEncircled);
        return;
    }
    announce_turn(state, batch);
}

fn finish(state: &mut GameState, batch: &mut Batch, reason: EndReason) {
    let outcome = Outcome::from(reason);
    info!(winner = %outcome.winner, %reason, round = state.round, "game over");
    state.outcome = Some(outcome);
    batch.ended = Some(outcome);
    batch.log(LogCategory::Success, format!("game over: {} win, {}", outcome.winner, reason));
}

fn announce_turn(state: &GameState, batch: &mut Batch) {
    match (state.active, state.phase) {
        (Role::Evader, _) => batch.log(LogCategory::Evader, "the evader's turn"),
        (Role::Searchers, Phase::Setup) => {
            batch.log(LogCategory::Searchers, "searchers: place your units on intersections")
        }
        (Role::Searchers, Phase::Play) => batch.log(LogCategory::Searchers, "the searchers' turn"),
    }
}
