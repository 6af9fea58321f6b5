use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use dragnet::board::{Coord, GameState, Phase, Role, TrailEntry, TurnState};
use dragnet::config::{Controller, GameConfig};
use dragnet::engine::Engine;
use dragnet::movegen::{
    legal_evader_moves, legal_placements, legal_searcher_actions, random_searcher_action,
    SearcherAction,
};
use dragnet::policy::choose_move;
use dragnet::rules::{can_move_searcher, can_search};

fn mid_game_state() -> GameState {
    let mut s = GameState::new(GameConfig::default());
    s.phase = Phase::Play;
    s.active = Role::Searchers;
    s.round = 4;
    for c in [Coord::new(4, 4), Coord::new(4, 6), Coord::new(6, 6), Coord::new(6, 4)] {
        s.trail.push(TrailEntry {
            position: c,
            round: 1,
        });
    }
    s.evader = Some(Coord::new(6, 4));
    s.searchers = [
        Some(Coord::new(3, 3)),
        Some(Coord::new(5, 7)),
        Some(Coord::new(7, 1)),
    ];
    s
}

fn bench_legal_evader_moves(c: &mut Criterion) {
    let state = mid_game_state();
    c.bench_function("legal_evader_moves", |b| {
        b.iter(|| legal_evader_moves(black_box(&state)))
    });
}

fn bench_legal_searcher_actions(c: &mut Criterion) {
    let state = mid_game_state();
    c.bench_function("legal_searcher_actions_all_units", |b| {
        b.iter(|| {
            for unit in 0..3 {
                black_box(legal_searcher_actions(black_box(&state), unit));
            }
        })
    });
}

fn bench_validate(c: &mut Criterion) {
    let state = mid_game_state();
    c.bench_function("validate_move_and_search", |b| {
        b.iter(|| {
            black_box(can_move_searcher(black_box(&state), 0, Coord::new(3, 5)).is_ok());
            black_box(can_search(black_box(&state), 0, Coord::new(4, 4)).is_ok());
        })
    });
}

fn bench_policy(c: &mut Criterion) {
    let state = mid_game_state();
    let mut rng = SmallRng::seed_from_u64(7);
    c.bench_function("evader_policy_choose", |b| {
        b.iter(|| choose_move(black_box(&state), &mut rng))
    });
}

/// Plays one game to the end: computer evader against random searchers.
fn play_game(seed: u64) -> u32 {
    let mut engine = Engine::new();
    let config = GameConfig {
        evader_controller: Controller::Computer,
        seed: Some(seed),
        ..GameConfig::default()
    };
    if engine.start_game(config).is_err() {
        return 0;
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    loop {
        let s = match engine.state() {
            Some(s) => s.clone(),
            None => return 0,
        };
        let _ = match s.turn_state() {
            TurnState::GameOver(_) => return s.round,
            TurnState::EvaderTurn => engine.play_computer_evader(),
            TurnState::SettingUp => {
                let free = legal_placements(&s);
                engine.place_searcher(None, free[rng.gen_range(0..free.len())])
            }
            TurnState::SearchersTurn => {
                let unit = (0..3).find(|&u| !s.acted[u]).unwrap_or(0);
                let _ = engine.select_searcher(unit);
                match random_searcher_action(&s, unit, &mut rng) {
                    SearcherAction::Move(pos) => engine.move_searcher(pos),
                    SearcherAction::Search(pos) => engine.search_building(pos),
                    SearcherAction::Hold => engine.hold_searcher(),
                }
            }
        };
        engine.drain_events();
    }
}

fn bench_full_game(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("random_full_game", |b| {
        b.iter(|| {
            seed += 1;
            black_box(play_game(seed))
        })
    });
}

criterion_group!(
    benches,
    bench_legal_evader_moves,
    bench_legal_searcher_actions,
    bench_validate,
    bench_policy,
    bench_full_game,
);
criterion_main!(benches);
