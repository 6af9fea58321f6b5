//! Dragnet -- host for the hidden-car pursuit engine.
//!
//! Reads commands from stdin and writes engine events to stdout as one
//! JSON object per line. Diagnostics go to stderr via `tracing`
//! (`RUST_LOG=debug` for per-command detail).

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use dragnet::config::GameConfig;
use dragnet::engine::Engine;
use dragnet::event::{Event, LogCategory};
use dragnet::protocol::parser::{parse_command, Command};

/// Writes each event as a JSON line and flushes.
fn emit<W: Write>(out: &mut W, events: &[Event]) -> io::Result<()> {
    for event in events {
        serde_json::to_writer(&mut *out, event)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Pause before each computer evader move so a viewer sees the
/// intermediate state. Zero unless `RevealDelay` is set.
fn reveal_delay(options: &HashMap<String, String>) -> Duration {
    let ms = options
        .get("RevealDelay")
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);
    Duration::from_millis(ms)
}

/// Runs the host loop, dispatching parsed commands to the engine.
fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();
    let mut options: HashMap<String, String> = HashMap::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        let result = match cmd {
            Command::SetOption { name, value } => {
                options.insert(name, value.unwrap_or_default());
                Ok(())
            }
            Command::NewGame { config } => {
                let config = match config {
                    Some(json) => GameConfig::from_json(&json),
                    None => GameConfig::from_options(&options),
                };
                if let Err(e) = config.and_then(|c| engine.start_game(c)) {
                    warn!(%e, "cannot start game");
                    emit(&mut out, &[Event::log(LogCategory::Error, e.to_string())])?;
                }
                Ok(())
            }
            Command::PlaceSearcher { unit, pos } => engine.place_searcher(unit, pos),
            Command::PlaceEvader { pos } => engine.place_evader(pos),
            Command::MoveEvader { pos } => engine.move_evader(pos),
            Command::Select { unit } => engine.select_searcher(unit),
            Command::MoveSearcher { pos } => engine.move_searcher(pos),
            Command::SearchBuilding { pos } => engine.search_building(pos),
            Command::Hold => engine.hold_searcher(),
            Command::Go => engine.play_computer_evader(),
            Command::State => {
                if let Some(state) = engine.state() {
                    let snapshot = Event::StateChanged {
                        snapshot: Box::new(state.clone()),
                    };
                    emit(&mut out, &[snapshot])?;
                }
                Ok(())
            }
            Command::Reset => {
                engine.reset();
                Ok(())
            }
            Command::Quit => break,
        };
        if let Err(e) = result {
            debug!(code = e.code(), "command rejected");
        }
        emit(&mut out, &engine.drain_events())?;

        while engine.needs_computer_move() {
            let delay = reveal_delay(&options);
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
            let played = engine.play_computer_evader();
            emit(&mut out, &engine.drain_events())?;
            if played.is_err() {
                break;
            }
        }
    }

    Ok(())
}
