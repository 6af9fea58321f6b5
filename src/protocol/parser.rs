//! Host command parser.
//!
//! Parses incoming command lines into structured `Command` variants that
//! the host main loop dispatches to the engine.

use tracing::warn;

use crate::board::Coord;

use super::notation::parse_coord;

/// A parsed host command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set an option for the next game: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Start a game, from an inline JSON config or the stored options.
    NewGame { config: Option<String> },

    /// Place a searcher unit: `placesearcher [<unit>] <x,y>`.
    PlaceSearcher { unit: Option<usize>, pos: Coord },

    PlaceEvader { pos: Coord },

    MoveEvader { pos: Coord },

    /// Focus a searcher unit: `select <unit>`.
    Select { unit: usize },

    MoveSearcher { pos: Coord },

    SearchBuilding { pos: Coord },

    /// The selected unit forgoes its action.
    Hold,

    /// Run the computer evader for the current turn.
    Go,

    /// Print the current state snapshot.
    State,

    /// Abandon the game.
    Reset,

    /// Terminate the host process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "hold" => Some(Command::Hold),
        "go" => Some(Command::Go),
        "state" => Some(Command::State),
        "reset" => Some(Command::Reset),
        "quit" => Some(Command::Quit),

        "setoption" => parse_setoption(&tokens),
        "newgame" => parse_newgame(trimmed),
        "placesearcher" => parse_placesearcher(&tokens),
        "placeevader" => single_coord(&tokens).map(|pos| Command::PlaceEvader { pos }),
        "moveevader" => single_coord(&tokens).map(|pos| Command::MoveEvader { pos }),
        "movesearcher" => single_coord(&tokens).map(|pos| Command::MoveSearcher { pos }),
        "searchbuilding" => single_coord(&tokens).map(|pos| Command::SearchBuilding { pos }),
        "select" => parse_select(&tokens),

        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");
    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                warn!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `newgame [<json>]`. The JSON may contain spaces, so it is taken
/// verbatim from the rest of the line.
fn parse_newgame(line: &str) -> Option<Command> {
    let rest = line.strip_prefix("newgame").unwrap_or("").trim();
    let config = if rest.is_empty() { None } else { Some(rest.to_string()) };
    Some(Command::NewGame { config })
}

/// Parses `placesearcher [<unit>] <x,y>`.
fn parse_placesearcher(tokens: &[&str]) -> Option<Command> {
    match tokens.len() {
        2 => coord_arg(tokens[1]).map(|pos| Command::PlaceSearcher { unit: None, pos }),
        3 => {
            let unit = unit_arg(tokens[1])?;
            let pos = coord_arg(tokens[2])?;
            Some(Command::PlaceSearcher {
                unit: Some(unit),
                pos,
            })
        }
        _ => {
            warn!("malformed placesearcher: expected 'placesearcher [<unit>] <x,y>'");
            None
        }
    }
}

/// Parses `select <unit>`.
fn parse_select(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        warn!("malformed select: expected 'select <unit>'");
        return None;
    }
    unit_arg(tokens[1]).map(|unit| Command::Select { unit })
}

fn single_coord(tokens: &[&str]) -> Option<Coord> {
    if tokens.len() != 2 {
        warn!(command = tokens[0], "expected a single 'x,y' argument");
        return None;
    }
    coord_arg(tokens[1])
}

fn coord_arg(s: &str) -> Option<Coord> {
    match parse_coord(s) {
        Ok(c) => Some(c),
        Err(e) => {
            warn!(%e, "bad coordinate");
            None
        }
    }
}

fn unit_arg(s: &str) -> Option<usize> {
    match s.parse::<usize>() {
        Ok(u) => Some(u),
        Err(_) => {
            warn!(unit = s, "invalid unit index");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("hold"), Some(Command::Hold));
        assert_eq!(parse_command("go"), Some(Command::Go));
        assert_eq!(parse_command("  state  "), Some(Command::State));
        assert_eq!(parse_command("reset"), Some(Command::Reset));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn parse_empty_and_unknown() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("fly 1,1"), None);
    }

    #[test]
    fn parse_setoption_with_value() {
        assert_eq!(
            parse_command("setoption name FirstMover value evader"),
            Some(Command::SetOption {
                name: "FirstMover".to_string(),
                value: Some("evader".to_string()),
            })
        );
        assert_eq!(
            parse_command("setoption name Seed"),
            Some(Command::SetOption {
                name: "Seed".to_string(),
                value: None,
            })
        );
        assert_eq!(parse_command("setoption FirstMover"), None);
    }

    #[test]
    fn parse_newgame_keeps_json_verbatim() {
        assert_eq!(parse_command("newgame"), Some(Command::NewGame { config: None }));
        assert_eq!(
            parse_command(r#"newgame {"first_mover": "evader"}"#),
            Some(Command::NewGame {
                config: Some(r#"{"first_mover": "evader"}"#.to_string()),
            })
        );
    }

    #[test]
    fn parse_placements() {
        assert_eq!(
            parse_command("placesearcher 1,1"),
            Some(Command::PlaceSearcher {
                unit: None,
                pos: Coord::new(1, 1),
            })
        );
        assert_eq!(
            parse_command("placesearcher 2 7,1"),
            Some(Command::PlaceSearcher {
                unit: Some(2),
                pos: Coord::new(7, 1),
            })
        );
        assert_eq!(parse_command("placesearcher x 7,1"), None);
        assert_eq!(
            parse_command("placeevader 0,0"),
            Some(Command::PlaceEvader {
                pos: Coord::new(0, 0),
            })
        );
    }

    #[test]
    fn parse_searcher_commands() {
        assert_eq!(parse_command("select 2"), Some(Command::Select { unit: 2 }));
        assert_eq!(parse_command("select"), None);
        assert_eq!(
            parse_command("movesearcher 1,3"),
            Some(Command::MoveSearcher {
                pos: Coord::new(1, 3),
            })
        );
        assert_eq!(
            parse_command("searchbuilding 2,2"),
            Some(Command::SearchBuilding {
                pos: Coord::new(2, 2),
            })
        );
        assert_eq!(parse_command("searchbuilding 2;2"), None);
        assert_eq!(parse_command("moveevader"), None);
    }
}
