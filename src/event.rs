//! Outbound engine events.
//!
//! After each command the engine queues a batch of events for the
//! presentation layer: an optional `GameEnded`, human-readable log lines,
//! and a full state snapshot.

use serde::Serialize;

use crate::board::{EndReason, GameState, Role};

/// Category of a log line, used by presentations for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    Info,
    Success,
    Error,
    Evader,
    Searchers,
}

/// A single engine-to-presentation event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    StateChanged { snapshot: Box<GameState> },
    Log {
        message: String,
        category: LogCategory,
    },
    GameEnded { winner: Role, reason: EndReason },
}

impl Event {
    pub fn log(category: LogCategory, message: impl Into<String>) -> Self {
        Event::Log {
            message: message.into(),
            category,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Event::Log {
                category: LogCategory::Error,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_tag() {
        let event = Event::GameEnded {
            winner: Role::Searchers,
            reason: EndReason::EvaderFound,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"game_ended","winner":"searchers","reason":"evader_found"}"#);

        let log = Event::log(LogCategory::Error, "nope");
        assert!(log.is_error());
        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(json, r#"{"event":"log","message":"nope","category":"error"}"#);
    }
}
