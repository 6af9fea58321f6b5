//! Dragnet rules engine library.
//!
//! Exposes the board representation, rules, move generation, evader
//! policy, turn engine and host protocol for use by integration tests and
//! the binary entry point.

pub mod board;
pub mod config;
pub mod engine;
pub mod event;
pub mod movegen;
pub mod policy;
pub mod protocol;
pub mod rules;
