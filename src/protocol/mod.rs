//! Host protocol handling.
//!
//! Line-oriented commands in, JSON events out. This module holds the
//! command parser and the coordinate notation; the loop lives in the
//! binary.

pub mod notation;
pub mod parser;

pub use notation::{parse_coord, NotationError};
pub use parser::{parse_command, Command};
