//! Roles and searcher units.
//!
//! The evader is a single piece; the searchers are a team of three units
//! identified by their index 0..2.

use serde::{Deserialize, Serialize};

/// Number of searcher units on the searcher team.
pub const SEARCHER_COUNT: usize = 3;

/// One of the two sides of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Evader,
    Searchers,
}

impl Role {
    pub const fn name(self) -> &'static str {
        match self {
            Role::Evader => "evader",
            Role::Searchers => "searchers",
        }
    }

    /// Parses a role from its lowercase name.
    pub fn from_name(s: &str) -> Option<Role> {
        match s {
            "evader" => Some(Role::Evader),
            "searchers" => Some(Role::Searchers),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 1-based label used in log messages ("unit 1" is index 0).
pub fn unit_label(unit: usize) -> usize {
    unit + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_name_roundtrip() {
        for r in [Role::Evader, Role::Searchers] {
            assert_eq!(Role::from_name(r.name()), Some(r));
        }
        assert_eq!(Role::from_name("police"), None);
    }
}
