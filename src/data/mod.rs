//! Data structures for the game world
//!
//! Defines the mansion tree, the clue ledger, the suspect index and the case journal.

pub mod journal;
pub mod ledger;
pub mod room;
pub mod suspects;

pub use journal::*;
pub use ledger::*;
pub use room::*;
pub use suspects::*;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Severity levels for console messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Discovery,
    Warning,
    Critical,
}

impl Severity {
    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Discovery => "◆",
            Severity::Warning => "▲",
            Severity::Critical => "●",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Discovery => write!(f, "CLUE"),
            Severity::Warning => write!(f, "WARN"),
            Severity::Critical => write!(f, "VERDICT"),
        }
    }
}

/// Which passage out of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A unique identifier wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Case-insensitive total order over clue and suspect text.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Case-insensitive equality, consistent with [`cmp_ignore_case`].
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    cmp_ignore_case(a, b) == Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmp_ignore_case() {
        assert_eq!(cmp_ignore_case("Alpha", "alpha"), Ordering::Equal);
        assert_eq!(cmp_ignore_case("apple", "Banana"), Ordering::Less);
        assert_eq!(cmp_ignore_case("Zebra", "apple"), Ordering::Greater);
        assert_eq!(cmp_ignore_case("ab", "ABC"), Ordering::Less);
    }

    #[test]
    fn test_eq_ignore_case_non_ascii() {
        assert!(eq_ignore_case("Ébano", "ébano"));
        assert!(!eq_ignore_case("Ébano", "ebano"));
    }
}
