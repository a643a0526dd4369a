//! Detective Quest: The Mysterious Mansion
//!
//! A text adventure where you walk the rooms of a mansion, pick up the clues
//! left behind, and finally name the culprit. The accusation holds only when
//! enough of your clues point at the same suspect.
//!
//! # Game Mechanics
//!
//! - **Exploration**: Move left or right through a fixed tree of rooms
//! - **Clues**: Each room may hide one clue, collected the first time you enter
//! - **Suspects**: Every clue is tied to a suspect through the suspect index
//! - **Verdict**: Two matching clues are needed to make an accusation stick
//!
//! # Architecture
//!
//! - `data` - The mansion tree, the clue ledger (BST) and the suspect index (hash table)
//! - `game` - Navigation engine, verdict engine, case state and the bundled scenario
//! - `console` - Line-oriented terminal front end

pub mod console;
pub mod data;
pub mod game;

pub use data::*;
pub use game::{Case, GameConfig};

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown room id: {0}")]
    UnknownRoom(usize),

    #[error("Room '{parent}' already has a {side} passage")]
    PassageTaken { parent: String, side: Side },

    #[error("Room '{0}' is already reachable from another room")]
    AlreadyLinked(String),

    #[error("Linking '{child}' under '{parent}' would break the mansion tree")]
    WouldCycle { parent: String, child: String },

    #[error("Suspect index needs at least one bucket")]
    ZeroCapacity,
}
