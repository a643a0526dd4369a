//! Verdict engine
//!
//! Weighs the collected clues against an accusation.

use crate::data::{ClueLedger, SuspectLookup};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Matching clues needed for an accusation to stand. A fixed game rule.
pub const EVIDENCE_THRESHOLD: usize = 2;

/// Shortest accusation worth considering
pub const MIN_ACCUSATION_LEN: usize = 2;

/// The outcome of an accusation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// No clues were collected, so nobody can be accused
    Impossible,
    /// The accusation was too short to name anyone
    Invalid,
    /// Enough clues point at the accused
    Sustained { suspect: String, count: usize },
    Insufficient { suspect: String, count: usize },
}

impl Verdict {
    pub fn is_sustained(&self) -> bool {
        matches!(self, Verdict::Sustained { .. })
    }

    /// Matching clues counted, if a count was made
    pub fn count(&self) -> Option<usize> {
        match self {
            Verdict::Sustained { count, .. } | Verdict::Insufficient { count, .. } => Some(*count),
            Verdict::Impossible | Verdict::Invalid => None,
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Verdict::Impossible => "No clues collected: an accusation is impossible",
            Verdict::Invalid => "Invalid accusation",
            Verdict::Sustained { .. } => "Accusation sustained",
            Verdict::Insufficient { .. } => "Insufficient evidence",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Sustained { suspect, count } | Verdict::Insufficient { suspect, count } => {
                write!(
                    f,
                    "{}: {} clue(s) point to {} (need {})",
                    self.headline(),
                    count,
                    suspect,
                    EVIDENCE_THRESHOLD
                )
            }
            _ => write!(f, "{}", self.headline()),
        }
    }
}

/// Judge an accusation against the ledger.
///
/// An empty ledger short-circuits before the index is touched, and so does an
/// accusation shorter than [`MIN_ACCUSATION_LEN`] once its line ending is gone.
/// Only the line ending is removed: the rest of the line is the name as typed.
pub fn render_verdict<L: SuspectLookup + ?Sized>(
    ledger: &ClueLedger,
    index: &L,
    accused: &str,
) -> Verdict {
    if ledger.is_empty() {
        info!("accusation impossible, ledger is empty");
        return Verdict::Impossible;
    }

    let suspect = accused.trim_end_matches(['\r', '\n']);
    if suspect.chars().count() < MIN_ACCUSATION_LEN {
        info!(suspect, "accusation rejected as too short");
        return Verdict::Invalid;
    }

    let count = ledger.count_matching(suspect, index);
    info!(suspect, count, threshold = EVIDENCE_THRESHOLD, "verdict rendered");

    if count >= EVIDENCE_THRESHOLD {
        Verdict::Sustained {
            suspect: suspect.to_string(),
            count,
        }
    } else {
        Verdict::Insufficient {
            suspect: suspect.to_string(),
            count,
        }
    }
}
