//! Case journal
//!
//! Tracks where and when each clue was picked up during a case

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Duration, Utc};

/// A single discovery in the journal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseNote {
    pub timestamp: DateTime<Utc>,
    pub room: String,
    pub clue: String,
    /// False when the clue was already in the ledger under another casing
    pub is_new: bool,
}

/// The complete journal of a case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journal {
    pub notes: Vec<CaseNote>,
    pub opened_at: DateTime<Utc>,
}

impl Journal {
    pub fn new(opened_at: DateTime<Utc>) -> Self {
        Self {
            notes: Vec::new(),
            opened_at,
        }
    }

    /// Record a discovery, keeping notes in chronological order
    pub fn record(&mut self, note: CaseNote) {
        let pos = self
            .notes
            .iter()
            .position(|n| n.timestamp > note.timestamp)
            .unwrap_or(self.notes.len());
        self.notes.insert(pos, note);
    }

    /// Where a clue was found, ignoring case
    pub fn origin_of(&self, clue: &str) -> Option<&CaseNote> {
        self.notes
            .iter()
            .find(|n| super::eq_ignore_case(&n.clue, clue))
    }

    /// Time between opening the case and the latest discovery
    pub fn elapsed(&self) -> Duration {
        self.notes
            .last()
            .map(|n| n.timestamp - self.opened_at)
            .unwrap_or_else(Duration::zero)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}
