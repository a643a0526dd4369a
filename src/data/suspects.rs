//! The suspect index
//!
//! A fixed-capacity chained hash table from clue text to suspect name. It is
//! filled once before play and only read afterwards.
//!
//! Buckets are picked with a case-sensitive polynomial hash, while matching
//! inside a chain ignores case. New entries go to the head of their chain and
//! lookups scan from the head, so the last insert wins for a given clue text.

use super::eq_ignore_case;
use crate::GameError;
use serde::{Deserialize, Serialize};

/// Bucket count used when none is configured
pub const DEFAULT_CAPACITY: usize = 10;

const HASH_MULTIPLIER: u64 = 31;

/// Anything that can name the suspect behind a clue
pub trait SuspectLookup {
    fn lookup(&self, clue: &str) -> Option<&str>;
}

/// One clue to suspect association
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectEntry {
    pub clue: String,
    pub suspect: String,
}

/// Hash table of clue to suspect associations
#[derive(Debug, Clone)]
pub struct SuspectIndex {
    /// Each chain is stored oldest first; its head is the last element.
    buckets: Vec<Vec<SuspectEntry>>,
    roster: Vec<String>,
    len: usize,
}

impl SuspectIndex {
    pub fn new(capacity: usize) -> Result<Self, GameError> {
        if capacity == 0 {
            return Err(GameError::ZeroCapacity);
        }
        Ok(Self {
            buckets: vec![Vec::new(); capacity],
            roster: Vec::new(),
            len: 0,
        })
    }

    /// Build an index from a static list of associations
    pub fn from_pairs<'a, I>(capacity: usize, pairs: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut index = Self::new(capacity)?;
        for (clue, suspect) in pairs {
            index.insert(clue, suspect);
        }
        Ok(index)
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bucket for a clue
    pub fn hash(&self, clue: &str) -> usize {
        let h = clue
            .bytes()
            .fold(0u64, |h, b| h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u64::from(b)));
        (h % self.buckets.len() as u64) as usize
    }

    /// Associate a clue with a suspect. Empty clues are ignored.
    pub fn insert(&mut self, clue: &str, suspect: &str) {
        if clue.is_empty() {
            return;
        }
        let bucket = self.hash(clue);
        self.buckets[bucket].push(SuspectEntry {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
        });
        self.len += 1;
        if !self.roster.iter().any(|name| eq_ignore_case(name, suspect)) {
            self.roster.push(suspect.to_string());
        }
    }

    /// Every stored association, bucket by bucket, each chain from its head
    pub fn entries(&self) -> impl Iterator<Item = &SuspectEntry> {
        self.buckets.iter().flat_map(|chain| chain.iter().rev())
    }

    /// Distinct suspect names, in the order they were first inserted
    pub fn suspects(&self) -> &[String] {
        &self.roster
    }
}

impl SuspectLookup for SuspectIndex {
    fn lookup(&self, clue: &str) -> Option<&str> {
        self.buckets[self.hash(clue)]
            .iter()
            .rev()
            .find(|entry| eq_ignore_case(&entry.clue, clue))
            .map(|entry| entry.suspect.as_str())
    }
}

impl Default for SuspectIndex {
    fn default() -> Self {
        Self {
            buckets: vec![Vec::new(); DEFAULT_CAPACITY],
            roster: Vec::new(),
            len: 0,
        }
    }
}
