//! The clue ledger
//!
//! An unbalanced binary search tree of collected clues, ordered
//! case-insensitively. Each node exclusively owns its children.

use super::{cmp_ignore_case, eq_ignore_case, SuspectLookup};
use std::cmp::Ordering;
use tracing::debug;

/// A collected clue and its two subtrees
#[derive(Debug)]
pub struct ClueNode {
    pub clue: String,
    pub left: Option<Box<ClueNode>>,
    pub right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn new(clue: &str) -> Box<Self> {
        Box::new(Self {
            clue: clue.to_string(),
            left: None,
            right: None,
        })
    }
}

/// Outcome of adding a clue to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Added,
    /// Already present under some casing; the ledger was left untouched
    Duplicate,
}

/// Ordered set of collected clues
#[derive(Debug, Default)]
pub struct ClueLedger {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&ClueNode> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Add a clue, rejecting case-insensitive duplicates
    pub fn insert(&mut self, clue: &str) -> Insertion {
        let outcome = insert_at(&mut self.root, clue);
        match outcome {
            Insertion::Added => {
                self.len += 1;
                debug!(clue, size = self.len, "clue added to ledger");
            }
            Insertion::Duplicate => debug!(clue, "duplicate clue ignored"),
        }
        outcome
    }

    pub fn contains(&self, clue: &str) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match cmp_ignore_case(clue, &node.clue) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Clues in ascending case-insensitive order
    pub fn inorder(&self) -> Inorder<'_> {
        let mut iter = Inorder { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }

    /// Number of clues whose suspect matches `suspect`, ignoring case.
    ///
    /// Clues the index does not know contribute nothing.
    pub fn count_matching<L: SuspectLookup + ?Sized>(&self, suspect: &str, index: &L) -> usize {
        count_at(self.root.as_deref(), suspect, index)
    }

    /// Free every node, children before parents, without recursing
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<ClueNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl Drop for ClueLedger {
    fn drop(&mut self) {
        self.clear();
    }
}

fn insert_at(slot: &mut Option<Box<ClueNode>>, clue: &str) -> Insertion {
    match slot {
        None => {
            *slot = Some(ClueNode::new(clue));
            Insertion::Added
        }
        Some(node) => match cmp_ignore_case(clue, &node.clue) {
            Ordering::Less => insert_at(&mut node.left, clue),
            Ordering::Greater => insert_at(&mut node.right, clue),
            Ordering::Equal => Insertion::Duplicate,
        },
    }
}

fn count_at<L: SuspectLookup + ?Sized>(node: Option<&ClueNode>, suspect: &str, index: &L) -> usize {
    let Some(node) = node else {
        return 0;
    };
    let here = match index.lookup(&node.clue) {
        Some(found) if eq_ignore_case(found, suspect) => 1,
        _ => 0,
    };
    count_at(node.left.as_deref(), suspect, index)
        + here
        + count_at(node.right.as_deref(), suspect, index)
}

/// Lazy in-order walk over the ledger
pub struct Inorder<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> Inorder<'a> {
    fn push_left(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Inorder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(node.clue.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SuspectIndex;

    fn ledger_of(clues: &[&str]) -> ClueLedger {
        let mut ledger = ClueLedger::new();
        for clue in clues {
            ledger.insert(clue);
        }
        ledger
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = ClueLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert_eq!(ledger.inorder().next(), None);
    }

    #[test]
    fn test_case_variant_is_duplicate() {
        let mut ledger = ClueLedger::new();
        assert_eq!(ledger.insert("Alpha"), Insertion::Added);
        assert_eq!(ledger.insert("alpha"), Insertion::Duplicate);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.inorder().collect::<Vec<_>>(), vec!["Alpha"]);
    }

    #[test]
    fn test_inorder_is_sorted_ignoring_case() {
        let ledger = ledger_of(&["pearl", "Candle", "ash", "Mud", "broken vase"]);
        let clues: Vec<_> = ledger.inorder().collect();
        assert_eq!(clues, vec!["ash", "broken vase", "Candle", "Mud", "pearl"]);
    }

    #[test]
    fn test_tree_shape_follows_order() {
        let ledger = ledger_of(&["m", "c", "x"]);
        let root = ledger.root().unwrap();
        assert_eq!(root.clue, "m");
        assert_eq!(root.left.as_ref().unwrap().clue, "c");
        assert_eq!(root.right.as_ref().unwrap().clue, "x");
    }

    #[test]
    fn test_contains() {
        let ledger = ledger_of(&["Torn glove", "Ash"]);
        assert!(ledger.contains("torn GLOVE"));
        assert!(!ledger.contains("glove"));
    }

    #[test]
    fn test_count_matching() {
        let mut index = SuspectIndex::new(5).unwrap();
        index.insert("Torn glove", "Gardener");
        index.insert("Ash", "Butler");
        index.insert("Muddy boots", "gardener");

        let ledger = ledger_of(&["Torn glove", "Ash", "Muddy boots", "Unknown"]);
        assert_eq!(ledger.count_matching("GARDENER", &index), 2);
        assert_eq!(ledger.count_matching("Butler", &index), 1);
        assert_eq!(ledger.count_matching("Cook", &index), 0);
    }

    #[test]
    fn test_clear_handles_degenerate_tree() {
        let mut ledger = ClueLedger::new();
        for i in 0..2_000 {
            ledger.insert(&format!("{i:06}"));
        }
        assert_eq!(ledger.len(), 2_000);
        assert!(ledger.inorder().zip(ledger.inorder().skip(1)).all(|(a, b)| a < b));
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
    }
}
