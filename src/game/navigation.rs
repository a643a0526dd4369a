//! Navigation engine
//!
//! Walks the mansion one room at a time. Entering a room collects its clue
//! into the ledger; leaves end the walk on their own, otherwise the engine
//! waits for a choice of passage or a request to leave.

use crate::data::*;
use crate::GameError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A player decision at a junction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    Go(Side),
    Quit,
}

impl Choice {
    /// Parse one line of input: `e` left, `d` right, `s` leave, any case.
    ///
    /// Anything other than a single recognised character is rejected.
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match c.to_ascii_lowercase() {
            'e' => Some(Choice::Go(Side::Left)),
            'd' => Some(Choice::Go(Side::Right)),
            's' => Some(Choice::Quit),
            _ => None,
        }
    }
}

/// Why the exploration stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Exit {
    /// Reached a room with no way forward
    DeadEnd,
    /// The player chose to leave
    Quit,
    /// Input ran out
    EndOfInput,
}

impl std::fmt::Display for Exit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exit::DeadEnd => write!(f, "dead end"),
            Exit::Quit => write!(f, "left the mansion"),
            Exit::EndOfInput => write!(f, "input closed"),
        }
    }
}

/// Passages available from a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Exits {
    pub left: bool,
    pub right: bool,
}

impl Exits {
    pub fn none(&self) -> bool {
        !self.left && !self.right
    }
}

/// What happened on entering a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    pub room: RoomId,
    pub name: String,
    /// Clue picked up here, with whether the ledger took it
    pub clue: Option<(String, Insertion)>,
    pub exits: Exits,
}

/// Result of acting on a choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Moved(RoomId),
    /// Asked for a passage the room does not have
    NoPassage(Side),
    /// Input was not a valid choice
    Rejected(String),
    Finished(Exit),
}

/// Cursor through the mansion
#[derive(Debug, Clone)]
pub struct Explorer {
    current: RoomId,
    path: Vec<RoomId>,
    exit: Option<Exit>,
}

impl Explorer {
    pub fn new(mansion: &Mansion) -> Self {
        Self {
            current: mansion.root(),
            path: Vec::new(),
            exit: None,
        }
    }

    pub fn current(&self) -> RoomId {
        self.current
    }

    /// Rooms entered so far, in order
    pub fn path(&self) -> &[RoomId] {
        &self.path
    }

    pub fn exit(&self) -> Option<Exit> {
        self.exit
    }

    pub fn is_finished(&self) -> bool {
        self.exit.is_some()
    }

    /// Enter the current room, collecting its clue if one is still there
    pub fn arrive(
        &mut self,
        mansion: &mut Mansion,
        ledger: &mut ClueLedger,
    ) -> Result<Arrival, GameError> {
        let room = mansion.get_mut(self.current)?;
        debug!(room = %room.name, "entered room");
        if self.path.last() != Some(&self.current) {
            self.path.push(self.current);
        }

        let clue = room.take_clue().map(|clue| {
            let outcome = ledger.insert(&clue);
            (clue, outcome)
        });
        let exits = Exits {
            left: room.left.is_some(),
            right: room.right.is_some(),
        };
        if exits.none() {
            self.exit = Some(Exit::DeadEnd);
        }

        Ok(Arrival {
            room: self.current,
            name: room.name.clone(),
            clue,
            exits,
        })
    }

    /// Act on a parsed choice
    pub fn choose(&mut self, mansion: &Mansion, choice: Choice) -> Result<Step, GameError> {
        if let Some(exit) = self.exit {
            return Ok(Step::Finished(exit));
        }
        match choice {
            Choice::Quit => {
                self.exit = Some(Exit::Quit);
                Ok(Step::Finished(Exit::Quit))
            }
            Choice::Go(side) => match mansion.get(self.current)?.child(side) {
                Some(next) => {
                    self.current = next;
                    Ok(Step::Moved(next))
                }
                None => {
                    debug!(%side, "no passage that way");
                    Ok(Step::NoPassage(side))
                }
            },
        }
    }

    /// Act on a raw line of input
    pub fn submit(&mut self, mansion: &Mansion, input: &str) -> Result<Step, GameError> {
        match Choice::parse(input) {
            Some(choice) => self.choose(mansion, choice),
            None => {
                debug!(input, "rejected input");
                Ok(Step::Rejected(input.trim().to_string()))
            }
        }
    }

    /// Input is gone; treat it as leaving
    pub fn end_of_input(&mut self) -> Exit {
        *self.exit.get_or_insert(Exit::EndOfInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_mansion() -> Mansion {
        let mut mansion = Mansion::new("Hall", "");
        let study = mansion.create_room("Study", "X");
        let kitchen = mansion.create_room("Kitchen", "Y");
        mansion.link_left(mansion.root(), study).unwrap();
        mansion.link_right(mansion.root(), kitchen).unwrap();
        mansion
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!(Choice::parse("e"), Some(Choice::Go(Side::Left)));
        assert_eq!(Choice::parse("E\n"), Some(Choice::Go(Side::Left)));
        assert_eq!(Choice::parse(" D "), Some(Choice::Go(Side::Right)));
        assert_eq!(Choice::parse("S"), Some(Choice::Quit));
        assert_eq!(Choice::parse(""), None);
        assert_eq!(Choice::parse("ed"), None);
        assert_eq!(Choice::parse("left"), None);
        assert_eq!(Choice::parse("x"), None);
    }

    #[test]
    fn test_root_offers_both_passages() {
        let mut mansion = small_mansion();
        let mut ledger = ClueLedger::new();
        let mut explorer = Explorer::new(&mansion);

        let arrival = explorer.arrive(&mut mansion, &mut ledger).unwrap();
        assert_eq!(arrival.name, "Hall");
        assert_eq!(arrival.clue, None);
        assert_eq!(arrival.exits, Exits { left: true, right: true });
        assert!(!explorer.is_finished());
    }

    #[test]
    fn test_leaf_finishes_without_input() {
        let mut mansion = small_mansion();
        let mut ledger = ClueLedger::new();
        let mut explorer = Explorer::new(&mansion);

        explorer.arrive(&mut mansion, &mut ledger).unwrap();
        assert!(matches!(
            explorer.choose(&mansion, Choice::Go(Side::Left)).unwrap(),
            Step::Moved(_)
        ));
        let arrival = explorer.arrive(&mut mansion, &mut ledger).unwrap();
        assert_eq!(arrival.clue, Some(("X".to_string(), Insertion::Added)));
        assert!(arrival.exits.none());
        assert_eq!(explorer.exit(), Some(Exit::DeadEnd));
        assert_eq!(
            explorer.choose(&mansion, Choice::Go(Side::Left)).unwrap(),
            Step::Finished(Exit::DeadEnd)
        );
    }

    #[test]
    fn test_missing_passage_keeps_position() {
        let mut mansion = Mansion::new("Hall", "H");
        let study = mansion.create_room("Study", "");
        mansion.link_left(mansion.root(), study).unwrap();
        let mut ledger = ClueLedger::new();
        let mut explorer = Explorer::new(&mansion);

        explorer.arrive(&mut mansion, &mut ledger).unwrap();
        assert_eq!(
            explorer.choose(&mansion, Choice::Go(Side::Right)).unwrap(),
            Step::NoPassage(Side::Right)
        );
        assert_eq!(explorer.current(), mansion.root());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_rearrival_does_not_recollect() {
        let mut mansion = Mansion::new("Hall", "H");
        let study = mansion.create_room("Study", "");
        mansion.link_left(mansion.root(), study).unwrap();
        let mut ledger = ClueLedger::new();
        let mut explorer = Explorer::new(&mansion);

        let first = explorer.arrive(&mut mansion, &mut ledger).unwrap();
        let second = explorer.arrive(&mut mansion, &mut ledger).unwrap();
        assert!(first.clue.is_some());
        assert_eq!(second.clue, None);
        assert_eq!(ledger.len(), 1);
        assert_eq!(explorer.path().len(), 1);
    }

    #[test]
    fn test_submit_rejects_garbage() {
        let mut mansion = small_mansion();
        let mut ledger = ClueLedger::new();
        let mut explorer = Explorer::new(&mansion);
        explorer.arrive(&mut mansion, &mut ledger).unwrap();

        assert_eq!(
            explorer.submit(&mansion, "north\n").unwrap(),
            Step::Rejected("north".to_string())
        );
        assert_eq!(explorer.submit(&mansion, "s").unwrap(), Step::Finished(Exit::Quit));
        assert_eq!(explorer.end_of_input(), Exit::Quit);
    }
}
