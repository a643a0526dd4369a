//! The mansion: a hand-wired binary tree of rooms
//!
//! Rooms live in an arena owned by [`Mansion`] and point at their children by
//! [`RoomId`]. Linking enforces the tree shape: every room has at most one
//! parent, the root has none, and no link may close a cycle.

use super::Side;
use crate::GameError;
use serde::{Deserialize, Serialize};

/// Index of a room inside its [`Mansion`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub usize);

/// A single room of the mansion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    /// Clue hidden here. Empty once collected, or if the room never had one.
    pub clue: String,
    pub collected: bool,
    pub left: Option<RoomId>,
    pub right: Option<RoomId>,
    parent: Option<RoomId>,
}

impl Room {
    fn new(name: &str, clue: &str) -> Self {
        Self {
            name: name.to_string(),
            clue: clue.to_string(),
            collected: clue.is_empty(),
            left: None,
            right: None,
            parent: None,
        }
    }

    /// True when the room still holds a clue nobody has picked up
    pub fn has_pending_clue(&self) -> bool {
        !self.collected && !self.clue.is_empty()
    }

    /// Rooms without exits end the exploration
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn child(&self, side: Side) -> Option<RoomId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Take the clue out of the room, marking it collected.
    ///
    /// Returns `None` when there is nothing left to collect, so repeated
    /// visits never hand the same clue out twice.
    pub fn take_clue(&mut self) -> Option<String> {
        if !self.has_pending_clue() {
            return None;
        }
        self.collected = true;
        Some(std::mem::take(&mut self.clue))
    }
}

/// The whole mansion, rooted at its entrance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mansion {
    rooms: Vec<Room>,
    root: RoomId,
}

impl Mansion {
    /// Create a mansion whose entrance is the first room
    pub fn new(entrance: &str, clue: &str) -> Self {
        Self {
            rooms: vec![Room::new(entrance, clue)],
            root: RoomId(0),
        }
    }

    pub fn root(&self) -> RoomId {
        self.root
    }

    /// Add a detached room. An empty clue means the room has nothing to find.
    pub fn create_room(&mut self, name: &str, clue: &str) -> RoomId {
        self.rooms.push(Room::new(name, clue));
        RoomId(self.rooms.len() - 1)
    }

    pub fn link_left(&mut self, parent: RoomId, child: RoomId) -> Result<(), GameError> {
        self.link(parent, child, Side::Left)
    }

    pub fn link_right(&mut self, parent: RoomId, child: RoomId) -> Result<(), GameError> {
        self.link(parent, child, Side::Right)
    }

    /// Attach `child` under `parent` on the given side
    pub fn link(&mut self, parent: RoomId, child: RoomId, side: Side) -> Result<(), GameError> {
        let parent_room = self.get(parent)?;
        let child_room = self.get(child)?;

        if parent_room.child(side).is_some() {
            return Err(GameError::PassageTaken {
                parent: parent_room.name.clone(),
                side,
            });
        }
        if child_room.parent.is_some() {
            return Err(GameError::AlreadyLinked(child_room.name.clone()));
        }
        if child == self.root || self.is_ancestor(child, parent) {
            return Err(GameError::WouldCycle {
                parent: parent_room.name.clone(),
                child: child_room.name.clone(),
            });
        }

        let slot = &mut self.rooms[parent.0];
        match side {
            Side::Left => slot.left = Some(child),
            Side::Right => slot.right = Some(child),
        }
        self.rooms[child.0].parent = Some(parent);
        Ok(())
    }

    /// Whether `ancestor` lies on the path from `room` up to its topmost parent
    fn is_ancestor(&self, ancestor: RoomId, room: RoomId) -> bool {
        let mut cursor = Some(room);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.rooms[id.0].parent;
        }
        false
    }

    pub fn get(&self, id: RoomId) -> Result<&Room, GameError> {
        self.rooms.get(id.0).ok_or(GameError::UnknownRoom(id.0))
    }

    pub fn get_mut(&mut self, id: RoomId) -> Result<&mut Room, GameError> {
        self.rooms.get_mut(id.0).ok_or(GameError::UnknownRoom(id.0))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Rooms reachable from the entrance
    pub fn reachable(&self) -> Vec<RoomId> {
        let mut seen = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            seen.push(id);
            let room = &self.rooms[id.0];
            stack.extend(room.right);
            stack.extend(room.left);
        }
        seen
    }

    /// Clues still waiting to be found anywhere in the mansion
    pub fn pending_clues(&self) -> usize {
        self.reachable()
            .into_iter()
            .filter(|id| self.rooms[id.0].has_pending_clue())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hall_with_two_wings() -> (Mansion, RoomId, RoomId) {
        let mut mansion = Mansion::new("Hall", "");
        let study = mansion.create_room("Study", "X");
        let kitchen = mansion.create_room("Kitchen", "Y");
        mansion.link_left(mansion.root(), study).unwrap();
        mansion.link_right(mansion.root(), kitchen).unwrap();
        (mansion, study, kitchen)
    }

    #[test]
    fn test_empty_clue_is_already_collected() {
        let mansion = Mansion::new("Hall", "");
        let hall = mansion.get(mansion.root()).unwrap();
        assert!(hall.collected);
        assert!(!hall.has_pending_clue());
    }

    #[test]
    fn test_links_and_leaves() {
        let (mansion, study, kitchen) = hall_with_two_wings();
        let hall = mansion.get(mansion.root()).unwrap();
        assert_eq!(hall.child(Side::Left), Some(study));
        assert_eq!(hall.child(Side::Right), Some(kitchen));
        assert!(!hall.is_leaf());
        assert!(mansion.get(study).unwrap().is_leaf());
        assert_eq!(mansion.reachable().len(), 3);
        assert_eq!(mansion.pending_clues(), 2);
    }

    #[test]
    fn test_take_clue_only_once() {
        let (mut mansion, study, _) = hall_with_two_wings();
        let room = mansion.get_mut(study).unwrap();
        assert_eq!(room.take_clue(), Some("X".to_string()));
        assert!(room.collected);
        assert!(room.clue.is_empty());
        assert_eq!(room.take_clue(), None);
    }

    #[test]
    fn test_occupied_passage_rejected() {
        let (mut mansion, _, _) = hall_with_two_wings();
        let cellar = mansion.create_room("Cellar", "");
        let err = mansion.link_left(mansion.root(), cellar).unwrap_err();
        assert!(matches!(err, GameError::PassageTaken { side: Side::Left, .. }));
    }

    #[test]
    fn test_second_parent_rejected() {
        let (mut mansion, study, kitchen) = hall_with_two_wings();
        let err = mansion.link_left(kitchen, study).unwrap_err();
        assert_eq!(err, GameError::AlreadyLinked("Study".to_string()));
    }

    #[test]
    fn test_cycles_rejected() {
        let (mut mansion, study, _) = hall_with_two_wings();
        let err = mansion.link_left(study, mansion.root()).unwrap_err();
        assert!(matches!(err, GameError::WouldCycle { .. }));

        let attic = mansion.create_room("Attic", "");
        let loft = mansion.create_room("Loft", "");
        mansion.link_left(attic, loft).unwrap();
        assert!(matches!(
            mansion.link_right(loft, attic),
            Err(GameError::WouldCycle { .. })
        ));

        let lone = mansion.create_room("Closet", "");
        assert!(matches!(
            mansion.link_right(lone, lone),
            Err(GameError::WouldCycle { .. })
        ));
    }

    #[test]
    fn test_unknown_room() {
        let mut mansion = Mansion::new("Hall", "");
        assert_eq!(
            mansion.link_left(RoomId(0), RoomId(7)),
            Err(GameError::UnknownRoom(7))
        );
    }
}
