//! Player -- where the player is and what they carry.
use crate::item::{ItemHolder, remove_first};
use crate::world::{RoomId, WorldError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub location: RoomId,
    /// The room the player was in before their last move.
    pub previous: Option<RoomId>,
    /// Items in pick-up order.
    pub inventory: Vec<String>,
}

impl Player {
    pub fn new(start: RoomId) -> Self {
        Self {
            location: start,
            previous: None,
            inventory: Vec::new(),
        }
    }

    /// Move to `destination`, remembering where we came from.
    pub fn move_to(&mut self, destination: RoomId) {
        self.previous = Some(self.location);
        self.location = destination;
    }

    /// True if every item in `required` is carried. Order is irrelevant.
    pub fn has_all<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required.iter().all(|item| self.contains_item(item.as_ref()))
    }

    /// Take one `item` out of the inventory.
    ///
    /// # Errors
    /// - `NotCarried` if the player does not have it
    pub fn take_item(&mut self, item: &str) -> Result<String, WorldError> {
        self.remove_item(item)
            .ok_or_else(|| WorldError::NotCarried(item.to_string()))
    }
}

impl ItemHolder for Player {
    fn items(&self) -> &[String] {
        &self.inventory
    }

    fn add_item(&mut self, item: String) {
        self.inventory.push(item);
    }

    fn remove_item(&mut self, item: &str) -> Option<String> {
        remove_first(&mut self.inventory, item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Room, World};

    fn ids() -> (RoomId, RoomId) {
        let mut world = World::new();
        (world.add_room(Room::new("A", "a")), world.add_room(Room::new("B", "b")))
    }

    #[test]
    fn move_to_records_previous_room() {
        let (a, b) = ids();
        let mut player = Player::new(a);
        assert_eq!(player.previous, None);
        player.move_to(b);
        assert_eq!(player.location, b);
        assert_eq!(player.previous, Some(a));
    }

    #[test]
    fn has_all_is_a_subset_test() {
        let (a, _) = ids();
        let mut player = Player::new(a);
        player.add_item("crown".into());
        player.add_item("lamp".into());
        player.add_item("sceptre".into());
        assert!(player.has_all(&["sceptre", "crown"]));
        assert!(!player.has_all(&["crown", "orb"]));
        assert!(player.has_all::<&str>(&[]));
    }

    #[test]
    fn take_item_missing_is_an_error() {
        let (a, _) = ids();
        let mut player = Player::new(a);
        assert_eq!(player.take_item("sword"), Err(WorldError::NotCarried("sword".into())));
        player.add_item("sword".into());
        assert_eq!(player.take_item("sword"), Ok("sword".into()));
        assert!(player.inventory.is_empty());
    }
}
