//! The world model.
//!
//! [`World`] owns every [`Room`] in a single collection. Everything else
//! (the player, exits, the win condition) refers to rooms through a
//! [`RoomId`] index or by name, never by holding a copy.

use std::collections::HashMap;

use log::info;
use thiserror::Error;

use crate::item::ItemHolder;
use crate::room::Room;

/// Index of a room inside its [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(usize);

impl RoomId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Inconsistencies between a lookup and the world's actual contents.
///
/// None of these should surface with a validated map; callers treat them as
/// recoverable no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("no room named '{0}'")]
    NotFound(String),
    #[error("room index {0} is out of range")]
    InvalidRoomId(usize),
    #[error("room '{room}' has no exit '{label}'")]
    NoExit { room: String, label: String },
    #[error("'{item}' is not in room '{room}'")]
    ItemAbsent { item: String, room: String },
    #[error("'{0}' is not in the inventory")]
    NotCarried(String),
}

/// Every room of the running game, addressable by index or by name.
#[derive(Debug, Clone, Default)]
pub struct World {
    rooms: Vec<Room>,
    index: HashMap<String, RoomId>,
}

impl World {
    /// Create a new world with no rooms.
    pub fn new() -> World {
        Self::default()
    }

    /// Add a room and return its id. Names are expected to be unique (the
    /// loader validates this); a repeated name shadows the earlier room.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.index.insert(room.name.clone(), id);
        self.rooms.push(room);
        id
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Look a room up by name.
    ///
    /// # Errors
    /// - `NotFound` if no room has that name
    pub fn find_room(&self, name: &str) -> Result<RoomId, WorldError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| WorldError::NotFound(name.to_string()))
    }

    /// # Errors
    /// - `InvalidRoomId` if the id did not come from this world
    pub fn room(&self, id: RoomId) -> Result<&Room, WorldError> {
        self.rooms.get(id.0).ok_or(WorldError::InvalidRoomId(id.0))
    }

    /// # Errors
    /// - `InvalidRoomId` if the id did not come from this world
    pub fn room_mut(&mut self, id: RoomId) -> Result<&mut Room, WorldError> {
        self.rooms.get_mut(id.0).ok_or(WorldError::InvalidRoomId(id.0))
    }

    /// Follow the exit `label` out of room `from`.
    ///
    /// # Errors
    /// - `NoExit` if the room has no such exit
    /// - `NotFound` if the exit leads to a room that does not exist
    pub fn exit_target(&self, from: RoomId, label: &str) -> Result<RoomId, WorldError> {
        let room = self.room(from)?;
        let target = room.exits.get(label).ok_or_else(|| WorldError::NoExit {
            room: room.name.clone(),
            label: label.to_string(),
        })?;
        self.find_room(target)
    }

    /// Take one `item` out of a room.
    ///
    /// # Errors
    /// - `ItemAbsent` if the room does not hold the item
    pub fn remove_item(&mut self, room_id: RoomId, item: &str) -> Result<String, WorldError> {
        let room = self.room_mut(room_id)?;
        room.remove_item(item).ok_or_else(|| WorldError::ItemAbsent {
            item: item.to_string(),
            room: room.name.clone(),
        })
    }

    /// Put `item` at the end of a room's item list.
    ///
    /// # Errors
    /// - `InvalidRoomId` if the room does not exist
    pub fn add_item(&mut self, room_id: RoomId, item: String) -> Result<(), WorldError> {
        let room = self.room_mut(room_id)?;
        info!("'{item}' placed in {}", room.name);
        room.add_item(item);
        Ok(())
    }
}
