//! module: goal
//!
//! The single win condition: reach the boss room carrying every required item.

use roam_data::{BossDef, RefusalDef};

use crate::item::ItemHolder;
use crate::player::Player;
use crate::world::{RoomId, World, WorldError};

pub const DEFAULT_VICTORY_MESSAGE: &str = "You have everything you need. The way is clear, and the victory is yours!";
pub const DEFAULT_REFUSAL_MESSAGE: &str = "You are not ready to face what waits here. You are driven back.";

/// Where an unprepared player ends up after being refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ejection {
    Start,
    Previous,
    Room(RoomId),
}

/// Result of checking the player against the win condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalCheck {
    /// The player is somewhere other than the boss room.
    NotApplicable,
    Victory { message: String },
    Refused { message: String, eject_to: RoomId },
}

#[derive(Debug, Clone)]
pub struct WinCondition {
    pub room: RoomId,
    pub required_items: Vec<String>,
    pub ejection: Ejection,
    pub start: RoomId,
    pub victory_message: String,
    pub refusal_message: String,
}

impl WinCondition {
    /// Resolve a boss definition against the built world.
    ///
    /// # Errors
    /// - `NotFound` if the boss room or a fixed ejection room does not exist
    pub fn from_def(def: &BossDef, world: &World, start: RoomId) -> Result<Self, WorldError> {
        let ejection = match &def.on_refusal {
            RefusalDef::Start => Ejection::Start,
            RefusalDef::Previous => Ejection::Previous,
            RefusalDef::Room(name) => Ejection::Room(world.find_room(name)?),
        };
        Ok(Self {
            room: world.find_room(&def.room)?,
            required_items: def.required_items.clone(),
            ejection,
            start,
            victory_message: def
                .victory_message
                .clone()
                .unwrap_or_else(|| DEFAULT_VICTORY_MESSAGE.to_string()),
            refusal_message: def
                .refusal_message
                .clone()
                .unwrap_or_else(|| DEFAULT_REFUSAL_MESSAGE.to_string()),
        })
    }

    /// Required items the player is not carrying.
    pub fn missing_items(&self, player: &Player) -> Vec<&str> {
        self.required_items
            .iter()
            .map(String::as_str)
            .filter(|item| !player.contains_item(item))
            .collect()
    }

    /// Check the player's current position and inventory.
    pub fn check(&self, player: &Player) -> GoalCheck {
        if player.location != self.room {
            return GoalCheck::NotApplicable;
        }
        if player.has_all(&self.required_items) {
            return GoalCheck::Victory {
                message: self.victory_message.clone(),
            };
        }
        let eject_to = match self.ejection {
            Ejection::Start => self.start,
            // a player can only be in the boss room by moving there, so previous is set in play
            Ejection::Previous => player.previous.unwrap_or(self.start),
            Ejection::Room(room) => room,
        };
        GoalCheck::Refused {
            message: self.refusal_message.clone(),
            eject_to,
        }
    }
}
