use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Room names double as identifiers throughout a map document.
pub type Name = String;

/// Top-level map document loaded by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDef {
    pub start: Name,
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub boss: Option<BossDef>,
}

/// A single room record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDef {
    pub name: Name,
    pub desc: String,
    /// Direction label -> target room name.
    #[serde(default)]
    pub exits: BTreeMap<String, Name>,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Win condition: reach `room` while carrying every item in `required_items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossDef {
    pub room: Name,
    #[serde(default)]
    pub required_items: Vec<String>,
    #[serde(default)]
    pub on_refusal: RefusalDef,
    #[serde(default)]
    pub victory_message: Option<String>,
    #[serde(default)]
    pub refusal_message: Option<String>,
}

/// Where the player is sent when they enter the boss room unprepared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefusalDef {
    /// Back to the map's start room.
    #[default]
    Start,
    /// Back to the room the player just left.
    Previous,
    /// To a fixed, named room.
    Room(Name),
}

impl RoomDef {
    /// Convenience constructor for a room with no exits or items.
    pub fn new(name: impl Into<Name>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            exits: BTreeMap::new(),
            items: Vec::new(),
        }
    }

    /// Builder-style helper for adding an exit.
    #[must_use]
    pub fn with_exit(mut self, direction: impl Into<String>, to: impl Into<Name>) -> Self {
        self.exits.insert(direction.into(), to.into());
        self
    }

    /// Builder-style helper for adding an item.
    #[must_use]
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_room_fields_default_to_empty() {
        let room: RoomDef = serde_json::from_str(r#"{ "name": "Cell", "desc": "Damp." }"#).unwrap();
        assert!(room.exits.is_empty());
        assert!(room.items.is_empty());
    }

    #[test]
    fn missing_start_is_a_parse_error() {
        let result: Result<MapDef, _> = serde_json::from_str(r#"{ "rooms": [] }"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("start"), "unexpected error: {err}");
    }

    #[test]
    fn refusal_policy_forms_parse() {
        let start: RefusalDef = serde_json::from_str(r#""start""#).unwrap();
        let previous: RefusalDef = serde_json::from_str(r#""previous""#).unwrap();
        let room: RefusalDef = serde_json::from_str(r#"{ "room": "Gate" }"#).unwrap();
        assert_eq!(start, RefusalDef::Start);
        assert_eq!(previous, RefusalDef::Previous);
        assert_eq!(room, RefusalDef::Room("Gate".into()));
    }

    #[test]
    fn boss_defaults_to_start_ejection() {
        let boss: BossDef = serde_json::from_str(r#"{ "room": "Lair" }"#).unwrap();
        assert_eq!(boss.on_refusal, RefusalDef::Start);
        assert!(boss.required_items.is_empty());
        assert!(boss.victory_message.is_none());
    }
}
