//! Room definitions.
//!
//! A room's name, description and exits are fixed at load time. Only its
//! item list changes during play.

use std::collections::BTreeMap;

use roam_data::RoomDef;

use crate::item::{ItemHolder, remove_first};
use crate::view::{View, ViewItem};

/// Any visitable location in the game world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub description: String,
    /// Direction label -> target room name.
    pub exits: BTreeMap<String, String>,
    pub items: Vec<String>,
}

impl Room {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            items: Vec::new(),
        }
    }

    /// Build a runtime room from its map record.
    pub fn from_def(def: &RoomDef) -> Self {
        Self {
            name: def.name.clone(),
            description: def.desc.clone(),
            exits: def.exits.clone(),
            items: def.items.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exit labels in display order.
    pub fn exit_labels(&self) -> impl Iterator<Item = &str> {
        self.exits.keys().map(String::as_str)
    }

    /// Queue the full room description: name, text, items (if any) and exits.
    pub fn show(&self, view: &mut View) {
        view.push(ViewItem::RoomDescription {
            name: self.name.clone(),
            description: self.description.clone(),
            items: self.items.clone(),
            exits: self.exit_labels().map(str::to_string).collect(),
        });
    }
}

impl ItemHolder for Room {
    fn items(&self) -> &[String] {
        &self.items
    }

    fn add_item(&mut self, item: String) {
        self.items.push(item);
    }

    fn remove_item(&mut self, item: &str) -> Option<String> {
        remove_first(&mut self.items, item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_def_copies_exits_and_items() {
        let def = RoomDef::new("Hall", "A long hall.")
            .with_exit("south", "Start")
            .with_item("key");
        let room = Room::from_def(&def);
        assert_eq!(room.name(), "Hall");
        assert_eq!(room.exit_labels().collect::<Vec<_>>(), vec!["south"]);
        assert!(room.contains_item("key"));
    }

    #[test]
    fn show_pushes_room_description() {
        let mut room = Room::new("Cellar", "Cold and dark.");
        room.exits.insert("up".into(), "Kitchen".into());
        let mut view = View::plain();
        room.show(&mut view);

        assert_eq!(view.items.len(), 1);
        match &view.items[0] {
            ViewItem::RoomDescription { name, items, exits, .. } => {
                assert_eq!(name, "Cellar");
                assert!(items.is_empty());
                assert_eq!(exits, &vec!["up".to_string()]);
            },
            other => panic!("unexpected view item: {other:?}"),
        }
    }
}
