use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a `MapDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateName { name: String },
    MissingReference { kind: &'static str, name: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateName { name } => {
                write!(f, "duplicate room name '{name}'")
            },
            ValidationError::MissingReference { kind, name, context } => {
                write!(f, "missing {kind} '{name}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a `MapDef`.
///
/// ```
/// use roam_data::{MapDef, RoomDef, validate_map};
///
/// let map = MapDef {
///     start: "Start".into(),
///     rooms: vec![
///         RoomDef::new("Start", "A bare room.").with_exit("north", "Hall"),
///         RoomDef::new("Hall", "A long hall.").with_exit("south", "Start"),
///     ],
///     boss: None,
/// };
/// assert!(validate_map(&map).is_empty());
/// ```
pub fn validate_map(map: &MapDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    for room in &map.rooms {
        if room.name.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: "room with blank name".to_string(),
            });
        }
        if !rooms.insert(room.name.as_str()) {
            errors.push(ValidationError::DuplicateName {
                name: room.name.clone(),
            });
        }
    }

    if map.start.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "start room missing".to_string(),
        });
    } else {
        check_ref("room", &map.start, &rooms, "start".to_string(), &mut errors);
    }

    for room in &map.rooms {
        for (direction, target) in &room.exits {
            check_ref(
                "room",
                target,
                &rooms,
                format!("room '{}' exit '{direction}'", room.name),
                &mut errors,
            );
        }
    }

    if let Some(boss) = &map.boss {
        validate_boss(map, boss, &rooms, &mut errors);
    }

    errors
}

fn validate_boss(map: &MapDef, boss: &BossDef, rooms: &HashSet<&str>, errors: &mut Vec<ValidationError>) {
    check_ref("room", &boss.room, rooms, "boss room".to_string(), errors);
    if boss.room == map.start {
        errors.push(ValidationError::InvalidValue {
            context: format!("boss room '{}' is also the start room", boss.room),
        });
    }

    if let RefusalDef::Room(target) = &boss.on_refusal {
        check_ref("room", target, rooms, "boss refusal room".to_string(), errors);
        if *target == boss.room {
            errors.push(ValidationError::InvalidValue {
                context: format!("boss refusal room '{target}' is the boss room itself"),
            });
        }
    }

    let placed: HashSet<&str> = map
        .rooms
        .iter()
        .flat_map(|room| room.items.iter().map(String::as_str))
        .collect();
    for item in &boss.required_items {
        check_ref("item", item, &placed, "boss required item".to_string(), errors);
    }
}

fn check_ref(kind: &'static str, name: &str, set: &HashSet<&str>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(name) {
        errors.push(ValidationError::MissingReference {
            kind,
            name: name.to_string(),
            context,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_map() -> MapDef {
        MapDef {
            start: "Start".into(),
            rooms: vec![
                RoomDef::new("Start", "Test room").with_exit("north", "Hall"),
                RoomDef::new("Hall", "Test room")
                    .with_exit("south", "Start")
                    .with_item("key"),
            ],
            boss: None,
        }
    }

    fn boss(room: &str) -> BossDef {
        BossDef {
            room: room.into(),
            required_items: vec!["key".into()],
            on_refusal: RefusalDef::Start,
            victory_message: None,
            refusal_message: None,
        }
    }

    #[test]
    fn valid_map_has_no_errors() {
        assert!(validate_map(&base_map()).is_empty());
    }

    #[test]
    fn duplicate_names_are_reported() {
        let mut map = base_map();
        map.rooms.push(RoomDef::new("Hall", "Another hall"));

        let errors = validate_map(&map);
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::DuplicateName { name } if name == "Hall"))
        );
    }

    #[test]
    fn unknown_start_is_reported() {
        let mut map = base_map();
        map.start = "Nowhere".into();

        let errors = validate_map(&map);
        assert!(errors.iter().any(
            |err| matches!(err, ValidationError::MissingReference { name, context, .. } if name == "Nowhere" && context == "start")
        ));
    }

    #[test]
    fn dangling_exit_is_reported() {
        let mut map = base_map();
        map.rooms[0].exits.insert("down".into(), "Cellar".into());

        let errors = validate_map(&map);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "missing room 'Cellar' (room 'Start' exit 'down')");
    }

    #[test]
    fn boss_checks_rooms_and_items() {
        let mut map = base_map();
        let mut lair = boss("Lair");
        lair.required_items.push("crown".into());
        lair.on_refusal = RefusalDef::Room("Vault".into());
        map.boss = Some(lair);

        let errors = validate_map(&map);
        let missing: Vec<_> = errors
            .iter()
            .filter_map(|err| match err {
                ValidationError::MissingReference { kind, name, .. } => Some((*kind, name.as_str())),
                _ => None,
            })
            .collect();
        assert!(missing.contains(&("room", "Lair")));
        assert!(missing.contains(&("room", "Vault")));
        assert!(missing.contains(&("item", "crown")));
        assert!(!missing.contains(&("item", "key")));
    }

    #[test]
    fn boss_room_cannot_be_start_or_refusal_target() {
        let mut map = base_map();
        let mut hall = boss("Start");
        hall.on_refusal = RefusalDef::Room("Start".into());
        map.boss = Some(hall);

        let errors = validate_map(&map);
        let invalid = errors
            .iter()
            .filter(|err| matches!(err, ValidationError::InvalidValue { .. }))
            .count();
        assert_eq!(invalid, 2);
    }

    #[test]
    fn blank_names_are_invalid() {
        let mut map = base_map();
        map.rooms.push(RoomDef::new("  ", "Nothing"));

        let errors = validate_map(&map);
        assert!(errors.iter().any(|err| matches!(err, ValidationError::InvalidValue { .. })));
    }
}
