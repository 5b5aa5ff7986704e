//! Loader utilities for building a [`Game`] from a map file.
//!
//! The map document is parsed into a `roam_data::MapDef`, checked with
//! `roam_data::validate_map`, and only then turned into runtime structs.

pub mod help;

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::info;
use roam_data::{MapDef, ValidationError, validate_map};
use thiserror::Error;

use crate::game::Game;
use crate::goal::WinCondition;
use crate::loader::help::load_help_commands;
use crate::room::Room;
use crate::world::World;

/// Reasons a map file cannot be turned into a playable map.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read map file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse map file '{}': {message}", .path.display())]
    Parse { path: PathBuf, message: String },
    #[error("map file '{}' is invalid:{}", .path.display(), bullet_list(.errors))]
    Invalid { path: PathBuf, errors: Vec<ValidationError> },
}

fn bullet_list(errors: &[ValidationError]) -> String {
    errors.iter().fold(String::new(), |mut out, err| {
        let _ = write!(out, "\n- {err}");
        out
    })
}

/// Serialization format of a map file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapFormat {
    Json,
    Ron,
    Toml,
}

impl MapFormat {
    /// `.ron` and `.toml` select those formats; anything else is read as JSON.
    pub fn from_path(path: &Path) -> MapFormat {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("ron") => MapFormat::Ron,
            Some("toml") => MapFormat::Toml,
            _ => MapFormat::Json,
        }
    }
}

/// Deserialize map text in the given format. Returns the parser's message on failure.
///
/// # Errors
/// - if the text is not a well-formed map document
pub fn parse_map(text: &str, format: MapFormat) -> Result<MapDef, String> {
    match format {
        MapFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        MapFormat::Ron => ron::from_str(text).map_err(|e| e.to_string()),
        MapFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
    }
}

/// Read, parse and validate a map file.
///
/// # Errors
/// - `Io` if the file cannot be read
/// - `Parse` if it is not a well-formed map document
/// - `Invalid` with every problem found by validation
pub fn load_map(path: &Path) -> Result<MapDef, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let map = parse_map(&text, MapFormat::from_path(path)).map_err(|message| LoadError::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    let errors = validate_map(&map);
    if !errors.is_empty() {
        return Err(LoadError::Invalid {
            path: path.to_path_buf(),
            errors,
        });
    }
    Ok(map)
}

/// Build a fresh game session from a map definition.
///
/// # Errors
/// - if the map fails validation
/// - if the built-in help table cannot be parsed
pub fn build_game(map: &MapDef) -> Result<Game> {
    let errors = validate_map(map);
    if !errors.is_empty() {
        bail!("map validation failed:{}", bullet_list(&errors));
    }

    let mut world = World::new();
    for room_def in &map.rooms {
        world.add_room(Room::from_def(room_def));
    }
    let item_count: usize = world.rooms().map(|room| room.items.len()).sum();
    info!("{} rooms and {item_count} items added to World", world.len());

    let start = world.find_room(&map.start).context("looking up start room")?;
    let mut game = Game::new(world, start);
    info!("player placed in '{}'", map.start);

    if let Some(boss) = &map.boss {
        let win = WinCondition::from_def(boss, &game.world, start).context("while building win condition")?;
        info!(
            "win condition set: reach '{}' carrying {} item(s)",
            boss.room,
            win.required_items.len()
        );
        game.win = Some(win);
    }

    game.help = load_help_commands()?;
    Ok(game)
}

/// Load a map file and build a game from it.
///
/// # Errors
/// - any [`LoadError`] from reading the map
/// - any failure from [`build_game`]
pub fn load_game(path: &Path) -> Result<Game> {
    let map = load_map(path)?;
    info!("map loaded from '{}'", path.display());
    build_game(&map).with_context(|| format!("while building game from '{}'", path.display()))
}
