#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const ROAM_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod game;
pub mod goal;
pub mod helpers;
pub mod item;
pub mod loader;
pub mod player;
pub mod repl;
pub mod resolver;
pub mod room;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use game::{Game, GameState};
pub use goal::{GoalCheck, WinCondition};
pub use item::ItemHolder;
pub use loader::{LoadError, build_game, load_game};
pub use player::Player;
pub use repl::{run_repl, run_session};
pub use room::Room;
pub use view::{View, ViewItem};
pub use world::{RoomId, World, WorldError};
