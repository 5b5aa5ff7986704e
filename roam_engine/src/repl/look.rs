//! `repl::look` module
//!
//! Handlers for commands that only report on the world.

use anyhow::Result;

use crate::game::Game;
use crate::{View, ViewItem};

/// Describe the current room again.
///
/// # Errors
/// - if the player's room cannot be found
pub fn look_handler(game: &Game, view: &mut View) -> Result<()> {
    game.current_room()?.show(view);
    Ok(())
}

/// List what the player is carrying, in pick-up order.
pub fn inventory_handler(game: &Game, view: &mut View) {
    view.push(ViewItem::Inventory(game.player.inventory.clone()));
}
