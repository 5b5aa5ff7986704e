//! `repl::inventory` module
//!
//! Handlers that move items between the current room and the player.
//! Each transfer checks both ends before removing anything, so a failure
//! never leaves an item in neither place.

use anyhow::Result;
use log::info;

use crate::game::Game;
use crate::item::ItemHolder;
use crate::resolver::{Aliases, MatchMode, ResolveError, resolve};
use crate::{View, ViewItem};

/// Pick up an item from the current room.
///
/// # Errors
/// - if the player's room cannot be found
pub fn get_handler(game: &mut Game, view: &mut View, item: &str) -> Result<()> {
    let room = game.current_room()?;
    let label = match resolve(item, room.item_labels(), MatchMode::Substring, Aliases::NONE) {
        Ok(label) => label.to_string(),
        Err(ResolveError::EmptyInput) => {
            view.push(ViewItem::ActionFailure("Get what?".to_string()));
            return Ok(());
        },
        Err(ResolveError::NoMatch(fragment)) => {
            view.push(ViewItem::ActionFailure(format!("There is no {fragment} here to pick up.")));
            return Ok(());
        },
        Err(ResolveError::Ambiguous(candidates)) => {
            view.push(ViewItem::Ambiguous(candidates));
            return Ok(());
        },
    };

    let taken = game.world.remove_item(game.player.location, &label)?;
    info!("player took '{taken}'");
    game.player.add_item(taken.clone());
    view.push(ViewItem::ItemTaken(taken));
    Ok(())
}

/// Drop an item from the inventory into the current room.
///
/// # Errors
/// - if the player's room cannot be found
pub fn drop_handler(game: &mut Game, view: &mut View, item: &str) -> Result<()> {
    let location = game.player.location;
    // the room must exist before anything leaves the inventory
    game.world.room(location)?;
    let label = match resolve(item, game.player.item_labels(), MatchMode::Substring, Aliases::NONE) {
        Ok(label) => label.to_string(),
        Err(ResolveError::EmptyInput) => {
            view.push(ViewItem::ActionFailure("Drop what?".to_string()));
            return Ok(());
        },
        Err(ResolveError::NoMatch(fragment)) => {
            view.push(ViewItem::ActionFailure(format!("You do not have a {fragment} to drop.")));
            return Ok(());
        },
        Err(ResolveError::Ambiguous(candidates)) => {
            view.push(ViewItem::Ambiguous(candidates));
            return Ok(());
        },
    };

    let dropped = game.player.take_item(&label)?;
    info!("player dropped '{dropped}'");
    game.world.add_item(location, dropped.clone())?;
    view.push(ViewItem::ItemDropped(dropped));
    Ok(())
}
