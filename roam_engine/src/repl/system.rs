//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are for system utilities.

use log::info;

use crate::game::{Game, GameState};
use crate::{View, ViewItem};

/// Show the command summary.
pub fn help_handler(game: &Game, view: &mut View) {
    view.push(ViewItem::Help(game.help.clone()));
}

/// Quit the game.
pub fn quit_handler(game: &mut Game, view: &mut View) {
    info!("player quit after {} turns", game.turn_count);
    if let Ok(room) = game.current_room() {
        info!("final location: {}", room.name);
    }
    info!("ending inventory:");
    game.player.inventory.iter().for_each(|item| info!("- {item}"));

    game.state = GameState::Ended;
    view.push(ViewItem::Farewell("Goodbye!".to_string()));
}
