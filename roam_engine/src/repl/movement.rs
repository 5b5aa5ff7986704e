//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use anyhow::Result;
use log::info;

use crate::game::{Game, GameState};
use crate::goal::GoalCheck;
use crate::resolver::{DIRECTION_ALIASES, MatchMode, ResolveError, resolve};
use crate::{View, ViewItem};

/// Move the player through the exit that `direction` resolves to.
///
/// # Errors
/// - if the player's room or the exit's target room cannot be found
pub fn go_handler(game: &mut Game, view: &mut View, direction: &str) -> Result<()> {
    let room = game.current_room()?;
    let label = match resolve(direction, room.exit_labels(), MatchMode::Prefix, DIRECTION_ALIASES) {
        Ok(label) => label.to_string(),
        Err(ResolveError::EmptyInput) => {
            view.push(ViewItem::ActionFailure("Go where?".to_string()));
            return Ok(());
        },
        Err(ResolveError::NoMatch(_)) => {
            view.push(ViewItem::ActionFailure("There's no way to go there.".to_string()));
            return Ok(());
        },
        Err(ResolveError::Ambiguous(candidates)) => {
            view.push(ViewItem::Ambiguous(candidates));
            return Ok(());
        },
    };

    let destination = game.world.exit_target(game.player.location, &label)?;
    let leaving = room.name.clone();
    game.player.move_to(destination);
    let arrived = game.current_room()?;
    info!("player moved {label} from '{leaving}' to '{}'", arrived.name);
    arrived.show(view);

    check_goal(game, view)
}

/// Run the win condition against the player's new position.
///
/// # Errors
/// - if the ejection room cannot be found
pub fn check_goal(game: &mut Game, view: &mut View) -> Result<()> {
    let Some(win) = &game.win else {
        return Ok(());
    };
    match win.check(&game.player) {
        GoalCheck::NotApplicable => {},
        GoalCheck::Victory { message } => {
            info!("player reached the goal after {} turns", game.turn_count);
            view.push(ViewItem::Victory(message));
            game.state = GameState::Ended;
        },
        GoalCheck::Refused { message, eject_to } => {
            info!("player refused in the goal room; missing {:?}", win.missing_items(&game.player));
            // look the room up before moving so a bad id leaves the player where they are
            let ejection_room = game.world.room(eject_to)?;
            view.push(ViewItem::Refused(message));
            ejection_room.show(view);
            info!("player ejected to '{}'", ejection_room.name);
            game.player.move_to(eject_to);
        },
    }
    Ok(())
}
