//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module dispatches parsed
//! commands to the handlers in its submodules, which manipulate the [`Game`].

pub mod input;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod system;

pub use inventory::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use std::io::{self, Write};

use anyhow::{Context, Result};
use log::info;

use crate::command::Command;
use crate::game::Game;
use crate::style::GameStyle;
use crate::{View, ViewItem};

pub use input::{InputEvent, InputManager, LineSource};

/// Run one parsed command against the game.
///
/// Unknown and ambiguous verbs only produce a message. Every other command
/// counts as a turn once its handler succeeds; a failed command takes no turn.
///
/// # Errors
/// - propagates handler failures, such as a missing room for the player
pub fn dispatch(game: &mut Game, view: &mut View, command: &Command) -> Result<()> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;

    match command {
        Empty => return Ok(()),
        Unknown(verb) => {
            info!("unrecognised verb '{verb}'");
            view.push(ViewItem::ActionFailure("I don't understand that command.".to_string()));
            return Ok(());
        },
        Ambiguous(candidates) => {
            view.push(ViewItem::Ambiguous(candidates.clone()));
            return Ok(());
        },
        _ => {},
    }

    game.turn_count += 1;
    info!("================> TURN {} <================", game.turn_count);
    let outcome = match command {
        Go(direction) => go_handler(game, view, direction),
        Get(item) => get_handler(game, view, item),
        Drop(item) => drop_handler(game, view, item),
        Look => look_handler(game, view),
        Inventory => {
            inventory_handler(game, view);
            Ok(())
        },
        Help => {
            help_handler(game, view);
            Ok(())
        },
        Quit => {
            quit_handler(game, view);
            Ok(())
        },
        Empty | Unknown(_) | Ambiguous(_) => Ok(()),
    };
    if outcome.is_err() {
        game.turn_count -= 1;
    }
    outcome
}

/// Run the main read–eval–print loop on the terminal until the game ends.
///
/// # Errors
/// - if the starting room cannot be found
/// - if reading input or writing output fails
pub fn run_repl(game: &mut Game) -> Result<()> {
    run_session(game, &mut InputManager::new(), &mut View::new(), &mut io::stdout())
}

/// Play `game` with lines from `input`, writing each turn's output to `out`.
///
/// Shows the starting room, then reads one command per turn. End of input
/// is warned about once and ends the session the second time in a row;
/// a line in between resets that. An interrupt ends the session at once.
///
/// # Errors
/// - if the starting room cannot be found
/// - if reading input or writing output fails
pub fn run_session(game: &mut Game, input: &mut impl LineSource, view: &mut View, out: &mut impl Write) -> Result<()> {
    let mut pending_eof = false;

    game.current_room()?.show(view);
    view.flush(out)?;

    while !game.is_over() {
        let mut prompt = format!("\n[Turn: {}]>> ", game.turn_count);
        if view.styled {
            prompt = prompt.prompt_style().to_string();
        }
        let event = input.read_line(&prompt).context("while reading player input")?;

        match event {
            InputEvent::Line(line) => {
                pending_eof = false;
                game.process(&line, view);
            },
            InputEvent::Eof if pending_eof => {
                info!("input exhausted; leaving the game");
                view.push(ViewItem::Farewell("Goodbye!".to_string()));
                view.flush(out)?;
                break;
            },
            InputEvent::Eof => {
                pending_eof = true;
                view.push(ViewItem::EngineMessage("Use 'quit' to leave the game.".to_string()));
            },
            InputEvent::Interrupted => {
                info!("interrupted; leaving the game");
                view.push(ViewItem::Farewell("Goodbye!".to_string()));
                view.flush(out)?;
                break;
            },
        }
        view.flush(out)?;
    }
    Ok(())
}
