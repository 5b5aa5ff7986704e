//! Game session.
//!
//! [`Game`] bundles the world, the player, the win condition and the
//! interpreter state, and runs one command at a time against them.

use log::warn;
use variantly::Variantly;

use crate::command::parse_command;
use crate::goal::WinCondition;
use crate::loader::help::HelpCommand;
use crate::player::Player;
use crate::repl::dispatch;
use crate::room::Room;
use crate::view::{View, ViewItem};
use crate::world::{RoomId, World, WorldError};

/// Interpreter state. `Ended` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Variantly)]
pub enum GameState {
    #[default]
    Playing,
    Ended,
}

#[derive(Debug, Clone)]
pub struct Game {
    pub world: World,
    pub player: Player,
    pub state: GameState,
    pub start: RoomId,
    pub win: Option<WinCondition>,
    pub help: Vec<HelpCommand>,
    /// Recognised commands that ran to completion.
    pub turn_count: usize,
}

impl Game {
    /// Start a new session with the player standing in `start`.
    pub fn new(world: World, start: RoomId) -> Game {
        Game {
            world,
            player: Player::new(start),
            state: GameState::Playing,
            start,
            win: None,
            help: Vec::new(),
            turn_count: 0,
        }
    }

    /// # Errors
    /// - `InvalidRoomId` if the player's location is not a room of this world
    pub fn current_room(&self) -> Result<&Room, WorldError> {
        self.world.room(self.player.location)
    }

    pub fn is_over(&self) -> bool {
        self.state.is_ended()
    }

    /// Run one line of input, pushing everything it produces onto `view`.
    ///
    /// Handler failures are reported to the player and logged; they never end the session.
    pub fn process(&mut self, input: &str, view: &mut View) {
        if self.is_over() {
            view.push(ViewItem::EngineMessage("The game is over.".to_string()));
            return;
        }
        let command = parse_command(input);
        if command.is_empty() {
            return;
        }
        if let Err(err) = dispatch(self, view, &command) {
            warn!("command {command:?} failed: {err:#}");
            view.push(ViewItem::Error(format!("Something went wrong: {err}")));
        }
    }

    /// Run one line of input and return the rendered, unstyled response.
    pub fn respond(&mut self, input: &str) -> String {
        let mut view = View::plain();
        self.process(input, &mut view);
        view.render()
    }

    /// Describe the current room without taking a turn.
    pub fn describe(&self) -> String {
        let mut view = View::plain();
        if let Ok(room) = self.current_room() {
            room.show(&mut view);
        }
        view.render()
    }
}
