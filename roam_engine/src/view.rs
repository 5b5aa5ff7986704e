//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we aggregate the messages of a turn and
//! render them together, as one block of text, at the end of the turn.
use std::io::{self, IsTerminal, Write};

use colored::ColoredString;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::helpers::or_list;
use crate::loader::help::HelpCommand;
use crate::style::GameStyle;

/// Width used when the terminal cannot be measured (and by [`View::plain`]).
const DEFAULT_WIDTH: usize = 80;

/// View aggregates the messages produced during one turn and renders them.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    /// Apply terminal colours when rendering.
    pub styled: bool,
    pub items: Vec<ViewItem>,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a view for the terminal: wraps to its width, styled when stdout is a TTY.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            styled: io::stdout().is_terminal(),
            items: Vec::new(),
        }
    }

    /// Create an unstyled view with a fixed width, for captured output.
    pub fn plain() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            styled: false,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render every queued item, in push order, and clear the buffer.
    pub fn render(&mut self) -> String {
        let items = std::mem::take(&mut self.items);
        let blocks: Vec<String> = items.iter().map(|item| self.render_item(item)).collect();
        blocks.join("\n\n")
    }

    /// Render the turn to `out`, usually stdout.
    ///
    /// # Errors
    /// - if writing to `out` fails
    pub fn flush(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.styled {
            // re-check terminal width in case it's been resized
            self.width = termwidth();
        }
        let text = self.render();
        if !text.is_empty() {
            writeln!(out, "{text}")?;
        }
        out.flush()
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.styled { style(text).to_string() } else { text.to_string() }
    }

    fn paint_all(&self, labels: &[String], style: impl Fn(&str) -> ColoredString) -> Vec<String> {
        labels.iter().map(|label| self.paint(label, &style)).collect()
    }

    fn render_item(&self, item: &ViewItem) -> String {
        match item {
            ViewItem::RoomDescription {
                name,
                description,
                items,
                exits,
            } => {
                let mut block = format!(
                    "> {}\n\n{}",
                    self.paint(name, |s| s.room_titlebar_style()),
                    self.paint(&fill(description, self.width), |s| s.description_style())
                );
                if !items.is_empty() {
                    block.push_str("\n\nItems in the room: ");
                    block.push_str(&self.paint_all(items, |s| s.item_style()).join(", "));
                }
                block.push_str("\n\nExits: ");
                if exits.is_empty() {
                    block.push_str("none");
                } else {
                    block.push_str(&self.paint_all(exits, |s| s.exit_style()).join(" "));
                }
                block
            },
            ViewItem::ItemTaken(name) => format!("You picked up the {}.", self.paint(name, |s| s.item_style())),
            ViewItem::ItemDropped(name) => format!("You dropped the {}.", self.paint(name, |s| s.item_style())),
            ViewItem::Inventory(carried) => {
                if carried.is_empty() {
                    "You are not carrying anything.".to_string()
                } else {
                    format!(
                        "You are carrying: {}",
                        self.paint_all(carried, |s| s.item_style()).join(", ")
                    )
                }
            },
            ViewItem::ActionFailure(msg) => self.paint(msg, |s| s.denied_style()),
            ViewItem::Ambiguous(candidates) => {
                format!("Did you mean {}?", or_list(&self.paint_all(candidates, |s| s.item_style())))
            },
            ViewItem::Error(msg) => self.paint(msg, |s| s.error_style()),
            ViewItem::Help(commands) => {
                let mut lines = vec![self.paint("You can run the following commands:", |s| s.subheading_style())];
                for command in commands {
                    lines.push(format!(
                        "  {} - {}",
                        self.paint(&command.command, |s| s.command_style()),
                        command.description
                    ));
                }
                lines.join("\n")
            },
            ViewItem::Victory(msg) => self.paint(&fill(msg, self.width), |s| s.triumph_style()),
            ViewItem::Refused(msg) => self.paint(&fill(msg, self.width), |s| s.denied_style()),
            ViewItem::Farewell(msg) | ViewItem::EngineMessage(msg) => self.paint(msg, |s| s.engine_style()),
        }
    }
}

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    Ambiguous(Vec<String>),
    EngineMessage(String),
    Error(String),
    Farewell(String),
    Help(Vec<HelpCommand>),
    Inventory(Vec<String>),
    ItemDropped(String),
    ItemTaken(String),
    Refused(String),
    RoomDescription {
        name: String,
        description: String,
        items: Vec<String>,
        exits: Vec<String>,
    },
    Victory(String),
}
