//! Command module
//!
//! Turns a line of player input into a [`Command`]. The verb is resolved with
//! the shared token resolver; arguments are left as typed (lower-cased) and
//! resolved later by the handler against the relevant candidate set.
use variantly::Variantly;

use crate::resolver::{DIRECTION_ALIASES, MatchMode, ResolveError, VERB_ALIASES, resolve};

/// The closed set of verbs the interpreter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Go,
    Get,
    Drop,
    Look,
    Inventory,
    Help,
    Quit,
}

impl Verb {
    pub const ALL: [Verb; 7] = [
        Verb::Go,
        Verb::Get,
        Verb::Drop,
        Verb::Look,
        Verb::Inventory,
        Verb::Help,
        Verb::Quit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Go => "go",
            Verb::Get => "get",
            Verb::Drop => "drop",
            Verb::Look => "look",
            Verb::Inventory => "inventory",
            Verb::Help => "help",
            Verb::Quit => "quit",
        }
    }

    pub fn from_word(word: &str) -> Option<Verb> {
        Verb::ALL.into_iter().find(|verb| verb.as_str() == word)
    }
}

/// Direction words that work as a command on their own ("north" means "go north").
pub const DIRECTIONS: [&str; 10] = [
    "north",
    "south",
    "east",
    "west",
    "up",
    "down",
    "northeast",
    "northwest",
    "southeast",
    "southwest",
];

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    Go(String),
    Get(String),
    Drop(String),
    Look,
    Inventory,
    Help,
    Quit,
    /// Blank input: nothing happens.
    Empty,
    /// The verb matched nothing.
    Unknown(String),
    /// The verb is a prefix of several verbs.
    Ambiguous(Vec<String>),
}

impl Command {
    fn from_verb(verb: Verb, argument: String) -> Command {
        match verb {
            Verb::Go => Command::Go(argument),
            Verb::Get => Command::Get(argument),
            Verb::Drop => Command::Drop(argument),
            Verb::Look => Command::Look,
            Verb::Inventory => Command::Inventory,
            Verb::Help => Command::Help,
            Verb::Quit => Command::Quit,
        }
    }
}

/// Returns true for a direction word or direction shortcut.
pub fn is_direction(word: &str) -> bool {
    DIRECTION_ALIASES.contains_key(word) || DIRECTIONS.contains(&word)
}

/// Parses an input line into a `Command`.
///
/// The first word is the verb and the rest, rejoined with single spaces, is
/// the argument. A direction typed alone is shorthand for `go`.
pub fn parse_command(input: &str) -> Command {
    let words: Vec<String> = input.split_whitespace().map(str::to_lowercase).collect();
    let Some((verb, rest)) = words.split_first() else {
        return Command::Empty;
    };
    let argument = rest.join(" ");

    if argument.is_empty() && is_direction(verb) {
        return Command::Go(verb.clone());
    }

    match resolve(verb, Verb::ALL.map(Verb::as_str), MatchMode::Prefix, VERB_ALIASES) {
        Ok(word) => Verb::from_word(word).map_or_else(|| Command::Unknown(verb.clone()), |v| Command::from_verb(v, argument)),
        Err(ResolveError::Ambiguous(candidates)) => Command::Ambiguous(candidates),
        Err(ResolveError::NoMatch(_) | ResolveError::EmptyInput) => Command::Unknown(verb.clone()),
    }
}
