//! module `loader::help`

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

/// The command summary shipped with the engine.
const HELP_COMMANDS_TOML: &str = include_str!("../../data/help_commands.toml");

/// Represents a single command in the help system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommand {
    pub command: String,
    pub description: String,
}

/// Wrapper for the TOML file containing help commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommandFile {
    pub commands: Vec<HelpCommand>,
}

/// Parses help commands from TOML text
/// # Errors
/// - on TOML parsing error
pub fn parse_help_commands(toml_text: &str) -> Result<Vec<HelpCommand>> {
    let wrapper: HelpCommandFile = toml::from_str(toml_text).context("parsing help commands")?;
    Ok(wrapper.commands)
}

/// Loads the built-in help commands
/// # Errors
/// - if the embedded help table is malformed
pub fn load_help_commands() -> Result<Vec<HelpCommand>> {
    let commands = parse_help_commands(HELP_COMMANDS_TOML).context("while loading built-in help table")?;
    info!("{} help commands loaded", commands.len());
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Verb;

    #[test]
    fn builtin_help_covers_every_verb() {
        let commands = load_help_commands().expect("built-in help should parse");
        for verb in Verb::ALL {
            assert!(
                commands.iter().any(|cmd| cmd.command.split_whitespace().next() == Some(verb.as_str())),
                "help is missing '{}'",
                verb.as_str()
            );
        }
        for command in &commands {
            assert!(
                !command.description.is_empty(),
                "Command '{}' should have a non-empty description",
                command.command
            );
        }
    }

    #[test]
    fn malformed_help_is_an_error() {
        assert!(parse_help_commands("commands = 3").is_err());
    }
}
