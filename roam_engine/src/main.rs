#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Roam **
//! Text adventure interpreter for declarative room maps

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use log::info;

use roam_engine::{ROAM_VERSION, load_game, run_repl};

#[derive(Parser)]
#[command(name = "roam", version, about = "Play a text adventure from a map file.")]
struct Cli {
    /// Map file (.json, .ron or .toml)
    map: PathBuf,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                process::exit(1);
            },
        },
    };

    env_logger::init();
    info!("Start: loading map from '{}'...", cli.map.display());
    let mut game = load_game(&cli.map).with_context(|| format!("while loading map '{}'", cli.map.display()))?;
    info!("Map loaded successfully.");

    let title = format!("ROAM v{ROAM_VERSION}");
    if io::stdout().is_terminal() {
        println!("{}", title.bright_yellow().underline());
    } else {
        println!("{title}");
    }
    println!("Type 'help' for a list of commands.\n");

    run_repl(&mut game)
}
