//! `deckctl`: inspect and edit deck files from the command line.

mod commands;
mod deck;
mod error;

use std::path::PathBuf;

use blocks::BlockId;
use canvas::config::CanvasConfig;
use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::commands::Context;
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "deckctl", about = "Deck block canvas and property inspector")]
struct Cli {
    #[arg(long, env = "DECK_FILE", default_value = "deck.json")]
    deck: PathBuf,

    #[arg(long, env = "DECK_ZOOM", default_value_t = 1.0)]
    zoom: f64,

    #[arg(long, env = "DECK_WIDTH", default_value_t = canvas::consts::DEFAULT_SURFACE_WIDTH)]
    width: f64,

    #[arg(long, env = "DECK_HEIGHT", default_value_t = canvas::consts::DEFAULT_SURFACE_HEIGHT)]
    height: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every block type with its label and category.
    Types,
    /// Print the editable-property schema of a block type.
    Schema { tag: String },
    /// Add a block of this type from the palette.
    New {
        tag: String,
        #[arg(long, requires = "y")]
        x: Option<f64>,
        #[arg(long, requires = "x")]
        y: Option<f64>,
    },
    /// Print the rendered canvas view.
    Render,
    /// Print the inspector panel for a block.
    Inspect { id: BlockId },
    /// Edit one property through its inspector control.
    Set { id: BlockId, prop: String, value: String },
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();
    let ctx = Context {
        deck: cli.deck,
        config: CanvasConfig { width: cli.width, height: cli.height, zoom: cli.zoom, ..CanvasConfig::default() },
    };

    let output = match cli.command {
        Command::Types => Ok(commands::types()),
        Command::Schema { tag } => commands::schema(&tag),
        Command::New { tag, x, y } => commands::new_block(&ctx, &tag, x.zip(y)),
        Command::Render => commands::render(&ctx),
        Command::Inspect { id } => commands::inspect_block(&ctx, id),
        Command::Set { id, prop, value } => commands::set(&ctx, id, &prop, &value),
    }?;
    print_json(&output)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
