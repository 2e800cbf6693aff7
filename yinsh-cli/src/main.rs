//! YINSH CLI - Command-line interface
//!
//! Commands:
//! - play: Hot-seat game in the terminal
//! - board: Print board geometry as JSON

mod board_cmd;
mod config;
mod play;
mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "yinsh")]
#[command(about = "YINSH rule engine in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a two-player game at one keyboard
    Play(play::PlayArgs),
    /// Print the playable cells and their screen positions
    Board(board_cmd::BoardArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Board(args) => board_cmd::run(args),
    }
}
