//! lookahead CLI - strategy duels and position analysis

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lookahead")]
#[command(version, about = "Exhaustive search engine for grid line games", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pit two strategies against each other over many games
    Duel(lookahead::cli::DuelArgs),

    /// Report the best move and principal variation for a position
    Analyze(lookahead::cli::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Duel(args) => lookahead::cli::duel(args),
        Commands::Analyze(args) => lookahead::cli::analyze(args),
    }
}
