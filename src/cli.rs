//! CLI commands: strategy duels and position analysis

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::{
    board::{Grid, Mark},
    game::{Game, GameResult},
    search::AlphaBeta,
    strategy::{Strategy, StrategyKind},
};

/// Arguments for the `duel` command
#[derive(Debug, Args)]
pub struct DuelArgs {
    /// Strategy playing noughts
    #[arg(long, value_enum, default_value_t = StrategyKind::Engine)]
    pub noughts: StrategyKind,

    /// Strategy playing crosses
    #[arg(long, value_enum, default_value_t = StrategyKind::Random)]
    pub crosses: StrategyKind,

    /// Number of games to play; the first mover alternates each game
    #[arg(long, default_value_t = 100)]
    pub games: usize,

    /// RNG seed for reproducible duels
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit the summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct DuelSummary {
    games: usize,
    nought_wins: usize,
    cross_wins: usize,
    draws: usize,
}

/// Play two strategies against each other and print the tally
pub fn duel(args: DuelArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut noughts = args.noughts.into_boxed_strategy(Mark::Nought, seed);
    let mut crosses = args.crosses.into_boxed_strategy(Mark::Cross, seed.wrapping_add(1));

    let mut summary = DuelSummary {
        games: args.games,
        nought_wins: 0,
        cross_wins: 0,
        draws: 0,
    };

    let pb = duel_progress(args.games as u64);
    for index in 0..args.games {
        let first = if index % 2 == 0 {
            Mark::Nought
        } else {
            Mark::Cross
        };
        match run_game(noughts.as_mut(), crosses.as_mut(), first)? {
            GameResult::Win(Mark::Nought) => summary.nought_wins += 1,
            GameResult::Win(Mark::Cross) => summary.cross_wins += 1,
            GameResult::Draw => summary.draws += 1,
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_kv("games", &summary.games.to_string());
        print_kv("nought wins", &summary.nought_wins.to_string());
        print_kv("cross wins", &summary.cross_wins.to_string());
        print_kv("draws", &summary.draws.to_string());
        print_kv("seed", &seed.to_string());
    }
    Ok(())
}

/// Run one game to completion. Proposals are advisory: a square that turns
/// out occupied is simply requested again.
fn run_game<'a>(
    noughts: &'a mut dyn Strategy,
    crosses: &'a mut dyn Strategy,
    first: Mark,
) -> Result<GameResult> {
    let mut game = Game::new(first);
    while !game.is_over() {
        let strategy = match game.to_move() {
            Mark::Nought => &mut *noughts,
            Mark::Cross => &mut *crosses,
        };
        let square = strategy.choose(game.grid(), game.moves_played())?;
        if game.grid().is_empty(square) {
            game.play(square)?;
        }
    }
    game.result().context("finished game carries a result")
}

/// Arguments for the `analyze` command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Board as one character per cell in row-major order ('O', 'X', '.'),
    /// e.g. "OX. .O. ..X"
    pub board: String,

    /// Mark to search for
    #[arg(long, default_value = "nought")]
    pub mark: Mark,

    /// Tie-break RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Search a position and print the best move with its principal variation
pub fn analyze(args: AnalyzeArgs) -> Result<()> {
    let grid = Grid::from_string(&args.board)?;
    if grid.classify(args.mark).is_terminal() {
        return Err(crate::Error::GameOver.into());
    }

    let mut search = match args.seed {
        Some(seed) => AlphaBeta::with_seed(args.mark, seed),
        None => AlphaBeta::new(args.mark),
    };

    let report = search.analyze(&grid)?;
    let best = report.best_move()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{grid}\n");
        print_kv("mark", &args.mark.to_string());
        print_kv("best move", &best.to_string());
        print_kv("score", &report.score.to_string());
        print_kv("variation", &format_variation(&report));
        print_kv("nodes", &report.nodes.to_string());
    }
    Ok(())
}

fn format_variation(report: &crate::search::SearchReport) -> String {
    report
        .variation
        .iter()
        .map(|square| square.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar for a duel
fn duel_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games")
            .expect("invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a key-value pair
fn print_kv(key: &str, value: &str) {
    println!("  {:12} {}", format!("{key}:"), value);
}
