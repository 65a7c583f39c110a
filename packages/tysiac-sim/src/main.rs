//! Tysiąc simulator CLI - runs whole games between decision providers.
//!
//! Games run entirely in memory through the rules engine; every decision is
//! validated by the engine, so a provider bug surfaces as a failed game.

mod metrics;
mod output;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use metrics::{build_game_metrics, RunStats};
use output::OutputWriter;
use simulator::Simulator;
use tracing::{info, warn};
use tysiac::ai::registered_providers;
use tysiac::config::{load_params, params_from_env};
use tysiac::domain::derive_hand_seed;
use tysiac::telemetry::{init_tracing, DEFAULT_FILTER};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "tysiac-sim")]
#[command(about = "Run simulated Tysiąc games between decision providers")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Provider for every seat (shortcut for repeating --seat)
    #[arg(long, conflicts_with = "seat")]
    all: Option<String>,

    /// Provider per seat, in seat order (repeat once per player)
    #[arg(long)]
    seat: Vec<String>,

    /// Base seed; game N uses a seed derived from it. Random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with game parameters (falls back to TYSIAC_PARAMS_FILE)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Stop a game after this many hands even without a winner
    #[arg(long, default_value = "200")]
    max_hands: u32,

    /// Output format
    #[arg(long, value_enum, default_value = "summary")]
    format: OutputFormat,

    /// JSONL destination (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// List registered providers and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { DEFAULT_FILTER };
    init_tracing(args.json_logs, filter);

    if args.list {
        for factory in registered_providers() {
            println!("{} {}", factory.name, factory.version);
        }
        return Ok(());
    }

    let params = match &args.params {
        Some(path) => load_params(path)?,
        None => params_from_env()?,
    };
    let providers = match (&args.all, args.seat.is_empty()) {
        (Some(name), _) => vec![name.clone(); params.players.len()],
        (None, true) => vec!["greedy".to_string(); params.players.len()],
        (None, false) => args.seat.clone(),
    };
    let simulator = Simulator::new(params, providers, args.max_hands)?;
    info!(games = args.games, providers = ?simulator.providers(), "starting simulation");

    let mut writer = match args.format {
        OutputFormat::Jsonl => Some(OutputWriter::new(args.output.as_deref())?),
        OutputFormat::Summary => None,
    };

    let base_seed = args.seed.unwrap_or_else(rand::random);
    let start = Instant::now();
    let mut stats = RunStats::default();
    let mut errors = 0u32;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = derive_hand_seed(base_seed, game_num);
        match simulator.simulate_game(game_seed) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                if let Some(w) = writer.as_mut() {
                    let metrics = build_game_metrics(
                        game_num,
                        simulator.players(),
                        simulator.providers(),
                        &result,
                        duration_ms,
                    );
                    if let Err(e) = w.write_game(&metrics) {
                        warn!("Failed to write metrics for game {}: {}", game_num, e);
                    }
                }
                info!(game_num, winner = ?result.summary.winner, "game completed");
                stats.record(&result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} (seed {}) failed: {}", game_num, game_seed, e);
            }
        }
    }

    if let Some(w) = writer {
        if let Some(path) = w.output_path() {
            info!("Results written to: {}", path.display());
        }
        w.finish()?;
    }

    if args.format == OutputFormat::Summary {
        print_summary(&simulator, &stats, errors, start.elapsed(), base_seed);
    }
    Ok(())
}

fn print_summary(sim: &Simulator, stats: &RunStats, errors: u32, elapsed: Duration, seed: u64) {
    println!("\n=== Simulation Summary ===");
    println!("Base seed: {seed}");
    println!("Games completed: {}", stats.games);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    if stats.undecided > 0 {
        println!("Stopped at hand cap: {}", stats.undecided);
    }
    println!("Total time: {elapsed:?}");
    if stats.games == 0 {
        return;
    }

    println!("\n=== Results by Seat ===");
    for (player, provider) in sim.players().iter().zip(sim.providers()) {
        let seat = stats.seats.get(player).cloned().unwrap_or_default();
        let games = f64::from(stats.games);
        println!(
            "{player} ({provider}): wins={} ({:.1}%), avg score={:.1}, declared={}, made={:.1}%, marriages={}",
            seat.wins,
            f64::from(seat.wins) / games * 100.0,
            seat.total_score as f64 / games,
            seat.declared,
            seat.made_pct(),
            seat.marriages,
        );
    }
}
