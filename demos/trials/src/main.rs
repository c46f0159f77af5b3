//! cleaning-trials — runs a series of vacuum-cleaner trials on a dirty grid.
//!
//! Every trial starts a fresh world with more agents than the last, runs it
//! until the floor is clean, and prints a short report.  The final trial's
//! history is rendered as an animated GIF.
//!
//! ```text
//! cargo run --release -p cleaning-trials -- --trials 30 --agents 5 --agent-step 10
//! RUST_LOG=vw_sim=debug cargo run -p cleaning-trials
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vw_behavior::RandomCleaner;
use vw_core::{SimRng, WorldConfig};
use vw_output::{AnimationRenderer, CsvWriter, SimOutputObserver};
use vw_sim::{HistoryRecorder, TrialOutcome, WorldBuilder};

// ── Defaults ──────────────────────────────────────────────────────────────────

const GRID_WIDTH:     u32   = 15;
const GRID_HEIGHT:    u32   = 15;
const DIRTY_FRACTION: f64   = 0.3;
const INITIAL_AGENTS: usize = 5;
const AGENT_STEP:     usize = 10;
const TRIALS:         u32   = 30;
const FRAME_CAP:      usize = 500;
const SEED:           u64   = 42;

// ── Command line ──────────────────────────────────────────────────────────────

/// Multi-agent vacuum cleaner trials.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Grid width in cells.
    #[arg(long, default_value_t = GRID_WIDTH)]
    width: u32,

    /// Grid height in cells.
    #[arg(long, default_value_t = GRID_HEIGHT)]
    height: u32,

    /// Fraction of cells that start dirty, in [0, 1].
    #[arg(long, default_value_t = DIRTY_FRACTION)]
    dirty_fraction: f64,

    /// Agents in the first trial.
    #[arg(long, default_value_t = INITIAL_AGENTS)]
    agents: usize,

    /// Agents added after each trial.
    #[arg(long, default_value_t = AGENT_STEP)]
    agent_step: usize,

    /// Number of trials.
    #[arg(long, default_value_t = TRIALS)]
    trials: u32,

    /// Master seed; each trial derives its own world seed from it.
    #[arg(long, default_value_t = SEED)]
    seed: u64,

    /// Stop a trial after this many ticks even if the floor is still dirty.
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Directory for CSV metrics and the animation.
    #[arg(long, default_value = "output/trials")]
    output_dir: PathBuf,

    /// Maximum number of animation frames.
    #[arg(long, default_value_t = FRAME_CAP)]
    frame_cap: usize,

    /// Pixels per grid cell in the animation.
    #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u32).range(1..=4096))]
    cell_px: u32,

    /// Display time of each animation frame.
    #[arg(long, default_value_t = 100)]
    frame_delay_ms: u32,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_report(outcome: &TrialOutcome, agents: usize) {
    println!("-----------------------------------------------------------");
    println!(" Cleaning trial finished");
    println!("Clean cells: {}%", outcome.clean_percentage);
    println!("Total steps taken by the cleaning agents: {}", outcome.total_steps);
    println!("Total run time: {:.2} s", outcome.elapsed.as_secs_f64());
    println!(" Number of agents: {agents}");
    if !outcome.converged {
        println!(" Stopped at the tick cap after {} ticks", outcome.ticks);
    }
    println!(" End of report");
    println!("-----------------------------------------------------------");
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    std::fs::create_dir_all(&args.output_dir)?;
    let mut obs = SimOutputObserver::new(CsvWriter::new(&args.output_dir)?);
    let mut history = HistoryRecorder::with_limit(args.frame_cap);
    let mut master = SimRng::new(args.seed);

    let mut agents = args.agents;
    for trial in 0..args.trials {
        let config = WorldConfig {
            width:          args.width,
            height:         args.height,
            agent_count:    agents,
            dirty_fraction: args.dirty_fraction,
            seed:           master.child_seed(trial as u64),
            max_ticks:      args.max_ticks,
        };
        let mut world = WorldBuilder::new(config, RandomCleaner).build()?;

        obs.begin_trial(trial, agents);
        let outcome = if trial + 1 == args.trials {
            world.run_until_clean(&mut (&mut obs, &mut history))?
        } else {
            world.run_until_clean(&mut obs)?
        };

        print_report(&outcome, agents);
        agents += args.agent_step;
    }

    obs.finish()?;
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    let renderer = AnimationRenderer {
        cell_px:        args.cell_px,
        frame_delay_ms: args.frame_delay_ms,
        frame_cap:      args.frame_cap,
    };
    let gif_path = args.output_dir.join("last_trial.gif");
    let frames = renderer.render_gif(history.frames(), &gif_path)?;
    info!(frames, path = %gif_path.display(), "animation written");

    Ok(())
}
