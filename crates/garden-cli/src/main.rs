//! garden — two gardeners concurrently processing a shared grid.
//!
//! Builds a rows x cols garden, pre-blocks a random share of its plots, and
//! lets two gardener threads walk their serpentine paths over it: gardener 1
//! from the top-left corner, gardener 2 from the bottom-right.  Each
//! processed plot prints a step line and a fresh snapshot; the run ends when
//! both walks leave the grid.
//!
//!     garden 4 6 0.5 0.7 0.2
//!     garden 10 10 0 0 0 --occupancy 20 --seed 7 --log-csv steps.csv --quiet

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use clap::Parser;

use garden_core::{GardenRng, RunConfig};
use garden_grid::draw_occupancy_percent;
use garden_render::{CsvStepLog, RunLog};
use garden_sim::GardenRunBuilder;

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "garden", version, about = "Two gardeners concurrently process a shared grid")]
struct Args {
    /// Grid rows
    rows: u32,

    /// Grid columns
    cols: u32,

    /// Seconds gardener 1 pauses after processing a plot
    #[arg(allow_negative_numbers = true)]
    delay_first: f64,

    /// Seconds gardener 2 pauses after processing a plot
    #[arg(allow_negative_numbers = true)]
    delay_second: f64,

    /// Seconds either gardener pauses on an already-claimed plot
    #[arg(allow_negative_numbers = true)]
    blocked_delay: f64,

    /// Percentage of plots to pre-block (0-100); drawn from 10-30 if omitted
    #[arg(long, value_name = "PERCENT", value_parser = clap::value_parser!(u32).range(0..=100))]
    occupancy: Option<u32>,

    /// Seed for the occupancy layout; drawn from OS entropy if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Also append one CSV row per gardener step to this file
    #[arg(long, value_name = "PATH")]
    log_csv: Option<PathBuf>,

    /// Suppress all console output (CSV logging still applies)
    #[arg(long)]
    quiet: bool,
}

/// Convert a seconds argument to a `Duration`, rejecting negatives and
/// non-finite values with the argument's name in the message.
fn delay_from_secs(seconds: f64, what: &str) -> Result<Duration> {
    Duration::try_from_secs_f64(seconds)
        .map_err(|_| anyhow!("{what} must be a non-negative, finite number of seconds (got {seconds})"))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Resolve the randomized inputs up front so the banner can show them
    //    and a printed seed always reproduces the layout.
    let seed = args.seed.unwrap_or_else(rand::random);
    let occupancy = args
        .occupancy
        .unwrap_or_else(|| draw_occupancy_percent(&mut GardenRng::new(seed)));

    let config = RunConfig {
        rows:              args.rows,
        cols:              args.cols,
        work_delay_first:  delay_from_secs(args.delay_first, "gardener 1 delay")?,
        work_delay_second: delay_from_secs(args.delay_second, "gardener 2 delay")?,
        blocked_delay:     delay_from_secs(args.blocked_delay, "blocked delay")?,
        occupancy_percent: occupancy,
        seed,
    };

    // 2. Banner.
    if !args.quiet {
        println!("=== garden — two gardeners, one grid ===");
        println!(
            "Grid: {}x{}  |  Occupancy: {occupancy}%  |  Seed: {seed}",
            args.rows, args.cols
        );
        println!(
            "Delays: gardener 1 {}s, gardener 2 {}s  |  Blocked: {}s",
            args.delay_first, args.delay_second, args.blocked_delay
        );
        println!();
    }

    // 3. Output sinks.
    let mut log = RunLog::new();
    if !args.quiet {
        log = log.with_console();
    }
    if let Some(path) = &args.log_csv {
        log = log.with_csv(CsvStepLog::create(path)?);
    }

    // 4. Build and run.
    let run = GardenRunBuilder::new(config).build()?;
    let t0 = Instant::now();
    let outcome = run.run(&log)?;
    let elapsed = t0.elapsed();

    if let Some(e) = log.take_error() {
        eprintln!("step log error: {e}");
    }

    // 5. Summary.
    if !args.quiet {
        println!("Run complete in {:.3} s", elapsed.as_secs_f64());
        println!();
        println!("{:<10} {:<9} {:<11} {:<9}", "Gardener", "Visited", "Processed", "Skipped");
        println!("{}", "-".repeat(39));
        for g in outcome.report.gardeners {
            println!("{:<10} {:<9} {:<11} {:<9}", g.id.0, g.visited, g.processed, g.skipped);
        }
        println!();
        let counts = outcome.report.counts;
        println!(
            "Plots: {} processed, {} blocked, {} empty",
            counts.processed, counts.blocked, counts.empty
        );
    }

    Ok(())
}
