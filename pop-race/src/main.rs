//! pop-race - race a roster of birds and vehicles by top speed
//!
//! Loads a roster (command line, `POP_RACE_ROSTER`, user config, or the
//! built-in line-up), applies any boosts, optionally narrows the race to a
//! contiguous range of racers and prints the result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pop_common::config::RosterResolver;
use pop_common::report::RaceReport;
use pop_common::roster::parse_range;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for pop-race
#[derive(Parser, Debug)]
#[command(name = "pop-race")]
#[command(about = "Race birds and vehicles by top speed")]
#[command(version)]
struct Args {
    /// Roster TOML file (falls back to POP_RACE_ROSTER, then the user roster)
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Race only a contiguous range of the roster, e.g. 1..=3 or 2..
    #[arg(long)]
    range: Option<String>,

    /// Boost every boostable racer by this non-negative amount; repeat to boost again
    #[arg(short, long)]
    boost: Vec<f64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "pop_race=info,pop_common=info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "Starting POP race (pop-race) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let source = RosterResolver::new().resolve(args.roster.as_deref());
    let mut roster = source
        .load()
        .context("Failed to load roster")?
        .build()
        .context("Invalid roster")?;
    info!("Roster ready with {} racer(s)", roster.len());

    for power in &args.boost {
        let boosted = roster
            .boost_all(*power)
            .with_context(|| format!("Failed to apply boost {}", power))?;
        if boosted == 0 {
            warn!("Boost {} ignored: no boostable racers", power);
        } else {
            info!("Boosted {} racer(s) by {}", boosted, power);
        }
    }

    let contestants = match &args.range {
        Some(text) => {
            let range = parse_range(text, roster.len())?;
            roster.slice(range)?
        }
        None => roster.contestants(),
    };

    let report = RaceReport::from_contestants(contestants);
    if args.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        println!("{}", report);
    }

    Ok(())
}
