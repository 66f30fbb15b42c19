//! Season CLI - generate a draft order and schedule without running the server.
//!
//! Uses the same generators as the backend, so a seeded run here matches what
//! a league created with the same member ids and seed would store.

mod analysis;
mod output;
mod types;

use std::io;
use std::time::Instant;

use analysis::{print_audit, ScheduleAudit};
use clap::Parser;
use leagues::{LeagueService, SeasonConfig};
use output::write_plan;
use tracing::{debug, info};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "season-cli")]
#[command(about = "Generate a Thrive Leagues draft order and round-robin schedule")]
struct Args {
    /// Member ids, comma separated or repeated
    #[arg(short, long, value_delimiter = ',', required = true)]
    members: Vec<String>,

    /// Season length in weeks (values below 1 become 1)
    #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
    weeks: i64,

    /// Draft seed; omit for a random draft order
    #[arg(long)]
    seed: Option<String>,

    /// Output format
    #[arg(long, default_value = "table")]
    format: OutputFormat,

    /// Print bye and partner fairness audit after the plan
    #[arg(long)]
    audit: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let members: Vec<String> = args
        .members
        .iter()
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect();
    info!(
        members = members.len(),
        weeks = args.weeks,
        seeded = args.seed.is_some(),
        "Generating season"
    );

    let service = LeagueService::new(SeasonConfig {
        max_members: members.len().max(1),
        ..SeasonConfig::default()
    });

    let start = Instant::now();
    let plan = service.preview(&members, Some(args.weeks), args.seed.as_deref())?;
    debug!(elapsed = ?start.elapsed(), matchups = plan.schedule.len(), "Season generated");

    write_plan(io::stdout().lock(), &plan, args.format)?;

    if args.audit {
        print_audit(&ScheduleAudit::from_schedule(&plan.schedule));
    }

    Ok(())
}
