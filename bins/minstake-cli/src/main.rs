//! minstake: inspect the minimum-stake schedule.
//!
//! Loads the schedule configuration (defaults, TOML file, `MINSTAKE_*`
//! environment), builds the schedule once, and answers queries against it.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use minstake_core::constants::to_base_units;
use minstake_core::traits::{Clock, MinimumStakeSchedule};
use minstake_core::types::{Amount, Timestamp};
use minstake_schedule::{ScheduleConfig, ScheduleEngine, ScheduleStep, SystemClock};
use serde::Serialize;
use tracing::{debug, info};

mod output;

use output::{format_duration, format_timestamp, format_tokens};

/// Largest schedule `table` will print.
const MAX_TABLE_ROWS: u64 = 10_000;

/// Minimum-stake schedule inspector.
#[derive(Parser, Debug)]
#[command(name = "minstake", version, about = "Inspect the minimum-stake schedule")]
struct Cli {
    /// Path to the schedule config file (default: <config_dir>/minstake/schedule.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Schedule start as Unix seconds (overrides the config file).
    #[arg(long, global = true)]
    start: Option<Timestamp>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log output format ("text" or "json")
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Minimum stake at a given time.
    At(AtArgs),
    /// Minimum stake right now, and when it next drops.
    Now,
    /// Every step of the schedule.
    Table,
    /// Check whether a stake meets the minimum.
    Check(CheckArgs),
    /// Effective schedule parameters.
    Params,
}

#[derive(Args, Debug)]
struct AtArgs {
    /// Unix timestamp in seconds.
    timestamp: Timestamp,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Stake in whole tokens.
    tokens: u64,

    /// Evaluate at this Unix timestamp instead of now.
    #[arg(long)]
    at: Option<Timestamp>,
}

/// Answer for a single point in time.
#[derive(Serialize)]
struct Quote {
    at: Timestamp,
    minimum_stake: Amount,
    completed_steps: u64,
    next_step_at: Option<Timestamp>,
}

#[derive(Serialize)]
struct Verdict {
    at: Timestamp,
    stake: Amount,
    minimum_stake: Amount,
    eligible: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, &cli.log_format);

    let config = ScheduleConfig::load(cli.config.as_deref())
        .context("Failed to load schedule configuration")?;
    let engine = build_engine(&config, cli.start)?;

    match cli.command {
        Commands::At(args) => print_quote(&engine, &config, args.timestamp, cli.json)?,
        Commands::Now => print_quote(&engine, &config, SystemClock.now(), cli.json)?,
        Commands::Table => print_table(&engine, &config, cli.json)?,
        Commands::Check(args) => return check(&engine, &config, args, cli.json),
        Commands::Params => print_params(&engine, &config, cli.json)?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Build the schedule, taking the start from `--start`, then the config,
/// then the wall clock.
fn build_engine(config: &ScheduleConfig, start_override: Option<Timestamp>) -> Result<ScheduleEngine> {
    let builder = config.builder().context("Invalid schedule parameters")?;
    let builder = match start_override.or(config.schedule_start) {
        Some(start) => builder.schedule_start(start),
        None => {
            info!("no schedule start configured, starting the schedule now");
            builder.start_now(&SystemClock)
        }
    };
    let engine = builder.build().context("Failed to initialize schedule")?;
    debug!(start = engine.minimum_stake_schedule_start(), "schedule ready");
    Ok(engine)
}

fn quote(engine: &ScheduleEngine, at: Timestamp) -> Quote {
    Quote {
        at,
        minimum_stake: engine.current_minimum_stake(at),
        completed_steps: engine.completed_steps(at),
        next_step_at: engine.next_step_at(at),
    }
}

fn print_quote(
    engine: &ScheduleEngine,
    config: &ScheduleConfig,
    at: Timestamp,
    json: bool,
) -> Result<()> {
    let q = quote(engine, at);
    if json {
        return print_json(&q);
    }

    println!("Time:           {} ({})", format_timestamp(q.at), q.at);
    println!(
        "Minimum stake:  {} tokens",
        format_tokens(q.minimum_stake, config.decimals)
    );
    println!(
        "Steps:          {}/{}",
        q.completed_steps,
        engine.parameters().step_count()
    );
    match q.next_step_at {
        Some(next) => println!(
            "Next step:      {} (in {})",
            format_timestamp(next),
            format_duration(next.saturating_sub(at))
        ),
        None => println!("Next step:      none (floor reached)"),
    }
    Ok(())
}

fn print_table(engine: &ScheduleEngine, config: &ScheduleConfig, json: bool) -> Result<()> {
    let step_count = engine.parameters().step_count();
    if step_count >= MAX_TABLE_ROWS {
        bail!("schedule has {step_count} steps, too many to print (limit {MAX_TABLE_ROWS})");
    }

    if json {
        let rows: Vec<ScheduleStep> = engine.steps().collect();
        return print_json(&rows);
    }

    println!("{:>4}  {:<26}  {:>16}", "STEP", "STARTS AT", "MINIMUM (TOKENS)");
    for row in engine.steps() {
        println!(
            "{:>4}  {:<26}  {:>16}",
            row.index,
            format_timestamp(row.starts_at),
            format_tokens(row.minimum_stake, config.decimals)
        );
    }
    Ok(())
}

fn verdict(engine: &ScheduleEngine, stake: Amount, at: Timestamp) -> Verdict {
    let minimum_stake = engine.minimum_stake_at(at);
    Verdict {
        at,
        stake,
        minimum_stake,
        eligible: stake >= minimum_stake,
    }
}

/// Print the eligibility verdict. Exits with failure when the stake is
/// below the minimum.
fn check(
    engine: &ScheduleEngine,
    config: &ScheduleConfig,
    args: CheckArgs,
    json: bool,
) -> Result<ExitCode> {
    let stake = to_base_units(args.tokens, config.decimals).context("Stake amount overflows")?;
    let at = args.at.unwrap_or_else(|| SystemClock.now());
    let verdict = verdict(engine, stake, at);

    if json {
        print_json(&verdict)?;
    } else if verdict.eligible {
        println!(
            "Eligible: {} tokens meets the minimum of {} tokens",
            format_tokens(stake, config.decimals),
            format_tokens(verdict.minimum_stake, config.decimals)
        );
    } else {
        println!(
            "Not eligible: {} tokens is below the minimum of {} tokens",
            format_tokens(stake, config.decimals),
            format_tokens(verdict.minimum_stake, config.decimals)
        );
    }

    Ok(if verdict.eligible {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_params(engine: &ScheduleEngine, config: &ScheduleConfig, json: bool) -> Result<()> {
    if json {
        return print_json(engine);
    }

    let p = engine.parameters();
    println!("Initial minimum:  {} tokens", format_tokens(p.initial_amount(), config.decimals));
    println!("Floor minimum:    {} tokens", format_tokens(p.floor_amount(), config.decimals));
    println!("Steps:            {}", p.step_count());
    println!("Step length:      {}", format_duration(engine.step_duration()));
    println!(
        "Drop per step:    {} tokens",
        format_tokens(engine.decrement_per_step(), config.decimals)
    );
    println!(
        "Schedule start:   {} ({})",
        format_timestamp(engine.minimum_stake_schedule_start()),
        engine.minimum_stake_schedule_start()
    );
    println!(
        "Schedule end:     {} ({})",
        format_timestamp(engine.schedule_end()),
        engine.schedule_end()
    );
    Ok(())
}

/// Amounts are `u128`, which `serde_json::Value` cannot hold, so serialize
/// straight to text.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to encode JSON")?;
    println!("{text}");
    Ok(())
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Pass `format = "json"` for structured JSON output. Any other value
/// defaults to human-readable text. Logs go to stderr so they never mix
/// with command output.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
