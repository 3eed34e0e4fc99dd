use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config::WeekStartSetting;

/// Calendar month picker engine, driven from the terminal.
#[derive(Parser)]
#[command(
    name = "monthgrid",
    version,
    about = "Lay out a calendar month and track its marks"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the grid of a month with its marks.
    Show(ShowArgs),
    /// Resolve a click on a grid cell to a date.
    Click(ClickArgs),
}

/// Options shared by every subcommand that displays a month.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Path to TOML configuration file (default: ./monthgrid.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Year to display (default: today's year).
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Month to display, 1..=12 (default: today's month).
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: Option<u8>,

    /// Override the configured first day of the week.
    #[arg(short, long, value_enum)]
    pub week_start: Option<WeekStartSetting>,

    /// Pretend today is this date (YYYY-MM-DD) instead of the local date.
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub month: MonthArgs,

    /// Select this date (YYYY-MM-DD); must fall in the displayed month.
    #[arg(short, long)]
    pub select: Option<NaiveDate>,

    /// Apply a custom style, as DATE=STYLE (e.g. 2024-02-14=1). Repeatable.
    #[arg(long = "mark", value_parser = parse_mark)]
    pub marks: Vec<(NaiveDate, u32)>,
}

/// Arguments for the `click` subcommand.
#[derive(clap::Args)]
pub struct ClickArgs {
    #[command(flatten)]
    pub month: MonthArgs,

    /// Zero-based cell index in the 6x7 grid.
    #[arg(long)]
    pub cell: usize,

    /// Treat the click as a long press (reports without selecting).
    #[arg(long)]
    pub long: bool,
}

fn parse_mark(s: &str) -> Result<(NaiveDate, u32), String> {
    let (date, style) = s
        .split_once('=')
        .ok_or_else(|| format!("expected DATE=STYLE, got '{s}'"))?;
    let date = date
        .parse::<NaiveDate>()
        .map_err(|e| format!("invalid date '{date}': {e}"))?;
    let style = style
        .parse::<u32>()
        .map_err(|e| format!("invalid style '{style}': {e}"))?;
    Ok((date, style))
}
