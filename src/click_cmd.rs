//! Click command: resolve a grid cell to a date.

use anyhow::Result;
use monthgrid_marks::ClickKind;
use tracing::{info, info_span};

use crate::cli::ClickArgs;
use crate::picker::build_tracker;
use crate::{config, render};

/// Run the click command.
pub fn run(args: ClickArgs) -> Result<()> {
    let _cmd = info_span!("click").entered();
    let config = config::load(args.month.config.as_deref())?;
    let mut tracker = build_tracker(&args.month, &config)?;

    let kind = if args.long {
        ClickKind::LongPress
    } else {
        ClickKind::Tap
    };

    match tracker.click(args.cell, kind)? {
        Some(outcome) => {
            info!(
                cell = args.cell,
                date = %outcome.date(),
                ?kind,
                select_on_click = tracker.config().select_on_click(),
                "cell resolved"
            );
            println!("{}", outcome.date());
        }
        None => println!("no date at cell {}", args.cell),
    }
    print!("{}", render::render(&tracker)?);
    Ok(())
}
