//! Show command: print a month grid with its marks.

use anyhow::{Context, Result};
use monthgrid_marks::StyleId;
use tracing::{info, info_span};

use crate::cli::ShowArgs;
use crate::picker::{build_tracker, to_calendar_date};
use crate::{config, render};

/// Run the show command.
pub fn run(args: ShowArgs) -> Result<()> {
    let _cmd = info_span!("show").entered();
    let config = config::load(args.month.config.as_deref())?;
    let mut tracker = build_tracker(&args.month, &config)?;

    for &(date, style) in &args.marks {
        let date = to_calendar_date(date)?;
        tracker
            .apply_custom_style(date, StyleId::new(style))
            .with_context(|| format!("cannot mark {date}"))?;
    }

    if let Some(date) = args.select {
        let date = to_calendar_date(date)?;
        let repaint = tracker
            .select(date)
            .with_context(|| format!("cannot select {date}"))?;
        info!(%date, cell = repaint.current(), "selected");
    }

    print!("{}", render::render(&tracker)?);
    Ok(())
}
