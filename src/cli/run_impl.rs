use anyhow::{Context, Result};

use crate::formatters;
use crate::input;
use crate::output::Destination;
use crate::types::FlipReport;

use super::Args;

pub fn run_with_args(args: &Args) -> Result<()> {
    let value = input::parse_value(&args.intval)?;
    let flips = args.flips();
    log::debug!("value={value} flips={flips:?}");

    let mut out = Destination::open(args.output.as_deref())?;

    let report = FlipReport::compute(value, flips);
    for f in &report.flips {
        log::trace!(
            "{:016b} ^ {:016b} = {:016b}",
            report.value,
            f.mask,
            f.value
        );
    }

    let s = render(&report, args)?;
    out.emit(&s)?;
    out.finish()?;
    Ok(())
}

/// Render `report` in the format selected by `args`.
pub fn render(report: &FlipReport, args: &Args) -> Result<String> {
    if args.json {
        let mut s = serde_json::to_string_pretty(report).context("serializing report")?;
        s.push('\n');
        return Ok(s);
    }
    if args.csv {
        return Ok(formatters::csv::format(report));
    }

    // default text lines
    Ok(formatters::text::format(report))
}
