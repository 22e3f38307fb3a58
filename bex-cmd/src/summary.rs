//! `summary`: per-axis breakdown plus the sum readout.

use crate::filters::{self, FilterArg};
use crate::{source, SourceArgs};
use bex_views::{title, Axis, Dashboard};
use std::fmt::Write;

pub async fn run_summary(args: &SourceArgs, filters: &[FilterArg]) -> anyhow::Result<()> {
    let dashboard = source::load_dashboard(args).await?;
    filters::apply(&dashboard, filters);
    print!("{}", render_summary(&dashboard));
    Ok(())
}

/// Each axis's entries in select-menu order, then the totals.
pub fn render_summary(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    for axis in Axis::ALL {
        let _ = writeln!(out, "{}", axis.label());
        for entry in dashboard.ranked(axis) {
            let _ = writeln!(out, "  {}", title(&entry.key, entry.value));
        }
        out.push('\n');
    }

    let counter = dashboard.record_counter();
    let _ = writeln!(out, "Sum: {}", dashboard.sum_text());
    let _ = writeln!(out, "Records: {} of {}", counter.filtered, counter.total);
    out
}
