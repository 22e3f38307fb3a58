//! `export`: filtered records as CSV, with the data table's columns.

use crate::filters::{self, FilterArg};
use crate::{source, SourceArgs};
use bex_views::table::{project, Column};
use bex_views::Dashboard;
use log::info;
use std::io::Write;

pub async fn run_export(
    args: &SourceArgs,
    filters: &[FilterArg],
    output: &str,
) -> anyhow::Result<()> {
    let dashboard = source::load_dashboard(args).await?;
    filters::apply(&dashboard, filters);

    let file = std::fs::File::create(output)?;
    let rows = write_csv(&dashboard, file)?;
    info!("Export complete: {} records written to {}", rows, output);
    Ok(())
}

/// Write the header and one row per filtered record. Returns the row count.
pub fn write_csv<W: Write>(dashboard: &Dashboard, writer: W) -> anyhow::Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(Column::ALL.iter().map(|c| c.label()))?;

    let records = dashboard.filtered_records();
    for record in &records {
        wtr.write_record(project(record))?;
    }
    wtr.flush()?;
    Ok(records.len())
}
