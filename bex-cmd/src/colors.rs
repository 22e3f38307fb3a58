//! `colors`: the ordinal color assignments.

use crate::{source, SourceArgs};
use bex_views::{Dashboard, OrdinalScale};
use std::fmt::Write;

pub async fn run_colors(args: &SourceArgs) -> anyhow::Result<()> {
    let dashboard = source::load_dashboard(args).await?;
    print!("{}", render_colors(&dashboard));
    Ok(())
}

fn write_scale(out: &mut String, heading: &str, scale: &OrdinalScale) {
    let _ = writeln!(out, "{}", heading);
    for (value, color) in scale.assignments() {
        let _ = writeln!(out, "  {}\t{}", color, value);
    }
}

pub fn render_colors(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    write_scale(&mut out, "Departments", dashboard.department_colors());
    out.push('\n');
    write_scale(&mut out, "Branches & Programs", dashboard.branch_program_colors());
    out
}
