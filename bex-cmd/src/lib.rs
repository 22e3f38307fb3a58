//! Command implementations for the Budget Explorer CLI.
//!
//! Every command loads the dataset and palette, builds the same cross-filtered
//! `Dashboard` the browser uses, applies any `--filter` arguments and then
//! reports on the result.

use clap::{Args, Subcommand};

pub mod colors;
pub mod export;
pub mod filters;
pub mod source;
pub mod summary;

pub use filters::FilterArg;

/// Where to read the two input files from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Expenditure records JSON (path or http(s) URL, optionally gzipped)
    #[arg(short = 'd', long)]
    pub data: String,

    /// Sunburst palette JSON (path or URL); defaults to the bundled palette
    #[arg(short = 'p', long)]
    pub palette: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print each axis's budget breakdown and the filtered total
    Summary {
        #[command(flatten)]
        source: SourceArgs,

        /// Filter as axis=value (axes: department, year, fund-type, branch-program)
        #[arg(short = 'f', long = "filter", value_parser = filters::parse_filter)]
        filters: Vec<FilterArg>,
    },

    /// Write the filtered records as CSV
    Export {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(short = 'f', long = "filter", value_parser = filters::parse_filter)]
        filters: Vec<FilterArg>,

        /// Output CSV path
        #[arg(short = 'o', long)]
        output: String,
    },

    /// Print the department and branch/program color assignments
    Colors {
        #[command(flatten)]
        source: SourceArgs,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { source, filters } => summary::run_summary(&source, &filters).await,
        Command::Export {
            source,
            filters,
            output,
        } => export::run_export(&source, &filters, &output).await,
        Command::Colors { source } => colors::run_colors(&source).await,
    }
}
