//! Budget Explorer CLI - cross-filtered summaries of expenditure data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bex-cli",
    version,
    about = "Budget expenditure explorer toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: bex_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    bex_cmd::run(cli.command).await
}
