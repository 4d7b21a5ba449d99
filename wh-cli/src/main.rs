//! WeatherHub CLI - the dashboard pipeline in the terminal.

use clap::Parser;
use wh_api::config::{ApiConfig, DEFAULT_HISTORY_LIMIT, LOCAL_API_BASE};

mod cmd;
mod output;

#[derive(Parser)]
#[command(
    name = "wh-cli",
    version,
    about = "Weather, activity plans and history from a WeatherHub API"
)]
struct Cli {
    /// Base URL of the WeatherHub API
    #[arg(long, env = "WEATHERHUB_API_BASE", default_value = LOCAL_API_BASE, global = true)]
    api_base: String,

    /// Number of history entries to request per list
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT, global = true)]
    limit: usize,

    #[command(subcommand)]
    command: cmd::Command,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = ApiConfig::new(cli.api_base);
    config.history_limit = cli.limit;

    // Dashboard timers run as local tasks.
    let local = tokio::task::LocalSet::new();
    local.run_until(cmd::run(cli.command, config)).await
}
