//! Subcommands. Each one drives the dashboard like a user would, waits for
//! the chart redraw to settle and prints the resulting screen.

use crate::output;
use clap::Subcommand;
use std::rc::Rc;
use std::time::Duration;
use wh_api::config::ApiConfig;
use wh_api::gateway::{Gateway, HttpTransport};
use wh_dashboard::charts::RecordingChartSink;
use wh_dashboard::controller::Dashboard;
use wh_dashboard::scheduler::REDRAW_QUIET_PERIOD;
use wh_dashboard::timer::TokioTimer;

type CliDashboard = Dashboard<HttpTransport, TokioTimer, RecordingChartSink>;

#[derive(Subcommand)]
pub enum Command {
    /// Current weather for a city, with forecast, history and charts
    Weather {
        /// City name
        city: String,
    },

    /// Activity plan for a city
    Plan {
        /// City name
        city: String,
    },

    /// Recent weather lookups and plans
    History,

    /// Probe the API health endpoint
    Health,

    /// Start-up view: health and history, optionally followed by weather and a plan
    Dashboard {
        /// Also fetch weather and a plan for this city
        #[arg(short, long)]
        city: Option<String>,
    },
}

/// Let the pending chart redraw fire before printing.
async fn settle(dashboard: &CliDashboard) {
    if dashboard.redraw().is_pending() {
        tokio::time::sleep(REDRAW_QUIET_PERIOD + Duration::from_millis(20)).await;
    }
}

pub async fn run(command: Command, config: ApiConfig) -> anyhow::Result<()> {
    let dashboard: CliDashboard = Dashboard::new(
        Gateway::from_config(&config),
        TokioTimer,
        Rc::new(RecordingChartSink::new()),
    );
    log::info!("Using API at {}", dashboard.gateway().transport().base_url());

    match command {
        Command::Weather { city } => {
            dashboard.fetch_weather(&city).await?;
            settle(&dashboard).await;
            let screen = dashboard.screen().snapshot();
            output::print_weather(&screen);
            output::print_forecast(&screen);
            output::print_history(&screen);
            output::print_charts(&screen);
        }
        Command::Plan { city } => {
            dashboard.fetch_plan(&city).await?;
            settle(&dashboard).await;
            let screen = dashboard.screen().snapshot();
            output::print_plan(&screen);
            output::print_forecast(&screen);
            output::print_history(&screen);
        }
        Command::History => {
            dashboard.refresh_history().await?;
            settle(&dashboard).await;
            let screen = dashboard.screen().snapshot();
            output::print_history(&screen);
            output::print_charts(&screen);
        }
        Command::Health => {
            dashboard.check_health().await;
            output::print_health(&dashboard.screen().snapshot());
        }
        Command::Dashboard { city } => {
            dashboard.initialize().await?;
            if let Some(city) = city {
                dashboard.fetch_weather(&city).await?;
                dashboard.fetch_plan(&city).await?;
            }
            settle(&dashboard).await;
            output::print_screen(&dashboard.screen().snapshot());
        }
    }
    Ok(())
}
