#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::ApiClient;
pub use domain::{Tab, Timeframe};
pub use error::{DashboardError, FetchError};
pub use ui::{DashboardApp, StartupOverrides};
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

use crate::config::API;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the dashboard backend
    #[arg(long, env = "DASHBOARD_API_BASE", default_value = API.default_base_url)]
    pub api_base: String,

    /// Tab to open on start-up (overrides the saved one)
    #[arg(long, value_enum)]
    pub tab: Option<Tab>,

    /// Chart window in days (overrides the saved one)
    #[arg(long, value_enum)]
    pub timeframe: Option<Timeframe>,
}

impl Cli {
    pub fn overrides(&self) -> StartupOverrides {
        StartupOverrides {
            tab: self.tab,
            timeframe: self.timeframe,
        }
    }
}

/// Main application entry point - creates the GUI app.
/// Fails if `api_base` is not a usable base URL.
pub fn run_app(
    cc: &eframe::CreationContext,
    api_base: &str,
    overrides: StartupOverrides,
) -> anyhow::Result<Box<dyn eframe::App>> {
    let client = ApiClient::new(api_base)?;
    let app = DashboardApp::new(cc, client, overrides);
    Ok(Box::new(app))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_local_backend() {
        let cli = Cli::try_parse_from(["crypto-dashboard"]).expect("defaults should parse");
        assert_eq!(cli.tab, None);
        assert_eq!(cli.timeframe, None);
        assert!(cli.api_base.starts_with("http"));
    }

    #[test]
    fn cli_accepts_tab_and_timeframe() {
        let cli = Cli::try_parse_from([
            "crypto-dashboard",
            "--tab",
            "bitcoin",
            "--timeframe",
            "90",
            "--api-base",
            "http://10.0.0.5:5000",
        ])
        .expect("flags should parse");

        let overrides = cli.overrides();
        assert_eq!(overrides.tab, Some(Tab::Bitcoin));
        assert_eq!(overrides.timeframe, Some(Timeframe::Days90));
        assert_eq!(cli.api_base, "http://10.0.0.5:5000");
    }
}
