//! Backend endpoints and refresh cadence.

use std::time::Duration;

/// Paths served by the dashboard backend
pub struct EndpointPaths {
    pub cryptos: &'static str,
    pub bitcoin_kpis: &'static str,
    pub bitcoin_history: &'static str,
    pub proxies: &'static str,
}

/// Configuration for the backend REST client
pub struct ApiConfig {
    /// Used by the native build when neither `--api-base` nor `DASHBOARD_API_BASE` is set.
    /// The browser build always talks to the page origin.
    pub default_base_url: &'static str,
    pub endpoints: EndpointPaths,
    /// Per-request timeout (native only; the browser's fetch has its own)
    pub timeout_ms: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

pub const API: ApiConfig = ApiConfig {
    default_base_url: "http://127.0.0.1:5000",
    endpoints: EndpointPaths {
        cryptos: "/api/cryptos",
        bitcoin_kpis: "/api/bitcoin/kpis",
        bitcoin_history: "/api/bitcoin/history",
        proxies: "/api/proxies",
    },
    timeout_ms: 15_000,
};

/// Auto-refresh periods while the owning tab is active
pub struct PollConfig {
    pub market_refresh_ms: u64,
    /// KPIs only; history is fetched once and cached
    pub bitcoin_kpi_refresh_ms: u64,
}

impl PollConfig {
    pub fn market_period(&self) -> Duration {
        Duration::from_millis(self.market_refresh_ms)
    }

    pub fn bitcoin_period(&self) -> Duration {
        Duration::from_millis(self.bitcoin_kpi_refresh_ms)
    }
}

pub const POLL: PollConfig = PollConfig {
    market_refresh_ms: 60_000,
    bitcoin_kpi_refresh_ms: 60_000,
};
