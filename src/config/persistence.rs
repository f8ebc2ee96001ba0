//! App state persistence configuration

pub struct PersistenceConfig {
    /// Path for saving/loading the UI state (active tab, chart timeframe) in native builds
    pub app_state_path: &'static str,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app_state_path: ".dashboard_state.json",
};
