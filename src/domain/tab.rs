use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Top-level dashboard views. The string form (`market`, `bitcoin`,
/// `proxies`) is also what the browser build reads from the URL fragment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Market,
    Bitcoin,
    Proxies,
}

impl Tab {
    /// Parses a URL fragment such as `#bitcoin`.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        fragment.trim_start_matches('#').trim().parse().ok()
    }
}
