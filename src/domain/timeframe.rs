use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Selectable look-back window for the Bitcoin history chart.
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
    Display,
    EnumIter,
    clap::ValueEnum,
)]
pub enum Timeframe {
    #[strum(to_string = "30D")]
    #[value(name = "30")]
    Days30,
    #[strum(to_string = "90D")]
    #[value(name = "90")]
    Days90,
    #[default]
    #[strum(to_string = "1Y")]
    #[value(name = "365")]
    Days365,
    #[strum(to_string = "10Y")]
    #[value(name = "3650")]
    Days3650,
}

impl Timeframe {
    /// Number of daily points the window covers.
    pub fn days(&self) -> usize {
        match self {
            Timeframe::Days30 => 30,
            Timeframe::Days90 => 90,
            Timeframe::Days365 => 365,
            Timeframe::Days3650 => 3650,
        }
    }

    /// The most recent `days()` entries of `history`, in original order.
    /// Shorter histories are returned whole; nothing is padded.
    pub fn window<'a, T>(&self, history: &'a [T]) -> &'a [T] {
        let start = history.len().saturating_sub(self.days());
        &history[start..]
    }
}
