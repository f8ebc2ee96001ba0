use serde::Deserialize;

use crate::domain::lenient::lenient_f64;

/// Summary metrics from `/api/bitcoin/kpis`.
///
/// Every numeric field is optional and decoded leniently: depending on how
/// the backend cache was populated, `ath` in particular may arrive as a
/// pre-formatted string instead of a number.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct BitcoinKpis {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub change_24h: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub market_cap: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub volume_24h: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub dominance: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub circulating_supply: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub max_supply: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ath: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub from_ath_pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub high_24h: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub low_24h: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// One daily close from `/api/bitcoin/history`, ordered oldest to newest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryPoint {
    /// Calendar day, `YYYY-MM-DD`.
    pub date: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
}

impl HistoryPoint {
    pub fn new(date: impl Into<String>, price: f64) -> Self {
        Self {
            date: date.into(),
            price: Some(price),
        }
    }
}
