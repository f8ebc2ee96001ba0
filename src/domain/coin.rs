use serde::Deserialize;
use strum_macros::{Display, EnumIter};

use crate::domain::lenient::{lenient_f64, non_empty_string};

/// One row of `/api/cryptos`, already ranked by market cap on the server.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CoinRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub market_cap: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price_change_1h: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price_change_24h: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price_change_7d: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price_change_30d: Option<f64>,
    /// Percent of total crypto market cap (0-100).
    #[serde(default, deserialize_with = "lenient_f64")]
    pub market_cap_share: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Look-back windows of the percent-change columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ChangeWindow {
    #[strum(to_string = "1h")]
    Hour,
    #[strum(to_string = "24h")]
    Day,
    #[strum(to_string = "7d")]
    Week,
    #[strum(to_string = "30d")]
    Month,
}

impl CoinRecord {
    pub fn is_bitcoin(&self) -> bool {
        self.symbol.trim().eq_ignore_ascii_case("btc")
    }

    pub fn price_change(&self, window: ChangeWindow) -> Option<f64> {
        match window {
            ChangeWindow::Hour => self.price_change_1h,
            ChangeWindow::Day => self.price_change_24h,
            ChangeWindow::Week => self.price_change_7d,
            ChangeWindow::Month => self.price_change_30d,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_row_with_nulls() {
        let json = r#"{
            "id": "bitcoin", "symbol": "btc", "name": "Bitcoin",
            "image": "https://assets.example.com/btc.png",
            "price": 104250.12, "market_cap": 2070000000000,
            "price_change_1h": 0.12, "price_change_24h": -1.5,
            "price_change_7d": null, "price_change_30d": 8.25,
            "market_cap_share": 61.7, "last_updated": "2025-06-01T12:00:00+00:00"
        }"#;

        let coin: CoinRecord = serde_json::from_str(json).expect("coin row should decode");
        assert!(coin.is_bitcoin());
        assert_eq!(coin.price_change(ChangeWindow::Day), Some(-1.5));
        assert_eq!(coin.price_change(ChangeWindow::Week), None);
        assert_eq!(coin.market_cap_share, Some(61.7));
    }

    #[test]
    fn bitcoin_match_ignores_case_only() {
        let coin = |symbol: &str| CoinRecord {
            symbol: symbol.to_string(),
            ..Default::default()
        };
        assert!(coin("BTC").is_bitcoin());
        assert!(coin("Btc").is_bitcoin());
        assert!(!coin("wbtc").is_bitcoin());
    }
}
