use strum::IntoEnumIterator;

use crate::domain::CoinRecord;
use crate::domain::coin::ChangeWindow;
use crate::utils::{
    dollars, format_local_timestamp, format_market_cap, format_percent, format_price,
};

/// Identifier of the market table (`#crypto-table`).
pub const TABLE_ID: &str = "crypto-table";

/// Sign styling of a percent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Zero counts as positive
    Positive,
    Negative,
    /// Value missing
    Flat,
}

impl Trend {
    pub fn of(value: Option<f64>) -> Self {
        match value.filter(|v| v.is_finite()) {
            Some(v) if v >= 0.0 => Trend::Positive,
            Some(_) => Trend::Negative,
            None => Trend::Flat,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeCell {
    pub window: ChangeWindow,
    pub text: String,
    pub trend: Trend,
}

/// Market-cap share cell: a label plus a proportional bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareBar {
    pub label: String,
    /// Raw percent as served; not validated.
    pub percent: f64,
}

impl ShareBar {
    /// Bar fill, clamped to [0, 1] at draw time only.
    pub fn fill(&self) -> f32 {
        (self.percent / 100.0).clamp(0.0, 1.0) as f32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketRow {
    /// 1-based position in the server's ordering
    pub rank: usize,
    pub name: String,
    pub symbol: String,
    pub icon_url: Option<String>,
    pub price: String,
    pub market_cap: String,
    pub changes: Vec<ChangeCell>,
    pub share: ShareBar,
    pub last_updated: String,
    /// Bitcoin's row is highlighted wherever it ranks
    pub highlighted: bool,
}

impl MarketRow {
    pub fn rank_label(&self) -> String {
        self.rank.to_string()
    }

    pub fn row_class(&self) -> &'static str {
        if self.highlighted { "bitcoin-row" } else { "" }
    }
}

/// Builds the whole table body from one `/api/cryptos` response.
/// Rebuilding from the same input yields the same rows.
pub fn build_market_rows(coins: &[CoinRecord]) -> Vec<MarketRow> {
    coins
        .iter()
        .enumerate()
        .map(|(index, coin)| MarketRow {
            rank: index + 1,
            name: coin.name.clone(),
            symbol: coin.symbol.to_uppercase(),
            icon_url: coin.image.clone(),
            price: dollars(format_price(coin.price)),
            market_cap: dollars(format_market_cap(coin.market_cap)),
            changes: ChangeWindow::iter()
                .map(|window| {
                    let value = coin.price_change(window);
                    ChangeCell {
                        window,
                        text: format_percent(value),
                        trend: Trend::of(value),
                    }
                })
                .collect(),
            share: ShareBar {
                label: format_percent(coin.market_cap_share),
                percent: coin.market_cap_share.unwrap_or(0.0),
            },
            last_updated: format_local_timestamp(coin.last_updated.as_deref()),
            highlighted: coin.is_bitcoin(),
        })
        .collect()
}
