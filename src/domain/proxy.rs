use serde::{Deserialize, Deserializer};

use crate::domain::lenient::{lenient_f64, non_empty_string};

/// Category of a Bitcoin proxy holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProxyKind {
    Treasury,
    Etf,
    Miner,
    /// Anything the dashboard has no table for
    #[default]
    Other,
}

impl ProxyKind {
    /// Tables shown on the proxies tab, in display order.
    pub const GROUPS: [ProxyKind; 3] = [ProxyKind::Treasury, ProxyKind::Etf, ProxyKind::Miner];

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "treasury" | "treasuries" => ProxyKind::Treasury,
            "etf" | "etfs" => ProxyKind::Etf,
            "miner" | "miners" => ProxyKind::Miner,
            _ => ProxyKind::Other,
        }
    }

    /// Stable identifier of the table this kind renders into.
    pub fn table_id(&self) -> &'static str {
        match self {
            ProxyKind::Treasury => "treasuries-table",
            ProxyKind::Etf => "etfs-table",
            ProxyKind::Miner => "miners-table",
            ProxyKind::Other => "other-table",
        }
    }
}

impl<'de> Deserialize<'de> for ProxyKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(ProxyKind::parse).unwrap_or_default())
    }
}

/// One holder from `/api/proxies`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProxyRecord {
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ProxyKind,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub country: Option<String>,
    /// Icon URL
    #[serde(default, deserialize_with = "non_empty_string")]
    pub country_flag: Option<String>,
    /// Holdings in BTC
    #[serde(default, deserialize_with = "lenient_f64")]
    pub btc: Option<f64>,
    /// Holdings value in USD
    #[serde(default, deserialize_with = "lenient_f64")]
    pub usd: Option<f64>,
    /// Share of the 21M supply, percent
    #[serde(default, deserialize_with = "lenient_f64")]
    pub pct_21m: Option<f64>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub filing_link: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parsing_is_case_insensitive() {
        assert_eq!(ProxyKind::parse("ETF"), ProxyKind::Etf);
        assert_eq!(ProxyKind::parse(" treasury "), ProxyKind::Treasury);
        assert_eq!(ProxyKind::parse("Miners"), ProxyKind::Miner);
        assert_eq!(ProxyKind::parse("sovereign"), ProxyKind::Other);
    }

    #[test]
    fn decodes_scraped_row() {
        let json = r#"{
            "ticker": "MSTR", "name": "Strategy", "type": "treasury",
            "btc": "592,345", "usd": 61500000000.0, "price": 380.5,
            "country": "US", "country_flag": "https://flags.example.com/us.svg",
            "pct_21m": 2.82, "filing_link": "", "last_updated": "2025-06-01T10:00:00+00:00"
        }"#;

        let proxy: ProxyRecord = serde_json::from_str(json).expect("proxy row should decode");
        assert_eq!(proxy.kind, ProxyKind::Treasury);
        assert_eq!(proxy.btc, Some(592_345.0));
        assert_eq!(proxy.filing_link, None);
        assert_eq!(proxy.country.as_deref(), Some("US"));
    }

    #[test]
    fn missing_or_null_type_is_other() {
        let proxy: ProxyRecord =
            serde_json::from_str(r#"{"ticker": "X", "type": null}"#).expect("should decode");
        assert_eq!(proxy.kind, ProxyKind::Other);
    }
}
