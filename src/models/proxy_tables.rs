use chrono::{DateTime, Utc};

use crate::domain::{ProxyKind, ProxyRecord};
use crate::utils::format::parse_timestamp;
use crate::utils::{
    PLACEHOLDER, dollars, format_local_timestamp, format_market_cap, format_percent, format_price,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ProxyRow {
    pub ticker: String,
    pub name: String,
    pub country: String,
    pub flag_url: Option<String>,
    pub btc: String,
    pub usd: String,
    pub pct_21m: String,
    pub price: String,
    /// Only present when the backend supplied a non-empty link
    pub filing_link: Option<String>,
    pub last_updated: String,
}

impl ProxyRow {
    fn from_record(record: &ProxyRecord) -> Self {
        Self {
            ticker: record.ticker.clone(),
            name: record.name.clone(),
            country: record
                .country
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            flag_url: record.country_flag.clone(),
            btc: format_market_cap(record.btc),
            usd: dollars(format_market_cap(record.usd)),
            pct_21m: format_percent(record.pct_21m),
            price: dollars(format_price(record.price)),
            filing_link: record.filing_link.clone(),
            last_updated: format_local_timestamp(record.last_updated.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProxyTable {
    pub kind: ProxyKind,
    pub rows: Vec<ProxyRow>,
}

impl ProxyTable {
    pub fn id(&self) -> &'static str {
        self.kind.table_id()
    }
}

/// The proxies tab: treasuries, ETFs and miners, in that order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProxyTables {
    pub tables: Vec<ProxyTable>,
    /// Newest `last_updated` across every record, local time
    pub data_as_of: Option<String>,
    /// Records with a type no table accepts
    pub skipped: usize,
}

impl ProxyTables {
    pub fn build(records: &[ProxyRecord]) -> Self {
        let tables = ProxyKind::GROUPS
            .iter()
            .map(|&kind| ProxyTable {
                kind,
                rows: records
                    .iter()
                    .filter(|record| record.kind == kind)
                    .map(ProxyRow::from_record)
                    .collect(),
            })
            .collect();

        let skipped = records
            .iter()
            .filter(|record| record.kind == ProxyKind::Other)
            .count();
        if skipped > 0 {
            log::debug!("Skipped {} proxy records of unknown type", skipped);
        }

        Self {
            tables,
            data_as_of: latest_update(records)
                .map(|utc| format_local_timestamp(Some(&utc.to_rfc3339()))),
            skipped,
        }
    }

    pub fn table(&self, kind: ProxyKind) -> Option<&ProxyTable> {
        self.tables.iter().find(|table| table.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(|table| table.rows.is_empty())
    }
}

/// Latest parseable `last_updated` across all records.
pub fn latest_update(records: &[ProxyRecord]) -> Option<DateTime<Utc>> {
    records
        .iter()
        .filter_map(|record| record.last_updated.as_deref())
        .filter_map(|raw| parse_timestamp(raw.trim()))
        .max()
}
