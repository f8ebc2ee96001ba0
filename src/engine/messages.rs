use std::time::Duration;

use crate::domain::{BitcoinKpis, CoinRecord, HistoryPoint, ProxyRecord};
use crate::engine::sequence::RequestId;
use crate::error::FetchError;

/// One backend resource the dashboard loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadRequest {
    Market,
    BitcoinKpis,
    BitcoinHistory,
    Proxies,
}

/// Why a load was issued. Decides how a failure is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Entering a tab (or start-up); failures show inline
    TabEntry,
    /// Periodic refresh; failures are logged and the stale view kept
    Poll,
}

/// A load handed to the fetch worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadJob {
    pub request: LoadRequest,
    pub origin: LoadOrigin,
    pub id: RequestId,
}

/// Decoded body of a finished load
#[derive(Debug)]
pub enum Payload {
    Market(Vec<CoinRecord>),
    BitcoinKpis(BitcoinKpis),
    BitcoinHistory(Vec<HistoryPoint>),
    Proxies(Vec<ProxyRecord>),
}

/// The result returned by the fetch worker
#[derive(Debug)]
pub struct LoadResult {
    pub job: LoadJob,
    pub duration: Duration,
    pub result: Result<Payload, FetchError>,
}
