// Wire records returned by the dashboard backend, plus the tab/timeframe value objects
pub mod bitcoin;
pub mod coin;
pub mod lenient;
pub mod proxy;
pub mod tab;
pub mod timeframe;

// Re-export commonly used types
pub use bitcoin::{BitcoinKpis, HistoryPoint};
pub use coin::CoinRecord;
pub use proxy::{ProxyKind, ProxyRecord};
pub use tab::Tab;
pub use timeframe::Timeframe;
