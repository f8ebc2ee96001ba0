// View models: backend records turned into display-ready rows, slots and series
pub mod bitcoin_chart;
pub mod bitcoin_panel;
pub mod market_table;
pub mod proxy_tables;

// Re-export main types
pub use bitcoin_chart::{AthOverlay, ChartHandle};
pub use bitcoin_panel::{KpiPanel, KpiSlot};
pub use market_table::{MarketRow, Trend, build_market_rows};
pub use proxy_tables::{ProxyRow, ProxyTable, ProxyTables};
