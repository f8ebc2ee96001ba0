// Backend access
pub mod api;

// Re-export commonly used types
pub use api::{ApiClient, BitcoinHistory, BitcoinKpisEndpoint, BodyShape, Cryptos, Endpoint, Proxies};
