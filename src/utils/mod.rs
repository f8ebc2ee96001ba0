// Formatting and time helpers shared by the view models and the UI
pub mod app_time;
pub mod format;

pub use format::{
    PLACEHOLDER, coerce_number, dollars, format_local_timestamp, format_market_cap, format_percent,
    format_price,
};
