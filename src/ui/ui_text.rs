/// All user-facing strings in one place
pub struct UiText {
    pub app_title: &'static str,

    // Tabs
    pub tab_market: &'static str,
    pub tab_bitcoin: &'static str,
    pub tab_proxies: &'static str,

    // Market table
    pub market_heading: &'static str,
    pub col_rank: &'static str,
    pub col_name: &'static str,
    pub col_price: &'static str,
    pub col_market_cap: &'static str,
    pub col_share: &'static str,
    pub col_last_updated: &'static str,

    // Bitcoin
    pub bitcoin_heading: &'static str,
    pub chart_heading: &'static str,
    pub kpi_price: &'static str,
    pub kpi_change: &'static str,
    pub kpi_market_cap: &'static str,
    pub kpi_volume: &'static str,
    pub kpi_dominance: &'static str,
    pub kpi_supply: &'static str,
    pub kpi_max_supply: &'static str,
    pub kpi_ath: &'static str,
    pub kpi_from_ath: &'static str,
    pub kpi_high_24h: &'static str,
    pub kpi_low_24h: &'static str,
    pub kpi_last_updated: &'static str,
    pub plot_price_line: &'static str,
    pub plot_y_axis: &'static str,
    pub chart_waiting: &'static str,

    // Proxies
    pub proxies_heading: &'static str,
    pub treasuries_heading: &'static str,
    pub etfs_heading: &'static str,
    pub miners_heading: &'static str,
    pub data_as_of: &'static str,
    pub col_ticker: &'static str,
    pub col_country: &'static str,
    pub col_btc: &'static str,
    pub col_usd: &'static str,
    pub col_pct_21m: &'static str,
    pub col_filing: &'static str,
    pub filing_link: &'static str,
    pub no_rows: &'static str,

    // Status
    pub loading: &'static str,
    pub load_failed: &'static str,
    pub status_backend: &'static str,
    pub status_in_flight: &'static str,
    pub status_next_refresh: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Crypto Dashboard",

    tab_market: "Market",
    tab_bitcoin: "Bitcoin",
    tab_proxies: "Proxies",

    market_heading: "Top Cryptocurrencies",
    col_rank: "#",
    col_name: "Name",
    col_price: "Price",
    col_market_cap: "Market Cap",
    col_share: "Share",
    col_last_updated: "Last Updated",

    bitcoin_heading: "Bitcoin",
    chart_heading: "Price History",
    kpi_price: "Price",
    kpi_change: "24h Change",
    kpi_market_cap: "Market Cap",
    kpi_volume: "24h Volume",
    kpi_dominance: "Dominance",
    kpi_supply: "Circulating Supply",
    kpi_max_supply: "Max Supply",
    kpi_ath: "All-Time High",
    kpi_from_ath: "From ATH",
    kpi_high_24h: "24h High",
    kpi_low_24h: "24h Low",
    kpi_last_updated: "Last Updated",
    plot_price_line: "BTC Price (USD)",
    plot_y_axis: "USD",
    chart_waiting: "Waiting for price history...",

    proxies_heading: "Bitcoin Proxies",
    treasuries_heading: "Treasuries",
    etfs_heading: "ETFs",
    miners_heading: "Miners",
    data_as_of: "Data as of",
    col_ticker: "Ticker",
    col_country: "Country",
    col_btc: "BTC",
    col_usd: "Value (USD)",
    col_pct_21m: "% of 21M",
    col_filing: "Filing",
    filing_link: "View",
    no_rows: "No entries",

    loading: "Loading...",
    load_failed: "Could not load data",
    status_backend: "Backend",
    status_in_flight: "Requests in flight",
    status_next_refresh: "Next refresh in",
};
