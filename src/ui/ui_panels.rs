use eframe::egui::{Grid, Image, ProgressBar, RichText, Ui, vec2};
use strum::IntoEnumIterator;

use crate::domain::{ProxyKind, Tab, Timeframe};
use crate::models::bitcoin_panel::KpiValue;
use crate::models::market_table::TABLE_ID;
use crate::models::{KpiPanel, KpiSlot, MarketRow, ProxyTable, ProxyTables};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::{UiStyleExt, trend_color};
use crate::utils::PLACEHOLDER;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// The tab strip. Emits the tab the user clicked.
pub struct TabStrip {
    active: Tab,
}

impl TabStrip {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }
}

impl Panel for TabStrip {
    type Event = Tab;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            for tab in Tab::iter() {
                if ui
                    .selectable_label(tab == self.active, RichText::new(tab_label(tab)).strong())
                    .clicked()
                {
                    events.push(tab);
                }
            }
        });
        events
    }
}

/// The timeframe buttons above the Bitcoin chart.
pub struct TimeframeSelector {
    current: Timeframe,
}

impl TimeframeSelector {
    pub fn new(current: Timeframe) -> Self {
        Self { current }
    }
}

impl Panel for TimeframeSelector {
    type Event = Timeframe;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            for timeframe in Timeframe::iter() {
                if ui
                    .selectable_label(timeframe == self.current, timeframe.to_string())
                    .clicked()
                    && timeframe != self.current
                {
                    events.push(timeframe);
                }
            }
        });
        events
    }
}

pub fn tab_label(tab: Tab) -> &'static str {
    match tab {
        Tab::Market => UI_TEXT.tab_market,
        Tab::Bitcoin => UI_TEXT.tab_bitcoin,
        Tab::Proxies => UI_TEXT.tab_proxies,
    }
}

fn icon(ui: &mut Ui, url: Option<&str>) {
    let size = vec2(UI_CONFIG.icon_size, UI_CONFIG.icon_size);
    match url {
        Some(url) => {
            ui.add(Image::from_uri(url.to_owned()).fit_to_exact_size(size));
        }
        None => {
            ui.allocate_space(size);
        }
    }
}

/// The market table. Bitcoin's row is tinted wherever it ranks.
pub fn market_table(ui: &mut Ui, rows: &[MarketRow]) {
    let columns = 6 + rows.first().map(|row| row.changes.len()).unwrap_or(4);

    Grid::new(TABLE_ID)
        .striped(true)
        .num_columns(columns)
        .spacing([14.0, 6.0])
        .show(ui, |ui| {
            ui.label_subdued(UI_TEXT.col_rank);
            ui.label_subdued(UI_TEXT.col_name);
            ui.label_subdued(UI_TEXT.col_price);
            ui.label_subdued(UI_TEXT.col_market_cap);
            if let Some(first) = rows.first() {
                for cell in &first.changes {
                    ui.label_subdued(cell.window.to_string());
                }
            }
            ui.label_subdued(UI_TEXT.col_share);
            ui.label_subdued(UI_TEXT.col_last_updated);
            ui.end_row();

            for row in rows {
                let name_color = if row.highlighted {
                    UI_CONFIG.colors.bitcoin_row
                } else {
                    ui.visuals().text_color()
                };

                ui.label(row.rank_label());
                ui.horizontal(|ui| {
                    icon(ui, row.icon_url.as_deref());
                    ui.label(RichText::new(&row.name).strong().color(name_color));
                    ui.label_subdued(&row.symbol);
                });
                ui.label(RichText::new(&row.price).color(name_color));
                ui.label(&row.market_cap);
                for cell in &row.changes {
                    ui.label_trend(&cell.text, cell.trend);
                }
                ui.add(
                    ProgressBar::new(row.share.fill())
                        .desired_width(UI_CONFIG.share_bar_width)
                        .text(&row.share.label),
                );
                ui.label_subdued(&row.last_updated);
                ui.end_row();
            }
        });
}

fn kpi_label(slot: KpiSlot) -> &'static str {
    match slot {
        KpiSlot::Price => UI_TEXT.kpi_price,
        KpiSlot::Change24h => UI_TEXT.kpi_change,
        KpiSlot::MarketCap => UI_TEXT.kpi_market_cap,
        KpiSlot::Volume24h => UI_TEXT.kpi_volume,
        KpiSlot::Dominance => UI_TEXT.kpi_dominance,
        KpiSlot::CirculatingSupply => UI_TEXT.kpi_supply,
        KpiSlot::MaxSupply => UI_TEXT.kpi_max_supply,
        KpiSlot::Ath => UI_TEXT.kpi_ath,
        KpiSlot::FromAth => UI_TEXT.kpi_from_ath,
        KpiSlot::High24h => UI_TEXT.kpi_high_24h,
        KpiSlot::Low24h => UI_TEXT.kpi_low_24h,
        KpiSlot::LastUpdated => UI_TEXT.kpi_last_updated,
    }
}

/// KPI tiles, `kpi_columns` per row.
pub fn kpi_grid(ui: &mut Ui, panel: &KpiPanel) {
    Grid::new("kpi-grid")
        .num_columns(UI_CONFIG.kpi_columns)
        .spacing([28.0, 12.0])
        .show(ui, |ui| {
            for (i, value) in panel.values().iter().enumerate() {
                kpi_tile(ui, value);
                if (i + 1) % UI_CONFIG.kpi_columns == 0 {
                    ui.end_row();
                }
            }
        });
}

fn kpi_tile(ui: &mut Ui, value: &KpiValue) {
    let color = if value.slot.is_signed() {
        trend_color(value.trend)
    } else {
        ui.visuals().strong_text_color()
    };
    ui.metric(kpi_label(value.slot), &value.text, color);
}

fn group_heading(kind: ProxyKind) -> &'static str {
    match kind {
        ProxyKind::Treasury => UI_TEXT.treasuries_heading,
        ProxyKind::Etf => UI_TEXT.etfs_heading,
        ProxyKind::Miner => UI_TEXT.miners_heading,
        ProxyKind::Other => "",
    }
}

/// "Data as of" line followed by one table per group.
pub fn proxy_tables(ui: &mut Ui, tables: &ProxyTables) {
    if let Some(as_of) = &tables.data_as_of {
        ui.label_subdued(format!("{} {}", UI_TEXT.data_as_of, as_of));
        ui.add_space(6.0);
    }

    for table in &tables.tables {
        ui.add_space(8.0);
        ui.label_subheader(format!("{} ({})", group_heading(table.kind), table.rows.len()));
        proxy_table(ui, table);
    }
}

fn proxy_table(ui: &mut Ui, table: &ProxyTable) {
    if table.rows.is_empty() {
        ui.label_subdued(UI_TEXT.no_rows);
        return;
    }

    Grid::new(table.id())
        .striped(true)
        .num_columns(9)
        .spacing([14.0, 6.0])
        .show(ui, |ui| {
            ui.label_subdued(UI_TEXT.col_ticker);
            ui.label_subdued(UI_TEXT.col_name);
            ui.label_subdued(UI_TEXT.col_country);
            ui.label_subdued(UI_TEXT.col_btc);
            ui.label_subdued(UI_TEXT.col_usd);
            ui.label_subdued(UI_TEXT.col_price);
            ui.label_subdued(UI_TEXT.col_pct_21m);
            ui.label_subdued(UI_TEXT.col_filing);
            ui.label_subdued(UI_TEXT.col_last_updated);
            ui.end_row();

            for row in &table.rows {
                ui.label(RichText::new(&row.ticker).strong().monospace());
                ui.label(&row.name);
                ui.horizontal(|ui| {
                    if row.flag_url.is_some() {
                        icon(ui, row.flag_url.as_deref());
                    }
                    ui.label(&row.country);
                });
                ui.label(&row.btc);
                ui.label(&row.usd);
                ui.label(&row.price);
                ui.label(&row.pct_21m);
                match &row.filing_link {
                    Some(link) => {
                        ui.hyperlink_to(UI_TEXT.filing_link, link);
                    }
                    None => {
                        ui.label_subdued(PLACEHOLDER);
                    }
                }
                ui.label_subdued(&row.last_updated);
                ui.end_row();
            }
        });
}
