use eframe::egui::{CentralPanel, Color32, Context, Frame, Margin, RichText, ScrollArea, TopBottomPanel, Ui};

use crate::domain::Tab;
use crate::engine::LoadRequest;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{
    Panel, TabStrip, TimeframeSelector, kpi_grid, market_table, proxy_tables,
};
use crate::ui::utils::{colored_heading, format_countdown, section_heading, spaced_separator};
use crate::utils::app_time::now;

use super::app::DashboardApp;

impl DashboardApp {
    pub(super) fn render_tab_strip(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(10, 6));

        let events = TopBottomPanel::top("tab_strip")
            .frame(frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(colored_heading(UI_TEXT.app_title));
                    ui.separator();
                    TabStrip::new(self.controller.active_tab()).render(ui)
                })
                .inner
            })
            .inner;

        for tab in events {
            self.switch_tab(tab);
        }
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(12));

        CentralPanel::default().frame(frame).show(ctx, |ui| {
            ScrollArea::vertical()
                .id_salt(self.controller.active_tab().as_ref())
                .show(ui, |ui| match self.controller.active_tab() {
                    Tab::Market => self.render_market(ui),
                    Tab::Bitcoin => self.render_bitcoin(ui),
                    Tab::Proxies => self.render_proxies(ui),
                });
        });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));

        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label_subdued(format!("{}: {}", UI_TEXT.status_backend, self.client.base_url()));
                    ui.separator();

                    let in_flight = self.loads_in_flight();
                    if in_flight > 0 {
                        ui.spinner();
                        ui.label_subdued(format!("{}: {}", UI_TEXT.status_in_flight, in_flight));
                        ui.separator();
                    }

                    if let Some(wait) = self.controller.next_wake(now()) {
                        ui.label_subdued(format!(
                            "{} {}",
                            UI_TEXT.status_next_refresh,
                            format_countdown(wait.as_secs())
                        ));
                    }
                });
            });
    }

    fn render_market(&self, ui: &mut Ui) {
        section_heading(ui, UI_TEXT.market_heading);
        if !self.section_ready(ui, LoadRequest::Market, self.data_state.market.is_some()) {
            return;
        }
        if let Some(rows) = &self.data_state.market {
            market_table(ui, rows);
        }
    }

    fn render_bitcoin(&mut self, ui: &mut Ui) {
        section_heading(ui, UI_TEXT.bitcoin_heading);
        if self.section_ready(ui, LoadRequest::BitcoinKpis, self.data_state.kpis.is_some()) {
            if let Some(panel) = &self.data_state.kpis {
                kpi_grid(ui, panel);
            }
        }

        spaced_separator(ui);
        ui.horizontal(|ui| {
            ui.label(RichText::new(UI_TEXT.chart_heading).color(UI_CONFIG.colors.subsection_heading));
            ui.add_space(12.0);
            for timeframe in TimeframeSelector::new(self.controller.timeframe()).render(ui) {
                self.switch_timeframe(timeframe);
            }
        });
        ui.add_space(6.0);

        let has_chart = self.controller.state().chart().is_some();
        if self.section_ready(ui, LoadRequest::BitcoinHistory, has_chart) {
            if let Some(chart) = self.controller.state().chart() {
                self.plot_view.show_chart(ui, chart);
            }
        }
    }

    fn render_proxies(&self, ui: &mut Ui) {
        section_heading(ui, UI_TEXT.proxies_heading);
        if !self.section_ready(ui, LoadRequest::Proxies, self.data_state.proxies.is_some()) {
            return;
        }
        if let Some(tables) = &self.data_state.proxies {
            proxy_tables(ui, tables);
        }
    }

    /// Draws the inline error or a spinner when a section has nothing to
    /// show yet. Returns true when the section's content should be drawn.
    fn section_ready(&self, ui: &mut Ui, request: LoadRequest, has_data: bool) -> bool {
        if let Some(error) = self.data_state.error(request) {
            ui.label_error(format!("⚠ {}: {}", UI_TEXT.load_failed, error));
            return has_data;
        }
        if !has_data {
            ui.horizontal(|ui| {
                ui.spinner();
                let text = if request == LoadRequest::BitcoinHistory {
                    UI_TEXT.chart_waiting
                } else {
                    UI_TEXT.loading
                };
                ui.label(RichText::new(text).color(Color32::from_gray(190)));
            });
        }
        has_data
    }
}
