use eframe::{Frame, egui};
use poll_promise::Promise;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::ApiClient;
use crate::domain::{Tab, Timeframe};
use crate::engine::{LoadResult, TabController};
use crate::ui::app_state::{DataState, PersistedState};
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::now;

/// Start-up choices that override the persisted state.
#[derive(Debug, Clone, Default)]
pub struct StartupOverrides {
    /// `--tab`, or the URL fragment in the browser
    pub tab: Option<Tab>,
    pub timeframe: Option<Timeframe>,
}

pub struct DashboardApp {
    pub(super) controller: TabController,
    pub(super) client: ApiClient,
    pub(super) data_state: DataState,
    pub(super) plot_view: PlotView,
    pub(super) in_flight: Vec<Promise<LoadResult>>,
}

impl DashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        client: ApiClient,
        overrides: StartupOverrides,
    ) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        setup_custom_visuals(&cc.egui_ctx);

        let persisted = Self::load_persisted(cc.storage);
        let tab = overrides.tab.unwrap_or(persisted.active_tab);
        let timeframe = overrides.timeframe.unwrap_or(persisted.timeframe);

        log::info!(
            "🚀 Dashboard on {} (tab: {}, timeframe: {})",
            client.base_url(),
            tab.as_ref(),
            timeframe
        );

        let mut app = Self {
            controller: TabController::new(timeframe),
            client,
            data_state: DataState::default(),
            plot_view: PlotView::new(),
            in_flight: Vec::new(),
        };

        let jobs = app.controller.activate(tab, now());
        app.dispatch(jobs);
        app
    }

    fn load_persisted(storage: Option<&dyn eframe::Storage>) -> PersistedState {
        let Some(storage) = storage else {
            return PersistedState::default();
        };

        match eframe::get_value::<PersistedState>(storage, eframe::APP_KEY) {
            Some(state) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Loaded persisted state: {:?}", state);
                }
                state
            }
            None => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("No persisted state found. Using defaults.");
                }
                PersistedState::default()
            }
        }
    }

    pub(super) fn persisted(&self) -> PersistedState {
        PersistedState {
            active_tab: self.controller.active_tab(),
            timeframe: self.controller.timeframe(),
        }
    }

    pub(super) fn switch_tab(&mut self, tab: Tab) {
        let jobs = self.controller.activate(tab, now());
        self.dispatch(jobs);
        set_location_hash(tab);
    }

    pub(super) fn switch_timeframe(&mut self, timeframe: Timeframe) {
        self.controller.select_timeframe(timeframe);
    }
}

#[cfg(target_arch = "wasm32")]
fn set_location_hash(tab: Tab) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_hash(tab.as_ref()) {
            log::warn!("Could not update URL fragment: {:?}", err);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_location_hash(_tab: Tab) {}

impl eframe::App for DashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.controller.teardown();

        // Dropping pending promises abandons their results
        self.in_flight.clear();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.persisted());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_loads(ctx);

        let due = self.controller.tick(now());
        if !due.is_empty() {
            self.dispatch(due);
        }

        self.render_tab_strip(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        if let Some(wait) = self.controller.next_wake(now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
