use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{Tab, Timeframe};
use crate::engine::{LoadOrigin, LoadRequest, LoadResult, Payload, TabController};
use crate::models::{KpiPanel, MarketRow, ProxyTables, build_market_rows};

/// What survives a restart. Stored under `eframe::APP_KEY`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub active_tab: Tab,
    #[serde(default)]
    pub timeframe: Timeframe,
}

/// How a finished load was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Updated,
    /// An older response arriving after a newer one
    Stale,
    /// Periodic refresh failed; the previous view is kept
    KeptStale,
    /// Tab-entry load failed; an inline message is shown
    Failed,
}

/// Display-ready data for every section. `None` until the first load lands.
#[derive(Default)]
pub struct DataState {
    pub market: Option<Vec<MarketRow>>,
    pub kpis: Option<KpiPanel>,
    pub proxies: Option<ProxyTables>,
    errors: HashMap<LoadRequest, String>,
}

impl DataState {
    pub fn error(&self, request: LoadRequest) -> Option<&str> {
        self.errors.get(&request).map(String::as_str)
    }

    /// Routes one finished load into the view models or the error slots.
    pub fn apply(&mut self, controller: &mut TabController, load: LoadResult) -> Applied {
        let LoadResult {
            job,
            duration,
            result,
        } = load;

        if !controller.is_fresh(&job) {
            return Applied::Stale;
        }

        match result {
            Ok(payload) => {
                controller.mark_applied(&job);
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_fetch_events {
                    log::info!("← {:?} {} in {:?}", job.request, job.id, duration);
                }
                #[cfg(not(debug_assertions))]
                let _ = duration;

                self.errors.remove(&job.request);
                match payload {
                    Payload::Market(coins) => self.market = Some(build_market_rows(&coins)),
                    Payload::BitcoinKpis(kpis) => {
                        controller.update_ath(kpis.ath);
                        self.kpis = Some(KpiPanel::from_kpis(&kpis));
                    }
                    Payload::BitcoinHistory(history) => {
                        log::info!("📈 Loaded {} days of Bitcoin history", history.len());
                        controller.apply_history(history);
                    }
                    Payload::Proxies(records) => {
                        self.proxies = Some(ProxyTables::build(&records));
                    }
                }
                Applied::Updated
            }
            Err(err) => {
                if job.request == LoadRequest::BitcoinHistory {
                    controller.history_failed();
                }
                match job.origin {
                    LoadOrigin::Poll => {
                        log::warn!("⚠️  Refresh failed, keeping last data: {}", err);
                        Applied::KeptStale
                    }
                    LoadOrigin::TabEntry => {
                        log::error!("❌ {}", err);
                        self.errors.insert(job.request, err.to_string());
                        Applied::Failed
                    }
                }
            }
        }
    }
}
