use std::collections::HashMap;
use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{HistoryPoint, Tab, Timeframe};
use crate::models::AthOverlay;
use crate::utils::app_time::AppInstant;

use super::messages::{LoadJob, LoadOrigin, LoadRequest};
use super::sequence::RequestSequencer;
use super::state::ViewState;

/// Tab state machine. Decides what loads when, and owns the refresh timers.
///
/// Never touches the network itself: every operation returns the
/// [`LoadJob`]s the shell should spawn.
pub struct TabController {
    state: ViewState,
    sequencers: HashMap<LoadRequest, RequestSequencer>,
    history_in_flight: bool,
}

impl TabController {
    pub fn new(timeframe: Timeframe) -> Self {
        Self {
            state: ViewState::new(timeframe),
            sequencers: HashMap::new(),
            history_in_flight: false,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn active_tab(&self) -> Tab {
        self.state.active_tab
    }

    pub fn timeframe(&self) -> Timeframe {
        self.state.timeframe
    }

    /// Switches to `tab` and returns the loads it needs.
    ///
    /// Only the active tab's timer runs. Re-entering the current tab restarts
    /// its timer rather than adding a second one.
    pub fn activate(&mut self, tab: Tab, now: AppInstant) -> Vec<LoadJob> {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_timer_events && tab != self.state.active_tab {
            log::info!(
                "Tab {} -> {}",
                self.state.active_tab.as_ref(),
                tab.as_ref()
            );
        }

        self.state.active_tab = tab;
        let mut jobs = Vec::new();

        match tab {
            Tab::Market => {
                self.state.bitcoin_timer.stop();
                self.state.market_timer.start(now);
                jobs.push(self.issue(LoadRequest::Market, LoadOrigin::TabEntry));
            }
            Tab::Bitcoin => {
                self.state.market_timer.stop();
                self.state.bitcoin_timer.start(now);
                jobs.push(self.issue(LoadRequest::BitcoinKpis, LoadOrigin::TabEntry));
                if !self.state.has_history() && !self.history_in_flight {
                    self.history_in_flight = true;
                    jobs.push(self.issue(LoadRequest::BitcoinHistory, LoadOrigin::TabEntry));
                }
            }
            Tab::Proxies => {
                self.state.stop_timers();
                jobs.push(self.issue(LoadRequest::Proxies, LoadOrigin::TabEntry));
            }
        }

        jobs
    }

    /// Loads for whichever timers came due.
    pub fn tick(&mut self, now: AppInstant) -> Vec<LoadJob> {
        let mut jobs = Vec::new();
        if self.state.market_timer.poll_due(now) {
            jobs.push(self.issue(LoadRequest::Market, LoadOrigin::Poll));
        }
        if self.state.bitcoin_timer.poll_due(now) {
            jobs.push(self.issue(LoadRequest::BitcoinKpis, LoadOrigin::Poll));
        }
        jobs
    }

    /// Re-renders the chart from the cached history. Never loads anything.
    /// Returns false if `timeframe` was already selected.
    pub fn select_timeframe(&mut self, timeframe: Timeframe) -> bool {
        if self.state.timeframe == timeframe {
            return false;
        }
        self.state.timeframe = timeframe;
        self.state.rebuild_chart();
        true
    }

    /// Whether a finished job is newer than the last result applied for its
    /// resource. Stale results are dropped by the caller.
    pub fn is_fresh(&self, job: &LoadJob) -> bool {
        let fresh = self
            .sequencers
            .get(&job.request)
            .is_none_or(|seq| seq.is_fresh(job.id));
        if !fresh {
            log::debug!("Dropped stale {:?} response {}", job.request, job.id);
        }
        fresh
    }

    /// Records a successful job as applied. Only successes move the
    /// sequencer; a failed newer job leaves older ones fresh.
    pub fn mark_applied(&mut self, job: &LoadJob) -> bool {
        self.sequencers.entry(job.request).or_default().accept(job.id)
    }

    pub fn apply_history(&mut self, history: Vec<HistoryPoint>) {
        self.history_in_flight = false;
        self.state.cache_history(history);
        self.state.rebuild_chart();
    }

    /// A failed history load may be retried on the next tab entry.
    pub fn history_failed(&mut self) {
        self.history_in_flight = false;
    }

    pub fn update_ath(&mut self, ath: Option<f64>) {
        let overlay = AthOverlay::new(ath);
        if self.state.ath() != overlay.as_ref() {
            self.state.set_ath(overlay);
        }
    }

    /// Time until the next timer is due, if any is running.
    pub fn next_wake(&self, now: AppInstant) -> Option<Duration> {
        [&self.state.market_timer, &self.state.bitcoin_timer]
            .iter()
            .filter_map(|timer| timer.until_due(now))
            .min()
    }

    /// Stops every timer. Called on app exit.
    pub fn teardown(&mut self) {
        self.state.stop_timers();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Tab controller torn down");
        }
    }

    fn issue(&mut self, request: LoadRequest, origin: LoadOrigin) -> LoadJob {
        let id = self.sequencers.entry(request).or_default().issue();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_fetch_events {
            log::info!("→ {:?} {} ({:?})", request, id, origin);
        }

        LoadJob {
            request,
            origin,
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::app_time::now;

    fn requests(jobs: &[LoadJob]) -> Vec<LoadRequest> {
        jobs.iter().map(|job| job.request).collect()
    }

    fn history(n: usize) -> Vec<HistoryPoint> {
        (0..n)
            .map(|i| HistoryPoint::new(format!("day-{}", i), 100.0 + i as f64))
            .collect()
    }

    #[test]
    fn entering_bitcoin_twice_leaves_one_timer() {
        let mut controller = TabController::new(Timeframe::Days365);
        let t0 = now();
        controller.activate(Tab::Bitcoin, t0);
        controller.activate(Tab::Bitcoin, t0 + Duration::from_secs(5));

        assert_eq!(controller.state().active_timer_count(), 1);
        assert!(controller.state().bitcoin_timer.is_polling());
    }

    #[test]
    fn leaving_a_tab_stops_its_timer() {
        let mut controller = TabController::new(Timeframe::Days365);
        let t0 = now();
        controller.activate(Tab::Bitcoin, t0);
        controller.activate(Tab::Market, t0);
        assert!(!controller.state().bitcoin_timer.is_polling());
        assert!(controller.state().market_timer.is_polling());

        controller.activate(Tab::Proxies, t0);
        assert_eq!(controller.state().active_timer_count(), 0);
        assert_eq!(controller.active_tab(), Tab::Proxies);
    }

    #[test]
    fn tab_entry_loads() {
        let mut controller = TabController::new(Timeframe::Days365);
        let t0 = now();
        assert_eq!(
            requests(&controller.activate(Tab::Market, t0)),
            [LoadRequest::Market]
        );
        assert_eq!(
            requests(&controller.activate(Tab::Bitcoin, t0)),
            [LoadRequest::BitcoinKpis, LoadRequest::BitcoinHistory]
        );
        assert_eq!(
            requests(&controller.activate(Tab::Proxies, t0)),
            [LoadRequest::Proxies]
        );
    }

    #[test]
    fn history_is_loaded_once() {
        let mut controller = TabController::new(Timeframe::Days365);
        let t0 = now();
        let jobs = controller.activate(Tab::Bitcoin, t0);
        let history_job = jobs[1];

        // Still in flight: no duplicate
        let again = controller.activate(Tab::Bitcoin, t0);
        assert_eq!(requests(&again), [LoadRequest::BitcoinKpis]);

        assert!(controller.mark_applied(&history_job));
        controller.apply_history(history(400));

        controller.activate(Tab::Market, t0);
        let back = controller.activate(Tab::Bitcoin, t0);
        assert_eq!(requests(&back), [LoadRequest::BitcoinKpis]);
    }

    #[test]
    fn failed_history_is_retried_on_next_entry() {
        let mut controller = TabController::new(Timeframe::Days365);
        let t0 = now();
        let jobs = controller.activate(Tab::Bitcoin, t0);
        assert!(controller.is_fresh(&jobs[1]));
        controller.history_failed();

        let retry = controller.activate(Tab::Bitcoin, t0);
        assert!(requests(&retry).contains(&LoadRequest::BitcoinHistory));
    }

    #[test]
    fn timeframe_switch_reuses_cache() {
        let mut controller = TabController::new(Timeframe::Days365);
        let t0 = now();
        controller.activate(Tab::Bitcoin, t0);
        controller.apply_history(history(5000));
        let first_chart = controller.state().chart().map(|c| c.id());

        assert!(controller.select_timeframe(Timeframe::Days3650));
        assert!(!controller.select_timeframe(Timeframe::Days3650));

        let chart = controller.state().chart().expect("chart");
        assert_eq!(chart.span(), 3650);
        assert_ne!(Some(chart.id()), first_chart);
        assert_eq!(controller.state().disposed_charts(), 1);

        // Nothing was scheduled by the switch
        assert!(controller.tick(t0).is_empty());
    }

    #[test]
    fn timers_issue_poll_loads() {
        let mut controller = TabController::new(Timeframe::Days365);
        let t0 = now();
        controller.activate(Tab::Market, t0);

        assert!(controller.tick(t0 + Duration::from_secs(30)).is_empty());
        let due = controller.tick(t0 + Duration::from_secs(60));
        assert_eq!(requests(&due), [LoadRequest::Market]);
        assert_eq!(due[0].origin, LoadOrigin::Poll);
        assert_eq!(
            controller.next_wake(t0 + Duration::from_secs(60)),
            Some(Duration::from_secs(60))
        );
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut controller = TabController::new(Timeframe::Days365);
        let t0 = now();
        let entry = controller.activate(Tab::Market, t0)[0];
        let poll = controller.tick(t0 + Duration::from_secs(60))[0];

        assert!(controller.is_fresh(&poll));
        assert!(controller.mark_applied(&poll));
        assert!(!controller.is_fresh(&entry));
    }

    #[test]
    fn failed_newer_load_leaves_older_one_fresh() {
        let mut controller = TabController::new(Timeframe::Days365);
        let t0 = now();
        let first = controller.activate(Tab::Bitcoin, t0)[0];
        controller.activate(Tab::Market, t0);
        let second = controller.activate(Tab::Bitcoin, t0)[0];
        assert!(second.id > first.id);

        // `second` failed, so nothing is marked applied
        assert!(controller.is_fresh(&second));
        assert!(controller.is_fresh(&first));
    }

    #[test]
    fn ath_updates_overlay_without_new_chart() {
        let mut controller = TabController::new(Timeframe::Days30);
        controller.apply_history(history(40));
        let id = controller.state().chart().map(|c| c.id());

        controller.update_ath(Some(111_970.0));
        let chart = controller.state().chart().expect("chart");
        assert_eq!(Some(chart.id()), id);
        assert_eq!(chart.ath().map(|a| a.price), Some(111_970.0));
    }

    #[test]
    fn teardown_stops_everything() {
        let mut controller = TabController::new(Timeframe::Days365);
        let t0 = now();
        controller.activate(Tab::Bitcoin, t0);
        controller.teardown();
        assert_eq!(controller.state().active_timer_count(), 0);
        assert_eq!(controller.next_wake(t0), None);
    }
}
