use crate::config::POLL;
use crate::domain::{HistoryPoint, Tab, Timeframe};
use crate::engine::timer::RefreshTimer;
use crate::models::{AthOverlay, ChartHandle};

/// Process-wide view state. Owned by the tab controller; nothing else
/// mutates it.
#[derive(Debug)]
pub struct ViewState {
    pub active_tab: Tab,
    pub timeframe: Timeframe,

    /// The one live chart. Replaced only through `install_chart`.
    chart: Option<ChartHandle>,
    /// Last fetched history, oldest first
    history: Option<Vec<HistoryPoint>>,
    ath: Option<AthOverlay>,

    pub market_timer: RefreshTimer,
    pub bitcoin_timer: RefreshTimer,

    next_chart_id: u64,
    disposed_charts: u64,
}

impl ViewState {
    pub fn new(timeframe: Timeframe) -> Self {
        Self {
            active_tab: Tab::default(),
            timeframe,
            chart: None,
            history: None,
            ath: None,
            market_timer: RefreshTimer::new("market", POLL.market_period()),
            bitcoin_timer: RefreshTimer::new("bitcoin-kpi", POLL.bitcoin_period()),
            next_chart_id: 1,
            disposed_charts: 0,
        }
    }

    pub fn chart(&self) -> Option<&ChartHandle> {
        self.chart.as_ref()
    }

    /// Swaps in a new chart. The previous handle is dropped (disposed)
    /// before the new one is stored; its id is returned.
    pub fn install_chart(&mut self, chart: ChartHandle) -> Option<u64> {
        let disposed = self.chart.take().map(|old| {
            let id = old.id();
            drop(old);
            self.disposed_charts += 1;
            id
        });
        self.chart = Some(chart);
        disposed
    }

    /// Rebuilds the chart from the history cache for the current timeframe.
    /// Returns the new chart id, or `None` when nothing is cached yet.
    pub fn rebuild_chart(&mut self) -> Option<u64> {
        let history = self.history.as_deref()?;
        let id = self.next_chart_id;
        let chart = ChartHandle::build(
            id,
            self.timeframe,
            self.timeframe.window(history),
            self.ath.clone(),
        );
        self.next_chart_id += 1;
        self.install_chart(chart);
        Some(id)
    }

    pub fn cache_history(&mut self, history: Vec<HistoryPoint>) {
        self.history = Some(history);
    }

    pub fn has_history(&self) -> bool {
        self.history.is_some()
    }

    pub fn ath(&self) -> Option<&AthOverlay> {
        self.ath.as_ref()
    }

    /// Updates the ATH overlay on the live chart in place.
    pub fn set_ath(&mut self, ath: Option<AthOverlay>) {
        if let Some(chart) = self.chart.as_mut() {
            chart.set_ath(ath.clone());
        }
        self.ath = ath;
    }

    pub fn disposed_charts(&self) -> u64 {
        self.disposed_charts
    }

    pub fn active_timer_count(&self) -> usize {
        [&self.market_timer, &self.bitcoin_timer]
            .iter()
            .filter(|timer| timer.is_polling())
            .count()
    }

    pub fn stop_timers(&mut self) {
        self.market_timer.stop();
        self.bitcoin_timer.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(n: usize) -> Vec<HistoryPoint> {
        (0..n)
            .map(|i| HistoryPoint::new(format!("day-{}", i), i as f64))
            .collect()
    }

    #[test]
    fn no_chart_without_history() {
        let mut state = ViewState::new(Timeframe::Days30);
        assert_eq!(state.rebuild_chart(), None);
        assert!(state.chart().is_none());
    }

    #[test]
    fn installing_chart_disposes_previous_handle() {
        let mut state = ViewState::new(Timeframe::Days30);
        state.cache_history(history(100));

        let first = state.rebuild_chart().expect("first chart");
        assert_eq!(state.disposed_charts(), 0);

        state.timeframe = Timeframe::Days90;
        let second = state.rebuild_chart().expect("second chart");

        assert_ne!(first, second);
        assert_eq!(state.disposed_charts(), 1);
        assert_eq!(state.chart().map(|c| c.id()), Some(second));
        assert_eq!(state.chart().map(|c| c.span()), Some(90));
    }

    #[test]
    fn ath_reaches_live_chart() {
        let mut state = ViewState::new(Timeframe::Days30);
        state.cache_history(history(10));
        state.rebuild_chart();
        state.set_ath(AthOverlay::new(Some(111_970.0)));

        let ath = state.chart().and_then(|c| c.ath()).map(|a| a.price);
        assert_eq!(ath, Some(111_970.0));
    }
}
