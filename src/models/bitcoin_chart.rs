use std::sync::Arc;

use crate::domain::{HistoryPoint, Timeframe};
use crate::utils::{dollars, format_price};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Horizontal reference line at the all-time high.
#[derive(Debug, Clone, PartialEq)]
pub struct AthOverlay {
    pub price: f64,
    pub label: String,
}

impl AthOverlay {
    /// `None` unless the ATH is a usable number.
    pub fn new(ath: Option<f64>) -> Option<Self> {
        let price = ath.filter(|v| v.is_finite() && *v > 0.0)?;
        Some(Self {
            price,
            label: format!("ATH {}", dollars(format_price(Some(price)))),
        })
    }
}

/// The one live chart of the Bitcoin tab.
///
/// Built from an already-windowed slice of the history cache. The x axis is
/// the point's index inside the window; `dates` maps an index back to its
/// calendar day for axis labels and hover text. Points with no price are
/// left out of the line but keep their slot on the axis.
#[derive(Debug)]
pub struct ChartHandle {
    id: u64,
    timeframe: Timeframe,
    points: Vec<[f64; 2]>,
    dates: Arc<Vec<String>>,
    ath: Option<AthOverlay>,
}

impl ChartHandle {
    pub fn build(
        id: u64,
        timeframe: Timeframe,
        window: &[HistoryPoint],
        ath: Option<AthOverlay>,
    ) -> Self {
        let points = window
            .iter()
            .enumerate()
            .filter_map(|(i, point)| {
                point
                    .price
                    .filter(|p| p.is_finite())
                    .map(|price| [i as f64, price])
            })
            .collect();
        let dates = Arc::new(window.iter().map(|point| point.date.clone()).collect());

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_chart_lifecycle {
            log::info!(
                "📈 Chart #{} created: {} over {} days",
                id,
                timeframe,
                window.len()
            );
        }

        Self {
            id,
            timeframe,
            points,
            dates,
            ath,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    pub fn ath(&self) -> Option<&AthOverlay> {
        self.ath.as_ref()
    }

    /// Number of days on the x axis, priced or not.
    pub fn span(&self) -> usize {
        self.dates.len()
    }

    /// Date label of the day nearest to `x`, if it lies on the axis.
    pub fn label_for(&self, x: f64) -> Option<&str> {
        date_at(&self.dates, x)
    }

    /// Shared axis labels, for plot callbacks that outlive a borrow.
    pub fn dates(&self) -> Arc<Vec<String>> {
        Arc::clone(&self.dates)
    }

    pub fn set_ath(&mut self, ath: Option<AthOverlay>) {
        self.ath = ath;
    }
}

pub fn date_at(dates: &[String], x: f64) -> Option<&str> {
    if !x.is_finite() || x < -0.5 {
        return None;
    }
    dates.get(x.round() as usize).map(String::as_str)
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_chart_lifecycle {
            log::info!("🗑 Chart #{} disposed ({})", self.id, self.timeframe);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> Vec<HistoryPoint> {
        vec![
            HistoryPoint::new("2025-05-30", 100.0),
            HistoryPoint {
                date: "2025-05-31".to_string(),
                price: None,
            },
            HistoryPoint::new("2025-06-01", 300.0),
        ]
    }

    #[test]
    fn missing_prices_leave_gaps_but_keep_dates() {
        let chart = ChartHandle::build(1, Timeframe::Days30, &history(), None);
        assert_eq!(chart.points(), &[[0.0, 100.0], [2.0, 300.0]]);
        assert_eq!(chart.span(), 3);
        assert_eq!(chart.label_for(1.0), Some("2025-05-31"));
        assert_eq!(chart.label_for(2.4), Some("2025-06-01"));
        assert_eq!(chart.label_for(3.0), None);
        assert_eq!(chart.label_for(-2.0), None);
    }

    #[test]
    fn ath_overlay_needs_a_positive_number() {
        assert_eq!(AthOverlay::new(None), None);
        assert_eq!(AthOverlay::new(Some(f64::NAN)), None);
        let overlay = AthOverlay::new(Some(111_970.0)).expect("overlay");
        assert_eq!(overlay.label, "ATH $111,970");
    }

    #[test]
    fn empty_window_builds_empty_chart() {
        let chart = ChartHandle::build(7, Timeframe::Days90, &[], AthOverlay::new(Some(5.0)));
        assert!(chart.points().is_empty());
        assert_eq!(chart.id(), 7);
        assert!(chart.ath().is_some());
    }
}
