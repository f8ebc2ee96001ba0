use std::sync::Arc;

use eframe::egui;
use egui_plot::{AxisHints, Corner, GridMark, HPlacement, Legend, Plot};

use crate::config::PLOT_CONFIG;
use crate::models::ChartHandle;
use crate::models::bitcoin_chart::date_at;
use crate::ui::config::UI_TEXT;
use crate::ui::plot_layers::{AthLayer, LayerContext, PlotLayer, PriceHistoryLayer};
use crate::utils::{dollars, format_price};

/// Draws the live chart handle. Tracks which handle it last drew so a
/// replaced handle starts from a fresh view instead of the old zoom.
#[derive(Default)]
pub struct PlotView {
    last_chart_id: Option<u64>,
}

impl PlotView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_chart(&mut self, ui: &mut egui::Ui, chart: &ChartHandle) {
        let replaced = self.last_chart_id != Some(chart.id());
        self.last_chart_id = Some(chart.id());

        let dates = chart.dates();
        let hover_dates = Arc::clone(&dates);
        let span = chart.span();

        let mut plot = Plot::new("bitcoin_price_chart")
            .view_aspect(PLOT_CONFIG.plot_aspect_ratio)
            .legend(Legend::default().position(Corner::LeftTop))
            .custom_x_axes(vec![create_x_axis(dates)])
            .custom_y_axes(vec![create_y_axis()])
            .x_grid_spacer(move |input| date_marks(input.bounds, span, PLOT_CONFIG.max_x_ticks))
            .label_formatter(move |_name, point| {
                let day = date_at(&hover_dates, point.x).unwrap_or_default();
                format!("{}\n{}", day, dollars(format_price(Some(point.y))))
            })
            .allow_scroll(false);

        if replaced {
            plot = plot.reset();
        }

        plot.show(ui, |plot_ui| {
            let ctx = LayerContext { chart };

            let layers: Vec<Box<dyn PlotLayer>> =
                vec![Box::new(PriceHistoryLayer), Box::new(AthLayer)];

            for layer in layers {
                layer.render(plot_ui, &ctx);
            }
        });
    }
}

/// Integer day positions inside `bounds`, thinned to at most `max_ticks`.
fn date_marks(bounds: (f64, f64), span: usize, max_ticks: usize) -> Vec<GridMark> {
    let (min, max) = bounds;
    if span == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }

    let first = min.ceil().max(0.0);
    let last = max.floor().min((span - 1) as f64);
    if last < first {
        return Vec::new();
    }

    let (first, last) = (first as usize, last as usize);
    let visible = last - first + 1;
    let step = visible.div_ceil(max_ticks.max(1)).max(1);

    (first..=last)
        .step_by(step)
        .map(|day| GridMark {
            value: day as f64,
            step_size: step as f64,
        })
        .collect()
}

fn create_x_axis(dates: Arc<Vec<String>>) -> AxisHints<'static> {
    AxisHints::new_x().formatter(move |grid_mark, _range| {
        date_at(&dates, grid_mark.value)
            .unwrap_or_default()
            .to_string()
    })
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis)
        .formatter(|grid_mark, _range| dollars(format_price(Some(grid_mark.value))))
        .placement(HPlacement::Left)
}
