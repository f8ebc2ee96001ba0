use egui_plot::{HLine, Line, LineStyle, PlotPoints, PlotUi};

use crate::config::PLOT_CONFIG;
use crate::models::ChartHandle;
use crate::ui::config::UI_TEXT;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub chart: &'a ChartHandle,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. PRICE HISTORY LINE
// ============================================================================
pub struct PriceHistoryLayer;

impl PlotLayer for PriceHistoryLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let points = ctx.chart.points();
        if points.is_empty() {
            return;
        }

        plot_ui.line(
            Line::new(UI_TEXT.plot_price_line, PlotPoints::new(points.to_vec()))
                .color(PLOT_CONFIG.price_line_color)
                .width(PLOT_CONFIG.price_line_width),
        );
    }
}

// ============================================================================
// 2. ALL-TIME-HIGH REFERENCE LINE
// ============================================================================
pub struct AthLayer;

impl PlotLayer for AthLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if let Some(ath) = ctx.chart.ath() {
            plot_ui.hline(
                HLine::new(ath.label.as_str(), ath.price)
                    .color(PLOT_CONFIG.ath_line_color)
                    .width(PLOT_CONFIG.ath_line_width)
                    .style(LineStyle::dashed_loose()),
            );
        }
    }
}
