//! Chart visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub price_line_color: Color32,
    pub price_line_width: f32,
    /// All-time-high reference line
    pub ath_line_color: Color32,
    pub ath_line_width: f32,
    /// Upper bound on x-axis date labels
    pub max_x_ticks: usize,
    /// Plot aspect ratio (width:height)
    pub plot_aspect_ratio: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    price_line_color: Color32::from_rgb(247, 147, 26), // Bitcoin orange
    price_line_width: 2.0,
    ath_line_color: Color32::from_rgb(255, 215, 0), // Gold
    ath_line_width: 1.5,
    max_x_ticks: 10,
    plot_aspect_ratio: 2.5,
};
