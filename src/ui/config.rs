use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    /// Percent changes >= 0
    pub positive: Color32,
    pub negative: Color32,
    /// Background of Bitcoin's market row
    pub bitcoin_row: Color32,
    pub error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub icon_size: f32,
    pub share_bar_width: f32,
    pub kpi_columns: usize,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(22, 24, 30),
        side_panel: Color32::from_rgb(25, 25, 25),
        positive: Color32::from_rgb(80, 200, 120),
        negative: Color32::from_rgb(235, 90, 90),
        bitcoin_row: Color32::from_rgb(247, 147, 26),
        error: Color32::from_rgb(255, 100, 100),
    },
    icon_size: 18.0,
    share_bar_width: 90.0,
    kpi_columns: 4,
};
