use eframe::egui::{Color32, RichText, Ui};

use crate::models::Trend;
use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Small, gray text.
    fn label_subdued(&mut self, text: impl Into<String>);

    /// A KPI tile: subdued caption above a large value.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Renders a sub-section header using the configured global color.
    fn label_subheader(&mut self, text: impl Into<String>);

    /// Percent text coloured by sign.
    fn label_trend(&mut self, text: &str, trend: Trend);

    fn label_error(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.vertical(|ui| {
            ui.label_subdued(label);
            ui.label(RichText::new(value).size(18.0).strong().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.subsection_heading));
    }

    fn label_trend(&mut self, text: &str, trend: Trend) {
        self.label(RichText::new(text).color(trend_color(trend)));
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.error));
    }
}

pub fn trend_color(trend: Trend) -> Color32 {
    match trend {
        Trend::Positive => UI_CONFIG.colors.positive,
        Trend::Negative => UI_CONFIG.colors.negative,
        Trend::Flat => Color32::LIGHT_GRAY,
    }
}
