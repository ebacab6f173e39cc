pub mod cloud;
pub mod panels;
pub mod plot;
pub mod tables;
pub mod views;

use eframe::egui::{Color32, RichText, Ui};

const WARNING_COLOR: Color32 = Color32::from_rgb(204, 136, 0);
const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// Passive notice shown in place of a chart when data is missing.
pub fn warning(ui: &mut Ui, text: impl Into<String>) {
    ui.label(RichText::new(format!("⚠ {}", text.into())).color(WARNING_COLOR));
}

pub fn error(ui: &mut Ui, text: impl Into<String>) {
    ui.label(RichText::new(text.into()).color(ERROR_COLOR));
}

pub fn subheader(ui: &mut Ui, text: &str) {
    ui.add_space(12.0);
    ui.label(RichText::new(text).size(18.0).strong());
}
