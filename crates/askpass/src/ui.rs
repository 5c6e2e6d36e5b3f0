//! UI helper components

use askpass_dialog_core::ModalKind;
use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 212, 170);
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

/// Styled heading with accent color
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).color(ACCENT));
}

/// Section header with separator
pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(text).strong().size(14.0));
    });
    ui.separator();
}

/// Label/value row for the wallet status panel
pub fn status_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("{}:", label)).strong());
        ui.label(egui::RichText::new(value).monospace());
    });
}

pub fn notice_color(kind: ModalKind) -> egui::Color32 {
    match kind {
        ModalKind::Question => egui::Color32::from_rgb(100, 160, 230),
        ModalKind::Information => egui::Color32::LIGHT_GREEN,
        ModalKind::Warning => egui::Color32::from_rgb(220, 180, 50),
        ModalKind::Critical => DANGER,
    }
}

pub fn notice_icon(kind: ModalKind) -> &'static str {
    match kind {
        ModalKind::Question => "❓",
        ModalKind::Information => "ℹ",
        ModalKind::Warning => "⚠️",
        ModalKind::Critical => "⛔",
    }
}
