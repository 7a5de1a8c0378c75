//! Zero-padded odometer readout
//!
//! `digits` is a rendering hint only; a value wider than the configured
//! width is shown in full rather than truncated.

use eframe::egui;

/// Render `value` padded to `digits` in a monospace face
pub fn ui(ui: &mut egui::Ui, value: u32, digits: u8, size: f32) {
    ui.label(
        egui::RichText::new(formatted(value, digits))
            .monospace()
            .strong()
            .size(size),
    );
}

fn formatted(value: u32, digits: u8) -> String {
    format!("{value:0width$}", width = digits as usize)
}
