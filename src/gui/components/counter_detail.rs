//! Detail view: large odometer plus the increment/decrement controls

use eframe::egui;

use super::odometer;
use crate::counter::Counter;
use crate::gui::constants::*;
use crate::handlers::Adjust;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    None,
    Back,
    OpenSettings,
    Delete,
    Adjust(Adjust),
}

/// Render the detail view for the selected counter and report the
/// gesture it received
pub fn ui(ui: &mut egui::Ui, counter: &Counter) -> DetailAction {
    let mut action = DetailAction::None;

    ui.horizontal(|ui| {
        if ui.button("⬅").on_hover_text("Back to dashboard").clicked() {
            action = DetailAction::Back;
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🗑").on_hover_text("Delete").clicked() {
                action = DetailAction::Delete;
            }
            if ui.button("⚙").on_hover_text("Settings").clicked() {
                action = DetailAction::OpenSettings;
            }
            ui.with_layout(
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    ui.label(egui::RichText::new(&counter.name).heading().strong());
                },
            );
        });
    });

    ui.add_space(SECTION_SPACING * 2.0);
    ui.vertical_centered(|ui| {
        odometer::ui(ui, counter.value, counter.settings.digits, ODOMETER_SIZE_DETAIL);
    });
    ui.add_space(SECTION_SPACING * 2.0);

    let button_width = (ui.available_width() - ITEM_SPACING) / 2.0;
    ui.horizontal(|ui| {
        let decrement = egui::Button::new(egui::RichText::new("−").size(36.0));
        if ui
            .add_sized([button_width, ADJUST_BUTTON_HEIGHT], decrement)
            .clicked()
        {
            action = DetailAction::Adjust(Adjust::Decrement);
        }

        let increment =
            egui::Button::new(egui::RichText::new("+").size(36.0).color(egui::Color32::WHITE))
                .fill(ACCENT);
        if ui
            .add_sized([button_width, ADJUST_BUTTON_HEIGHT], increment)
            .clicked()
        {
            action = DetailAction::Adjust(Adjust::Increment);
        }
    });

    action
}
