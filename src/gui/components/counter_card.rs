//! Dashboard card for a single counter

use eframe::egui;

use super::odometer;
use crate::counter::Counter;
use crate::gui::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    None,
    Select,
    OpenSettings,
    Delete,
}

/// Render one dashboard card and report the gesture it received
pub fn ui(ui: &mut egui::Ui, counter: &Counter) -> CardAction {
    let mut action = CardAction::None;

    ui.group(|ui| {
        ui.set_width(CARD_WIDTH);
        ui.set_height(CARD_HEIGHT);
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&counter.name).strong().size(18.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                        action = CardAction::Delete;
                    }
                    if ui.small_button("⚙").on_hover_text("Settings").clicked() {
                        action = CardAction::OpenSettings;
                    }
                });
            });

            ui.add_space(ITEM_SPACING);
            odometer::ui(ui, counter.value, counter.settings.digits, ODOMETER_SIZE_CARD);
            ui.add_space(ITEM_SPACING);

            if ui
                .button(egui::RichText::new("Open").color(ACCENT))
                .clicked()
            {
                action = CardAction::Select;
            }
        });
    });

    action
}
