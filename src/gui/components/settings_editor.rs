//! Modal settings editor for a single counter
//!
//! Edits a draft copy; nothing reaches the store until Save hands the
//! whole counter to `save_settings`. The ranged inputs keep every field
//! inside the validated bounds (step and max value positive, digits
//! between 3 and 8).

use eframe::egui;

use crate::constants::validation;
use crate::counter::Counter;
use crate::gui::constants::ITEM_SPACING;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    None,
    Save(Counter),
    Cancel,
}

pub struct SettingsEditor {
    draft: Counter,
}

impl SettingsEditor {
    pub fn new(counter: Counter) -> Self {
        Self { draft: counter }
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> SettingsAction {
        let mut action = SettingsAction::None;

        egui::Window::new("Settings")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Counter Name:");
                ui.text_edit_singleline(&mut self.draft.name);

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    ui.label("Step:");
                    ui.add(
                        egui::DragValue::new(&mut self.draft.settings.step)
                            .range(validation::MIN_STEP..=validation::VALUE_CEILING),
                    );
                    ui.add_space(ITEM_SPACING);
                    ui.label("Max Value:");
                    ui.add(
                        egui::DragValue::new(&mut self.draft.settings.max_value)
                            .range(validation::MIN_MAX_VALUE..=validation::VALUE_CEILING),
                    );
                });

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    ui.label("Digits:");
                    ui.add(
                        egui::DragValue::new(&mut self.draft.settings.digits)
                            .range(validation::MIN_DIGITS..=validation::MAX_DIGITS),
                    );
                    ui.label(
                        egui::RichText::new("(odometer width, display only)")
                            .small()
                            .italics(),
                    );
                });

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    ui.checkbox(&mut self.draft.settings.sound, "Sound Effects");
                    ui.checkbox(&mut self.draft.settings.vibration, "Vibration");
                });

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        action = SettingsAction::Save(self.draft.clone());
                    }
                    if ui.button("Cancel").clicked() {
                        action = SettingsAction::Cancel;
                    }
                });
            });

        action
    }
}
