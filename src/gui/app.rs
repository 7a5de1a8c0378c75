//! Application window: dashboard, detail view and modal dialogs

use anyhow::{Result, anyhow};
use eframe::{CreationContext, NativeOptions, egui};
use tracing::info;

use super::components::counter_card::{self, CardAction};
use super::components::counter_detail::{self, DetailAction};
use super::components::settings_editor::{SettingsAction, SettingsEditor};
use super::constants::*;
use crate::feedback::LogFeedback;
use crate::hotkeys;
use crate::store::CounterStore;

#[derive(Clone)]
struct ConfirmDelete {
    id: String,
    name: String,
    from_detail: bool,
}

struct CounterApp {
    store: CounterStore,
    feedback: LogFeedback,
    settings_editor: Option<SettingsEditor>,
    confirm_delete: Option<ConfirmDelete>,
}

impl CounterApp {
    fn new(cc: &CreationContext<'_>, store: CounterStore) -> Self {
        info!("Initializing counter window");
        let app = Self {
            store,
            feedback: LogFeedback,
            settings_editor: None,
            confirm_delete: None,
        };
        app.apply_theme(&cc.egui_ctx);
        app
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        ctx.set_visuals(if self.store.dark_mode() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
    }

    /// Keyboard shortcut path. Suppressed while any modal surface is
    /// open and when no counter is selected; otherwise routes through
    /// the same store operation as the pointer buttons.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let modal_open = self.settings_editor.is_some() || self.confirm_delete.is_some();
        let has_selection = self.store.selected_counter_id().is_some();
        if !hotkeys::shortcuts_active(modal_open, has_selection) {
            return;
        }
        let Some(id) = self.store.selected_counter_id().map(str::to_string) else {
            return;
        };

        let pressed: Vec<egui::Key> = ctx.input(|i| {
            hotkeys::BINDINGS
                .iter()
                .map(|(key, _)| *key)
                .filter(|key| i.key_pressed(*key))
                .collect()
        });
        for key in pressed {
            if let Some(adjust) = hotkeys::adjust_for_key(key) {
                self.store.adjust_counter(&id, adjust, &self.feedback);
            }
        }
    }

    fn header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(ITEM_SPACING);
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new("Minimal Counter").strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_icon = if self.store.dark_mode() { "☀" } else { "🌙" };
                    if ui.button(theme_icon).on_hover_text("Toggle theme").clicked() {
                        self.store.toggle_dark_mode();
                        self.apply_theme(ctx);
                    }
                    if self.store.selected_counter_id().is_none()
                        && ui.button("➕ New Counter").clicked()
                    {
                        self.store.add_counter();
                    }
                });
            });
            ui.add_space(ITEM_SPACING);
        });
    }

    fn dashboard(&mut self, ui: &mut egui::Ui) {
        if self.store.counters().is_empty() {
            ui.add_space(SECTION_SPACING * 4.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("No counters yet!").heading());
                ui.add_space(ITEM_SPACING);
                ui.label(
                    egui::RichText::new("Click \"New Counter\" to add your first counter.").weak(),
                );
            });
            return;
        }

        let mut pending: Option<(String, String, CardAction)> = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for counter in self.store.counters() {
                    let action = counter_card::ui(ui, counter);
                    if action != CardAction::None {
                        pending = Some((counter.id.clone(), counter.name.clone(), action));
                    }
                }
            });
        });

        if let Some((id, name, action)) = pending {
            match action {
                CardAction::Select => self.store.select_counter(Some(id)),
                CardAction::OpenSettings => {
                    if let Some(counter) = self.store.counters().iter().find(|c| c.id == id) {
                        self.settings_editor = Some(SettingsEditor::new(counter.clone()));
                    }
                }
                CardAction::Delete => {
                    self.confirm_delete = Some(ConfirmDelete {
                        id,
                        name,
                        from_detail: false,
                    });
                }
                CardAction::None => {}
            }
        }
    }

    fn detail(&mut self, ui: &mut egui::Ui) {
        let Some(counter) = self.store.selected_counter().cloned() else {
            return;
        };
        match counter_detail::ui(ui, &counter) {
            DetailAction::Back => self.store.select_counter(None),
            DetailAction::OpenSettings => {
                self.settings_editor = Some(SettingsEditor::new(counter));
            }
            DetailAction::Delete => {
                self.confirm_delete = Some(ConfirmDelete {
                    id: counter.id,
                    name: counter.name,
                    from_detail: true,
                });
            }
            DetailAction::Adjust(adjust) => {
                self.store.adjust_counter(&counter.id, adjust, &self.feedback);
            }
            DetailAction::None => {}
        }
    }

    fn settings_modal(&mut self, ctx: &egui::Context) {
        let action = match self.settings_editor.as_mut() {
            Some(editor) => editor.ui(ctx),
            None => SettingsAction::None,
        };
        match action {
            SettingsAction::Save(edited) => {
                self.store.save_settings(edited);
                self.settings_editor = None;
            }
            SettingsAction::Cancel => self.settings_editor = None,
            SettingsAction::None => {}
        }
    }

    fn confirm_delete_modal(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.confirm_delete.clone() else {
            return;
        };
        egui::Window::new("Confirm Delete")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("Delete counter '{}'?", pending.name));
                ui.colored_label(DANGER, "This cannot be undone!");
                ui.add_space(ITEM_SPACING);
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        if pending.from_detail {
                            self.store.delete_counter_from_detail(&pending.id);
                        } else {
                            self.store.delete_counter(&pending.id);
                        }
                        self.confirm_delete = None;
                    }
                    if ui.button("Cancel").clicked() {
                        self.confirm_delete = None;
                    }
                });
            });
    }
}

impl eframe::App for CounterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        self.header(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(ITEM_SPACING);
            if self.store.selected_counter().is_some() {
                self.detail(ui);
            } else {
                self.dashboard(ui);
            }
        });

        self.settings_modal(ctx);
        self.confirm_delete_modal(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Counter window exiting");
    }
}

pub fn run_gui(store: CounterStore) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Minimal Counter"),
        ..Default::default()
    };

    eframe::run_native(
        "Minimal Counter",
        options,
        Box::new(move |cc| Ok(Box::new(CounterApp::new(cc, store)))),
    )
    .map_err(|err| anyhow!("Failed to launch counter window: {err}"))
}
