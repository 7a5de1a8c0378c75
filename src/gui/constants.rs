//! GUI-specific constants for layout, colors and typography

use egui;

/// Main window dimensions
pub const WINDOW_WIDTH: f32 = 900.0;
pub const WINDOW_HEIGHT: f32 = 700.0;
pub const WINDOW_MIN_WIDTH: f32 = 420.0;
pub const WINDOW_MIN_HEIGHT: f32 = 480.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Dashboard card layout
pub const CARD_WIDTH: f32 = 240.0;
pub const CARD_HEIGHT: f32 = 140.0;

/// Odometer text sizes
pub const ODOMETER_SIZE_CARD: f32 = 40.0;
pub const ODOMETER_SIZE_DETAIL: f32 = 96.0;

/// Detail view increment/decrement button height
pub const ADJUST_BUTTON_HEIGHT: f32 = 90.0;

/// Accent and warning colors
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);
