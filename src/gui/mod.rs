//! Desktop GUI built with egui/eframe
//!
//! The GUI owns no counter state; every gesture is translated into a
//! store operation and the next frame renders whatever the store says.

pub mod app;
pub mod components;
pub mod constants;

pub use app::run_gui;
