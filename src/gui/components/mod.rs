pub mod counter_card;
pub mod counter_detail;
pub mod odometer;
pub mod settings_editor;
