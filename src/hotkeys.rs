//! Global keyboard shortcuts for the selected counter
//!
//! ArrowUp / `+` increment, ArrowDown / `-` decrement. The mapping is a
//! pure key-to-intent lookup; the GUI decides when it applies (never
//! while a modal surface is open, never without a selection) and routes
//! the intent through the same handlers as the pointer buttons.

use egui::Key;

use crate::handlers::Adjust;

/// Keys the shortcut path listens for
pub const BINDINGS: &[(Key, Adjust)] = &[
    (Key::ArrowUp, Adjust::Increment),
    (Key::Plus, Adjust::Increment),
    (Key::ArrowDown, Adjust::Decrement),
    (Key::Minus, Adjust::Decrement),
];

/// Intent for a pressed key, if it is bound
pub fn adjust_for_key(key: Key) -> Option<Adjust> {
    BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, adjust)| *adjust)
}

/// Whether the shortcut path is active at all this frame
pub fn shortcuts_active(modal_open: bool, has_selection: bool) -> bool {
    !modal_open && has_selection
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_plus_keys_map_to_increment() {
        assert_eq!(adjust_for_key(Key::ArrowUp), Some(Adjust::Increment));
        assert_eq!(adjust_for_key(Key::Plus), Some(Adjust::Increment));
    }

    #[test]
    fn test_arrow_and_minus_keys_map_to_decrement() {
        assert_eq!(adjust_for_key(Key::ArrowDown), Some(Adjust::Decrement));
        assert_eq!(adjust_for_key(Key::Minus), Some(Adjust::Decrement));
    }

    #[test]
    fn test_unbound_keys_map_to_nothing() {
        assert_eq!(adjust_for_key(Key::Space), None);
        assert_eq!(adjust_for_key(Key::A), None);
    }

    #[test]
    fn test_suppressed_while_modal_open_or_unselected() {
        assert!(shortcuts_active(false, true));
        assert!(!shortcuts_active(true, true));
        assert!(!shortcuts_active(false, false));
        assert!(!shortcuts_active(true, false));
    }
}
