//! Pure value arithmetic for increment/decrement intents
//!
//! Every path that changes a counter value, pointer buttons and
//! keyboard alike, routes through these functions so the clamp rule
//! lives in exactly one place.

use crate::counter::CounterSettings;

/// A user intent to move a counter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjust {
    Increment,
    Decrement,
}

/// Next value for an increment intent, saturating at `max_value`
pub fn compute_increment(value: u32, settings: &CounterSettings) -> u32 {
    value.saturating_add(settings.step).min(settings.max_value)
}

/// Next value for a decrement intent, saturating at zero
pub fn compute_decrement(value: u32, settings: &CounterSettings) -> u32 {
    value.saturating_sub(settings.step)
}

/// Apply an intent, returning `Some(next)` only when the value actually
/// moves. `None` at a clamp boundary tells the caller to skip both the
/// store update and the feedback cue.
pub fn apply(adjust: Adjust, value: u32, settings: &CounterSettings) -> Option<u32> {
    let next = match adjust {
        Adjust::Increment => compute_increment(value, settings),
        Adjust::Decrement => compute_decrement(value, settings),
    };
    if next == value { None } else { Some(next) }
}
