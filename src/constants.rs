//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Storage layout constants
pub mod storage {
    /// Directory under the user config dir holding all persisted entries
    pub const APP_DIR: &str = "minimal-counter";

    /// Key for the ordered counter collection
    pub const COUNTERS_KEY: &str = "counters";

    /// Key for the currently selected counter id (null when on the dashboard)
    pub const SELECTED_KEY: &str = "selectedCounterId";

    /// Key for the dark-mode theme flag
    pub const DARK_MODE_KEY: &str = "darkMode";
}

/// Default settings for newly created counters
pub mod defaults {
    /// Increment/decrement unit
    pub const STEP: u32 = 1;

    /// Inclusive upper bound for the counter value
    pub const MAX_VALUE: u32 = 999;

    /// Odometer display width in digits
    pub const DIGITS: u8 = 3;

    /// Audio feedback on value change
    pub const SOUND: bool = true;

    /// Haptic feedback on value change
    pub const VIBRATION: bool = true;

    /// Theme flag when no saved state exists
    pub const DARK_MODE: bool = true;
}

/// Validation boundaries for the settings form
pub mod validation {
    /// Smallest allowed odometer width
    pub const MIN_DIGITS: u8 = 3;

    /// Largest allowed odometer width
    pub const MAX_DIGITS: u8 = 8;

    /// Smallest allowed step
    pub const MIN_STEP: u32 = 1;

    /// Smallest allowed max value
    pub const MIN_MAX_VALUE: u32 = 1;

    /// Ceiling for step and max value in the settings form.
    /// Eight odometer digits is the widest display, so nothing
    /// above 99 999 999 is ever representable.
    pub const VALUE_CEILING: u32 = 99_999_999;
}

/// Feedback cue constants (tones match the reference sound hook)
pub mod feedback {
    /// Increment cue frequency in Hz (A4)
    pub const UP_TONE_HZ: u32 = 440;

    /// Decrement cue frequency in Hz (E4)
    pub const DOWN_TONE_HZ: u32 = 330;

    /// Haptic pulse length in milliseconds
    pub const VIBRATION_MS: u32 = 50;
}
