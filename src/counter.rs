//! Counter data model
//!
//! `Counter` and `CounterSettings` are the persisted shapes; field names are
//! serialized in camelCase to match the on-disk layout of earlier releases.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{defaults, validation};

/// Per-counter configuration, owned exclusively by its `Counter`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterSettings {
    #[serde(default = "default_step")]
    pub step: u32,

    #[serde(default = "default_max_value")]
    pub max_value: u32,

    /// Odometer display width. A rendering hint only, never a numeric
    /// constraint on the value.
    #[serde(default = "default_digits")]
    pub digits: u8,

    #[serde(default = "default_sound")]
    pub sound: bool,

    #[serde(default = "default_vibration")]
    pub vibration: bool,
}

fn default_step() -> u32 {
    defaults::STEP
}

fn default_max_value() -> u32 {
    defaults::MAX_VALUE
}

fn default_digits() -> u8 {
    defaults::DIGITS
}

fn default_sound() -> bool {
    defaults::SOUND
}

fn default_vibration() -> bool {
    defaults::VIBRATION
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            step: default_step(),
            max_value: default_max_value(),
            digits: default_digits(),
            sound: default_sound(),
            vibration: default_vibration(),
        }
    }
}

impl CounterSettings {
    /// Clamp all fields to the validation boundaries in place.
    /// Called after loading state from disk and on every settings save,
    /// so a hand-edited state file cannot smuggle in a zero step or a
    /// twelve-digit odometer.
    pub fn clamp_to_valid(&mut self) {
        if self.step < validation::MIN_STEP {
            warn!(step = self.step, min = validation::MIN_STEP, "step below minimum, clamping");
            self.step = validation::MIN_STEP;
        } else if self.step > validation::VALUE_CEILING {
            warn!(step = self.step, max = validation::VALUE_CEILING, "step exceeds ceiling, clamping");
            self.step = validation::VALUE_CEILING;
        }

        if self.max_value < validation::MIN_MAX_VALUE {
            warn!(max_value = self.max_value, min = validation::MIN_MAX_VALUE, "max_value below minimum, clamping");
            self.max_value = validation::MIN_MAX_VALUE;
        } else if self.max_value > validation::VALUE_CEILING {
            warn!(max_value = self.max_value, max = validation::VALUE_CEILING, "max_value exceeds ceiling, clamping");
            self.max_value = validation::VALUE_CEILING;
        }

        if self.digits < validation::MIN_DIGITS {
            warn!(digits = self.digits, min = validation::MIN_DIGITS, "digits below minimum, clamping");
            self.digits = validation::MIN_DIGITS;
        } else if self.digits > validation::MAX_DIGITS {
            warn!(digits = self.digits, max = validation::MAX_DIGITS, "digits exceeds maximum, clamping");
            self.digits = validation::MAX_DIGITS;
        }
    }
}

/// A named, persisted tally with bounded range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counter {
    /// Unique within the collection, immutable after creation
    pub id: String,

    pub name: String,

    /// Invariant: `0 <= value <= settings.max_value`
    #[serde(default)]
    pub value: u32,

    #[serde(default)]
    pub settings: CounterSettings,
}

impl Counter {
    /// Create a counter with default settings and a zero value
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            value: 0,
            settings: CounterSettings::default(),
        }
    }

    /// Restore the value invariant after any change to `value` or
    /// `settings.max_value`. Returns true if the value moved.
    pub fn reclamp_value(&mut self) -> bool {
        if self.value > self.settings.max_value {
            warn!(
                id = %self.id,
                value = self.value,
                max_value = self.settings.max_value,
                "value above max_value, reclamping"
            );
            self.value = self.settings.max_value;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = CounterSettings::default();
        assert_eq!(settings.step, 1);
        assert_eq!(settings.max_value, 999);
        assert_eq!(settings.digits, 3);
        assert!(settings.sound);
        assert!(settings.vibration);
    }

    #[test]
    fn test_new_counter_starts_at_zero_with_defaults() {
        let counter = Counter::new("1700000000000".to_string(), "Counter 1".to_string());
        assert_eq!(counter.value, 0);
        assert_eq!(counter.settings, CounterSettings::default());
    }

    #[test]
    fn test_serialized_field_names_are_camel_case() {
        let counter = Counter::new("42".to_string(), "Laps".to_string());
        let json = serde_json::to_string(&counter).unwrap();
        assert!(json.contains("\"maxValue\""));
        assert!(!json.contains("max_value"));
    }

    #[test]
    fn test_partial_state_gets_defaults() {
        // Simulate an older state file missing newer settings fields
        let json = r#"{"id": "7", "name": "Laps", "value": 5, "settings": {"step": 2}}"#;
        let counter: Counter = serde_json::from_str(json).unwrap();
        assert_eq!(counter.settings.step, 2);
        assert_eq!(counter.settings.max_value, 999);
        assert!(counter.settings.sound);
    }

    #[test]
    fn test_clamp_to_valid_repairs_out_of_range_fields() {
        let mut settings = CounterSettings {
            step: 0,
            max_value: 0,
            digits: 12,
            sound: false,
            vibration: false,
        };
        settings.clamp_to_valid();
        assert_eq!(settings.step, 1);
        assert_eq!(settings.max_value, 1);
        assert_eq!(settings.digits, 8);
    }

    #[test]
    fn test_clamp_to_valid_leaves_valid_fields_alone() {
        let mut settings = CounterSettings {
            step: 5,
            max_value: 10_000,
            digits: 5,
            sound: true,
            vibration: false,
        };
        let before = settings;
        settings.clamp_to_valid();
        assert_eq!(settings, before);
    }

    #[test]
    fn test_reclamp_value_pulls_value_down_to_max() {
        let mut counter = Counter::new("1".to_string(), "Counter 1".to_string());
        counter.value = 500;
        counter.settings.max_value = 100;
        assert!(counter.reclamp_value());
        assert_eq!(counter.value, 100);
    }

    #[test]
    fn test_reclamp_value_noop_within_bounds() {
        let mut counter = Counter::new("1".to_string(), "Counter 1".to_string());
        counter.value = 50;
        assert!(!counter.reclamp_value());
        assert_eq!(counter.value, 50);
    }
}
