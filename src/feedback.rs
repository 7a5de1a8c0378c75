//! Feedback cues fired on successful value changes
//!
//! The store invokes a sink only when a value actually moved and the
//! counter has sound or vibration enabled; the sink decides what a cue
//! means on this platform. Fire-and-forget, failures ignored.

use tracing::debug;

use crate::constants::feedback;

pub trait FeedbackSink {
    fn on_increment(&self, sound: bool, vibration: bool);
    fn on_decrement(&self, sound: bool, vibration: bool);
}

/// Sink that traces the cue it would play. Stands in for an audio/haptic
/// backend on desktops without one.
pub struct LogFeedback;

impl FeedbackSink for LogFeedback {
    fn on_increment(&self, sound: bool, vibration: bool) {
        if sound {
            debug!(tone_hz = feedback::UP_TONE_HZ, "increment cue");
        }
        if vibration {
            debug!(pulse_ms = feedback::VIBRATION_MS, "increment pulse");
        }
    }

    fn on_decrement(&self, sound: bool, vibration: bool) {
        if sound {
            debug!(tone_hz = feedback::DOWN_TONE_HZ, "decrement cue");
        }
        if vibration {
            debug!(pulse_ms = feedback::VIBRATION_MS, "decrement pulse");
        }
    }
}

/// Sink that does nothing, for headless callers
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn on_increment(&self, _sound: bool, _vibration: bool) {}
    fn on_decrement(&self, _sound: bool, _vibration: bool) {}
}
