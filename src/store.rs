//! Counter store: the single owner of application state
//!
//! Holds the ordered counter collection, the current selection and the
//! theme flag, persisting each under its own storage key after every
//! mutation. All operations are total; an unknown id is a silent no-op
//! and the only failure surface is persistence I/O, which the storage
//! layer swallows.

use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

use crate::constants::{defaults, storage};
use crate::counter::{Counter, CounterSettings};
use crate::feedback::FeedbackSink;
use crate::handlers::{self, Adjust};
use crate::storage::Storage;

/// Shallow partial update for a single counter. A `settings` patch
/// replaces the whole sub-object, it does not merge per-field.
#[derive(Debug, Default, Clone)]
pub struct CounterPatch {
    pub name: Option<String>,
    pub value: Option<u32>,
    pub settings: Option<CounterSettings>,
}

pub struct CounterStore {
    counters: Vec<Counter>,
    selected_counter_id: Option<String>,
    dark_mode: bool,
    storage: Storage,
}

impl CounterStore {
    /// Restore persisted state, repairing anything a hand-edited or
    /// corrupt state file left out of range.
    pub fn load(storage: Storage) -> Self {
        let mut counters: Vec<Counter> = storage.load(storage::COUNTERS_KEY, Vec::new());
        for counter in &mut counters {
            counter.settings.clamp_to_valid();
            counter.reclamp_value();
        }
        let selected_counter_id = storage.load(storage::SELECTED_KEY, None);
        let dark_mode = storage.load(storage::DARK_MODE_KEY, defaults::DARK_MODE);
        info!(
            counters = counters.len(),
            selected = ?selected_counter_id,
            dark_mode,
            "Restored counter state"
        );

        let mut store = Self {
            counters,
            selected_counter_id,
            dark_mode,
            storage,
        };
        // A restored selection can dangle if the counters entry was lost
        store.reconcile_selection();
        store
    }

    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    pub fn selected_counter_id(&self) -> Option<&str> {
        self.selected_counter_id.as_deref()
    }

    pub fn selected_counter(&self) -> Option<&Counter> {
        let id = self.selected_counter_id.as_deref()?;
        self.counters.iter().find(|c| c.id == id)
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Append a counter with default settings and select it.
    /// Returns the new counter's id.
    pub fn add_counter(&mut self) -> String {
        let id = self.next_id();
        let name = format!("Counter {}", self.counters.len() + 1);
        info!(id = %id, name = %name, "Adding counter");
        self.counters.push(Counter::new(id.clone(), name));
        self.persist_counters();
        self.selected_counter_id = Some(id.clone());
        self.persist_selection();
        id
    }

    /// Merge `patch` into the counter matching `id`
    pub fn update_counter(&mut self, id: &str, patch: CounterPatch) {
        let Some(counter) = self.counters.iter_mut().find(|c| c.id == id) else {
            debug!(id, "Update for unknown counter ignored");
            return;
        };
        if let Some(name) = patch.name {
            counter.name = name;
        }
        if let Some(value) = patch.value {
            counter.value = value;
        }
        if let Some(settings) = patch.settings {
            counter.settings = settings;
        }
        counter.reclamp_value();
        self.persist_counters();
        self.reconcile_selection();
    }

    /// Remove the counter matching `id`, leaving the rest in order
    pub fn delete_counter(&mut self, id: &str) {
        let before = self.counters.len();
        self.counters.retain(|c| c.id != id);
        if self.counters.len() == before {
            debug!(id, "Delete for unknown counter ignored");
            return;
        }
        info!(id, "Deleted counter");
        self.persist_counters();
        self.reconcile_selection();
    }

    /// Remove the counter being viewed and navigate back to the
    /// dashboard by clearing the selection unconditionally
    pub fn delete_counter_from_detail(&mut self, id: &str) {
        self.delete_counter(id);
        if self.selected_counter_id.is_some() {
            self.selected_counter_id = None;
            self.persist_selection();
        }
    }

    /// Set or clear the selection. Not validated here; reconciliation
    /// repairs a dangling id on the next collection mutation.
    pub fn select_counter(&mut self, id: Option<String>) {
        self.selected_counter_id = id;
        self.persist_selection();
    }

    /// Full-counter replacement from the settings form. The edited
    /// settings are clamped to the form's bounds and the value is
    /// re-clamped against the possibly lowered max.
    pub fn save_settings(&mut self, mut updated: Counter) {
        updated.settings.clamp_to_valid();
        updated.reclamp_value();
        let id = updated.id.clone();
        self.update_counter(
            &id,
            CounterPatch {
                name: Some(updated.name),
                value: Some(updated.value),
                settings: Some(updated.settings),
            },
        );
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.storage.save(storage::DARK_MODE_KEY, &self.dark_mode);
    }

    /// Apply an increment/decrement intent to the counter matching `id`.
    /// Persists and fires the feedback cue only when the value actually
    /// moved; a clamped no-op touches neither disk nor sink.
    /// Returns true if the value changed.
    pub fn adjust_counter(&mut self, id: &str, adjust: Adjust, feedback: &dyn FeedbackSink) -> bool {
        let Some(counter) = self.counters.iter().find(|c| c.id == id) else {
            debug!(id, "Adjust for unknown counter ignored");
            return false;
        };
        let settings = counter.settings;
        let Some(next) = handlers::apply(adjust, counter.value, &settings) else {
            return false;
        };
        self.update_counter(
            id,
            CounterPatch {
                value: Some(next),
                ..Default::default()
            },
        );
        if settings.sound || settings.vibration {
            match adjust {
                Adjust::Increment => feedback.on_increment(settings.sound, settings.vibration),
                Adjust::Decrement => feedback.on_decrement(settings.sound, settings.vibration),
            }
        }
        true
    }

    /// Millisecond timestamp id, nudged forward past any collision so
    /// back-to-back creations stay unique
    fn next_id(&self) -> String {
        let mut stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        while self.counters.iter().any(|c| c.id == stamp.to_string()) {
            stamp += 1;
        }
        stamp.to_string()
    }

    /// Invariant check run after every collection mutation: a selection
    /// pointing at a counter that no longer exists is reset to null
    fn reconcile_selection(&mut self) {
        if let Some(id) = self.selected_counter_id.as_deref()
            && !self.counters.iter().any(|c| c.id == id)
        {
            warn!(id, "Selected counter no longer exists, returning to dashboard");
            self.selected_counter_id = None;
            self.persist_selection();
        }
    }

    fn persist_counters(&self) {
        self.storage.save(storage::COUNTERS_KEY, &self.counters);
    }

    fn persist_selection(&self) {
        self.storage.save(storage::SELECTED_KEY, &self.selected_counter_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::NullFeedback;
    use std::cell::Cell;

    fn temp_store() -> (tempfile::TempDir, CounterStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CounterStore::load(Storage::with_root(dir.path().to_path_buf()));
        (dir, store)
    }

    #[derive(Default)]
    struct RecordingSink {
        ups: Cell<u32>,
        downs: Cell<u32>,
    }

    impl FeedbackSink for RecordingSink {
        fn on_increment(&self, _sound: bool, _vibration: bool) {
            self.ups.set(self.ups.get() + 1);
        }
        fn on_decrement(&self, _sound: bool, _vibration: bool) {
            self.downs.set(self.downs.get() + 1);
        }
    }

    #[test]
    fn test_add_three_counters_naming_and_defaults() {
        let (_dir, mut store) = temp_store();
        store.add_counter();
        store.add_counter();
        store.add_counter();

        let counters = store.counters();
        assert_eq!(counters.len(), 3);
        for (i, counter) in counters.iter().enumerate() {
            assert_eq!(counter.name, format!("Counter {}", i + 1));
            assert_eq!(counter.value, 0);
            assert_eq!(counter.settings.step, 1);
            assert_eq!(counter.settings.max_value, 999);
        }
    }

    #[test]
    fn test_add_counter_selects_it_and_ids_are_unique() {
        let (_dir, mut store) = temp_store();
        let a = store.add_counter();
        let b = store.add_counter();
        let c = store.add_counter();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(store.selected_counter_id(), Some(c.as_str()));
    }

    #[test]
    fn test_delete_removes_exactly_one_preserving_order() {
        let (_dir, mut store) = temp_store();
        let a = store.add_counter();
        let b = store.add_counter();
        let c = store.add_counter();

        store.delete_counter(&b);

        let ids: Vec<&str> = store.counters().iter().map(|x| x.id.as_str()).collect();
        assert_eq!(ids, vec![a.as_str(), c.as_str()]);
    }

    #[test]
    fn test_delete_selected_counter_clears_selection() {
        let (_dir, mut store) = temp_store();
        let a = store.add_counter();
        let b = store.add_counter();
        store.select_counter(Some(b.clone()));

        store.delete_counter(&b);

        assert_eq!(store.counters().len(), 1);
        assert_eq!(store.counters()[0].id, a);
        assert_eq!(store.selected_counter_id(), None);
    }

    #[test]
    fn test_delete_unselected_counter_keeps_selection() {
        let (_dir, mut store) = temp_store();
        let a = store.add_counter();
        let b = store.add_counter();
        store.select_counter(Some(b.clone()));

        store.delete_counter(&a);

        assert_eq!(store.selected_counter_id(), Some(b.as_str()));
    }

    #[test]
    fn test_delete_from_detail_always_clears_selection() {
        let (_dir, mut store) = temp_store();
        let a = store.add_counter();
        let b = store.add_counter();
        store.select_counter(Some(b));

        store.delete_counter_from_detail(&a);

        assert_eq!(store.selected_counter_id(), None);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let (_dir, mut store) = temp_store();
        store.add_counter();
        store.delete_counter("nope");
        assert_eq!(store.counters().len(), 1);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (_dir, mut store) = temp_store();
        let id = store.add_counter();
        store.update_counter(
            "nope",
            CounterPatch {
                value: Some(42),
                ..Default::default()
            },
        );
        assert_eq!(store.counters()[0].id, id);
        assert_eq!(store.counters()[0].value, 0);
    }

    #[test]
    fn test_dangling_selection_repaired_on_next_mutation() {
        let (_dir, mut store) = temp_store();
        let id = store.add_counter();
        store.select_counter(Some("ghost".to_string()));

        // Selection is only validated as a consequence of a collection mutation
        store.update_counter(
            &id,
            CounterPatch {
                value: Some(1),
                ..Default::default()
            },
        );

        assert_eq!(store.selected_counter_id(), None);
    }

    #[test]
    fn test_save_settings_replaces_whole_counter() {
        let (_dir, mut store) = temp_store();
        let id = store.add_counter();

        let mut edited = store.counters()[0].clone();
        edited.name = "Laps".to_string();
        edited.settings = CounterSettings {
            step: 5,
            max_value: 100,
            digits: 4,
            sound: false,
            vibration: false,
        };
        store.save_settings(edited);

        let counter = store.counters().iter().find(|c| c.id == id).unwrap();
        assert_eq!(counter.name, "Laps");
        assert_eq!(counter.settings.step, 5);
        assert_eq!(counter.settings.max_value, 100);
        assert!(!counter.settings.sound);
    }

    #[test]
    fn test_save_settings_reclamps_value_below_new_max() {
        let (_dir, mut store) = temp_store();
        let id = store.add_counter();
        store.update_counter(
            &id,
            CounterPatch {
                value: Some(500),
                ..Default::default()
            },
        );

        let mut edited = store.counters()[0].clone();
        edited.settings.max_value = 100;
        store.save_settings(edited);

        assert_eq!(store.counters()[0].value, 100);
    }

    #[test]
    fn test_save_settings_clamps_invalid_form_values() {
        let (_dir, mut store) = temp_store();
        store.add_counter();

        let mut edited = store.counters()[0].clone();
        edited.settings.step = 0;
        edited.settings.digits = 99;
        store.save_settings(edited);

        assert_eq!(store.counters()[0].settings.step, 1);
        assert_eq!(store.counters()[0].settings.digits, 8);
    }

    #[test]
    fn test_adjust_increments_and_fires_feedback() {
        let (_dir, mut store) = temp_store();
        let id = store.add_counter();
        let sink = RecordingSink::default();

        assert!(store.adjust_counter(&id, Adjust::Increment, &sink));
        assert_eq!(store.counters()[0].value, 1);
        assert_eq!(sink.ups.get(), 1);
        assert_eq!(sink.downs.get(), 0);
    }

    #[test]
    fn test_adjust_at_max_is_silent_noop() {
        let (_dir, mut store) = temp_store();
        let id = store.add_counter();
        store.update_counter(
            &id,
            CounterPatch {
                value: Some(998),
                ..Default::default()
            },
        );
        let sink = RecordingSink::default();

        assert!(store.adjust_counter(&id, Adjust::Increment, &sink));
        assert_eq!(store.counters()[0].value, 999);
        assert!(!store.adjust_counter(&id, Adjust::Increment, &sink));
        assert_eq!(store.counters()[0].value, 999);
        assert_eq!(sink.ups.get(), 1);
    }

    #[test]
    fn test_adjust_at_zero_is_silent_noop() {
        let (_dir, mut store) = temp_store();
        let id = store.add_counter();
        let mut edited = store.counters()[0].clone();
        edited.settings.step = 5;
        store.save_settings(edited);
        let sink = RecordingSink::default();

        assert!(!store.adjust_counter(&id, Adjust::Decrement, &sink));
        assert_eq!(store.counters()[0].value, 0);
        assert_eq!(sink.downs.get(), 0);
    }

    #[test]
    fn test_adjust_with_feedback_disabled_skips_sink() {
        let (_dir, mut store) = temp_store();
        let id = store.add_counter();
        let mut edited = store.counters()[0].clone();
        edited.settings.sound = false;
        edited.settings.vibration = false;
        store.save_settings(edited);
        let sink = RecordingSink::default();

        assert!(store.adjust_counter(&id, Adjust::Increment, &sink));
        assert_eq!(sink.ups.get(), 0);
    }

    #[test]
    fn test_state_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let id;
        {
            let mut store = CounterStore::load(Storage::with_root(dir.path().to_path_buf()));
            id = store.add_counter();
            store.adjust_counter(&id, Adjust::Increment, &NullFeedback);
            store.toggle_dark_mode();
        }

        let store = CounterStore::load(Storage::with_root(dir.path().to_path_buf()));
        assert_eq!(store.counters().len(), 1);
        assert_eq!(store.counters()[0].value, 1);
        assert_eq!(store.selected_counter_id(), Some(id.as_str()));
        assert!(!store.dark_mode());
    }

    #[test]
    fn test_dangling_restored_selection_cleared_at_load() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::with_root(dir.path().to_path_buf());
        storage.save("selectedCounterId", &Some("ghost".to_string()));

        let store = CounterStore::load(Storage::with_root(dir.path().to_path_buf()));
        assert_eq!(store.selected_counter_id(), None);
    }

    #[test]
    fn test_out_of_range_persisted_state_repaired_at_load() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::with_root(dir.path().to_path_buf());
        let mut counter = Counter::new("1".to_string(), "Counter 1".to_string());
        counter.value = 5_000;
        counter.settings.max_value = 100;
        counter.settings.digits = 0;
        storage.save("counters", &vec![counter]);

        let store = CounterStore::load(Storage::with_root(dir.path().to_path_buf()));
        assert_eq!(store.counters()[0].value, 100);
        assert_eq!(store.counters()[0].settings.digits, 3);
    }

    #[test]
    fn test_dark_mode_defaults_to_true() {
        let (_dir, store) = temp_store();
        assert!(store.dark_mode());
    }
}
