use std::cell::RefCell;

use super::*;

/// In-memory `PreferenceStore` double.
struct MemoryStore(RefCell<Option<bool>>);

impl MemoryStore {
    fn new(initial: Option<bool>) -> Self {
        Self(RefCell::new(initial))
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<bool> {
        *self.0.borrow()
    }

    fn save(&self, enabled: bool) {
        *self.0.borrow_mut() = Some(enabled);
    }
}

// =============================================================
// resolve_initial
// =============================================================

#[test]
fn stored_preference_wins_over_system_hint() {
    assert!(resolve_initial(Some(true), false));
    assert!(!resolve_initial(Some(false), true));
}

#[test]
fn missing_preference_follows_system_hint() {
    assert!(resolve_initial(None, true));
    assert!(!resolve_initial(None, false));
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_flips_and_persists() {
    let store = MemoryStore::new(None);
    let next = toggle(false, &store);
    assert!(next);
    assert_eq!(store.load(), Some(true));
}

#[test]
fn double_toggle_restores_mode_and_stored_value() {
    let store = MemoryStore::new(Some(false));
    let original = resolve_initial(store.load(), true);
    let once = toggle(original, &store);
    let twice = toggle(once, &store);
    assert_eq!(twice, original);
    assert_eq!(store.load(), Some(original));
}

#[test]
fn outside_a_browser_local_storage_is_empty() {
    assert_eq!(LocalStorage.load(), None);
}
