//! Dark mode resolution, persistence, and application.
//!
//! The stored preference (localStorage key `darkMode`, `"true"`/`"false"`)
//! wins; with no stored value the OS `prefers-color-scheme` hint decides.
//! Toggling writes the new value to the store and flips the `dark` class on
//! the `<html>` element in the same call, so the persisted value and the
//! displayed mode never diverge. Storage failures degrade to a silent no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "browser")]
const STORAGE_KEY: &str = "darkMode";

/// Durable store for the single dark-mode boolean. Injectable so the toggle
/// logic tests without a browser.
pub trait PreferenceStore {
    /// The stored preference, or `None` if nothing was ever saved (or the
    /// store is unavailable).
    fn load(&self) -> Option<bool>;

    /// Persist the preference. Failures are swallowed; the displayed mode
    /// still changes for the rest of the session.
    fn save(&self, enabled: bool);
}

/// `PreferenceStore` backed by `window.localStorage`.
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn load(&self) -> Option<bool> {
        #[cfg(feature = "browser")]
        {
            let window = web_sys::window()?;
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                    return Some(val == "true");
                }
            }
            None
        }
        #[cfg(not(feature = "browser"))]
        {
            None
        }
    }

    fn save(&self, enabled: bool) {
        #[cfg(feature = "browser")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(STORAGE_KEY, if enabled { "true" } else { "false" });
                }
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = enabled;
        }
    }
}

/// Startup resolution: a stored preference wins, otherwise follow the OS
/// color-scheme hint.
pub fn resolve_initial(stored: Option<bool>, system_prefers_dark: bool) -> bool {
    stored.unwrap_or(system_prefers_dark)
}

/// Whether the OS reports `prefers-color-scheme: dark`.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "browser")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "browser"))]
    {
        false
    }
}

/// Read the effective dark-mode preference at startup.
pub fn read_preference() -> bool {
    resolve_initial(LocalStorage.load(), system_prefers_dark())
}

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "browser")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if enabled {
                    let _ = class_list.add_1("dark");
                } else {
                    let _ = class_list.remove_1("dark");
                }
            }
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode: apply the new value to the document and persist it
/// through `store` in the same call.
pub fn toggle(current: bool, store: &impl PreferenceStore) -> bool {
    let next = !current;
    apply(next);
    store.save(next);
    next
}
