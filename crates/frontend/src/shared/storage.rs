//! Thin localStorage helpers. Storage being unavailable (private mode,
//! quota) is treated like an empty store.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{window, Storage};

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn set_string(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for '{}'", key);
        }
    }
}

/// Read a JSON value; a corrupt entry is logged and ignored.
pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_string(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring unreadable '{}' in localStorage: {}", key, e);
            None
        }
    }
}

pub fn set_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => set_string(key, &raw),
        Err(e) => log::error!("could not serialize '{}': {}", key, e),
    }
}
