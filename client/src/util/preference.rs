//! Typed browser preferences.
//!
//! TRADE-OFFS
//! ==========
//! Preferences live in `localStorage` as JSON and are best-effort. Storage
//! or decode failures are logged and read as "unset". SSR and native builds
//! never touch storage, so server markup does not depend on it.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A value of type `T` remembered under one storage key.
pub struct Preference<T> {
    key: &'static str,
    value: PhantomData<fn() -> T>,
}

impl<T> Preference<T> {
    pub const fn new(key: &'static str) -> Self {
        Self { key, value: PhantomData }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }
}

#[cfg(feature = "hydrate")]
impl<T: Serialize + DeserializeOwned> Preference<T> {
    /// Stored value, or `None` when unset or unreadable.
    pub fn load(&self) -> Option<T> {
        let raw = match storage()?.get_item(self.key) {
            Ok(raw) => raw?,
            Err(_) => {
                log::warn!("could not read preference {}", self.key);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("ignoring stored preference {}: {e}", self.key);
                None
            }
        }
    }

    pub fn save(&self, value: &T) {
        let Some(storage) = storage() else {
            return;
        };
        match serde_json::to_string(value) {
            Ok(raw) => {
                if storage.set_item(self.key, &raw).is_err() {
                    log::warn!("could not persist preference {}", self.key);
                }
            }
            Err(e) => log::warn!("could not encode preference {}: {e}", self.key),
        }
    }
}

#[cfg(not(feature = "hydrate"))]
impl<T: Serialize + DeserializeOwned> Preference<T> {
    pub fn load(&self) -> Option<T> {
        None
    }

    pub fn save(&self, _value: &T) {}
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(_) => {
            log::warn!("localStorage unavailable");
            None
        }
    }
}
