//! Persisted session storage.
//!
//! DESIGN
//! ======
//! The session lives in two string slots that survive page reloads: the
//! opaque auth token and the JSON-serialized user record. Both the session
//! store and the HTTP layer's 401 handler write through the same
//! `SessionPersistence` trait, so tests and SSR can swap the browser's
//! localStorage for an in-memory map.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage slot holding the opaque session token.
pub const TOKEN_KEY: &str = "auth_token";

/// Storage slot holding the JSON-serialized session user.
pub const USER_KEY: &str = "auth_user";

/// Durable string-keyed storage for the two session slots.
pub trait SessionPersistence {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `SessionPersistence` over the browser's localStorage.
///
/// Outside the browser (SSR, native tests) every read returns `None` and
/// writes are no-ops. Storage failures in the browser are swallowed: a
/// session that cannot be persisted degrades to a per-tab session.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionPersistence for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(key, value);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(key);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory `SessionPersistence` for tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionPersistence for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.slots.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.slots.borrow_mut().remove(key);
    }
}
