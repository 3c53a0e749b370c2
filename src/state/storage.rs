//! Durable key-value storage boundary.
//!
//! The stores treat storage as a best-effort write-through cache: reads
//! happen once at construction, writes happen on every mutation, and a
//! failed write leaves the in-memory value authoritative for the rest
//! of the session.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key-value string store the durable cells write through to.
pub trait StorageBackend {
    /// Raw string stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`. Best-effort: failures are dropped.
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`-backed store. Browser builds only.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            // Quota and privacy-mode errors are swallowed.
            let _ = storage.set_item(key, value);
        }
    }
}

/// In-memory store for tests and non-browser builds.
///
/// Clones share the same underlying map, so one backend handle can be
/// given to several store generations to simulate a page reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}

/// The backend the running app should use: `localStorage` in the
/// browser, process memory anywhere else.
#[must_use]
pub fn shared_backend() -> Rc<dyn StorageBackend> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserStorage)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryStorage::new())
    }
}
