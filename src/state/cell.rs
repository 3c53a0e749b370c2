#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::storage::StorageBackend;

/// A typed slot in durable storage.
///
/// The cell reads its value once at construction and writes through on
/// every mutation, so the in-memory copy and the stored copy agree
/// after each `set`. A raw value that is missing or fails to decode
/// yields the fallback instead, and the stored raw value is left as-is:
/// nothing is written until the first explicit mutation.
///
/// Single-threaded by construction (`RefCell`, no locking); cross-tab
/// writes to the same key are not coordinated.
pub struct StorageCell<T> {
    backend: Rc<dyn StorageBackend>,
    key: String,
    value: RefCell<T>,
}

impl<T> StorageCell<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    /// Bind a cell to `key`, decoding the stored value or falling back
    /// to `fallback`.
    pub fn new(backend: Rc<dyn StorageBackend>, key: impl Into<String>, fallback: T) -> Self {
        let key = key.into();
        let value = backend
            .get(&key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or(fallback);
        Self {
            backend,
            key,
            value: RefCell::new(value),
        }
    }

    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Run `f` against a borrow of the current value, without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Replace the value, then write it through.
    pub fn set(&self, next: T) {
        *self.value.borrow_mut() = next;
        self.write_through();
    }

    /// Mutate the value in place, then write it through.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.value.borrow_mut());
        self.write_through();
    }

    fn write_through(&self) {
        // Serialization failures leave the stored copy stale; the
        // in-memory value is still the source of truth.
        if let Ok(raw) = serde_json::to_string(&*self.value.borrow()) {
            self.backend.set(&self.key, &raw);
        }
    }
}
