use std::rc::Rc;

use super::*;

// --- MemoryStorage ---

#[test]
fn get_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("users"), None);
}

#[test]
fn set_then_get_round_trips() {
    let storage = MemoryStorage::new();
    storage.set("users", "[]");
    assert_eq!(storage.get("users"), Some("[]".to_owned()));
}

#[test]
fn set_overwrites_existing_value() {
    let storage = MemoryStorage::new();
    storage.set("keepSession", "false");
    storage.set("keepSession", "true");
    assert_eq!(storage.get("keepSession"), Some("true".to_owned()));
    assert_eq!(storage.len(), 1);
}

#[test]
fn clones_share_entries() {
    let storage = MemoryStorage::new();
    let alias = storage.clone();
    storage.set("wishlist", "[]");
    assert_eq!(alias.get("wishlist"), Some("[]".to_owned()));
}

#[test]
fn starts_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());
    assert_eq!(storage.len(), 0);
}

// --- trait object handle ---

#[test]
fn usable_through_dyn_handle() {
    let storage = MemoryStorage::new();
    let handle: Rc<dyn StorageBackend> = Rc::new(storage.clone());
    handle.set("currentUser", "\"a@x.com\"");
    assert_eq!(storage.get("currentUser"), Some("\"a@x.com\"".to_owned()));
}

#[test]
fn shared_backend_accepts_writes() {
    let backend = shared_backend();
    backend.set("k", "\"v\"");
    assert_eq!(backend.get("k"), Some("\"v\"".to_owned()));
}
