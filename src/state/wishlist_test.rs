#![allow(clippy::float_cmp)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::net::types::Movie;
use crate::state::storage::MemoryStorage;

fn item(id: u64) -> WishlistItem {
    WishlistItem {
        id,
        title: format!("Movie {id}"),
        poster_path: Some(format!("/poster-{id}.jpg")),
        vote_average: 7.5,
        release_date: "2024-06-01".to_owned(),
    }
}

fn store() -> WishlistStore {
    WishlistStore::new(Rc::new(MemoryStorage::new()))
}

fn store_with_backend() -> (MemoryStorage, WishlistStore) {
    let storage = MemoryStorage::new();
    let store = WishlistStore::new(Rc::new(storage.clone()));
    (storage, store)
}

fn ids(store: &WishlistStore) -> Vec<u64> {
    store.all().iter().map(|item| item.id).collect()
}

// --- toggle ---

#[test]
fn toggle_adds_an_absent_id() {
    let store = store();
    store.toggle(item(42));
    assert!(store.is_member(42));
    assert_eq!(store.len(), 1);
}

#[test]
fn toggle_removes_a_present_id() {
    let store = store();
    store.toggle(item(42));
    store.toggle(item(42));
    assert!(!store.is_member(42));
    assert_eq!(store.len(), 0);
}

#[test]
fn toggle_twice_restores_the_original_id_set() {
    let store = store();
    store.toggle(item(1));
    store.toggle(item(2));
    store.toggle(item(3));

    let mut before = ids(&store);
    store.toggle(item(2));
    store.toggle(item(2));
    let mut after = ids(&store);

    before.sort_unstable();
    after.sort_unstable();
    assert_eq!(before, after);
    assert!(store.is_member(2));
}

#[test]
fn toggle_only_touches_the_matching_id() {
    let store = store();
    store.toggle(item(1));
    store.toggle(item(2));
    store.toggle(item(1));
    assert!(!store.is_member(1));
    assert!(store.is_member(2));
    assert_eq!(store.len(), 1);
}

#[test]
fn removal_matches_by_id_not_by_contents() {
    let store = store();
    store.toggle(item(1));
    let mut renamed = item(1);
    renamed.title = "Director's Cut".to_owned();
    store.toggle(renamed);
    assert!(!store.is_member(1));
}

// --- queries ---

#[test]
fn is_member_on_an_empty_store_is_false() {
    let store = store();
    assert!(!store.is_member(42));
    assert!(store.is_empty());
}

#[test]
fn all_preserves_insertion_order() {
    let store = store();
    store.toggle(item(3));
    store.toggle(item(1));
    store.toggle(item(2));
    assert_eq!(ids(&store), vec![3, 1, 2]);
}

// --- persistence ---

#[test]
fn every_toggle_writes_the_whole_collection_through() {
    let (storage, store) = store_with_backend();
    store.toggle(item(1));
    store.toggle(item(2));

    let raw = storage.get("wishlist").expect("wishlist should be stored");
    let decoded: Vec<WishlistItem> = serde_json::from_str(&raw).expect("stored JSON array");
    assert_eq!(decoded, store.all());
}

#[test]
fn collection_round_trips_into_a_fresh_store() {
    let storage = MemoryStorage::new();
    {
        let store = WishlistStore::new(Rc::new(storage.clone()));
        store.toggle(item(3));
        store.toggle(item(1));
    }
    let reloaded = WishlistStore::new(Rc::new(storage));
    assert_eq!(ids(&reloaded), vec![3, 1]);
    assert_eq!(reloaded.all()[0], item(3));
}

#[test]
fn corrupt_stored_value_reads_as_empty() {
    let storage = MemoryStorage::new();
    storage.set("wishlist", "certainly not json");
    let store = WishlistStore::new(Rc::new(storage));
    assert!(store.is_empty());
}

#[test]
fn non_array_stored_value_reads_as_empty() {
    let storage = MemoryStorage::new();
    storage.set("wishlist", "{\"id\":1}");
    let store = WishlistStore::new(Rc::new(storage));
    assert!(store.is_empty());
}

#[test]
fn array_of_wrong_shapes_reads_as_empty() {
    let storage = MemoryStorage::new();
    storage.set("wishlist", "[1,2,3]");
    let store = WishlistStore::new(Rc::new(storage));
    assert!(store.is_empty());
}

#[test]
fn absent_poster_is_stored_as_null_not_omitted() {
    let (storage, store) = store_with_backend();
    let mut posterless = item(7);
    posterless.poster_path = None;
    store.toggle(posterless);

    let raw = storage.get("wishlist").expect("wishlist should be stored");
    assert!(raw.contains("\"poster_path\":null"));
}

// --- projection from catalog movies ---

#[test]
fn wishlist_item_projects_the_catalog_fields() {
    let movie = Movie {
        id: 42,
        title: "Arrival".to_owned(),
        overview: "Aliens arrive.".to_owned(),
        poster_path: Some("/arrival.jpg".to_owned()),
        backdrop_path: Some("/backdrop.jpg".to_owned()),
        vote_average: 7.9,
        release_date: "2016-11-11".to_owned(),
    };
    let item = WishlistItem::from(&movie);
    assert_eq!(item.id, 42);
    assert_eq!(item.title, "Arrival");
    assert_eq!(item.poster_path.as_deref(), Some("/arrival.jpg"));
    assert_eq!(item.vote_average, 7.9);
    assert_eq!(item.release_date, "2016-11-11");
}

#[test]
fn projection_keeps_an_absent_poster_absent() {
    let movie = Movie {
        id: 1,
        title: "Untitled".to_owned(),
        overview: String::new(),
        poster_path: None,
        backdrop_path: None,
        vote_average: 0.0,
        release_date: String::new(),
    };
    assert_eq!(WishlistItem::from(&movie).poster_path, None);
}

// --- change notification ---

#[test]
fn every_toggle_notifies_subscribers() {
    let store = store();
    let notified = Rc::new(Cell::new(0_u32));
    let _sub = store.subscribe({
        let notified = Rc::clone(&notified);
        move || notified.set(notified.get() + 1)
    });

    store.toggle(item(1));
    store.toggle(item(1));
    assert_eq!(notified.get(), 2);
}

#[test]
fn queries_do_not_notify() {
    let store = store();
    store.toggle(item(1));

    let notified = Rc::new(Cell::new(0_u32));
    let _sub = store.subscribe({
        let notified = Rc::clone(&notified);
        move || notified.set(notified.get() + 1)
    });

    let _ = store.is_member(1);
    let _ = store.all();
    assert_eq!(notified.get(), 0);
}
