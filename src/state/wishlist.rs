//! Bookmarked movies for this browser profile.
//!
//! The collection is keyed by movie id with insertion order kept for
//! display. It is shared by every account that signs in on the same
//! profile; see DESIGN.md for why that scoping is preserved.

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

use std::rc::Rc;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::Movie;
use crate::state::cell::StorageCell;
use crate::state::storage::StorageBackend;
use crate::state::subscribe::{Subscribers, Subscription};

const WISHLIST_KEY: &str = "wishlist";

/// The slice of a catalog movie worth persisting as a bookmark.
///
/// `poster_path` is serialized even when absent (as `null`) so stored
/// items always carry the same shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub vote_average: f64,
    pub release_date: String,
}

impl From<&Movie> for WishlistItem {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_path: movie.poster_path.clone(),
            vote_average: movie.vote_average,
            release_date: movie.release_date.clone(),
        }
    }
}

/// The wishlist collection, durable under a single key.
///
/// A stored value that is missing, corrupt or not an array of items
/// decodes to the empty collection; errors never leave the storage
/// boundary.
pub struct WishlistStore {
    items: StorageCell<Vec<WishlistItem>>,
    subscribers: Subscribers,
}

impl WishlistStore {
    #[must_use]
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self {
            items: StorageCell::new(backend, WISHLIST_KEY, Vec::new()),
            subscribers: Subscribers::new(),
        }
    }

    /// Bookmark `item`, or remove the bookmark if its id is already
    /// present. Two toggles of the same id are a no-op pair.
    pub fn toggle(&self, item: WishlistItem) {
        self.items.update(|items| {
            if items.iter().any(|existing| existing.id == item.id) {
                items.retain(|existing| existing.id != item.id);
            } else {
                items.push(item);
            }
        });
        self.subscribers.notify();
    }

    /// Whether `id` is currently bookmarked.
    #[must_use]
    pub fn is_member(&self, id: u64) -> bool {
        self.items.with(|items| items.iter().any(|item| item.id == id))
    }

    /// Snapshot of the collection in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<WishlistItem> {
        self.items.get()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.with(Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.with(Vec::is_empty)
    }

    /// Register a change callback; the guard unsubscribes on drop.
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        self.subscribers.subscribe(callback)
    }
}

struct ProvidedWishlist {
    store: WishlistStore,
    _subscription: Subscription,
}

/// Cloneable, `Copy` handle components obtain via [`use_wishlist`].
#[derive(Clone, Copy)]
pub struct WishlistContext {
    inner: StoredValue<ProvidedWishlist, LocalStorage>,
    revision: RwSignal<u64>,
}

impl WishlistContext {
    fn new(store: WishlistStore) -> Self {
        let revision = RwSignal::new(0_u64);
        let subscription = store.subscribe(move || revision.update(|r| *r += 1));
        Self {
            inner: StoredValue::new_local(ProvidedWishlist {
                store,
                _subscription: subscription,
            }),
            revision,
        }
    }

    /// Reactive snapshot in insertion order.
    pub fn items(&self) -> Vec<WishlistItem> {
        self.revision.track();
        self.inner.with_value(|p| p.store.all())
    }

    pub fn is_member(&self, id: u64) -> bool {
        self.revision.track();
        self.inner.with_value(|p| p.store.is_member(id))
    }

    pub fn is_empty(&self) -> bool {
        self.revision.track();
        self.inner.with_value(|p| p.store.is_empty())
    }

    pub fn toggle(&self, item: WishlistItem) {
        self.inner.with_value(|p| p.store.toggle(item));
    }
}

/// Construct the process-wide wishlist store and put its handle in
/// context. Call once, from the application root.
pub fn provide_wishlist(backend: Rc<dyn StorageBackend>) {
    provide_context(WishlistContext::new(WishlistStore::new(backend)));
}

/// The handle installed by [`provide_wishlist`].
///
/// # Panics
///
/// Panics when called outside the provider tree: that is a wiring bug,
/// not a runtime condition.
#[must_use]
pub fn use_wishlist() -> WishlistContext {
    expect_context::<WishlistContext>()
}
