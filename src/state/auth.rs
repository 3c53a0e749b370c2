//! Registered accounts and the sign-in session.
//!
//! DESIGN
//! ======
//! The session identity lives in one of two tiers: a durable cell that
//! survives reloads, used while the keep-session preference is on, and
//! a plain field that dies with the page, used while it is off. The
//! preference itself is durable and selects which tier is read; at most
//! one tier holds an identity after any login or logout.
//!
//! This is a single-device demo credential table: passwords are stored
//! as plaintext and nothing here is a security boundary.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::state::cell::StorageCell;
use crate::state::storage::StorageBackend;
use crate::state::subscribe::{Subscribers, Subscription};

// Storage keys. `users` and `currentUser` predate this implementation;
// renaming them orphans existing profiles.
const USERS_KEY: &str = "users";
const KEEP_SESSION_KEY: &str = "keepSession";
const SESSION_KEY: &str = "currentUser";
const REMEMBERED_KEY: &str = "rememberedEmail";

/// A registered account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

/// Credential table plus the current sign-in session.
pub struct AuthStore {
    users: StorageCell<Vec<Credential>>,
    keep_session: StorageCell<bool>,
    stored_session: StorageCell<Option<String>>,
    ephemeral_session: RefCell<Option<String>>,
    remembered: StorageCell<String>,
    subscribers: Subscribers,
}

impl AuthStore {
    /// Build the store against `backend`, reading all persisted state.
    #[must_use]
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self {
            users: StorageCell::new(Rc::clone(&backend), USERS_KEY, Vec::new()),
            keep_session: StorageCell::new(Rc::clone(&backend), KEEP_SESSION_KEY, false),
            stored_session: StorageCell::new(Rc::clone(&backend), SESSION_KEY, None),
            ephemeral_session: RefCell::new(None),
            remembered: StorageCell::new(backend, REMEMBERED_KEY, String::new()),
            subscribers: Subscribers::new(),
        }
    }

    /// Register a new account. Rejects an email that is already taken
    /// (exact, case-sensitive match). Does not sign the user in.
    pub fn register(&self, email: &str, password: &str) -> bool {
        let taken = self.users.with(|users| users.iter().any(|u| u.email == email));
        if taken {
            return false;
        }
        self.users.update(|users| {
            users.push(Credential {
                email: email.to_owned(),
                password: password.to_owned(),
            });
        });
        self.subscribers.notify();
        true
    }

    /// Sign in with an exact email + password match.
    ///
    /// `keep_override` replaces the stored keep-session preference;
    /// `None` reuses it. On success the effective preference is
    /// persisted, the winning tier takes the identity and the other
    /// tier is cleared.
    pub fn login(&self, email: &str, password: &str, keep_override: Option<bool>) -> bool {
        let found = self
            .users
            .with(|users| users.iter().any(|u| u.email == email && u.password == password));
        if !found {
            return false;
        }

        let keep = keep_override.unwrap_or_else(|| self.keep_session.get());
        self.keep_session.set(keep);
        if keep {
            self.stored_session.set(Some(email.to_owned()));
            *self.ephemeral_session.borrow_mut() = None;
        } else {
            self.stored_session.set(None);
            *self.ephemeral_session.borrow_mut() = Some(email.to_owned());
        }
        self.subscribers.notify();
        true
    }

    /// Sign out: clears both session tiers. The keep-session preference
    /// and the remembered email are untouched.
    pub fn logout(&self) {
        self.stored_session.set(None);
        *self.ephemeral_session.borrow_mut() = None;
        self.subscribers.notify();
    }

    /// Email of the signed-in user, read from the tier the keep-session
    /// preference currently selects.
    #[must_use]
    pub fn current_identity(&self) -> Option<String> {
        if self.keep_session.get() {
            self.stored_session.get()
        } else {
            self.ephemeral_session.borrow().clone()
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_identity().is_some()
    }

    /// Stored keep-session preference.
    #[must_use]
    pub fn keep_session(&self) -> bool {
        self.keep_session.get()
    }

    /// Rewrite the keep-session preference. An active session does not
    /// migrate between tiers until the next login, so flipping this
    /// while signed in changes which (possibly empty) tier is read.
    pub fn set_keep_session(&self, keep: bool) {
        self.keep_session.set(keep);
        self.subscribers.notify();
    }

    /// Email prefilled into the sign-in form. Empty means none.
    #[must_use]
    pub fn remembered_identity(&self) -> String {
        self.remembered.get()
    }

    /// Remember (or, with an empty string, forget) the sign-in form
    /// email. Independent of the session tiers.
    pub fn set_remembered_identity(&self, email: &str) {
        self.remembered.set(email.to_owned());
        self.subscribers.notify();
    }

    /// Register a change callback; the guard unsubscribes on drop.
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        self.subscribers.subscribe(callback)
    }
}

struct ProvidedAuth {
    store: AuthStore,
    _subscription: Subscription,
}

/// Cloneable, `Copy` handle components obtain via [`use_auth`].
///
/// Reads bump through a revision signal the store notifies on every
/// mutation, so reactive scopes that read through the handle re-run.
/// Mutations are plain forwarding calls, usable from event handlers.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: StoredValue<ProvidedAuth, LocalStorage>,
    revision: RwSignal<u64>,
}

impl AuthContext {
    fn new(store: AuthStore) -> Self {
        let revision = RwSignal::new(0_u64);
        let subscription = store.subscribe(move || revision.update(|r| *r += 1));
        Self {
            inner: StoredValue::new_local(ProvidedAuth {
                store,
                _subscription: subscription,
            }),
            revision,
        }
    }

    /// Reactive read of the signed-in email.
    pub fn current_identity(&self) -> Option<String> {
        self.revision.track();
        self.inner.with_value(|p| p.store.current_identity())
    }

    pub fn is_authenticated(&self) -> bool {
        self.revision.track();
        self.inner.with_value(|p| p.store.is_authenticated())
    }

    pub fn keep_session(&self) -> bool {
        self.revision.track();
        self.inner.with_value(|p| p.store.keep_session())
    }

    pub fn remembered_identity(&self) -> String {
        self.revision.track();
        self.inner.with_value(|p| p.store.remembered_identity())
    }

    pub fn register(&self, email: &str, password: &str) -> bool {
        self.inner.with_value(|p| p.store.register(email, password))
    }

    pub fn login(&self, email: &str, password: &str, keep_override: Option<bool>) -> bool {
        self.inner
            .with_value(|p| p.store.login(email, password, keep_override))
    }

    pub fn logout(&self) {
        self.inner.with_value(|p| p.store.logout());
    }

    pub fn set_keep_session(&self, keep: bool) {
        self.inner.with_value(|p| p.store.set_keep_session(keep));
    }

    pub fn set_remembered_identity(&self, email: &str) {
        self.inner
            .with_value(|p| p.store.set_remembered_identity(email));
    }
}

/// Construct the process-wide auth store and put its handle in context.
/// Call once, from the application root.
pub fn provide_auth(backend: Rc<dyn StorageBackend>) {
    provide_context(AuthContext::new(AuthStore::new(backend)));
}

/// The handle installed by [`provide_auth`].
///
/// # Panics
///
/// Panics when called outside the provider tree: that is a wiring bug,
/// not a runtime condition.
#[must_use]
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
