#[cfg(test)]
#[path = "subscribe_test.rs"]
mod subscribe_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback = Rc<dyn Fn()>;

/// Change-callback registry for one store.
///
/// Callbacks run synchronously, in registration order, after every
/// successful mutation. Registering hands back a [`Subscription`] whose
/// drop removes the callback, so a torn-down consumer is never invoked.
#[derive(Clone, Default)]
pub struct Subscribers {
    inner: Rc<RefCell<Registry>>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

impl Subscribers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback`; the returned guard unregisters on drop.
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, Rc::new(callback)));
        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Invoke every registered callback.
    ///
    /// The callback list is snapshotted first, so a callback may itself
    /// subscribe or unsubscribe; additions take effect from the next
    /// notification.
    pub fn notify(&self) {
        let snapshot: Vec<Callback> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in snapshot {
            callback();
        }
    }

    /// Number of live callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }
}

/// Release guard for one registered callback. Dropping it immediately
/// stops deliveries, so it must be held for the consumer's lifetime.
#[must_use]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}
