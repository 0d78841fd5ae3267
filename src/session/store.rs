//! Observable session store.
//!
//! DESIGN
//! ======
//! One `SessionStore` is built per application (see `app::PortalContext`)
//! and handed to consumers as cheap clones sharing the same state. Reads
//! return owned snapshots; writes go through the three mutations only.
//!
//! Every mutation queues a `(prev, next)` change and delivers it to the
//! registered listeners in insertion order before the outermost call
//! returns. No `RefCell` borrow is held while a listener runs, so listeners
//! may read the store, unsubscribe, or mutate it again. A mutation issued
//! from inside a listener is queued behind the change currently being
//! delivered, which keeps every listener's view in mutation order.
//!
//! TRADE-OFFS
//! ==========
//! The store is `Rc` based and deliberately `!Send`: the portal runs on a
//! single UI thread and the type system keeps it that way. A panicking
//! listener is caught and logged so one broken consumer cannot starve the
//! others; this requires the default `panic = "unwind"` strategy.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

use tracing::{debug, error};

use super::entity::{SessionState, SessionUser};

type Listener = dyn Fn(&SessionState, &SessionState);

/// A state transition waiting to be delivered.
struct Change {
    op: &'static str,
    prev: SessionState,
    next: SessionState,
}

struct Inner {
    state: RefCell<SessionState>,
    listeners: RefCell<Vec<(u64, Rc<Listener>)>>,
    next_listener_id: Cell<u64>,
    pending: RefCell<VecDeque<Change>>,
    delivering: Cell<bool>,
}

impl Inner {
    fn is_registered(&self, id: u64) -> bool {
        self.listeners.borrow().iter().any(|(registered, _)| *registered == id)
    }

    fn remove_listener(&self, id: u64) {
        self.listeners.borrow_mut().retain(|(registered, _)| *registered != id);
    }
}

/// Single source of truth for the current user and authentication flag.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<Inner>,
}

impl SessionStore {
    /// Create a store holding the default (anonymous, empty) state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(SessionState::default()),
                listeners: RefCell::new(Vec::new()),
                next_listener_id: Cell::new(0),
                pending: RefCell::new(VecDeque::new()),
                delivering: Cell::new(false),
            }),
        }
    }

    /// Snapshot of the current state.
    ///
    /// The returned value is detached from the store; changing it has no
    /// effect on what other readers observe.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Current authentication flag.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated
    }

    /// Snapshot of the current user entity.
    #[must_use]
    pub fn user(&self) -> SessionUser {
        self.inner.state.borrow().user.clone()
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Set the authentication flag to exactly `value`. The user is untouched.
    ///
    /// Called from inside a listener, the change is queued and delivered after
    /// the current notification, so this returns before subscribers see it.
    pub fn set_authenticated(&self, value: bool) {
        self.apply("set_authenticated", |state| state.is_authenticated = value);
    }

    /// Replace the whole user entity. The authentication flag is untouched.
    ///
    /// Called from inside a listener, the change is queued and delivered after
    /// the current notification, so this returns before subscribers see it.
    pub fn set_user(&self, user: SessionUser) {
        self.apply("set_user", move |state| state.user = user);
    }

    /// Reset the user to defaults and drop authentication in one update.
    ///
    /// Called from inside a listener, the change is queued and delivered after
    /// the current notification, so this returns before subscribers see it.
    pub fn clear_user(&self) {
        self.apply("clear_user", |state| *state = SessionState::default());
    }

    /// Register `listener`, called as `listener(&next, &prev)` after every mutation.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// unsubscribed or dropped, or for the store's lifetime once detached.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&SessionState, &SessionState) + 'static,
    {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::new(listener)));
        Subscription { store: Rc::downgrade(&self.inner), id, active: true }
    }

    fn apply(&self, op: &'static str, mutate: impl FnOnce(&mut SessionState)) {
        let change = {
            let mut state = self.inner.state.borrow_mut();
            let prev = (*state).clone();
            mutate(&mut *state);
            Change { op, prev, next: (*state).clone() }
        };
        self.inner.pending.borrow_mut().push_back(change);

        // A delivery loop further up the stack drains the queue.
        if self.inner.delivering.replace(true) {
            return;
        }
        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(change) = next else { break };
            self.deliver(&change);
        }
        self.inner.delivering.set(false);
    }

    fn deliver(&self, change: &Change) {
        let listeners: Vec<(u64, Rc<Listener>)> =
            self.inner.listeners.borrow().iter().map(|(id, listener)| (*id, Rc::clone(listener))).collect();
        debug!(
            op = change.op,
            subscribers = listeners.len(),
            authenticated = change.next.is_authenticated,
            "session state changed"
        );

        for (id, listener) in listeners {
            // An earlier listener in this round may have unsubscribed this one.
            if !self.inner.is_registered(id) {
                continue;
            }
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| listener(&change.next, &change.prev)));
            if outcome.is_err() {
                error!(op = change.op, listener = id, "session listener panicked; continuing delivery");
            }
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &*self.inner.state.borrow())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Handle for a registered listener.
///
/// Dropping the handle unsubscribes. Call [`Subscription::detach`] to keep
/// the listener registered for as long as the store lives.
#[must_use = "dropping a Subscription unsubscribes its listener"]
pub struct Subscription {
    store: Weak<Inner>,
    id: u64,
    active: bool,
}

impl Subscription {
    /// Deregister the listener. Later mutations are not delivered to it.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    /// Keep the listener registered without holding on to the handle.
    pub fn detach(mut self) {
        self.active = false;
    }

    /// Whether the listener is still registered with a live store.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active && self.store.upgrade().is_some_and(|inner| inner.is_registered(self.id))
    }

    fn release(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(inner) = self.store.upgrade() {
            inner.remove_listener(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).field("active", &self.active).finish()
    }
}
