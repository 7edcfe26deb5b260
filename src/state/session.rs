//! Session slot holding the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components read or observe this slot; only
//! `AuthenticationService` writes to it.
//!
//! DESIGN
//! ======
//! Each observer owns an unbounded channel. Publishing fans the new value out
//! to every live channel and prunes closed ones, so every observer sees every
//! update made after it subscribed. New observers get the current value first.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use futures::Stream;
use futures::channel::mpsc::{self, UnboundedSender};

use crate::net::types::{Role, User};

#[derive(Default)]
struct SlotInner {
    current: Option<User>,
    observers: Vec<UnboundedSender<Option<User>>>,
}

/// Shared holder of "current user or none".
///
/// Clones share the same slot.
#[derive(Clone, Default)]
pub struct SessionSlot {
    inner: Rc<RefCell<SlotInner>>,
}

impl SessionSlot {
    pub fn new(initial: Option<User>) -> Self {
        Self { inner: Rc::new(RefCell::new(SlotInner { current: initial, observers: Vec::new() })) }
    }

    /// Last published value.
    pub fn value(&self) -> Option<User> {
        self.inner.borrow().current.clone()
    }

    /// Stream of the current value followed by every later update.
    pub fn observe(&self) -> impl Stream<Item = Option<User>> + Unpin + use<> {
        let (tx, rx) = mpsc::unbounded();
        let mut inner = self.inner.borrow_mut();
        inner.observers.retain(|tx| !tx.is_closed());
        // Fresh channel, receiver held locally: cannot fail.
        let _ = tx.unbounded_send(inner.current.clone());
        inner.observers.push(tx);
        rx
    }

    pub fn observer_count(&self) -> usize {
        self.inner.borrow().observers.iter().filter(|tx| !tx.is_closed()).count()
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(&Role::Admin)
    }

    pub fn is_client(&self) -> bool {
        self.has_role(&Role::Client)
    }

    fn has_role(&self, role: &Role) -> bool {
        self.inner.borrow().current.as_ref().is_some_and(|user| &user.role == role)
    }

    pub(crate) fn publish(&self, value: Option<User>) {
        let mut inner = self.inner.borrow_mut();
        inner.current = value;
        let SlotInner { current, observers } = &mut *inner;
        observers.retain(|tx| tx.unbounded_send(current.clone()).is_ok());
    }
}
