//! # Subscription handle.
//!
//! [`Subscription`] is the RAII proof that a callback is registered. It is
//! move-only; dropping it removes the callback from its event.
//!
//! ## Rules
//! - Removal happens **at most once**: explicit unsubscribe, drop, or event
//!   teardown, whichever comes first. Later attempts are no-ops.
//! - The handle keeps the event's lock alive, never the event itself. When the
//!   event is dropped first, the handle is detached and its drop does nothing.
//! - Handles are type-erased, so handles from different events can be stored
//!   together (e.g. a `Vec<Subscription>` owned by a component).

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::registry::Token;

/// Liveness flag shared between a registry entry and its handle.
///
/// Only flipped while the owning event's lock is held.
#[derive(Debug, Default)]
pub(crate) struct Slot {
    detached: AtomicBool,
}

impl Slot {
    #[inline]
    pub(crate) fn detach(&self) {
        self.detached.store(true, Ordering::Release);
    }

    #[inline]
    pub(crate) fn is_detached(&self) -> bool {
        self.detached.load(Ordering::Acquire)
    }
}

/// Owner side of a handle: the event registry the entry lives in.
pub(crate) trait Release: Send + Sync {
    /// Removes the entry identified by `token` and `slot`, unless already detached.
    fn release(&self, token: Token, slot: &Arc<Slot>);
}

/// Handle for one registered callback. Dropping it unsubscribes.
///
/// ## Example
/// ```rust
/// use fanfold::{Dispatch, Event};
///
/// let event: Event<i32, i32> = Event::new();
/// let sub = event.subscribe(|x| x * 2);
/// assert!(sub.is_active());
/// assert_eq!(event.len(), 1);
///
/// drop(sub);
/// assert!(event.is_empty());
/// ```
#[must_use = "dropping a Subscription unsubscribes its callback immediately"]
pub struct Subscription {
    event_id: u64,
    token: Token,
    slot: Arc<Slot>,
    owner: Arc<dyn Release>,
}

impl Subscription {
    pub(crate) fn new(event_id: u64, token: Token, slot: Arc<Slot>, owner: Arc<dyn Release>) -> Self {
        Self {
            event_id,
            token,
            slot,
            owner,
        }
    }

    /// Token of the registry entry. Unique among the event's live subscribers only.
    #[inline]
    pub fn token(&self) -> Token {
        self.token
    }

    /// True while the callback is still registered.
    ///
    /// Turns false after unsubscribe or when the owning event is dropped.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.slot.is_detached()
    }

    /// Unsubscribes now. Same as dropping the handle.
    pub fn unsubscribe(self) {
        drop(self);
    }

    #[inline]
    pub(crate) fn belongs_to(&self, event_id: u64) -> bool {
        self.event_id == event_id
    }

    pub(crate) fn release(&self) {
        self.owner.release(self.token, &self.slot);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("event_id", &self.event_id)
            .field("token", &self.token)
            .field("active", &self.is_active())
            .finish()
    }
}
