//! # Subscribe-only view of an event.
//!
//! [`EventSource`] narrows an event to the operations outside code may use:
//! subscribe, unsubscribe and method binding. Invocation stays with whoever
//! owns the event.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicI32, Ordering};
//! use fanfold::{Dispatch, Event, EventSource};
//!
//! struct Counter {
//!     value: AtomicI32,
//!     changed: Event<i32>,
//! }
//!
//! impl Counter {
//!     fn changed(&self) -> EventSource<'_, i32, ()> {
//!         self.changed.source()
//!     }
//!
//!     fn bump(&self) {
//!         let now = self.value.fetch_add(1, Ordering::SeqCst) + 1;
//!         self.changed.notify(&now);
//!     }
//! }
//!
//! let counter = Counter { value: AtomicI32::new(0), changed: Event::new() };
//! let seen = Arc::new(AtomicI32::new(0));
//! let sink = Arc::clone(&seen);
//! let _sub = counter.changed().subscribe(move |v| sink.store(*v, Ordering::SeqCst));
//!
//! counter.bump();
//! assert_eq!(seen.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;
use std::sync::Arc;

use super::registry::EventCore;
use super::subscription::Subscription;

/// Non-owning view restricted to subscribe/unsubscribe.
pub struct EventSource<'a, A, R> {
    core: &'a EventCore<A, R>,
}

impl<'a, A, R> EventSource<'a, A, R> {
    pub(crate) fn new(core: &'a EventCore<A, R>) -> Self {
        Self { core }
    }
}

impl<A: 'static, R: 'static> EventSource<'_, A, R> {
    /// Registers `callback`; it stays registered until the handle is dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
    {
        self.core.subscribe(Arc::new(callback))
    }

    /// Removes the handle's callback early.
    ///
    /// Idempotent. Handles that belong to another event are ignored.
    pub fn unsubscribe(&self, subscription: &Subscription) {
        self.core.unsubscribe(subscription);
    }

    /// Subscribes `method` bound to `instance`.
    ///
    /// The callback keeps `instance` alive for as long as it is registered.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use fanfold::{Dispatch, Event};
    ///
    /// struct Audit { hits: AtomicUsize }
    ///
    /// impl Audit {
    ///     fn record(&self, amount: &u32) -> u32 {
    ///         self.hits.fetch_add(1, Ordering::SeqCst);
    ///         *amount
    ///     }
    /// }
    ///
    /// let paid: Event<u32, u32> = Event::new();
    /// let audit = Arc::new(Audit { hits: AtomicUsize::new(0) });
    /// let _sub = paid.source().bind(Arc::clone(&audit), Audit::record);
    ///
    /// assert_eq!(paid.invoke(&7).into_option(), Some(7));
    /// assert_eq!(audit.hits.load(Ordering::SeqCst), 1);
    /// ```
    pub fn bind<T, M>(&self, instance: Arc<T>, method: M) -> Subscription
    where
        T: Send + Sync + 'static,
        M: Fn(&T, &A) -> R + Send + Sync + 'static,
    {
        self.subscribe(move |args: &A| method(instance.as_ref(), args))
    }

    /// Number of live subscribers.
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// True if nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A, R> Clone for EventSource<'_, A, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, R> Copy for EventSource<'_, A, R> {}

impl<A, R> fmt::Debug for EventSource<'_, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSource")
            .field("event", &self.core.config().name)
            .finish()
    }
}
