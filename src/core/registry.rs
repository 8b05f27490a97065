//! # Subscriber registry shared by every dispatch strategy.
//!
//! [`EventCore`] owns the ordered set of live callbacks for one event instance
//! and the re-entrant lock that guards it.
//!
//! ## Architecture
//! ```text
//! EventCore ──► Arc<RegistryCell> ◄── Subscription (one per live callback)
//!                    │
//!                    ├─ ReentrantMutex       (one per event instance)
//!                    └─ RefCell<Registry>
//!                           └─ BTreeMap<Token, Entry{callback, slot}>
//!
//! dispatch(pass):
//!   lock ──► borrow ──► snapshot Vec<Callback> ──► release borrow
//!        ──► pass(snapshot) (lock still held, callbacks may re-enter)
//!        ──► unlock
//! ```
//!
//! ## Rules
//! - Tokens are `max(live) + 1`, or `0` when empty; ordered iteration equals
//!   subscription order.
//! - The `RefCell` is only borrowed for short internal steps and never across
//!   user code, so callbacks may subscribe, unsubscribe or invoke re-entrantly.
//! - Removed entries are dropped after the borrow ends: a callback may own a
//!   [`Subscription`] whose drop re-enters the registry.
//! - Teardown detaches every slot before dropping any entry.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::ReentrantMutex;
use tracing::{debug, trace};

use super::config::EventConfig;
use super::subscription::{Release, Slot, Subscription};

/// Process-wide counter for event instance ids.
static EVENT_IDS: AtomicU64 = AtomicU64::new(0);

/// Registered callback.
pub(crate) type Callback<A, R> = Arc<dyn Fn(&A) -> R + Send + Sync>;

/// Identifier of a live subscriber within one event instance.
///
/// Unique among currently-live subscribers only: after the highest token is
/// removed, its number is handed to the next subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(u64);

impl Token {
    /// Raw numeric value.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

struct Entry<A, R> {
    callback: Callback<A, R>,
    slot: Arc<Slot>,
}

/// Ordered live callbacks.
struct Registry<A, R> {
    entries: BTreeMap<Token, Entry<A, R>>,
}

impl<A, R> Registry<A, R> {
    fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    fn next_token(&self) -> Token {
        match self.entries.last_key_value() {
            Some((last, _)) => Token(last.0 + 1),
            None => Token(0),
        }
    }

    fn insert(&mut self, callback: Callback<A, R>) -> (Token, Arc<Slot>) {
        let token = self.next_token();
        let slot = Arc::new(Slot::default());
        self.entries.insert(
            token,
            Entry {
                callback,
                slot: Arc::clone(&slot),
            },
        );
        (token, slot)
    }

    /// Removes the entry only if it is still owned by `slot`.
    fn remove(&mut self, token: Token, slot: &Arc<Slot>) -> Option<Entry<A, R>> {
        let owned = self
            .entries
            .get(&token)
            .is_some_and(|entry| Arc::ptr_eq(&entry.slot, slot));
        if !owned {
            return None;
        }
        let entry = self.entries.remove(&token)?;
        entry.slot.detach();
        Some(entry)
    }

    fn snapshot(&self) -> Vec<Callback<A, R>> {
        self.entries
            .values()
            .map(|entry| Arc::clone(&entry.callback))
            .collect()
    }

    fn detach_all(&mut self) -> BTreeMap<Token, Entry<A, R>> {
        let drained = std::mem::take(&mut self.entries);
        for entry in drained.values() {
            entry.slot.detach();
        }
        drained
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// State shared between an event and its outstanding handles.
///
/// Freed once the event and every handle are gone.
struct RegistryCell<A, R> {
    id: u64,
    config: EventConfig,
    registry: ReentrantMutex<RefCell<Registry<A, R>>>,
}

impl<A: 'static, R: 'static> Release for RegistryCell<A, R> {
    fn release(&self, token: Token, slot: &Arc<Slot>) {
        let guard = self.registry.lock();
        if slot.is_detached() {
            return;
        }
        let removed = guard.borrow_mut().remove(token, slot);
        if removed.is_some() {
            let remaining = guard.borrow().len();
            debug!(event = %self.config.name, token = %token, remaining, "unsubscribed");
        }
        drop(removed);
    }
}

/// Registry plus lock for one event instance; the common base of all strategies.
pub(crate) struct EventCore<A, R> {
    cell: Arc<RegistryCell<A, R>>,
}

impl<A: 'static, R: 'static> EventCore<A, R> {
    pub(crate) fn new(config: EventConfig) -> Self {
        Self {
            cell: Arc::new(RegistryCell {
                id: EVENT_IDS.fetch_add(1, Ordering::Relaxed),
                config,
                registry: ReentrantMutex::new(RefCell::new(Registry::new())),
            }),
        }
    }

    /// Registers `callback` and returns its handle. Never fails.
    pub(crate) fn subscribe(&self, callback: Callback<A, R>) -> Subscription {
        let guard = self.cell.registry.lock();
        let (token, slot) = guard.borrow_mut().insert(callback);
        let subscribers = guard.borrow().len();
        drop(guard);

        debug!(event = %self.cell.config.name, token = %token, subscribers, "subscribed");
        let owner: Arc<dyn Release> = self.cell.clone();
        Subscription::new(self.cell.id, token, slot, owner)
    }

    /// Removes the handle's entry. No-op for detached or foreign handles.
    pub(crate) fn unsubscribe(&self, subscription: &Subscription) {
        if !subscription.belongs_to(self.cell.id) {
            debug!(
                event = %self.cell.config.name,
                token = %subscription.token(),
                "ignored unsubscribe of a foreign handle"
            );
            return;
        }
        subscription.release();
    }

    pub(crate) fn len(&self) -> usize {
        self.cell.registry.lock().borrow().len()
    }

    /// Runs one dispatch pass over a snapshot of the live callbacks.
    ///
    /// The lock is held for the whole pass; the snapshot isolates the pass from
    /// registry changes made by the callbacks themselves.
    pub(crate) fn dispatch<T>(&self, pass: impl FnOnce(Vec<Callback<A, R>>) -> T) -> T {
        let guard = self.cell.registry.lock();
        let snapshot = guard.borrow().snapshot();
        if self.cell.config.trace_dispatch {
            trace!(event = %self.cell.config.name, subscribers = snapshot.len(), "dispatching");
        }
        let out = pass(snapshot);
        drop(guard);
        out
    }

    /// Calls every snapshot callback in order, discarding the results.
    pub(crate) fn notify(&self, args: &A) {
        self.dispatch(|callbacks| {
            for callback in &callbacks {
                callback(args);
            }
        });
    }
}

impl<A, R> EventCore<A, R> {
    pub(crate) fn config(&self) -> &EventConfig {
        &self.cell.config
    }
}

impl<A, R> Drop for EventCore<A, R> {
    fn drop(&mut self) {
        let guard = self.cell.registry.lock();
        let drained = guard.borrow_mut().detach_all();
        let detached = drained.len();
        drop(drained);
        drop(guard);

        if detached > 0 {
            debug!(event = %self.cell.config.name, detached, "event dropped; handles detached");
        }
    }
}

impl<A, R> fmt::Debug for EventCore<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.cell.registry.lock();
        let subscribers = guard.borrow().len();
        f.debug_struct("EventCore")
            .field("id", &self.cell.id)
            .field("name", &self.cell.config.name)
            .field("subscribers", &subscribers)
            .finish()
    }
}
