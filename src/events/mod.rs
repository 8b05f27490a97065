//! Dispatch strategies and their result type.
//!
//! Every strategy wraps the same registry and differs only in how it turns
//! the subscribers' return values into an answer:
//!
//! | Strategy           | `invoke` returns          | Zero subscribers |
//! |--------------------|---------------------------|------------------|
//! | [`Event`]          | last subscriber's value   | absent           |
//! | [`CollectorEvent`] | every value, in order     | empty `Vec`      |
//! | [`CombinerEvent`]  | left fold via combiner    | absent           |
//!
//! All three run every subscriber of the snapshot, in subscription order, on
//! the calling thread. `notify` runs them without reporting anything, for
//! events whose subscribers return `()`.

mod collector;
mod combiner;
mod event;
mod outcome;

pub use collector::CollectorEvent;
pub use combiner::{CombinerBuilder, CombinerEvent};
pub use event::Event;
pub use outcome::EventResult;

use crate::core::{EventSource, Subscription};

/// Shared contract of the dispatch strategies.
///
/// Subscription management goes through [`source`](Self::source); the
/// provided methods are shorthands for the owner of the event.
pub trait Dispatch {
    /// Argument type passed (by reference) to every subscriber.
    type Args: 'static;
    /// Return type of one subscriber.
    type Return: 'static;
    /// What one `invoke` call reports.
    type Output;

    /// Runs every subscriber and aggregates their results.
    fn invoke(&self, args: &Self::Args) -> Self::Output;

    /// Runs every subscriber and discards their results.
    fn notify(&self, args: &Self::Args);

    /// Subscribe-only view of this event.
    fn source(&self) -> EventSource<'_, Self::Args, Self::Return>;

    /// Registers `callback`; see [`EventSource::subscribe`].
    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Self::Args) -> Self::Return + Send + Sync + 'static,
    {
        self.source().subscribe(callback)
    }

    /// Removes the handle's callback early; see [`EventSource::unsubscribe`].
    fn unsubscribe(&self, subscription: &Subscription) {
        self.source().unsubscribe(subscription);
    }

    /// Number of live subscribers.
    fn len(&self) -> usize {
        self.source().len()
    }

    /// True if nobody is subscribed.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
