//! # Collect-all event.
//!
//! [`CollectorEvent`] runs every subscriber and returns one present
//! [`EventResult`] per subscriber, in subscription order. The output length
//! always equals the snapshot size.
//!
//! With `R = ()` that still holds: `invoke` yields one `Present(())` per
//! subscriber. Use `notify` when nothing should be reported.
//!
//! ## Example
//! ```rust
//! use fanfold::{CollectorEvent, Dispatch};
//!
//! let votes: CollectorEvent<(), &'static str> = CollectorEvent::new();
//! let _a = votes.subscribe(|_| "yes");
//! let _b = votes.subscribe(|_| "no");
//!
//! let ballots: Vec<_> = votes.invoke(&()).into_iter().map(|r| r.into_option()).collect();
//! assert_eq!(ballots, vec![Some("yes"), Some("no")]);
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::core::{EventConfig, EventCore, EventSource};

use super::{Dispatch, EventResult};

/// Event that reports every subscriber's return value.
pub struct CollectorEvent<A = (), R = ()> {
    core: EventCore<A, R>,
}

impl<A: 'static, R: 'static> CollectorEvent<A, R> {
    /// Creates an event with default configuration.
    pub fn new() -> Self {
        Self::with_config(EventConfig::default())
    }

    /// Creates an event labelled `name` in logs.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self::with_config(EventConfig::named(name))
    }

    /// Creates an event with the given configuration.
    pub fn with_config(config: EventConfig) -> Self {
        Self {
            core: EventCore::new(config),
        }
    }
}

impl<A: 'static, R: 'static> Dispatch for CollectorEvent<A, R> {
    type Args = A;
    type Return = R;
    type Output = Vec<EventResult<R>>;

    fn invoke(&self, args: &A) -> Vec<EventResult<R>> {
        self.core.dispatch(|callbacks| {
            callbacks
                .iter()
                .map(|callback| EventResult::present(callback(args)))
                .collect()
        })
    }

    fn notify(&self, args: &A) {
        self.core.notify(args);
    }

    fn source(&self) -> EventSource<'_, A, R> {
        EventSource::new(&self.core)
    }
}

impl<A: 'static, R: 'static> Default for CollectorEvent<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R> fmt::Debug for CollectorEvent<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectorEvent")
            .field("core", &self.core)
            .finish()
    }
}
