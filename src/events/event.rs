//! # Last-result event.
//!
//! [`Event`] runs every subscriber and reports the return value of the last
//! one in subscription order. Earlier subscribers still run; only their side
//! effects are observable.
//!
//! ## Flow
//! ```text
//! invoke(&args)
//!   ├─ snapshot = [s0, s1, ..., sN]
//!   ├─ s0(&args) .. sN-1(&args)    results dropped
//!   └─ sN(&args) ──► EventResult::Present
//!
//! empty snapshot ──► EventResult::Absent (nothing runs)
//! ```
//!
//! ## Example
//! ```rust
//! use fanfold::{Dispatch, Event};
//!
//! let asked: Event<&'static str, usize> = Event::named("asked");
//! let _a = asked.subscribe(|q| q.len());
//! let _b = asked.subscribe(|q| q.len() * 2);
//!
//! assert_eq!(asked.invoke(&"four").into_option(), Some(8));
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::core::{EventConfig, EventCore, EventSource};

use super::{Dispatch, EventResult};

/// Event that reports its last subscriber's return value.
pub struct Event<A = (), R = ()> {
    core: EventCore<A, R>,
}

impl<A: 'static, R: 'static> Event<A, R> {
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

impl<A: 'static, R: 'static> Dispatch for Event<A, R> {
    type Args = A;
    type Return = R;
    type Output = EventResult<R>;

    fn invoke(&self, args: &A) -> EventResult<R> {
        self.core.dispatch(|callbacks| {
            let Some((last, rest)) = callbacks.split_last() else {
                return EventResult::absent();
            };
            for callback in rest {
                callback(args);
            }
            EventResult::present(last(args))
        })
    }

    fn notify(&self, args: &A) {
        self.core.notify(args);
    }

    fn source(&self) -> EventSource<'_, A, R> {
        EventSource::new(&self.core)
    }
}

impl<A: 'static, R: 'static> Default for Event<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R> fmt::Debug for Event<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event").field("core", &self.core).finish()
    }
}
