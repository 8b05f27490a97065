//! # Fold event.
//!
//! [`CombinerEvent`] folds the subscribers' return values left to right with a
//! combiner supplied at construction.
//!
//! ## Flow
//! ```text
//! invoke(&args)
//!   ├─ empty snapshot        ──► Absent (combiner never called)
//!   ├─ acc = s0(&args)
//!   ├─ acc = combine(acc, s1(&args))
//!   ├─ ...
//!   └─ acc = combine(acc, sN(&args)) ──► Present(acc)
//! ```
//!
//! The combiner owns both operands and may return either one. With shared
//! handles as results, the final value aliases whichever storage it picked.
//!
//! ## Example
//! ```rust
//! use fanfold::{CombinerEvent, Dispatch};
//!
//! let bids: CombinerEvent<(), u32> = CombinerEvent::new(|a: u32, b: u32| a.max(b));
//! let _a = bids.subscribe(|_| 3);
//! let _b = bids.subscribe(|_| 7);
//! let _c = bids.subscribe(|_| 2);
//!
//! assert_eq!(bids.invoke(&()).into_option(), Some(7));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::core::{EventConfig, EventCore, EventSource};
use crate::error::EventError;

use super::{Dispatch, EventResult};

/// Binary reducer folding subscriber results.
type Combiner<R> = Arc<dyn Fn(R, R) -> R + Send + Sync>;

/// Event that folds its subscribers' return values.
pub struct CombinerEvent<A = (), R = ()> {
    core: EventCore<A, R>,
    combiner: Combiner<R>,
}

impl<A: 'static, R: 'static> CombinerEvent<A, R> {
    /// Creates an event folding with `combiner`.
    pub fn new<C>(combiner: C) -> Self
    where
        C: Fn(R, R) -> R + Send + Sync + 'static,
    {
        Self::with_config(EventConfig::default(), combiner)
    }

    /// Creates an event labelled `name` in logs.
    pub fn named<C>(name: impl Into<Cow<'static, str>>, combiner: C) -> Self
    where
        C: Fn(R, R) -> R + Send + Sync + 'static,
    {
        Self::with_config(EventConfig::named(name), combiner)
    }

    /// Creates an event with the given configuration.
    pub fn with_config<C>(config: EventConfig, combiner: C) -> Self
    where
        C: Fn(R, R) -> R + Send + Sync + 'static,
    {
        Self {
            core: EventCore::new(config),
            combiner: Arc::new(combiner),
        }
    }

    /// Starts a builder; `build` fails unless a combiner was set.
    pub fn builder() -> CombinerBuilder<A, R> {
        CombinerBuilder::new()
    }
}

impl<A: 'static, R: 'static> Dispatch for CombinerEvent<A, R> {
    type Args = A;
    type Return = R;
    type Output = EventResult<R>;

    fn invoke(&self, args: &A) -> EventResult<R> {
        self.core.dispatch(|callbacks| {
            let mut acc: Option<R> = None;
            for callback in &callbacks {
                let next = callback(args);
                acc = Some(match acc.take() {
                    None => next,
                    Some(prev) => (self.combiner)(prev, next),
                });
            }
            EventResult::from_option(acc)
        })
    }

    fn notify(&self, args: &A) {
        self.core.notify(args);
    }

    fn source(&self) -> EventSource<'_, A, R> {
        EventSource::new(&self.core)
    }
}

impl<A, R> fmt::Debug for CombinerEvent<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinerEvent")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

/// Builder for [`CombinerEvent`] with fluent API.
///
/// ## Example
/// ```rust
/// use fanfold::{CombinerEvent, EventError};
///
/// let missing = CombinerEvent::<(), i32>::builder().with_name("total").build();
/// assert_eq!(missing.err(), Some(EventError::MissingCombiner));
///
/// let total = CombinerEvent::<(), i32>::builder()
///     .with_name("total")
///     .with_combiner(|a, b| a + b)
///     .build();
/// assert!(total.is_ok());
/// ```
pub struct CombinerBuilder<A, R> {
    config: EventConfig,
    combiner: Option<Combiner<R>>,
    _args: PhantomData<fn(&A)>,
}

impl<A: 'static, R: 'static> CombinerBuilder<A, R> {
    /// Creates a builder with default configuration and no combiner.
    pub fn new() -> Self {
        Self {
            config: EventConfig::default(),
            combiner: None,
            _args: PhantomData,
        }
    }

    /// Sets the log label.
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: EventConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the combiner; required before [`build`](Self::build).
    pub fn with_combiner<C>(mut self, combiner: C) -> Self
    where
        C: Fn(R, R) -> R + Send + Sync + 'static,
    {
        self.combiner = Some(Arc::new(combiner));
        self
    }

    /// Builds the event.
    ///
    /// # Errors
    /// [`EventError::MissingCombiner`] if no combiner was set.
    pub fn build(self) -> Result<CombinerEvent<A, R>, EventError> {
        let combiner = self.combiner.ok_or(EventError::MissingCombiner)?;
        Ok(CombinerEvent {
            core: EventCore::new(self.config),
            combiner,
        })
    }
}

impl<A: 'static, R: 'static> Default for CombinerBuilder<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;
    use rand::Rng;
    use rand::seq::SliceRandom;

    use super::*;
    use crate::core::Subscription;

    fn max_event() -> CombinerEvent<(), i32> {
        CombinerEvent::new(|a: i32, b: i32| if a >= b { a } else { b })
    }

    fn subscribe_all(event: &CombinerEvent<(), i32>, values: &[i32]) -> Vec<Subscription> {
        values
            .iter()
            .map(|&v| event.subscribe(move |_| v))
            .collect()
    }

    #[test]
    fn test_no_subscribers_never_calls_combiner() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let event: CombinerEvent<(), i32> = CombinerEvent::new(move |_: i32, _: i32| {
            seen.fetch_add(1, Ordering::SeqCst);
            0
        });

        assert!(!event.invoke(&()).has_value());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_single_subscriber_skips_combiner() {
        let event: CombinerEvent<(), i32> = CombinerEvent::new(|_: i32, _: i32| -1);
        let _sub = event.subscribe(|_| 5);
        assert_eq!(event.invoke(&()).into_option(), Some(5));
    }

    #[test]
    fn test_max_of_three() {
        let event = max_event();
        let _subs = subscribe_all(&event, &[3, 7, 2]);
        assert_eq!(event.invoke(&()).into_option(), Some(7));
    }

    #[test]
    fn test_max_is_order_independent() {
        let mut rng = rand::rng();
        let mut values: Vec<i32> = (0..100).map(|_| rng.random_range(0..i32::MAX)).collect();
        let expected = values.iter().copied().max();

        for _ in 0..5 {
            values.shuffle(&mut rng);
            let event = max_event();
            let _subs = subscribe_all(&event, &values);
            assert_eq!(event.invoke(&()).into_option(), expected);
        }
    }

    #[test]
    fn test_fold_is_strictly_left_to_right() {
        let event: CombinerEvent<(), i32> = CombinerEvent::named("diff", |a: i32, b: i32| a - b);
        let _subs = subscribe_all(&event, &[10, 3, 2]);
        // (10 - 3) - 2, not 10 - (3 - 2)
        assert_eq!(event.invoke(&()).into_option(), Some(5));
    }

    #[test]
    fn test_combiner_sees_args_per_subscriber() {
        let event: CombinerEvent<i32, String> =
            CombinerEvent::new(|mut a: String, b: String| {
                a.push_str(&b);
                a
            });
        let _a = event.subscribe(|n| format!("a{n}"));
        let _b = event.subscribe(|n| format!("b{n}"));
        assert_eq!(event.invoke(&1).into_option().as_deref(), Some("a1b1"));
    }

    struct NonCopyableInt {
        val: i32,
    }

    type SharedInt = Arc<Mutex<NonCopyableInt>>;

    #[test]
    fn test_pick_by_reference_aliases_storage() {
        let event: CombinerEvent<(), SharedInt> =
            CombinerEvent::new(|first: SharedInt, second: SharedInt| {
                let keep_first = first.lock().val >= second.lock().val;
                if keep_first { first } else { second }
            });

        let mut rng = rand::rng();
        let values: Vec<SharedInt> = (0..100)
            .map(|_| {
                Arc::new(Mutex::new(NonCopyableInt {
                    val: rng.random_range(0..i32::MAX),
                }))
            })
            .collect();
        let _subs: Vec<Subscription> = values
            .iter()
            .map(|value| {
                let value = Arc::clone(value);
                event.subscribe(move |_| Arc::clone(&value))
            })
            .collect();

        // First of the maxima wins ties, matching `>=` in the combiner.
        let vals: Vec<i32> = values.iter().map(|v| v.lock().val).collect();
        let mut best = 0;
        for (i, &val) in vals.iter().enumerate() {
            if val > vals[best] {
                best = i;
            }
        }
        let max = &values[best];

        let result = event.invoke(&());
        assert!(Arc::ptr_eq(result.value(), max));

        max.lock().val = -1;
        assert_eq!(result.value().lock().val, -1);
    }

    #[test]
    fn test_builder_rejects_missing_combiner() {
        let err = CombinerEvent::<(), i32>::builder()
            .with_name("scores")
            .build()
            .err();
        assert_eq!(err, Some(EventError::MissingCombiner));
    }

    #[test]
    fn test_builder_name_reaches_config() {
        let event = CombinerEvent::<(), i32>::builder()
            .with_combiner(|a, b| a * b)
            .with_name("product")
            .build()
            .expect("combiner set");
        assert!(format!("{event:?}").contains("product"));
    }

    #[test]
    fn test_builder_with_combiner() {
        let event = CombinerEvent::<(), i32>::builder()
            .with_config(EventConfig::named("sum").with_trace_dispatch(true))
            .with_combiner(|a, b| a + b)
            .build()
            .expect("combiner set");
        let _subs = subscribe_all(&event, &[1, 2, 3, 4]);
        assert_eq!(event.invoke(&()).into_option(), Some(10));
    }
}
