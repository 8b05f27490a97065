//! # fanfold
//!
//! **fanfold** is a strongly-typed, in-process event dispatcher.
//!
//! Subscribers register callbacks on a typed event and get back a
//! [`Subscription`] handle; invoking the event calls every live subscriber,
//! synchronously and in subscription order, and aggregates their return
//! values with one of three strategies.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   owner code                               outside code
//!       │ invoke(&args) / notify(&args)          │ subscribe(f) / unsubscribe(&h) / bind
//!       ▼                                        ▼
//! ┌──────────────────────────────┐      ┌───────────────────────┐
//! │ Event / CollectorEvent /     │─────►│ EventSource (view)    │
//! │ CombinerEvent (strategy)     │      └───────────┬───────────┘
//! └──────────────┬───────────────┘                  │
//!                ▼                                  ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │ EventCore                                                     │
//! │  Arc<RegistryCell> ── ReentrantMutex<RefCell<Registry>>        │
//! │                        BTreeMap<Token, callback + slot>       │
//! └──────────────┬───────────────────────────────────▲────────────┘
//!                │ snapshot (Vec of callbacks)       │ release on drop
//!                ▼                                   │
//!        s0(&args) … sN(&args)               Subscription (RAII)
//!                │
//!                ▼
//!   Event:          EventResult (last value)
//!   CollectorEvent: Vec<EventResult> (every value)
//!   CombinerEvent:  EventResult (left fold)
//! ```
//!
//! ### Dispatch pass
//! ```text
//! invoke(&args)
//!   ├─► lock (re-entrant, per event instance)
//!   ├─► snapshot = live callbacks in token order
//!   ├─► for each callback in snapshot:
//!   │       result = callback(&args)      may subscribe/unsubscribe/invoke re-entrantly;
//!   │                                     changes apply to the next pass only
//!   ├─► aggregate per strategy
//!   └─► unlock
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types                                    |
//! |-------------------|---------------------------------------------------------------|----------------------------------------------|
//! | **Strategies**    | Last-result, collect-all and fold dispatch.                   | [`Event`], [`CollectorEvent`], [`CombinerEvent`] |
//! | **Handles**       | RAII unsubscription, safe after the event is gone.            | [`Subscription`], [`Token`]                  |
//! | **Narrowing**     | Subscribe-only view for code that must not invoke.            | [`EventSource`]                              |
//! | **Results**       | Presence-tagged values, write-through for shared storage.     | [`EventResult`]                              |
//! | **Errors**        | Typed contract errors.                                        | [`EventError`]                               |
//! | **Configuration** | Per-event log label and dispatch tracing.                     | [`EventConfig`]                              |
//!
//! ## Logging
//! Subscribe, unsubscribe and teardown are reported through `tracing` at
//! `debug` level; per-dispatch records at `trace` level are opt-in via
//! [`EventConfig::trace_dispatch`]. The library installs no subscriber.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use fanfold::{CollectorEvent, CombinerEvent, Dispatch, Event};
//!
//! // Last result wins, everyone runs.
//! let saved: Event<String, usize> = Event::named("saved");
//! let calls = Arc::new(AtomicUsize::new(0));
//! let c = Arc::clone(&calls);
//! let _audit = saved.subscribe(move |_| c.fetch_add(1, Ordering::SeqCst));
//! let _size = saved.subscribe(|doc| doc.len());
//! assert_eq!(saved.invoke(&"hello".to_string()).into_option(), Some(5));
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//!
//! // Every result, in order.
//! let polled: CollectorEvent<(), u8> = CollectorEvent::new();
//! let subs: Vec<_> = (0..3).map(|i| polled.subscribe(move |_| i)).collect();
//! let answers: Vec<u8> = polled.invoke(&()).into_iter().filter_map(|r| r.into_option()).collect();
//! assert_eq!(answers, vec![0, 1, 2]);
//! drop(subs);
//! assert!(polled.invoke(&()).is_empty());
//!
//! // Folded.
//! let widest: CombinerEvent<(), u32> = CombinerEvent::new(|a: u32, b: u32| a.max(b));
//! let _a = widest.subscribe(|_| 120);
//! let _b = widest.subscribe(|_| 640);
//! assert_eq!(widest.invoke(&()).into_option(), Some(640));
//! ```
mod core;
mod error;
mod events;

// ---- Public re-exports ----

pub use core::{EventConfig, EventSource, Subscription, Token};
pub use error::EventError;
pub use events::{CollectorEvent, CombinerBuilder, CombinerEvent, Dispatch, Event, EventResult};
