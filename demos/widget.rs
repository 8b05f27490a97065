//! # Example: widget
//!
//! A component that owns its events and exposes subscribe-only views.
//!
//! Demonstrates how to:
//! - Keep [`Event`] / [`CombinerEvent`] private and hand out [`EventSource`] views.
//! - Hold several [`Subscription`]s of different event types in one `Vec`.
//! - Let a subscriber veto a change through a fold.
//!
//! ## Flow
//! ```text
//! Slider::set(v)
//!     ├─► validating.invoke(&v)   CombinerEvent<i32, bool> (all must agree)
//!     │     └─ false ──► rejected, nothing else fires
//!     ├─► value = v
//!     └─► changed.notify(&v)      Event<i32>
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example widget
//! ```

use std::sync::atomic::{AtomicI32, Ordering};

use fanfold::{CombinerEvent, Dispatch, Event, EventConfig, EventSource, Subscription};

struct Slider {
    value: AtomicI32,
    changed: Event<i32>,
    validating: CombinerEvent<i32, bool>,
}

impl Slider {
    fn new() -> Self {
        Self {
            value: AtomicI32::new(0),
            changed: Event::named("slider.changed"),
            validating: CombinerEvent::with_config(
                EventConfig::named("slider.validating"),
                |a: bool, b: bool| a && b,
            ),
        }
    }

    fn changed(&self) -> EventSource<'_, i32, ()> {
        self.changed.source()
    }

    fn validating(&self) -> EventSource<'_, i32, bool> {
        self.validating.source()
    }

    fn set(&self, value: i32) -> bool {
        // Nobody objecting counts as accepted.
        if !self.validating.invoke(&value).into_option().unwrap_or(true) {
            return false;
        }
        self.value.store(value, Ordering::SeqCst);
        self.changed.notify(&value);
        true
    }
}

fn main() {
    let slider = Slider::new();

    let mut subs: Vec<Subscription> = Vec::new();
    subs.push(slider.validating().subscribe(|v| (0..=100).contains(v)));
    subs.push(slider.validating().subscribe(|v| v % 5 == 0));
    subs.push(slider.changed().subscribe(|v| println!("[changed] value={v}")));

    for candidate in [10, 42, 150, 95] {
        let accepted = slider.set(candidate);
        println!("[set] candidate={candidate} accepted={accepted}");
    }
    println!("[final] value={}", slider.value.load(Ordering::SeqCst));

    subs.clear();
    println!("[unsubscribed] listeners={}", slider.changed().len());
}
