//! # Per-event configuration.
//!
//! Provides [`EventConfig`], the settings shared by every dispatch strategy.
//!
//! Config is used in two ways:
//! 1. **Construction**: `Event::with_config(config)` and friends;
//! 2. **Logging**: `name` becomes the `event` field on every `tracing` record.

use std::borrow::Cow;

/// Settings for one event instance.
///
/// ## Field semantics
/// - `name`: label attached to log records (`"event"` by default)
/// - `trace_dispatch`: emit a `trace!` record for every invoke/notify
#[derive(Clone, Debug)]
pub struct EventConfig {
    /// Label used in log fields.
    pub name: Cow<'static, str>,

    /// Emit one `trace!` record per dispatch pass.
    ///
    /// Off by default; dispatch is usually too hot to log.
    pub trace_dispatch: bool,
}

impl EventConfig {
    /// Creates a config with the given name and defaults for everything else.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Enables per-dispatch tracing.
    #[inline]
    pub fn with_trace_dispatch(mut self, on: bool) -> Self {
        self.trace_dispatch = on;
        self
    }

    /// Returns the label used in log fields.
    #[inline]
    pub fn label(&self) -> &str {
        &self.name
    }
}

impl Default for EventConfig {
    /// Default configuration:
    ///
    /// - `name = "event"`
    /// - `trace_dispatch = false`
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("event"),
            trace_dispatch: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keeps_defaults() {
        let cfg = EventConfig::named("clicked");
        assert_eq!(cfg.label(), "clicked");
        assert!(!cfg.trace_dispatch);
    }

    #[test]
    fn test_default_label() {
        assert_eq!(EventConfig::default().label(), "event");
        assert!(EventConfig::default().with_trace_dispatch(true).trace_dispatch);
    }
}
