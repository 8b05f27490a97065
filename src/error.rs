//! Error types used by fanfold events and results.
//!
//! Dispatch itself never fails: "nobody answered" is an absent
//! [`EventResult`](crate::EventResult), not an error. [`EventError`] covers the
//! two contract checks that can be reported instead of panicking:
//!
//! - reading the value of an absent result through the `try_*` accessors;
//! - building a [`CombinerEvent`](crate::CombinerEvent) without a combiner.

use thiserror::Error;

/// # Errors produced by fanfold.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventError {
    /// A value was requested from a result that holds none.
    #[error("no subscriber produced a value")]
    Absent,

    /// A combiner event was built without a combiner function.
    #[error("combiner event requires a combiner function")]
    MissingCombiner,
}

impl EventError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use fanfold::EventError;
    ///
    /// assert_eq!(EventError::Absent.as_label(), "result_absent");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EventError::Absent => "result_absent",
            EventError::MissingCombiner => "combiner_missing",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EventError::Absent => "result is absent; check has_value() first".to_string(),
            EventError::MissingCombiner => {
                "CombinerBuilder::build called before with_combiner".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(EventError::Absent.as_label(), "result_absent");
        assert_eq!(EventError::MissingCombiner.as_label(), "combiner_missing");
    }

    #[test]
    fn test_display_and_message_differ() {
        let err = EventError::MissingCombiner;
        assert_eq!(err.to_string(), "combiner event requires a combiner function");
        assert!(err.as_message().contains("with_combiner"));
    }
}
