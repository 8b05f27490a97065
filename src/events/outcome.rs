//! # Dispatch result.
//!
//! [`EventResult`] distinguishes "no subscriber produced a value" from "a
//! value was produced". It is a plain tagged union; there is no placeholder
//! value to read by accident.
//!
//! ## Reference-like payloads
//! A subscriber that wants to hand back a reference into caller-owned storage
//! returns a shared handle (`Arc<Mutex<U>>`). The result then aliases that
//! storage, and [`EventResult::write`] writes through to it.
//!
//! ## Example
//! ```rust
//! use fanfold::{EventError, EventResult};
//!
//! let none: EventResult<i32> = EventResult::absent();
//! assert!(!none.has_value());
//! assert_eq!(none.try_value(), Err(EventError::Absent));
//! assert_eq!(none.value_or_default(), 0);
//!
//! let mut some = EventResult::present(3);
//! assert_eq!(*some.value(), 3);
//! assert_eq!(some.replace(4), Some(3));
//! assert_eq!(some.into_option(), Some(4));
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::EventError;

/// Optional outcome of one dispatch (or of one subscriber, for collectors).
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventResult<T> {
    /// No subscriber produced a value.
    #[default]
    Absent,
    /// A subscriber produced this value.
    Present(T),
}

impl<T> EventResult<T> {
    /// An empty result.
    #[inline]
    pub fn absent() -> Self {
        EventResult::Absent
    }

    /// A result holding `value`.
    #[inline]
    pub fn present(value: T) -> Self {
        EventResult::Present(value)
    }

    /// True if a value was produced.
    #[inline]
    pub fn has_value(&self) -> bool {
        matches!(self, EventResult::Present(_))
    }

    /// Borrows the value.
    ///
    /// # Panics
    /// Panics if the result is absent. Check [`has_value`](Self::has_value)
    /// first, or use [`try_value`](Self::try_value).
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            EventResult::Present(value) => value,
            EventResult::Absent => panic!("EventResult::value called on an absent result"),
        }
    }

    /// Mutably borrows the value.
    ///
    /// # Panics
    /// Panics if the result is absent.
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match self {
            EventResult::Present(value) => value,
            EventResult::Absent => panic!("EventResult::value_mut called on an absent result"),
        }
    }

    /// Borrows the value, or reports [`EventError::Absent`].
    pub fn try_value(&self) -> Result<&T, EventError> {
        match self {
            EventResult::Present(value) => Ok(value),
            EventResult::Absent => Err(EventError::Absent),
        }
    }

    /// Mutably borrows the value, or reports [`EventError::Absent`].
    pub fn try_value_mut(&mut self) -> Result<&mut T, EventError> {
        match self {
            EventResult::Present(value) => Ok(value),
            EventResult::Absent => Err(EventError::Absent),
        }
    }

    /// Stores `value`, making the result present. Returns the previous value.
    pub fn replace(&mut self, value: T) -> Option<T> {
        std::mem::replace(self, EventResult::Present(value)).into_option()
    }

    /// `Some` becomes present, `None` absent.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => EventResult::Present(value),
            None => EventResult::Absent,
        }
    }

    /// Converts into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            EventResult::Present(value) => Some(value),
            EventResult::Absent => None,
        }
    }

    /// Borrows as an `Option`.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        match self {
            EventResult::Present(value) => Some(value),
            EventResult::Absent => None,
        }
    }

    /// Maps a present value, keeping absence.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> EventResult<U> {
        match self {
            EventResult::Present(value) => EventResult::Present(f(value)),
            EventResult::Absent => EventResult::Absent,
        }
    }
}

impl<T: Default> EventResult<T> {
    /// The value, or `T::default()` when absent.
    pub fn value_or_default(self) -> T {
        self.into_option().unwrap_or_default()
    }
}

impl<U> EventResult<Arc<Mutex<U>>> {
    /// Writes through to the shared storage the result refers to.
    ///
    /// Returns the referent's previous value.
    pub fn write(&self, value: U) -> Result<U, EventError> {
        let cell = self.try_value()?;
        Ok(std::mem::replace(&mut *cell.lock(), value))
    }
}

impl<U> EventResult<&mut U> {
    /// Writes through to the borrowed referent.
    ///
    /// Returns the referent's previous value.
    pub fn write(&mut self, value: U) -> Result<U, EventError> {
        let referent = self.try_value_mut()?;
        Ok(std::mem::replace(&mut **referent, value))
    }
}

impl<T> From<T> for EventResult<T> {
    fn from(value: T) -> Self {
        EventResult::Present(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_result_default_is_absent() {
        let result: EventResult<bool> = EventResult::default();
        assert!(!result.has_value());
        assert!(!result.value_or_default());
    }

    #[test]
    fn test_value_result_assignment_replaces() {
        let mut result = EventResult::present(true);
        assert!(result.has_value());
        assert!(*result.value());

        result.replace(false);
        assert!(!*result.value());
    }

    #[test]
    fn test_replace_makes_absent_present() {
        let mut result: EventResult<i32> = EventResult::absent();
        assert_eq!(result.replace(9), None);
        assert_eq!(result, EventResult::Present(9));
    }

    #[test]
    fn test_reference_result_writes_through() {
        let mut backing = 5;
        {
            let mut result = EventResult::present(&mut backing);
            assert!(result.has_value());
            assert_eq!(**result.value(), 5);

            **result.value_mut() = 4;
            assert_eq!(result.write(7), Ok(4));
        }
        assert_eq!(backing, 7);
    }

    #[test]
    fn test_absent_reference_result_reports_error() {
        let mut result: EventResult<&mut i32> = EventResult::absent();
        assert!(!result.has_value());
        assert_eq!(result.write(1), Err(EventError::Absent));
        assert!(result.try_value().is_err());
    }

    #[test]
    fn test_shared_result_writes_through() {
        let backing = Arc::new(Mutex::new(0));
        let result = EventResult::present(Arc::clone(&backing));

        assert_eq!(result.write(3), Ok(0));
        assert_eq!(*backing.lock(), 3);
        assert!(Arc::ptr_eq(result.value(), &backing));
    }

    #[test]
    #[should_panic(expected = "absent result")]
    fn test_value_on_absent_panics() {
        let result: EventResult<i32> = EventResult::absent();
        let _ = result.value();
    }

    #[test]
    fn test_non_clonable_payload() {
        let result = EventResult::present(Box::new(2));
        assert_eq!(result.map(|b| *b * 10).into_option(), Some(20));
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(EventResult::from_option(Some(1)), EventResult::Present(1));
        assert_eq!(EventResult::<i32>::from_option(None), EventResult::Absent);
        assert_eq!(EventResult::from(2).as_option(), Some(&2));
    }
}
