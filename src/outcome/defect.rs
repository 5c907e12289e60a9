//! The defect payload captured by catch-all outcomes.

use std::any::Any;
use std::fmt;
use std::panic;

/// A captured defect: the payload of a panic observed by a catch-all
/// factory.
///
/// A defect is an undeclared, unexpected failure. Selective outcomes never
/// observe one; catch-all factories such as
/// [`OutcomeCatchAll::catching`](crate::outcome::Outcome::catching) capture
/// the unwinding payload into a `Defect` cause so the failure can be
/// inspected instead of aborting the surrounding computation.
///
/// Panic payloads are type-erased. [`message`](Self::message) recovers the
/// text of the common `&str` and `String` payloads; anything else is kept
/// opaque and can be retrieved through [`payload`](Self::payload) or
/// re-raised with [`resume`](Self::resume).
///
/// # Examples
///
/// ```rust
/// use tryout::outcome::OutcomeCatchAll;
///
/// let outcome: OutcomeCatchAll<i32> = OutcomeCatchAll::catching(|| panic!("boom"));
/// let cause = outcome.into_result().unwrap_err();
/// assert_eq!(cause.message(), Some("boom"));
/// ```
pub struct Defect {
    payload: Box<dyn Any + Send + 'static>,
}

impl Defect {
    /// Wraps a panic payload.
    pub(crate) fn new(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// Creates a defect carrying the given message as its payload.
    ///
    /// Useful for constructing catch-all failures directly, without going
    /// through a panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::Defect;
    ///
    /// let defect = Defect::of_message("invariant violated");
    /// assert_eq!(defect.message(), Some("invariant violated"));
    /// ```
    pub fn of_message(message: impl Into<String>) -> Self {
        Self {
            payload: Box::new(message.into()),
        }
    }

    /// Returns the defect's message, if its payload is a `&str` or `String`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::OutcomeCatchAll;
    ///
    /// let outcome: OutcomeCatchAll<i32> =
    ///     OutcomeCatchAll::catching(|| panic!("at offset {}", 7));
    /// let cause = outcome.into_result().unwrap_err();
    /// assert_eq!(cause.message(), Some("at offset 7"));
    /// ```
    pub fn message(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Returns the raw panic payload.
    pub fn payload(&self) -> &(dyn Any + Send) {
        self.payload.as_ref()
    }

    /// Consumes the defect, returning the raw panic payload.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Repropagates the defect by resuming the unwind with the original
    /// payload.
    ///
    /// This is the escape hatch for callers that inspected a captured defect
    /// and decided it is not theirs to handle.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Defect {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("Defect")
            .field(&self.message().unwrap_or("<opaque payload>"))
            .finish()
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(formatter, "defect: {message}"),
            None => write!(formatter, "defect with an opaque payload"),
        }
    }
}

impl std::error::Error for Defect {}

/// Best-effort equality: two defects are equal iff both carry a textual
/// payload and the texts match. Defects with opaque payloads never compare
/// equal, not even to themselves.
impl PartialEq for Defect {
    fn eq(&self, other: &Self) -> bool {
        match (self.message(), other.message()) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }
}

static_assertions::assert_impl_all!(Defect: Send);
static_assertions::assert_not_impl_any!(Defect: Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_extracts_str_payloads() {
        let defect = Defect::of_message("boom");
        assert_eq!(defect.message(), Some("boom"));
    }

    #[test]
    fn opaque_payloads_are_never_equal() {
        let left = Defect::new(Box::new(42_i32));
        let right = Defect::new(Box::new(42_i32));
        assert!(left != right);
    }
}
