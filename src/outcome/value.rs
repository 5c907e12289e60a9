//! The value-bearing outcome type.
//!
//! This module provides `Outcome<T, X, M>`, which holds either a computed
//! result of type `T` or a captured failure cause of type `X`. The capture
//! mode `M` fixes, at the type level, which failures the factories capture.
//!
//! # Examples
//!
//! ```rust
//! use tryout::outcome::Outcome;
//!
//! fn halve(value: i32) -> Result<i32, String> {
//!     if value % 2 == 0 {
//!         Ok(value / 2)
//!     } else {
//!         Err(format!("{value} is odd"))
//!     }
//! }
//!
//! let outcome: Outcome<i32, String> = Outcome::of(|| halve(8));
//! let chained = outcome.flat_map(halve);
//! assert_eq!(chained.into_result(), Ok(2));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::defect::Defect;
use super::mode::{CaptureMode, CatchAll, Selective};

/// A catch-all outcome: captures defects (panics) as well as declared
/// failures, storing the panic payload as a [`Defect`] cause.
///
/// Constructed through [`Outcome::catching`].
pub type OutcomeCatchAll<T> = Outcome<T, Defect, CatchAll>;

#[derive(Clone, Copy)]
enum State<T, X> {
    Success(T),
    Failure(X),
}

/// A value that is either a computed result or a captured failure cause.
///
/// `Outcome<T, X, M>` is a success holding a `T` or a failure holding an
/// `X`, never both and never neither. Instances are immutable: every
/// combinator consumes `self` and produces a derived instance. The capture
/// mode `M` (defaulting to [`Selective`]) is part of the type, so outcomes
/// from different capturing families never mix and never compare equal.
///
/// Failures raised by the closures passed to combinators are never silently
/// dropped: each method documents whether such a failure becomes the
/// returned outcome's cause or the `Err` of the method call itself.
///
/// # Type Parameters
///
/// * `T` - The type of the result held by a success
/// * `X` - The type of the cause held by a failure
/// * `M` - The capture mode, [`Selective`] or [`CatchAll`](super::CatchAll)
///
/// # Examples
///
/// ```rust
/// use tryout::outcome::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::success(42);
/// assert!(success.is_success());
///
/// let failure: Outcome<i32, String> = Outcome::failure("broken".to_string());
/// assert!(failure.is_failure());
/// assert_eq!(failure.into_result(), Err("broken".to_string()));
/// ```
pub struct Outcome<T, X, M = Selective> {
    state: State<T, X>,
    mode: PhantomData<M>,
}

impl<T, X, M: CaptureMode> Outcome<T, X, M> {
    const fn from_state(state: State<T, X>) -> Self {
        Self {
            state,
            mode: PhantomData,
        }
    }

    // =========================================================================
    // Factories
    // =========================================================================

    /// Creates a success holding the given result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(42);
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::from_state(State::Success(value))
    }

    /// Creates a failure holding the given cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::failure("broken".to_string());
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub const fn failure(cause: X) -> Self {
        Self::from_state(State::Failure(cause))
    }

    /// Invokes the supplier and captures its result.
    ///
    /// Returns a success if the supplier returns `Ok`, and a failure holding
    /// the declared cause if it returns `Err`. A defect raised by the
    /// supplier is not captured and unwinds through this call unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::Outcome;
    ///
    /// let parsed: Outcome<i32, std::num::ParseIntError> = Outcome::of(|| "7".parse());
    /// assert_eq!(parsed.into_result(), Ok(7));
    ///
    /// let failed: Outcome<i32, std::num::ParseIntError> = Outcome::of(|| "seven".parse());
    /// assert!(failed.is_failure());
    /// ```
    #[inline]
    pub fn of(supplier: impl FnOnce() -> Result<T, X>) -> Self {
        match supplier() {
            Ok(value) => Self::success(value),
            Err(cause) => Self::failure(cause),
        }
    }

    // =========================================================================
    // State Checking
    // =========================================================================

    /// Returns `true` iff this outcome holds a result.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    /// Returns `true` iff this outcome holds a cause.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self.state, State::Failure(_))
    }

    /// Returns a reference to the result if this outcome is a success.
    #[inline]
    pub const fn success_ref(&self) -> Option<&T> {
        match &self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// Returns a reference to the cause if this outcome is a failure.
    #[inline]
    pub const fn cause_ref(&self) -> Option<&X> {
        match &self.state {
            State::Success(_) => None,
            State::Failure(cause) => Some(cause),
        }
    }

    // =========================================================================
    // Eliminators
    // =========================================================================

    /// Transforms the result or the cause, applying exactly one of the two
    /// given closures.
    ///
    /// Which closure runs is determined solely by the success or failure
    /// state. Either closure may declare its own failure type `Y`, which
    /// becomes the `Err` of this call.
    ///
    /// # Errors
    ///
    /// Returns `Err` iff the applied closure does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(2);
    /// let folded: Result<String, String> = outcome.fold(
    ///     |value| Ok(value.to_string()),
    ///     |cause| Ok(format!("failed: {cause}")),
    /// );
    /// assert_eq!(folded, Ok("2".to_string()));
    /// ```
    #[inline]
    pub fn fold<U, Y>(
        self,
        on_success: impl FnOnce(T) -> Result<U, Y>,
        on_failure: impl FnOnce(X) -> Result<U, Y>,
    ) -> Result<U, Y> {
        match self.state {
            State::Success(value) => on_success(value),
            State::Failure(cause) => on_failure(cause),
        }
    }

    /// Returns the result if this outcome is a success, without invoking the
    /// given closure; otherwise transforms the cause into a replacement
    /// result.
    ///
    /// # Errors
    ///
    /// Returns `Err` iff the transformation was applied and failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::failure("nope".to_string());
    /// let recovered: Result<i32, String> = outcome.recover(|_cause| Ok(0));
    /// assert_eq!(recovered, Ok(0));
    /// ```
    #[inline]
    pub fn recover<Y>(
        self,
        cause_transformation: impl FnOnce(X) -> Result<T, Y>,
    ) -> Result<T, Y> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(cause) => cause_transformation(cause),
        }
    }

    /// Returns `Some(result)` if this outcome is a success, without invoking
    /// the given consumer; otherwise feeds the cause to the consumer and
    /// returns `None`.
    ///
    /// # Errors
    ///
    /// Returns `Err` iff the consumer was invoked and failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::failure("broken".to_string());
    /// let mut seen = None;
    /// let consumed: Result<Option<i32>, String> = outcome.consume_cause(|cause| {
    ///     seen = Some(cause);
    ///     Ok(())
    /// });
    /// assert_eq!(consumed, Ok(None));
    /// assert_eq!(seen.as_deref(), Some("broken"));
    /// ```
    #[inline]
    pub fn consume_cause<Y>(
        self,
        consumer: impl FnOnce(X) -> Result<(), Y>,
    ) -> Result<Option<T>, Y> {
        match self.state {
            State::Success(value) => Ok(Some(value)),
            State::Failure(cause) => {
                consumer(cause)?;
                Ok(None)
            }
        }
    }

    /// Surfaces this outcome as a plain `Result`.
    ///
    /// # Errors
    ///
    /// Returns `Err` holding the cause iff this outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(outcome.into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, X> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(cause) => Err(cause),
        }
    }

    /// Surfaces this outcome as a plain `Result`, transforming the cause on
    /// the way out.
    ///
    /// The transformation is not invoked on a success.
    ///
    /// # Errors
    ///
    /// Returns `Err` holding the transformed cause iff this outcome is a
    /// failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::failure("raw".to_string());
    /// let result: Result<i32, usize> = outcome.into_result_mapped(|cause| cause.len());
    /// assert_eq!(result, Err(3));
    /// ```
    #[inline]
    pub fn into_result_mapped<Y>(
        self,
        cause_transformation: impl FnOnce(X) -> Y,
    ) -> Result<T, Y> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(cause) => Err(cause_transformation(cause)),
        }
    }

    // =========================================================================
    // Success-Chaining Combinators
    // =========================================================================

    /// Runs the action iff this outcome is a success.
    ///
    /// If the action completes, the success is returned unchanged; if it
    /// declares a failure, that cause becomes the returned outcome's
    /// failure. An existing failure is returned without running the action.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(1);
    /// let ran = outcome.and_run(|| Err("cleanup failed".to_string()));
    /// assert_eq!(ran.into_result(), Err("cleanup failed".to_string()));
    /// ```
    #[inline]
    pub fn and_run(self, action: impl FnOnce() -> Result<(), X>) -> Self {
        match self.state {
            State::Success(value) => match action() {
                Ok(()) => Self::success(value),
                Err(cause) => Self::failure(cause),
            },
            State::Failure(cause) => Self::failure(cause),
        }
    }

    /// Feeds the result to the consumer iff this outcome is a success.
    ///
    /// Behaves as [`and_run`](Self::and_run), with the consumer observing
    /// the success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::Outcome;
    ///
    /// let outcome: Outcome<Vec<i32>, String> = Outcome::success(vec![1, 2]);
    /// let checked = outcome.and_consume(|values| {
    ///     if values.is_empty() {
    ///         Err("empty".to_string())
    ///     } else {
    ///         Ok(())
    ///     }
    /// });
    /// assert!(checked.is_success());
    /// ```
    #[inline]
    pub fn and_consume(self, consumer: impl FnOnce(&T) -> Result<(), X>) -> Self {
        match self.state {
            State::Success(value) => match consumer(&value) {
                Ok(()) => Self::success(value),
                Err(cause) => Self::failure(cause),
            },
            State::Failure(cause) => Self::failure(cause),
        }
    }

    /// Merges two successes, or propagates the first failure.
    ///
    /// If both this outcome and `other` are successes, returns a success
    /// holding the merged value. If this outcome is a failure, it wins and
    /// `other`'s cause is never inspected (the merger is not invoked). If
    /// only `other` is a failure, its cause becomes the returned failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::Outcome;
    ///
    /// let left: Outcome<i32, String> = Outcome::success(2);
    /// let right: Outcome<&str, String> = Outcome::success("three");
    /// let merged = left.and(right, |number, word| format!("{number} {word}"));
    /// assert_eq!(merged.into_result(), Ok("2 three".to_string()));
    /// ```
    #[inline]
    pub fn and<U, V>(
        self,
        other: Outcome<U, X, M>,
        merger: impl FnOnce(T, U) -> V,
    ) -> Outcome<V, X, M> {
        match (self.state, other.state) {
            (State::Success(left), State::Success(right)) => Outcome::success(merger(left, right)),
            (State::Failure(cause), _) => Outcome::failure(cause),
            (State::Success(_), State::Failure(cause)) => Outcome::failure(cause),
        }
    }

    /// Applies the mapper to the result iff this outcome is a success.
    ///
    /// A declared failure raised by the mapper becomes the returned
    /// outcome's cause, equivalently to `Outcome::of(|| mapper(value))`. An
    /// existing failure is recast to the new result type unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(4);
    /// let mapped = outcome.flat_map(|value| {
    ///     if value % 2 == 0 {
    ///         Ok(value / 2)
    ///     } else {
    ///         Err("odd".to_string())
    ///     }
    /// });
    /// assert_eq!(mapped.into_result(), Ok(2));
    /// ```
    #[inline]
    pub fn flat_map<U>(self, mapper: impl FnOnce(T) -> Result<U, X>) -> Outcome<U, X, M> {
        match self.state {
            State::Success(value) => Outcome::of(|| mapper(value)),
            State::Failure(cause) => Outcome::failure(cause),
        }
    }

    // =========================================================================
    // Failure-Recovery Combinators
    // =========================================================================

    /// Returns this outcome if it is a success; otherwise attempts the
    /// alternative, merging both causes if the alternative fails too.
    ///
    /// On failure, the alternative supplier runs. If it succeeds, its value
    /// becomes the returned success. If it also fails, the returned failure
    /// holds `cause_merger(first_cause, alternative_cause)`: neither cause
    /// is dropped, the caller decides how they combine.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::Outcome;
    ///
    /// let failed: Outcome<i32, String> = Outcome::failure("first".to_string());
    /// let merged = failed.or(
    ///     || Err("second".to_string()),
    ///     |first, second| format!("{first}, then {second}"),
    /// );
    /// assert_eq!(merged.into_result(), Err("first, then second".to_string()));
    /// ```
    #[inline]
    pub fn or<Y, Z>(
        self,
        alternative: impl FnOnce() -> Result<T, Y>,
        cause_merger: impl FnOnce(X, Y) -> Z,
    ) -> Outcome<T, Z, M> {
        match self.state {
            State::Success(value) => Outcome::success(value),
            State::Failure(first) => match alternative() {
                Ok(value) => Outcome::success(value),
                Err(second) => Outcome::failure(cause_merger(first, second)),
            },
        }
    }
}

// =============================================================================
// Catch-All Factories
// =============================================================================

impl<T> OutcomeCatchAll<T> {
    /// Invokes the supplier, capturing a defect as the cause.
    ///
    /// Returns a success holding the supplied value if the supplier
    /// completes, and a failure holding the panic payload as a [`Defect`]
    /// if it panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::OutcomeCatchAll;
    ///
    /// let computed: OutcomeCatchAll<i32> = OutcomeCatchAll::catching(|| 21 * 2);
    /// assert_eq!(computed.into_result().unwrap(), 42);
    ///
    /// let caught: OutcomeCatchAll<i32> = OutcomeCatchAll::catching(|| panic!("boom"));
    /// assert_eq!(caught.into_result().unwrap_err().message(), Some("boom"));
    /// ```
    pub fn catching(supplier: impl FnOnce() -> T) -> Self {
        match catch_unwind(AssertUnwindSafe(supplier)) {
            Ok(value) => Self::success(value),
            Err(payload) => Self::failure(Defect::new(payload)),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: fmt::Debug, X: fmt::Debug, M> fmt::Debug for Outcome<T, X, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            State::Failure(cause) => formatter.debug_tuple("Failure").field(cause).finish(),
        }
    }
}

impl<T: Clone, X: Clone, M> Clone for Outcome<T, X, M> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            mode: PhantomData,
        }
    }
}

impl<T: Copy, X: Copy, M> Copy for Outcome<T, X, M> {}

/// Outcomes are equal iff they are both successes with equal results or
/// both failures with equal causes.
///
/// Equality is only defined within one capturing family: comparing a
/// selective outcome with a catch-all outcome is rejected at compile time,
/// the strongest form of "never equal".
impl<T: PartialEq, X: PartialEq, M: CaptureMode> PartialEq for Outcome<T, X, M> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (State::Success(left), State::Success(right)) => left == right,
            (State::Failure(left), State::Failure(right)) => left == right,
            _ => false,
        }
    }
}

impl<T: Eq, X: Eq, M: CaptureMode> Eq for Outcome<T, X, M> {}

impl<T: Hash, X: Hash, M: CaptureMode> Hash for Outcome<T, X, M> {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        M::CATCHES_ALL.hash(hasher);
        match &self.state {
            State::Success(value) => {
                0_u8.hash(hasher);
                value.hash(hasher);
            }
            State::Failure(cause) => {
                1_u8.hash(hasher);
                cause.hash(hasher);
            }
        }
    }
}

impl<T, X, M: CaptureMode> From<Result<T, X>> for Outcome<T, X, M> {
    /// Converts `Ok(value)` to a success and `Err(cause)` to a failure.
    #[inline]
    fn from(result: Result<T, X>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(cause) => Self::failure(cause),
        }
    }
}

impl<T, X, M: CaptureMode> From<Outcome<T, X, M>> for Result<T, X> {
    /// Converts a success to `Ok(value)` and a failure to `Err(cause)`.
    #[inline]
    fn from(outcome: Outcome<T, X, M>) -> Self {
        outcome.into_result()
    }
}

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync);
static_assertions::assert_impl_all!(OutcomeCatchAll<i32>: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn success_holds_its_result() {
        let outcome: Outcome<i32, String> = Outcome::success(42);
        assert!(outcome.is_success());
        assert_eq!(outcome.success_ref(), Some(&42));
    }

    #[rstest]
    fn failure_holds_its_cause() {
        let outcome: Outcome<i32, String> = Outcome::failure("broken".to_string());
        assert!(outcome.is_failure());
        assert_eq!(outcome.cause_ref().map(String::as_str), Some("broken"));
    }

    #[rstest]
    fn of_is_equivalent_to_the_direct_factories() {
        let succeeded: Outcome<i32, String> = Outcome::of(|| Ok(1));
        assert_eq!(succeeded, Outcome::success(1));

        let failed: Outcome<i32, String> = Outcome::of(|| Err("nope".to_string()));
        assert_eq!(failed, Outcome::failure("nope".to_string()));
    }
}
