//! The value-less outcome type.
//!
//! `OutcomeVoid<X, M>` mirrors [`Outcome`](crate::outcome::Outcome) for
//! operations that produce no value: a success carries nothing, a failure
//! carries the cause. The [`and_get`](OutcomeVoid::and_get) promotion turns
//! a void success into a value-bearing outcome by invoking a supplier.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::defect::Defect;
use super::mode::{CaptureMode, CatchAll, Selective};
use super::value::Outcome;

/// A catch-all void outcome: captures defects (panics) raised by the action.
///
/// Constructed through [`OutcomeVoid::catching`].
pub type OutcomeVoidCatchAll = OutcomeVoid<Defect, CatchAll>;

#[derive(Clone, Copy)]
enum VoidState<X> {
    Success,
    Failure(X),
}

/// A value-less outcome: either a success with no payload or a failure
/// holding a cause of type `X`.
///
/// Immutable after construction; every combinator consumes `self`. The
/// capture mode `M` behaves exactly as on
/// [`Outcome`](crate::outcome::Outcome): families are distinct types and
/// never compare equal to each other.
///
/// # Examples
///
/// ```rust
/// use tryout::outcome::OutcomeVoid;
///
/// fn store(record: &str) -> Result<(), String> {
///     if record.is_empty() {
///         Err("empty record".to_string())
///     } else {
///         Ok(())
///     }
/// }
///
/// let stored: OutcomeVoid<String> = OutcomeVoid::run(|| store("entry"));
/// assert!(stored.is_success());
///
/// let rejected: OutcomeVoid<String> = OutcomeVoid::run(|| store(""));
/// assert_eq!(rejected.into_result(), Err("empty record".to_string()));
/// ```
pub struct OutcomeVoid<X, M = Selective> {
    state: VoidState<X>,
    mode: PhantomData<M>,
}

impl<X, M: CaptureMode> OutcomeVoid<X, M> {
    const fn from_state(state: VoidState<X>) -> Self {
        Self {
            state,
            mode: PhantomData,
        }
    }

    // =========================================================================
    // Factories
    // =========================================================================

    /// Creates a success.
    #[inline]
    pub const fn success() -> Self {
        Self::from_state(VoidState::Success)
    }

    /// Creates a failure holding the given cause.
    #[inline]
    pub const fn failure(cause: X) -> Self {
        Self::from_state(VoidState::Failure(cause))
    }

    /// Invokes the action and captures its result.
    ///
    /// Returns a success if the action completes, and a failure holding the
    /// declared cause if it fails. A defect raised by the action is not
    /// captured and unwinds through this call unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::OutcomeVoid;
    ///
    /// let ran: OutcomeVoid<String> = OutcomeVoid::run(|| Ok(()));
    /// assert!(ran.is_success());
    /// ```
    #[inline]
    pub fn run(action: impl FnOnce() -> Result<(), X>) -> Self {
        match action() {
            Ok(()) => Self::success(),
            Err(cause) => Self::failure(cause),
        }
    }

    // =========================================================================
    // State Checking
    // =========================================================================

    /// Returns `true` iff this outcome is a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.state, VoidState::Success)
    }

    /// Returns `true` iff this outcome holds a cause.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self.state, VoidState::Failure(_))
    }

    /// Returns a reference to the cause if this outcome is a failure.
    #[inline]
    pub const fn cause_ref(&self) -> Option<&X> {
        match &self.state {
            VoidState::Success => None,
            VoidState::Failure(cause) => Some(cause),
        }
    }

    // =========================================================================
    // Eliminators
    // =========================================================================

    /// Produces a value from either branch, invoking exactly one of the two
    /// given closures.
    ///
    /// The supplier runs on success, the transformation on failure. Either
    /// may declare its own failure type `Y`, which becomes the `Err` of
    /// this call.
    ///
    /// # Errors
    ///
    /// Returns `Err` iff the invoked closure does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::OutcomeVoid;
    ///
    /// let outcome: OutcomeVoid<String> = OutcomeVoid::success();
    /// let described: Result<&str, String> =
    ///     outcome.fold(|| Ok("done"), |_cause| Ok("failed"));
    /// assert_eq!(described, Ok("done"));
    /// ```
    #[inline]
    pub fn fold<T, Y>(
        self,
        on_success: impl FnOnce() -> Result<T, Y>,
        on_failure: impl FnOnce(X) -> Result<T, Y>,
    ) -> Result<T, Y> {
        match self.state {
            VoidState::Success => on_success(),
            VoidState::Failure(cause) => on_failure(cause),
        }
    }

    /// Feeds the cause to the consumer iff this outcome is a failure.
    ///
    /// Does nothing on success.
    ///
    /// # Errors
    ///
    /// Returns `Err` iff the consumer was invoked and failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::OutcomeVoid;
    ///
    /// let outcome: OutcomeVoid<String> = OutcomeVoid::failure("broken".to_string());
    /// let mut seen = None;
    /// let observed: Result<(), String> = outcome.if_failed(|cause| {
    ///     seen = Some(cause.clone());
    ///     Ok(())
    /// });
    /// assert_eq!(observed, Ok(()));
    /// assert_eq!(seen.as_deref(), Some("broken"));
    /// ```
    #[inline]
    pub fn if_failed<Y>(&self, consumer: impl FnOnce(&X) -> Result<(), Y>) -> Result<(), Y> {
        match &self.state {
            VoidState::Success => Ok(()),
            VoidState::Failure(cause) => consumer(cause),
        }
    }

    /// Surfaces this outcome as a plain `Result`.
    ///
    /// # Errors
    ///
    /// Returns `Err` holding the cause iff this outcome is a failure.
    #[inline]
    pub fn into_result(self) -> Result<(), X> {
        match self.state {
            VoidState::Success => Ok(()),
            VoidState::Failure(cause) => Err(cause),
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
    #[inline]
    pub fn into_result_mapped<Y>(
        self,
        cause_transformation: impl FnOnce(X) -> Y,
    ) -> Result<(), Y> {
        match self.state {
            VoidState::Success => Ok(()),
            VoidState::Failure(cause) => Err(cause_transformation(cause)),
        }
    }

    // =========================================================================
    // Chaining Combinators
    // =========================================================================

    /// Promotes this outcome to a value-bearing one by invoking the supplier
    /// iff this outcome is a success.
    ///
    /// On success, the returned outcome captures the supplier's result
    /// exactly as [`Outcome::of`] does. On failure, the supplier is not
    /// invoked and the cause is recast into a value-bearing failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::{Outcome, OutcomeVoid};
    ///
    /// let prepared: OutcomeVoid<String> = OutcomeVoid::success();
    /// let loaded: Outcome<i32, String> = prepared.and_get(|| Ok(42));
    /// assert_eq!(loaded.into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn and_get<T>(self, supplier: impl FnOnce() -> Result<T, X>) -> Outcome<T, X, M> {
        match self.state {
            VoidState::Success => Outcome::of(supplier),
            VoidState::Failure(cause) => Outcome::failure(cause),
        }
    }

    /// Runs the action iff this outcome is a success.
    ///
    /// If the action completes, a success is returned; if it declares a
    /// failure, that cause becomes the returned failure. An existing
    /// failure is returned without running the action.
    #[inline]
    pub fn and_run(self, action: impl FnOnce() -> Result<(), X>) -> Self {
        match self.state {
            VoidState::Success => Self::run(action),
            VoidState::Failure(cause) => Self::failure(cause),
        }
    }

    /// Runs the action iff this outcome is a failure.
    ///
    /// A success is returned unchanged without running the action. On
    /// failure, the returned outcome reflects the action: success if it
    /// completed, its declared cause otherwise. The original cause is
    /// discarded once the recovery action runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::OutcomeVoid;
    ///
    /// let failed: OutcomeVoid<String> = OutcomeVoid::failure("first".to_string());
    /// let recovered = failed.or(|| Ok(()));
    /// assert!(recovered.is_success());
    /// ```
    #[inline]
    pub fn or(self, action: impl FnOnce() -> Result<(), X>) -> Self {
        match self.state {
            VoidState::Success => Self::success(),
            VoidState::Failure(_) => Self::run(action),
        }
    }
}

// =============================================================================
// Catch-All Factories
// =============================================================================

impl OutcomeVoidCatchAll {
    /// Invokes the action, capturing a defect as the cause.
    ///
    /// Returns a success if the action completes and a failure holding the
    /// panic payload as a [`Defect`] if it panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryout::outcome::OutcomeVoidCatchAll;
    ///
    /// let caught = OutcomeVoidCatchAll::catching(|| panic!("boom"));
    /// assert!(caught.is_failure());
    /// ```
    pub fn catching(action: impl FnOnce()) -> Self {
        match catch_unwind(AssertUnwindSafe(action)) {
            Ok(()) => Self::success(),
            Err(payload) => Self::failure(Defect::new(payload)),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<X: fmt::Debug, M> fmt::Debug for OutcomeVoid<X, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            VoidState::Success => formatter.debug_tuple("Success").finish(),
            VoidState::Failure(cause) => formatter.debug_tuple("Failure").field(cause).finish(),
        }
    }
}

impl<X: Clone, M> Clone for OutcomeVoid<X, M> {
    fn clone(&self) -> Self {
        Self {
            state: match &self.state {
                VoidState::Success => VoidState::Success,
                VoidState::Failure(cause) => VoidState::Failure(cause.clone()),
            },
            mode: PhantomData,
        }
    }
}

impl<X: Copy, M> Copy for OutcomeVoid<X, M> {}

/// Void outcomes are equal iff they are both successes or both failures
/// with equal causes. As on [`Outcome`], equality is only defined within
/// one capturing family.
impl<X: PartialEq, M: CaptureMode> PartialEq for OutcomeVoid<X, M> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (VoidState::Success, VoidState::Success) => true,
            (VoidState::Failure(left), VoidState::Failure(right)) => left == right,
            _ => false,
        }
    }
}

impl<X: Eq, M: CaptureMode> Eq for OutcomeVoid<X, M> {}

impl<X: Hash, M: CaptureMode> Hash for OutcomeVoid<X, M> {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        M::CATCHES_ALL.hash(hasher);
        match &self.state {
            VoidState::Success => 0_u8.hash(hasher),
            VoidState::Failure(cause) => {
                1_u8.hash(hasher);
                cause.hash(hasher);
            }
        }
    }
}

impl<X, M: CaptureMode> From<Result<(), X>> for OutcomeVoid<X, M> {
    /// Converts `Ok(())` to a success and `Err(cause)` to a failure.
    #[inline]
    fn from(result: Result<(), X>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(cause) => Self::failure(cause),
        }
    }
}

impl<X, M: CaptureMode> From<OutcomeVoid<X, M>> for Result<(), X> {
    /// Converts a success to `Ok(())` and a failure to `Err(cause)`.
    #[inline]
    fn from(outcome: OutcomeVoid<X, M>) -> Self {
        outcome.into_result()
    }
}

static_assertions::assert_impl_all!(OutcomeVoid<String>: Send, Sync);
static_assertions::assert_impl_all!(OutcomeVoidCatchAll: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn run_captures_the_declared_cause() {
        let outcome: OutcomeVoid<String> = OutcomeVoid::run(|| Err("nope".to_string()));
        assert_eq!(outcome, OutcomeVoid::failure("nope".to_string()));
    }

    #[rstest]
    fn and_get_promotes_a_success() {
        let outcome: OutcomeVoid<String> = OutcomeVoid::success();
        let promoted = outcome.and_get(|| Ok(7));
        assert_eq!(promoted.into_result(), Ok(7));
    }

    #[rstest]
    fn and_get_skips_the_supplier_on_failure() {
        let outcome: OutcomeVoid<String> = OutcomeVoid::failure("down".to_string());
        let promoted: crate::outcome::Outcome<i32, String> =
            outcome.and_get(|| unreachable!("supplier must not run"));
        assert_eq!(promoted.into_result(), Err("down".to_string()));
    }
}
