//! Capture modes for outcome types.
//!
//! Every outcome belongs to one of two capturing families, fixed at the type
//! level:
//!
//! - [`Selective`]: captures only declared failures, the `Err` values of the
//!   declared cause type. Defects (panics) always propagate unchanged.
//! - [`CatchAll`]: additionally captures defects, storing the panic payload
//!   as a [`Defect`](crate::outcome::Defect) cause.
//!
//! The mode is a type parameter of [`Outcome`](crate::outcome::Outcome) and
//! [`OutcomeVoid`](crate::outcome::OutcomeVoid), so the two families are
//! distinct types: a selective outcome can never be used where a catch-all
//! outcome is expected, and two outcomes holding the same value are never
//! equal across families because the comparison itself is rejected at
//! compile time.
//!
//! ```compile_fail
//! use tryout::outcome::{CatchAll, Outcome, Selective};
//!
//! let selective: Outcome<i32, String, Selective> = Outcome::success(1);
//! let catch_all: Outcome<i32, String, CatchAll> = selective; // mismatched types
//! ```
//!
//! ```compile_fail
//! use tryout::outcome::{CatchAll, Outcome, Selective};
//!
//! let selective: Outcome<i32, String, Selective> = Outcome::success(1);
//! let catch_all: Outcome<i32, String, CatchAll> = Outcome::success(1);
//! assert_eq!(selective, catch_all); // no cross-family equality
//! ```

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Selective {}
    impl Sealed for super::CatchAll {}
}

/// The capturing family of an outcome type.
///
/// This trait is sealed: the only implementors are [`Selective`] and
/// [`CatchAll`]. It exists purely at the type level; neither marker can be
/// instantiated.
pub trait CaptureMode: sealed::Sealed + 'static {
    /// `true` iff this family captures defects in addition to declared
    /// failures.
    const CATCHES_ALL: bool;
}

/// Marker for outcomes that capture only declared failures.
///
/// This is the default mode. Defects raised by a supplied closure are not
/// captured and unwind through the factory unchanged.
#[derive(Debug, Clone, Copy)]
pub enum Selective {}

/// Marker for outcomes that capture defects as well as declared failures.
///
/// Used through the [`OutcomeCatchAll`](crate::outcome::OutcomeCatchAll) and
/// [`OutcomeVoidCatchAll`](crate::outcome::OutcomeVoidCatchAll) aliases.
#[derive(Debug, Clone, Copy)]
pub enum CatchAll {}

impl CaptureMode for Selective {
    const CATCHES_ALL: bool = false;
}

impl CaptureMode for CatchAll {
    const CATCHES_ALL: bool = true;
}
