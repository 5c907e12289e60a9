//! Inspectable outcomes of fallible computations.
//!
//! This module provides an explicit alternative to implicit failure
//! propagation: a value that is either a computed result or a captured
//! failure cause, plus a family of combinators for composing fallible
//! computations without losing the cause's concrete type.
//!
//! - [`Outcome`]: the value-bearing outcome, a success holding a result or
//!   a failure holding a cause
//! - [`OutcomeVoid`]: the value-less counterpart, with a promotion into
//!   [`Outcome`] via [`OutcomeVoid::and_get`]
//! - [`Selective`] / [`CatchAll`]: the capturing families; selective
//!   outcomes capture only declared failures, catch-all outcomes also
//!   capture defects (panics) as [`Defect`] causes
//!
//! # Declared failures and defects
//!
//! A declared failure is an `Err` of the declared cause type, returned by a
//! closure the caller supplies; it is captured, inspected and composed. A
//! defect is a panic: undeclared, unexpected, and always repropagated
//! unchanged by selective outcomes. Only the catch-all factories
//! ([`Outcome::catching`], [`OutcomeVoid::catching`]) capture defects, and
//! they mark the captured payload as a [`Defect`] rather than pretending it
//! was declared.
//!
//! # Examples
//!
//! ```rust
//! use tryout::outcome::Outcome;
//!
//! fn read_port(raw: &str) -> Result<u16, std::num::ParseIntError> {
//!     raw.parse()
//! }
//!
//! let port: Outcome<u16, _> = Outcome::of(|| read_port("8080"));
//! let description: Result<String, String> = port.fold(
//!     |port| Ok(format!("listening on {port}")),
//!     |cause| Ok(format!("bad port: {cause}")),
//! );
//! assert_eq!(description.as_deref(), Ok("listening on 8080"));
//! ```

mod defect;
mod mode;
mod value;
mod void;

pub use defect::Defect;
pub use mode::{CaptureMode, CatchAll, Selective};
pub use value::{Outcome, OutcomeCatchAll};
pub use void::{OutcomeVoid, OutcomeVoidCatchAll};
