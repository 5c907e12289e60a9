//! # tryout
//!
//! A functional error-handling library for Rust providing inspectable
//! fallible outcomes and checked lazy pipelines.
//!
//! ## Overview
//!
//! This library gives callers an explicit, inspectable alternative to
//! implicit failure propagation:
//!
//! - **Outcomes**: [`outcome::Outcome`] and [`outcome::OutcomeVoid`] hold
//!   either a computed result or a captured failure cause, with a full
//!   combinator algebra for composing fallible computations without losing
//!   the cause's concrete type.
//! - **Capture modes**: selective outcomes capture only declared failures
//!   and let defects (panics) propagate; catch-all outcomes capture defects
//!   too. The two families are distinct types and never compare equal.
//! - **Checked pipelines**: [`pipeline::Pipeline`] decorates a lazy element
//!   pipeline so that every intermediate and terminal operation accepts
//!   callbacks that declare a failure type, surfacing the first failure from
//!   the terminal operation as a typed `Err`.
//! - **Collections**: an ordered-mapping builder that evaluates a fallible
//!   function over keys in order, short-circuiting on the first failure.
//!
//! ## Feature Flags
//!
//! - `outcome`: the outcome types and capture modes
//! - `pipeline`: the checked lazy pipeline
//! - `collections`: the ordered-mapping builder
//! - `fxhash` / `ahash`: faster hashing for the pipeline's `distinct` stage
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use tryout::outcome::Outcome;
//!
//! fn parse(input: &str) -> Result<i32, std::num::ParseIntError> {
//!     input.trim().parse()
//! }
//!
//! let outcome: Outcome<i32, _> = Outcome::of(|| parse(" 42 "));
//! assert_eq!(outcome.into_result(), Ok(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use tryout::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "outcome")]
    pub use crate::outcome::*;

    #[cfg(feature = "pipeline")]
    pub use crate::pipeline::*;

    #[cfg(feature = "collections")]
    pub use crate::collections::*;
}

#[cfg(feature = "outcome")]
pub mod outcome;

#[cfg(feature = "pipeline")]
pub mod pipeline;

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        assert!(true);
    }
}
