//! Checked lazy pipelines.
//!
//! This module provides [`Pipeline`], a decorator over a lazy element
//! engine that lets every intermediate and terminal operation accept
//! callbacks declaring a failure type. Stage callbacks return
//! `Result<_, X>`; the first declared failure ends evaluation and surfaces,
//! still typed as `X`, from the terminal operation.
//!
//! # Failure transport
//!
//! Internally the engine carries `Result<T, X>` items: a declared failure
//! raised by a stage callback becomes an `Err` item that flows through the
//! remaining stages untouched, and every terminal operation converts the
//! first `Err` item it meets into its own `Err` return. The failure is
//! typed end to end; a failure item can never escape a terminal operation
//! as a value. Defects (panics) are not transported and unwind through the
//! terminal operation unchanged.
//!
//! # Single use
//!
//! A pipeline owns its engine exclusively and is consumed by every
//! operation, so exactly one terminal operation can ever run; reuse is
//! rejected at compile time by move semantics.
//!
//! # Examples
//!
//! ```rust
//! use tryout::pipeline::Pipeline;
//!
//! fn checked_double(value: i32) -> Result<i32, String> {
//!     value.checked_mul(2).ok_or_else(|| format!("{value} overflows"))
//! }
//!
//! let doubled: Result<Vec<i32>, String> = Pipeline::from_values(vec![1, 2, 3])
//!     .map(checked_double)
//!     .to_list();
//! assert_eq!(doubled, Ok(vec![2, 4, 6]));
//! ```

mod checked;
mod stages;

pub use checked::Pipeline;
