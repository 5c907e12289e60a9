//! Unit tests for the value-bearing Outcome type.
//!
//! An Outcome is either a success holding a result or a failure holding a
//! cause, with a combinator algebra that never silently drops a failure
//! raised by a supplied closure.

#![cfg(feature = "outcome")]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rstest::rstest;
use tryout::outcome::{CatchAll, Outcome, Selective};

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Factories and State Checking
// =============================================================================

#[rstest]
fn success_is_success() {
    let outcome: Outcome<i32, String> = Outcome::success(42);
    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
}

#[rstest]
fn failure_is_failure() {
    let outcome: Outcome<i32, String> = Outcome::failure("broken".to_string());
    assert!(outcome.is_failure());
    assert!(!outcome.is_success());
}

#[rstest]
fn of_captures_a_returned_value() {
    let outcome: Outcome<i32, String> = Outcome::of(|| Ok(7));
    assert_eq!(outcome, Outcome::success(7));
}

#[rstest]
fn of_captures_a_declared_failure() {
    let outcome: Outcome<i32, String> = Outcome::of(|| Err("declared".to_string()));
    assert_eq!(outcome, Outcome::failure("declared".to_string()));
}

#[rstest]
fn success_ref_exposes_the_result() {
    let outcome: Outcome<i32, String> = Outcome::success(42);
    assert_eq!(outcome.success_ref(), Some(&42));
    assert_eq!(outcome.cause_ref(), None);
}

#[rstest]
fn cause_ref_exposes_the_cause() {
    let outcome: Outcome<i32, String> = Outcome::failure("broken".to_string());
    assert_eq!(outcome.success_ref(), None);
    assert_eq!(outcome.cause_ref(), Some(&"broken".to_string()));
}

// =============================================================================
// Fold
// =============================================================================

#[rstest]
fn fold_applies_only_the_success_transformation() {
    let outcome: Outcome<i32, String> = Outcome::success(2);
    let folded: Result<String, String> = outcome.fold(
        |value| Ok(value.to_string()),
        |_cause| unreachable!("failure transformation must not run"),
    );
    assert_eq!(folded, Ok("2".to_string()));
}

#[rstest]
fn fold_applies_only_the_failure_transformation() {
    let outcome: Outcome<i32, String> = Outcome::failure("cause".to_string());
    let folded: Result<String, String> = outcome.fold(
        |_value| unreachable!("success transformation must not run"),
        |cause| Ok(format!("saw {cause}")),
    );
    assert_eq!(folded, Ok("saw cause".to_string()));
}

#[rstest]
fn fold_propagates_a_transformation_failure() {
    let outcome: Outcome<i32, String> = Outcome::success(2);
    let folded: Result<String, String> = outcome.fold(
        |_value| Err("transform failed".to_string()),
        |cause| Ok(cause),
    );
    assert_eq!(folded, Err("transform failed".to_string()));
}

// =============================================================================
// Recover and Consume
// =============================================================================

#[rstest]
fn recover_returns_the_result_without_invoking_the_transformation() {
    let outcome: Outcome<i32, String> = Outcome::success(42);
    let recovered: Result<i32, String> =
        outcome.recover(|_cause| unreachable!("transformation must not run"));
    assert_eq!(recovered, Ok(42));
}

#[rstest]
fn recover_transforms_the_cause_into_a_result() {
    let outcome: Outcome<i32, String> = Outcome::failure("nope".to_string());
    let recovered: Result<i32, String> = outcome.recover(|cause| Ok(cause.len() as i32));
    assert_eq!(recovered, Ok(4));
}

#[rstest]
fn consume_cause_skips_the_consumer_on_success() {
    let outcome: Outcome<i32, String> = Outcome::success(42);
    let consumed: Result<Option<i32>, String> =
        outcome.consume_cause(|_cause| unreachable!("consumer must not run"));
    assert_eq!(consumed, Ok(Some(42)));
}

#[rstest]
fn consume_cause_feeds_the_cause_to_the_consumer() {
    let outcome: Outcome<i32, String> = Outcome::failure("broken".to_string());
    let mut seen = None;
    let consumed: Result<Option<i32>, String> = outcome.consume_cause(|cause| {
        seen = Some(cause);
        Ok(())
    });
    assert_eq!(consumed, Ok(None));
    assert_eq!(seen.as_deref(), Some("broken"));
}

#[rstest]
fn consume_cause_propagates_a_consumer_failure() {
    let outcome: Outcome<i32, String> = Outcome::failure("broken".to_string());
    let consumed: Result<Option<i32>, String> =
        outcome.consume_cause(|_cause| Err("consumer failed".to_string()));
    assert_eq!(consumed, Err("consumer failed".to_string()));
}

// =============================================================================
// Surfacing as Result
// =============================================================================

#[rstest]
fn into_result_surfaces_the_result() {
    let outcome: Outcome<i32, String> = Outcome::success(42);
    assert_eq!(outcome.into_result(), Ok(42));
}

#[rstest]
fn into_result_surfaces_exactly_the_contained_cause() {
    let outcome: Outcome<i32, String> = Outcome::failure("the cause".to_string());
    assert_eq!(outcome.into_result(), Err("the cause".to_string()));
}

#[rstest]
fn into_result_mapped_transforms_only_the_cause() {
    let succeeded: Outcome<i32, String> = Outcome::success(42);
    assert_eq!(succeeded.into_result_mapped(|cause| cause.len()), Ok(42));

    let failed: Outcome<i32, String> = Outcome::failure("raw".to_string());
    assert_eq!(failed.into_result_mapped(|cause| cause.len()), Err(3));
}

// =============================================================================
// Success Chaining
// =============================================================================

#[rstest]
fn and_run_keeps_the_success_when_the_action_completes() {
    let outcome: Outcome<i32, String> = Outcome::success(1);
    let ran = outcome.and_run(|| Ok(()));
    assert_eq!(ran, Outcome::success(1));
}

#[rstest]
fn and_run_captures_the_action_failure() {
    let outcome: Outcome<i32, String> = Outcome::success(1);
    let ran = outcome.and_run(|| Err("action failed".to_string()));
    assert_eq!(ran, Outcome::failure("action failed".to_string()));
}

#[rstest]
fn and_run_skips_the_action_on_failure() {
    let outcome: Outcome<i32, String> = Outcome::failure("already down".to_string());
    let ran = outcome.and_run(|| unreachable!("action must not run"));
    assert_eq!(ran, Outcome::failure("already down".to_string()));
}

#[rstest]
fn and_consume_observes_the_result() {
    let outcome: Outcome<i32, String> = Outcome::success(41);
    let mut observed = None;
    let consumed = outcome.and_consume(|value| {
        observed = Some(*value);
        Ok(())
    });
    assert_eq!(consumed, Outcome::success(41));
    assert_eq!(observed, Some(41));
}

#[rstest]
fn and_consume_captures_the_consumer_failure() {
    let outcome: Outcome<i32, String> = Outcome::success(41);
    let consumed = outcome.and_consume(|_value| Err("rejected".to_string()));
    assert_eq!(consumed, Outcome::failure("rejected".to_string()));
}

// =============================================================================
// And: Merging Two Outcomes
// =============================================================================

#[rstest]
fn and_merges_two_successes() {
    let left: Outcome<i32, String> = Outcome::success(2);
    let right: Outcome<i32, String> = Outcome::success(3);
    let merged = left.and(right, |first, second| first * second);
    assert_eq!(merged, Outcome::success(6));
}

#[rstest]
fn and_is_left_biased_and_never_invokes_the_merger() {
    let left: Outcome<i32, String> = Outcome::failure("first cause".to_string());
    let right: Outcome<i32, String> = Outcome::success(3);
    let merged: Outcome<i32, String> =
        left.and(right, |_first, _second| unreachable!("merger must not run"));
    assert_eq!(merged, Outcome::failure("first cause".to_string()));
}

#[rstest]
fn and_takes_the_other_cause_when_only_it_failed() {
    let left: Outcome<i32, String> = Outcome::success(2);
    let right: Outcome<i32, String> = Outcome::failure("second cause".to_string());
    let merged = left.and(right, |first, second| first * second);
    assert_eq!(merged, Outcome::failure("second cause".to_string()));
}

// =============================================================================
// Flat Map
// =============================================================================

#[rstest]
fn flat_map_applies_the_mapper_to_a_success() {
    let outcome: Outcome<i32, String> = Outcome::success(4);
    let mapped = outcome.flat_map(|value| Ok(value + 1));
    assert_eq!(mapped, Outcome::success(5));
}

#[rstest]
fn flat_map_captures_the_mapper_failure() {
    let outcome: Outcome<i32, String> = Outcome::success(4);
    let mapped: Outcome<i32, String> = outcome.flat_map(|_value| Err("mapper failed".to_string()));
    assert_eq!(mapped, Outcome::failure("mapper failed".to_string()));
}

#[rstest]
fn flat_map_recasts_an_existing_failure() {
    let outcome: Outcome<i32, String> = Outcome::failure("down".to_string());
    let mapped: Outcome<String, String> =
        outcome.flat_map(|_value| unreachable!("mapper must not run"));
    assert_eq!(mapped, Outcome::failure("down".to_string()));
}

// =============================================================================
// Or: Recovery with Cause Merging
// =============================================================================

#[rstest]
fn or_keeps_the_success_without_trying_the_alternative() {
    let outcome: Outcome<i32, String> = Outcome::success(42);
    let kept: Outcome<i32, String> = outcome.or(
        || unreachable!("alternative must not run"),
        |_first, _second: String| unreachable!("merger must not run"),
    );
    assert_eq!(kept, Outcome::success(42));
}

#[rstest]
fn or_returns_the_alternative_success() {
    let outcome: Outcome<i32, String> = Outcome::failure("first".to_string());
    let recovered: Outcome<i32, String> = outcome.or(
        || Ok(7),
        |_first, _second: String| unreachable!("merger must not run"),
    );
    assert_eq!(recovered, Outcome::success(7));
}

#[rstest]
fn or_merges_both_causes_when_the_alternative_fails_too() {
    let outcome: Outcome<i32, String> = Outcome::failure("first".to_string());
    let merged = outcome.or(
        || Err("second".to_string()),
        |first, second| format!("{first}+{second}"),
    );
    assert_eq!(merged, Outcome::failure("first+second".to_string()));
}

// =============================================================================
// Equality, Hash and Capture Modes
// =============================================================================

#[rstest]
fn equal_successes_from_the_same_family_are_equal() {
    let left: Outcome<i32, String> = Outcome::success(42);
    let right: Outcome<i32, String> = Outcome::success(42);
    assert_eq!(left, right);
    assert_eq!(hash_of(&left), hash_of(&right));
}

#[rstest]
fn a_success_never_equals_a_failure() {
    let success: Outcome<i32, i32> = Outcome::success(42);
    let failure: Outcome<i32, i32> = Outcome::failure(42);
    assert!(success != failure);
}

#[rstest]
fn families_are_separated_even_for_equal_values() {
    // Comparing across families is rejected at compile time; the families
    // stay observably apart through hashing as well.
    let selective: Outcome<i32, String, Selective> = Outcome::success(42);
    let catch_all: Outcome<i32, String, CatchAll> = Outcome::success(42);
    assert_ne!(hash_of(&selective), hash_of(&catch_all));

    let selective_failure: Outcome<i32, String, Selective> =
        Outcome::failure("cause".to_string());
    let catch_all_failure: Outcome<i32, String, CatchAll> = Outcome::failure("cause".to_string());
    assert_ne!(hash_of(&selective_failure), hash_of(&catch_all_failure));
}

#[rstest]
fn hash_distinguishes_the_branches() {
    let success: Outcome<i32, i32> = Outcome::success(42);
    let failure: Outcome<i32, i32> = Outcome::failure(42);
    assert_ne!(hash_of(&success), hash_of(&failure));
}

// =============================================================================
// Conversions, Clone and Debug
// =============================================================================

#[rstest]
fn converts_to_and_from_result() {
    let outcome: Outcome<i32, String> = Outcome::from(Ok(42));
    assert_eq!(outcome, Outcome::success(42));

    let result: Result<i32, String> = Outcome::<i32, String>::failure("bad".to_string()).into();
    assert_eq!(result, Err("bad".to_string()));
}

#[rstest]
fn clone_preserves_state_and_family() {
    let outcome: Outcome<i32, String> = Outcome::failure("cause".to_string());
    let cloned = outcome.clone();
    assert_eq!(outcome, cloned);
}

#[rstest]
fn debug_shows_the_branch_and_payload() {
    let success: Outcome<i32, String> = Outcome::success(42);
    assert_eq!(format!("{success:?}"), "Success(42)");

    let failure: Outcome<i32, String> = Outcome::failure("cause".to_string());
    assert_eq!(format!("{failure:?}"), "Failure(\"cause\")");
}
