#![cfg(feature = "control")]
//! Unit tests for Either<L, R>.
//!
//! Covers construction, branch shaping with `.left`/`.right`, extraction and
//! the divide scenario where exactly one callback must run.

use functors::{Either, left, right};
use rstest::rstest;
use std::cell::{Cell, RefCell};

// =============================================================================
// Construction and Predicates
// =============================================================================

#[rstest]
#[case(0)]
#[case(-7)]
#[case(i32::MAX)]
fn left_predicates(#[case] value: i32) {
    let either: Either<i32, String> = left(value);
    assert!(either.is_left());
    assert!(!either.is_right());
}

#[rstest]
#[case("")]
#[case("value")]
fn right_predicates(#[case] value: &str) {
    let either: Either<i32, &str> = right(value);
    assert!(either.is_right());
    assert!(!either.is_left());
}

#[rstest]
fn named_constructors_match_factories() {
    assert_eq!(Either::<i32, ()>::create_left(1), left(1));
    assert_eq!(Either::<(), i32>::create_right(2), right(2));
}

#[rstest]
fn unwrap_returns_value_for_either_case() {
    let l: Either<&str, &str> = left("l");
    let r: Either<&str, &str> = right("r");
    assert_eq!(l.unwrap(), "l");
    assert_eq!(r.unwrap(), "r");
}

// =============================================================================
// Branch Shaping
// =============================================================================

#[rstest]
fn left_mapper_called_with_value() {
    let seen = RefCell::new(None);
    let either: Either<&str, i32> = left("test");
    let _ = either.left(|value| seen.replace(Some(value)));
    assert_eq!(*seen.borrow(), Some("test"));
}

#[rstest]
fn left_mapper_not_called_for_right() {
    let calls = Cell::new(0);
    let either: Either<&str, &str> = right("test");
    let result = either.left(|value| {
        calls.set(calls.get() + 1);
        value.len()
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(result, Either::Right("test"));
}

#[rstest]
fn right_mapper_called_with_value() {
    let seen = RefCell::new(None);
    let either: Either<i32, &str> = right("test");
    let _ = either.right(|value| seen.replace(Some(value)));
    assert_eq!(*seen.borrow(), Some("test"));
}

#[rstest]
fn right_mapper_not_called_for_left() {
    let calls = Cell::new(0);
    let either: Either<&str, i32> = left("test");
    let result = either.right(|value| {
        calls.set(calls.get() + 1);
        value * 2
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(result.unwrap_left_for_test(), "test");
}

#[rstest]
fn chained_shaping_touches_only_active_branch() {
    let either: Either<String, u32> = right(201);
    let shaped = either
        .right(|status| status + 1)
        .right(|status| format!("status {status}"))
        .left(|error| format!("error {error}"))
        .left(|body| body.to_uppercase());
    assert_eq!(shaped, Either::Right("status 202".to_string()));
}

// =============================================================================
// Other Operations
// =============================================================================

#[rstest]
fn fold_eliminates_both_cases() {
    let l: Either<i32, String> = left(4);
    let r: Either<i32, String> = right("four".to_string());
    assert_eq!(l.fold(|n| n as usize, |s| s.len()), 4);
    assert_eq!(r.fold(|n| n as usize, |s| s.len()), 4);
}

#[rstest]
fn swap_exchanges_cases() {
    let either: Either<i32, &str> = left(1);
    assert_eq!(either.swap(), Either::Right(1));
}

#[rstest]
fn references_and_options() {
    let either: Either<i32, String> = right("hi".to_string());
    assert_eq!(either.right_ref(), Some(&"hi".to_string()));
    assert_eq!(either.left_ref(), None);
    assert_eq!(either.as_ref().map_right(|s| s.len()), Either::Right(2));
    assert_eq!(either.clone().into_left(), None);
    assert_eq!(either.into_right(), Some("hi".to_string()));
}

#[rstest]
fn result_conversions() {
    let from_err: Either<&str, i32> = Err::<i32, &str>("bad").into();
    assert_eq!(from_err, Either::Left("bad"));

    let back: Result<i32, &str> = right::<&str, i32>(3).into();
    assert_eq!(back, Ok(3));
}

#[rstest]
fn debug_format() {
    assert_eq!(format!("{:?}", left::<i32, i32>(1)), "Left(1)");
    assert_eq!(format!("{:?}", right::<i32, i32>(2)), "Right(2)");
}

// =============================================================================
// Divide Scenario
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
enum DivisionError {
    NumeratorNotANumber,
    DenominatorNotANumber,
    DivisionByZero,
}

fn divide(numerator: f64, denominator: f64) -> Either<DivisionError, f64> {
    if numerator.is_nan() {
        return left(DivisionError::NumeratorNotANumber);
    }
    if denominator.is_nan() {
        return left(DivisionError::DenominatorNotANumber);
    }
    if denominator == 0.0 {
        return left(DivisionError::DivisionByZero);
    }
    right(numerator / denominator)
}

#[derive(Debug, PartialEq)]
enum Outcome {
    Success(f64),
    Failure(DivisionError),
}

fn route(numerator: f64, denominator: f64) -> (Vec<Outcome>, usize) {
    let outcomes = RefCell::new(Vec::new());
    let calls = Cell::new(0);
    let _ = divide(numerator, denominator)
        .right(|result| {
            calls.set(calls.get() + 1);
            outcomes.borrow_mut().push(Outcome::Success(result));
        })
        .left(|error| {
            calls.set(calls.get() + 1);
            outcomes.borrow_mut().push(Outcome::Failure(error));
        });
    (outcomes.into_inner(), calls.get())
}

#[rstest]
#[case(10.0, 2.0, Outcome::Success(5.0))]
#[case(10.0, 0.0, Outcome::Failure(DivisionError::DivisionByZero))]
#[case(f64::NAN, 5.0, Outcome::Failure(DivisionError::NumeratorNotANumber))]
#[case(1.0, f64::NAN, Outcome::Failure(DivisionError::DenominatorNotANumber))]
fn divide_routes_to_exactly_one_callback(
    #[case] numerator: f64,
    #[case] denominator: f64,
    #[case] expected: Outcome,
) {
    let (outcomes, calls) = route(numerator, denominator);
    assert_eq!(calls, 1);
    assert_eq!(outcomes, vec![expected]);
}

// Helper kept local to the tests: extracts a left value known to be present.
trait UnwrapLeftForTest<L> {
    fn unwrap_left_for_test(self) -> L;
}

impl<L, R> UnwrapLeftForTest<L> for Either<L, R> {
    fn unwrap_left_for_test(self) -> L {
        match self.into_left() {
            Some(value) => value,
            None => panic!("expected a Left value"),
        }
    }
}
