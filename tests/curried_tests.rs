//! Integration tests for runtime-arity curried callables.

#![cfg(feature = "compose")]

use pipewise::compose::{Application, Curried, CurryError, piped};
use rstest::{fixture, rstest};
use tracing_subscriber::EnvFilter;

#[fixture]
fn power() -> Curried<u64, u64> {
    Curried::new("power", 2, |arguments: Vec<u64>| {
        arguments[0].pow(u32::try_from(arguments[1]).unwrap_or(u32::MAX))
    })
}

/// `log(value, base = 10)`, rounded down.
#[fixture]
fn log() -> Curried<u32, u32> {
    Curried::with_optional("log", 1, 1, |arguments: Vec<u32>| {
        let base = arguments.get(1).copied().unwrap_or(10);
        arguments[0].ilog(base)
    })
}

fn with_debug_logging<R>(body: impl FnOnce() -> R) -> R {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("pipewise=debug"))
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, body)
}

// =============================================================================
// Completion
// =============================================================================

#[rstest]
fn test_partial_then_complete_equals_direct_call(power: Curried<u64, u64>) {
    let partial = power.apply([2]).unwrap();
    assert!(!partial.is_complete());

    let complete = partial.partial().unwrap().apply([10]).unwrap();
    assert_eq!(complete, Application::Complete(1024));
}

#[rstest]
fn test_all_arguments_at_once(power: Curried<u64, u64>) {
    assert_eq!(power.call([3, 4]), Ok(81));
}

#[rstest]
fn test_partial_applications_branch_independently(power: Curried<u64, u64>) {
    let base_two = power.apply([2]).unwrap().partial().unwrap();
    let base_three = power.apply([3]).unwrap().partial().unwrap();

    assert_eq!(base_two.call([5]), Ok(32));
    assert_eq!(base_three.call([2]), Ok(9));
    assert_eq!(base_two.bound(), &[2]);
    assert_eq!(power.bound(), &[] as &[u64]);
}

#[rstest]
fn test_piping_one_argument_at_a_time(power: Curried<u64, u64>) {
    let after_base = (piped(5) >> power).into_inner().unwrap().partial().unwrap();
    assert_eq!(after_base.remaining(), 1);

    let result = (piped(3) >> after_base).into_inner().unwrap();
    assert_eq!(result.complete(), Some(125));
}

#[rstest]
fn test_empty_application_keeps_callable_partial(power: Curried<u64, u64>) {
    let unchanged = power.apply(std::iter::empty()).unwrap().partial().unwrap();
    assert_eq!(unchanged, power);
}

// =============================================================================
// Optional parameters
// =============================================================================

#[rstest]
#[case(vec![1000], 3)]
#[case(vec![1000, 10], 3)]
#[case(vec![64, 2], 6)]
#[case(vec![80, 3], 3)]
fn test_optional_parameter_is_defaulted(
    log: Curried<u32, u32>,
    #[case] arguments: Vec<u32>,
    #[case] expected: u32,
) {
    assert_eq!(log.call(arguments), Ok(expected));
}

#[rstest]
fn test_accessors(log: Curried<u32, u32>) {
    assert_eq!(log.name(), "log");
    assert_eq!(log.required(), 1);
    assert_eq!(log.optional(), 1);
    assert_eq!(log.maximum(), 2);
    assert_eq!(log.remaining(), 1);
}

// =============================================================================
// Arity violations
// =============================================================================

#[rstest]
fn test_too_many_arguments_is_an_error(power: Curried<u64, u64>) {
    let error = with_debug_logging(|| power.apply([2, 3, 4])).unwrap_err();

    assert_eq!(
        error,
        CurryError::TooManyArguments {
            name: "power",
            maximum: 2,
            supplied: 3,
        }
    );
    assert_eq!(error.name(), "power");
}

#[rstest]
fn test_too_many_arguments_across_applications(power: Curried<u64, u64>) {
    let partial = power.apply([2]).unwrap().partial().unwrap();
    let error = partial.apply([3, 4]).unwrap_err();
    assert!(matches!(error, CurryError::TooManyArguments { supplied: 3, .. }));
}

#[rstest]
fn test_too_many_arguments_beyond_optional(log: Curried<u32, u32>) {
    assert!(log.apply([100, 10, 1]).is_err());
}

#[rstest]
fn test_call_without_required_arguments(power: Curried<u64, u64>) {
    let error = with_debug_logging(|| power.call([7])).unwrap_err();

    assert_eq!(
        error.to_string(),
        "power: requires 2 argument(s) but only 1 were supplied"
    );
}

#[rstest]
fn test_error_is_std_error(power: Curried<u64, u64>) {
    let error: Box<dyn std::error::Error> = Box::new(power.apply([1, 2, 3]).unwrap_err());
    assert_eq!(
        error.to_string(),
        "power: takes at most 2 argument(s) but 3 were supplied"
    );
}

// =============================================================================
// Wrapped failures pass through untouched
// =============================================================================

#[rstest]
fn test_wrapped_error_is_not_translated() {
    let divide = Curried::new("divide", 2, |arguments: Vec<i32>| {
        arguments[0]
            .checked_div(arguments[1])
            .ok_or("division by zero")
    });

    assert_eq!(divide.call([9, 3]), Ok(Ok(3)));
    assert_eq!(divide.call([9, 0]), Ok(Err("division by zero")));
}
