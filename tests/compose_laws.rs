#![cfg(feature = "compose")]
//! Property-based tests for the pipe and currying laws.
//!
//! ## Pipe Laws
//! - **Application**: `piped(x) >> f == piped(f(x))`
//! - **Chaining**: `piped(x) >> f >> g == piped(g(f(x)))`
//! - **Forms Agree**: `(piped(x) >> f >> g).into_inner() == x.pipe(f).pipe(g) == pipe!(x, f, g)`
//! - **Consistency with Compose**: `pipe!(x, f, g) == compose!(g, f)(x)`
//!
//! ## Curry Laws
//! - **Equivalence**: `curry!(f, n)(a1)...(an) == f(a1, ..., an)`
//! - **Runtime Equivalence**: `apply([a1..a(n-1)])` then `apply([an])` equals `f(a1..an)`
//! - **Overflow**: a 2-ary `Curried` applied to 3 arguments is always `TooManyArguments`
//!
//! ## Flip Laws
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`
//! - **Double Flip Identity**: `flip(flip(f)) == f`

use pipewise::compose::{Application, Curried, CurryError, Pipe, flip, identity, piped};
use pipewise::{compose, curry, pipe, pipeable};
use proptest::prelude::*;

fn weighted(a: i32, b: i32, c: i32) -> i32 {
    a.wrapping_mul(3).wrapping_add(b.wrapping_mul(2)).wrapping_add(c)
}

#[pipeable]
fn weighted_stage(a: i32, b: i32, c: i32) -> i32 {
    weighted(a, b, c)
}

// =============================================================================
// Pipe Laws
// =============================================================================

proptest! {
    /// Application Law: piped(x) >> f == piped(f(x))
    #[test]
    fn prop_pipe_application(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(7);

        prop_assert_eq!(piped(x) >> function, piped(function(x)));
    }

    /// Chaining Law: piped(x) >> f >> g == piped(g(f(x)))
    #[test]
    fn prop_pipe_chaining(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(11);
        let function2 = |n: i32| n.wrapping_mul(-3);

        prop_assert_eq!(piped(x) >> function1 >> function2, piped(function2(function1(x))));
    }

    /// Identity stage leaves the value unchanged
    #[test]
    fn prop_pipe_identity(text in ".*") {
        prop_assert_eq!((piped(text.clone()) >> identity).into_inner(), text);
    }

    /// The operator, method and macro forms agree
    #[test]
    fn prop_pipe_forms_agree(x in any::<i64>()) {
        let function1 = |n: i64| n.wrapping_sub(5);
        let function2 = |n: i64| n.to_string();

        let operator = (piped(x) >> function1 >> function2).into_inner();
        let method = x.pipe(function1).pipe(function2);
        let macro_form = pipe!(x, function1, function2);

        prop_assert_eq!(&operator, &method);
        prop_assert_eq!(&method, &macro_form);
    }

    /// Consistency Law: pipe!(x, f, g) == compose!(g, f)(x)
    #[test]
    fn prop_pipe_compose_consistency(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        prop_assert_eq!(pipe!(x, function1, function2), compose!(function2, function1)(x));
    }
}

// =============================================================================
// Curry Laws
// =============================================================================

proptest! {
    /// Equivalence Law: curry!(f, 3)(a)(b)(c) == f(a, b, c)
    #[test]
    fn prop_curry_equivalence(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let curried = curry!(weighted, 3);

        prop_assert_eq!(curried(a)(b)(c), weighted(a, b, c));
    }

    /// #[pipeable] stages agree with the direct call
    #[test]
    fn prop_pipeable_equivalence(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        prop_assert_eq!(pipe!(c, weighted_stage(a, b)), weighted(a, b, c));
    }

    /// Runtime Equivalence: apply(prefix) then apply(last) == f(all)
    #[test]
    fn prop_curried_split_application(
        a in any::<i32>(),
        b in any::<i32>(),
        c in any::<i32>(),
        split in 0_usize..3,
    ) {
        let curried = Curried::new("weighted", 3, |arguments: Vec<i32>| {
            weighted(arguments[0], arguments[1], arguments[2])
        });
        let arguments = [a, b, c];
        let (first, second) = arguments.split_at(split);

        let partial = curried.apply(first.iter().copied()).unwrap().partial().unwrap();
        let complete = partial.apply(second.iter().copied()).unwrap();

        prop_assert_eq!(complete, Application::Complete(weighted(a, b, c)));
    }

    /// Overflow Law: 3 arguments to a 2-ary callable always fail, whether
    /// supplied at once or after a partial application
    #[test]
    fn prop_curried_overflow(arguments in prop::array::uniform3(any::<i32>()), split in 0_usize..=1) {
        let curried = Curried::new("pair", 2, |values: Vec<i32>| values[0].wrapping_add(values[1]));
        let (first, second) = arguments.split_at(split);

        let at_once = curried.apply(arguments);
        let partial = curried.apply(first.iter().copied()).unwrap().partial().unwrap();
        let in_two_steps = partial.apply(second.iter().copied());

        let expected = CurryError::TooManyArguments { name: "pair", maximum: 2, supplied: 3 };
        prop_assert_eq!(at_once.unwrap_err(), expected.clone());
        prop_assert_eq!(in_two_steps.unwrap_err(), expected);
    }
}

// =============================================================================
// Flip Laws
// =============================================================================

proptest! {
    /// Flip Definition: flip(f)(a, b) == f(b, a)
    #[test]
    fn prop_flip_definition(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |x: i32, y: i32| x.wrapping_sub(y);

        prop_assert_eq!(flip(subtract)(a, b), subtract(b, a));
    }

    /// Double Flip Identity: flip(flip(f)) == f
    #[test]
    fn prop_flip_double_identity(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |x: i32, y: i32| x.wrapping_sub(y);

        prop_assert_eq!(flip(flip(subtract))(a, b), subtract(a, b));
    }
}
