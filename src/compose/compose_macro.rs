//! The `compose!` macro: right-to-left composition of stages.

/// Composes stages from right to left into a single stage.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`, so
/// `compose!(h, g, f)(x) == pipe!(x, f, g, h)`.
///
/// Every function is applied through
/// [`Pipeable`](crate::compose::Pipeable). The composed stage is `FnOnce`;
/// it is `Fn` as well when every component is `Copy` (function items,
/// non-capturing closures, and closures capturing only `Copy` values).
///
/// # Examples
///
/// ```
/// use pipewise::{compose, pipe};
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
/// assert_eq!(compose!(add_one, double)(5), pipe!(5, double, add_one));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner = $crate::compose!($($remaining_functions),+);
        move |input| {
            $crate::compose::Pipeable::pipe_into(
                outer,
                $crate::compose::Pipeable::pipe_into(inner, input),
            )
        }
    }};
}
