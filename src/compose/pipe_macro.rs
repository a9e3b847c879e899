//! The `pipe!` macro for left-to-right application.
//!
//! This is the macro form of the pipe relation; see [`Pipeable`](super::Pipeable).

/// Pipes a value through a series of stages from left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`, and equals
/// `(piped(x) >> f >> g >> h).into_inner()`.
///
/// Each stage is applied through [`Pipeable`](crate::compose::Pipeable), so
/// closures, function items, stages built by `#[pipeable]` and runtime
/// [`Curried`](crate::compose::Curried) callables all fit.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// ```
/// use pipewise::pipe;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// assert_eq!(pipe!(12345, to_string, get_length), 5);
/// ```
///
/// ```
/// use pipewise::pipe;
/// use pipewise::stages::sequence;
///
/// let odd_squares = pipe!(
///     vec![1, 2, 3, 4, 5],
///     sequence::filter(|x: &i32| x % 2 == 1),
///     sequence::map(|x: i32| x * x),
/// );
/// assert_eq!(odd_squares, vec![1, 9, 25]);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $stage:expr $(,)?) => {
        $crate::compose::Pipeable::pipe_into($stage, $value)
    };

    ($value:expr, $stage:expr, $($remaining_stages:expr),+ $(,)?) => {
        $crate::pipe!($crate::compose::Pipeable::pipe_into($stage, $value), $($remaining_stages),+)
    };
}
