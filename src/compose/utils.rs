//! Small combinators that keep pipelines point-free.
//!
//! - [`identity`]: a stage that passes its input through
//! - [`constant`]: a stage that ignores its input
//! - [`flip`]: swaps the parameters of a binary function, so the argument
//!   that should be piped in ends up in the last position

/// Returns the value unchanged.
///
/// Useful as a no-op stage, and as the unit of [`compose!`](crate::compose!).
///
/// # Examples
///
/// ```
/// use pipewise::compose::{identity, piped};
///
/// assert_eq!((piped(42) >> identity).into_inner(), 42);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a stage that always returns `value`, ignoring its input.
///
/// # Examples
///
/// ```
/// use pipewise::compose::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the parameters of a binary function.
///
/// Pipelines supply the *last* argument, so `flip` turns a function whose
/// subject comes first into one that can be partially applied and piped.
///
/// `flip(f)(b, a) == f(a, b)` and `flip(flip(f))` behaves like `f`.
///
/// # Examples
///
/// ```
/// use pipewise::compose::flip;
///
/// fn starts_with(text: &str, prefix: &str) -> bool {
///     text.starts_with(prefix)
/// }
///
/// let has_prefix = flip(starts_with);
/// assert!(has_prefix("pipe", "pipewise"));
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
