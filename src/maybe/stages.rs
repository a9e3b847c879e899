//! Pipe stages over [`Maybe`].
//!
//! Binary stages are written as ordinary two-parameter functions and
//! turned into stage constructors by `#[pipeable]`: `map(f)` returns a
//! stage that awaits the `Maybe` being piped in. The stages are `Fn`, so
//! one stage can be reused for every element of a sequence.

use pipewise_derive::pipeable;

use super::Maybe;

/// Lifts an `Option` into `Maybe`: `Some(v)` becomes `Present(v)`, `None`
/// becomes `Absent`.
#[inline]
pub fn wrap<T>(value: Option<T>) -> Maybe<T> {
    Maybe::from(value)
}

/// Lowers a `Maybe` back into an `Option`; the inverse of [`wrap`].
#[inline]
pub fn unwrap<T>(value: Maybe<T>) -> Option<T> {
    value.into_option()
}

/// Applies `function` to a present payload; absence passes through.
///
/// # Examples
///
/// ```rust
/// use pipewise::compose::piped;
/// use pipewise::maybe::{self, Maybe};
///
/// let tripled = piped(Maybe::Present(4)) >> maybe::map(|value: i32| value * 3);
/// assert_eq!(tripled.into_inner(), Maybe::Present(12));
/// ```
#[pipeable]
pub fn map<T, U, F>(function: F, value: Maybe<T>) -> Maybe<U>
where
    F: Fn(T) -> U,
{
    value.map(&function)
}

/// Keeps a present payload only if `predicate` holds for it.
#[pipeable]
pub fn just_if<T, P>(predicate: P, value: Maybe<T>) -> Maybe<T>
where
    P: Fn(&T) -> bool,
{
    value.filter(&predicate)
}

pub use self::just_if as filter;

/// Chains a stage that may itself produce `Absent`.
#[pipeable]
pub fn and_then<T, U, F>(function: F, value: Maybe<T>) -> Maybe<U>
where
    F: Fn(T) -> Maybe<U>,
{
    value.and_then(&function)
}

/// Applies a fallible `function`; any failure, error or panic, becomes
/// `Absent`. See [`Maybe::try_map`].
///
/// # Examples
///
/// ```rust
/// use pipewise::compose::piped;
/// use pipewise::maybe::{self, Maybe};
///
/// let parse = maybe::try_map(|text: &str| text.parse::<i32>());
/// assert_eq!((piped(Maybe::Present("12")) >> &parse).into_inner(), Maybe::Present(12));
/// assert_eq!((piped(Maybe::Present("twelve")) >> &parse).into_inner(), Maybe::Absent);
/// ```
#[pipeable]
pub fn try_map<T, U, E, F>(function: F, value: Maybe<T>) -> Maybe<U>
where
    F: Fn(T) -> Result<U, E>,
{
    value.try_map(&function)
}

/// Returns the payload, or `fallback` when absent.
#[pipeable]
pub fn default<T>(fallback: T, value: Maybe<T>) -> T
where
    T: Clone,
{
    value.unwrap_or_else(|| fallback.clone())
}

/// Returns `true` for a present value.
#[inline]
pub fn is_present<T>(value: Maybe<T>) -> bool {
    value.is_present()
}

/// Returns `true` for an absent value.
#[inline]
pub fn is_absent<T>(value: Maybe<T>) -> bool {
    value.is_absent()
}
