//! The pipe relation: threading a value into a stage.
//!
//! A *stage* is anything implementing [`Pipeable`]: every `FnOnce(T) -> R`
//! is one, and so is a runtime [`Curried`](super::Curried) callable. The
//! relation has three surface forms that all mean the same thing:
//!
//! ```text
//! piped(x) >> f >> g      // operator form, left-associative
//! x.pipe(f).pipe(g)       // method form
//! pipe!(x, f, g)          // macro form
//! ```
//!
//! Each evaluates to `g(f(x))`. Piping into something that is not a stage
//! does not compile.
//!
//! ```compile_fail
//! use pipewise::compose::piped;
//!
//! let not_a_stage = 42;
//! let _ = piped(1) >> not_a_stage;
//! ```

use std::ops::Shr;

/// A value that can sit on the right-hand side of a pipe.
///
/// Implementors receive exactly one argument, the piped value, and
/// produce the next value of the pipeline.
///
/// # Examples
///
/// ```
/// use pipewise::compose::Pipeable;
///
/// let double = |value: i32| value * 2;
/// assert_eq!(double.pipe_into(21), 42);
/// ```
pub trait Pipeable<Input> {
    /// The value produced by this stage.
    type Output;

    /// Consumes the stage, supplying `input` as its final argument.
    fn pipe_into(self, input: Input) -> Self::Output;
}

impl<Input, Output, F> Pipeable<Input> for F
where
    F: FnOnce(Input) -> Output,
{
    type Output = Output;

    #[inline]
    fn pipe_into(self, input: Input) -> Output {
        self(input)
    }
}

/// A value travelling through a `>>` pipeline.
///
/// `Piped(x) >> stage` evaluates to `Piped(stage(x))`. Because `>>` is
/// left-associative, `piped(x) >> f >> g` is `Piped(g(f(x)))`.
///
/// # Examples
///
/// ```
/// use pipewise::compose::piped;
///
/// let length = (piped("pipeline") >> str::len >> |n: usize| n * 10).into_inner();
/// assert_eq!(length, 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Piped<T>(pub T);

impl<T> Piped<T> {
    /// Leaves the pipeline, returning the carried value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Borrows the carried value.
    #[inline]
    pub const fn as_inner(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Piped<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T, S> Shr<S> for Piped<T>
where
    S: Pipeable<T>,
{
    type Output = Piped<S::Output>;

    #[inline]
    fn shr(self, stage: S) -> Self::Output {
        Piped(stage.pipe_into(self.0))
    }
}

/// Starts a `>>` pipeline with `value`.
#[inline]
pub const fn piped<T>(value: T) -> Piped<T> {
    Piped(value)
}

/// Method form of the pipe relation, available on every sized value.
///
/// # Examples
///
/// ```
/// use pipewise::compose::Pipe;
///
/// let shout = "hello".pipe(str::to_uppercase).pipe(|text: String| text + "!");
/// assert_eq!(shout, "HELLO!");
/// ```
pub trait Pipe: Sized {
    /// Supplies `self` to `stage` and returns the stage's output.
    #[inline]
    fn pipe<S>(self, stage: S) -> S::Output
    where
        S: Pipeable<Self>,
    {
        stage.pipe_into(self)
    }
}

impl<T> Pipe for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn double(value: i32) -> i32 {
        value * 2
    }

    #[rstest]
    fn test_operator_applies_stage() {
        assert_eq!(piped(5) >> double, Piped(10));
    }

    #[rstest]
    fn test_operator_chains_left_to_right() {
        let add_one = |value: i32| value + 1;
        // double(5) = 10, add_one(10) = 11
        assert_eq!((piped(5) >> double >> add_one).into_inner(), 11);
    }

    #[rstest]
    fn test_method_form_matches_operator() {
        let add_one = |value: i32| value + 1;
        assert_eq!(5_i32.pipe(double).pipe(add_one), (piped(5) >> double >> add_one).0);
    }

    #[rstest]
    fn test_consuming_stage() {
        let owned = String::from("owned");
        let append = move |text: String| text + &owned;
        assert_eq!(String::from("still ").pipe(append), "still owned");
    }

    #[rstest]
    fn test_as_inner_borrows() {
        let value = piped(vec![1, 2, 3]);
        assert_eq!(value.as_inner().len(), 3);
        assert_eq!(Piped::from(7).into_inner(), 7);
    }
}
