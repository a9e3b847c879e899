//! Runtime-arity curried callables.
//!
//! [`curry!`](crate::curry) and [`macro@crate::pipeable`] fix the arity at
//! compile time. When the number of arguments is only known at runtime, or
//! a function takes trailing optional parameters, [`Curried`] accumulates
//! bound arguments in order until the declared count is reached.
//!
//! # Completion rule
//!
//! For a callable with `required` parameters and `optional` trailing
//! defaulted ones, supplying arguments so that `bound` reaches
//! - more than `required + optional`: [`CurryError::TooManyArguments`]
//! - at least `required`: the function runs with every bound argument
//! - fewer than `required`: a new [`Curried`] remembers them
//!
//! Optional arguments therefore have to be supplied in the same application
//! that completes the required ones.
//!
//! # Examples
//!
//! ```
//! use pipewise::compose::{Application, Curried};
//!
//! let sum = Curried::new("sum3", 3, |values: Vec<i32>| values.iter().sum::<i32>());
//!
//! let partial = sum.apply([1, 2]).unwrap().partial().unwrap();
//! assert_eq!(partial.remaining(), 1);
//! assert_eq!(partial.apply([3]).unwrap(), Application::Complete(6));
//!
//! // The original is untouched
//! assert_eq!(sum.bound().len(), 0);
//! ```

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;
use tracing::debug;

use super::error::CurryError;
use super::stage::Pipeable;

const INLINE_ARGUMENTS: usize = 4;

type Arguments<T> = SmallVec<[T; INLINE_ARGUMENTS]>;

/// A function of homogeneous arguments with a declared arity and an ordered
/// sequence of already bound arguments.
///
/// `Curried` is immutable: applying arguments returns a new value and
/// leaves the receiver usable.
pub struct Curried<T, R> {
    name: &'static str,
    required: usize,
    optional: usize,
    function: Rc<dyn Fn(Vec<T>) -> R>,
    bound: Arguments<T>,
}

/// The outcome of supplying arguments to a [`Curried`] callable.
#[derive(Debug, Clone, PartialEq)]
pub enum Application<T, R> {
    /// Not every required argument is bound yet.
    Partial(Curried<T, R>),
    /// The function ran; this is its result.
    Complete(R),
}

impl<T, R> Curried<T, R> {
    /// Wraps `function`, which is invoked once `required` arguments are bound.
    ///
    /// # Panics
    ///
    /// Panics if `required` is 0.
    pub fn new<F>(name: &'static str, required: usize, function: F) -> Self
    where
        F: Fn(Vec<T>) -> R + 'static,
    {
        Self::with_optional(name, required, 0, function)
    }

    /// Wraps `function` with `required` parameters followed by up to
    /// `optional` defaulted ones.
    ///
    /// The function receives between `required` and `required + optional`
    /// arguments and is responsible for defaulting the missing tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipewise::compose::{Application, Curried};
    ///
    /// // round(value, digits = 0)
    /// let round = Curried::with_optional("round", 1, 1, |arguments: Vec<f64>| {
    ///     let digits = arguments.get(1).copied().unwrap_or(0.0);
    ///     let scale = 10_f64.powf(digits);
    ///     (arguments[0] * scale).round() / scale
    /// });
    ///
    /// assert_eq!(round.apply([2.567]).unwrap(), Application::Complete(3.0));
    /// assert_eq!(round.apply([2.567, 1.0]).unwrap(), Application::Complete(2.6));
    /// assert!(round.apply([2.567, 1.0, 5.0]).is_err());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `required` is 0.
    pub fn with_optional<F>(
        name: &'static str,
        required: usize,
        optional: usize,
        function: F,
    ) -> Self
    where
        F: Fn(Vec<T>) -> R + 'static,
    {
        assert!(required > 0, "curried function {name} requires at least 1 parameter");

        Self {
            name,
            required,
            optional,
            function: Rc::new(function),
            bound: SmallVec::new(),
        }
    }

    /// Name used in diagnostics.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of parameters that must be bound before the function runs.
    pub const fn required(&self) -> usize {
        self.required
    }

    /// Number of trailing defaulted parameters.
    pub const fn optional(&self) -> usize {
        self.optional
    }

    /// Largest number of arguments the function accepts.
    pub const fn maximum(&self) -> usize {
        self.required + self.optional
    }

    /// Arguments bound so far, in application order.
    pub fn bound(&self) -> &[T] {
        &self.bound
    }

    /// Number of required arguments still missing.
    pub fn remaining(&self) -> usize {
        self.required.saturating_sub(self.bound.len())
    }

    /// Supplies `arguments` after the already bound ones.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::TooManyArguments`] when the total exceeds
    /// [`maximum`](Self::maximum). Extra arguments are never dropped.
    pub fn apply<I>(&self, arguments: I) -> Result<Application<T, R>, CurryError>
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        self.clone().apply_owned(arguments)
    }

    /// Consuming form of [`apply`](Self::apply); does not require `T: Clone`.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::TooManyArguments`] when the total exceeds
    /// [`maximum`](Self::maximum). At most one argument past the maximum is
    /// taken from `arguments`, so an unbounded source fails as well.
    pub fn apply_owned<I>(mut self, arguments: I) -> Result<Application<T, R>, CurryError>
    where
        I: IntoIterator<Item = T>,
    {
        let limit = self.maximum().saturating_sub(self.bound.len()) + 1;
        self.bound.extend(arguments.into_iter().take(limit));
        let supplied = self.bound.len();

        if supplied > self.maximum() {
            debug!(
                name = self.name,
                maximum = self.maximum(),
                supplied,
                "too many arguments for curried function"
            );
            return Err(CurryError::TooManyArguments {
                name: self.name,
                maximum: self.maximum(),
                supplied,
            });
        }

        if supplied < self.required {
            return Ok(Application::Partial(self));
        }

        let arguments = std::mem::take(&mut self.bound).into_vec();
        Ok(Application::Complete((self.function)(arguments)))
    }

    /// Supplies `arguments` and requires the function to run.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::TooManyArguments`] as [`apply`](Self::apply)
    /// does, and [`CurryError::MissingArguments`] when required arguments
    /// are still unbound afterwards.
    pub fn call<I>(&self, arguments: I) -> Result<R, CurryError>
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        match self.apply(arguments)? {
            Application::Complete(result) => Ok(result),
            Application::Partial(partial) => {
                debug!(
                    name = self.name,
                    required = self.required,
                    supplied = partial.bound.len(),
                    "curried function called before every argument was bound"
                );
                Err(CurryError::MissingArguments {
                    name: self.name,
                    required: self.required,
                    supplied: partial.bound.len(),
                })
            }
        }
    }
}

impl<T: Clone, R> Clone for Curried<T, R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            required: self.required,
            optional: self.optional,
            function: Rc::clone(&self.function),
            bound: self.bound.clone(),
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Curried<T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("name", &self.name)
            .field("required", &self.required)
            .field("optional", &self.optional)
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

/// Two callables are equal when they wrap the same function with the same
/// bound arguments.
impl<T: PartialEq, R> PartialEq for Curried<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.function, &other.function)
            && self.required == other.required
            && self.optional == other.optional
            && self.bound == other.bound
    }
}

/// Piping supplies exactly one more argument.
impl<T, R> Pipeable<T> for Curried<T, R> {
    type Output = Result<Application<T, R>, CurryError>;

    fn pipe_into(self, input: T) -> Self::Output {
        self.apply_owned(std::iter::once(input))
    }
}

impl<T, R> Application<T, R> {
    /// Returns `true` if the function ran.
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns the result if the function ran.
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// Returns the remaining callable if arguments are still missing.
    pub fn partial(self) -> Option<Curried<T, R>> {
        match self {
            Self::Partial(curried) => Some(curried),
            Self::Complete(_) => None,
        }
    }
}

static_assertions::assert_not_impl_any!(Curried<i32, i32>: Send, Sync);
