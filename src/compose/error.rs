//! Usage errors raised by runtime curried callables.

use std::fmt;

/// An argument-count violation detected by [`Curried`](super::Curried).
///
/// Wrapped-function failures are never translated into this type; they
/// travel through the callable untouched as part of its result type.
///
/// # Examples
///
/// ```rust
/// use pipewise::compose::CurryError;
///
/// let error = CurryError::TooManyArguments {
///     name: "pow",
///     maximum: 2,
///     supplied: 3,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "pow: takes at most 2 argument(s) but 3 were supplied"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurryError {
    /// More arguments were supplied than the callable accepts.
    TooManyArguments {
        /// Name of the wrapped function.
        name: &'static str,
        /// Required plus optional parameter count.
        maximum: usize,
        /// Bound plus newly supplied argument count, counted no further
        /// than one past `maximum`.
        supplied: usize,
    },
    /// A final result was requested before every required argument was bound.
    MissingArguments {
        /// Name of the wrapped function.
        name: &'static str,
        /// Required parameter count.
        required: usize,
        /// Bound plus newly supplied argument count.
        supplied: usize,
    },
}

impl CurryError {
    /// Returns the name of the function the error was raised for.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TooManyArguments { name, .. } | Self::MissingArguments { name, .. } => name,
        }
    }
}

impl fmt::Display for CurryError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyArguments {
                name,
                maximum,
                supplied,
            } => write!(
                formatter,
                "{name}: takes at most {maximum} argument(s) but {supplied} were supplied"
            ),
            Self::MissingArguments {
                name,
                required,
                supplied,
            } => write!(
                formatter,
                "{name}: requires {required} argument(s) but only {supplied} were supplied"
            ),
        }
    }
}

impl std::error::Error for CurryError {}
