//! The `Maybe` type.

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::trace;

/// A value that is either present or absent.
///
/// Combinators never fail on `Absent`: they return `Absent` again, so a
/// missing value flows through a pipeline without checks at every step.
///
/// # Examples
///
/// ```rust
/// use pipewise::maybe::Maybe;
///
/// let price = Maybe::Present(40);
/// let discounted = price.map(|value| value - 5).filter(|value| *value > 30);
/// assert_eq!(discounted, Maybe::Present(35));
///
/// let missing: Maybe<i32> = Maybe::Absent;
/// assert_eq!(missing.map(|value| value - 5).unwrap_or(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// A concrete value.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Variant Tests
    // =========================================================================

    /// Returns `true` for `Present`.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` for `Absent`.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies `function` to the payload; `Absent` passes through.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Keeps the payload only if `predicate` holds for it.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    /// Chains a computation that may itself produce `Absent`.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Applies a fallible `function`, turning every failure into `Absent`.
    ///
    /// Both an `Err` return and a panic unwinding out of `function` produce
    /// `Absent`; neither propagates. This is the only combinator that
    /// converts failures into values. Panics can only be caught when the
    /// crate is built with `panic = "unwind"` (the default). A caught panic
    /// still runs the installed panic hook, so the default hook prints its
    /// message to stderr before the pipeline continues with `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipewise::maybe::Maybe;
    ///
    /// let parsed = Maybe::Present("17").try_map(str::parse::<u8>);
    /// assert_eq!(parsed, Maybe::Present(17));
    ///
    /// let overflow = Maybe::Present("300").try_map(str::parse::<u8>);
    /// assert_eq!(overflow, Maybe::Absent);
    /// ```
    pub fn try_map<U, E, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        let Self::Present(value) = self else {
            return Maybe::Absent;
        };

        match catch_unwind(AssertUnwindSafe(|| function(value))) {
            Ok(Ok(result)) => Maybe::Present(result),
            Ok(Err(_)) => {
                trace!("fallible function returned an error; continuing with Absent");
                Maybe::Absent
            }
            Err(_) => {
                trace!("fallible function panicked; continuing with Absent");
                Maybe::Absent
            }
        }
    }

    /// Returns `self` if present, otherwise `alternative`.
    #[inline]
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => alternative,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the payload, or `fallback` when absent.
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback,
        }
    }

    /// Returns the payload, or computes a fallback when absent.
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Iterates over the payload: one item when present, none when absent.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the payload, or `T::default()` when absent.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or_else(T::default)
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => write!(formatter, "Absent"),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Serialized exactly like `Option<T>`: the payload, or `null` when absent.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);
