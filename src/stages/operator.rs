//! Arithmetic and comparison stages.
//!
//! The bound argument is always the right-hand operand: `sub(1)` subtracts
//! one from the subject and `is_lt(10)` tests `subject < 10`.

use std::ops::{Add, Div, Mul, Sub};

use pipewise_derive::pipeable;

/// `subject + amount`
#[pipeable]
pub fn add<T>(amount: T, value: T) -> T
where
    T: Add<Output = T> + Clone,
{
    value + amount.clone()
}

/// `subject - amount`
#[pipeable]
pub fn sub<T>(amount: T, value: T) -> T
where
    T: Sub<Output = T> + Clone,
{
    value - amount.clone()
}

/// `subject * factor`
#[pipeable]
pub fn mul<T>(factor: T, value: T) -> T
where
    T: Mul<Output = T> + Clone,
{
    value * factor.clone()
}

/// `subject / divisor`
#[pipeable]
pub fn div<T>(divisor: T, value: T) -> T
where
    T: Div<Output = T> + Clone,
{
    value / divisor.clone()
}

/// `subject < bound`
///
/// # Examples
///
/// ```rust
/// use pipewise::compose::piped;
/// use pipewise::stages::operator::{is_lt, not};
///
/// assert!((piped(3) >> is_lt(10)).into_inner());
/// assert!((piped(30) >> is_lt(10) >> not).into_inner());
/// ```
#[pipeable]
pub fn is_lt<T: PartialOrd>(bound: T, value: T) -> bool {
    value < bound
}

/// `subject <= bound`
#[pipeable]
pub fn is_le<T: PartialOrd>(bound: T, value: T) -> bool {
    value <= bound
}

/// `subject == other`
#[pipeable]
pub fn is_eq<T: PartialEq>(other: T, value: T) -> bool {
    value == other
}

/// `subject != other`
#[pipeable]
pub fn is_ne<T: PartialEq>(other: T, value: T) -> bool {
    value != other
}

/// `subject >= bound`
#[pipeable]
pub fn is_ge<T: PartialOrd>(bound: T, value: T) -> bool {
    value >= bound
}

/// `subject > bound`
#[pipeable]
pub fn is_gt<T: PartialOrd>(bound: T, value: T) -> bool {
    value > bound
}

/// Logical negation.
#[inline]
pub const fn not(value: bool) -> bool {
    !value
}
