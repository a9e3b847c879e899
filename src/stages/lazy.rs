//! Lazy sequence stages.
//!
//! These mirror the stages of [`sequence`](super::sequence) but accept any
//! `IntoIterator` subject and hand back the standard iterator adapter
//! without collecting. Nothing runs until the result is iterated, so they
//! also work on unbounded sources.
//!
//! # Examples
//!
//! ```rust
//! use pipewise::compose::piped;
//! use pipewise::stages::lazy;
//!
//! let odd_squares = piped(1_u64..)
//!     >> lazy::map(|n: u64| n * n)
//!     >> lazy::filter(|n: &u64| n % 2 == 1);
//!
//! let first: Vec<u64> = odd_squares.into_inner().take(3).collect();
//! assert_eq!(first, vec![1, 9, 25]);
//! ```

use std::iter::{Enumerate, Filter, Map, Zip};

use pipewise_derive::pipeable;

/// Applies `function` to every item as it is pulled.
#[pipeable]
pub fn map<I, U, F>(function: F, items: I) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: Fn(I::Item) -> U + Clone,
{
    items.into_iter().map(function.clone())
}

/// Yields the items for which `predicate` holds.
#[pipeable]
pub fn filter<I, P>(predicate: P, items: I) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: Fn(&I::Item) -> bool + Clone,
{
    items.into_iter().filter(predicate.clone())
}

/// Pairs each item with the item of `other` at the same index, subject
/// first. Stops at the shorter side.
#[pipeable]
pub fn zip_with<I, J>(other: J, items: I) -> Zip<I::IntoIter, J::IntoIter>
where
    I: IntoIterator,
    J: IntoIterator + Clone,
{
    items.into_iter().zip(other.clone())
}

/// Pairs each item of `other` with the subject item at the same index,
/// `other` first. Stops at the shorter side.
#[pipeable]
pub fn zip_onto<I, J>(other: J, items: I) -> Zip<J::IntoIter, I::IntoIter>
where
    I: IntoIterator,
    J: IntoIterator + Clone,
{
    other.clone().into_iter().zip(items)
}

/// Pairs every item with its index.
pub fn enumerate<I: IntoIterator>(items: I) -> Enumerate<I::IntoIter> {
    items.into_iter().enumerate()
}
