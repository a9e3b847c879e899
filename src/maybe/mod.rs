//! An optional-value container whose combinators are pipe stages.
//!
//! [`Maybe`] has two variants, `Present(value)` and `Absent`. Absence is
//! contagious: [`map`], [`just_if`] and [`try_map`] applied to `Absent`
//! produce `Absent`, and only [`default`] (or [`unwrap`]) leaves the
//! container.
//!
//! | Stage | Subject | Result |
//! |---|---|---|
//! | [`wrap`] | `Option<T>` | `Maybe<T>` |
//! | [`unwrap`] | `Maybe<T>` | `Option<T>` |
//! | [`map(f)`](map) | `Maybe<T>` | `Maybe<U>` |
//! | [`just_if(p)`](just_if) / [`filter(p)`](filter) | `Maybe<T>` | `Maybe<T>` |
//! | [`and_then(f)`](and_then) | `Maybe<T>` | `Maybe<U>` |
//! | [`try_map(f)`](try_map) | `Maybe<T>` | `Maybe<U>` |
//! | [`default(fallback)`](default) | `Maybe<T>` | `T` |
//! | [`is_present`] / [`is_absent`] | `Maybe<T>` | `bool` |
//!
//! # Examples
//!
//! ```rust
//! use pipewise::compose::piped;
//! use pipewise::maybe::{self, default, wrap};
//! use pipewise::stages::{operator::add, sequence};
//!
//! let readings = vec![Some(1), Some(2), None, Some(4)];
//! let filled = (piped(readings)
//!     >> sequence::map(|reading: Option<i32>| {
//!         (piped(reading) >> wrap >> maybe::map(add(2)) >> default(0)).into_inner()
//!     }))
//! .into_inner();
//!
//! assert_eq!(filled, vec![3, 4, 0, 6]);
//! ```

mod stages;
mod value;

pub use stages::{
    and_then, default, filter, is_absent, is_present, just_if, map, try_map, unwrap, wrap,
};
pub use value::Maybe;
