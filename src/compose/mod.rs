//! The pipe relation and currying.
//!
//! Everything else in the crate is built on this module: a stage is any
//! value implementing [`Pipeable`], and the combinators of
//! [`maybe`](crate::maybe) and [`stages`](crate::stages) are stage
//! constructors generated with [`macro@crate::pipeable`].
//!
//! # Overview
//!
//! - [`Piped`] / [`piped`]: the `>>` operator form of the relation
//! - [`Pipe`]: the method form, `x.pipe(f)`
//! - [`pipe!`]: the macro form, `pipe!(x, f, g)`
//! - [`compose!`]: right-to-left composition of stages
//! - [`Curried`]: runtime-arity currying with optional parameters
//! - [`curry!`](crate::curry) and [`macro@crate::pipeable`]: compile-time currying
//!
//! # Examples
//!
//! ## Pipe operator
//!
//! ```
//! use pipewise::compose::piped;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // piped(x) >> f >> g = g(f(x))
//! assert_eq!((piped(5) >> double >> add_one).into_inner(), 11);
//! ```
//!
//! ## Currying
//!
//! ```
//! use pipewise::compose::piped;
//! use pipewise::curry;
//!
//! fn clamp(low: i32, high: i32, value: i32) -> i32 { value.max(low).min(high) }
//!
//! let curried = curry!(clamp, 3);
//! let percent = curried(0)(100);
//!
//! assert_eq!((piped(140) >> &percent).into_inner(), 100);
//! assert_eq!((piped(-3) >> &percent).into_inner(), 0);
//! ```
//!
//! Supplying more arguments than a compile-time curried function declares
//! does not compile:
//!
//! ```compile_fail
//! use pipewise::curry;
//!
//! let add = curry!(|a: i32, b: i32| a + b);
//! let _ = add(1)(2, 3);
//! ```
//!
//! # Laws
//!
//! - **Application**: `piped(x) >> f == piped(f(x))`
//! - **Chaining**: `piped(x) >> f >> g == piped(g(f(x)))`
//! - **Currying**: `curry!(f, n)(a1)...(an) == f(a1, ..., an)`
//! - **Composition**: `compose!(g, f)(x) == pipe!(x, f, g)`

mod compose_macro;
mod curried;
mod error;
mod pipe_macro;
mod stage;
mod utils;

pub use curried::{Application, Curried};
pub use error::CurryError;
pub use stage::{Pipe, Pipeable, Piped, piped};
pub use utils::{constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
