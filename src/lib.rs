//! # pipewise
//!
//! Left-to-right functional pipelines for Rust: a unary pipe operator,
//! currying of n-ary functions into pipeline stages, and an optional-value
//! container whose combinators are themselves stages.
//!
//! ## Overview
//!
//! - **Pipe**: `piped(x) >> f >> g` threads `x` through `f` then `g`;
//!   [`Pipe::pipe`](compose::Pipe::pipe) and [`pipe!`] are the named forms
//! - **Currying**: [`curry!`] and [`macro@pipeable`] at compile time,
//!   [`Curried`](compose::Curried) when the arity is only known at runtime
//! - **Maybe**: `Present`/`Absent` with `map`, `just_if`, `try_map`,
//!   `default` stages that propagate absence
//! - **Stages**: strict sequence, fold/unfold and operator stages
//!
//! ## Feature Flags
//!
//! - `compose`: Pipe relation and currying
//! - `maybe`: The optional-value container
//! - `stages`: Sequence, fold and operator stages
//! - `serde`: Serialization for `Maybe`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pipewise::prelude::*;
//! use pipewise::maybe::{self, default, wrap};
//! use pipewise::stages::operator::add;
//!
//! let present = (piped(Some(3)) >> wrap >> maybe::map(add(2)) >> default(0)).into_inner();
//! assert_eq!(present, 5);
//!
//! let absent = (piped(None) >> wrap >> maybe::map(add(2)) >> default(0)).into_inner();
//! assert_eq!(absent, 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the pipe relation, the curried callables and `Maybe`.
///
/// # Usage
///
/// ```rust
/// use pipewise::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "maybe")]
    pub use crate::maybe::Maybe;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "maybe")]
pub mod maybe;

#[cfg(feature = "stages")]
pub mod stages;

#[cfg(feature = "compose")]
pub use pipewise_derive::{curry, pipeable};
