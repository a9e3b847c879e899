//! Ready-made pipe stages.
//!
//! - [`sequence`]: strict `Vec` transformations (`map`, `filter`, `slice`, ...)
//! - [`lazy`]: the same transformations as unevaluated iterator adapters
//! - [`fold`]: folds and unfolds
//! - [`operator`]: arithmetic and comparisons with the subject on the left
//!
//! Multi-parameter stages are constructors: call them with every argument
//! but the subject, then pipe the subject in.
//!
//! # Examples
//!
//! ```rust
//! use pipewise::compose::piped;
//! use pipewise::stages::{fold, operator, sequence};
//!
//! let total = piped(vec![4, 7, 1, 8])
//!     >> sequence::filter(|x: &i32| *x > 2)
//!     >> sequence::map(operator::mul(10))
//!     >> fold::fold(|sum: i32, x: i32| sum + x, 0);
//!
//! assert_eq!(total.into_inner(), 190);
//! ```

pub mod fold;
pub mod lazy;
pub mod operator;
pub mod sequence;
