//! Procedural macros for pipewise.
//!
//! Both macros read the arity of a function from its signature at compile
//! time, so n-ary functions can be reused as pipeline stages without
//! rewriting them by hand.
//!
//! # Available Macros
//!
//! - [`curry!`]: Converts a closure (or a function path plus arity) into
//!   nested single-argument closures
//! - [`macro@pipeable`]: Rewrites an n-ary `fn` so that its leading
//!   arguments are supplied eagerly and the last one, the *subject*, is
//!   supplied through a pipe
//!
//! # Example: Currying
//!
//! ```rust,ignore
//! use pipewise::curry;
//!
//! let add = curry!(|a: i32, b: i32| a + b);
//! assert_eq!(add(5)(3), 8);
//! ```
//!
//! # Example: Pipeable functions
//!
//! ```rust,ignore
//! use pipewise::compose::piped;
//! use pipewise::pipeable;
//!
//! #[pipeable]
//! fn scale(factor: i32, value: i32) -> i32 {
//!     factor * value
//! }
//!
//! // scale(3) is a stage awaiting `value`
//! assert_eq!((piped(4) >> scale(3)).into_inner(), 12);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;
mod pipeable;

use proc_macro::TokenStream;

/// Converts a closure or a function into curried form.
///
/// # Forms
///
/// - `curry!(|a, b, c| body)`: the arity is the number of closure parameters
/// - `curry!(function_path, 3)`: the arity is given as an integer literal
///
/// The generated closures share the wrapped function through `Rc` and clone
/// the bound arguments on each call, so every partial application implements
/// `Fn` and can be reused.
///
/// # Errors
///
/// Compilation fails when the arity is zero, when the arity is not an
/// integer literal, or when a bare function path is given without an arity.
///
/// ```rust,ignore
/// use pipewise::curry;
///
/// fn volume(width: i32, height: i32, depth: i32) -> i32 {
///     width * height * depth
/// }
///
/// let curried = curry!(volume, 3);
/// let base = curried(2)(3);
/// assert_eq!(base(4), 24);
/// assert_eq!(base(5), 30);
/// ```
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::curry_impl(input)
}

/// Turns an n-ary free function into a stage constructor.
///
/// For a function with parameters `(p1, ..., pn)` the attribute produces a
/// function taking `(p1, ..., p(n-1))` and returning
/// `impl Fn(Pn) -> Ret`. With `#[pipeable(once)]` the returned stage is
/// `impl FnOnce(Pn) -> Ret`, which allows the body to consume the bound
/// arguments. Unary functions are left untouched.
///
/// # Errors
///
/// Compilation fails for methods (`self` receivers), `async` functions,
/// functions without parameters, and unknown attribute arguments.
///
/// ```rust,ignore
/// use pipewise::pipeable;
///
/// #[pipeable(once)]
/// fn prepend(prefix: String, text: String) -> String {
///     prefix + &text
/// }
///
/// assert_eq!(prepend("pipe".to_string())("wise".to_string()), "pipewise");
/// ```
#[proc_macro_attribute]
pub fn pipeable(attribute: TokenStream, item: TokenStream) -> TokenStream {
    pipeable::pipeable_impl(attribute, item)
}
