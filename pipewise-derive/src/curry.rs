//! Implementation of the `curry!` procedural macro.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `curry!(|a, b| body)`
//! 2. Function path + arity form: `curry!(function_path, arity)`
//!
//! # Generated Code Structure
//!
//! For an arity of three the macro expands to:
//!
//! ```text
//! {
//!     let __pipewise_function = Rc::new(<function>);
//!     move |__pipewise_argument_0| {
//!         let __pipewise_function = Rc::clone(&__pipewise_function);
//!         move |__pipewise_argument_1| {
//!             let __pipewise_function = Rc::clone(&__pipewise_function);
//!             let __pipewise_argument_0 = Clone::clone(&__pipewise_argument_0);
//!             move |__pipewise_argument_2| {
//!                 __pipewise_function(
//!                     Clone::clone(&__pipewise_argument_0),
//!                     Clone::clone(&__pipewise_argument_1),
//!                     __pipewise_argument_2,
//!                 )
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! Every level only clones what it captured, so each intermediate closure
//! is `Fn` and a partial application can be applied any number of times.

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, ExprLit, Lit, Token};

enum CurryInput {
    Closure { closure: Expr, arity: usize },
    FunctionWithArity { function: Expr, arity: usize },
}

impl CurryInput {
    fn into_parts(self) -> (Expr, usize) {
        match self {
            Self::Closure { closure, arity } => (closure, arity),
            Self::FunctionWithArity { function, arity } => (function, arity),
        }
    }
}

pub fn curry_impl(input: TokenStream) -> TokenStream {
    let expanded = expand_curry(input.into()).unwrap_or_else(syn::Error::into_compile_error);
    TokenStream::from(expanded)
}

pub(crate) fn expand_curry(input: TokenStream2) -> syn::Result<TokenStream2> {
    let (function, arity) = parse_curry_input(input)?.into_parts();
    Ok(generate_nested_closures(arity, &quote! { #function }))
}

fn parse_curry_input(input: TokenStream2) -> syn::Result<CurryInput> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions = syn::parse::Parser::parse2(parser, input)?;
    let mut iterator = expressions.into_iter();

    match (iterator.next(), iterator.next(), iterator.next()) {
        (Some(Expr::Closure(closure)), None, None) => {
            let arity = closure.inputs.len();
            if arity == 0 {
                return Err(syn::Error::new(
                    closure.span(),
                    "curry! requires a closure with at least one parameter",
                ));
            }
            Ok(CurryInput::Closure {
                closure: Expr::Closure(closure),
                arity,
            })
        }
        (Some(Expr::Path(path)), None, None) => Err(syn::Error::new(
            path.span(),
            "curry! with a function path requires an arity: curry!(function_path, 2)",
        )),
        (Some(function), Some(arity), None) => Ok(CurryInput::FunctionWithArity {
            arity: parse_arity(&arity)?,
            function,
        }),
        _ => Err(syn::Error::new(
            Span::call_site(),
            "curry! requires a closure, or a function path followed by its arity",
        )),
    }
}

fn parse_arity(expression: &Expr) -> syn::Result<usize> {
    let Expr::Lit(ExprLit {
        lit: Lit::Int(literal),
        ..
    }) = expression
    else {
        return Err(syn::Error::new(
            expression.span(),
            "curry! expected an integer literal for arity",
        ));
    };

    let arity = literal.base10_parse::<usize>()?;
    if arity == 0 {
        return Err(syn::Error::new(
            literal.span(),
            "curry! requires an arity of at least 1",
        ));
    }
    Ok(arity)
}

fn generate_nested_closures(arity: usize, function_expression: &TokenStream2) -> TokenStream2 {
    let arguments: Vec<Ident> = (0..arity)
        .map(|index| format_ident!("__pipewise_argument_{}", index))
        .collect();

    let (last, bound) = arguments
        .split_last()
        .map_or((None, &[][..]), |(last, bound)| (Some(last), bound));

    let mut body = quote! {
        __pipewise_function(
            #(::std::clone::Clone::clone(&#bound),)*
            #last
        )
    };

    for index in (0..arity).rev() {
        let current = &arguments[index];
        let captured = &arguments[..index];
        body = if index == arity - 1 {
            quote! { move |#current| { #body } }
        } else {
            quote! {
                move |#current| {
                    let __pipewise_function = ::std::rc::Rc::clone(&__pipewise_function);
                    #(let #captured = ::std::clone::Clone::clone(&#captured);)*
                    #body
                }
            }
        };
    }

    quote! {
        {
            let __pipewise_function = ::std::rc::Rc::new(#function_expression);
            #body
        }
    }
}
