//! Implementation of the `#[pipeable]` attribute.
//!
//! The attribute splits a function's parameter list into a bound prefix
//! and a trailing *subject*. For
//!
//! ```text
//! #[pipeable]
//! pub fn fold<T, A, F>(update: F, init: A, items: Vec<T>) -> A { body }
//! ```
//!
//! it generates
//!
//! ```text
//! pub fn fold<T, A, F>(update: F, init: A) -> impl Fn(Vec<T>) -> A {
//!     move |items: Vec<T>| -> A { body }
//! }
//! ```
//!
//! Generics, where clauses, attributes and visibility are carried over.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::spanned::Spanned;
use syn::{FnArg, Ident, ItemFn, ReturnType, Type, parse_quote};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StageKind {
    Shared,
    Once,
}

pub fn pipeable_impl(attribute: TokenStream, item: TokenStream) -> TokenStream {
    let expanded = expand_pipeable(attribute.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error);
    TokenStream::from(expanded)
}

pub(crate) fn expand_pipeable(
    attribute: TokenStream2,
    item: TokenStream2,
) -> syn::Result<TokenStream2> {
    let kind = parse_stage_kind(attribute)?;
    let function: ItemFn = syn::parse2(item)?;
    rewrite(function, kind)
}

fn parse_stage_kind(attribute: TokenStream2) -> syn::Result<StageKind> {
    if attribute.is_empty() {
        return Ok(StageKind::Shared);
    }
    let identifier: Ident = syn::parse2(attribute)?;
    if identifier == "once" {
        Ok(StageKind::Once)
    } else {
        Err(syn::Error::new(
            identifier.span(),
            "#[pipeable] accepts no argument or `once`",
        ))
    }
}

fn rewrite(function: ItemFn, kind: StageKind) -> syn::Result<TokenStream2> {
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = function;

    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new(
            asyncness.span(),
            "#[pipeable] does not support async functions",
        ));
    }
    if let Some(receiver) = sig.receiver() {
        return Err(syn::Error::new(
            receiver.span(),
            "#[pipeable] only applies to free functions, not methods",
        ));
    }

    match sig.inputs.len() {
        0 => Err(syn::Error::new(
            sig.ident.span(),
            "#[pipeable] requires at least one parameter",
        )),
        1 => Ok(quote! { #(#attrs)* #vis #sig #block }),
        _ => {
            let mut prefix: Vec<FnArg> = sig.inputs.iter().cloned().collect();
            let Some(FnArg::Typed(subject)) = prefix.pop() else {
                return Err(syn::Error::new(
                    sig.inputs.span(),
                    "#[pipeable] expected a typed subject parameter",
                ));
            };

            let subject_pattern = &subject.pat;
            let subject_type = &subject.ty;
            let output_type: Type = match &sig.output {
                ReturnType::Default => parse_quote! { () },
                ReturnType::Type(_, output) => (**output).clone(),
            };
            let stage_trait = match kind {
                StageKind::Shared => quote! { ::std::ops::Fn },
                StageKind::Once => quote! { ::std::ops::FnOnce },
            };
            let mut stage_signature = sig.clone();
            stage_signature.inputs = prefix.into_iter().collect();
            stage_signature.output =
                parse_quote! { -> impl #stage_trait(#subject_type) -> #output_type };

            Ok(quote! {
                #(#attrs)*
                #vis #stage_signature {
                    move |#subject_pattern: #subject_type| -> #output_type #block
                }
            })
        }
    }
}
