//! Derive macro for `deepmask`.
//!
//! This crate generates the `Maskable` implementation behind
//! `#[derive(Maskable)]`. It:
//! - reads `#[mask(...)]` container attributes
//! - classifies the type (record, or atomic when asked)
//! - emits the record copy, copying public fields and defaulting the rest
//!
//! It does **not** define the hook traits or the copy handlers. Those live in
//! the main `deepmask` crate.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Group, Span, TokenStream, TokenTree};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input, parse_quote, spanned::Spanned};

mod container;
mod derive_enum;
mod derive_struct;
mod generics;
use container::{ContainerOptions, parse_container_options};
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::Bounds;

/// Derives `deepmask::Maskable` for structs and enums.
///
/// # Container Attributes
///
/// - `#[mask(in_place)]`: declares the type's `MaskInPlace` hook. It runs on
///   the copy when the value is reached through `Rc<RefCell<_>>`,
///   `Arc<RwLock<_>>` or `Box<_>`. The type must implement `MaskInPlace`.
/// - `#[mask(transform)]`: declares the type's `MaskValue` hook. It runs on
///   every by-value copy and replaces it. The type must implement `MaskValue`.
/// - `#[mask(atomic)]`: the type is a leaf. Its copy is a `Clone`, no field
///   is visited, and the type must implement `Clone`.
///
/// # Fields
///
/// Only `pub` fields are copied. Fields with any other visibility
/// (`pub(crate)` included) are set to `Default::default()` in the copy, so
/// their types must implement `Default`. Enum variant fields are always
/// copied.
///
/// Unions are rejected at compile time.
#[proc_macro_derive(Maskable, attributes(mask))]
pub fn derive_maskable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the deepmask crate root.
///
/// Handles crate renaming (e.g., `masking = { package = "deepmask", ... }`).
/// Inside deepmask itself the crate is reachable as `::deepmask` through its
/// `extern crate self` alias, which also keeps doctests working.
fn crate_root() -> TokenStream {
    match crate_name("deepmask") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::deepmask },
    }
}

struct DeriveOutput {
    copy_body: TokenStream,
    bounds: Bounds,
}

/// Re-spans every token of `tokens`, so errors in a generated path point at
/// the attribute that asked for it.
fn respan(tokens: TokenStream, span: Span) -> TokenStream {
    tokens
        .into_iter()
        .map(|token| match token {
            TokenTree::Group(group) => {
                let mut respanned = Group::new(group.delimiter(), respan(group.stream(), span));
                respanned.set_span(span);
                TokenTree::Group(respanned)
            }
            mut token => {
                token.set_span(span);
                token
            }
        })
        .collect()
}

fn hooks_const(options: ContainerOptions, root: &TokenStream) -> TokenStream {
    if options.in_place.is_none() && options.transform.is_none() {
        return quote! {};
    }
    let in_place = match options.in_place {
        Some(span) => {
            let hook = respan(quote! { <Self as #root::MaskInPlace>::mask_in_place }, span);
            quote! { ::core::option::Option::Some(#hook as fn(&mut Self)) }
        }
        None => quote! { ::core::option::Option::None },
    };
    let transform = match options.transform {
        Some(span) => {
            let hook = respan(quote! { <Self as #root::MaskValue>::mask }, span);
            quote! { ::core::option::Option::Some(#hook as fn(Self) -> Self) }
        }
        None => quote! { ::core::option::Option::None },
    };
    quote! {
        const HOOKS: #root::Hooks<Self> = #root::Hooks {
            in_place: #in_place,
            transform: #transform,
        };
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    // Reject unions
    if let Data::Union(u) = &data {
        return Err(syn::Error::new(
            u.union_token.span(),
            "`Maskable` cannot be derived for unions",
        ));
    }

    let options = parse_container_options(&attrs)?;
    let root = crate_root();

    let (shape, DeriveOutput { copy_body, bounds }) = if let Some(span) = options.atomic {
        let mut bounds = Bounds::new(&ident);
        // A concrete type that is not `Clone` fails at the handler call.
        if generics.type_params().next().is_some() {
            let (_, ty_generics, _) = generics.split_for_impl();
            let self_ty: syn::Type = parse_quote!(#ident #ty_generics);
            bounds.require_self(&self_ty, &quote!(::core::clone::Clone));
        }
        let output = DeriveOutput {
            copy_body: respan(quote! { copier.atomic(self) }, span),
            bounds,
        };
        (quote! { Atomic }, output)
    } else {
        let output = match &data {
            Data::Struct(data) => derive_struct(data, &ident, &generics, &root)?,
            Data::Enum(data) => derive_enum(data, &ident, &generics, &root)?,
            Data::Union(_) => unreachable!("unions rejected above"),
        };
        (quote! { Record }, output)
    };

    let generics = bounds.apply(generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let hooks = hooks_const(options, &root);

    Ok(quote! {
        impl #impl_generics #root::Maskable for #ident #ty_generics #where_clause {
            #hooks

            fn shape(&self) -> ::core::option::Option<#root::Shape> {
                ::core::option::Option::Some(#root::Shape::#shape)
            }

            fn copy_structure(
                &self,
                copier: &mut #root::Copier<'_>,
            ) -> ::core::result::Result<Self, #root::MaskError> {
                #copy_body
            }
        }
    })
}
