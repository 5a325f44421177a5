//! Enum-specific `Maskable` derivation.
//!
//! Every variant field is public, so every field is copied. Field names in
//! errors are qualified with the variant (`Variant::field`, `Variant::0`).

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{DataEnum, Fields, Result, ext::IdentExt, spanned::Spanned};

use crate::{
    DeriveOutput,
    container::reject_field_attrs,
    derive_struct::record_binding,
    generics::{Bounds, maskable_bound},
};

pub(crate) fn derive_enum(
    data: &DataEnum,
    ident: &Ident,
    generics: &syn::Generics,
    root: &TokenStream,
) -> Result<DeriveOutput> {
    let mut bounds = Bounds::new(ident);
    let mut arms = Vec::new();
    let mut has_fields = false;

    for variant in &data.variants {
        reject_field_attrs(&variant.attrs)?;
        let variant_ident = &variant.ident;
        let variant_name = variant_ident.unraw().to_string();
        let mut patterns = Vec::new();
        let mut values = Vec::new();

        for (index, field) in variant.fields.iter().enumerate() {
            reject_field_attrs(&field.attrs)?;
            has_fields = true;
            let span = field.span();
            let binding = format_ident!("field_{}", index);
            let field_name = match &field.ident {
                Some(ident) => format!("{variant_name}::{}", ident.unraw()),
                None => format!("{variant_name}::{index}"),
            };
            bounds.require(&field.ty, &maskable_bound(root), generics);

            let value = quote_spanned! { span => record.field(#field_name, #binding)? };
            match &field.ident {
                Some(ident) => {
                    patterns.push(quote! { #ident: #binding });
                    values.push(quote! { #ident: #value });
                }
                None => {
                    patterns.push(quote! { #binding });
                    values.push(value);
                }
            }
        }

        let arm = match &variant.fields {
            Fields::Named(_) => quote! {
                Self::#variant_ident { #(#patterns),* } => {
                    ::core::result::Result::Ok(Self::#variant_ident { #(#values),* })
                }
            },
            Fields::Unnamed(_) => quote! {
                Self::#variant_ident(#(#patterns),*) => {
                    ::core::result::Result::Ok(Self::#variant_ident(#(#values),*))
                }
            },
            Fields::Unit => quote! {
                Self::#variant_ident => ::core::result::Result::Ok(Self::#variant_ident),
            },
        };
        arms.push(arm);
    }

    let binding = record_binding(has_fields);
    let copy_body = if data.variants.is_empty() {
        quote! {
            #binding
            match *self {}
        }
    } else {
        quote! {
            #binding
            match self {
                #(#arms)*
            }
        }
    };

    Ok(DeriveOutput { copy_body, bounds })
}
