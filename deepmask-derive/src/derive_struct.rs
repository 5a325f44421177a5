//! Struct-specific `Maskable` derivation.
//!
//! Public fields are copied through the record copier; every other field is
//! left at its `Default` value.

use proc_macro2::{Ident, TokenStream};
use quote::{quote, quote_spanned};
use syn::{DataStruct, Field, Fields, Result, Visibility, ext::IdentExt, spanned::Spanned};

use crate::{
    DeriveOutput,
    container::reject_field_attrs,
    generics::{Bounds, default_bound, maskable_bound},
};

/// How one struct field is produced in the copy.
fn field_value(
    field: &Field,
    name: &str,
    access: &TokenStream,
    generics: &syn::Generics,
    root: &TokenStream,
    bounds: &mut Bounds,
) -> Result<TokenStream> {
    reject_field_attrs(&field.attrs)?;
    let span = field.span();
    let ty = &field.ty;
    if matches!(field.vis, Visibility::Public(_)) {
        bounds.require(ty, &maskable_bound(root), generics);
        Ok(quote_spanned! { span => record.field(#name, &#access)? })
    } else {
        bounds.require(ty, &default_bound(), generics);
        Ok(quote_spanned! { span => record.hidden::<#ty>(#name) })
    }
}

pub(crate) fn derive_struct(
    data: &DataStruct,
    ident: &Ident,
    generics: &syn::Generics,
    root: &TokenStream,
) -> Result<DeriveOutput> {
    let mut bounds = Bounds::new(ident);
    let copy_body = match &data.fields {
        Fields::Named(fields) => {
            let mut assignments = Vec::new();
            for field in &fields.named {
                let Some(ident) = &field.ident else {
                    return Err(syn::Error::new(field.span(), "named field without a name"));
                };
                let name = ident.unraw().to_string();
                let value =
                    field_value(field, &name, &quote!(self.#ident), generics, root, &mut bounds)?;
                assignments.push(quote! { #ident: #value });
            }
            let binding = record_binding(!assignments.is_empty());
            quote! {
                #binding
                ::core::result::Result::Ok(Self { #(#assignments),* })
            }
        }
        Fields::Unnamed(fields) => {
            let mut values = Vec::new();
            for (index, field) in fields.unnamed.iter().enumerate() {
                let member = syn::Index::from(index);
                let value = field_value(
                    field,
                    &index.to_string(),
                    &quote!(self.#member),
                    generics,
                    root,
                    &mut bounds,
                )?;
                values.push(value);
            }
            let binding = record_binding(!values.is_empty());
            quote! {
                #binding
                ::core::result::Result::Ok(Self(#(#values),*))
            }
        }
        Fields::Unit => {
            let binding = record_binding(false);
            quote! {
                #binding
                ::core::result::Result::Ok(Self)
            }
        }
    };

    Ok(DeriveOutput { copy_body, bounds })
}

/// Opens the record handler. The binding is only named when fields use it.
pub(crate) fn record_binding(has_fields: bool) -> TokenStream {
    if has_fields {
        quote! { let mut record = copier.record(self)?; }
    } else {
        quote! { copier.record(self)?; }
    }
}
