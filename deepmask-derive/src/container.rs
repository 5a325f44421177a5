//! Parsing of `#[mask(...)]` container attributes.

use proc_macro2::Span;
use syn::{Attribute, Result, meta::ParseNestedMeta};

/// Options set on the struct or enum itself, with the span of the option
/// keyword so type errors in the generated code point at the attribute.
///
/// | Attribute             | Effect                                           |
/// |-----------------------|--------------------------------------------------|
/// | `#[mask(in_place)]`   | `HOOKS.in_place` calls `MaskInPlace::mask_in_place` |
/// | `#[mask(transform)]`  | `HOOKS.transform` calls `MaskValue::mask`        |
/// | `#[mask(atomic)]`     | the type is copied by `Clone`, fields untouched   |
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ContainerOptions {
    pub(crate) in_place: Option<Span>,
    pub(crate) transform: Option<Span>,
    pub(crate) atomic: Option<Span>,
}

fn set_flag(flag: &mut Option<Span>, meta: &ParseNestedMeta<'_>) -> Result<()> {
    if !meta.input.is_empty() && !meta.input.peek(syn::Token![,]) {
        return Err(meta.error("mask options do not take arguments"));
    }
    if flag.is_some() {
        return Err(meta.error("duplicate mask option"));
    }
    *flag = meta.path.get_ident().map(syn::Ident::span);
    Ok(())
}

pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();
    for attr in attrs {
        if !attr.path().is_ident("mask") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("in_place") {
                set_flag(&mut options.in_place, &meta)
            } else if meta.path.is_ident("transform") {
                set_flag(&mut options.transform, &meta)
            } else if meta.path.is_ident("atomic") {
                set_flag(&mut options.atomic, &meta)
            } else {
                Err(meta.error(
                    "unknown mask option; expected `in_place`, `transform` or `atomic`",
                ))
            }
        })?;
    }
    Ok(options)
}

/// Field-level `#[mask]` attributes are not supported: hooks are declared per
/// type, and visibility decides what is copied.
pub(crate) fn reject_field_attrs(attrs: &[Attribute]) -> Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident("mask")) {
        Some(attr) => Err(syn::Error::new_spanned(
            attr,
            "`#[mask(...)]` is only allowed on the struct or enum itself",
        )),
        None => Ok(()),
    }
}
