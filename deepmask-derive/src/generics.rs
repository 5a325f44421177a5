//! Trait bounds for generic types.
//!
//! Bounds are added per field type, not per type parameter: a visible field
//! of type `Rc<RefCell<T>>` needs `Rc<RefCell<T>>: Maskable`, which asks more
//! of `T` than `T: Maskable` would. Only field types that mention a type
//! parameter get a predicate; concrete field types are checked by the
//! generated code directly.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` is skipped when looking for type parameters. It is atomic
//! for every `T`, so a marker field never forces a bound on `T`:
//!
//! ```ignore
//! #[derive(Maskable)]
//! struct TypedId<T> {
//!     pub id: String,
//!     pub marker: PhantomData<T>, // no `T: Maskable` required
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, WherePredicate, parse_quote};

type Matcher<'a> = &'a dyn Fn(&Ident) -> bool;

fn visit_type_param_bound(bound: &syn::TypeParamBound, matches: Matcher<'_>) -> bool {
    match bound {
        syn::TypeParamBound::Trait(trait_bound) => visit_path(&trait_bound.path, matches),
        _ => false,
    }
}

fn visit_return_type(output: &syn::ReturnType, matches: Matcher<'_>) -> bool {
    match output {
        syn::ReturnType::Type(_, output) => visit_type(output, matches),
        syn::ReturnType::Default => false,
    }
}

fn visit_path_arguments(args: &syn::PathArguments, matches: Matcher<'_>) -> bool {
    match args {
        syn::PathArguments::AngleBracketed(args) => args.args.iter().any(|arg| match arg {
            syn::GenericArgument::Type(inner_ty) => visit_type(inner_ty, matches),
            syn::GenericArgument::AssocType(assoc) => visit_type(&assoc.ty, matches),
            syn::GenericArgument::Constraint(constraint) => constraint
                .bounds
                .iter()
                .any(|bound| visit_type_param_bound(bound, matches)),
            _ => false,
        }),
        syn::PathArguments::Parenthesized(args) => {
            args.inputs.iter().any(|input| visit_type(input, matches))
                || visit_return_type(&args.output, matches)
        }
        syn::PathArguments::None => false,
    }
}

fn visit_path(path: &syn::Path, matches: Matcher<'_>) -> bool {
    // PhantomData<T> is atomic for every T.
    if path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "PhantomData")
    {
        return false;
    }

    path.segments
        .iter()
        .any(|segment| matches(&segment.ident) || visit_path_arguments(&segment.arguments, matches))
}

fn visit_type(ty: &syn::Type, matches: Matcher<'_>) -> bool {
    match ty {
        syn::Type::Path(type_path) => {
            type_path
                .qself
                .as_ref()
                .is_some_and(|qself| visit_type(&qself.ty, matches))
                || visit_path(&type_path.path, matches)
        }
        syn::Type::Reference(reference) => visit_type(&reference.elem, matches),
        syn::Type::Ptr(pointer) => visit_type(&pointer.elem, matches),
        syn::Type::Slice(slice) => visit_type(&slice.elem, matches),
        syn::Type::Array(array) => visit_type(&array.elem, matches),
        syn::Type::Tuple(tuple) => tuple.elems.iter().any(|elem| visit_type(elem, matches)),
        syn::Type::Paren(paren) => visit_type(&paren.elem, matches),
        syn::Type::Group(group) => visit_type(&group.elem, matches),
        syn::Type::TraitObject(obj) => obj
            .bounds
            .iter()
            .any(|bound| visit_type_param_bound(bound, matches)),
        syn::Type::BareFn(bare_fn) => {
            bare_fn
                .inputs
                .iter()
                .any(|input| visit_type(&input.ty, matches))
                || visit_return_type(&bare_fn.output, matches)
        }
        _ => false,
    }
}

/// Whether `ty` mentions one of the type parameters in `generics`.
pub(crate) fn uses_type_params(ty: &syn::Type, generics: &syn::Generics) -> bool {
    visit_type(ty, &|ident| {
        generics.type_params().any(|param| param.ident == *ident)
    })
}

/// Whether `ty` mentions the type named `name`, e.g. a recursive field.
pub(crate) fn mentions_type(ty: &syn::Type, name: &Ident) -> bool {
    visit_type(ty, &|ident| ident == name)
}

/// Collects the where-predicates the derived impl needs.
pub(crate) struct Bounds {
    self_ident: Ident,
    predicates: Vec<WherePredicate>,
}

impl Bounds {
    pub(crate) fn new(self_ident: &Ident) -> Self {
        Self {
            self_ident: self_ident.clone(),
            predicates: Vec::new(),
        }
    }

    /// `ty: bound`, if `ty` depends on a type parameter.
    ///
    /// Field types that mention the deriving type itself are skipped: the
    /// predicate would require the impl being defined and never resolve.
    pub(crate) fn require(&mut self, ty: &syn::Type, bound: &TokenStream, generics: &syn::Generics) {
        if !uses_type_params(ty, generics) || mentions_type(ty, &self.self_ident) {
            return;
        }
        let predicate: WherePredicate = parse_quote!(#ty: #bound);
        if !self.predicates.contains(&predicate) {
            self.predicates.push(predicate);
        }
    }

    /// `Self: bound`, regardless of type parameters.
    pub(crate) fn require_self(&mut self, self_ty: &syn::Type, bound: &TokenStream) {
        self.predicates.push(parse_quote!(#self_ty: #bound));
    }

    pub(crate) fn apply(self, mut generics: syn::Generics) -> syn::Generics {
        if !self.predicates.is_empty() {
            generics.make_where_clause().predicates.extend(self.predicates);
        }
        generics
    }
}

/// The bound a visible field type gets.
pub(crate) fn maskable_bound(root: &TokenStream) -> TokenStream {
    quote!(#root::Maskable)
}

/// The bound a hidden field type gets.
pub(crate) fn default_bound() -> TokenStream {
    quote!(::core::default::Default)
}
