//! The [`Maskable`] trait: what the engine needs from every value it copies.

use crate::{
    engine::Copier, error::MaskError, hooks::Hooks, registry::Identity, shape::Shape,
};

/// A type the engine can deep-copy and mask.
///
/// Implementations classify themselves ([`Maskable::shape`]) and build their
/// structural copy by calling the matching handler on the [`Copier`]
/// ([`Maskable::copy_structure`]). Child values must be copied through
/// [`Copier::copy`], never cloned directly, so hooks and reference tracking
/// apply at every level.
///
/// Most types get this from `#[derive(Maskable)]` or from the built-in
/// implementations for std types. A manual implementation looks like:
///
/// ```
/// use deepmask::{Copier, MaskError, Maskable, Shape};
///
/// #[derive(Clone)]
/// struct AccountId(u64);
///
/// impl Maskable for AccountId {
///     fn shape(&self) -> Option<Shape> {
///         Some(Shape::Atomic)
///     }
///
///     fn copy_structure(&self, copier: &mut Copier<'_>) -> Result<Self, MaskError> {
///         copier.atomic(self)
///     }
/// }
///
/// assert_eq!(deepmask::must(&AccountId(7)).0, 7);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Maskable`",
    label = "this type cannot be deep-copied by deepmask",
    note = "use `#[derive(Maskable)]` on the type definition",
    note = "or mark opaque leaf types with `#[mask(atomic)]`"
)]
pub trait Maskable: Sized {
    /// Hooks this type declares. Set by `#[mask(in_place)]` and
    /// `#[mask(transform)]` on the derive.
    const HOOKS: Hooks<Self> = Hooks::NONE;

    /// Structural category of this value, or `None` when the value is absent
    /// (an empty `Option` or [`crate::Dynamic`] slot).
    fn shape(&self) -> Option<Shape>;

    /// Builds the structural copy of `self`, without applying this type's own
    /// hook. Absent values return their absent copy.
    fn copy_structure(&self, copier: &mut Copier<'_>) -> Result<Self, MaskError>;

    /// Name used in errors and logs.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    #[doc(hidden)]
    fn referent(&self) -> Referent {
        Referent::None
    }

    /// Runs the pointee's in-place hook through this reference. Returns whether
    /// a hook ran.
    #[doc(hidden)]
    fn mask_referent(&mut self) -> Result<bool, MaskError> {
        Ok(false)
    }
}

/// What a reference-shaped copy points at, as seen by the hook invoker.
#[doc(hidden)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Referent {
    /// Not a reference the invoker can mask through (nil, or a transparent
    /// wrapper whose inner reference was already handled).
    None,
    /// A uniquely owned pointee (`Box`).
    Unique,
    /// A pointee that may be shared; hooked at most once per call.
    Shared(Identity),
}
