//! Mask hooks and the hook invoker.
//!
//! A type opts into masking through one or both capability traits:
//!
//! - [`MaskInPlace`]: edits a record in place. Runs only when the record is
//!   reached through a non-nil reference (`Rc<RefCell<T>>`, `Arc<RwLock<T>>`,
//!   `Box<T>`), once per copied instance.
//! - [`MaskValue`]: replaces a by-value copy with a new value of the same
//!   type. Runs for every non-reference copy of the type.
//!
//! Implementing a trait is not enough: the type must also declare the hook
//! with `#[mask(in_place)]` / `#[mask(transform)]` on its derive, which fills
//! in [`crate::Maskable::HOOKS`]. A declared hook whose trait is missing, or
//! whose `mask` does not return `Self`, does not compile:
//!
//! ```compile_fail
//! use deepmask::{MaskValue, Maskable};
//!
//! #[derive(Clone, Maskable)]
//! #[mask(atomic, transform)]
//! struct Token(String);
//!
//! impl MaskValue for Token {
//!     fn mask(self) -> String {
//!         "MASKED".into()
//!     }
//! }
//! ```
//!
//! ```compile_fail
//! use deepmask::Maskable;
//!
//! #[derive(Default, Maskable)]
//! #[mask(in_place)]
//! struct Session {
//!     pub token: String,
//! }
//! ```

use tracing::debug;

use crate::{
    error::MaskError,
    registry::IdentityRegistry,
    shape::Shape,
    traits::{Maskable, Referent},
};

/// Mutating hook: masks a record reached through a reference, in place.
pub trait MaskInPlace {
    fn mask_in_place(&mut self);
}

/// Transforming hook: returns the masked replacement for a by-value copy.
pub trait MaskValue: Sized {
    #[must_use]
    fn mask(self) -> Self;
}

/// The hooks a [`Maskable`] type declares.
pub struct Hooks<T> {
    pub in_place: Option<fn(&mut T)>,
    pub transform: Option<fn(T) -> T>,
}

impl<T> Hooks<T> {
    pub const NONE: Self = Self {
        in_place: None,
        transform: None,
    };
}

impl<T> Clone for Hooks<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Hooks<T> {}

impl<T> std::fmt::Debug for Hooks<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("in_place", &self.in_place.is_some())
            .field("transform", &self.transform.is_some())
            .finish()
    }
}

/// Applies the hook that matches the copy's shape.
///
/// Reference-shaped copies only consult the pointee's in-place hook; every
/// other shape only consults its own transforming hook.
pub(crate) fn invoke<T: Maskable>(
    mut copy: T,
    shape: Shape,
    registry: &mut IdentityRegistry,
) -> Result<T, MaskError> {
    if shape == Shape::Reference {
        let claimed = match copy.referent() {
            Referent::None => false,
            Referent::Unique => true,
            Referent::Shared(copy_id) => registry.claim_hook(copy_id),
        };
        if claimed && copy.mask_referent()? {
            debug!(type_name = copy.type_name(), "ran in-place mask hook");
        }
        return Ok(copy);
    }

    match T::HOOKS.transform {
        Some(transform) => {
            debug!(type_name = copy.type_name(), "ran transforming mask hook");
            Ok(transform(copy))
        }
        None => Ok(copy),
    }
}
