//! `Maskable` implementations for standard library types.
//!
//! Every implementation here classifies itself and hands the copy to the
//! matching [`crate::Copier`] handler. None of them declare hooks: hooks
//! belong to caller-defined types.
//!
//! ## Map Keys Are Copied Too
//!
//! Keys go through the engine like values, so a key type with a transforming
//! hook is masked. If masking makes two keys equal, the copied map keeps only
//! one of them. The same applies to set elements.

mod atomic;
mod maps;
mod records;
mod references;
mod sequences;
mod unsupported;

// =============================================================================
// Atomic implementation helper
// =============================================================================

macro_rules! impl_maskable_atomic {
    ($ty:ty) => {
        impl crate::traits::Maskable for $ty {
            fn shape(&self) -> Option<crate::shape::Shape> {
                Some(crate::shape::Shape::Atomic)
            }

            fn copy_structure(
                &self,
                copier: &mut crate::engine::Copier<'_>,
            ) -> Result<Self, crate::error::MaskError> {
                copier.atomic(self)
            }
        }
    };
}

pub(crate) use impl_maskable_atomic;
