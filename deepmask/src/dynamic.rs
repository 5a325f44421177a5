//! Type-erased value slots.
//!
//! [`Dynamic`] holds any `Maskable + 'static` value behind a trait object, or
//! nothing at all. Copying a non-empty slot copies the concrete value through
//! the engine, so the concrete type's hooks and the call's reference tracking
//! apply as if the value were stored directly. An empty slot is an absent
//! value: it is returned as-is without error.

use std::{any::Any, fmt};

use crate::{engine::Copier, error::MaskError, shape::Shape, traits::Maskable};

/// Object-safe view of a [`Maskable`] value.
pub trait ErasedMaskable: Any {
    fn erased_shape(&self) -> Option<Shape>;

    fn erased_type_name(&self) -> &'static str;

    fn erased_copy(&self, copier: &mut Copier<'_>) -> Result<Box<dyn ErasedMaskable>, MaskError>;

    fn as_any(&self) -> &dyn Any;
}

impl<T: Maskable + 'static> ErasedMaskable for T {
    fn erased_shape(&self) -> Option<Shape> {
        self.shape()
    }

    fn erased_type_name(&self) -> &'static str {
        self.type_name()
    }

    fn erased_copy(&self, copier: &mut Copier<'_>) -> Result<Box<dyn ErasedMaskable>, MaskError> {
        Ok(Box::new(copier.copy(self)?))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A slot that holds a value of any maskable type, or nothing.
#[derive(Default)]
pub struct Dynamic(Option<Box<dyn ErasedMaskable>>);

impl Dynamic {
    pub fn new<T: Maskable + 'static>(value: T) -> Self {
        Self(Some(Box::new(value)))
    }

    pub const fn empty() -> Self {
        Self(None)
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The held value, if it is a `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0
            .as_deref()
            .and_then(|value| value.as_any().downcast_ref::<T>())
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }
}

impl Maskable for Dynamic {
    fn shape(&self) -> Option<Shape> {
        self.0.as_deref().and_then(ErasedMaskable::erased_shape)
    }

    fn copy_structure(&self, copier: &mut Copier<'_>) -> Result<Self, MaskError> {
        match self.0.as_deref() {
            Some(value) => Ok(Self(Some(value.erased_copy(copier)?))),
            None => Ok(Self::empty()),
        }
    }

    fn type_name(&self) -> &'static str {
        self.0
            .as_deref()
            .map_or("deepmask::Dynamic", ErasedMaskable::erased_type_name)
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_deref() {
            Some(value) => f
                .debug_tuple("Dynamic")
                .field(&value.erased_type_name())
                .finish(),
            None => f.write_str("Dynamic(empty)"),
        }
    }
}
