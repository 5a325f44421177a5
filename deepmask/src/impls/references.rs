//! Reference-shaped types and the transparent `Option` slot.
//!
//! - `Rc<RefCell<T>>` and `Arc<RwLock<T>>` are shared references: the copy
//!   reproduces aliasing and cycles through the identity registry.
//! - `Box<T>` is a unique reference and never consults the registry.
//! - `Option<T>` is not a reference itself. `None` is the nil value of any
//!   reference it wraps; `Some(value)` behaves exactly like `value`.

use std::{
    cell::RefCell,
    rc::Rc,
    sync::{Arc, RwLock, TryLockError},
};

use crate::{
    engine::{Copier, SharedPointer},
    error::MaskError,
    registry::Identity,
    shape::Shape,
    traits::{Maskable, Referent},
};

fn busy<P>() -> MaskError {
    MaskError::ReferentBusy {
        type_name: std::any::type_name::<P>(),
    }
}

// =============================================================================
// Rc<RefCell<T>>
// =============================================================================

impl<T> SharedPointer for Rc<RefCell<T>>
where
    T: Maskable + Default + 'static,
{
    type Target = T;

    fn target_ptr(&self) -> *const () {
        Rc::as_ptr(self).cast()
    }

    fn allocate() -> Self {
        Rc::new(RefCell::new(T::default()))
    }

    fn read<R>(&self, read: impl FnOnce(&T) -> R) -> Result<R, MaskError> {
        let target = self.try_borrow().map_err(|_| busy::<Self>())?;
        Ok(read(&*target))
    }

    fn write(&self, value: T) -> Result<(), MaskError> {
        *self.try_borrow_mut().map_err(|_| busy::<Self>())? = value;
        Ok(())
    }
}

impl<T> Maskable for Rc<RefCell<T>>
where
    T: Maskable + Default + 'static,
{
    fn shape(&self) -> Option<Shape> {
        Some(Shape::Reference)
    }

    fn copy_structure(&self, copier: &mut Copier<'_>) -> Result<Self, MaskError> {
        copier.shared_reference(self)
    }

    fn referent(&self) -> Referent {
        Referent::Shared(Identity::of::<Self, _>(self.target_ptr()))
    }

    fn mask_referent(&mut self) -> Result<bool, MaskError> {
        let Some(in_place) = T::HOOKS.in_place else {
            return Ok(false);
        };
        let mut target = self.try_borrow_mut().map_err(|_| busy::<Self>())?;
        in_place(&mut *target);
        Ok(true)
    }
}

// =============================================================================
// Arc<RwLock<T>>
// =============================================================================

// Poisoned locks are read and written like healthy ones.
impl<T> SharedPointer for Arc<RwLock<T>>
where
    T: Maskable + Default + 'static,
{
    type Target = T;

    fn target_ptr(&self) -> *const () {
        Arc::as_ptr(self).cast()
    }

    fn allocate() -> Self {
        Arc::new(RwLock::new(T::default()))
    }

    fn read<R>(&self, read: impl FnOnce(&T) -> R) -> Result<R, MaskError> {
        let target = match self.try_read() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => return Err(busy::<Self>()),
        };
        Ok(read(&*target))
    }

    fn write(&self, value: T) -> Result<(), MaskError> {
        let mut target = match self.try_write() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => return Err(busy::<Self>()),
        };
        *target = value;
        Ok(())
    }
}

impl<T> Maskable for Arc<RwLock<T>>
where
    T: Maskable + Default + 'static,
{
    fn shape(&self) -> Option<Shape> {
        Some(Shape::Reference)
    }

    fn copy_structure(&self, copier: &mut Copier<'_>) -> Result<Self, MaskError> {
        copier.shared_reference(self)
    }

    fn referent(&self) -> Referent {
        Referent::Shared(Identity::of::<Self, _>(self.target_ptr()))
    }

    fn mask_referent(&mut self) -> Result<bool, MaskError> {
        let Some(in_place) = T::HOOKS.in_place else {
            return Ok(false);
        };
        let mut target = match self.try_write() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => return Err(busy::<Self>()),
        };
        in_place(&mut *target);
        Ok(true)
    }
}

// =============================================================================
// Box<T>
// =============================================================================

impl<T: Maskable> Maskable for Box<T> {
    fn shape(&self) -> Option<Shape> {
        Some(Shape::Reference)
    }

    fn copy_structure(&self, copier: &mut Copier<'_>) -> Result<Self, MaskError> {
        copier.unique_reference(self)
    }

    fn referent(&self) -> Referent {
        Referent::Unique
    }

    fn mask_referent(&mut self) -> Result<bool, MaskError> {
        let Some(in_place) = T::HOOKS.in_place else {
            return Ok(false);
        };
        in_place(&mut **self);
        Ok(true)
    }
}

// =============================================================================
// Option<T>
// =============================================================================

impl<T: Maskable> Maskable for Option<T> {
    fn shape(&self) -> Option<Shape> {
        self.as_ref().and_then(Maskable::shape)
    }

    fn copy_structure(&self, copier: &mut Copier<'_>) -> Result<Self, MaskError> {
        match self {
            Some(value) => copier.copy(value).map(Some),
            None => Ok(None),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Some(value) => value.type_name(),
            None => std::any::type_name::<Self>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        rc::Rc,
        sync::{Arc, RwLock},
    };

    use crate::{MaskError, Shape, mask, traits::Maskable};

    #[test]
    fn none_is_absent_and_copies_to_none() {
        let source: Option<Rc<RefCell<u32>>> = None;
        assert_eq!(source.shape(), None);
        assert!(mask(&source).unwrap().is_none());
    }

    #[test]
    fn some_classifies_as_its_value() {
        assert_eq!(Some(5_u8).shape(), Some(Shape::Atomic));
        assert_eq!(Some(vec![1_u8]).shape(), Some(Shape::DynamicSequence));
        assert_eq!(Some(5_u8).type_name(), "u8");
    }

    #[test]
    fn nil_sequence_differs_from_empty_sequence() {
        let nil: Option<Vec<u8>> = None;
        let empty: Option<Vec<u8>> = Some(Vec::new());
        assert_eq!(mask(&nil).unwrap(), None);
        assert_eq!(mask(&empty).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn rc_copy_points_to_new_storage() {
        let source = Rc::new(RefCell::new(String::from("value")));
        let copy = mask(&source).unwrap();
        assert!(!Rc::ptr_eq(&source, &copy));
        assert_eq!(*copy.borrow(), "value");
    }

    #[test]
    fn arc_copy_points_to_new_storage() {
        let source = Arc::new(RwLock::new(vec![1_u8, 2]));
        let copy = mask(&source).unwrap();
        assert!(!Arc::ptr_eq(&source, &copy));
        assert_eq!(*copy.read().unwrap(), vec![1, 2]);
    }

    #[test]
    fn box_copy_points_to_new_storage() {
        let source = Box::new(7_u64);
        let copy = mask(&source).unwrap();
        assert_eq!(*copy, 7);
        assert_ne!(&raw const *copy, &raw const *source);
    }

    #[test]
    fn exclusively_borrowed_source_is_busy() {
        let source = Rc::new(RefCell::new(1_u8));
        let _guard = source.borrow_mut();
        let err = mask(&source).unwrap_err();
        assert!(matches!(err, MaskError::ReferentBusy { .. }));
    }
}
