//! Per-shape copy handlers.
//!
//! One handler per [`Shape`]. Each handler first checks that its input really
//! has the shape it handles (a [`MaskError::ShapeMismatch`] otherwise), builds
//! a fresh value of the same type and copies every child through
//! [`Copier::copy`]. Handlers never apply hooks to their own result; the
//! engine does that after the handler returns.

use std::fmt::Debug;

use tracing::trace;

use super::Copier;
use crate::{
    error::{EntryPart, MaskError},
    registry::Identity,
    shape::Shape,
    traits::Maskable,
};

fn expect_shape<T: Maskable>(value: &T, expected: Shape) -> Result<(), MaskError> {
    match value.shape() {
        Some(found) if found == expected => Ok(()),
        found => Err(MaskError::ShapeMismatch {
            type_name: value.type_name(),
            expected,
            found,
        }),
    }
}

/// A pointer whose pointee may be owned by several pointers at once.
///
/// The reference handler uses this to allocate the copy's storage before the
/// pointee is copied, which is what makes cycles terminate.
pub trait SharedPointer: Maskable + Clone + 'static {
    type Target: Maskable + Default;

    /// Address of the shared allocation; the pointer's identity.
    fn target_ptr(&self) -> *const ();

    /// New storage holding `Target::default()`.
    fn allocate() -> Self;

    /// Reads the pointee without blocking.
    fn read<R>(&self, read: impl FnOnce(&Self::Target) -> R) -> Result<R, MaskError>;

    /// Replaces the pointee without blocking.
    fn write(&self, value: Self::Target) -> Result<(), MaskError>;
}

impl<'m> Copier<'m> {
    /// Atomic handler: the copy is a clone.
    pub fn atomic<T: Maskable + Clone>(&mut self, value: &T) -> Result<T, MaskError> {
        expect_shape(value, Shape::Atomic)?;
        Ok(value.clone())
    }

    /// Fixed-size sequence handler.
    pub fn fixed_sequence<T: Maskable, const N: usize>(
        &mut self,
        items: &[T; N],
    ) -> Result<[T; N], MaskError>
    where
        [T; N]: Maskable,
    {
        expect_shape(items, Shape::FixedSequence)?;
        let type_name = items.type_name();
        let mut copies = Vec::with_capacity(N);
        for (index, item) in items.iter().enumerate() {
            let copy = self
                .copy(item)
                .map_err(|err| MaskError::element(type_name, index, err))?;
            copies.push(copy);
        }
        copies.try_into().map_err(|_| MaskError::ShapeMismatch {
            type_name,
            expected: Shape::FixedSequence,
            found: Some(Shape::DynamicSequence),
        })
    }

    /// Dynamic sequence handler. `with_capacity` builds the empty copy.
    pub fn dynamic_sequence<'s, S, T, C>(
        &mut self,
        source: &'s S,
        with_capacity: impl FnOnce(usize) -> C,
    ) -> Result<C, MaskError>
    where
        S: Maskable,
        &'s S: IntoIterator<Item = &'s T>,
        <&'s S as IntoIterator>::IntoIter: ExactSizeIterator,
        T: Maskable + 's,
        C: Extend<T>,
    {
        expect_shape(source, Shape::DynamicSequence)?;
        let type_name = source.type_name();
        let items = source.into_iter();
        let mut copies = with_capacity(items.len());
        for (index, item) in items.enumerate() {
            let copy = self
                .copy(item)
                .map_err(|err| MaskError::element(type_name, index, err))?;
            copies.extend(Some(copy));
        }
        Ok(copies)
    }

    /// Mapping handler. Keys and values are copied independently.
    pub fn mapping<'s, S, K, V, C>(
        &mut self,
        source: &'s S,
        with_capacity: impl FnOnce(usize) -> C,
    ) -> Result<C, MaskError>
    where
        S: Maskable,
        &'s S: IntoIterator<Item = (&'s K, &'s V)>,
        <&'s S as IntoIterator>::IntoIter: ExactSizeIterator,
        K: Maskable + Debug + 's,
        V: Maskable + 's,
        C: Extend<(K, V)>,
    {
        expect_shape(source, Shape::Mapping)?;
        let type_name = source.type_name();
        let entries = source.into_iter();
        let mut copies = with_capacity(entries.len());
        for (key, value) in entries {
            let value_copy = self.copy(value).map_err(|err| {
                MaskError::entry(type_name, format!("{key:?}"), EntryPart::Value, err)
            })?;
            let key_copy = self.copy(key).map_err(|err| {
                MaskError::entry(type_name, format!("{key:?}"), EntryPart::Key, err)
            })?;
            copies.extend(Some((key_copy, value_copy)));
        }
        Ok(copies)
    }

    /// Reference handler for shared pointers.
    ///
    /// The copy is registered before the pointee is copied, so a pointee that
    /// leads back to `source` finds the copy instead of recursing forever.
    pub fn shared_reference<P: SharedPointer>(&mut self, source: &P) -> Result<P, MaskError> {
        expect_shape(source, Shape::Reference)?;
        let type_name = source.type_name();
        let source_id = Identity::of::<P, _>(source.target_ptr());
        if let Some(copy) = self.registry.lookup::<P>(source_id) {
            trace!(type_name, "reusing copy of a shared reference");
            return Ok(copy);
        }

        let copy = P::allocate();
        let copy_id = Identity::of::<P, _>(copy.target_ptr());
        self.registry.register(source_id, copy.clone(), copy_id);
        trace!(type_name, registered = self.registry.len(), "registered shared reference");

        let target = source
            .read(|target| self.copy(target))?
            .map_err(|err| MaskError::referent(type_name, err))?;
        copy.write(target)?;
        self.registry.complete(copy_id);
        Ok(copy)
    }

    /// Reference handler for uniquely owned pointers. A `Box` cannot alias,
    /// so it bypasses the registry.
    #[allow(clippy::borrowed_box)]
    pub fn unique_reference<T: Maskable>(&mut self, source: &Box<T>) -> Result<Box<T>, MaskError>
    where
        Box<T>: Maskable,
    {
        expect_shape(source, Shape::Reference)?;
        let target = self
            .copy(&**source)
            .map_err(|err| MaskError::referent(source.type_name(), err))?;
        Ok(Box::new(target))
    }

    /// Record handler. Returns a [`RecordCopier`] that copies the fields.
    pub fn record<R: Maskable>(&mut self, record: &R) -> Result<RecordCopier<'_, 'm>, MaskError> {
        expect_shape(record, Shape::Record)?;
        Ok(RecordCopier {
            type_name: record.type_name(),
            copier: self,
        })
    }
}

/// Copies the fields of one record.
pub struct RecordCopier<'c, 'm> {
    copier: &'c mut Copier<'m>,
    type_name: &'static str,
}

impl RecordCopier<'_, '_> {
    /// Copies a visible field.
    pub fn field<F: Maskable>(&mut self, name: &'static str, value: &F) -> Result<F, MaskError> {
        self.copier
            .copy(value)
            .map_err(|err| MaskError::field(self.type_name, name, err))
    }

    /// Value for a field that is not externally visible: its default.
    pub fn hidden<F: Default>(&mut self, name: &'static str) -> F {
        trace!(
            type_name = self.type_name,
            field = name,
            "leaving non-public field at its default"
        );
        F::default()
    }
}
