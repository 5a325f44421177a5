//! Tuples as records with positional fields.

use crate::{engine::Copier, error::MaskError, shape::Shape, traits::Maskable};

macro_rules! impl_maskable_tuple {
    ($($name:ident $index:tt),+) => {
        impl<$($name: Maskable),+> Maskable for ($($name,)+) {
            fn shape(&self) -> Option<Shape> {
                Some(Shape::Record)
            }

            fn copy_structure(&self, copier: &mut Copier<'_>) -> Result<Self, MaskError> {
                let mut record = copier.record(self)?;
                Ok(($(record.field(stringify!($index), &self.$index)?,)+))
            }
        }
    };
}

impl_maskable_tuple!(A 0);
impl_maskable_tuple!(A 0, B 1);
impl_maskable_tuple!(A 0, B 1, C 2);
impl_maskable_tuple!(A 0, B 1, C 2, D 3);
impl_maskable_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_maskable_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
