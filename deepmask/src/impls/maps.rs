//! Key/value mappings.

use std::{
    collections::{BTreeMap, HashMap},
    fmt::Debug,
    hash::{BuildHasher, Hash},
};

use crate::{engine::Copier, error::MaskError, shape::Shape, traits::Maskable};

impl<K, V, S> Maskable for HashMap<K, V, S>
where
    K: Maskable + Debug + Hash + Eq,
    V: Maskable,
    S: BuildHasher + Clone,
{
    fn shape(&self) -> Option<Shape> {
        Some(Shape::Mapping)
    }

    fn copy_structure(&self, copier: &mut Copier<'_>) -> Result<Self, MaskError> {
        let hasher = self.hasher().clone();
        copier.mapping(self, |len| HashMap::with_capacity_and_hasher(len, hasher))
    }
}

impl<K, V> Maskable for BTreeMap<K, V>
where
    K: Maskable + Debug + Ord,
    V: Maskable,
{
    fn shape(&self) -> Option<Shape> {
        Some(Shape::Mapping)
    }

    fn copy_structure(&self, copier: &mut Copier<'_>) -> Result<Self, MaskError> {
        copier.mapping(self, |_| BTreeMap::new())
    }
}
