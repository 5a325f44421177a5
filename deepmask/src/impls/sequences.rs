//! Fixed-size and dynamic sequences.
//!
//! Sets are dynamic sequences: their elements are copied in iteration order
//! and collected back into a set of the same type.

use std::{
    collections::{BTreeSet, HashSet, VecDeque},
    hash::{BuildHasher, Hash},
};

use crate::{engine::Copier, error::MaskError, shape::Shape, traits::Maskable};

// =============================================================================
// Fixed-size sequences
// =============================================================================

impl<T: Maskable, const N: usize> Maskable for [T; N] {
    fn shape(&self) -> Option<Shape> {
        Some(Shape::FixedSequence)
    }

    fn copy_structure(&self, copier: &mut Copier<'_>) -> Result<Self, MaskError> {
        copier.fixed_sequence(self)
    }
}

// =============================================================================
// Dynamic sequences
// =============================================================================

impl<T: Maskable> Maskable for Vec<T> {
    fn shape(&self) -> Option<Shape> {
        Some(Shape::DynamicSequence)
    }

    fn copy_structure(&self, copier: &mut Copier<'_>) -> Result<Self, MaskError> {
        copier.dynamic_sequence(self, Vec::with_capacity)
    }
}

impl<T: Maskable> Maskable for VecDeque<T> {
    fn shape(&self) -> Option<Shape> {
        Some(Shape::DynamicSequence)
    }

    fn copy_structure(&self, copier: &mut Copier<'_>) -> Result<Self, MaskError> {
        copier.dynamic_sequence(self, VecDeque::with_capacity)
    }
}

impl<T, S> Maskable for HashSet<T, S>
where
    T: Maskable + Hash + Eq,
    S: BuildHasher + Clone,
{
    fn shape(&self) -> Option<Shape> {
        Some(Shape::DynamicSequence)
    }

    fn copy_structure(&self, copier: &mut Copier<'_>) -> Result<Self, MaskError> {
        let hasher = self.hasher().clone();
        copier.dynamic_sequence(self, |len| HashSet::with_capacity_and_hasher(len, hasher))
    }
}

impl<T: Maskable + Ord> Maskable for BTreeSet<T> {
    fn shape(&self) -> Option<Shape> {
        Some(Shape::DynamicSequence)
    }

    fn copy_structure(&self, copier: &mut Copier<'_>) -> Result<Self, MaskError> {
        copier.dynamic_sequence(self, |_| BTreeSet::new())
    }
}
