//! Shape classification.
//!
//! A [`Shape`] is the structural category the engine dispatches on. Types
//! report their shape through [`crate::Maskable::shape`]; the engine picks the
//! matching copy handler from it, or fails for unsupported shapes.

use std::fmt;

/// Structural category of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Shape {
    /// Scalars and strings: copied as-is.
    Atomic,
    /// Arrays of a length fixed by the type.
    FixedSequence,
    /// Growable sequences (`Vec`, `VecDeque`, sets).
    DynamicSequence,
    /// Key/value maps.
    Mapping,
    /// Pointers to a separately stored value.
    Reference,
    /// Aggregates with named or positional fields.
    Record,
    /// A value the engine refuses to copy.
    Unsupported(Unsupported),
}

/// Why a value cannot be copied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Unsupported {
    /// Function pointers and other callable values.
    Behavior,
    /// Communication channel endpoints.
    Channel,
    /// Raw, unmanaged pointers.
    RawPointer,
    /// A supported shape whose handler was removed from the engine.
    Unregistered,
}

impl Shape {
    /// All shapes that have a copy handler.
    pub const HANDLED: [Shape; 6] = [
        Shape::Atomic,
        Shape::FixedSequence,
        Shape::DynamicSequence,
        Shape::Mapping,
        Shape::Reference,
        Shape::Record,
    ];

    /// Human-readable name used in errors and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Shape::Atomic => "atomic",
            Shape::FixedSequence => "fixed-size sequence",
            Shape::DynamicSequence => "dynamic sequence",
            Shape::Mapping => "mapping",
            Shape::Reference => "reference",
            Shape::Record => "record",
            Shape::Unsupported(kind) => kind.as_str(),
        }
    }

    pub const fn is_supported(self) -> bool {
        !matches!(self, Shape::Unsupported(_))
    }

    const fn bit(self) -> u8 {
        match self {
            Shape::Atomic => 1,
            Shape::FixedSequence => 1 << 1,
            Shape::DynamicSequence => 1 << 2,
            Shape::Mapping => 1 << 3,
            Shape::Reference => 1 << 4,
            Shape::Record => 1 << 5,
            Shape::Unsupported(_) => 0,
        }
    }
}

impl Unsupported {
    pub const fn as_str(self) -> &'static str {
        match self {
            Unsupported::Behavior => "behavior",
            Unsupported::Channel => "channel",
            Unsupported::RawPointer => "raw pointer",
            Unsupported::Unregistered => "unregistered shape",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ShapeSet - the engine's dispatch table
// =============================================================================

/// The set of shapes an engine has a registered handler for.
///
/// A shape outside the set is treated as [`Unsupported::Unregistered`].
/// `Unsupported` shapes can never be members.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(from = "Vec<Shape>"))]
pub struct ShapeSet(u8);

impl ShapeSet {
    pub const EMPTY: ShapeSet = ShapeSet(0);
    pub const ALL: ShapeSet = ShapeSet(0b0011_1111);

    #[must_use]
    pub const fn with(self, shape: Shape) -> Self {
        ShapeSet(self.0 | shape.bit())
    }

    #[must_use]
    pub const fn without(self, shape: Shape) -> Self {
        ShapeSet(self.0 & !shape.bit())
    }

    pub const fn contains(self, shape: Shape) -> bool {
        let bit = shape.bit();
        bit != 0 && self.0 & bit == bit
    }

    pub fn iter(self) -> impl Iterator<Item = Shape> {
        Shape::HANDLED
            .into_iter()
            .filter(move |shape| self.contains(*shape))
    }
}

impl Default for ShapeSet {
    fn default() -> Self {
        ShapeSet::ALL
    }
}

impl fmt::Debug for ShapeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl From<Vec<Shape>> for ShapeSet {
    fn from(shapes: Vec<Shape>) -> Self {
        shapes.into_iter().collect()
    }
}

impl FromIterator<Shape> for ShapeSet {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        iter.into_iter().fold(ShapeSet::EMPTY, ShapeSet::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_every_handled_shape() {
        for shape in Shape::HANDLED {
            assert!(ShapeSet::ALL.contains(shape), "{shape} missing");
        }
    }

    #[test]
    fn unsupported_shapes_are_never_members() {
        let set = ShapeSet::ALL.with(Shape::Unsupported(Unsupported::Behavior));
        assert_eq!(set, ShapeSet::ALL);
        assert!(!set.contains(Shape::Unsupported(Unsupported::Channel)));
    }

    #[test]
    fn without_removes_a_single_shape() {
        let set = ShapeSet::ALL.without(Shape::Mapping);
        assert!(!set.contains(Shape::Mapping));
        assert_eq!(set.iter().count(), 5);
    }

    #[test]
    fn collects_from_shapes() {
        let set: ShapeSet = [Shape::Atomic, Shape::Record].into_iter().collect();
        assert!(set.contains(Shape::Atomic));
        assert!(set.contains(Shape::Record));
        assert!(!set.contains(Shape::Reference));
        assert_eq!(format!("{set:?}"), "{Atomic, Record}");
    }

    #[test]
    fn display_names_unsupported_kind() {
        assert_eq!(Shape::Unsupported(Unsupported::RawPointer).to_string(), "raw pointer");
        assert_eq!(Shape::FixedSequence.to_string(), "fixed-size sequence");
    }
}
