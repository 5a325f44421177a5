//! Engine configuration.

use crate::shape::{Shape, ShapeSet};

/// Settings for a [`crate::Masker`].
///
/// The defaults copy every supported shape with no depth limit, which is what
/// [`crate::mask`] and [`crate::must`] use.
#[cfg_attr(
    feature = "serde",
    doc = r##"
With the `serde` feature the config can be loaded from any serde format:

```
use deepmask::{Masker, MaskerConfig, Shape};

let config: MaskerConfig = serde_json::from_str(
    r#"{ "max_depth": 64, "shapes": ["atomic", "record", "reference"] }"#,
)?;
assert_eq!(config.max_depth, Some(64));
assert!(!config.shapes.contains(Shape::Mapping));

let masker = Masker::new(config);
assert_eq!(masker.mask(&7_u8)?, 7);
assert!(masker.mask(&vec![7_u8]).is_err());
# Ok::<(), Box<dyn std::error::Error>>(())
```
"##
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct MaskerConfig {
    /// Maximum nesting depth before the copy fails with
    /// [`crate::MaskError::DepthExceeded`]. `None` means unbounded; very deep
    /// graphs can then exhaust the stack.
    pub max_depth: Option<usize>,
    /// Shapes that have a registered handler. Any other shape fails with
    /// [`crate::Unsupported::Unregistered`].
    pub shapes: ShapeSet,
}

impl MaskerConfig {
    pub const DEFAULT: Self = Self {
        max_depth: None,
        shapes: ShapeSet::ALL,
    };

    #[must_use]
    pub const fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    #[must_use]
    pub const fn without_shape(mut self, shape: Shape) -> Self {
        self.shapes = self.shapes.without(shape);
        self
    }

    #[must_use]
    pub const fn with_shapes(mut self, shapes: ShapeSet) -> Self {
        self.shapes = shapes;
        self
    }
}

impl Default for MaskerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_handles_every_shape_without_limit() {
        let config = MaskerConfig::default();
        assert_eq!(config.max_depth, None);
        assert_eq!(config.shapes, ShapeSet::ALL);
    }

    #[test]
    fn builders_compose() {
        let config = MaskerConfig::DEFAULT
            .with_max_depth(8)
            .without_shape(Shape::Mapping);
        assert_eq!(config.max_depth, Some(8));
        assert!(!config.shapes.contains(Shape::Mapping));
        assert!(config.shapes.contains(Shape::Record));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_from_json() {
        let config: MaskerConfig =
            serde_json::from_str(r#"{ "max_depth": 64, "shapes": ["atomic", "record"] }"#)
                .unwrap();
        assert_eq!(config.max_depth, Some(64));
        assert!(config.shapes.contains(Shape::Atomic));
        assert!(config.shapes.contains(Shape::Record));
        assert!(!config.shapes.contains(Shape::Reference));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: MaskerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MaskerConfig::DEFAULT);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<MaskerConfig>(r#"{ "depth": 3 }"#);
        assert!(result.is_err());
    }
}
