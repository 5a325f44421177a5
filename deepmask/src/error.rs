//! Errors raised while copying and masking.
//!
//! Positional variants (`Element`, `Field`, `Entry`, `Referent`) wrap a deeper
//! failure as it bubbles up, so the final error reads as a path from the
//! top-level value down to the offending one. Use [`MaskError::report`] for
//! the whole chain and [`MaskError::root_cause`] for the innermost error.

use std::fmt;

use thiserror::Error;

use crate::shape::{Shape, Unsupported};

/// Which half of a map entry failed to copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryPart {
    Key,
    Value,
}

impl fmt::Display for EntryPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntryPart::Key => "key",
            EntryPart::Value => "value",
        })
    }
}

#[derive(Debug, Error)]
pub enum MaskError {
    #[error("unable to make a deep copy of `{type_name}`: {kind} values are not supported")]
    UnsupportedKind {
        type_name: &'static str,
        kind: Unsupported,
    },

    #[error("`{type_name}` was passed to the {expected} handler but is {}", describe(.found))]
    ShapeMismatch {
        type_name: &'static str,
        expected: Shape,
        found: Option<Shape>,
    },

    #[error("failed to copy element {index} of `{type_name}`")]
    Element {
        type_name: &'static str,
        index: usize,
        source: Box<MaskError>,
    },

    #[error("failed to copy field `{field}` of `{type_name}`")]
    Field {
        type_name: &'static str,
        field: &'static str,
        source: Box<MaskError>,
    },

    #[error("failed to copy the {part} of entry {key} in `{type_name}`")]
    Entry {
        type_name: &'static str,
        key: String,
        part: EntryPart,
        source: Box<MaskError>,
    },

    #[error("failed to copy the value behind `{type_name}`")]
    Referent {
        type_name: &'static str,
        source: Box<MaskError>,
    },

    #[error("`{type_name}` is exclusively borrowed elsewhere")]
    ReferentBusy { type_name: &'static str },

    #[error("value nesting exceeds the configured depth limit of {limit}")]
    DepthExceeded { limit: usize },
}

fn describe(found: &Option<Shape>) -> String {
    match found {
        Some(shape) => format!("classified as {shape}"),
        None => "an absent value".to_string(),
    }
}

impl MaskError {
    /// The error wrapped by a positional variant, if any.
    pub fn inner(&self) -> Option<&MaskError> {
        match self {
            MaskError::Element { source, .. }
            | MaskError::Field { source, .. }
            | MaskError::Entry { source, .. }
            | MaskError::Referent { source, .. } => Some(source),
            _ => None,
        }
    }

    /// The innermost error, stripped of positional context.
    pub fn root_cause(&self) -> &MaskError {
        let mut current = self;
        while let Some(inner) = current.inner() {
            current = inner;
        }
        current
    }

    /// The full chain, outermost first, joined by `": "`.
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut current = self;
        while let Some(inner) = current.inner() {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            current = inner;
        }
        message
    }

    pub(crate) fn element(type_name: &'static str, index: usize, source: MaskError) -> Self {
        MaskError::Element {
            type_name,
            index,
            source: Box::new(source),
        }
    }

    pub(crate) fn field(type_name: &'static str, field: &'static str, source: MaskError) -> Self {
        MaskError::Field {
            type_name,
            field,
            source: Box::new(source),
        }
    }

    pub(crate) fn entry(
        type_name: &'static str,
        key: String,
        part: EntryPart,
        source: MaskError,
    ) -> Self {
        MaskError::Entry {
            type_name,
            key,
            part,
            source: Box::new(source),
        }
    }

    pub(crate) fn referent(type_name: &'static str, source: MaskError) -> Self {
        MaskError::Referent {
            type_name,
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    fn unsupported() -> MaskError {
        MaskError::UnsupportedKind {
            type_name: "fn()",
            kind: Unsupported::Behavior,
        }
    }

    #[test]
    fn report_walks_the_whole_chain() {
        let err = MaskError::field(
            "Config",
            "hooks",
            MaskError::element("Vec<fn()>", 2, unsupported()),
        );
        assert_eq!(
            err.report(),
            "failed to copy field `hooks` of `Config`: \
             failed to copy element 2 of `Vec<fn()>`: \
             unable to make a deep copy of `fn()`: behavior values are not supported"
        );
    }

    #[test]
    fn root_cause_skips_positional_wrappers() {
        let err = MaskError::referent(
            "Rc<RefCell<Node>>",
            MaskError::entry("HashMap<String, fn()>", "\"a\"".into(), EntryPart::Value, unsupported()),
        );
        assert!(matches!(
            err.root_cause(),
            MaskError::UnsupportedKind {
                kind: Unsupported::Behavior,
                ..
            }
        ));
    }

    #[test]
    fn positional_variants_expose_their_source() {
        let err = MaskError::element("[fn(); 1]", 0, unsupported());
        let source = err.source().expect("element error should have a source");
        assert!(source.to_string().contains("behavior values are not supported"));
    }

    #[test]
    fn shape_mismatch_mentions_absent_values() {
        let err = MaskError::ShapeMismatch {
            type_name: "Dynamic",
            expected: Shape::Atomic,
            found: None,
        };
        assert_eq!(
            err.to_string(),
            "`Dynamic` was passed to the atomic handler but is an absent value"
        );
    }
}
