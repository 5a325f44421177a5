//! The copy-and-mask engine.
//!
//! - [`Masker`]: an immutable engine instance (configuration plus dispatch
//!   table). Cheap to share; the default one is a `static`.
//! - [`Copier`]: the state of one top-level call. It owns the identity
//!   registry, so two calls never observe each other's copies.
//!
//! Every value, at every depth, goes through [`Copier::copy`]: classify, run
//! the shape handler, then run the hook invoker.

mod handlers;

use tracing::{debug, trace, trace_span};

pub use handlers::{RecordCopier, SharedPointer};

use crate::{
    config::MaskerConfig,
    error::MaskError,
    hooks,
    registry::IdentityRegistry,
    shape::{Shape, Unsupported},
    traits::Maskable,
};

/// An engine instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Masker {
    config: MaskerConfig,
}

impl Masker {
    /// The engine behind [`crate::mask`] and [`crate::must`].
    pub const DEFAULT: Masker = Masker::new(MaskerConfig::DEFAULT);

    pub const fn new(config: MaskerConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &MaskerConfig {
        &self.config
    }

    /// Deep-copies `value` and masks the copy.
    pub fn mask<T: Maskable>(&self, value: &T) -> Result<T, MaskError> {
        let span = trace_span!("mask", type_name = value.type_name());
        let _entered = span.enter();

        let mut copier = Copier::new(self);
        copier.copy(value).inspect_err(|err| {
            debug!(error = %err.report(), "mask failed");
        })
    }

    /// Like [`Masker::mask`], panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics with the full error chain if the value cannot be copied.
    pub fn must<T: Maskable>(&self, value: &T) -> T {
        match self.mask(value) {
            Ok(copy) => copy,
            Err(err) => panic!("deepmask: {}", err.report()),
        }
    }
}

/// Per-call engine state.
///
/// Handed to [`Maskable::copy_structure`]; implementations call one of the
/// shape handlers on it and copy child values with [`Copier::copy`].
pub struct Copier<'m> {
    masker: &'m Masker,
    registry: IdentityRegistry,
    depth: usize,
}

impl<'m> Copier<'m> {
    fn new(masker: &'m Masker) -> Self {
        Self {
            masker,
            registry: IdentityRegistry::new(),
            depth: 0,
        }
    }

    /// Copies and masks one value. The single entry point for every level of
    /// the traversal.
    pub fn copy<T: Maskable>(&mut self, value: &T) -> Result<T, MaskError> {
        let Some(shape) = value.shape() else {
            trace!(type_name = value.type_name(), "absent value");
            return value.copy_structure(self);
        };
        self.check_dispatch(value, shape)?;
        trace!(type_name = value.type_name(), %shape, depth = self.depth, "copying");

        if let Some(limit) = self.masker.config.max_depth {
            if self.depth >= limit {
                return Err(MaskError::DepthExceeded { limit });
            }
        }
        self.depth += 1;
        let copy = value.copy_structure(self);
        self.depth -= 1;

        hooks::invoke(copy?, shape, &mut self.registry)
    }

    fn check_dispatch<T: Maskable>(&self, value: &T, shape: Shape) -> Result<(), MaskError> {
        let kind = match shape {
            Shape::Unsupported(kind) => kind,
            shape if !self.masker.config.shapes.contains(shape) => Unsupported::Unregistered,
            _ => return Ok(()),
        };
        Err(MaskError::UnsupportedKind {
            type_name: value.type_name(),
            kind,
        })
    }

    /// The error to return from `copy_structure` of an unsupported type.
    pub fn unsupported<T: Maskable>(&self, value: &T) -> MaskError {
        let kind = match value.shape() {
            Some(Shape::Unsupported(kind)) => kind,
            _ => Unsupported::Unregistered,
        };
        MaskError::UnsupportedKind {
            type_name: value.type_name(),
            kind,
        }
    }

    /// The engine this call runs on.
    pub const fn masker(&self) -> &'m Masker {
        self.masker
    }
}
