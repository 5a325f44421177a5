//! Cycle-safe deep copies with masking hooks.
//!
//! `deepmask` produces a structurally independent copy of a value graph and,
//! while copying, lets types replace or edit the sensitive parts of the copy.
//! The original is only ever borrowed, so it is never touched.
//!
//! The crate is built around three pieces:
//! - **Shapes**: every [`Maskable`] type classifies itself as one of six
//!   [`Shape`]s (atomic, fixed-size sequence, dynamic sequence, mapping,
//!   reference, record) or as unsupported.
//! - **The copier**: a per-call engine that copies each shape with its own
//!   handler and tracks shared references, so aliasing and cycles in the
//!   source are reproduced among the copies.
//! - **Hooks**: [`MaskInPlace`] runs on a record reached through a reference
//!   and edits the copy in place; [`MaskValue`] runs on any by-value copy and
//!   replaces it. Hooks run post-order, so a container is masked only after
//!   everything it contains.
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//!
//! use deepmask::{MaskInPlace, Maskable};
//!
//! #[derive(Default, Maskable)]
//! #[mask(in_place)]
//! struct Credentials {
//!     pub user: String,
//!     pub password: String,
//! }
//!
//! impl MaskInPlace for Credentials {
//!     fn mask_in_place(&mut self) {
//!         self.password = "MASKED".into();
//!     }
//! }
//!
//! let original = Rc::new(RefCell::new(Credentials {
//!     user: "alice".into(),
//!     password: "hunter2".into(),
//! }));
//! let masked = deepmask::must(&original);
//!
//! assert_eq!(masked.borrow().user, "alice");
//! assert_eq!(masked.borrow().password, "MASKED");
//! assert_eq!(original.borrow().password, "hunter2");
//! ```
//!
//! Only `pub` fields of a derived record are copied. Non-public fields are
//! left at their `Default` value in the copy; this is deliberate, so private
//! state never leaks into a copy meant for logging.
//!
//! What this crate does not do:
//! - serialize values or perform any I/O
//! - copy functions, channels or raw pointers (these fail with
//!   [`MaskError::UnsupportedKind`])

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use deepmask_derive::Maskable;

#[allow(unused_extern_crates)]
extern crate self as deepmask;

// Module declarations
mod config;
mod dynamic;
mod engine;
mod error;
mod hooks;
mod impls;
mod registry;
mod shape;
mod traits;

// Re-exports
pub use config::MaskerConfig;
pub use dynamic::{Dynamic, ErasedMaskable};
pub use engine::{Copier, Masker, RecordCopier, SharedPointer};
pub use error::{EntryPart, MaskError};
pub use hooks::{Hooks, MaskInPlace, MaskValue};
#[doc(hidden)]
pub use registry::Identity;
pub use shape::{Shape, ShapeSet, Unsupported};
#[doc(hidden)]
pub use traits::Referent;
pub use traits::Maskable;

/// Deep-copies `value` and applies every applicable mask hook to the copy.
///
/// Uses the default engine ([`Masker::DEFAULT`]). On failure nothing of the
/// partial copy is returned.
pub fn mask<T: Maskable>(value: &T) -> Result<T, MaskError> {
    Masker::DEFAULT.mask(value)
}

/// Like [`mask`], but treats any failure as a programming error.
///
/// # Panics
///
/// Panics with the full error chain if the value cannot be copied, e.g. when
/// the graph contains a function pointer or a channel.
pub fn must<T: Maskable>(value: &T) -> T {
    Masker::DEFAULT.must(value)
}
