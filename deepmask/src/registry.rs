//! Call-scoped identity registry.
//!
//! Maps the identity of every shared source pointer to the copy produced for
//! it. A second visit to the same source pointer (a shared reference or a
//! cycle) returns the earlier copy instead of copying again.
//!
//! The registry also tracks which copies are still being populated (a cycle
//! back-edge reaches them before their pointee is stored) and which copies
//! have had their in-place hook run, so each copy is hooked exactly once and
//! only once it is complete.

use std::{
    any::{Any, TypeId},
    collections::{HashMap, HashSet},
};

/// Identity of a pointee: its address plus the pointer type.
///
/// The type is part of the key so two pointer types can never be confused,
/// even if an allocator reuses an address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Identity {
    address: usize,
    type_id: TypeId,
}

impl Identity {
    pub(crate) fn of<P: 'static, T>(pointee: *const T) -> Self {
        Self {
            address: pointee.cast::<()>() as usize,
            type_id: TypeId::of::<P>(),
        }
    }
}

#[derive(Default)]
pub(crate) struct IdentityRegistry {
    copies: HashMap<Identity, Box<dyn Any>>,
    pending: HashSet<Identity>,
    hooked: HashSet<Identity>,
}

impl IdentityRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The copy already produced for `source`, if any.
    pub(crate) fn lookup<P: Clone + 'static>(&self, source: Identity) -> Option<P> {
        self.copies
            .get(&source)
            .and_then(|copy| copy.downcast_ref::<P>())
            .cloned()
    }

    /// Records `copy` for `source` before its pointee is populated.
    pub(crate) fn register<P: 'static>(&mut self, source: Identity, copy: P, copy_id: Identity) {
        self.pending.insert(copy_id);
        self.copies.insert(source, Box::new(copy));
    }

    /// Marks a registered copy as fully populated.
    pub(crate) fn complete(&mut self, copy_id: Identity) {
        self.pending.remove(&copy_id);
    }

    /// Returns `true` the first time a complete copy asks to run its hook.
    pub(crate) fn claim_hook(&mut self, copy_id: Identity) -> bool {
        !self.pending.contains(&copy_id) && self.hooked.insert(copy_id)
    }

    pub(crate) fn len(&self) -> usize {
        self.copies.len()
    }
}
