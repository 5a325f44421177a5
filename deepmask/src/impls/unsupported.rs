//! Types the engine refuses to copy.
//!
//! They implement `Maskable` only so they can appear in a value graph; any
//! attempt to copy one fails with [`MaskError::UnsupportedKind`].
//!
//! Function pointers are covered up to four arguments, safe or `unsafe`, with
//! the Rust or the C ABI. Pointers with borrowed arguments (`fn(&str)` is
//! `for<'a> fn(&'a str)`) are a separate higher-ranked type for every lifetime
//! shape and are not implemented, so a record holding one does not compile.

use std::{
    ptr::NonNull,
    sync::mpsc::{Receiver, Sender, SyncSender},
};

use crate::{
    engine::Copier,
    error::MaskError,
    shape::{Shape, Unsupported},
    traits::Maskable,
};

macro_rules! impl_maskable_unsupported {
    ($kind:ident => $(impl[$($generics:tt)*] $ty:ty;)+) => {
        $(
            impl<$($generics)*> Maskable for $ty {
                fn shape(&self) -> Option<Shape> {
                    Some(Shape::Unsupported(Unsupported::$kind))
                }

                fn copy_structure(&self, copier: &mut Copier<'_>) -> Result<Self, MaskError> {
                    Err(copier.unsupported(self))
                }
            }
        )+
    };
}

macro_rules! impl_maskable_fn_pointers {
    ($($args:ident),*) => {
        impl_maskable_unsupported!(Behavior =>
            impl[R, $($args),*] fn($($args),*) -> R;
            impl[R, $($args),*] unsafe fn($($args),*) -> R;
            impl[R, $($args),*] extern "C" fn($($args),*) -> R;
            impl[R, $($args),*] unsafe extern "C" fn($($args),*) -> R;
        );
    };
}

impl_maskable_fn_pointers!();
impl_maskable_fn_pointers!(A);
impl_maskable_fn_pointers!(A, B);
impl_maskable_fn_pointers!(A, B, C);
impl_maskable_fn_pointers!(A, B, C, D);

// Channel endpoints
impl_maskable_unsupported!(Channel =>
    impl[T] Sender<T>;
    impl[T] SyncSender<T>;
    impl[T] Receiver<T>;
);

// Raw pointers
impl_maskable_unsupported!(RawPointer =>
    impl[T: ?Sized] *const T;
    impl[T: ?Sized] *mut T;
    impl[T: ?Sized] NonNull<T>;
);
