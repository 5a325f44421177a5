//! Atomic `Maskable` implementations for scalar-like types.

use std::{
    borrow::Cow,
    cmp::Ordering,
    marker::PhantomData,
    num::{
        NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    },
    time::{Duration, Instant, SystemTime},
};

use super::impl_maskable_atomic;
use crate::{engine::Copier, error::MaskError, shape::Shape, traits::Maskable};

// =============================================================================
// Scalars and strings
// =============================================================================

impl_maskable_atomic!(String);
impl_maskable_atomic!(&'static str);
impl_maskable_atomic!(Cow<'static, str>);
impl_maskable_atomic!(bool);
impl_maskable_atomic!(char);

// Signed integers
impl_maskable_atomic!(i8);
impl_maskable_atomic!(i16);
impl_maskable_atomic!(i32);
impl_maskable_atomic!(i64);
impl_maskable_atomic!(i128);
impl_maskable_atomic!(isize);

// Unsigned integers
impl_maskable_atomic!(u8);
impl_maskable_atomic!(u16);
impl_maskable_atomic!(u32);
impl_maskable_atomic!(u64);
impl_maskable_atomic!(u128);
impl_maskable_atomic!(usize);

// Floating point
impl_maskable_atomic!(f32);
impl_maskable_atomic!(f64);

// Unit type
impl_maskable_atomic!(());

// =============================================================================
// NonZero integers
// =============================================================================

impl_maskable_atomic!(NonZeroI8);
impl_maskable_atomic!(NonZeroI16);
impl_maskable_atomic!(NonZeroI32);
impl_maskable_atomic!(NonZeroI64);
impl_maskable_atomic!(NonZeroI128);
impl_maskable_atomic!(NonZeroIsize);
impl_maskable_atomic!(NonZeroU8);
impl_maskable_atomic!(NonZeroU16);
impl_maskable_atomic!(NonZeroU32);
impl_maskable_atomic!(NonZeroU64);
impl_maskable_atomic!(NonZeroU128);
impl_maskable_atomic!(NonZeroUsize);

// =============================================================================
// std::time and other std leaves
// =============================================================================

impl_maskable_atomic!(Duration);
impl_maskable_atomic!(Instant);
impl_maskable_atomic!(SystemTime);
impl_maskable_atomic!(Ordering);

impl<T: ?Sized> Maskable for PhantomData<T> {
    fn shape(&self) -> Option<Shape> {
        Some(Shape::Atomic)
    }

    fn copy_structure(&self, copier: &mut Copier<'_>) -> Result<Self, MaskError> {
        copier.atomic(self)
    }
}

// =============================================================================
// Date/time leaves (feature-gated)
// =============================================================================

#[cfg(feature = "chrono")]
mod chrono_atomic {
    use chrono::{
        DateTime, Duration, FixedOffset, Local, Month, NaiveDate, NaiveDateTime, NaiveTime, Utc,
        Weekday,
    };

    use super::impl_maskable_atomic;

    impl_maskable_atomic!(DateTime<Utc>);
    impl_maskable_atomic!(DateTime<Local>);
    impl_maskable_atomic!(DateTime<FixedOffset>);
    impl_maskable_atomic!(NaiveDateTime);
    impl_maskable_atomic!(NaiveDate);
    impl_maskable_atomic!(NaiveTime);
    impl_maskable_atomic!(Duration);
    impl_maskable_atomic!(Month);
    impl_maskable_atomic!(Weekday);
}

#[cfg(feature = "time")]
mod time_atomic {
    use time::{
        Date, Duration, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset, Weekday,
    };

    use super::impl_maskable_atomic;

    impl_maskable_atomic!(OffsetDateTime);
    impl_maskable_atomic!(PrimitiveDateTime);
    impl_maskable_atomic!(Date);
    impl_maskable_atomic!(Time);
    impl_maskable_atomic!(Duration);
    impl_maskable_atomic!(UtcOffset);
    impl_maskable_atomic!(Month);
    impl_maskable_atomic!(Weekday);
}

#[cfg(feature = "uuid")]
mod uuid_atomic {
    use uuid::Uuid;

    use super::impl_maskable_atomic;

    impl_maskable_atomic!(Uuid);
}
