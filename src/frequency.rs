//! The numeric element type stored in a [`FenwickTree`](crate::FenwickTree).

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// A signed, additive numeric type that can be stored in a
/// [`FenwickTree`](crate::FenwickTree).
///
/// Implemented for the signed integer primitives and for `f32`/`f64`.
/// Integer overflow follows the usual arithmetic rules of the build profile.
pub trait Frequency:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
{
    const ZERO: Self;

    /// `self - rhs`, clamped to the type's bounds instead of overflowing.
    fn sub_saturating(self, rhs: Self) -> Self;
}

macro_rules! impl_frequency {
    (int: $($ty:ty),*) => {
        $(
            impl Frequency for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn sub_saturating(self, rhs: Self) -> Self {
                    self.saturating_sub(rhs)
                }
            }
        )*
    };
    (float: $($ty:ty),*) => {
        $(
            impl Frequency for $ty {
                const ZERO: Self = 0.0;

                #[inline]
                fn sub_saturating(self, rhs: Self) -> Self {
                    self - rhs
                }
            }
        )*
    };
}

impl_frequency!(int: i8, i16, i32, i64, i128, isize);
impl_frequency!(float: f32, f64);
