//! Element types usable with [`FixedVector`].
//!
//! `scalar * vector` cannot be implemented once for every `T` because of the
//! orphan rule, so the left-hand forms are generated per concrete scalar.
//! With one impl per scalar, `2 * v` needs the element type of `v` to be
//! known: `FixedVector::<i32, 3>::from([1, 2, 3])` rather than a bare
//! literal array.

use std::ops::Mul;

use num_dual::{Dual64, DualNum};

use crate::FixedVector;

/// Square root used by [`FixedVector::norm`].
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

macro_rules! impl_float_sqrt {
    ($($t:ty),*) => {
        $(
            impl Sqrt for $t {
                #[inline]
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }
            }
        )*
    };
}

// Truncating integer root; panics on negative input like `isqrt`.
macro_rules! impl_int_sqrt {
    ($($t:ty),*) => {
        $(
            impl Sqrt for $t {
                #[inline]
                fn sqrt(self) -> Self {
                    self.isqrt()
                }
            }
        )*
    };
}

impl_float_sqrt!(f32, f64);
impl_int_sqrt!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl Sqrt for Dual64 {
    #[inline]
    fn sqrt(self) -> Self {
        DualNum::sqrt(&self)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<FixedVector<$t, N>> for $t {
                type Output = FixedVector<$t, N>;

                #[inline]
                fn mul(self, rhs: FixedVector<$t, N>) -> Self::Output {
                    rhs.scale(self)
                }
            }

            impl<const N: usize> Mul<&FixedVector<$t, N>> for $t {
                type Output = FixedVector<$t, N>;

                #[inline]
                fn mul(self, rhs: &FixedVector<$t, N>) -> Self::Output {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, Dual64
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_sqrt_truncates() {
        assert_eq!(Sqrt::sqrt(169i32), 13);
        assert_eq!(Sqrt::sqrt(170u64), 13);
        assert_eq!(Sqrt::sqrt(8u8), 2);
    }

    #[test]
    fn float_sqrt_is_native() {
        assert_eq!(Sqrt::sqrt(2.0f64), 2.0f64.sqrt());
        assert_eq!(Sqrt::sqrt(0.25f32), 0.5);
    }

    #[test]
    fn dual_sqrt_carries_derivative() {
        // d/dx sqrt(x) at 4 = 1/4
        let x = Dual64::new(4.0, 1.0);
        let r = Sqrt::sqrt(x);
        assert_eq!(r.re, 2.0);
        assert_eq!(r.eps, 0.25);
    }

    #[test]
    fn left_and_right_scalar_agree() {
        let v = FixedVector::from([1.0f32, -2.0, 0.5]);
        assert_eq!(3.0 * v, v * 3.0);
        assert_eq!(3.0 * &v, &v * 3.0);
    }
}
