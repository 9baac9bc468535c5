use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use num_traits::Zero;

use crate::{FixedVector, Sqrt};

/// A struct with `N` named fields of type `T`, viewed as a [`FixedVector`].
///
/// Usually derived with `#[derive(NamedFixedVec)]` from `fixed_vec_derive`,
/// which maps fields to indices in declaration order.
pub trait NamedFixedVec<T, const N: usize>:
    Copy
    + Clone
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<T, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
{
    const SIZE: usize = N;

    fn to_fixed(&self) -> FixedVector<T, N>;
    fn from_fixed(v: &FixedVector<T, N>) -> Self;

    fn dot(&self, rhs: &Self) -> T
    where
        T: Copy + Zero + Mul<Output = T>,
    {
        self.to_fixed().dot(&rhs.to_fixed())
    }

    fn norm(&self) -> T
    where
        T: Copy + Zero + Mul<Output = T> + Sqrt,
    {
        self.to_fixed().norm()
    }
}
