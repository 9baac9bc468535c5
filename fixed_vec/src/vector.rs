use std::array;
use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::slice::{Iter, IterMut};

use log::debug;
use nalgebra::{SVector, Scalar};
use num_traits::Zero;

use crate::error::{Error, Result};
use crate::scalar::Sqrt;

/// A vector of exactly `N` elements of type `T`, stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedVector<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> FixedVector<T, N> {
    const NON_EMPTY: () = assert!(N > 0, "FixedVector dimension must be positive");

    pub const DIM: usize = N;

    pub const fn from_array(data: [T; N]) -> Self {
        let () = Self::NON_EMPTY;
        Self { data }
    }

    pub const fn dim(&self) -> usize {
        N
    }

    pub fn get(&self, i: usize) -> &T {
        debug_assert!(i < N, "index {i} out of range for dimension {N}");
        &self.data[i]
    }

    pub fn set(&mut self, i: usize, value: T) {
        debug_assert!(i < N, "index {i} out of range for dimension {N}");
        self.data[i] = value;
    }

    /// Overwrites every element with the matching element of `rhs` and
    /// returns `self`, so assignments can be chained:
    /// `c.assign(b.assign(&a))`.
    pub fn assign(&mut self, rhs: &Self) -> &mut Self
    where
        T: Clone,
    {
        self.data.clone_from(&rhs.data);
        self
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_array(self) -> [T; N] {
        self.data
    }

    pub fn map<U, F>(self, f: F) -> FixedVector<U, N>
    where
        F: FnMut(T) -> U,
    {
        FixedVector::from_array(self.data.map(f))
    }
}

impl<T: Zero, const N: usize> FixedVector<T, N> {
    pub fn zeros() -> Self {
        Self::from_array(array::from_fn(|_| T::zero()))
    }

    /// Copies up to `N` values from `values` and fills any remaining slots
    /// with zero.
    pub fn from_slice_padded(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_array(array::from_fn(|i| {
            values.get(i).cloned().unwrap_or_else(T::zero)
        }))
    }
}

impl<T: Clone, const N: usize> FixedVector<T, N> {
    /// Copies the first `N` values of `values`.
    ///
    /// Fails with [`Error::TooFewValues`] when `values` is shorter than `N`.
    /// Values past the first `N` are ignored.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        if values.len() < N {
            return Err(Error::TooFewValues {
                expected: N,
                actual: values.len(),
            });
        }
        if values.len() > N {
            debug!(
                "Ignoring {} trailing value(s) past dimension {N}",
                values.len() - N
            );
        }
        Ok(Self::from_array(array::from_fn(|i| values[i].clone())))
    }
}

impl<T: Scalar, const N: usize> FixedVector<T, N> {
    pub fn to_svector(&self) -> SVector<T, N> {
        SVector::from(self.data.clone())
    }

    pub fn from_svector(v: &SVector<T, N>) -> Self {
        Self::from_array(array::from_fn(|i| v[i].clone()))
    }
}

impl<T, const N: usize> FixedVector<T, N>
where
    T: Copy + Mul<Output = T>,
{
    /// Multiplies every element by `scalar`, as `scalar * v[i]`.
    ///
    /// The left-hand form `k * v` is only resolvable once the element type
    /// is fixed, e.g. `FixedVector::<f64, 2>::from([1.0, 2.0])`.
    pub fn scale(&self, scalar: T) -> Self {
        Self::from_array(array::from_fn(|i| scalar * self.data[i]))
    }
}

impl<T, const N: usize> FixedVector<T, N>
where
    T: Copy + Zero + Mul<Output = T>,
{
    pub fn dot(&self, rhs: &Self) -> T {
        self.data
            .iter()
            .zip(rhs.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean length. Integer element types truncate the root.
    pub fn norm(&self) -> T
    where
        T: Sqrt,
    {
        self.norm_squared().sqrt()
    }
}

pub fn dot<T, const N: usize>(u: &FixedVector<T, N>, v: &FixedVector<T, N>) -> T
where
    T: Copy + Zero + Mul<Output = T>,
{
    u.dot(v)
}

pub fn norm<T, const N: usize>(v: &FixedVector<T, N>) -> T
where
    T: Copy + Zero + Mul<Output = T> + Sqrt,
{
    v.norm()
}

impl<T: Zero, const N: usize> Default for FixedVector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedVector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T, const N: usize> From<FixedVector<T, N>> for [T; N] {
    fn from(v: FixedVector<T, N>) -> Self {
        v.data
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for FixedVector<T, N> {
    type Error = Error;

    fn try_from(values: &[T]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl<T: Scalar, const N: usize> From<SVector<T, N>> for FixedVector<T, N> {
    fn from(v: SVector<T, N>) -> Self {
        Self::from_svector(&v)
    }
}

impl<T: Scalar, const N: usize> From<FixedVector<T, N>> for SVector<T, N> {
    fn from(v: FixedVector<T, N>) -> Self {
        v.to_svector()
    }
}

impl<T, const N: usize> Index<usize> for FixedVector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &Self::Output {
        self.get(i)
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedVector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        debug_assert!(i < N, "index {i} out of range for dimension {N}");
        &mut self.data[i]
    }
}

impl<T, const N: usize> IntoIterator for FixedVector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedVector<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T: Copy + Add<Output = T>, const N: usize> Add for FixedVector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_array(array::from_fn(|i| self.data[i] + rhs.data[i]))
    }
}

impl<'b, T: Copy + Add<Output = T>, const N: usize> Add<&'b FixedVector<T, N>>
    for &FixedVector<T, N>
{
    type Output = FixedVector<T, N>;

    fn add(self, rhs: &'b FixedVector<T, N>) -> FixedVector<T, N> {
        *self + *rhs
    }
}

impl<T: Copy + Sub<Output = T>, const N: usize> Sub for FixedVector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_array(array::from_fn(|i| self.data[i] - rhs.data[i]))
    }
}

impl<'b, T: Copy + Sub<Output = T>, const N: usize> Sub<&'b FixedVector<T, N>>
    for &FixedVector<T, N>
{
    type Output = FixedVector<T, N>;

    fn sub(self, rhs: &'b FixedVector<T, N>) -> FixedVector<T, N> {
        *self - *rhs
    }
}

impl<T: Neg<Output = T>, const N: usize> Neg for FixedVector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

impl<T: AddAssign + Copy, const N: usize> AddAssign for FixedVector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.data.iter_mut().zip(rhs.data) {
            *lhs += rhs;
        }
    }
}

impl<T: SubAssign + Copy, const N: usize> SubAssign for FixedVector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.data.iter_mut().zip(rhs.data) {
            *lhs -= rhs;
        }
    }
}

// `scalar * v` needs one impl per concrete scalar (orphan rule), see `scalar.rs`.
impl<T: Copy + Mul<Output = T>, const N: usize> Mul<T> for FixedVector<T, N> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        self.scale(scalar)
    }
}

impl<T: Copy + Mul<Output = T>, const N: usize> Mul<T> for &FixedVector<T, N> {
    type Output = FixedVector<T, N>;

    fn mul(self, scalar: T) -> FixedVector<T, N> {
        self.scale(scalar)
    }
}

impl<T: Copy + Mul<Output = T>, const N: usize> MulAssign<T> for FixedVector<T, N> {
    fn mul_assign(&mut self, scalar: T) {
        for x in self.data.iter_mut() {
            *x = scalar * *x;
        }
    }
}

/// Renders as `[ e0, e1, ..., eN ]`. Formatter flags apply to each element.
impl<T: fmt::Display, const N: usize> fmt::Display for FixedVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for (i, elem) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(" ]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_is_default() {
        let v: FixedVector<i32, 5> = FixedVector::default();
        assert_eq!(v, FixedVector::zeros());
        assert!(v.iter().all(|&x| x == 0));
    }

    #[test]
    fn dim_matches_const() {
        let v = FixedVector::<f32, 7>::zeros();
        assert_eq!(v.dim(), 7);
        assert_eq!(FixedVector::<f32, 7>::DIM, 7);
    }

    #[test]
    fn from_slice_rejects_short_input() {
        let err = FixedVector::<i32, 4>::from_slice(&[1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            Error::TooFewValues {
                expected: 4,
                actual: 3
            }
        );
        assert_eq!(err.to_string(), "Expected at least 4 values, got 3");
    }

    #[test]
    fn from_slice_ignores_excess() {
        let v = FixedVector::<i32, 3>::from_slice(&[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(v.into_array(), [1, 2, 3]);
    }

    #[test]
    fn from_slice_padded_zero_fills() {
        let v = FixedVector::<i32, 4>::from_slice_padded(&[7, 8]);
        assert_eq!(v.into_array(), [7, 8, 0, 0]);
    }

    #[test]
    fn assign_chains() {
        let a = FixedVector::from([1, 2, 3]);
        let mut b = FixedVector::zeros();
        let mut c = FixedVector::zeros();
        c.assign(b.assign(&a));
        assert_eq!(b, a);
        assert_eq!(c, a);
    }

    #[test]
    fn mul_assign_scales_in_place() {
        let mut v = FixedVector::from([1.5, -2.0]);
        v *= 2.0;
        assert_eq!(v.into_array(), [3.0, -4.0]);
    }

    #[test]
    fn neg_and_sub() {
        let a = FixedVector::from([1, -2, 3]);
        let b = FixedVector::from([4, 5, 6]);
        assert_eq!((-a).into_array(), [-1, 2, -3]);
        assert_eq!((b - a).into_array(), [3, 7, 3]);
        assert_eq!((&b - &a).into_array(), [3, 7, 3]);
    }

    #[test]
    fn display_has_no_trailing_separator() {
        assert_eq!(FixedVector::from([1, 2, 3]).to_string(), "[ 1, 2, 3 ]");
        assert_eq!(FixedVector::from([42]).to_string(), "[ 42 ]");
    }

    #[test]
    fn display_forwards_precision() {
        let v = FixedVector::from([1.0, 2.25, -0.5]);
        assert_eq!(format!("{v:.2}"), "[ 1.00, 2.25, -0.50 ]");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn get_out_of_range_panics() {
        let v = FixedVector::<i32, 3>::zeros();
        let _ = v.get(3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn index_mut_out_of_range_panics() {
        let mut v = FixedVector::<i32, 3>::zeros();
        v[5] = 1;
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn set_out_of_range_panics() {
        let mut v = FixedVector::<i32, 3>::zeros();
        v.set(3, 7);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn index_out_of_range_panics() {
        let v = FixedVector::<i32, 3>::zeros();
        let _ = v[3];
    }
}
