//! Kahan-Babuska-Neumaier compensated summation
//!
//! The running total is kept as a pair `(s, c)` where `c` collects the
//! low-order bits lost by each floating point addition into `s`. The
//! materialized value `s + c` has an error bound that is independent of the
//! number of terms, whereas naive summation has a worst case that grows
//! linearly with the number of terms.

use num_traits::Zero;
use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{AddAssign, Sub};

use crate::accumulator::SumReduce;
use crate::scalar::InfinityNorm;

/// Compensated (Neumaier) sum over an approximate scalar type
///
/// Equality and ordering compare the materialized value `s + c`, never the
/// internal pair, so two sums reached by different paths compare equal when
/// they round to the same total.
///
/// # Examples
///
/// ```
/// use homomorphic_ext::KbnSum;
///
/// let mut sum = KbnSum::<f64>::default();
/// sum.reduce([1.0, 1e100, 1.0, -1e100]);
/// assert_eq!(sum.value(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KbnSum<T> {
    /// Running sum
    s: T,
    /// Running compensation
    c: T,
}

impl<T> KbnSum<T>
where
    T: Copy + Zero + Sub<Output = T> + PartialOrd + InfinityNorm,
{
    /// Create a compensated sum starting at `x`
    pub fn new(x: T) -> Self {
        Self { s: x, c: T::zero() }
    }

    /// Reset the running sum to `x`
    ///
    /// Only the running sum is replaced; the compensation term carries over.
    pub fn set(&mut self, x: T) -> &mut Self {
        self.s = x;
        self
    }

    /// Add a single term using the Neumaier correction
    #[inline]
    pub fn add(&mut self, x: T) {
        let t = self.s + x;
        // compare the increment against the running sum, not against c
        if x.abs() < self.s.abs() {
            self.c = self.c + ((self.s - t) + x);
        } else {
            self.c = self.c + ((x - t) + self.s);
        }
        self.s = t;
    }

    /// Fold another compensated sum into this one
    ///
    /// The other sum's `s` is added first, then its `c`, so partial sums of
    /// disjoint blocks can be merged without losing their compensation.
    pub fn merge(&mut self, other: &Self) {
        self.add(other.s);
        self.add(other.c);
    }

    /// Left-fold [`KbnSum::add`] over `iter`
    ///
    /// O(n) time and O(1) auxiliary space. Returns `self` so reductions can be
    /// chained.
    pub fn reduce<I>(&mut self, iter: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        for x in iter {
            self.add(x);
        }
        self
    }

    /// Consume both sums and return their merge
    pub fn combine(mut self, other: &Self) -> Self {
        self.merge(other);
        self
    }

    /// Materialize the sum as `s + c`
    #[inline]
    pub fn value(&self) -> T {
        self.s + self.c
    }

    /// Alias of [`KbnSum::value`]
    #[inline]
    pub fn eval(&self) -> T {
        self.value()
    }

    /// The uncompensated running sum
    pub fn sum_part(&self) -> T {
        self.s
    }

    /// The accumulated compensation term
    pub fn compensation(&self) -> T {
        self.c
    }
}

impl<T> From<T> for KbnSum<T>
where
    T: Copy + Zero + Sub<Output = T> + PartialOrd + InfinityNorm,
{
    fn from(x: T) -> Self {
        Self::new(x)
    }
}

impl<T> SumReduce for KbnSum<T>
where
    T: Copy + Default + Zero + Sub<Output = T> + PartialOrd + InfinityNorm,
{
    type Value = T;

    fn from_value(x: T) -> Self {
        Self::new(x)
    }

    #[inline]
    fn add_value(&mut self, x: T) {
        KbnSum::add(self, x);
    }

    fn merge(&mut self, other: &Self) {
        KbnSum::merge(self, other);
    }

    #[inline]
    fn value(&self) -> T {
        KbnSum::value(self)
    }
}

/// Component-wise magnitude, so a `KbnSum` can itself be summed compensatedly
impl<T> InfinityNorm for KbnSum<T>
where
    T: Copy + InfinityNorm,
{
    fn abs(&self) -> Self {
        Self {
            s: self.s.abs(),
            c: self.c.abs(),
        }
    }
}

impl<T> AddAssign<T> for KbnSum<T>
where
    T: Copy + Zero + Sub<Output = T> + PartialOrd + InfinityNorm,
{
    fn add_assign(&mut self, x: T) {
        self.add(x);
    }
}

impl<T> AddAssign for KbnSum<T>
where
    T: Copy + Zero + Sub<Output = T> + PartialOrd + InfinityNorm,
{
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

impl<T> Extend<T> for KbnSum<T>
where
    T: Copy + Zero + Sub<Output = T> + PartialOrd + InfinityNorm,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.reduce(iter);
    }
}

impl<T> FromIterator<T> for KbnSum<T>
where
    T: Copy + Zero + Sub<Output = T> + PartialOrd + InfinityNorm,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sum = Self::new(T::zero());
        sum.reduce(iter);
        sum
    }
}

impl<T> Sum<T> for KbnSum<T>
where
    T: Copy + Zero + Sub<Output = T> + PartialOrd + InfinityNorm,
{
    fn sum<I: Iterator<Item = T>>(iter: I) -> Self {
        iter.collect()
    }
}

impl<T> PartialEq for KbnSum<T>
where
    T: Copy + Zero + Sub<Output = T> + PartialOrd + InfinityNorm,
{
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl<T> PartialOrd for KbnSum<T>
where
    T: Copy + Zero + Sub<Output = T> + PartialOrd + InfinityNorm,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value().partial_cmp(&other.value())
    }
}

impl<T> PartialEq<T> for KbnSum<T>
where
    T: Copy + Zero + Sub<Output = T> + PartialOrd + InfinityNorm,
{
    fn eq(&self, other: &T) -> bool {
        self.value() == *other
    }
}

impl<T> PartialOrd<T> for KbnSum<T>
where
    T: Copy + Zero + Sub<Output = T> + PartialOrd + InfinityNorm,
{
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.value().partial_cmp(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neumaier_recovers_small_terms() {
        let mut sum = KbnSum::new(0.0f64);
        sum.reduce([1.0, 1e100, 1.0, -1e100]);
        assert_eq!(sum.value(), 2.0);
        assert_eq!(sum.sum_part(), 0.0);
        assert_eq!(sum.compensation(), 2.0);
    }

    #[test]
    fn test_small_increment_branch() {
        // |x| < |s|: the lost bits belong to the increment
        let mut sum = KbnSum::new(1.0f64);
        sum.add(1e-16);
        assert_eq!(sum.sum_part(), 1.0);
        assert_eq!(sum.compensation(), 1e-16);
        assert_eq!(sum.value(), 1.0 + 1e-16);
    }

    #[test]
    fn test_merge_keeps_compensation() {
        let mut left: KbnSum<f64> = [1.0, 1e100].into_iter().collect();
        let right: KbnSum<f64> = [1.0, -1e100].into_iter().collect();
        left += right;
        assert_eq!(left.value(), 2.0);

        let total = KbnSum::new(3.0f64).combine(&KbnSum::new(4.0));
        assert_eq!(total, 7.0f64);
    }

    #[test]
    fn test_set_replaces_running_sum_only() {
        let mut sum = KbnSum::new(1.0f64);
        sum.add(1e-16);
        sum.set(5.0);
        assert_eq!(sum.sum_part(), 5.0);
        assert_eq!(sum.compensation(), 1e-16);
    }

    #[test]
    fn test_comparisons_use_materialized_value() {
        let a = KbnSum { s: 1.0f64, c: 0.5 };
        let b = KbnSum { s: 1.5f64, c: 0.0 };
        assert_eq!(a, b);
        assert!(a < 2.0f64);
        assert!(KbnSum::new(1.0f64) < b);
    }

    #[test]
    fn test_abs_is_component_wise() {
        let sum = KbnSum { s: -2.0f64, c: -0.25 };
        let abs = InfinityNorm::abs(&sum);
        assert_eq!(abs.sum_part(), 2.0);
        assert_eq!(abs.compensation(), 0.25);
    }

    #[test]
    fn test_sum_trait() {
        let total: KbnSum<f32> = vec![0.5f32; 8].into_iter().sum();
        assert_eq!(total.value(), 4.0);
    }
}
