//! Summation accumulators for approximate scalar types
//!
//! This module contains the accumulators used to reduce sequences of
//! approximate values. Every accumulator models [`SumReduce`]: a monoid under
//! addition with conversions to and from its scalar type, so that
//! `X::from(a) + X::from(b)` materializes approximately to `a + b`.
//! Different implementations trade speed for accumulated rounding error.

pub mod kbn;
pub mod welford;

use num_traits::Zero;
use std::ops::Add;

/// Trait for accumulators that reduce a sequence of scalars by addition
///
/// `Default` is the additive identity, [`SumReduce::from_value`] maps a
/// scalar into the accumulator and [`SumReduce::value`] maps it back.
pub trait SumReduce: Clone + Default {
    /// The scalar type being summed
    type Value: Copy;

    /// Accumulator holding exactly `x`
    fn from_value(x: Self::Value) -> Self;

    /// Accumulate a single scalar
    fn add_value(&mut self, x: Self::Value);

    /// Fold another accumulator of the same kind into this one
    fn merge(&mut self, other: &Self);

    /// Materialize the accumulated total
    fn value(&self) -> Self::Value;

    /// Left-fold `add_value` over `iter`, returning `self` for chaining
    fn reduce<I>(&mut self, iter: I) -> &mut Self
    where
        I: IntoIterator<Item = Self::Value>,
    {
        for x in iter {
            self.add_value(x);
        }
        self
    }
}

/// Plain running sum with no error compensation
///
/// Worst-case error grows linearly with the number of terms. It exists as
/// the baseline that compensated accumulators are measured against, and so
/// `Welford` can be instantiated without compensation.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct NaiveSum<T> {
    s: T,
}

impl<T> NaiveSum<T>
where
    T: Copy + Zero + Add<Output = T>,
{
    /// Create a naive sum starting at `x`
    pub fn new(x: T) -> Self {
        Self { s: x }
    }
}

impl<T> From<T> for NaiveSum<T> {
    fn from(x: T) -> Self {
        Self { s: x }
    }
}

impl<T> SumReduce for NaiveSum<T>
where
    T: Copy + Default + Zero + Add<Output = T>,
{
    type Value = T;

    fn from_value(x: T) -> Self {
        Self { s: x }
    }

    #[inline]
    fn add_value(&mut self, x: T) {
        self.s = self.s + x;
    }

    fn merge(&mut self, other: &Self) {
        self.s = self.s + other.s;
    }

    #[inline]
    fn value(&self) -> T {
        self.s
    }
}

/// Sum `values` with the accumulator `A`
///
/// # Examples
///
/// ```
/// use homomorphic_ext::accumulator::{sum_with, NaiveSum};
/// use homomorphic_ext::KbnSum;
///
/// let values = [1.0, 1e100, 1.0, -1e100];
/// assert_eq!(sum_with::<KbnSum<f64>, _>(values), 2.0);
/// assert_eq!(sum_with::<NaiveSum<f64>, _>(values), 0.0);
/// ```
pub fn sum_with<A, I>(values: I) -> A::Value
where
    A: SumReduce,
    I: IntoIterator<Item = A::Value>,
{
    let mut acc = A::default();
    acc.reduce(values);
    acc.value()
}

// Re-export key types for convenient access
pub use kbn::KbnSum;
pub use welford::{KbnWelford, NaiveWelford, Welford};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_sum_reduce_and_merge() {
        let mut left = NaiveSum::new(0.0f64);
        left.reduce([1.0, 2.0, 3.0]);

        let mut right = NaiveSum::default();
        right.reduce([4.0, 5.0]);

        left.merge(&right);
        assert_eq!(left.value(), 15.0);
    }

    #[test]
    fn test_sum_with_selects_accumulator() {
        let values = vec![0.1f64; 10];
        let naive = sum_with::<NaiveSum<f64>, _>(values.iter().copied());
        let kbn = sum_with::<KbnSum<f64>, _>(values.iter().copied());

        // 0.1 is not representable; naive summation drifts, compensated does not
        assert_ne!(naive, 1.0);
        assert_eq!(kbn, 1.0);
    }
}
