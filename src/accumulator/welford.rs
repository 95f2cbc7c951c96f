//! Online mean and variance (Welford's algorithm)
//!
//! A single pass over the observations maintains the running mean `mu` and
//! the running sum of squared deviations `M2` in O(1) space. Both are held in
//! an accumulator `A`, so instantiating with [`KbnSum`] combines the variance
//! stability of Welford's update with compensated summation of the updates.

use num_traits::{AsPrimitive, Float, Num, One};
use tracing::debug;

use crate::accumulator::{KbnSum, NaiveSum, SumReduce};
use crate::error::{NumericError, NumericResult};

/// Welford accumulator with compensated running sums
pub type KbnWelford<T> = Welford<KbnSum<T>>;

/// Welford accumulator with plain running sums
pub type NaiveWelford<T> = Welford<NaiveSum<T>>;

/// Running mean and variance over a stream of scalars
///
/// The accumulator only grows; observations cannot be removed.
///
/// # Examples
///
/// ```
/// use homomorphic_ext::KbnWelford;
///
/// let acc: KbnWelford<f64> = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter().collect();
/// assert_eq!(acc.size(), 8);
/// assert!((acc.mean().unwrap() - 5.0).abs() < 1e-12);
/// assert!((acc.variance().unwrap() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Welford<A: SumReduce> {
    /// Number of observations
    count: usize,
    /// Running mean
    mu: A,
    /// Running sum of squared deviations from the mean
    m2: A,
}

impl<A> Default for Welford<A>
where
    A: SumReduce,
    A::Value: Num + 'static,
    usize: AsPrimitive<A::Value>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Welford<A>
where
    A: SumReduce,
    A::Value: Num + 'static,
    usize: AsPrimitive<A::Value>,
{
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            mu: A::default(),
            m2: A::default(),
        }
    }

    /// Create an accumulator seeded with one observation
    pub fn with_value(x: A::Value) -> Self {
        let mut acc = Self::new();
        acc.insert(x);
        acc
    }

    /// Insert one observation
    pub fn insert(&mut self, x: A::Value) -> &mut Self {
        self.count += 1;

        let delta = x - self.mu.value();
        self.mu.add_value(delta / self.n());
        // deviation from the updated mean, not a second use of delta
        let delta2 = x - self.mu.value();
        self.m2.add_value(delta * delta2);
        self
    }

    /// Mean of the observations
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::InsufficientSamples`] if nothing was inserted.
    pub fn mean(&self) -> NumericResult<A::Value> {
        self.require("mean", 1)?;
        Ok(self.mu.value())
    }

    /// Population variance, `M2 / count`
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::InsufficientSamples`] if nothing was inserted.
    pub fn variance(&self) -> NumericResult<A::Value> {
        self.require("variance", 1)?;
        Ok(self.m2.value() / self.n())
    }

    /// Sample variance, `M2 / (count - 1)`
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::InsufficientSamples`] for fewer than two
    /// observations, where the divisor would be zero.
    pub fn sample_variance(&self) -> NumericResult<A::Value> {
        self.require("sample_variance", 2)?;
        Ok(self.m2.value() / (self.n() - One::one()))
    }

    /// Sum of the observations, reconstructed as `mean * count`
    ///
    /// Zero for an empty accumulator.
    pub fn sum(&self) -> A::Value {
        self.mu.value() * self.n()
    }

    /// Number of observations
    pub fn size(&self) -> usize {
        self.count
    }

    /// Whether no observation was inserted yet
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `count` converted to the scalar type
    #[inline]
    fn n(&self) -> A::Value {
        self.count.as_()
    }

    fn require(&self, operation: &'static str, required: usize) -> NumericResult<()> {
        if self.count < required {
            debug!(operation, required, actual = self.count, "not enough observations");
            return Err(NumericError::InsufficientSamples {
                operation,
                required,
                actual: self.count,
            });
        }
        Ok(())
    }
}

impl<A> Welford<A>
where
    A: SumReduce,
    A::Value: Float + 'static,
    usize: AsPrimitive<A::Value>,
{
    /// Population standard deviation
    pub fn std_dev(&self) -> NumericResult<A::Value> {
        self.variance().map(Float::sqrt)
    }

    /// Sample standard deviation
    pub fn sample_std_dev(&self) -> NumericResult<A::Value> {
        self.sample_variance().map(Float::sqrt)
    }
}

impl<A> std::ops::AddAssign<A::Value> for Welford<A>
where
    A: SumReduce,
    A::Value: Num + 'static,
    usize: AsPrimitive<A::Value>,
{
    fn add_assign(&mut self, x: A::Value) {
        self.insert(x);
    }
}

impl<A> Extend<A::Value> for Welford<A>
where
    A: SumReduce,
    A::Value: Num + 'static,
    usize: AsPrimitive<A::Value>,
{
    fn extend<I: IntoIterator<Item = A::Value>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<A> FromIterator<A::Value> for Welford<A>
where
    A: SumReduce,
    A::Value: Num + 'static,
    usize: AsPrimitive<A::Value>,
{
    fn from_iter<I: IntoIterator<Item = A::Value>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}
