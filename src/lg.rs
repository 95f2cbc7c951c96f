//! Log-domain numbers
//!
//! `Lg<T>` represents a strictly positive real number `x` by `k = ln(x)`.
//! Multiplication, division and inversion become addition, subtraction and
//! negation of `k`, so a long product accumulates additive error in log space
//! instead of multiplicative error in linear space, and the representable
//! range grows to `(0, e^m]` where `m` is the largest finite `T`.
//!
//! Converting back to `T` applies `exp` and may leave the range of `T`.
//! That is an expected condition, not an error: check
//! [`Lg::would_overflow`] and [`Lg::would_underflow`] (or use
//! [`Lg::checked_value`]) before relying on a materialized value.

use num_traits::{Float, FloatConst};
use std::iter::Product;
use std::ops::{Div, DivAssign, Mul, MulAssign};
use tracing::{debug, trace};

use crate::accumulator::KbnSum;
use crate::error::{NumericError, NumericResult};
use crate::scalar::InfinityNorm;

/// A positive real number stored as its natural logarithm
///
/// Equality and ordering compare the stored logarithms, which preserves the
/// order of the represented values because `exp` is strictly increasing.
///
/// # Examples
///
/// ```
/// use homomorphic_ext::Lg;
///
/// let a = Lg::new(1e200f64).unwrap();
/// let b = Lg::new(1e200f64).unwrap();
/// let product = a * b;
/// assert!(product.would_overflow());
///
/// let back = product / Lg::new(1e300f64).unwrap();
/// assert!(!back.would_overflow());
/// assert!((back.to_value() - 1e100).abs() / 1e100 < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Lg<T> {
    k: T,
}

impl<T: Float> Default for Lg<T> {
    fn default() -> Self {
        Self::one()
    }
}

impl<T: Float> Lg<T> {
    /// Represent `x` in the log domain
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::Domain`] if `x` is zero, negative or NaN.
    pub fn new(x: T) -> NumericResult<Self> {
        if !(x > T::zero()) {
            debug!("rejected non-positive log-domain input");
            return Err(NumericError::domain(
                "Lg::new",
                "value must be strictly positive",
            ));
        }
        Ok(Self { k: x.ln() })
    }

    /// Wrap an already computed logarithm
    pub fn from_log(k: T) -> Self {
        Self { k }
    }

    /// The multiplicative identity, `k = 0`
    pub fn one() -> Self {
        Self { k: T::zero() }
    }

    /// The stored natural logarithm
    pub fn log_value(&self) -> T {
        self.k
    }

    /// Materialize as `exp(k)`; may overflow to infinity or underflow to zero
    pub fn to_value(&self) -> T {
        self.k.exp()
    }

    /// Materialize only when the result lies within the normal range of `T`
    pub fn checked_value(&self) -> Option<T> {
        if self.would_overflow() || self.would_underflow() {
            None
        } else {
            Some(self.to_value())
        }
    }

    /// Whether [`Lg::to_value`] would exceed the largest finite `T`
    pub fn would_overflow(&self) -> bool {
        let overflows = self.k > T::max_value().ln();
        if overflows {
            trace!("log-domain value exceeds the range of the scalar type");
        }
        overflows
    }

    /// Whether [`Lg::to_value`] would fall below the smallest normal `T`
    pub fn would_underflow(&self) -> bool {
        let underflows = self.k < T::min_positive_value().ln();
        if underflows {
            trace!("log-domain value falls below the normal range of the scalar type");
        }
        underflows
    }

    /// Largest finite `T`, the upper edge of [`Lg::would_overflow`]
    pub fn max_value() -> Self {
        Self { k: T::max_value().ln() }
    }

    /// Smallest positive normal `T`, the lower edge of [`Lg::would_underflow`]
    pub fn min_value() -> Self {
        Self { k: T::min_positive_value().ln() }
    }

    /// Positive infinity
    pub fn infinity() -> Self {
        Self { k: T::infinity() }
    }

    /// Multiplicative inverse
    pub fn inv(&self) -> Self {
        Self { k: -self.k }
    }

    /// `self` raised to the power `e`
    pub fn powf(&self, e: T) -> Self {
        Self { k: e * self.k }
    }

    /// Square root
    pub fn sqrt(&self) -> Self {
        self.powf(T::one() / (T::one() + T::one()))
    }

    /// The `r`-th root, `self^(1/r)`
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::Domain`] if `r` is zero.
    pub fn nth_root(&self, r: T) -> NumericResult<Self> {
        if r == T::zero() {
            return Err(NumericError::domain("Lg::nth_root", "root order must be non-zero"));
        }
        Ok(self.powf(T::one() / r))
    }

    /// Natural logarithm of the represented value, in the log domain
    ///
    /// O(1): the result represents `k` itself.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::Domain`] unless the represented value exceeds
    /// one, since only then is its logarithm positive.
    pub fn ln(&self) -> NumericResult<Self> {
        Self::new(self.k).map_err(|_| {
            NumericError::domain("Lg::ln", "logarithm of a value <= 1 is not positive")
        })
    }

    /// Logarithm of the represented value to base `b`, in the log domain
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::Domain`] if `b` is not a valid base or the
    /// logarithm is not positive.
    pub fn log_base(&self, b: T) -> NumericResult<Self> {
        if !(b > T::zero()) || b == T::one() {
            return Err(NumericError::domain(
                "Lg::log_base",
                "base must be positive and different from one",
            ));
        }
        Self::new(self.k / b.ln()).map_err(|_| {
            NumericError::domain("Lg::log_base", "logarithm is not positive")
        })
    }

    /// `exp` of the represented value, re-wrapped in the log domain
    ///
    /// The represented value is materialized through `T` first, so the
    /// result is only meaningful when `!self.would_overflow()`.
    pub fn exp(&self) -> Self {
        if self.would_overflow() {
            debug!("exp materialized an out-of-range log-domain value");
        }
        Self { k: self.to_value() }
    }

    /// Always one: every log-domain value is positive
    pub fn signum(&self) -> T {
        T::one()
    }

    /// Identity: every log-domain value is positive
    pub fn abs(&self) -> Self {
        *self
    }

    /// Not supported in the log domain
    ///
    /// Rounding needs `exp(k)` in linear space, which is exactly the range
    /// this type exists to avoid.
    pub fn floor(&self) -> NumericResult<Self> {
        Err(NumericError::NotImplemented { operation: "floor" })
    }

    /// Not supported in the log domain
    pub fn sin(&self) -> NumericResult<Self> {
        Err(NumericError::NotImplemented { operation: "sin" })
    }

    /// Not supported in the log domain
    pub fn cos(&self) -> NumericResult<Self> {
        Err(NumericError::NotImplemented { operation: "cos" })
    }
}

impl<T: Float + FloatConst> Lg<T> {
    /// Stirling's approximation of the gamma function of the represented value
    ///
    /// `ln Γ(y) ≈ ln √(2π) - ln(y)/2 + y·ln(y) - y`, with `ln(y)` taken
    /// directly from the stored logarithm. Accuracy improves with `y`; the
    /// intended use is arguments whose gamma overflows `T`. Arguments that
    /// themselves overflow `T` map to [`Lg::infinity`].
    pub fn gamma(&self) -> Self {
        if self.would_overflow() {
            return Self::infinity();
        }
        let two = T::one() + T::one();
        let ln_sqrt_2pi = (two * T::PI()).sqrt().ln();
        let y = self.to_value();
        Self {
            k: ln_sqrt_2pi - self.k / two + y * self.k - y,
        }
    }
}

impl<T: Float + InfinityNorm> Lg<T> {
    /// `n!` in the log domain, as the compensated sum of `ln 2 .. ln n`
    ///
    /// Terms are added from smallest to largest.
    pub fn factorial(n: u32) -> Self {
        let mut sum = KbnSum::new(T::zero());
        let mut i = T::one();
        for _ in 2..=n {
            i = i + T::one();
            sum.add(i.ln());
        }
        Self { k: sum.value() }
    }

    /// Product of positive scalars, accumulated in the log domain
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::Domain`] on the first non-positive factor.
    pub fn product_of<I>(factors: I) -> NumericResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut sum = KbnSum::new(T::zero());
        for x in factors {
            sum.add(Self::new(x)?.k);
        }
        Ok(Self { k: sum.value() })
    }
}

impl<T: Float> Mul for Lg<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self { k: self.k + rhs.k }
    }
}

impl<T: Float> Div for Lg<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self { k: self.k - rhs.k }
    }
}

impl<T: Float> MulAssign for Lg<T> {
    fn mul_assign(&mut self, rhs: Self) {
        self.k = self.k + rhs.k;
    }
}

impl<T: Float> DivAssign for Lg<T> {
    fn div_assign(&mut self, rhs: Self) {
        self.k = self.k - rhs.k;
    }
}

/// Compensated summation of the logarithms
impl<T: Float + InfinityNorm> Product for Lg<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        let sum: KbnSum<T> = iter.map(|x| x.k).collect();
        Self { k: sum.value() }
    }
}
