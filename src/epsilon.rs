//! Tolerance-aware comparison of approximate values
//!
//! Computed values often differ from the mathematical truth because of
//! limited memory, time or measurement precision. When two values are close
//! we assume they may be the same value seen through that error, and the
//! radius of that uncertainty travels with the value as `eps`.
//!
//! Even when `T` is totally ordered, `Epsilon<T>` is only partially ordered:
//! `a` and `b` are equivalent whenever
//! `distance(a.value, b.value) <= max(a.eps, b.eps)`. The relation is not
//! transitive, since tolerances chain: `a ~ b` and `b ~ c` do not imply
//! `a ~ c`. For that reason the relations are named methods rather than
//! `PartialEq`/`PartialOrd` impls.

use crate::config::GeMode;
use crate::error::{NumericError, NumericResult};
use crate::scalar::Distance;

/// Outcome of comparing two tolerance-carrying values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpsilonOrdering {
    /// Distinguishable, and the left value is smaller
    Less,
    /// Within the larger of the two tolerances
    Equivalent,
    /// Distinguishable, and the left value is larger
    Greater,
}

/// A value paired with the radius within which it is indistinguishable
#[derive(Debug, Clone, Copy)]
pub struct Epsilon<T> {
    value: T,
    eps: T,
}

impl<T> Epsilon<T>
where
    T: Copy + PartialOrd + Distance<Output = T>,
{
    /// Wrap `value` with tolerance radius `eps`
    ///
    /// `eps` is expected to be non-negative; see [`Epsilon::try_new`] for a
    /// checked constructor.
    pub fn new(value: T, eps: T) -> Self {
        Self { value, eps }
    }

    /// Wrap `value` with tolerance `eps`, rejecting a negative or NaN radius
    pub fn try_new(value: T, eps: T) -> NumericResult<Self> {
        // a NaN radius fails this check as well
        if !(eps.distance(&eps) <= eps) {
            return Err(NumericError::domain(
                "Epsilon::try_new",
                "tolerance must be non-negative",
            ));
        }
        Ok(Self { value, eps })
    }

    /// The wrapped value
    pub fn value(&self) -> T {
        self.value
    }

    /// The tolerance radius
    pub fn eps(&self) -> T {
        self.eps
    }

    /// The tolerance used when comparing against `other`: the larger radius
    pub fn tolerance_with(&self, other: &Self) -> T {
        if self.eps < other.eps {
            other.eps
        } else {
            self.eps
        }
    }

    /// `distance(a, b) <= max(a.eps, b.eps)`
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.value.distance(&other.value) <= self.tolerance_with(other)
    }

    /// `max(a.eps, b.eps) < distance(a, b)`
    pub fn approx_ne(&self, other: &Self) -> bool {
        self.tolerance_with(other) < self.value.distance(&other.value)
    }

    /// Distinguishable and strictly smaller
    pub fn approx_lt(&self, other: &Self) -> bool {
        self.approx_ne(other) && self.value < other.value
    }

    /// Distinguishable and strictly larger
    pub fn approx_gt(&self, other: &Self) -> bool {
        self.approx_ne(other) && other.value < self.value
    }

    /// Equivalent, or the value is strictly smaller
    pub fn approx_le(&self, other: &Self) -> bool {
        self.approx_eq(other) || self.value < other.value
    }

    /// `>=` in its historical form: `a == b && b.value > a.value`
    ///
    /// This is not the mirror image of [`Epsilon::approx_le`]: it only holds
    /// for equivalent pairs whose right value is strictly larger. Use
    /// [`Epsilon::approx_ge_with`] with [`GeMode::Corrected`] for the
    /// symmetric reading.
    pub fn approx_ge(&self, other: &Self) -> bool {
        self.approx_eq(other) && other.value > self.value
    }

    /// `>=` under an explicit interpretation
    pub fn approx_ge_with(&self, other: &Self, mode: GeMode) -> bool {
        match mode {
            GeMode::Literal => self.approx_ge(other),
            GeMode::Corrected => self.approx_eq(other) || self.approx_gt(other),
        }
    }

    /// Three-way comparison under the shared tolerance
    ///
    /// Returns `None` when the values are unordered, e.g. when one is NaN.
    pub fn compare(&self, other: &Self) -> Option<EpsilonOrdering> {
        if self.approx_eq(other) {
            Some(EpsilonOrdering::Equivalent)
        } else if self.approx_lt(other) {
            Some(EpsilonOrdering::Less)
        } else if self.approx_gt(other) {
            Some(EpsilonOrdering::Greater)
        } else {
            None
        }
    }

    /// Unwrap the value, discarding the tolerance
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Distances between tolerance-carrying values carry the larger tolerance
impl<T> Distance for Epsilon<T>
where
    T: Copy + PartialOrd + Distance<Output = T>,
{
    type Output = Epsilon<T>;

    fn distance(&self, other: &Self) -> Epsilon<T> {
        Epsilon::new(self.value.distance(&other.value), self.tolerance_with(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::distance;

    #[test]
    fn test_equivalence_uses_larger_tolerance() {
        let tight = Epsilon::new(0.0f64, 0.1);
        let loose = Epsilon::new(0.5f64, 1.0);
        assert!(tight.approx_eq(&loose));
        assert!(loose.approx_eq(&tight));
        assert_eq!(tight.tolerance_with(&loose), 1.0);
    }

    #[test]
    fn test_boundary_is_equivalent() {
        let a = Epsilon::new(0.0f64, 0.5);
        let b = Epsilon::new(0.5f64, 0.25);
        assert!(a.approx_eq(&b));
        assert!(!a.approx_ne(&b));
        assert!(!a.approx_lt(&b));
        assert!(a.approx_le(&b));
    }

    #[test]
    fn test_strict_relations() {
        let a = Epsilon::new(1.0f64, 0.1);
        let b = Epsilon::new(2.0f64, 0.1);
        assert!(a.approx_ne(&b));
        assert!(a.approx_lt(&b));
        assert!(b.approx_gt(&a));
        assert!(!a.approx_gt(&b));
        assert_eq!(a.compare(&b), Some(EpsilonOrdering::Less));
        assert_eq!(b.compare(&a), Some(EpsilonOrdering::Greater));
    }

    #[test]
    fn test_lifted_distance() {
        let a = Epsilon::new(1.0f64, 0.25);
        let b = Epsilon::new(4.0f64, 0.5);
        let d = distance(&a, &b);
        assert_eq!(d.value(), 3.0);
        assert_eq!(d.eps(), 0.5);
    }

    #[test]
    fn test_try_new_rejects_negative_tolerance() {
        assert!(Epsilon::try_new(1.0f64, -0.5).is_err());
        assert!(Epsilon::try_new(1.0f64, f64::NAN).is_err());
        assert!(Epsilon::try_new(1.0f64, 0.0).is_ok());
    }

    #[test]
    fn test_nan_is_unordered() {
        let a = Epsilon::new(f64::NAN, 0.1);
        let b = Epsilon::new(1.0f64, 0.1);
        assert_eq!(a.compare(&b), None);
    }
}
