//! Capability traits required of scalar type parameters
//!
//! Each component states its requirements as trait bounds so that a scalar
//! lacking a capability is rejected at compile time.

/// An absolute value that models the infinity norm
///
/// `KbnSum` compares `|x|` against `|s|` to decide which operand lost
/// low-order bits, so `abs` must be monotone in magnitude.
pub trait InfinityNorm {
    /// Magnitude of `self`
    fn abs(&self) -> Self;
}

macro_rules! impl_infinity_norm_float {
    ($($t:ty),*) => {
        $(
            impl InfinityNorm for $t {
                #[inline]
                fn abs(&self) -> Self {
                    <$t>::abs(*self)
                }
            }
        )*
    };
}

impl_infinity_norm_float!(f32, f64);

/// Distance between two values of the same type
///
/// For scalars this is `|a - b|`. `Epsilon<T>` lifts it so that distances
/// carry their own tolerance.
pub trait Distance {
    /// Result of measuring the distance
    type Output;

    /// Distance from `self` to `other`
    fn distance(&self, other: &Self) -> Self::Output;
}

macro_rules! impl_distance_float {
    ($($t:ty),*) => {
        $(
            impl Distance for $t {
                type Output = $t;

                #[inline]
                fn distance(&self, other: &Self) -> $t {
                    (*self - *other).abs()
                }
            }
        )*
    };
}

impl_distance_float!(f32, f64);

/// Free-function form of [`Distance::distance`]
pub fn distance<T: Distance>(a: &T, b: &T) -> T::Output {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinity_norm() {
        assert_eq!(InfinityNorm::abs(&-3.5f64), 3.5);
        assert_eq!(InfinityNorm::abs(&2.0f32), 2.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        assert_eq!(distance(&1.0f64, &4.0), 3.0);
        assert_eq!(distance(&4.0f64, &1.0), 3.0);
        assert_eq!(distance(&-1.5f32, &1.5), 3.0);
    }
}
