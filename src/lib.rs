//! # homomorphic-ext: error-aware numerics for approximate scalars
//!
//! Floating point types only approximately model the real numbers. This
//! library provides value types that keep track of, or reduce, the gap
//! between a computation over an approximate type and the exact operation it
//! stands for.
//!
//! ## Components
//!
//! 1. **Compensated summation** ([`KbnSum`]): Kahan-Babuska-Neumaier
//!    summation whose error bound does not grow with the number of terms,
//!    plus a partitioned parallel reduction ([`par_reduce`]).
//!
//! 2. **Online moments** ([`Welford`]): single-pass mean and variance,
//!    generic over the accumulator used for the running sums.
//!
//! 3. **Tolerance comparison** ([`Epsilon`]): values that carry an
//!    uncertainty radius and compare as a partial, non-transitive order.
//!
//! 4. **Log-domain numbers** ([`Lg`]): positive reals stored as their
//!    logarithm, with overflow and underflow predicates for converting back.
//!
//! ## Usage
//!
//! ```
//! use homomorphic_ext::{Epsilon, KbnSum, KbnWelford, Lg};
//!
//! let mut sum = KbnSum::new(0.0f64);
//! sum.reduce([1.0, 1e100, 1.0, -1e100]);
//! assert_eq!(sum.value(), 2.0);
//!
//! let moments: KbnWelford<f64> = [1.0, 2.0, 3.0].into_iter().collect();
//! assert!(moments.sample_variance().is_ok());
//!
//! let a = Epsilon::new(1.0f64, 0.5);
//! let b = Epsilon::new(1.25f64, 0.1);
//! assert!(a.approx_eq(&b));
//!
//! let product = Lg::new(1e300f64).unwrap() * Lg::new(1e300f64).unwrap();
//! assert!(product.would_overflow());
//! ```

pub mod accumulator;
pub mod config;
pub mod constants;
pub mod epsilon;
pub mod error;
pub mod lg;
pub mod parallel;
pub mod scalar;

// Re-export primary components
pub use accumulator::{KbnSum, KbnWelford, NaiveSum, NaiveWelford, SumReduce, Welford};
pub use config::{GeMode, ReductionConfig};
pub use epsilon::{Epsilon, EpsilonOrdering};
pub use error::{NumericError, NumericResult};
pub use lg::Lg;
pub use parallel::{par_reduce, par_sum};
pub use scalar::{distance, Distance, InfinityNorm};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
