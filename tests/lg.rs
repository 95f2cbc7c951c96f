//! Integration tests for log-domain numbers

use homomorphic_ext::constants::{F32_ROUND_TRIP_TOLERANCE, F64_ROUND_TRIP_TOLERANCE};
use homomorphic_ext::{Lg, NumericError};

#[test]
fn test_round_trip() {
    for x in [1e-300f64, 1e-10, 0.5, 1.0, 3.0, 1e10, 1e300] {
        let back = Lg::new(x).unwrap().to_value();
        assert!(
            ((back - x) / x).abs() < F64_ROUND_TRIP_TOLERANCE,
            "round trip of {} gave {}",
            x,
            back
        );
    }

    for x in [1e-10f32, 0.1, 7.0, 1e10] {
        let back = Lg::new(x).unwrap().to_value();
        assert!(((back - x) / x).abs() < F32_ROUND_TRIP_TOLERANCE);
    }
}

#[test]
fn test_multiply_materializes_product() {
    let x = 123.456f64;
    let y = 0.0789f64;
    let product = Lg::new(x).unwrap() * Lg::new(y).unwrap();
    assert!(((product.to_value() - x * y) / (x * y)).abs() < F64_ROUND_TRIP_TOLERANCE);
}

#[test]
fn test_overflow_detection() {
    let ln_max = f64::MAX.ln();
    let beyond = Lg::from_log(ln_max + 1.0);

    assert!(beyond.would_overflow());
    assert!(!beyond.would_underflow());
    // naive materialization leaves the range of f64
    assert!(beyond.to_value() > f64::MAX);
    assert_eq!(beyond.checked_value(), None);

    let at_edge = Lg::new(f64::MAX).unwrap();
    assert!(!at_edge.would_overflow());
}

#[test]
fn test_underflow_detection() {
    let small = Lg::new(1e-200f64).unwrap();
    let product = small * small;
    assert!(product.would_underflow());
    assert_eq!(product.to_value(), 0.0);

    // dividing back out recovers a representable value
    let recovered = product / small;
    assert!(!recovered.would_underflow());
    let value = recovered.checked_value().unwrap();
    assert!(((value - 1e-200) / 1e-200).abs() < 1e-10);
}

#[test]
fn test_non_positive_construction() {
    for x in [0.0f64, -1.0] {
        match Lg::new(x) {
            Err(NumericError::Domain { operation, .. }) => assert_eq!(operation, "Lg::new"),
            other => panic!("expected a domain error for {}, got {:?}", x, other),
        }
    }
}

#[test]
fn test_long_product_without_intermediate_overflow() {
    // 2^2000 / 2^1990 = 1024, although 2^2000 overflows f64
    let two = Lg::new(2.0f64).unwrap();
    let mut acc = Lg::one();
    for _ in 0..2000 {
        acc *= two;
    }
    assert!(acc.would_overflow());

    for _ in 0..1990 {
        acc /= two;
    }
    let value = acc.checked_value().unwrap();
    assert!((value - 1024.0).abs() < 1e-6);
}

#[test]
fn test_gamma_for_large_arguments() {
    // ln Γ(171) = ln(170!) ≈ 706.573; ln Γ(172) exceeds ln(f64::MAX)
    let g171 = Lg::new(171.0f64).unwrap().gamma();
    assert!((g171.log_value() - Lg::<f64>::factorial(170).log_value()).abs() < 1e-3);
    assert!(!g171.would_overflow());

    let g172 = Lg::new(172.0f64).unwrap().gamma();
    assert!(g172.would_overflow());
    assert!(g172.log_value().is_finite());
}

#[test]
fn test_unsupported_operations_fail() {
    let x = Lg::new(5.0f64).unwrap();
    for result in [x.floor(), x.sin(), x.cos()] {
        assert!(matches!(result, Err(NumericError::NotImplemented { .. })));
    }
}
