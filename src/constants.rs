//! Centralized constants for the homomorphic-ext numerics toolkit
//!
//! This module contains all hardcoded constants used throughout the codebase.
//! All new constants should be added here rather than scattered throughout the code.
//! Constants are organized by category for easy reference and maintenance.

// ============================================================================
// PARALLEL REDUCTION
// ============================================================================

/// Default number of elements each partition reduces before merging
pub const DEFAULT_PARALLEL_CHUNK_SIZE: usize = 16_384;

/// Below this many elements `par_reduce` stays sequential
pub const DEFAULT_MIN_PARALLEL_LEN: usize = 65_536;

/// Smallest chunk size accepted by `ReductionConfig::with_chunk_size`
pub const MIN_PARALLEL_CHUNK_SIZE: usize = 1;

// ============================================================================
// LOG-DOMAIN CONSTANTS
// ============================================================================

/// ln(sqrt(2*pi)), the constant term of Stirling's approximation
pub const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_8;

// ============================================================================
// TEST TOLERANCES
// ============================================================================

/// Relative tolerance used by round-trip checks on `f64`
pub const F64_ROUND_TRIP_TOLERANCE: f64 = 1e-12;

/// Relative tolerance used by round-trip checks on `f32`
pub const F32_ROUND_TRIP_TOLERANCE: f32 = 1e-5;
