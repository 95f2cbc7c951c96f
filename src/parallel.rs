//! # Parallel compensated reduction
//!
//! This module splits a slice into contiguous partitions, reduces each
//! partition into its own [`KbnSum`] using Rayon, and then merges the partial
//! sums sequentially in partition order.
//!
//! Partitions share no mutable state while they run. The merge order is
//! fixed, so for a given `chunk_size` the result is bit-for-bit reproducible
//! regardless of how many threads executed the partitions.

use num_traits::Zero;
use rayon::prelude::*;
use std::ops::Sub;
use tracing::debug;

use crate::accumulator::KbnSum;
use crate::config::ReductionConfig;
use crate::constants::MIN_PARALLEL_CHUNK_SIZE;
use crate::scalar::InfinityNorm;

/// Compensated sum of `values`, partitioned across threads
///
/// # Arguments
///
/// * `values` - The terms to sum
/// * `config` - Partition size and parallelism thresholds
///
/// # Returns
///
/// The merged compensated sum of all partitions
///
/// # Examples
///
/// ```
/// use homomorphic_ext::{par_reduce, ReductionConfig};
///
/// let values = vec![0.1f64; 100_000];
/// let config = ReductionConfig::default().with_chunk_size(1_000).with_min_parallel_len(0);
/// let sum = par_reduce(&values, &config);
/// assert!((sum.value() - 10_000.0).abs() < 1e-9);
/// ```
pub fn par_reduce<T>(values: &[T], config: &ReductionConfig) -> KbnSum<T>
where
    T: Copy + Zero + Sub<Output = T> + PartialOrd + InfinityNorm + Send + Sync,
{
    if !config.should_parallelize(values.len()) {
        let mut sum = KbnSum::new(T::zero());
        sum.reduce(values.iter().copied());
        return sum;
    }

    debug!(
        len = values.len(),
        chunk_size = config.chunk_size,
        partitions = config.partition_count(values.len()),
        "partitioned compensated reduction"
    );

    let chunk_size = config.chunk_size.max(MIN_PARALLEL_CHUNK_SIZE);

    // collect preserves partition order, which fixes the merge order below
    let partials: Vec<KbnSum<T>> = values
        .par_chunks(chunk_size)
        .map(|chunk| {
            let mut sum = KbnSum::new(T::zero());
            sum.reduce(chunk.iter().copied());
            sum
        })
        .collect();

    merge_in_order(&partials)
}

/// Materialized form of [`par_reduce`]
pub fn par_sum<T>(values: &[T], config: &ReductionConfig) -> T
where
    T: Copy + Zero + Sub<Output = T> + PartialOrd + InfinityNorm + Send + Sync,
{
    par_reduce(values, config).value()
}

/// Merge partial sums left to right
pub fn merge_in_order<T>(partials: &[KbnSum<T>]) -> KbnSum<T>
where
    T: Copy + Zero + Sub<Output = T> + PartialOrd + InfinityNorm,
{
    partials
        .iter()
        .fold(KbnSum::new(T::zero()), |acc, partial| acc.combine(partial))
}
