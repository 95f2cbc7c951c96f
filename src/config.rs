//! Configuration for reductions and tolerance comparisons

use crate::constants::{
    DEFAULT_MIN_PARALLEL_LEN, DEFAULT_PARALLEL_CHUNK_SIZE, MIN_PARALLEL_CHUNK_SIZE,
};

/// Interpretation of `>=` for `Epsilon` values
///
/// The historical definition is `a == b && b.value > a.value`, which is
/// neither the negation of `<` nor the mirror of `<=`. Both readings are
/// available so callers can pick one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeMode {
    /// `a >= b` iff `a == b && b.value > a.value`
    #[default]
    Literal,
    /// `a >= b` iff `a == b || a > b`
    Corrected,
}

/// Configuration for partitioned parallel reduction
#[derive(Debug, Clone)]
pub struct ReductionConfig {
    /// Number of elements each partition reduces independently
    pub chunk_size: usize,

    /// Inputs shorter than this are reduced sequentially
    pub min_parallel_len: usize,

    /// Available parallelism; with one thread reduction stays sequential.
    /// Partitions run on Rayon's global pool.
    pub n_threads: usize,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_PARALLEL_CHUNK_SIZE,
            min_parallel_len: DEFAULT_MIN_PARALLEL_LEN,
            n_threads: num_cpus::get(), // Use all available cores
        }
    }
}

impl ReductionConfig {
    /// Set the partition size, clamped to at least one element
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(MIN_PARALLEL_CHUNK_SIZE);
        self
    }

    /// Set the length below which reduction stays sequential
    pub fn with_min_parallel_len(mut self, min_parallel_len: usize) -> Self {
        self.min_parallel_len = min_parallel_len;
        self
    }

    /// Set the available parallelism, clamped to at least one thread
    pub fn with_threads(mut self, n_threads: usize) -> Self {
        self.n_threads = n_threads.max(1);
        self
    }

    /// Whether an input of `len` elements should be split across threads
    pub fn should_parallelize(&self, len: usize) -> bool {
        self.n_threads > 1 && len >= self.min_parallel_len && len > self.chunk_size
    }

    /// Number of partitions an input of `len` elements is split into
    pub fn partition_count(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        len.div_ceil(self.chunk_size.max(MIN_PARALLEL_CHUNK_SIZE))
    }
}
