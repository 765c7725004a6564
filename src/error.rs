//! Construction-time errors.

use thiserror::Error;

/// Reasons a bucket count is rejected when building a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A map needs at least one bucket.
    #[error("capacity must be positive, got 0")]
    ZeroCapacity,
    /// Signed capacities below zero.
    #[error("capacity must be positive, got {0}")]
    NegativeCapacity(i64),
    /// The requested bucket count does not fit in `usize` on this target,
    /// or its bucket array cannot be allocated.
    #[error("capacity {0} is too large")]
    CapacityTooLarge(u64),
}
