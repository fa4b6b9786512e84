//! Error types for geometry access.

use thiserror::Error;

/// Errors raised by the geometry primitives.
///
/// Tree construction itself never fails; the only checked condition is
/// component access by a raw index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BvhError {
    /// Component index outside `0..=2`.
    #[error("axis index {0} out of range, expected 0, 1 or 2")]
    AxisOutOfRange(usize),
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, BvhError>;
