//! Error types for bounded pruning.

use thiserror::Error;

/// Result type alias for fallible pruning.
pub type Result<T, E = PruneError> = std::result::Result<T, E>;

/// Failures reported by [`crate::Sanitizer`].
///
/// The unbounded [`crate::sanitize`] entrypoint is total and never produces
/// one of these.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PruneError {
    /// The input nests containers deeper than the configured limit.
    #[error("value nesting exceeds the maximum depth of {limit}")]
    DepthLimitExceeded { limit: usize },
}
