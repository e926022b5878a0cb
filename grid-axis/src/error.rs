/// Errors reported by [`crate::Axis`].
///
/// Every variant is a caller contract violation. None of them are transient, so callers should
/// surface them rather than retry.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AxisError {
    #[error("invalid axis configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("requested index {index} is outside of range 0..{count}")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("estimated item size must be positive and finite, got {0}")]
    NonPositiveEstimate(f64),
}

/// The specific reason an [`AxisError::InvalidConfiguration`] was raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("item count {0} is not a valid non-negative count")]
    InvalidItemCount(i64),

    #[error("size sequence has {len} entries but item count is {count}")]
    SequenceTooShort { len: usize, count: usize },
}
