use crate::{AxisError, ConfigError, SizeOracle};

/// Configuration for [`crate::Axis`].
///
/// This type is cheap to clone: the oracle's sequence or callback lives behind an `Arc`.
#[derive(Clone, Debug)]
pub struct AxisOptions {
    pub item_count: usize,
    pub size_oracle: SizeOracle,
    /// Size assumed for every index that has not been resolved yet.
    ///
    /// Only used to extrapolate the total size and to pick a starting point for offset lookups;
    /// it never replaces a real size.
    pub estimated_item_size: f64,
}

impl AxisOptions {
    pub fn new(
        item_count: usize,
        size_oracle: impl Into<SizeOracle>,
        estimated_item_size: f64,
    ) -> Self {
        Self {
            item_count,
            size_oracle: size_oracle.into(),
            estimated_item_size,
        }
    }

    /// Options where every index has the same size, also used as the estimate.
    pub fn uniform(item_count: usize, size: f64) -> Self {
        Self::new(item_count, SizeOracle::Constant(size), size)
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    /// Sets the item count from a signed value (e.g. one decoded from host configuration).
    pub fn with_signed_item_count(mut self, item_count: i64) -> Result<Self, AxisError> {
        self.item_count = checked_item_count(item_count)?;
        Ok(self)
    }

    pub fn with_size_oracle(mut self, size_oracle: impl Into<SizeOracle>) -> Self {
        self.size_oracle = size_oracle.into();
        self
    }

    pub fn with_estimated_item_size(mut self, estimated_item_size: f64) -> Self {
        self.estimated_item_size = estimated_item_size;
        self
    }

    /// Checks the estimate and, for sequence oracles, the sequence length against the count.
    pub fn validate(&self) -> Result<(), AxisError> {
        let estimate = self.estimated_item_size;
        if !estimate.is_finite() || estimate <= 0.0 {
            return Err(AxisError::NonPositiveEstimate(estimate));
        }
        if let Some(len) = self.size_oracle.sequence_len() {
            if len < self.item_count {
                return Err(ConfigError::SequenceTooShort {
                    len,
                    count: self.item_count,
                }
                .into());
            }
        }
        Ok(())
    }

    pub(crate) fn merged(&self, update: AxisUpdate) -> Self {
        Self {
            item_count: update.item_count.unwrap_or(self.item_count),
            size_oracle: update
                .size_oracle
                .unwrap_or_else(|| self.size_oracle.clone()),
            estimated_item_size: update
                .estimated_item_size
                .unwrap_or(self.estimated_item_size),
        }
    }
}

/// A partial update for [`crate::Axis::configure`]. Omitted fields keep their current value.
#[derive(Clone, Debug, Default)]
pub struct AxisUpdate {
    pub item_count: Option<usize>,
    pub size_oracle: Option<SizeOracle>,
    pub estimated_item_size: Option<f64>,
}

impl AxisUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_count(mut self, item_count: usize) -> Self {
        self.item_count = Some(item_count);
        self
    }

    pub fn signed_item_count(mut self, item_count: i64) -> Result<Self, AxisError> {
        self.item_count = Some(checked_item_count(item_count)?);
        Ok(self)
    }

    pub fn size_oracle(mut self, size_oracle: impl Into<SizeOracle>) -> Self {
        self.size_oracle = Some(size_oracle.into());
        self
    }

    pub fn estimated_item_size(mut self, estimated_item_size: f64) -> Self {
        self.estimated_item_size = Some(estimated_item_size);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.item_count.is_none()
            && self.size_oracle.is_none()
            && self.estimated_item_size.is_none()
    }
}

fn checked_item_count(item_count: i64) -> Result<usize, AxisError> {
    usize::try_from(item_count).map_err(|_| ConfigError::InvalidItemCount(item_count).into())
}
