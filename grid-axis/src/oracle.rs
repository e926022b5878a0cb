use alloc::sync::Arc;
use alloc::vec::Vec;

/// A per-index size callback.
pub type SizeCallback = Arc<dyn Fn(usize) -> f64 + Send + Sync>;

/// Per-index size lookup for one axis.
///
/// The three representations are normalized into [`SizeOracle::size_of`], so the axis issues a
/// single query per index regardless of which one was configured. Callbacks are expected to be
/// pure and cheap; the axis never calls one twice for the same index until that index is
/// invalidated.
#[derive(Clone)]
pub enum SizeOracle {
    /// The same size for every index.
    Constant(f64),
    /// One size per index. Must hold at least `item_count` entries.
    Sequence(Arc<[f64]>),
    /// A size computed on demand.
    Callback(SizeCallback),
}

impl SizeOracle {
    pub fn constant(size: f64) -> Self {
        Self::Constant(size)
    }

    pub fn sequence(sizes: impl Into<Vec<f64>>) -> Self {
        let sizes: Vec<f64> = sizes.into();
        Self::Sequence(Arc::from(sizes))
    }

    pub fn callback(f: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::Callback(Arc::new(f))
    }

    /// Returns the raw (unclamped) size reported for `index`.
    ///
    /// A `Sequence` that is too short reports `NaN`; configuration validation keeps that from
    /// happening for indices inside the item count.
    pub fn size_of(&self, index: usize) -> f64 {
        match self {
            Self::Constant(size) => *size,
            Self::Sequence(sizes) => sizes.get(index).copied().unwrap_or(f64::NAN),
            Self::Callback(f) => f(index),
        }
    }

    /// The uniform size, if this oracle is [`SizeOracle::Constant`].
    pub fn constant_size(&self) -> Option<f64> {
        match self {
            Self::Constant(size) => Some(*size),
            _ => None,
        }
    }

    /// Number of entries in a `Sequence` oracle.
    pub fn sequence_len(&self) -> Option<usize> {
        match self {
            Self::Sequence(sizes) => Some(sizes.len()),
            _ => None,
        }
    }

    /// Returns `true` if both oracles are known to report identical sizes.
    ///
    /// Constants compare by value; sequences and callbacks compare by identity (the same `Arc`),
    /// so a freshly built but equivalent closure counts as a change.
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Constant(a), Self::Constant(b)) => a.to_bits() == b.to_bits(),
            (Self::Sequence(a), Self::Sequence(b)) => Arc::ptr_eq(a, b),
            (Self::Callback(a), Self::Callback(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<f64> for SizeOracle {
    fn from(size: f64) -> Self {
        Self::Constant(size)
    }
}

impl From<Vec<f64>> for SizeOracle {
    fn from(sizes: Vec<f64>) -> Self {
        Self::sequence(sizes)
    }
}

impl core::fmt::Debug for SizeOracle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Constant(size) => f.debug_tuple("Constant").field(size).finish(),
            Self::Sequence(sizes) => f.debug_tuple("Sequence").field(&sizes.len()).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}
