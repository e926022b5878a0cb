use crate::cache::OffsetCache;
use crate::{AxisError, AxisOptions, AxisUpdate, SizeAndPosition, SizeOracle};

/// Size and position index for one scrollable axis.
///
/// An `Axis` answers three questions for its collaborator:
/// - where index `i` sits and how large it is ([`Axis::resolve`]),
/// - which indices intersect a viewport ([`Axis::visible_range`]),
/// - where to scroll so an index lands under an alignment ([`Axis::updated_offset_for_index`]).
///
/// Sizes are pulled from the [`SizeOracle`] lazily, in index order, and memoized in a contiguous
/// offset cache. Rows and columns are two separate instances; nothing is shared between them.
///
/// The axis holds no UI objects. When the oracle starts reporting different sizes, the owner
/// must call [`Axis::invalidate_from`] with the first affected index.
#[derive(Clone, Debug)]
pub struct Axis {
    options: AxisOptions,
    cache: OffsetCache,
    clamped_sizes: usize,
}

impl Axis {
    /// Creates an axis from validated options. Nothing is resolved yet.
    pub fn new(options: AxisOptions) -> Result<Self, AxisError> {
        options.validate()?;
        gdebug!(
            item_count = options.item_count,
            estimated_item_size = options.estimated_item_size,
            "Axis::new"
        );
        Ok(Self {
            options,
            cache: OffsetCache::new(),
            clamped_sizes: 0,
        })
    }

    pub fn options(&self) -> &AxisOptions {
        &self.options
    }

    pub fn item_count(&self) -> usize {
        self.options.item_count
    }

    pub fn estimated_item_size(&self) -> f64 {
        self.options.estimated_item_size
    }

    pub fn size_oracle(&self) -> &SizeOracle {
        &self.options.size_oracle
    }

    /// Applies a partial configuration update.
    ///
    /// The merged configuration is validated first; on error the axis is left untouched.
    ///
    /// Shrinking the item count drops cached entries past the new count. Replacing the oracle or
    /// the estimate keeps every cached entry: call [`Axis::invalidate_from`] for the indices whose
    /// sizes actually changed.
    pub fn configure(&mut self, update: AxisUpdate) -> Result<(), AxisError> {
        if update.is_empty() {
            return Ok(());
        }
        let next = self.options.merged(update);
        next.validate()?;

        if next.item_count < self.cache.len() {
            self.cache.truncate(next.item_count);
        }
        self.options = next;
        gdebug!(
            item_count = self.options.item_count,
            estimated_item_size = self.options.estimated_item_size,
            resolved = self.cache.len(),
            "Axis::configure"
        );
        Ok(())
    }

    /// Replaces the whole configuration. Equivalent to a `configure` with every field set.
    pub fn set_options(&mut self, options: AxisOptions) -> Result<(), AxisError> {
        self.configure(AxisUpdate {
            item_count: Some(options.item_count),
            size_oracle: Some(options.size_oracle),
            estimated_item_size: Some(options.estimated_item_size),
        })
    }

    pub fn set_item_count(&mut self, item_count: usize) -> Result<(), AxisError> {
        self.configure(AxisUpdate::new().item_count(item_count))
    }

    pub fn set_size_oracle(&mut self, size_oracle: impl Into<SizeOracle>) -> Result<(), AxisError> {
        self.configure(AxisUpdate::new().size_oracle(size_oracle))
    }

    pub fn set_estimated_item_size(&mut self, estimated_item_size: f64) -> Result<(), AxisError> {
        self.configure(AxisUpdate::new().estimated_item_size(estimated_item_size))
    }

    /// Forgets every cached entry at or after `index`.
    ///
    /// Entries before `index` keep their cached size and offset.
    pub fn invalidate_from(&mut self, index: usize) {
        if index >= self.cache.len() {
            return;
        }
        gdebug!(index, resolved = self.cache.len(), "Axis::invalidate_from");
        self.cache.truncate(index);
    }

    /// Forgets every cached entry.
    pub fn invalidate_all(&mut self) {
        self.invalidate_from(0);
    }

    /// Returns the size and offset of `index`, resolving (and caching) every index up to it.
    pub fn resolve(&mut self, index: usize) -> Result<SizeAndPosition, AxisError> {
        let count = self.options.item_count;
        if index >= count {
            return Err(AxisError::IndexOutOfRange { index, count });
        }
        Ok(self.entry(index))
    }

    /// Number of indices currently cached (always a prefix `0..resolved_count`).
    pub fn resolved_count(&self) -> usize {
        self.cache.len()
    }

    pub fn last_resolved_index(&self) -> Option<usize> {
        self.cache.len().checked_sub(1)
    }

    pub fn is_fully_resolved(&self) -> bool {
        self.cache.len() >= self.options.item_count
    }

    /// Number of oracle sizes that were negative or non-finite and got clamped to zero.
    pub fn clamped_size_count(&self) -> usize {
        self.clamped_sizes
    }

    /// Total content size along this axis.
    ///
    /// Resolved indices contribute their real sizes; the rest are extrapolated with the estimated
    /// item size. The value converges on the real total as more indices get resolved.
    pub fn total_size(&self) -> f64 {
        let resolved = self.cache.len();
        let unresolved = self.options.item_count.saturating_sub(resolved);
        self.cache.end_offset() + self.options.estimated_item_size * unresolved as f64
    }

    /// Resolves `index`, which must be `< item_count`.
    pub(crate) fn entry(&mut self, index: usize) -> SizeAndPosition {
        debug_assert!(
            index < self.options.item_count,
            "Axis::entry out of bounds (index={index}, count={})",
            self.options.item_count
        );
        if let Some(entry) = self.cache.get(index) {
            return entry;
        }
        let mut entry = self.cache.last();
        for i in self.cache.len()..=index {
            let size = self.measure(i);
            entry = self.cache.push(size);
        }
        entry
    }

    fn measure(&mut self, index: usize) -> f64 {
        let size = self.options.size_oracle.size_of(index);
        if size.is_finite() && size >= 0.0 {
            return size;
        }
        gwarn!(index, size, "size oracle returned an invalid size; clamping to 0");
        self.clamped_sizes = self.clamped_sizes.saturating_add(1);
        0.0
    }
}
