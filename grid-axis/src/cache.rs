use alloc::vec::Vec;

use crate::SizeAndPosition;

/// Contiguous prefix-sum table: entry `i` holds the size and leading offset of index `i`.
///
/// Entries are only ever appended at the end or truncated from the end, so the table is never
/// sparse and `offset(i + 1) == offset(i) + size(i)` holds for every stored pair.
#[derive(Clone, Debug, Default)]
pub(crate) struct OffsetCache {
    entries: Vec<SizeAndPosition>,
}

impl OffsetCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<SizeAndPosition> {
        self.entries.get(index).copied()
    }

    /// The last resolved entry, or a zero-sized entry at offset 0 when empty.
    pub(crate) fn last(&self) -> SizeAndPosition {
        self.entries.last().copied().unwrap_or_default()
    }

    /// Offset just past the last resolved entry.
    pub(crate) fn end_offset(&self) -> f64 {
        self.last().end()
    }

    /// Appends the next index with a (non-negative) `size` and returns its entry.
    pub(crate) fn push(&mut self, size: f64) -> SizeAndPosition {
        debug_assert!(size >= 0.0, "OffsetCache sizes must be non-negative (size={size})");
        let entry = SizeAndPosition {
            size,
            offset: self.end_offset(),
        };
        self.entries.push(entry);
        entry
    }

    /// Drops every entry at or after `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }
}
