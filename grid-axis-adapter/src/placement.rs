#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use grid_axis::{Axis, AxisError, SizeAndPosition};

#[cfg(feature = "std")]
type PlacementMap = HashMap<usize, SizeAndPosition>;
#[cfg(not(feature = "std"))]
type PlacementMap = BTreeMap<usize, SizeAndPosition>;

/// Memoized per-index placements for one axis, as handed out to renderers.
///
/// Hosts that build a style object per row or column key it off these entries. The cache must be
/// cleared whenever the underlying axis is invalidated.
#[derive(Clone, Debug, Default)]
pub struct PlacementCache {
    entries: PlacementMap,
}

impl PlacementCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<SizeAndPosition> {
        self.entries.get(&index).copied()
    }

    /// Returns the cached placement for `index`, resolving it on `axis` on a miss.
    pub fn get_or_resolve(
        &mut self,
        axis: &mut Axis,
        index: usize,
    ) -> Result<SizeAndPosition, AxisError> {
        if let Some(placement) = self.get(index) {
            return Ok(placement);
        }
        let placement = axis.resolve(index)?;
        self.entries.insert(index, placement);
        Ok(placement)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
