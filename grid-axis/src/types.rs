use core::ops::RangeInclusive;

/// Where a scroll-to target lands within the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    /// The item's leading edge sits at the viewport start.
    #[default]
    Start,
    /// The item is centered in the viewport.
    Center,
    /// The item's trailing edge sits at the viewport end.
    End,
    /// Keep the current offset if the item is fully visible, otherwise move to the nearer edge.
    Auto,
}

/// Size and leading offset of a single index along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeAndPosition {
    pub size: f64,
    /// Cumulative distance from index 0 to the start of this index.
    pub offset: f64,
}

impl SizeAndPosition {
    pub fn end(&self) -> f64 {
        self.offset + self.size
    }
}

/// An inclusive index range along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start: usize,
    pub stop: usize, // inclusive
}

impl VisibleRange {
    /// Number of indices in the range (always at least one).
    pub fn count(&self) -> usize {
        self.stop - self.start + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.stop
    }

    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.stop
    }
}
