use crate::{Align, Axis, SizeAndPosition};

impl Axis {
    /// Computes the scroll offset that brings `target_index` into view under `align`.
    ///
    /// `current_offset` only matters for [`Align::Auto`], which keeps it unchanged when the target
    /// is already fully visible and otherwise moves to whichever edge alignment is closer.
    ///
    /// The result is clamped to `[0, total_size - container_size]` (floored at 0), so it never
    /// reveals blank space past the content. `target_index` past the end is clamped to the last
    /// index; an empty axis or a non-positive `container_size` yields 0.
    pub fn updated_offset_for_index(
        &mut self,
        target_index: usize,
        container_size: f64,
        current_offset: f64,
        align: Align,
    ) -> f64 {
        let count = self.item_count();
        if count == 0 || container_size.is_nan() || container_size <= 0.0 {
            return 0.0;
        }
        let index = target_index.min(count - 1);
        let item = self.entry(index);

        let ideal = ideal_offset(item, container_size, current_offset, align);
        let max_offset = self.total_size() - container_size;
        let offset = ideal.min(max_offset).max(0.0);
        gtrace!(
            target_index = index,
            ?align,
            ideal,
            offset,
            "Axis::updated_offset_for_index"
        );
        offset
    }
}

/// Unclamped offset that places `item` according to `align`.
pub(crate) fn ideal_offset(
    item: SizeAndPosition,
    container_size: f64,
    current_offset: f64,
    align: Align,
) -> f64 {
    let start_aligned = item.offset;
    let end_aligned = item.end() - container_size;
    match align {
        Align::Start => start_aligned,
        Align::End => end_aligned,
        Align::Center => item.offset + item.size / 2.0 - container_size / 2.0,
        Align::Auto => {
            let view_end = current_offset + container_size;
            if item.offset >= current_offset && item.end() <= view_end {
                current_offset
            } else if distance(start_aligned, current_offset) <= distance(end_aligned, current_offset)
            {
                start_aligned
            } else {
                end_aligned
            }
        }
    }
}

fn distance(a: f64, b: f64) -> f64 {
    if a > b { a - b } else { b - a }
}
