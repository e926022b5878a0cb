use crate::{Axis, VisibleRange};

impl Axis {
    /// Returns the index whose extent covers `offset`: the largest index with a leading offset
    /// `<= offset`, which is also the first index whose end lies past `offset`.
    ///
    /// Negative (or NaN) offsets map to index 0; offsets past the content map to the last index.
    /// Returns `None` for an empty axis.
    ///
    /// The search starts from `offset / estimated_item_size`, gallops outward until the target is
    /// bracketed, then bisects the bracket. Only indices up to the furthest probe get resolved.
    pub fn find_nearest_index(&mut self, offset: f64) -> Option<usize> {
        let count = self.item_count();
        if count == 0 {
            return None;
        }
        let target = offset.max(0.0);
        let last = count - 1;

        // `as usize` saturates and truncates toward zero, which is floor for non-negative input.
        let guess = ((target / self.estimated_item_size()) as usize).min(last);

        let (lo, hi) = if self.entry(guess).offset <= target {
            self.gallop_forward(guess, target, last)
        } else {
            self.gallop_backward(guess, target)
        };
        Some(self.bisect(lo, hi, target))
    }

    /// Computes the inclusive range of indices intersecting `[offset, offset + container_size)`,
    /// widened by `overscan_count` on both sides.
    ///
    /// Returns `None` when there is nothing to show: the axis is empty, or every size collapsed to
    /// zero.
    pub fn visible_range(
        &mut self,
        offset: f64,
        container_size: f64,
        overscan_count: usize,
    ) -> Option<VisibleRange> {
        let count = self.item_count();
        if count == 0 || self.total_size() <= 0.0 {
            return None;
        }

        let offset = offset.max(0.0);
        let max_offset = offset + container_size.max(0.0);

        let start = self.find_nearest_index(offset)?;
        let mut end = self.entry(start).end();
        let mut stop = start;
        while end < max_offset && stop + 1 < count {
            stop += 1;
            end = self.entry(stop).end();
        }
        // The estimate may have hidden a fully zero-sized axis until the walk above resolved it.
        if self.total_size() <= 0.0 {
            return None;
        }

        let range = VisibleRange {
            start: start.saturating_sub(overscan_count),
            stop: stop.saturating_add(overscan_count).min(count - 1),
        };
        gtrace!(
            offset,
            container_size,
            overscan_count,
            start = range.start,
            stop = range.stop,
            "Axis::visible_range"
        );
        Some(range)
    }

    /// Expects `offset(from) <= target`. Returns `(lo, hi)` with `offset(lo) <= target` and either
    /// `hi > last` or `offset(hi) > target`.
    fn gallop_forward(&mut self, from: usize, target: f64, last: usize) -> (usize, usize) {
        let mut lo = from;
        let mut step = 1usize;
        loop {
            let probe = lo.saturating_add(step);
            if probe > last {
                return (lo, last + 1);
            }
            if self.entry(probe).offset > target {
                return (lo, probe);
            }
            lo = probe;
            step = step.saturating_mul(2);
        }
    }

    /// Expects `offset(from) > target`. Index 0 always starts at 0, so the walk terminates.
    fn gallop_backward(&mut self, from: usize, target: f64) -> (usize, usize) {
        let mut hi = from;
        let mut step = 1usize;
        loop {
            let probe = hi.saturating_sub(step);
            if probe == 0 || self.entry(probe).offset <= target {
                return (probe, hi);
            }
            hi = probe;
            step = step.saturating_mul(2);
        }
    }

    fn bisect(&mut self, mut lo: usize, mut hi: usize, target: f64) -> usize {
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if self.entry(mid).offset <= target {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }
}
