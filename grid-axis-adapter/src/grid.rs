use alloc::vec::Vec;

use grid_axis::{Align, Axis, AxisError, AxisOptions, SizeAndPosition, SizeOracle, VisibleRange};

use crate::PlacementCache;

pub const DEFAULT_ROW_HEIGHT: f64 = 50.0;
pub const DEFAULT_COLUMN_WIDTH: f64 = 100.0;
pub const DEFAULT_OVERSCAN_ROW_COUNT: usize = 3;
pub const DEFAULT_OVERSCAN_COLUMN_COUNT: usize = 1;

/// An index to bring into view, and where it should land.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTarget {
    pub index: usize,
    pub align: Align,
}

impl ScrollTarget {
    pub fn new(index: usize, align: Align) -> Self {
        Self { index, align }
    }

    pub fn start(index: usize) -> Self {
        Self::new(index, Align::Start)
    }
}

/// Why the grid's scroll offsets last changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollChangeReason {
    /// The host reported a scroll (user wheel/drag, or the host applying a request).
    Observed,
    /// The grid computed new offsets that the host still has to apply.
    Requested,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridScrollState {
    pub offset_left: f64,
    pub offset_top: f64,
    pub reason: ScrollChangeReason,
}

/// Offsets the host should apply to its real scroll container. `None` leaves that axis alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRequest {
    pub left: Option<f64>,
    pub top: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridWindow {
    pub rows: Option<VisibleRange>,
    pub columns: Option<VisibleRange>,
}

impl GridWindow {
    pub fn is_empty(&self) -> bool {
        self.rows.is_none() || self.columns.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowSlot {
    pub row: usize,
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSlot {
    pub row: usize,
    pub column: usize,
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentSize {
    pub width: f64,
    pub height: f64,
}

/// Configuration for [`Grid`].
#[derive(Clone, Debug)]
pub struct GridOptions {
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,

    pub row_count: usize,
    pub row_height: SizeOracle,
    pub estimated_row_height: Option<f64>,

    pub column_count: usize,
    pub column_width: SizeOracle,
    pub estimated_column_width: Option<f64>,

    pub overscan_row_count: usize,
    pub overscan_column_count: usize,

    /// Explicit scroll offsets. These win over the scroll-to targets.
    pub scroll_top_offset: Option<f64>,
    pub scroll_left_offset: Option<f64>,

    pub scroll_to_row: Option<ScrollTarget>,
    pub scroll_to_column: Option<ScrollTarget>,
}

impl GridOptions {
    pub fn new(
        width: f64,
        height: f64,
        row_count: usize,
        row_height: impl Into<SizeOracle>,
        column_count: usize,
        column_width: impl Into<SizeOracle>,
    ) -> Self {
        Self {
            width,
            height,
            row_count,
            row_height: row_height.into(),
            estimated_row_height: None,
            column_count,
            column_width: column_width.into(),
            estimated_column_width: None,
            overscan_row_count: DEFAULT_OVERSCAN_ROW_COUNT,
            overscan_column_count: DEFAULT_OVERSCAN_COLUMN_COUNT,
            scroll_top_offset: None,
            scroll_left_offset: None,
            scroll_to_row: None,
            scroll_to_column: None,
        }
    }

    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_rows(mut self, row_count: usize, row_height: impl Into<SizeOracle>) -> Self {
        self.row_count = row_count;
        self.row_height = row_height.into();
        self
    }

    pub fn with_columns(
        mut self,
        column_count: usize,
        column_width: impl Into<SizeOracle>,
    ) -> Self {
        self.column_count = column_count;
        self.column_width = column_width.into();
        self
    }

    pub fn with_estimated_row_height(mut self, estimated: Option<f64>) -> Self {
        self.estimated_row_height = estimated;
        self
    }

    pub fn with_estimated_column_width(mut self, estimated: Option<f64>) -> Self {
        self.estimated_column_width = estimated;
        self
    }

    pub fn with_overscan(mut self, rows: usize, columns: usize) -> Self {
        self.overscan_row_count = rows;
        self.overscan_column_count = columns;
        self
    }

    pub fn with_scroll_offsets(mut self, left: Option<f64>, top: Option<f64>) -> Self {
        self.scroll_left_offset = left;
        self.scroll_top_offset = top;
        self
    }

    pub fn with_scroll_to_row(mut self, target: Option<ScrollTarget>) -> Self {
        self.scroll_to_row = target;
        self
    }

    pub fn with_scroll_to_column(mut self, target: Option<ScrollTarget>) -> Self {
        self.scroll_to_column = target;
        self
    }

    /// The explicit estimate, else the oracle's constant size, else [`DEFAULT_ROW_HEIGHT`].
    pub fn resolved_row_estimate(&self) -> f64 {
        resolve_estimate(
            self.estimated_row_height,
            &self.row_height,
            DEFAULT_ROW_HEIGHT,
        )
    }

    /// The explicit estimate, else the oracle's constant size, else [`DEFAULT_COLUMN_WIDTH`].
    pub fn resolved_column_estimate(&self) -> f64 {
        resolve_estimate(
            self.estimated_column_width,
            &self.column_width,
            DEFAULT_COLUMN_WIDTH,
        )
    }

    pub fn row_axis_options(&self) -> AxisOptions {
        AxisOptions::new(
            self.row_count,
            self.row_height.clone(),
            self.resolved_row_estimate(),
        )
    }

    pub fn column_axis_options(&self) -> AxisOptions {
        AxisOptions::new(
            self.column_count,
            self.column_width.clone(),
            self.resolved_column_estimate(),
        )
    }

    fn rows_differ(&self, other: &Self) -> bool {
        self.row_count != other.row_count
            || !self.row_height.same_as(&other.row_height)
            || self.resolved_row_estimate().to_bits() != other.resolved_row_estimate().to_bits()
    }

    fn columns_differ(&self, other: &Self) -> bool {
        self.column_count != other.column_count
            || !self.column_width.same_as(&other.column_width)
            || self.resolved_column_estimate().to_bits()
                != other.resolved_column_estimate().to_bits()
    }
}

fn resolve_estimate(explicit: Option<f64>, oracle: &SizeOracle, default: f64) -> f64 {
    explicit.or_else(|| oracle.constant_size()).unwrap_or(default)
}

fn same_offset(a: Option<f64>, b: Option<f64>) -> bool {
    a.map(f64::to_bits) == b.map(f64::to_bits)
}

/// A headless two-axis virtualized grid.
///
/// `Grid` owns one [`Axis`] for rows and one for columns, tracks the scroll offsets, and tells the
/// host which cells to render and where. It does not hold any UI objects. Hosts drive it by
/// calling:
/// - `update` when the grid's configuration changes,
/// - `on_scroll` when the real scroll container reports a scroll,
/// - `take_scroll_request` after each of the above, applying any returned offsets to the real
///   scroll container.
#[derive(Clone, Debug)]
pub struct Grid {
    options: GridOptions,
    rows: Axis,
    columns: Axis,
    row_placements: PlacementCache,
    column_placements: PlacementCache,
    state: GridScrollState,
    request: Option<ScrollRequest>,
}

impl Grid {
    /// Builds both axes and computes the initial offsets.
    ///
    /// Axes with an explicit offset or a scroll-to target get their initial offset queued as a
    /// [`ScrollRequest`] so the host can sync its scroll container on mount. The other axes start
    /// at 0.
    pub fn new(options: GridOptions) -> Result<Self, AxisError> {
        let rows = Axis::new(options.row_axis_options())?;
        let columns = Axis::new(options.column_axis_options())?;

        let mut grid = Self {
            options,
            rows,
            columns,
            row_placements: PlacementCache::new(),
            column_placements: PlacementCache::new(),
            state: GridScrollState {
                offset_left: 0.0,
                offset_top: 0.0,
                reason: ScrollChangeReason::Requested,
            },
            request: None,
        };

        let top = match (grid.options.scroll_top_offset, grid.options.scroll_to_row) {
            (Some(offset), _) => Some(offset),
            (None, Some(target)) => Some(grid.target_top(Some(target), 0.0)),
            (None, None) => None,
        };
        let left = match (grid.options.scroll_left_offset, grid.options.scroll_to_column) {
            (Some(offset), _) => Some(offset),
            (None, Some(target)) => Some(grid.target_left(Some(target), 0.0)),
            (None, None) => None,
        };
        grid.state.offset_top = top.unwrap_or(0.0);
        grid.state.offset_left = left.unwrap_or(0.0);
        if left.is_some() || top.is_some() {
            grid.request = Some(ScrollRequest { left, top });
        }
        gdebug!(
            rows = grid.options.row_count,
            columns = grid.options.column_count,
            offset_left = grid.state.offset_left,
            offset_top = grid.state.offset_top,
            "Grid::new"
        );
        Ok(grid)
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn rows(&self) -> &Axis {
        &self.rows
    }

    pub fn columns(&self) -> &Axis {
        &self.columns
    }

    pub fn scroll_state(&self) -> GridScrollState {
        self.state
    }

    /// Applies a new configuration.
    ///
    /// - An axis whose count, size oracle or estimate changed is reconfigured, and sizes are
    ///   recomputed from index 0 on both axes.
    /// - A changed explicit offset is applied as is (`None` meaning 0).
    /// - Otherwise, if a scroll-to target or any item property changed, the offsets are recomputed
    ///   from the targets, with a missing target meaning index 0.
    ///
    /// Offsets that actually move are queued as a [`ScrollRequest`]. On error, nothing changes.
    pub fn update(&mut self, next: GridOptions) -> Result<(), AxisError> {
        let rows_changed = self.options.rows_differ(&next);
        let columns_changed = self.options.columns_differ(&next);
        let item_props_changed = rows_changed || columns_changed;
        let scroll_props_changed = self.options.scroll_to_row != next.scroll_to_row
            || self.options.scroll_to_column != next.scroll_to_column;
        let offsets_changed = !same_offset(self.options.scroll_top_offset, next.scroll_top_offset)
            || !same_offset(self.options.scroll_left_offset, next.scroll_left_offset);

        let row_options = next.row_axis_options();
        let column_options = next.column_axis_options();
        row_options.validate()?;
        column_options.validate()?;

        if rows_changed {
            self.rows.set_options(row_options)?;
        }
        if columns_changed {
            self.columns.set_options(column_options)?;
        }
        self.options = next;
        if item_props_changed {
            self.recompute_sizes(0, 0);
        }

        let (left, top) = if offsets_changed {
            (
                self.options.scroll_left_offset.unwrap_or(0.0),
                self.options.scroll_top_offset.unwrap_or(0.0),
            )
        } else if scroll_props_changed || item_props_changed {
            (
                self.target_left(self.options.scroll_to_column, self.state.offset_left),
                self.target_top(self.options.scroll_to_row, self.state.offset_top),
            )
        } else {
            return Ok(());
        };
        gdebug!(
            item_props_changed,
            scroll_props_changed,
            offsets_changed,
            left,
            top,
            "Grid::update"
        );
        self.request_offsets(left, top);
        Ok(())
    }

    /// Records a scroll reported by the host. Returns `true` if the state changed.
    ///
    /// Negative or NaN offsets are ignored, as are offsets equal to the current ones. An observed
    /// scroll supersedes any request the host has not taken yet.
    pub fn on_scroll(&mut self, left: f64, top: f64) -> bool {
        if left.is_nan() || top.is_nan() || left < 0.0 || top < 0.0 {
            gtrace!(left, top, "Grid::on_scroll ignored");
            return false;
        }
        if left == self.state.offset_left && top == self.state.offset_top {
            return false;
        }
        self.state = GridScrollState {
            offset_left: left,
            offset_top: top,
            reason: ScrollChangeReason::Observed,
        };
        self.request = None;
        gtrace!(left, top, "Grid::on_scroll");
        true
    }

    /// Takes the pending scroll request, if any.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.request.take()
    }

    /// Scrolls so `index` lands according to `align`. Returns the new top offset.
    pub fn scroll_to_row(&mut self, index: usize, align: Align) -> f64 {
        let top = self.target_top(Some(ScrollTarget::new(index, align)), self.state.offset_top);
        self.request_offsets(self.state.offset_left, top);
        top
    }

    /// Scrolls so `index` lands according to `align`. Returns the new left offset.
    pub fn scroll_to_column(&mut self, index: usize, align: Align) -> f64 {
        let left = self.target_left(
            Some(ScrollTarget::new(index, align)),
            self.state.offset_left,
        );
        self.request_offsets(left, self.state.offset_top);
        left
    }

    /// Drops cached placements and every resolved size at or after the given indices.
    ///
    /// Call this when rows or columns change size without the options changing (e.g. a callback
    /// oracle that reads external state).
    pub fn recompute_sizes(&mut self, start_row: usize, start_column: usize) {
        gdebug!(start_row, start_column, "Grid::recompute_sizes");
        self.row_placements.clear();
        self.column_placements.clear();
        self.rows.invalidate_from(start_row);
        self.columns.invalidate_from(start_column);
    }

    /// Visible rows and columns at the current offsets, widened by the overscan counts.
    pub fn visible_window(&mut self) -> GridWindow {
        let rows = self.rows.visible_range(
            self.state.offset_top,
            self.options.height,
            self.options.overscan_row_count,
        );
        let columns = self.columns.visible_range(
            self.state.offset_left,
            self.options.width,
            self.options.overscan_column_count,
        );
        GridWindow { rows, columns }
    }

    pub fn row_placement(&mut self, row: usize) -> Result<SizeAndPosition, AxisError> {
        self.row_placements.get_or_resolve(&mut self.rows, row)
    }

    pub fn column_placement(&mut self, column: usize) -> Result<SizeAndPosition, AxisError> {
        self.column_placements
            .get_or_resolve(&mut self.columns, column)
    }

    /// Calls `f` for every visible row, top to bottom.
    pub fn for_each_visible_row(&mut self, mut f: impl FnMut(RowSlot)) -> Result<(), AxisError> {
        let Some(rows) = self.visible_window().rows else {
            return Ok(());
        };
        for row in rows.indices() {
            let placement = self.row_placement(row)?;
            f(RowSlot {
                row,
                top: placement.offset,
                height: placement.size,
            });
        }
        Ok(())
    }

    /// Calls `f` for every visible cell, row by row.
    pub fn for_each_visible_cell(
        &mut self,
        mut f: impl FnMut(CellSlot),
    ) -> Result<(), AxisError> {
        let window = self.visible_window();
        let (Some(rows), Some(columns)) = (window.rows, window.columns) else {
            return Ok(());
        };
        for row in rows.indices() {
            let row_placement = self.row_placement(row)?;
            for column in columns.indices() {
                let column_placement = self.column_placement(column)?;
                f(CellSlot {
                    row,
                    column,
                    top: row_placement.offset,
                    height: row_placement.size,
                    left: column_placement.offset,
                    width: column_placement.size,
                });
            }
        }
        Ok(())
    }

    pub fn collect_visible_rows(&mut self) -> Result<Vec<RowSlot>, AxisError> {
        let mut out = Vec::new();
        self.for_each_visible_row(|slot| out.push(slot))?;
        Ok(out)
    }

    pub fn collect_visible_cells(&mut self) -> Result<Vec<CellSlot>, AxisError> {
        let mut out = Vec::new();
        self.for_each_visible_cell(|slot| out.push(slot))?;
        Ok(out)
    }

    /// Scrollable content size. Unresolved rows and columns count at their estimated size.
    pub fn content_size(&self) -> ContentSize {
        ContentSize {
            width: self.columns.total_size(),
            height: self.rows.total_size(),
        }
    }

    fn target_top(&mut self, target: Option<ScrollTarget>, current: f64) -> f64 {
        let target = target.unwrap_or_default();
        self.rows
            .updated_offset_for_index(target.index, self.options.height, current, target.align)
    }

    fn target_left(&mut self, target: Option<ScrollTarget>, current: f64) -> f64 {
        let target = target.unwrap_or_default();
        self.columns
            .updated_offset_for_index(target.index, self.options.width, current, target.align)
    }

    fn request_offsets(&mut self, left: f64, top: f64) {
        let left_moved = left != self.state.offset_left;
        let top_moved = top != self.state.offset_top;
        if !left_moved && !top_moved {
            return;
        }
        self.state = GridScrollState {
            offset_left: left,
            offset_top: top,
            reason: ScrollChangeReason::Requested,
        };
        gtrace!(left, top, "Grid::request_offsets");
        let request = self.request.get_or_insert_with(ScrollRequest::default);
        if left_moved {
            request.left = Some(left);
        }
        if top_moved {
            request.top = Some(top);
        }
    }
}
