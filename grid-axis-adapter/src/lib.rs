//! Headless two-axis grid controller built on the `grid-axis` crate.
//!
//! `grid-axis` answers per-axis questions (which indices are visible, where an index sits, where to
//! scroll). This crate pairs a row axis with a column axis and adds what a host usually needs on
//! top:
//!
//! - [`Grid`]: option diffing, scroll offset bookkeeping and queued [`ScrollRequest`]s
//! - [`PlacementCache`]: memoized per-index placements for renderers
//! - [`ScrollThrottle`]: a timestamp-driven throttle for scroll event samples
//!
//! It holds no UI objects and does no rendering.
//!
//! ```
//! use grid_axis::Align;
//! use grid_axis_adapter::{Grid, GridOptions, ScrollTarget};
//!
//! let mut grid = Grid::new(
//!     GridOptions::new(200.0, 100.0, 500, 10.0, 100, 20.0)
//!         .with_overscan(0, 0)
//!         .with_scroll_to_row(Some(ScrollTarget::new(49, Align::Center))),
//! )?;
//!
//! let request = grid.take_scroll_request().unwrap();
//! assert_eq!(request.top, Some(445.0));
//!
//! let window = grid.visible_window();
//! let rows = window.rows.unwrap();
//! assert_eq!((rows.start, rows.stop), (44, 54));
//! # Ok::<(), grid_axis::AxisError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod grid;
mod placement;
mod throttle;

#[cfg(test)]
mod tests;

pub use grid::{
    CellSlot, ContentSize, DEFAULT_COLUMN_WIDTH, DEFAULT_OVERSCAN_COLUMN_COUNT,
    DEFAULT_OVERSCAN_ROW_COUNT, DEFAULT_ROW_HEIGHT, Grid, GridOptions, GridScrollState,
    GridWindow, RowSlot, ScrollChangeReason, ScrollRequest, ScrollTarget,
};
pub use placement::PlacementCache;
pub use throttle::ScrollThrottle;
