//! Per-axis size and position indexing for virtualized two-dimensional grids.
//!
//! For a headless two-axis grid controller (placement caches, scroll bookkeeping, throttling), see
//! the `grid-axis-adapter` crate.
//!
//! A grid with tens of thousands of rows and columns only ever materializes the indices that
//! intersect its viewport. This crate decides *which* indices those are and *where* they sit, one
//! axis at a time:
//! - a lazily extended prefix-sum cache over per-index sizes,
//! - estimate-seeded galloping + binary search from a pixel offset to an index,
//! - scroll-to-index offsets under start/center/end/auto alignment, clamped to the content,
//! - a total content size that extrapolates unresolved indices from an estimate.
//!
//! It is UI-agnostic. The caller provides item counts, a [`SizeOracle`] per axis, viewport sizes
//! and scroll offsets, and renders whatever indices come back.
//!
//! ```
//! use grid_axis::{Align, Axis, AxisOptions, SizeOracle};
//!
//! let mut rows = Axis::new(AxisOptions::new(
//!     10_000,
//!     SizeOracle::callback(|i| if i % 10 == 0 { 40.0 } else { 20.0 }),
//!     22.0,
//! ))?;
//!
//! let range = rows.visible_range(0.0, 100.0, 2).unwrap();
//! assert_eq!((range.start, range.stop), (0, 5));
//!
//! let offset = rows.updated_offset_for_index(500, 100.0, 0.0, Align::Start);
//! assert_eq!(offset, rows.resolve(500)?.offset);
//! # Ok::<(), grid_axis::AxisError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod axis;
mod cache;
mod error;
mod options;
mod oracle;
mod range;
mod scroll;
mod types;


pub use axis::Axis;
pub use error::{AxisError, ConfigError};
pub use options::{AxisOptions, AxisUpdate};
pub use oracle::{SizeCallback, SizeOracle};
pub use types::{Align, SizeAndPosition, VisibleRange};
