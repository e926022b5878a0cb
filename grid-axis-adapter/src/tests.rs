use crate::*;

use grid_axis::{Align, AxisError, SizeAndPosition, SizeOracle, VisibleRange};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::vec::Vec;
use test_case::test_case;

/// 500 rows of 10px and 100 columns of 20px in a 200x100 viewport, without overscan.
fn fixture() -> GridOptions {
    GridOptions::new(200.0, 100.0, 500, 10.0, 100, 20.0).with_overscan(0, 0)
}

fn row_range(grid: &mut Grid) -> (usize, usize) {
    let rows = grid.visible_window().rows.unwrap();
    (rows.start, rows.stop)
}

#[test]
fn new_queues_the_initial_offsets() {
    let mut grid =
        Grid::new(fixture().with_scroll_to_row(Some(ScrollTarget::start(49)))).unwrap();
    assert_eq!(
        grid.take_scroll_request(),
        Some(ScrollRequest {
            left: None,
            top: Some(490.0)
        })
    );
    assert_eq!(grid.take_scroll_request(), None);

    let state = grid.scroll_state();
    assert_eq!(state.offset_top, 490.0);
    assert_eq!(state.offset_left, 0.0);
    assert_eq!(state.reason, ScrollChangeReason::Requested);
}

#[test_case(Align::Start => (49, 58) ; "start")]
#[test_case(Align::End => (40, 49) ; "end")]
#[test_case(Align::Center => (44, 54) ; "center")]
fn scroll_to_row_alignment(align: Align) -> (usize, usize) {
    let mut grid =
        Grid::new(fixture().with_scroll_to_row(Some(ScrollTarget::new(49, align)))).unwrap();
    row_range(&mut grid)
}

#[test]
fn row_size_change_keeps_the_target_in_view() {
    let options = fixture().with_scroll_to_row(Some(ScrollTarget::start(50)));
    let mut grid = Grid::new(options.clone()).unwrap();
    grid.take_scroll_request();
    assert_eq!(grid.scroll_state().offset_top, 500.0);

    grid.update(options.with_rows(500, 20.0)).unwrap();
    assert_eq!(grid.scroll_state().offset_top, 1_000.0);
    assert_eq!(
        grid.take_scroll_request(),
        Some(ScrollRequest {
            left: None,
            top: Some(1_000.0)
        })
    );
    assert_eq!(row_range(&mut grid), (50, 54));
}

#[test]
fn shrinking_rows_clamps_the_target() {
    let options = fixture().with_scroll_to_row(Some(ScrollTarget::start(500)));
    let mut grid = Grid::new(options.clone()).unwrap();
    assert_eq!(grid.scroll_state().offset_top, 4_900.0);

    grid.update(options.with_rows(10, 10.0)).unwrap();
    assert_eq!(grid.scroll_state().offset_top, 0.0);
    let rows = grid.visible_window().rows.unwrap();
    assert!(rows.contains(9));
}

#[test]
fn explicit_offsets_win_over_targets() {
    let options = fixture()
        .with_scroll_to_row(Some(ScrollTarget::start(49)))
        .with_scroll_offsets(Some(40.0), Some(250.0));
    let mut grid = Grid::new(options.clone()).unwrap();
    assert_eq!(grid.scroll_state().offset_top, 250.0);
    assert_eq!(grid.scroll_state().offset_left, 40.0);
    grid.take_scroll_request();

    grid.update(options.with_scroll_offsets(Some(40.0), Some(300.0)))
        .unwrap();
    assert_eq!(
        grid.take_scroll_request(),
        Some(ScrollRequest {
            left: None,
            top: Some(300.0)
        })
    );
    assert_eq!(row_range(&mut grid), (30, 39));
}

#[test]
fn underfilled_grid_never_scrolls() {
    let mut grid = Grid::new(
        GridOptions::new(200.0, 100.0, 5, 10.0, 4, 20.0)
            .with_overscan(0, 0)
            .with_scroll_to_row(Some(ScrollTarget::new(4, Align::End))),
    )
    .unwrap();
    assert_eq!(grid.scroll_state().offset_top, 0.0);
    assert_eq!(row_range(&mut grid), (0, 4));
    assert_eq!(
        grid.visible_window().columns,
        Some(VisibleRange { start: 0, stop: 3 })
    );
    assert_eq!(
        grid.content_size(),
        ContentSize {
            width: 80.0,
            height: 50.0
        }
    );
}

#[test]
fn growing_rows_keeps_the_target_offset() {
    let options = fixture().with_scroll_to_row(Some(ScrollTarget::start(100)));
    let mut grid = Grid::new(options.clone()).unwrap();
    grid.take_scroll_request();

    grid.update(options.with_rows(1_000, 10.0)).unwrap();
    assert_eq!(grid.scroll_state().offset_top, 1_000.0);
    assert_eq!(grid.take_scroll_request(), None);
    assert_eq!(grid.content_size().height, 10_000.0);
}

#[test]
fn observed_scrolls_are_filtered() {
    let mut grid = Grid::new(fixture()).unwrap();
    // Nothing to sync without explicit offsets or targets.
    assert_eq!(grid.take_scroll_request(), None);

    assert!(grid.on_scroll(0.0, 120.0));
    assert_eq!(grid.scroll_state().reason, ScrollChangeReason::Observed);
    assert_eq!(grid.take_scroll_request(), None);

    assert!(!grid.on_scroll(0.0, 120.0));
    assert!(!grid.on_scroll(-1.0, 5.0));
    assert!(!grid.on_scroll(0.0, f64::NAN));
    assert_eq!(grid.scroll_state().offset_top, 120.0);
    assert_eq!(row_range(&mut grid), (12, 21));
}

#[test]
fn observed_scroll_drops_an_untaken_request() {
    let mut grid = Grid::new(fixture()).unwrap();
    grid.scroll_to_row(100, Align::Start);
    assert!(grid.on_scroll(0.0, 30.0));
    assert_eq!(grid.take_scroll_request(), None);
    assert_eq!(grid.scroll_state().offset_top, 30.0);
}

#[test]
fn unchanged_update_keeps_the_observed_offset() {
    let options = fixture();
    let mut grid = Grid::new(options.clone()).unwrap();
    grid.take_scroll_request();
    grid.on_scroll(60.0, 120.0);

    grid.update(options.clone()).unwrap();
    grid.update(options.with_viewport(300.0, 150.0)).unwrap();
    assert_eq!(grid.take_scroll_request(), None);
    assert_eq!(grid.scroll_state().offset_top, 120.0);
    assert_eq!(grid.scroll_state().offset_left, 60.0);
    assert_eq!(grid.scroll_state().reason, ScrollChangeReason::Observed);
}

#[test]
fn new_scroll_target_is_applied_on_update() {
    let options = fixture();
    let mut grid = Grid::new(options.clone()).unwrap();
    grid.take_scroll_request();
    grid.on_scroll(0.0, 2_000.0);

    grid.update(options.with_scroll_to_column(Some(ScrollTarget::new(50, Align::End))))
        .unwrap();
    // No row target: rows go back to index 0.
    assert_eq!(
        grid.take_scroll_request(),
        Some(ScrollRequest {
            left: Some(820.0),
            top: Some(0.0)
        })
    );
}

#[test]
fn programmatic_scrolls_queue_requests() {
    let mut grid = Grid::new(fixture()).unwrap();
    grid.take_scroll_request();

    assert_eq!(grid.scroll_to_column(50, Align::End), 820.0);
    assert_eq!(grid.scroll_to_row(10, Align::Auto), 10.0);
    assert_eq!(
        grid.take_scroll_request(),
        Some(ScrollRequest {
            left: Some(820.0),
            top: Some(10.0)
        })
    );

    // Already fully visible: nothing to do.
    assert_eq!(grid.scroll_to_row(5, Align::Auto), 10.0);
    assert_eq!(grid.take_scroll_request(), None);
}

#[test]
fn visible_cells_carry_both_placements() {
    let mut grid = Grid::new(fixture()).unwrap();
    let cells = grid.collect_visible_cells().unwrap();
    assert_eq!(cells.len(), 100);
    assert_eq!(
        cells[0],
        CellSlot {
            row: 0,
            column: 0,
            top: 0.0,
            height: 10.0,
            left: 0.0,
            width: 20.0
        }
    );
    assert_eq!(
        cells[99],
        CellSlot {
            row: 9,
            column: 9,
            top: 90.0,
            height: 10.0,
            left: 180.0,
            width: 20.0
        }
    );
    // Row-major order.
    assert_eq!((cells[10].row, cells[10].column), (1, 0));
}

#[test]
fn visible_rows_include_overscan() {
    let mut grid = Grid::new(
        GridOptions::new(200.0, 100.0, 500, 10.0, 100, 20.0)
            .with_scroll_to_row(Some(ScrollTarget::start(49))),
    )
    .unwrap();
    let rows = grid.collect_visible_rows().unwrap();
    let indices: Vec<usize> = rows.iter().map(|slot| slot.row).collect();
    assert_eq!(indices.first(), Some(&46));
    assert_eq!(indices.last(), Some(&61));
    assert_eq!(
        rows[3],
        RowSlot {
            row: 49,
            top: 490.0,
            height: 10.0
        }
    );
    assert_eq!(
        grid.visible_window().columns,
        Some(VisibleRange { start: 0, stop: 10 })
    );
}

#[test]
fn empty_axes_render_nothing() {
    let mut grid = Grid::new(GridOptions::new(200.0, 100.0, 0, 10.0, 100, 20.0)).unwrap();
    let window = grid.visible_window();
    assert!(window.is_empty());
    assert_eq!(window.rows, None);

    let mut calls = 0;
    grid.for_each_visible_cell(|_| calls += 1).unwrap();
    grid.for_each_visible_row(|_| calls += 1).unwrap();
    assert_eq!(calls, 0);
}

#[test]
fn content_size_spans_both_axes() {
    let grid = Grid::new(fixture()).unwrap();
    assert_eq!(
        grid.content_size(),
        ContentSize {
            width: 2_000.0,
            height: 5_000.0
        }
    );
}

#[test]
fn recompute_sizes_picks_up_external_changes() {
    let row_height = Arc::new(AtomicU64::new(10f64.to_bits()));
    let oracle = SizeOracle::callback({
        let row_height = Arc::clone(&row_height);
        move |_| f64::from_bits(row_height.load(Ordering::Relaxed))
    });
    let mut grid = Grid::new(
        GridOptions::new(200.0, 100.0, 100, oracle, 10, 20.0).with_estimated_row_height(Some(10.0)),
    )
    .unwrap();

    assert_eq!(
        grid.row_placement(5).unwrap(),
        SizeAndPosition {
            size: 10.0,
            offset: 50.0
        }
    );

    row_height.store(30f64.to_bits(), Ordering::Relaxed);
    assert_eq!(grid.row_placement(5).unwrap().size, 10.0);

    grid.recompute_sizes(0, 0);
    assert_eq!(
        grid.row_placement(5).unwrap(),
        SizeAndPosition {
            size: 30.0,
            offset: 150.0
        }
    );
    assert_eq!(grid.column_placement(3).unwrap().offset, 60.0);
}

#[test]
fn placement_lookups_reject_out_of_range_indices() {
    let mut grid = Grid::new(fixture()).unwrap();
    assert_eq!(
        grid.row_placement(500),
        Err(AxisError::IndexOutOfRange {
            index: 500,
            count: 500
        })
    );
}

#[test]
fn estimates_fall_back_to_constant_then_default() {
    let options = GridOptions::new(
        200.0,
        100.0,
        10,
        SizeOracle::callback(|_| 12.0),
        10,
        SizeOracle::callback(|_| 30.0),
    );
    assert_eq!(options.resolved_row_estimate(), 50.0);
    assert_eq!(options.resolved_column_estimate(), 100.0);

    let options = options.with_rows(10, 12.0).with_estimated_column_width(Some(25.0));
    assert_eq!(options.resolved_row_estimate(), 12.0);
    assert_eq!(options.resolved_column_estimate(), 25.0);

    assert_eq!(options.overscan_row_count, DEFAULT_OVERSCAN_ROW_COUNT);
    assert_eq!(options.overscan_column_count, DEFAULT_OVERSCAN_COLUMN_COUNT);
}

#[test]
fn rejected_update_leaves_the_grid_untouched() {
    let options = fixture();
    let mut grid = Grid::new(options.clone()).unwrap();
    grid.take_scroll_request();

    let err = grid
        .update(
            options
                .clone()
                .with_rows(20, 10.0)
                .with_estimated_column_width(Some(0.0)),
        )
        .unwrap_err();
    assert_eq!(err, AxisError::NonPositiveEstimate(0.0));
    assert_eq!(grid.options().row_count, 500);
    assert_eq!(grid.rows().item_count(), 500);
    assert_eq!(grid.take_scroll_request(), None);
}

#[test]
fn throttle_fires_leading_samples_immediately() {
    let mut t = ScrollThrottle::new(16, 100);
    assert_eq!(t.offer(1u32, 0), Some(1));
    assert_eq!(t.offer(2, 50), None);
    assert!(t.has_pending());

    assert_eq!(t.poll(60), None);
    assert_eq!(t.poll(66), Some(2));
    assert!(!t.has_pending());
    assert_eq!(t.poll(200), None);
}

#[test]
fn throttle_keeps_only_the_latest_trailing_sample() {
    let mut t = ScrollThrottle::new(16, 100);
    t.offer((0.0, 0.0), 0);
    assert_eq!(t.offer((0.0, 10.0), 20), None);
    assert_eq!(t.offer((0.0, 20.0), 30), None);
    // The replacement restarts the delay.
    assert_eq!(t.poll(40), None);
    assert_eq!(t.poll(46), Some((0.0, 20.0)));
}

#[test]
fn throttle_rate_window_follows_leading_fires_only() {
    let mut t = ScrollThrottle::new(16, 100);
    t.offer(1u32, 0);
    t.offer(2, 10);
    assert_eq!(t.poll(30), Some(2));

    // The trailing fire at 30 did not restart the window.
    assert_eq!(t.offer(3, 99), None);
    assert_eq!(t.offer(4, 100), Some(4));
    assert!(!t.has_pending());
}

#[test]
fn throttle_cancel_drops_the_pending_sample() {
    let mut t = ScrollThrottle::new(16, 100);
    t.offer(1u32, 0);
    t.offer(2, 5);
    t.cancel();
    assert!(!t.has_pending());
    assert_eq!(t.poll(1_000), None);
}

#[test]
fn throttled_samples_drive_the_grid() {
    let mut grid = Grid::new(fixture()).unwrap();
    grid.take_scroll_request();
    let mut t = ScrollThrottle::new(16, 50);

    let mut applied = 0;
    for (now_ms, top) in [(0u64, 10.0), (5, 20.0), (10, 30.0), (60, 40.0)] {
        if let Some((left, top)) = t.offer((0.0, top), now_ms) {
            applied += usize::from(grid.on_scroll(left, top));
        }
    }
    assert_eq!(applied, 2);
    assert_eq!(grid.scroll_state().offset_top, 40.0);
    assert!(!t.has_pending());
}
