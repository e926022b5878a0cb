// Example: variable sizes, estimates, and suffix invalidation.
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use grid_axis::{Align, Axis, AxisOptions, SizeOracle};

fn main() -> Result<(), grid_axis::AxisError> {
    // Row 40 grows when "expanded"; the host flips this and invalidates from 40.
    let expanded = Arc::new(AtomicU64::new(0));
    let oracle = SizeOracle::callback({
        let expanded = Arc::clone(&expanded);
        move |i| {
            if i == 40 && expanded.load(Ordering::Relaxed) == 1 {
                200.0
            } else if i % 10 == 0 {
                48.0
            } else {
                32.0
            }
        }
    });
    let mut rows = Axis::new(AxisOptions::new(10_000, oracle, 34.0))?;

    println!("estimated total={}", rows.total_size());
    let off = rows.updated_offset_for_index(50, 400.0, 0.0, Align::Center);
    println!(
        "center row 50: offset={off} range={:?} resolved={}",
        rows.visible_range(off, 400.0, 2),
        rows.resolved_count()
    );

    expanded.store(1, Ordering::Relaxed);
    rows.invalidate_from(40);
    println!(
        "after expanding row 40: row 40={:?} row 50={:?}",
        rows.resolve(40)?,
        rows.resolve(50)?
    );

    rows.resolve(9_999)?;
    println!(
        "fully resolved total={} clamped={}",
        rows.total_size(),
        rows.clamped_size_count()
    );
    Ok(())
}
