// Example: minimal usage and scroll-to helper.
use grid_axis::{Align, Axis, AxisOptions};

fn main() -> Result<(), grid_axis::AxisError> {
    let mut rows = Axis::new(AxisOptions::uniform(1_000_000, 24.0))?;

    let range = rows.visible_range(123_456.0, 600.0, 3);
    println!("total_size={}", rows.total_size());
    println!("visible_range={range:?}");
    println!("resolved={}", rows.resolved_count());

    let off = rows.updated_offset_for_index(999_999, 600.0, 123_456.0, Align::End);
    println!("after scroll_to_index: offset={off}");
    println!("visible_range={:?}", rows.visible_range(off, 600.0, 0));
    Ok(())
}
