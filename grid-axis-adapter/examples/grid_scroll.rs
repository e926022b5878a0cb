use grid_axis::Align;
use grid_axis_adapter::{Grid, GridOptions, ScrollTarget, ScrollThrottle};

fn main() -> Result<(), grid_axis::AxisError> {
    // Example: a host driving a 10k x 200 grid without holding any UI objects.
    //
    // A host would:
    // - create the grid and apply the initial scroll request to its scroll container
    // - feed throttled scroll events through `on_scroll`
    // - render whatever `for_each_visible_cell` reports
    let mut grid = Grid::new(
        GridOptions::new(
            800.0,
            600.0,
            10_000,
            grid_axis::SizeOracle::callback(|i| if i % 5 == 0 { 48.0 } else { 32.0 }),
            200,
            120.0,
        )
        .with_estimated_row_height(Some(35.0))
        .with_scroll_to_row(Some(ScrollTarget::new(2_500, Align::Center))),
    )?;

    if let Some(request) = grid.take_scroll_request() {
        println!("initial scroll request: {request:?}");
    }

    let mut throttle = ScrollThrottle::new(16, 50);
    let mut now_ms = 0u64;
    let mut top = grid.scroll_state().offset_top;
    for _ in 0..20 {
        now_ms += 8;
        top += 40.0;
        if let Some((left, top)) = throttle.offer((0.0, top), now_ms) {
            grid.on_scroll(left, top);
        }
        if let Some((left, top)) = throttle.poll(now_ms) {
            grid.on_scroll(left, top);
        }
    }
    if let Some((left, top)) = throttle.poll(now_ms + 16) {
        grid.on_scroll(left, top);
    }

    let window = grid.visible_window();
    println!("state={:?} window={window:?}", grid.scroll_state());

    let mut cells = 0usize;
    grid.for_each_visible_cell(|cell| {
        if cell.column == 0 {
            println!("row {} at top={} height={}", cell.row, cell.top, cell.height);
        }
        cells += 1;
    })?;
    println!("cells={cells} content={:?}", grid.content_size());

    let left = grid.scroll_to_column(150, Align::End);
    println!("scroll_to_column -> left={left} request={:?}", grid.take_scroll_request());
    Ok(())
}
