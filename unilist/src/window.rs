/// Computes the render-ahead budget: how many slots beyond the visible range
/// to keep mounted.
///
/// The budget is proportional to how many estimated-size items fit in the
/// overscan count's worth of viewport lengths:
/// `1 + ceil(overscan_count / (viewport_extent / estimated_item_size))`.
/// Degenerate inputs (unmeasured viewport, no size estimate, zero overscan)
/// fall back to the minimum window of 1.
///
/// Recompute whenever the viewport extent, the size estimate, or the overscan
/// count changes.
pub fn compute_window(
    viewport_extent: f64,
    estimated_item_size: f64,
    overscan_count: usize,
) -> usize {
    if viewport_extent <= 0.0 || estimated_item_size <= 0.0 || overscan_count == 0 {
        return 1;
    }
    let items_per_viewport = viewport_extent / estimated_item_size;
    1 + (overscan_count as f64 / items_per_viewport).ceil() as usize
}
