use tracing::trace;

use crate::core::{BubbleDataset, BubblePoint, BubbleRadiusOptions, bubble_radius};
use crate::render::{CursorAffordance, PointerSurface, Raisable};

/// Computes the focused (expanded) radius for a point and issues the focus
/// side effects toward the renderer.
///
/// Side effects, in order: raise the bubble's stacking group when a
/// raisable node handle is supplied, then mark the pointer surface as
/// clickable. Both are fire-and-forget instructions; nothing is verified
/// or retried. The returned radius is the base mapping scaled by
/// `expand_scale` (default 1.0, a no-op when unconfigured).
pub fn expanded_radius<N, S>(
    point: &BubblePoint,
    node: Option<&N>,
    dataset: &BubbleDataset,
    options: &BubbleRadiusOptions,
    surface: &mut S,
) -> f64
where
    N: Raisable + ?Sized,
    S: PointerSurface + ?Sized,
{
    let base = bubble_radius(point, dataset, options);

    if let Some(node) = node {
        node.raise();
    }
    surface.set_cursor(CursorAffordance::Clickable);

    trace!(series = %point.series, base, "bubble focus applied");

    base * options.expand_scale
}
