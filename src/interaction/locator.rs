use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{
    BubbleDataset, BubblePoint, BubbleRadiusOptions, PixelPoint, SeriesId, bubble_radius,
};

/// Host-chart query seam consumed by the hit-test.
///
/// The host resolves each candidate's rendered position internally; this
/// core never stores render-space coordinates.
pub trait HitTestHost {
    /// True when the series must not participate in bubble hit-testing,
    /// for example bar-type overlays sharing the chart.
    fn is_excluded_type(&self, id: &SeriesId) -> bool;

    /// Geometric distance between the point's rendered position and the
    /// pointer position. Euclidean for most hosts, but the metric is the
    /// host's choice.
    fn pointer_distance(&self, point: &BubblePoint, pointer: PixelPoint) -> f64;
}

/// Which candidate wins when several bubbles contain the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HitSelection {
    /// The last candidate in iteration order whose hit-test passes.
    ///
    /// The reduction overwrites its accumulator unconditionally on every
    /// passing candidate; it is *not* nearest-neighbor selection. Charts
    /// whose candidate order follows stacking order rely on it to focus
    /// the visually topmost bubble.
    #[default]
    LastMatch,
    /// The passing candidate at minimal distance, ties resolving to the
    /// earliest candidate.
    NearestMatch,
}

/// Finds the focused candidate for a pointer position.
///
/// A candidate hits when its distance to the pointer is strictly less than
/// its own mapped radius. Candidates whose series the host classifies as
/// excluded never win, even when geometrically closest. Returns `None`
/// when nothing passes.
pub fn find_closest<'a>(
    candidates: &'a [BubblePoint],
    pointer: PixelPoint,
    dataset: &BubbleDataset,
    options: &BubbleRadiusOptions,
    selection: HitSelection,
    host: &impl HitTestHost,
) -> Option<&'a BubblePoint> {
    let mut focused: Option<(OrderedFloat<f64>, &'a BubblePoint)> = None;

    for candidate in candidates {
        if host.is_excluded_type(&candidate.series) {
            continue;
        }
        let distance = host.pointer_distance(candidate, pointer);
        // Positive comparison so a NaN distance never counts as a hit.
        if distance < bubble_radius(candidate, dataset, options) {
            let replaces = match selection {
                HitSelection::LastMatch => true,
                HitSelection::NearestMatch => {
                    focused.is_none_or(|(best, _)| OrderedFloat(distance) < best)
                }
            };
            if replaces {
                focused = Some((OrderedFloat(distance), candidate));
            }
        }
    }

    trace!(
        candidates = candidates.len(),
        hit = focused.is_some(),
        "bubble hit-test resolved"
    );

    focused.map(|(_, point)| point)
}
