use tracing::debug;

use crate::core::{BubbleDataset, BubblePoint, BubbleRadiusOptions, PixelPoint, bubble_radius};
use crate::error::{BubbleError, BubbleResult};
use crate::interaction::{HitSelection, HitTestHost, expanded_radius, find_closest};
use crate::render::{PointerSurface, Raisable};

impl BubbleRadiusOptions {
    /// Parses options from a JSON object.
    ///
    /// Accepts both the field names and the legacy camelCase keys
    /// (`minR`, `maxR`, `expandScale`); missing fields fall back to the
    /// defaults. No validation happens here; pass the result to
    /// [`BubbleCompare::new`] for the fail-fast path.
    pub fn from_json_str(input: &str) -> BubbleResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            BubbleError::InvalidOptions(format!("failed to parse bubble options json: {e}"))
        })
    }

    pub fn to_json_string_pretty(self) -> BubbleResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            BubbleError::InvalidOptions(format!("failed to serialize bubble options json: {e}"))
        })
    }
}

/// Bubble-compare component: validated options bound to the three chart
/// operations.
///
/// This replaces init-time mutation of shared chart internals with an
/// explicitly constructed instance. Hosts build one `BubbleCompare`, keep
/// it next to their chart, and call the operations directly, passing the
/// dataset and capability hooks as read-only parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleCompare {
    options: BubbleRadiusOptions,
    hit_selection: HitSelection,
}

impl BubbleCompare {
    /// Validates the options and binds them to the operations.
    ///
    /// Fails with [`BubbleError::InvalidOptions`] on non-finite fields, a
    /// negative floor radius, an inverted radius range, or a non-positive
    /// expansion factor. Hosts that want degrade-don't-fail semantics for
    /// malformed configuration can call the free functions in
    /// [`core`](crate::core) and [`interaction`](crate::interaction)
    /// directly with unvalidated options.
    pub fn new(options: BubbleRadiusOptions) -> BubbleResult<Self> {
        let options = options.validate()?;
        debug!(
            min_radius_px = options.min_radius_px,
            max_radius_px = options.max_radius_px,
            expand_scale = options.expand_scale,
            "bubble compare configured"
        );
        Ok(Self {
            options,
            hit_selection: HitSelection::default(),
        })
    }

    /// Selects which candidate wins when several bubbles contain the
    /// pointer. Defaults to the order-dependent
    /// [`HitSelection::LastMatch`].
    #[must_use]
    pub fn with_hit_selection(mut self, selection: HitSelection) -> Self {
        self.hit_selection = selection;
        self
    }

    #[must_use]
    pub fn options(&self) -> BubbleRadiusOptions {
        self.options
    }

    #[must_use]
    pub fn hit_selection(&self) -> HitSelection {
        self.hit_selection
    }

    /// Base radius for a point against the dataset extent.
    #[must_use]
    pub fn radius_for(&self, point: &BubblePoint, dataset: &BubbleDataset) -> f64 {
        bubble_radius(point, dataset, &self.options)
    }

    /// Focused candidate for a pointer position, if any eligible bubble
    /// contains it.
    #[must_use]
    pub fn find_closest<'a>(
        &self,
        candidates: &'a [BubblePoint],
        pointer: PixelPoint,
        dataset: &BubbleDataset,
        host: &impl HitTestHost,
    ) -> Option<&'a BubblePoint> {
        find_closest(
            candidates,
            pointer,
            dataset,
            &self.options,
            self.hit_selection,
            host,
        )
    }

    /// Expanded radius for the focused point, issuing the raise and cursor
    /// side effects toward the renderer.
    pub fn expanded_radius_for<N, S>(
        &self,
        point: &BubblePoint,
        node: Option<&N>,
        dataset: &BubbleDataset,
        surface: &mut S,
    ) -> f64
    where
        N: Raisable + ?Sized,
        S: PointerSurface + ?Sized,
    {
        expanded_radius(point, node, dataset, &self.options, surface)
    }
}
