use serde::{Deserialize, Serialize};

use crate::core::dataset::{BubbleDataset, BubblePoint};
use crate::error::{BubbleError, BubbleResult};

/// Pixel radius range for the size dimension, plus the focus expansion
/// factor.
///
/// The raw mapping functions below never validate these fields; a range
/// with `min_radius_px > max_radius_px` silently inverts the visual range.
/// The [`BubbleCompare`](crate::api::BubbleCompare) facade is the validated
/// construction path.
///
/// Deserialization accepts the legacy camelCase keys (`minR`, `maxR`,
/// `expandScale`) alongside the field names, and missing fields fall back
/// to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleRadiusOptions {
    /// Radius assigned when the third-dimension value is absent or zero,
    /// and the floor of the mapped range.
    #[serde(alias = "minR")]
    pub min_radius_px: f64,
    /// Ceiling of the mapped range.
    #[serde(alias = "maxR")]
    pub max_radius_px: f64,
    /// Multiplier applied to the base radius when a bubble is focused.
    #[serde(alias = "expandScale")]
    pub expand_scale: f64,
}

impl Default for BubbleRadiusOptions {
    fn default() -> Self {
        Self {
            min_radius_px: 5.0,
            max_radius_px: 50.0,
            expand_scale: 1.0,
        }
    }
}

impl BubbleRadiusOptions {
    #[must_use]
    pub fn new(min_radius_px: f64, max_radius_px: f64) -> Self {
        Self {
            min_radius_px,
            max_radius_px,
            expand_scale: 1.0,
        }
    }

    #[must_use]
    pub fn with_expand_scale(mut self, expand_scale: f64) -> Self {
        self.expand_scale = expand_scale;
        self
    }

    pub(crate) fn validate(self) -> BubbleResult<Self> {
        for (value, name) in [
            (self.min_radius_px, "min_radius_px"),
            (self.max_radius_px, "max_radius_px"),
            (self.expand_scale, "expand_scale"),
        ] {
            if !value.is_finite() {
                return Err(BubbleError::InvalidOptions(format!(
                    "`{name}` must be finite"
                )));
            }
        }
        if self.min_radius_px < 0.0 {
            return Err(BubbleError::InvalidOptions(format!(
                "`min_radius_px` must be >= 0, got {}",
                self.min_radius_px
            )));
        }
        if self.min_radius_px > self.max_radius_px {
            return Err(BubbleError::InvalidOptions(format!(
                "radius range is inverted: min_radius_px={} > max_radius_px={}",
                self.min_radius_px, self.max_radius_px
            )));
        }
        if self.expand_scale <= 0.0 {
            return Err(BubbleError::InvalidOptions(format!(
                "`expand_scale` must be > 0, got {}",
                self.expand_scale
            )));
        }
        Ok(self)
    }
}

/// `[min, max]` of the third-dimension value across a dataset's
/// representative samples. Derived per query, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeExtent {
    pub min: f64,
    pub max: f64,
}

impl SizeExtent {
    /// True when every representative shares one strictly positive value.
    ///
    /// In that case the mapping assigns the floor radius to every point
    /// instead of dividing a zero spread.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        // Float equality intentional: the branch exists to catch an exactly
        // collapsed extent, not nearly-equal ones.
        self.min > 0.0 && self.max == self.min
    }
}

/// Scans the dataset for the size extent.
///
/// Only the *first* value of every series is sampled, one representative
/// per series; the coarse sampling is intentional, not an approximation
/// to tighten. `min` seeds at `f64::INFINITY` and `max` at `0.0`, so a
/// dataset with no usable representative keeps those seeds.
/// Representatives without a size component, and NaN components,
/// contribute nothing.
#[must_use]
pub fn size_extent(dataset: &BubbleDataset) -> SizeExtent {
    let mut min = f64::INFINITY;
    let mut max = 0.0f64;
    for z in dataset
        .series()
        .filter_map(|series| series.representative_z())
        .filter(|z| !z.is_nan())
    {
        min = min.min(z);
        max = max.max(z);
    }
    SizeExtent { min, max }
}

/// Maps a point's third-dimension value to a pixel radius.
///
/// The mapping normalizes against the dataset extent's `max` alone;
/// `min` is consulted only by the degeneracy check. Two charts therefore
/// agree visually whenever their maxima agree. The asymmetry is
/// deliberate and relied upon:
///
/// - absent, zero or NaN value: the floor radius, by policy rather than
///   error;
/// - degenerate extent (all representatives equal and positive): the floor
///   radius for every point;
/// - otherwise `|value / max| * (max_radius_px - min_radius_px)
///   + min_radius_px`, with the absolute value guarding negative scalars.
///
/// Never panics or errors: numeric edge cases the branches above do not
/// catch (for example a non-zero value against a zero `max`) flow through
/// IEEE arithmetic as-is.
#[must_use]
pub fn bubble_radius(
    point: &BubblePoint,
    dataset: &BubbleDataset,
    options: &BubbleRadiusOptions,
) -> f64 {
    let Some(cur_val) = point.z_value().filter(|z| *z != 0.0 && !z.is_nan()) else {
        return options.min_radius_px;
    };

    let extent = size_extent(dataset);
    let size = if extent.is_degenerate() {
        0.0
    } else {
        cur_val / extent.max
    };

    size.abs() * (options.max_radius_px - options.min_radius_px) + options.min_radius_px
}

#[cfg(test)]
mod tests {
    use crate::core::dataset::{BubbleDataset, BubbleSeries, BubbleValue};

    use super::{SizeExtent, size_extent};

    fn dataset_of(representatives: &[BubbleValue]) -> BubbleDataset {
        let mut dataset = BubbleDataset::new();
        for (index, value) in representatives.iter().enumerate() {
            dataset
                .insert_series(BubbleSeries::new(format!("s{index}"), vec![*value]))
                .expect("insert series");
        }
        dataset
    }

    #[test]
    fn empty_dataset_keeps_the_seed_extent() {
        let extent = size_extent(&BubbleDataset::new());
        assert_eq!(extent.min, f64::INFINITY);
        assert_eq!(extent.max, 0.0);
        assert!(!extent.is_degenerate());
    }

    #[test]
    fn representatives_without_a_size_component_are_skipped() {
        let dataset = dataset_of(&[
            BubbleValue::Missing,
            BubbleValue::Scalar(f64::NAN),
            BubbleValue::Scalar(7.0),
        ]);
        let extent = size_extent(&dataset);
        assert_eq!(extent.min, 7.0);
        assert_eq!(extent.max, 7.0);
    }

    #[test]
    fn degeneracy_requires_a_strictly_positive_collapsed_extent() {
        assert!(SizeExtent { min: 3.0, max: 3.0 }.is_degenerate());
        assert!(!SizeExtent { min: 0.0, max: 0.0 }.is_degenerate());
        assert!(!SizeExtent { min: 3.0, max: 9.0 }.is_degenerate());
    }

    #[test]
    fn later_values_of_a_series_never_widen_the_extent() {
        let mut dataset = BubbleDataset::new();
        dataset
            .insert_series(BubbleSeries::new(
                "sampled",
                vec![BubbleValue::Scalar(10.0), BubbleValue::Scalar(500.0)],
            ))
            .expect("insert series");

        let extent = size_extent(&dataset);
        assert_eq!(extent.max, 10.0);
    }
}
