use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{BubbleError, BubbleResult};

/// Series/category identifier.
///
/// Ids are not required to be globally unique across charts; within one
/// [`BubbleDataset`] they key the series registry and drive type
/// classification on the host side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesId(String);

impl SeriesId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SeriesId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// One observed sample of a bubble series.
///
/// The serde representation is untagged so the common chart data shapes
/// parse directly: a bare number (`5`), a composite object with an explicit
/// size component (`{"y": 1, "z": 9}`), or `null` for a missing slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BubbleValue {
    /// Plain bubble mode: one scalar that is already the size dimension.
    Scalar(f64),
    /// Z-bubble mode: composite sample carrying an explicit size component.
    WithZ { y: f64, z: f64 },
    /// No measurable sample at this slot.
    Missing,
}

impl BubbleValue {
    /// Third-dimension scalar carried by this sample, if any.
    #[must_use]
    pub fn z_value(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::WithZ { z, .. } => Some(*z),
            Self::Missing => None,
        }
    }
}

/// One observation handed to the radius, hit-test and focus operations.
///
/// The rendered pixel position is intentionally absent: the host resolves
/// it at call time through its distance hook, and this core never stores
/// render-space state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubblePoint {
    pub series: SeriesId,
    pub value: BubbleValue,
}

impl BubblePoint {
    #[must_use]
    pub fn new(series: impl Into<SeriesId>, value: BubbleValue) -> Self {
        Self {
            series: series.into(),
            value,
        }
    }

    #[must_use]
    pub fn z_value(&self) -> Option<f64> {
        self.value.z_value()
    }
}

/// A named sequence of bubble samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleSeries {
    id: SeriesId,
    values: Vec<BubbleValue>,
}

impl BubbleSeries {
    #[must_use]
    pub fn new(id: impl Into<SeriesId>, values: Vec<BubbleValue>) -> Self {
        Self {
            id: id.into(),
            values,
        }
    }

    #[must_use]
    pub fn id(&self) -> &SeriesId {
        &self.id
    }

    #[must_use]
    pub fn values(&self) -> &[BubbleValue] {
        &self.values
    }

    /// First sample of the series.
    ///
    /// The size-extent scan consults exactly this one representative per
    /// series, never the full value list.
    #[must_use]
    pub fn representative(&self) -> Option<&BubbleValue> {
        self.values.first()
    }

    /// Size component of the representative sample, if it carries one.
    #[must_use]
    pub fn representative_z(&self) -> Option<f64> {
        self.representative().and_then(BubbleValue::z_value)
    }
}

/// Insertion-ordered series registry owned by the host and passed
/// read-only into every operation of this crate.
///
/// Insertion order is the deterministic scan order for the size extent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BubbleDataset {
    series: IndexMap<SeriesId, BubbleSeries>,
}

impl BubbleDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a series keyed by its id.
    ///
    /// Re-inserting an existing id replaces that series and returns the
    /// previous one.
    pub fn insert_series(&mut self, series: BubbleSeries) -> BubbleResult<Option<BubbleSeries>> {
        if series.id().is_empty() {
            return Err(BubbleError::InvalidData(
                "series id must not be empty".to_owned(),
            ));
        }
        Ok(self.series.insert(series.id().clone(), series))
    }

    #[must_use]
    pub fn get(&self, id: &SeriesId) -> Option<&BubbleSeries> {
        self.series.get(id)
    }

    /// All series in insertion order.
    pub fn series(&self) -> impl Iterator<Item = &BubbleSeries> {
        self.series.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
