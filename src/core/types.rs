use serde::{Deserialize, Serialize};

/// Pixel-space coordinate, used for pointer positions and rendered mark
/// centers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another pixel-space coordinate.
    ///
    /// Hosts whose hit-test metric is plain screen distance can build their
    /// [`pointer_distance`](crate::interaction::HitTestHost::pointer_distance)
    /// hook on top of this.
    #[must_use]
    pub fn distance_to(self, other: PixelPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}
