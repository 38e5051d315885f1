pub mod dataset;
pub mod radius;
pub mod types;

pub use dataset::{BubbleDataset, BubblePoint, BubbleSeries, BubbleValue, SeriesId};
pub use radius::{BubbleRadiusOptions, SizeExtent, bubble_radius, size_extent};
pub use types::PixelPoint;
