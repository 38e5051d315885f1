pub mod focus;
pub mod locator;

pub use focus::expanded_radius;
pub use locator::{HitSelection, HitTestHost, find_closest};
