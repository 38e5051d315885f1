//! bubble-compare: visual-encoding core for bubble comparison charts.
//!
//! Maps a third data dimension to bubble radius, hit-tests pointer
//! positions against rendered bubbles, and drives the focus interaction
//! (radius expansion plus layer raise) on behalf of an embedding chart
//! host. Rendering, coordinate transforms and event binding stay on the
//! host side, behind the capability seams in [`render`] and
//! [`interaction`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use crate::api::BubbleCompare;
pub use crate::core::BubbleRadiusOptions;
pub use crate::error::{BubbleError, BubbleResult};
