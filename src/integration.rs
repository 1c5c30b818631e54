//! Integration module for connecting object detection backends with the
//! centroid tracker.
//!
//! Detectors are external collaborators: they turn a frame into scored boxes,
//! and the pipeline filters those by confidence before tracking.

mod builder;
mod detector;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{Detection, DetectionSource, IntoDetections};
pub use pipeline::{DEFAULT_CONFIDENCE_THRESHOLD, TrackerPipeline};
