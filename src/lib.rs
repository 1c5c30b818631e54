//! Centroid-based multi-object tracking.
//!
//! [`CentroidTracker`] assigns stable identities to the bounding boxes a
//! detector reports frame after frame, using only the distance between box
//! centers. The [`integration`] module connects any detection backend to the
//! tracker.
//!
//! ```
//! use centroid_tracker::{BoundingBox, CentroidTracker};
//!
//! let mut tracker = CentroidTracker::with_max_disappeared(20).unwrap();
//! let tracked = tracker.update(&[BoundingBox::new(0, 0, 10, 10)]);
//! assert_eq!(tracked[0].id, 0);
//! ```

mod error;
pub mod integration;
pub mod tracker;

pub use error::TrackerError;
pub use integration::{
    Detection, DetectionBuilder, DetectionSource, IntoDetections, TrackerPipeline,
};
pub use tracker::{
    BoundingBox, Centroid, CentroidTracker, ObjectId, TrackState, TrackedCentroid, TrackedObject,
    TrackerConfig,
};
