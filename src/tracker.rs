mod centroid_tracker;
mod matching;
mod rect;
mod track_state;
mod tracked_object;

pub use centroid_tracker::{CentroidTracker, TrackerConfig};
pub use matching::{AssignmentResult, centroid_distance, greedy_assignment};
pub use rect::{BoundingBox, Centroid};
pub use track_state::TrackState;
pub use tracked_object::{ObjectId, TrackedCentroid, TrackedObject};
