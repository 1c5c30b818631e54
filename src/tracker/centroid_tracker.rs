//! Main centroid tracker implementation.

use std::collections::{BTreeMap, VecDeque};

use log::{debug, trace};

use crate::error::TrackerError;
use crate::tracker::matching::{self, AssignmentResult};
use crate::tracker::rect::{BoundingBox, Centroid};
use crate::tracker::track_state::TrackState;
use crate::tracker::tracked_object::{ObjectId, TrackedCentroid, TrackedObject};

/// Configuration for the CentroidTracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Consecutive unmatched frames tolerated before an identity is retired
    pub max_disappeared: u32,
    /// Number of most recent centroids kept per identity
    pub max_trajectory_len: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_disappeared: 20,
            max_trajectory_len: 30,
        }
    }
}

impl TrackerConfig {
    pub fn new(max_disappeared: u32) -> Self {
        Self {
            max_disappeared,
            ..Self::default()
        }
    }

    pub fn with_max_trajectory_len(mut self, max_trajectory_len: usize) -> Self {
        self.max_trajectory_len = max_trajectory_len;
        self
    }

    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.max_disappeared == 0 {
            return Err(TrackerError::InvalidMaxDisappeared(self.max_disappeared));
        }
        if self.max_trajectory_len == 0 {
            return Err(TrackerError::InvalidTrajectoryLength(
                self.max_trajectory_len,
            ));
        }
        Ok(())
    }
}

/// Greedy nearest-centroid multi-object tracker.
///
/// Each call to [`CentroidTracker::update`] matches the current frame's boxes
/// to live objects by centroid distance, registers new objects for leftover
/// boxes and retires objects that stayed unmatched for more than
/// `max_disappeared` consecutive frames.
#[derive(Debug, Clone)]
pub struct CentroidTracker {
    /// Live objects keyed by identity; iteration order is registration order.
    objects: BTreeMap<ObjectId, TrackedObject>,
    next_id: ObjectId,
    config: TrackerConfig,
}

impl CentroidTracker {
    pub fn new(config: TrackerConfig) -> Result<Self, TrackerError> {
        config.validate()?;
        Ok(Self {
            objects: BTreeMap::new(),
            next_id: 0,
            config,
        })
    }

    pub fn with_max_disappeared(max_disappeared: u32) -> Result<Self, TrackerError> {
        Self::new(TrackerConfig::new(max_disappeared))
    }

    pub fn update(&mut self, boxes: &[BoundingBox]) -> Vec<TrackedCentroid> {
        if boxes.is_empty() {
            let ids: Vec<ObjectId> = self.objects.keys().copied().collect();
            self.mark_missed(&ids);
            return self.tracked_centroids();
        }

        let inputs: Vec<Centroid> = boxes.iter().map(BoundingBox::centroid).collect();

        if self.objects.is_empty() {
            for centroid in inputs {
                self.register(centroid);
            }
        } else {
            let (object_ids, object_centroids): (Vec<ObjectId>, Vec<Centroid>) = self
                .objects
                .values()
                .map(|obj| (obj.id(), obj.centroid()))
                .unzip();

            let dists = matching::centroid_distance(&object_centroids, &inputs);
            let AssignmentResult {
                matches,
                unmatched_objects,
                unmatched_detections,
            } = matching::greedy_assignment(&dists);

            trace!(
                "objects={} detections={} matched={}",
                object_ids.len(),
                inputs.len(),
                matches.len()
            );

            for (row, col) in matches {
                if let Some(obj) = self.objects.get_mut(&object_ids[row]) {
                    obj.mark_matched(inputs[col]);
                }
            }

            // Leftover detections only become new objects when there are more
            // detections than objects; otherwise they are dropped this frame.
            if object_ids.len() >= inputs.len() {
                let missed: Vec<ObjectId> =
                    unmatched_objects.iter().map(|&row| object_ids[row]).collect();
                self.mark_missed(&missed);
            } else {
                for col in unmatched_detections {
                    self.register(inputs[col]);
                }
            }
        }

        for obj in self.objects.values_mut() {
            obj.record_position();
        }

        self.tracked_centroids()
    }

    /// Recent centroids of a live object, oldest first.
    pub fn trajectory(&self, id: ObjectId) -> Option<&VecDeque<Centroid>> {
        self.objects.get(&id).map(TrackedObject::trajectory)
    }

    /// Trajectories of all live objects, in identity order.
    pub fn trajectories(&self) -> impl Iterator<Item = (ObjectId, &VecDeque<Centroid>)> {
        self.objects
            .iter()
            .map(|(&id, obj)| (id, obj.trajectory()))
    }

    /// Look up a live object by identity.
    pub fn object(&self, id: ObjectId) -> Option<&TrackedObject> {
        self.objects.get(&id)
    }

    /// Live objects, in identity order.
    pub fn objects(&self) -> impl Iterator<Item = &TrackedObject> {
        self.objects.values()
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether no object is currently tracked.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Identity the next registered object will receive.
    pub fn next_id(&self) -> ObjectId {
        self.next_id
    }

    /// Get a reference to the tracker configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    fn tracked_centroids(&self) -> Vec<TrackedCentroid> {
        self.objects
            .values()
            .map(TrackedObject::to_tracked_centroid)
            .collect()
    }

    fn register(&mut self, centroid: Centroid) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;
        debug!("registered object {} at ({}, {})", id, centroid.x, centroid.y);
        self.objects.insert(
            id,
            TrackedObject::new(id, centroid, self.config.max_trajectory_len),
        );
        id
    }

    /// Bump the disappearance counter of `ids`, then drop those past the limit.
    fn mark_missed(&mut self, ids: &[ObjectId]) {
        let max_disappeared = self.config.max_disappeared;
        let mut retired = Vec::new();
        for id in ids {
            if let Some(obj) = self.objects.get_mut(id) {
                if obj.mark_missed(max_disappeared) == TrackState::Retired {
                    retired.push(*id);
                }
            }
        }

        for id in retired {
            if let Some(obj) = self.objects.remove(&id) {
                debug!(
                    "retired object {} after {} missed frames",
                    id,
                    obj.disappeared()
                );
            }
        }
    }
}
