//! Single tracked object record for centroid tracking.

use std::collections::VecDeque;

use crate::tracker::rect::Centroid;
use crate::tracker::track_state::TrackState;

/// Identity assigned to a tracked object. Monotonically increasing, never reused.
pub type ObjectId = u64;

/// Current position of a live object, as returned from `CentroidTracker::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedCentroid {
    pub id: ObjectId,
    pub centroid: Centroid,
}

/// A live object: its position, disappearance counter and recent trajectory.
///
/// Keeping the three together means an identity always has exactly one
/// counter and one trajectory.
#[derive(Debug, Clone)]
pub struct TrackedObject {
    id: ObjectId,
    centroid: Centroid,
    /// Consecutive frames without a matching detection
    disappeared: u32,
    /// Recent centroids, oldest first
    trajectory: VecDeque<Centroid>,
    max_trajectory_len: usize,
}

impl TrackedObject {
    pub(crate) fn new(id: ObjectId, centroid: Centroid, max_trajectory_len: usize) -> Self {
        Self {
            id,
            centroid,
            disappeared: 0,
            trajectory: VecDeque::with_capacity(max_trajectory_len),
            max_trajectory_len,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn centroid(&self) -> Centroid {
        self.centroid
    }

    pub fn disappeared(&self) -> u32 {
        self.disappeared
    }

    pub fn trajectory(&self) -> &VecDeque<Centroid> {
        &self.trajectory
    }

    pub fn state(&self, max_disappeared: u32) -> TrackState {
        TrackState::from_disappeared(self.disappeared, max_disappeared)
    }

    pub fn to_tracked_centroid(&self) -> TrackedCentroid {
        TrackedCentroid {
            id: self.id,
            centroid: self.centroid,
        }
    }

    /// Move to a matched detection and clear the disappearance counter.
    pub(crate) fn mark_matched(&mut self, centroid: Centroid) {
        self.centroid = centroid;
        self.disappeared = 0;
    }

    /// Count one more missed frame and report the resulting state.
    pub(crate) fn mark_missed(&mut self, max_disappeared: u32) -> TrackState {
        self.disappeared = self.disappeared.saturating_add(1);
        self.state(max_disappeared)
    }

    /// Append the current centroid, dropping the oldest entry past the cap.
    pub(crate) fn record_position(&mut self) {
        if self.trajectory.len() >= self.max_trajectory_len {
            self.trajectory.pop_front();
        }
        self.trajectory.push_back(self.centroid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_object() {
        let obj = TrackedObject::new(3, Centroid::new(5, 5), 30);
        assert_eq!(obj.id(), 3);
        assert_eq!(obj.disappeared(), 0);
        assert!(obj.trajectory().is_empty());
        assert_eq!(obj.state(1), TrackState::Active);
    }

    #[test]
    fn test_missed_then_matched() {
        let mut obj = TrackedObject::new(0, Centroid::new(5, 5), 30);
        assert_eq!(obj.mark_missed(2), TrackState::Missing);
        assert_eq!(obj.mark_missed(2), TrackState::Missing);
        assert_eq!(obj.disappeared(), 2);

        obj.mark_matched(Centroid::new(7, 8));
        assert_eq!(obj.disappeared(), 0);
        assert_eq!(obj.centroid(), Centroid::new(7, 8));

        assert_eq!(obj.mark_missed(0), TrackState::Retired);
    }

    #[test]
    fn test_trajectory_window() {
        let mut obj = TrackedObject::new(0, Centroid::new(0, 0), 3);
        for i in 0..5 {
            obj.mark_matched(Centroid::new(i, i));
            obj.record_position();
        }
        let xs: Vec<i32> = obj.trajectory().iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![2, 3, 4]);
    }
}
