//! TrackerPipeline for combining detection with tracking.

use crate::tracker::{BoundingBox, CentroidTracker, TrackedCentroid};

use super::DetectionSource;

/// Detections scoring at or below this value are discarded before tracking.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.2;

/// A combined tracker that bundles detection inference with centroid tracking.
///
/// This struct provides a convenient way to run end-to-end tracking
/// by combining any `DetectionSource` with the `CentroidTracker`.
pub struct TrackerPipeline<D: DetectionSource> {
    detector: D,
    tracker: CentroidTracker,
    confidence_threshold: f32,
}

impl<D: DetectionSource> TrackerPipeline<D> {
    /// Create a new tracking pipeline with the given detector and tracker.
    pub fn new(detector: D, tracker: CentroidTracker) -> Self {
        Self {
            detector,
            tracker,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }

    /// Only detections scoring strictly above `threshold` reach the tracker.
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Process a single frame and return the live tracked objects.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<TrackedCentroid>, D::Error> {
        let boxes: Vec<BoundingBox> = self
            .detector
            .detect(input, width, height)?
            .into_iter()
            .filter(|det| det.score > self.confidence_threshold)
            .map(|det| det.bbox)
            .collect();
        Ok(self.tracker.update(&boxes))
    }

    pub fn confidence_threshold(&self) -> f32 {
        self.confidence_threshold
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &CentroidTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut CentroidTracker {
        &mut self.tracker
    }
}
