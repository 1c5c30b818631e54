//! Detection input and the trait for object detection backends.

use crate::tracker::BoundingBox;

/// A scored bounding box produced by a detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    /// Bounding box in TLBR format (left, top, right, bottom)
    pub bbox: BoundingBox,
    /// Detection confidence score
    pub score: f32,
}

impl Detection {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32, score: f32) -> Self {
        Self {
            bbox: BoundingBox::new(left, top, right, bottom),
            score,
        }
    }

    pub fn from_bbox(bbox: BoundingBox, score: f32) -> Self {
        Self { bbox, score }
    }
}

/// Trait for object detection inference backends.
///
/// Implement this trait to connect any detection model to the tracker.
///
/// # Example
///
/// ```
/// use centroid_tracker::{Detection, DetectionSource};
///
/// struct FixedDetector;
///
/// impl DetectionSource for FixedDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, _input: &[u8], _width: u32, _height: u32) -> Result<Vec<Detection>, Self::Error> {
///         Ok(vec![Detection::new(0, 0, 10, 10, 0.9)])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Run inference on raw image data and return detections.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Detection>, Self::Error>;
}

/// Helper trait for converting model-specific outputs to `Detection`.
pub trait IntoDetections {
    /// Convert the output into a vector of detections.
    fn into_detections(self) -> Vec<Detection>;
}

impl IntoDetections for Vec<Detection> {
    fn into_detections(self) -> Vec<Detection> {
        self
    }
}

/// Unscored boxes are treated as fully confident.
impl IntoDetections for Vec<BoundingBox> {
    fn into_detections(self) -> Vec<Detection> {
        self.into_iter()
            .map(|bbox| Detection::from_bbox(bbox, 1.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxes_into_detections() {
        let dets = vec![BoundingBox::new(0, 0, 4, 4)].into_detections();
        assert_eq!(dets.len(), 1);
        assert_eq!(dets[0].score, 1.0);
        assert_eq!(dets[0].bbox, BoundingBox::new(0, 0, 4, 4));
    }
}
