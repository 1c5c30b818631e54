//! Builder for creating Detection objects from various input formats.

use crate::integration::Detection;
use crate::tracker::BoundingBox;

/// Builder for creating `Detection` objects from various input formats.
#[derive(Debug, Clone, Default)]
pub struct DetectionBuilder {
    bbox: BoundingBox,
    score: f32,
}

impl DetectionBuilder {
    /// Create a new detection builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bounding box in TLBR format (left, top, right, bottom).
    pub fn tlbr(mut self, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        self.bbox = BoundingBox::new(left, top, right, bottom);
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    ///
    /// Edges past the `i32` range saturate.
    pub fn xywh(mut self, cx: i32, cy: i32, w: i32, h: i32) -> Self {
        let (half_w, half_h) = (w / 2, h / 2);
        self.bbox = BoundingBox::new(
            cx.saturating_sub(half_w),
            cy.saturating_sub(half_h),
            cx.saturating_add(half_w),
            cy.saturating_add(half_h),
        );
        self
    }

    /// Set bounding box in TLWH format (left, top, width, height).
    pub fn tlwh(mut self, left: i32, top: i32, w: i32, h: i32) -> Self {
        self.bbox = BoundingBox::from_tlwh(left, top, w, h);
        self
    }

    /// Set bounding box from TLBR coordinates normalized to `[0, 1]`,
    /// scaled to a frame of `width` x `height` pixels.
    ///
    /// Scaled coordinates are truncated toward zero.
    pub fn normalized(mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: u32, height: u32) -> Self {
        let (w, h) = (width as f32, height as f32);
        self.bbox = BoundingBox::new(
            (x1 * w) as i32,
            (y1 * h) as i32,
            (x2 * w) as i32,
            (y2 * h) as i32,
        );
        self
    }

    /// Set the confidence score.
    pub fn score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    /// Build the final `Detection`.
    pub fn build(self) -> Detection {
        Detection::from_bbox(self.bbox, self.score)
    }
}
