use nalgebra::Point2;

/// Integer pixel position of an object's center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Centroid {
    pub x: i32,
    pub y: i32,
}

impl Centroid {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another centroid.
    #[inline]
    pub fn distance(&self, other: &Centroid) -> f64 {
        nalgebra::distance(&self.to_point(), &other.to_point())
    }

    #[inline]
    fn to_point(self) -> Point2<f64> {
        Point2::new(self.x as f64, self.y as f64)
    }
}

impl From<(i32, i32)> for Centroid {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box in pixel coordinates (left, top, right, bottom).
///
/// No ordering is enforced between the edges: inverted or degenerate boxes
/// are kept as given and simply yield the corresponding centroid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    /// Create a box from TLBR coordinates.
    #[inline]
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a box from top-left corner and dimensions (TLWH format).
    ///
    /// Edges past the `i32` range saturate.
    #[inline]
    pub fn from_tlwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(
            left,
            top,
            left.saturating_add(width),
            top.saturating_add(height),
        )
    }

    /// Convert to TLBR format: (left, top, right, bottom).
    #[inline]
    pub fn to_tlbr(&self) -> [i32; 4] {
        [self.left, self.top, self.right, self.bottom]
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Midpoint of the box, truncating toward zero.
    #[inline]
    pub fn centroid(&self) -> Centroid {
        Centroid {
            x: midpoint(self.left, self.right),
            y: midpoint(self.top, self.bottom),
        }
    }
}

/// Summed in `i64`; the halved value always fits back in `i32`.
#[inline]
fn midpoint(a: i32, b: i32) -> i32 {
    ((a as i64 + b as i64) / 2) as i32
}

impl From<[i32; 4]> for BoundingBox {
    fn from([left, top, right, bottom]: [i32; 4]) -> Self {
        Self::new(left, top, right, bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid_of_box() {
        let bbox = BoundingBox::new(0, 0, 10, 10);
        assert_eq!(bbox.centroid(), Centroid::new(5, 5));
    }

    #[test]
    fn test_centroid_truncates() {
        let bbox = BoundingBox::new(0, 0, 5, 7);
        assert_eq!(bbox.centroid(), Centroid::new(2, 3));

        // Integer division rounds toward zero for negative sums
        let bbox = BoundingBox::new(-5, -7, 0, 0);
        assert_eq!(bbox.centroid(), Centroid::new(-2, -3));
    }

    #[test]
    fn test_centroid_extreme_coordinates() {
        let bbox = BoundingBox::new(i32::MAX - 1, i32::MIN, i32::MAX, i32::MIN + 1);
        // Both halves truncate toward zero
        assert_eq!(bbox.centroid(), Centroid::new(i32::MAX - 1, i32::MIN + 1));

        let bbox = BoundingBox::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(bbox.centroid(), Centroid::new(0, 0));
        assert_eq!(bbox.width(), i32::MAX);
    }

    #[test]
    fn test_from_tlwh_saturates() {
        let bbox = BoundingBox::from_tlwh(i32::MAX - 5, -10, 100, i32::MIN);
        assert_eq!(bbox.to_tlbr(), [i32::MAX - 5, -10, i32::MAX, i32::MIN]);
    }

    #[test]
    fn test_inverted_box_is_accepted() {
        let bbox = BoundingBox::new(20, 30, 10, 10);
        assert_eq!(bbox.width(), -10);
        assert_eq!(bbox.centroid(), Centroid::new(15, 20));
    }

    #[test]
    fn test_from_tlwh() {
        let bbox = BoundingBox::from_tlwh(10, 20, 30, 40);
        assert_eq!(bbox.to_tlbr(), [10, 20, 40, 60]);
        assert_eq!(bbox.height(), 40);
    }

    #[test]
    fn test_distance() {
        let a = Centroid::new(0, 0);
        let b = Centroid::new(3, 4);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance(&a), 0.0);
    }
}
