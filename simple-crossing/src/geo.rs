//! Simple geometry primitives.

/// A tiny position vector with floating point coordinates.
///
/// Entities live on a pixel grid but move continuously, and may sit partly off-screen (negative
/// coordinates), so positions are not clamped to the frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// A tiny rectangle based on two absolute `Point`s.
///
/// `p1` is the top-left corner and `p2` the bottom-right corner.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub p1: Point,
    pub p2: Point,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }
}

impl core::ops::Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl core::ops::Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Rect {
    /// Create a rectangle from two `Point`s.
    pub fn new(p1: Point, p2: Point) -> Rect {
        Rect { p1, p2 }
    }

    /// Create a rectangle from a `Point` and a size.
    pub fn from_size(pos: Point, width: f32, height: f32) -> Rect {
        Rect {
            p1: pos,
            p2: pos + Point::new(width, height),
        }
    }

    /// Test for intersections between two rectangles.
    ///
    /// Uses the separating axis short-circuit: the rectangles are apart only when one of them lies
    /// entirely to one side of the other. Shared edges count as an intersection.
    pub fn intersects(&self, other: Rect) -> bool {
        let (top1, right1, bottom1, left1) = self.get_bounds();
        let (top2, right2, bottom2, left2) = other.get_bounds();

        !(left2 > right1 || right2 < left1 || top2 > bottom1 || bottom2 < top1)
    }

    /// Compute the bounding box for this rectangle.
    ///
    /// # Returns
    ///
    /// Tuple of `(top, right, bottom, left)`, e.g. in CSS clockwise order.
    pub fn get_bounds(&self) -> (f32, f32, f32, f32) {
        (self.p1.y, self.p2.x, self.p2.y, self.p1.x)
    }

    pub fn width(&self) -> f32 {
        self.p2.x - self.p1.x
    }

    pub fn height(&self) -> f32 {
        self.p2.y - self.p1.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_intersect() {
        let size = 10.0;
        let r1 = Rect::from_size(Point::new(10.0, 10.0), size, size);

        // Test intersection between equal-sized rectangles
        for y in 0..3 {
            for x in 0..3 {
                let x = x as f32 * 5.0 + 5.0;
                let y = y as f32 * 5.0 + 5.0;

                let r2 = Rect::from_size(Point::new(x, y), size, size);

                assert!(r1.intersects(r2), "Should intersect");
                assert!(r2.intersects(r1), "Should intersect");
            }
        }

        // Test non-intersections
        for y in 0..3 {
            for x in 0..3 {
                if x == 1 && y == 1 {
                    continue;
                }

                let x = x as f32 * 11.0 - 1.0;
                let y = y as f32 * 11.0 - 1.0;

                let r2 = Rect::from_size(Point::new(x, y), size, size);

                assert!(!r1.intersects(r2), "Should not intersect");
                assert!(!r2.intersects(r1), "Should not intersect");
            }
        }

        // Test intersection between different-sized rectangles
        let r2 = Rect::new(Point::new(0.0, 0.0), Point::new(30.0, 30.0));

        assert!(r1.intersects(r2), "Should intersect");
        assert!(r2.intersects(r1), "Should intersect");
    }

    #[test]
    fn rect_touching_edges_intersect() {
        let r1 = Rect::from_size(Point::new(0.0, 0.0), 10.0, 10.0);
        let r2 = Rect::from_size(Point::new(10.0, 0.0), 10.0, 10.0);
        let r3 = Rect::from_size(Point::new(0.0, 10.0), 10.0, 10.0);

        assert!(r1.intersects(r2));
        assert!(r1.intersects(r3));
    }

    #[test]
    fn rect_separated_on_one_axis() {
        let r1 = Rect::from_size(Point::new(0.0, 0.0), 10.0, 10.0);

        // Overlapping columns, disjoint rows
        let r2 = Rect::from_size(Point::new(5.0, 20.0), 10.0, 10.0);
        // Overlapping rows, disjoint columns
        let r3 = Rect::from_size(Point::new(-30.0, 5.0), 10.0, 10.0);

        assert!(!r1.intersects(r2));
        assert!(!r1.intersects(r3));
    }

    #[test]
    fn rect_size() {
        let r = Rect::from_size(Point::new(-101.0, 58.0), 101.0, 83.0);

        assert_eq!(r.get_bounds(), (58.0, 0.0, 141.0, -101.0));
        assert_eq!(r.width(), 101.0);
        assert_eq!(r.height(), 83.0);
    }
}
