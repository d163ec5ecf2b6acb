//! Axis-aligned level rectangle.
//!
//! Rectangles authored in the editor are stored exactly as they were dragged,
//! so width and height can be negative while (and after) the author drags up
//! or to the left. Every consumer goes through [`LevelRect::normalized`] or the
//! helpers built on it, which resolve the rectangle into a min corner plus
//! positive extents.

use raylib::prelude::{Rectangle, Vector2};

/// Rectangle as stored on `Obstacle`, `Ground` and `Fire` entities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LevelRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Same rectangle expressed with the min corner and non-negative extents.
    pub fn normalized(&self) -> Self {
        let x0 = self.x.min(self.x + self.width);
        let y0 = self.y.min(self.y + self.height);
        Self {
            x: x0,
            y: y0,
            width: self.width.abs(),
            height: self.height.abs(),
        }
    }

    /// Returns (min, max) corners of the normalized rectangle.
    pub fn aabb(&self) -> (Vector2, Vector2) {
        let n = self.normalized();
        (
            Vector2::new(n.x, n.y),
            Vector2::new(n.x + n.width, n.y + n.height),
        )
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Half extents, always non-negative.
    pub fn half_extents(&self) -> Vector2 {
        Vector2::new(self.width.abs() * 0.5, self.height.abs() * 0.5)
    }

    /// Point containment, inclusive on every edge.
    pub fn has_point(&self, point: Vector2) -> bool {
        let (min, max) = self.aabb();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Uniformly distributed point inside the rectangle for `u`, `v` in [0, 1].
    pub fn lerp_point(&self, u: f32, v: f32) -> Vector2 {
        let n = self.normalized();
        Vector2::new(n.x + n.width * u, n.y + n.height * v)
    }

    /// Raylib rectangle for drawing.
    pub fn to_raylib(&self) -> Rectangle {
        let n = self.normalized();
        Rectangle {
            x: n.x,
            y: n.y,
            width: n.width,
            height: n.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_normalized_positive_is_identity() {
        let r = LevelRect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.normalized(), r);
    }

    #[test]
    fn test_normalized_negative_extents() {
        let r = LevelRect::new(40.0, 60.0, -30.0, -40.0);
        let n = r.normalized();
        assert!(approx_eq(n.x, 10.0));
        assert!(approx_eq(n.y, 20.0));
        assert!(approx_eq(n.width, 30.0));
        assert!(approx_eq(n.height, 40.0));
    }

    #[test]
    fn test_has_point_matches_positive_equivalent() {
        let negative = LevelRect::new(40.0, 60.0, -30.0, -40.0);
        let positive = LevelRect::new(10.0, 20.0, 30.0, 40.0);
        let points = [
            (10.0, 20.0),
            (40.0, 60.0),
            (25.0, 40.0),
            (9.9, 40.0),
            (40.1, 40.0),
            (25.0, 19.9),
            (25.0, 60.1),
            (0.0, 0.0),
        ];
        for (x, y) in points {
            let p = Vector2::new(x, y);
            assert_eq!(negative.has_point(p), positive.has_point(p), "point {x},{y}");
        }
    }

    #[test]
    fn test_center_is_orientation_independent() {
        let negative = LevelRect::new(40.0, 60.0, -30.0, -40.0);
        let positive = LevelRect::new(10.0, 20.0, 30.0, 40.0);
        assert!(approx_eq(negative.center().x, positive.center().x));
        assert!(approx_eq(negative.center().y, positive.center().y));
        assert!(approx_eq(negative.half_extents().x, 15.0));
        assert!(approx_eq(negative.half_extents().y, 20.0));
    }

    #[test]
    fn test_lerp_point_stays_inside() {
        let r = LevelRect::new(100.0, 100.0, -50.0, 20.0);
        for (u, v) in [(0.0, 0.0), (1.0, 1.0), (0.5, 0.25)] {
            assert!(r.has_point(r.lerp_point(u, v)));
        }
    }
}
