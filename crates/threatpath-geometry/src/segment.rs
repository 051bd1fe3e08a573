//! Straight segments between two points.

use crate::Point;
use serde::{Deserialize, Serialize};

/// A straight segment from `a` to `b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f64 {
        self.a.distance_to(&self.b)
    }

    /// Directional angle of `a -> b`.
    pub fn angle(&self) -> f64 {
        self.a.angle_to(&self.b)
    }

    /// Same segment with its endpoints in lexicographic order.
    ///
    /// Intersection queries run on the canonical form so a segment and its
    /// reverse give bit-identical answers.
    pub fn canonical(&self) -> Segment {
        if self.b.lexicographic_lt(&self.a) {
            Segment::new(self.b, self.a)
        } else {
            *self
        }
    }

    /// Shortest distance from `p` to any point of the segment.
    pub fn distance_to_point(&self, p: &Point) -> f64 {
        let dx = self.b.x - self.a.x;
        let dy = self.b.y - self.a.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return self.a.distance_to(p);
        }
        let t = (((p.x - self.a.x) * dx + (p.y - self.a.y) * dy) / len_sq).clamp(0.0, 1.0);
        Point::new(self.a.x + t * dx, self.a.y + t * dy).distance_to(p)
    }

    pub fn to_geo(&self) -> geo::Line<f64> {
        geo::Line::new(self.a, self.b)
    }
}
