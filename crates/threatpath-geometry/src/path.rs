//! Polyline paths travelled by the agent.

use crate::{Point, Segment};
use lyon::math::point;
use serde::{Deserialize, Serialize};
use threatpath_core::GeometryError;

/// An ordered polyline of at least two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Creates a path, failing with `InvalidPath` for fewer than two points.
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::InvalidPath {
                points: points.len(),
            });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn first(&self) -> Point {
        self.points[0]
    }

    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    pub fn length(&self) -> f64 {
        Self::compute_path_length(&self.points)
    }

    /// Length of an arbitrary polyline, e.g. a circle's sampled boundary.
    pub fn compute_path_length(points: &[Point]) -> f64 {
        points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
    }

    pub fn reversed(&self) -> Path {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Open lyon polyline for drawing consumers.
    pub fn render(&self) -> lyon::path::Path {
        let mut builder = lyon::path::Path::builder();
        let first = self.first();
        builder.begin(point(first.x as f32, first.y as f32));
        for p in &self.points[1..] {
            builder.line_to(point(p.x as f32, p.y as f32));
        }
        builder.end(false);
        builder.build()
    }
}
