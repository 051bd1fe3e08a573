//! Polygonal regions backed by `geo`.

use crate::{Path, Point, Segment};
use geo::{BooleanOps, ConvexHull, LineString, MultiLineString, MultiPoint, Polygon};

/// Samples a closed ring of `2 * resolution` vertices on a circle.
///
/// Vertex `k` sits at angle `k * PI / resolution`; the ring repeats its first
/// vertex at the end.
pub fn circle_ring(center: &Point, radius: f64, resolution: usize) -> Vec<Point> {
    let step = std::f64::consts::PI / resolution as f64;
    let count = 2 * resolution;
    let mut ring: Vec<Point> = (0..count)
        .map(|k| center.shifted(radius, k as f64 * step))
        .collect();
    ring.push(ring[0]);
    ring
}

pub fn polygon_from_ring(ring: &[Point]) -> Polygon<f64> {
    Polygon::new(LineString::from_iter(ring.iter().copied()), vec![])
}

pub fn exterior_points(polygon: &Polygon<f64>) -> Vec<Point> {
    polygon.exterior().coords().map(|c| Point::from(*c)).collect()
}

/// Pieces of `segment` lying inside `polygon`, each as an ordered polyline.
pub fn clip_segment(polygon: &Polygon<f64>, segment: &Segment) -> Vec<Vec<Point>> {
    let line = LineString::from(segment.to_geo());
    let clipped = polygon.clip(&MultiLineString::new(vec![line]), false);
    clipped
        .0
        .iter()
        .map(|ls| ls.coords().map(|c| Point::from(*c)).collect::<Vec<Point>>())
        .filter(|piece| piece.len() >= 2)
        .collect()
}

/// Total length of `segment` inside `polygon`.
pub fn clipped_length(polygon: &Polygon<f64>, segment: &Segment) -> f64 {
    clip_segment(polygon, segment)
        .iter()
        .map(|piece| Path::compute_path_length(piece))
        .sum()
}

pub fn convex_hull(points: &[Point]) -> Polygon<f64> {
    let multi: MultiPoint<f64> = points
        .iter()
        .map(|p| geo::Point::new(p.x, p.y))
        .collect::<Vec<_>>()
        .into();
    multi.convex_hull()
}
