//! Circular threat geometry.
//!
//! A [`Circle`] keeps two polygonal approximations of itself:
//! - the *inner* region, the disk of the true radius, used to measure risk;
//! - the *outer* region, inflated by the robustness epsilon, whose perimeter
//!   is what routed paths follow so they never graze the true boundary.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::sync::OnceLock;

use geo::Polygon;
use lyon::math::point;
use threatpath_core::{GeometryError, GeometrySettings};
use tracing::{debug, trace};

use crate::entity::Entity;
use crate::geometric::points_at_distance_on_circle;
use crate::region::{
    circle_ring, clip_segment, clipped_length, convex_hull, exterior_points, polygon_from_ring,
};
use crate::{Path, Point, Segment};

#[derive(Debug, Clone)]
pub struct Circle {
    center: Point,
    radius: f64,
    settings: GeometrySettings,
    inner_polygon: Polygon<f64>,
    outer_polygon: Polygon<f64>,
    boundary: OnceLock<Vec<Point>>,
}

impl Circle {
    /// Creates a threat with the default geometry settings.
    pub fn new(center: Point, radius: f64) -> Result<Self, GeometryError> {
        Self::with_settings(center, radius, GeometrySettings::default())
    }

    pub fn with_settings(
        center: Point,
        radius: f64,
        settings: GeometrySettings,
    ) -> Result<Self, GeometryError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeometryError::InvalidRadius { radius });
        }
        let epsilon = settings.robustness_epsilon;
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(GeometryError::InvalidEpsilon { epsilon });
        }
        let resolution = settings.boundary_sample_resolution.max(2);
        let inner = circle_ring(&center, radius, resolution);
        let outer = circle_ring(&center, radius + settings.robustness_epsilon, resolution);
        Ok(Self {
            center,
            radius,
            settings,
            inner_polygon: polygon_from_ring(&inner),
            outer_polygon: polygon_from_ring(&outer),
            boundary: OnceLock::new(),
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Radius of the inflated region that routed paths follow.
    pub fn outer_radius(&self) -> f64 {
        self.radius + self.settings.robustness_epsilon
    }

    pub fn perimeter(&self) -> f64 {
        TAU * self.radius
    }

    pub fn settings(&self) -> &GeometrySettings {
        &self.settings
    }

    pub fn inner_polygon(&self) -> &Polygon<f64> {
        &self.inner_polygon
    }

    pub fn outer_polygon(&self) -> &Polygon<f64> {
        &self.outer_polygon
    }

    pub fn contains(&self, p: &Point) -> bool {
        p.distance_to(&self.center) <= self.radius
    }

    /// Points sampled on the outer perimeter; computed once, on first use.
    pub fn boundary(&self) -> &[Point] {
        self.boundary
            .get_or_init(|| exterior_points(&self.outer_polygon))
    }

    /// Angular position of `p` as seen from the center.
    pub fn angle_of(&self, p: &Point) -> f64 {
        self.center.angle_to(p)
    }

    /// Point of the outer perimeter at `angle`.
    pub fn outer_point_at(&self, angle: f64) -> Point {
        self.center.shifted(self.outer_radius(), angle)
    }

    /// Risk exposure: total length of `path` inside the inner region.
    pub fn path_intersection_length(&self, path: &Path) -> f64 {
        path.segments()
            .map(|segment| self.segment_intersection_length(&segment))
            .sum()
    }

    fn segment_intersection_length(&self, segment: &Segment) -> f64 {
        if segment.length() <= f64::EPSILON {
            return 0.0;
        }
        // The polygon is inscribed in the true disk.
        if segment.distance_to_point(&self.center) >= self.radius {
            return 0.0;
        }
        clipped_length(&self.inner_polygon, &segment.canonical())
    }

    /// Point of the circle at distance `chord` from `start`, nearest `target`.
    ///
    /// A chord of at least the diameter exits diametrically, along the
    /// `start -> center` direction.
    pub fn exit_point(&self, start: &Point, chord: f64, target: &Point) -> Point {
        self.exit_point_at(self.radius, start, chord, target)
    }

    /// [`Circle::exit_point`] on the outer perimeter.
    pub fn outer_exit_point(&self, start: &Point, chord: f64, target: &Point) -> Point {
        self.exit_point_at(self.outer_radius(), start, chord, target)
    }

    fn exit_point_at(&self, radius: f64, start: &Point, chord: f64, target: &Point) -> Point {
        if chord >= 2.0 * radius {
            return start.shifted(2.0 * radius, start.angle_to(&self.center));
        }
        let [first, second] = points_at_distance_on_circle(&self.center, radius, start, chord);
        if second.distance_to(target) < first.distance_to(target) {
            second
        } else {
            first
        }
    }

    /// Tangent points on the outer perimeter as seen from `from`.
    ///
    /// Returns `(counter_clockwise, clockwise)` relative to the
    /// `center -> from` ray. Points within the epsilon ring have no tangent;
    /// both entries are then the radial projection of `from`.
    pub fn tangent_points(&self, from: &Point) -> (Point, Point) {
        let d = from.distance_to(&self.center);
        let r = self.outer_radius();
        let chord = (d * d - r * r).max(0.0).sqrt();
        let [ccw, cw] = points_at_distance_on_circle(&self.center, r, from, chord);
        (ccw, cw)
    }

    /// Raw angular difference between `start` and `end` times the radius.
    ///
    /// Not normalized: above `PI` radians this is the major arc.
    pub fn arc_length_between(&self, start: &Point, end: &Point) -> f64 {
        (self.angle_of(start) - self.angle_of(end)).abs() * self.radius
    }

    /// Outer-perimeter polyline along the shorter arc from `start` to `end`.
    pub fn boundary_between(&self, start: &Point, end: &Point) -> Vec<Point> {
        let angle1 = self.angle_of(start);
        let angle2 = self.angle_of(end);
        let small_angle = angle1.min(angle2);
        let great_angle = angle1.max(angle2);

        let (from, to) = if great_angle - small_angle <= PI {
            (small_angle, great_angle)
        } else {
            (great_angle, small_angle + TAU)
        };

        let step = self.settings.angle_step();
        let mut boundary = Vec::new();
        let mut k = 0usize;
        loop {
            let angle = from + k as f64 * step;
            // Absorbs rounding so an exact multiple of the step is not sampled twice.
            if angle >= to - 1e-12 {
                break;
            }
            boundary.push(self.outer_point_at(angle));
            k += 1;
        }
        boundary.push(self.outer_point_at(to));

        if boundary[0].distance_to(start) >= boundary[0].distance_to(end) {
            boundary.reverse();
        }
        boundary
    }

    /// `(min_x, min_y, max_x, max_y)` of the true disk.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    /// Finite segment separating the zones of `circle1` and `circle2`.
    ///
    /// The separating line is perpendicular to the center line and crosses it
    /// at a pivot weighted by the two radii. It is truncated to the convex hull
    /// of `source`, `target` and every circle's boundary.
    pub fn partition_between(
        circle1: &Circle,
        circle2: &Circle,
        source: &Point,
        target: &Point,
        all_circles: &[Circle],
    ) -> Result<Segment, GeometryError> {
        let centers = Segment::new(circle1.center, circle2.center);
        let centers_distance = centers.length();
        if centers_distance <= f64::EPSILON {
            return Err(GeometryError::DegeneratePartition {
                reason: "circles share a center".to_string(),
            });
        }
        let centers_angle = centers.angle();
        let pivot = circle1.center.shifted(
            (circle1.radius + (centers_distance - circle2.radius)) / 2.0,
            centers_angle,
        );

        let mut hull_points = vec![*source, *target];
        for circle in all_circles {
            hull_points.extend_from_slice(circle.boundary());
        }
        let hull = convex_hull(&hull_points);

        // Long enough to leave the hull on both sides.
        let reach = 2.0
            * hull_points
                .iter()
                .map(|p| p.distance_to(&pivot))
                .fold(0.0, f64::max)
            + 1.0;
        let unbounded = Segment::new(
            pivot.shifted(reach, centers_angle + 0.5 * PI),
            pivot.shifted(reach, centers_angle - 0.5 * PI),
        );

        let pieces = clip_segment(&hull, &unbounded);
        trace!("Partition line clipped into {} piece(s)", pieces.len());

        // A line meets a convex hull in one interval; the clipper may still
        // split it at hull vertices, so pieces are merged when they touch.
        let mut spans: Vec<(f64, f64)> = pieces
            .iter()
            .map(|piece| {
                let u0 = unbounded.a.distance_to(&piece[0]);
                let u1 = unbounded.a.distance_to(&piece[piece.len() - 1]);
                (u0.min(u1), u0.max(u1))
            })
            .collect();
        spans.sort_by(|x, y| x.0.total_cmp(&y.0));
        let Some(&(lo, first_hi)) = spans.first() else {
            return Err(GeometryError::DegeneratePartition {
                reason: "perpendicular misses the hull".to_string(),
            });
        };
        let mut hi = first_hi;
        for &(next_lo, next_hi) in &spans[1..] {
            if next_lo - hi > 1e-9 {
                return Err(GeometryError::DegeneratePartition {
                    reason: format!(
                        "perpendicular crosses the hull in {} disjoint pieces",
                        spans.len()
                    ),
                });
            }
            hi = hi.max(next_hi);
        }

        let start = unbounded.a.shifted(lo, unbounded.angle());
        let end = unbounded.a.shifted(hi, unbounded.angle());
        if start.distance_to(&end) <= 1e-9 {
            return Err(GeometryError::DegeneratePartition {
                reason: "perpendicular only touches the hull".to_string(),
            });
        }
        debug!(
            "Partition between {} and {}: {} -> {}",
            circle1, circle2, start, end
        );
        Ok(Segment::new(start, end))
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && self.radius == other.radius && self.settings == other.settings
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle({},{})", self.center, self.radius)
    }
}

impl Entity for Circle {
    fn contains(&self, p: &Point) -> bool {
        Circle::contains(self, p)
    }

    fn boundary(&self) -> &[Point] {
        Circle::boundary(self)
    }

    fn path_intersection_length(&self, path: &Path) -> f64 {
        Circle::path_intersection_length(self, path)
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        Circle::bounds(self)
    }

    fn outline(&self) -> lyon::path::Path {
        let mut builder = lyon::path::Path::builder();
        builder.add_circle(
            point(self.center.x as f32, self.center.y as f32),
            self.outer_radius() as f32,
            lyon::path::Winding::Positive,
        );
        builder.build()
    }
}
