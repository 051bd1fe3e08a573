//! Low-level circle/line constructions.

use crate::Point;
use nalgebra::Vector2;
use std::f64::consts::{PI, TAU};

fn vec(p: &Point) -> Vector2<f64> {
    Vector2::new(p.x, p.y)
}

fn point(v: Vector2<f64>) -> Point {
    Point::new(v.x, v.y)
}

/// Normalizes an angle into `[0, 2PI)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Normalizes an angle into `(-PI, PI]`.
pub fn normalize_signed_angle(angle: f64) -> f64 {
    let a = normalize_angle(angle);
    if a > PI {
        a - TAU
    } else {
        a
    }
}

/// Points on the circle `(center, radius)` lying `distance` away from `start`.
///
/// Returns the counter-clockwise candidate (relative to the `center -> start`
/// ray) first. When no exact solution exists the distance is clamped into the
/// feasible band `[|d - r|, d + r]`, which collapses both candidates onto the
/// center line. `start == center` has no defined direction and yields the
/// point at angle zero.
pub fn points_at_distance_on_circle(
    center: &Point,
    radius: f64,
    start: &Point,
    distance: f64,
) -> [Point; 2] {
    let c = vec(center);
    let offset = vec(start) - c;
    let d = offset.norm();
    if d <= f64::EPSILON {
        let p = center.shifted(radius, 0.0);
        return [p, p];
    }

    let u = offset / d;
    let perp = Vector2::new(-u.y, u.x);

    // Distance from the center, along `u`, of the radical line.
    let a = ((radius * radius - distance * distance + d * d) / (2.0 * d)).clamp(-radius, radius);
    let h = (radius * radius - a * a).max(0.0).sqrt();

    let base = c + u * a;
    [point(base + perp * h), point(base - perp * h)]
}

/// Parameters `u` in `[0, 1]`-space of the line `a + u (b - a)` crossing the circle.
///
/// Returns `None` when the infinite line misses or only touches the circle.
pub fn line_circle_parameters(a: &Point, b: &Point, center: &Point, radius: f64) -> Option<(f64, f64)> {
    let d = vec(b) - vec(a);
    let f = vec(a) - vec(center);
    let qa = d.dot(&d);
    if qa <= f64::EPSILON {
        return None;
    }
    let qb = 2.0 * f.dot(&d);
    let qc = f.dot(&f) - radius * radius;
    let disc = qb * qb - 4.0 * qa * qc;
    if disc <= 0.0 {
        return None;
    }
    let root = disc.sqrt();
    Some(((-qb - root) / (2.0 * qa), (-qb + root) / (2.0 * qa)))
}

/// Point at parameter `u` on the line `a + u (b - a)`.
pub fn lerp(a: &Point, b: &Point, u: f64) -> Point {
    point(vec(a) + (vec(b) - vec(a)) * u)
}
