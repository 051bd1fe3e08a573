//! Route geometry around a single circular threat.
//!
//! A [`Detour`] is the zero-risk way around one side of the threat: the
//! tangent from the source onto the outer perimeter, the arc along it, and
//! the tangent back out to the target. A [`BudgetFamily`] bends that detour
//! into the threat by a continuous penetration parameter `lambda` in `[0, 2]`:
//!
//! - `0..=1` cuts a growing chord into the arc, anchored at the tangent point
//!   of the endpoint farther from the threat; its length is
//!   `2 (r + epsilon) sin(lambda * span / 2)`, so `lambda = 1` is the chord
//!   joining both tangent points;
//! - `1..=2` slides both chord endpoints from the tangent points towards the
//!   points where the direct segment crosses the outer perimeter.
//!
//! `lambda = 0` is the detour itself, `lambda = 2` runs along the direct
//! segment, and the chord's angular span grows with `lambda` throughout, so
//! risk is non-decreasing and length non-increasing in `lambda`.

use threatpath_core::GeometryError;
use threatpath_geometry::geometric::{
    line_circle_parameters, lerp, normalize_angle, normalize_signed_angle,
};
use threatpath_geometry::{Circle, Path, Point};

/// Upper end of the penetration parameter.
pub const MAX_PENETRATION: f64 = 2.0;

/// Tolerance below which two consecutive path points are merged.
const POINT_MERGE_TOLERANCE: f64 = 1e-9;

/// Direction of travel around the threat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    CounterClockwise,
    Clockwise,
}

impl Side {
    pub fn sign(self) -> f64 {
        match self {
            Side::CounterClockwise => 1.0,
            Side::Clockwise => -1.0,
        }
    }
}

/// Zero-risk tangent detour around one side of a threat.
#[derive(Debug, Clone, Copy)]
pub struct Detour {
    pub side: Side,
    /// Tangent point reached from the source.
    pub entry: Point,
    /// Tangent point leaving towards the target.
    pub exit: Point,
    pub entry_angle: f64,
    pub exit_angle: f64,
    /// Angle travelled along the outer perimeter, in `[0, 2PI)`.
    pub span: f64,
}

impl Detour {
    /// The shorter of the two detours; ties go counter-clockwise.
    pub fn around(source: &Point, target: &Point, threat: &Circle) -> Detour {
        let ccw = Self::on_side(source, target, threat, Side::CounterClockwise);
        let cw = Self::on_side(source, target, threat, Side::Clockwise);
        // Both sides share their tangent lengths, so the arc decides.
        if cw.span < ccw.span {
            cw
        } else {
            ccw
        }
    }

    pub fn on_side(source: &Point, target: &Point, threat: &Circle, side: Side) -> Detour {
        let (source_ccw, source_cw) = threat.tangent_points(source);
        let (target_ccw, target_cw) = threat.tangent_points(target);
        let (entry, exit) = match side {
            Side::CounterClockwise => (source_ccw, target_cw),
            Side::Clockwise => (source_cw, target_ccw),
        };
        let entry_angle = threat.angle_of(&entry);
        let exit_angle = threat.angle_of(&exit);
        let span = normalize_angle((exit_angle - entry_angle) * side.sign());
        Detour {
            side,
            entry,
            exit,
            entry_angle,
            exit_angle,
            span,
        }
    }

    /// `source -> entry -> arc -> exit -> target`.
    pub fn path(&self, source: &Point, target: &Point, threat: &Circle) -> Result<Path, GeometryError> {
        let mut points = vec![*source];
        extend_merged(&mut points, threat.boundary_between(&self.entry, &self.exit));
        push_merged(&mut points, *target);
        Path::new(points)
    }
}

/// Which endpoint the growing chord is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Source,
    Target,
}

impl Anchor {
    /// The endpoint farther from the threat's center; exact ties fall back to
    /// the lexicographically smaller point so the choice survives swapping
    /// source and target.
    pub fn farther_of(source: &Point, target: &Point, threat: &Circle) -> Anchor {
        let ds = source.distance_to(&threat.center());
        let dt = target.distance_to(&threat.center());
        if ds > dt || (ds == dt && !target.lexicographic_lt(source)) {
            Anchor::Source
        } else {
            Anchor::Target
        }
    }
}

/// Where one end of the sliding chord heads during the second phase.
#[derive(Debug, Clone, Copy)]
enum Slide {
    /// Along the outer perimeter by this many radians, away from the detour.
    Perimeter(f64),
    /// Straight towards the endpoint itself, which lies within the epsilon ring.
    Endpoint,
}

/// One-parameter family of paths between a detour and the direct segment.
#[derive(Debug, Clone)]
pub struct BudgetFamily<'a> {
    threat: &'a Circle,
    source: Point,
    target: Point,
    detour: Detour,
    anchor: Anchor,
    source_slide: Slide,
    target_slide: Slide,
}

impl<'a> BudgetFamily<'a> {
    pub fn new(source: Point, target: Point, threat: &'a Circle) -> Self {
        let detour = Detour::around(&source, &target, threat);
        let anchor = Anchor::farther_of(&source, &target, threat);
        let sign = detour.side.sign();

        let crossings = line_circle_parameters(
            &source,
            &target,
            &threat.center(),
            threat.outer_radius(),
        );
        let (source_slide, target_slide) = match crossings {
            Some((u_in, u_out)) => {
                let source_slide = if u_in > 0.0 {
                    let crossing = threat.angle_of(&lerp(&source, &target, u_in));
                    let back = normalize_signed_angle((detour.entry_angle - crossing) * sign);
                    Slide::Perimeter(back.max(0.0))
                } else {
                    Slide::Endpoint
                };
                let target_slide = if u_out < 1.0 {
                    let crossing = threat.angle_of(&lerp(&source, &target, u_out));
                    let ahead = normalize_signed_angle((crossing - detour.exit_angle) * sign);
                    Slide::Perimeter(ahead.max(0.0))
                } else {
                    Slide::Endpoint
                };
                (source_slide, target_slide)
            }
            None => (Slide::Perimeter(0.0), Slide::Perimeter(0.0)),
        };

        Self {
            threat,
            source,
            target,
            detour,
            anchor,
            source_slide,
            target_slide,
        }
    }

    pub fn detour(&self) -> &Detour {
        &self.detour
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Path for penetration `lambda`, clamped into `[0, MAX_PENETRATION]`.
    pub fn path_at(&self, lambda: f64) -> Result<Path, GeometryError> {
        let lambda = lambda.clamp(0.0, MAX_PENETRATION);
        if lambda <= 1.0 {
            self.chord_into_arc(lambda)
        } else {
            self.sliding_chord(lambda - 1.0)
        }
    }

    fn chord_into_arc(&self, fraction: f64) -> Result<Path, GeometryError> {
        let threat = self.threat;
        let detour = &self.detour;
        let sweep = fraction * detour.span;
        let chord = 2.0 * threat.outer_radius() * (0.5 * sweep).sin();

        let mut points = vec![self.source];
        match self.anchor {
            Anchor::Source => {
                push_merged(&mut points, detour.entry);
                let cut = if chord <= POINT_MERGE_TOLERANCE {
                    detour.entry
                } else {
                    threat.outer_exit_point(&detour.entry, chord, &detour.exit)
                };
                extend_merged(&mut points, threat.boundary_between(&cut, &detour.exit));
            }
            Anchor::Target => {
                let cut = if chord <= POINT_MERGE_TOLERANCE {
                    detour.exit
                } else {
                    threat.outer_exit_point(&detour.exit, chord, &detour.entry)
                };
                extend_merged(&mut points, threat.boundary_between(&detour.entry, &cut));
                push_merged(&mut points, detour.exit);
            }
        }
        push_merged(&mut points, self.target);
        Path::new(points)
    }

    fn sliding_chord(&self, t: f64) -> Result<Path, GeometryError> {
        let sign = self.detour.side.sign();
        let entry = match self.source_slide {
            Slide::Perimeter(back) => self
                .threat
                .outer_point_at(self.detour.entry_angle - sign * t * back),
            Slide::Endpoint => lerp(&self.detour.entry, &self.source, t),
        };
        let exit = match self.target_slide {
            Slide::Perimeter(ahead) => self
                .threat
                .outer_point_at(self.detour.exit_angle + sign * t * ahead),
            Slide::Endpoint => lerp(&self.detour.exit, &self.target, t),
        };

        let mut points = vec![self.source];
        push_merged(&mut points, entry);
        push_merged(&mut points, exit);
        push_merged(&mut points, self.target);
        Path::new(points)
    }
}

fn push_merged(points: &mut Vec<Point>, p: Point) {
    match points.last() {
        Some(last) if last.distance_to(&p) <= POINT_MERGE_TOLERANCE => {}
        _ => points.push(p),
    }
}

fn extend_merged(points: &mut Vec<Point>, more: Vec<Point>) {
    for p in more {
        push_merged(points, p);
    }
}
