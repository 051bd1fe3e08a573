use crate::{Circle, Path, Point};
use lyon::math::point;

/// Capability shared by every obstacle the planner can reason about.
pub trait Entity {
    fn contains(&self, p: &Point) -> bool;

    /// Sampled perimeter, closed (first point repeated at the end).
    fn boundary(&self) -> &[Point];

    /// Length of `path` lying inside the entity.
    fn path_intersection_length(&self, path: &Path) -> f64;

    /// `(min_x, min_y, max_x, max_y)`
    fn bounds(&self) -> (f64, f64, f64, f64);

    /// Closed outline for drawing consumers.
    fn outline(&self) -> lyon::path::Path {
        let mut builder = lyon::path::Path::builder();
        let boundary = self.boundary();
        if let Some(first) = boundary.first() {
            builder.begin(point(first.x as f32, first.y as f32));
            for p in &boundary[1..] {
                builder.line_to(point(p.x as f32, p.y as f32));
            }
            builder.end(true);
        }
        builder.build()
    }
}

/// Every supported obstacle shape.
#[derive(Debug, Clone)]
pub enum Threat {
    Circle(Circle),
}

impl Threat {
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Threat::Circle(c) => Some(c),
        }
    }
}

impl From<Circle> for Threat {
    fn from(circle: Circle) -> Self {
        Threat::Circle(circle)
    }
}

impl Entity for Threat {
    fn contains(&self, p: &Point) -> bool {
        match self {
            Threat::Circle(s) => s.contains(p),
        }
    }

    fn boundary(&self) -> &[Point] {
        match self {
            Threat::Circle(s) => s.boundary(),
        }
    }

    fn path_intersection_length(&self, path: &Path) -> f64 {
        match self {
            Threat::Circle(s) => s.path_intersection_length(path),
        }
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            Threat::Circle(s) => s.bounds(),
        }
    }

    fn outline(&self) -> lyon::path::Path {
        match self {
            Threat::Circle(s) => Entity::outline(s),
        }
    }
}
