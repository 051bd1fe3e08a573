//! # threatpath Geometry
//!
//! Threat geometry engine: value types for points, segments and paths, the
//! [`Entity`] capability shared by obstacles, and the [`Circle`] threat with
//! its tangent, arc and partition queries.
//!
//! ## Architecture
//!
//! ```text
//! Point ── Segment ── Path
//!                      │
//! Entity ◄── Threat ◄── Circle (inner/outer regions, boundary samples)
//! ```
//!
//! Polygon clipping and convex hulls are delegated to `geo`; circle/line
//! constructions use `nalgebra` vectors; outlines are exported as `lyon` paths.

pub mod circle;
pub mod entity;
pub mod geometric;
pub mod path;
pub mod point;
pub mod region;
pub mod segment;

pub use circle::Circle;
pub use entity::{Entity, Threat};
pub use path::Path;
pub use point::Point;
pub use segment::Segment;
