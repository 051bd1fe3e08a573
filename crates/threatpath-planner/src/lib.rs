//! # threatpath Planner
//!
//! Single-threat path synthesis on top of `threatpath-geometry`:
//!
//! - [`shortest_path`]: distance-optimal, risk-ignorant baseline
//! - [`safest_path`]: distance-minimal path with zero risk
//! - [`shortest_path_with_budget_constraint`]: risk held at a caller budget
//!
//! ## Usage
//!
//! ```rust
//! use threatpath_geometry::{Circle, Point};
//! use threatpath_planner::shortest_path_with_budget_constraint;
//!
//! let threat = Circle::new(Point::new(3.0, 4.0), 3.0)?;
//! let planned = shortest_path_with_budget_constraint(
//!     &Point::new(3.0, 10.0),
//!     &Point::new(3.0, -5.0),
//!     &threat,
//!     2.0,
//! )?;
//! assert!((planned.risk - 2.0).abs() < 1e-2);
//! # Ok::<(), threatpath_core::Error>(())
//! ```

pub mod route;
pub mod search;
pub mod single_threat;

pub use route::{Anchor, BudgetFamily, Detour, Side};
pub use single_threat::{
    safest_path, shortest_path, shortest_path_with_budget_constraint, PlannedPath,
    SingleThreatPlanner,
};
