//! # threatpath
//!
//! Path planning for an agent crossing the plane past a single circular
//! threat. Risk is the length of path lying inside the threat.
//!
//! ## Architecture
//!
//! 1. **threatpath-core** - Errors and planner configuration
//! 2. **threatpath-geometry** - Points, paths, the circular threat and its partition lines
//! 3. **threatpath-planner** - Shortest, safest and budget-constrained planners
//! 4. **threatpath** - Logging setup and the demo binary

pub use threatpath_core::{
    ConfigError, Error, GeometryError, GeometrySettings, PlannerConfig, PlanningError, Result,
    SearchSettings,
};
pub use threatpath_geometry::{Circle, Entity, Path, Point, Segment, Threat};
pub use threatpath_planner::{
    safest_path, shortest_path, shortest_path_with_budget_constraint, PlannedPath,
    SingleThreatPlanner,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    // stdout carries the JSON report
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// A circle, a source, a target and a risk budget.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Scenario {
    pub center: Point,
    pub radius: f64,
    pub source: Point,
    pub target: Point,
    pub budget: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            center: Point::new(3.0, 4.0),
            radius: 3.0,
            source: Point::new(8.0, 3.0),
            target: Point::new(-0.5, 4.0),
            budget: 3.0,
        }
    }
}

/// All three plans for one scenario.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PlanReport {
    pub scenario: Scenario,
    pub shortest: PlannedPath,
    pub safest: PlannedPath,
    pub budget: PlannedPath,
}

/// Plans `scenario` under `config`.
pub fn plan_scenario(scenario: &Scenario, config: &PlannerConfig) -> Result<PlanReport> {
    config.validate()?;
    let threat = Circle::with_settings(scenario.center, scenario.radius, config.geometry)?;
    let planner = SingleThreatPlanner::with_settings(config.search);

    let shortest = planner.shortest_path(&scenario.source, &scenario.target, &threat)?;
    let safest = planner.safest_path(&scenario.source, &scenario.target, &threat)?;
    let budget = planner.shortest_path_with_budget_constraint(
        &scenario.source,
        &scenario.target,
        &threat,
        scenario.budget,
    )?;
    tracing::info!(
        "Planned {}: shortest {:.3}, safest {:.3}, budget {:.3} (risk {:.3})",
        threat,
        shortest.length,
        safest.length,
        budget.length,
        budget.risk
    );

    Ok(PlanReport {
        scenario: scenario.clone(),
        shortest,
        safest,
        budget,
    })
}
