//! Path synthesis around a single circular threat.
//!
//! Three variants share the same inputs:
//! - **Shortest**: the direct segment, whatever its risk.
//! - **Safest**: the shortest path with zero risk.
//! - **Budget-constrained**: the shortest path whose risk equals a budget,
//!   interpolated between the two extremes by a bounded bisection.

use serde::{Deserialize, Serialize};
use threatpath_core::{PlanningError, Result, SearchSettings};
use threatpath_geometry::{Circle, Path, Point};
use tracing::debug;

use crate::route::{BudgetFamily, Detour, MAX_PENETRATION};
use crate::search::bisect;

/// A planned path together with its length and risk exposure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedPath {
    pub path: Path,
    pub length: f64,
    pub risk: f64,
}

impl PlannedPath {
    /// Measures `path` against `threat`.
    pub fn evaluate(path: Path, threat: &Circle) -> Self {
        let length = path.length();
        let risk = threat.path_intersection_length(&path);
        Self { path, length, risk }
    }

    pub fn into_parts(self) -> (Path, f64, f64) {
        (self.path, self.length, self.risk)
    }
}

/// Single-threat planner carrying the budget search settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleThreatPlanner {
    settings: SearchSettings,
}

impl SingleThreatPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: SearchSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// The direct segment from `source` to `target`.
    pub fn shortest_path(&self, source: &Point, target: &Point, threat: &Circle) -> Result<PlannedPath> {
        check_endpoints(source, target, threat)?;
        let path = Path::new(vec![*source, *target])?;
        Ok(PlannedPath::evaluate(path, threat))
    }

    /// The shortest path that never enters the threat.
    pub fn safest_path(&self, source: &Point, target: &Point, threat: &Circle) -> Result<PlannedPath> {
        let direct = self.shortest_path(source, target, threat)?;
        if direct.risk == 0.0 {
            return Ok(direct);
        }

        let detour = Detour::around(source, target, threat);
        debug!(
            "Safest path around {} on {:?} side, arc span {:.4} rad",
            threat, detour.side, detour.span
        );
        let path = detour.path(source, target, threat)?;
        Ok(PlannedPath::evaluate(path, threat))
    }

    /// The shortest path whose risk equals `budget`.
    ///
    /// A zero budget yields [`SingleThreatPlanner::safest_path`]; a budget at
    /// least the direct segment's risk yields
    /// [`SingleThreatPlanner::shortest_path`].
    pub fn shortest_path_with_budget_constraint(
        &self,
        source: &Point,
        target: &Point,
        threat: &Circle,
        budget: f64,
    ) -> Result<PlannedPath> {
        if budget.is_nan() || budget < 0.0 {
            return Err(PlanningError::NegativeBudget { budget }.into());
        }

        let direct = self.shortest_path(source, target, threat)?;
        if budget == 0.0 {
            return self.safest_path(source, target, threat);
        }
        if budget >= direct.risk {
            debug!(
                "Budget {} covers the direct risk {:.4}; taking the shortest path",
                budget, direct.risk
            );
            return Ok(direct);
        }

        let family = BudgetFamily::new(*source, *target, threat);
        debug!(
            "Searching budget path around {}: budget {}, direct risk {:.4}, anchor {:?}",
            threat,
            budget,
            direct.risk,
            family.anchor()
        );

        let outcome = bisect(0.0, MAX_PENETRATION, budget, &self.settings, |lambda| {
            let planned = PlannedPath::evaluate(family.path_at(lambda)?, threat);
            let risk = planned.risk;
            Ok((planned, risk))
        })?;

        debug!(
            "Budget search converged after {} iteration(s) at penetration {:.6}",
            outcome.iterations, outcome.parameter
        );
        Ok(outcome.value)
    }
}

/// [`SingleThreatPlanner::shortest_path`] with default settings.
pub fn shortest_path(source: &Point, target: &Point, threat: &Circle) -> Result<PlannedPath> {
    SingleThreatPlanner::new().shortest_path(source, target, threat)
}

/// [`SingleThreatPlanner::safest_path`] with default settings.
pub fn safest_path(source: &Point, target: &Point, threat: &Circle) -> Result<PlannedPath> {
    SingleThreatPlanner::new().safest_path(source, target, threat)
}

/// [`SingleThreatPlanner::shortest_path_with_budget_constraint`] with default settings.
pub fn shortest_path_with_budget_constraint(
    source: &Point,
    target: &Point,
    threat: &Circle,
    budget: f64,
) -> Result<PlannedPath> {
    SingleThreatPlanner::new().shortest_path_with_budget_constraint(source, target, threat, budget)
}

fn check_endpoints(source: &Point, target: &Point, threat: &Circle) -> Result<()> {
    if threat.contains(source) {
        return Err(PlanningError::SourceInsideThreat {
            x: source.x,
            y: source.y,
        }
        .into());
    }
    if threat.contains(target) {
        return Err(PlanningError::TargetInsideThreat {
            x: target.x,
            y: target.y,
        }
        .into());
    }
    Ok(())
}
