//! Bounded bisection over a monotone parameter.

use threatpath_core::{PlanningError, Result, SearchSettings};
use tracing::trace;

/// Result of a converged search.
#[derive(Debug, Clone)]
pub struct SearchOutcome<T> {
    pub value: T,
    pub parameter: f64,
    pub measured: f64,
    pub iterations: usize,
}

/// Finds `x` in `[lo, hi]` whose measured quantity equals `goal`.
///
/// `evaluate` maps a parameter to a candidate and its measured quantity, which
/// must be non-decreasing in the parameter with `measure(lo) <= goal <=
/// measure(hi)`. Stops as soon as the measurement is within the tolerance and
/// fails with `SearchDivergence` once the iteration cap is exhausted.
pub fn bisect<T, F>(
    mut lo: f64,
    mut hi: f64,
    goal: f64,
    settings: &SearchSettings,
    mut evaluate: F,
) -> Result<SearchOutcome<T>>
where
    F: FnMut(f64) -> Result<(T, f64)>,
{
    let tolerance = settings.budget_search_tolerance;
    let mut best_residual = f64::INFINITY;

    for iteration in 1..=settings.max_search_iterations {
        let mid = 0.5 * (lo + hi);
        let (value, measured) = evaluate(mid)?;
        let residual = (measured - goal).abs();
        trace!(
            "bisect #{}: x={:.12} measured={:.6} goal={:.6}",
            iteration,
            mid,
            measured,
            goal
        );

        if residual <= tolerance {
            return Ok(SearchOutcome {
                value,
                parameter: mid,
                measured,
                iterations: iteration,
            });
        }
        best_residual = best_residual.min(residual);

        if measured < goal {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Err(PlanningError::SearchDivergence {
        iterations: settings.max_search_iterations,
        residual: best_residual,
    }
    .into())
}
