//! Configuration for threatpath
//!
//! Tunable constants of the geometry engine and the budget search.
//! Supports JSON and TOML file formats.
//!
//! Configuration is organized into two sections:
//! - Geometry settings (boundary sampling, robustness margin)
//! - Search settings (budget tolerance, iteration cap)

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of boundary samples per half-turn.
pub const DEFAULT_BOUNDARY_SAMPLE_RESOLUTION: usize = 40;

/// Default inflation of the outer region, in distance units.
pub const DEFAULT_ROBUSTNESS_EPSILON: f64 = 1.0;

/// Default absolute tolerance of the budget search.
pub const DEFAULT_BUDGET_SEARCH_TOLERANCE: f64 = 1e-2;

/// Default iteration cap of the budget search.
pub const DEFAULT_MAX_SEARCH_ITERATIONS: usize = 100;

/// Geometry settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometrySettings {
    /// Samples per half-turn used for polygons and arcs
    pub boundary_sample_resolution: usize,
    /// Outer region inflation
    pub robustness_epsilon: f64,
}

impl Default for GeometrySettings {
    fn default() -> Self {
        Self {
            boundary_sample_resolution: DEFAULT_BOUNDARY_SAMPLE_RESOLUTION,
            robustness_epsilon: DEFAULT_ROBUSTNESS_EPSILON,
        }
    }
}

impl GeometrySettings {
    /// Angular step between two consecutive boundary samples.
    pub fn angle_step(&self) -> f64 {
        std::f64::consts::PI / self.boundary_sample_resolution.max(2) as f64
    }
}

/// Budget search settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Accepted absolute difference between risk and budget
    pub budget_search_tolerance: f64,
    /// Maximum bisection steps before giving up
    pub max_search_iterations: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            budget_search_tolerance: DEFAULT_BUDGET_SEARCH_TOLERANCE,
            max_search_iterations: DEFAULT_MAX_SEARCH_ITERATIONS,
        }
    }
}

/// Complete planner configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Geometry engine settings
    pub geometry: GeometrySettings,
    /// Budget search settings
    pub search: SearchSettings,
}

impl PlannerConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a `.toml` or `.json` file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        config.validate()?;
        tracing::debug!("Loaded planner config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a `.toml` or `.json` file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.geometry.boundary_sample_resolution < 2 {
            return Err(invalid(
                "geometry.boundary_sample_resolution",
                "must be >= 2",
            ));
        }

        if !(self.geometry.robustness_epsilon.is_finite() && self.geometry.robustness_epsilon > 0.0)
        {
            return Err(invalid("geometry.robustness_epsilon", "must be > 0"));
        }

        if !(self.search.budget_search_tolerance.is_finite()
            && self.search.budget_search_tolerance > 0.0)
        {
            return Err(invalid("search.budget_search_tolerance", "must be > 0"));
        }

        if self.search.max_search_iterations == 0 {
            return Err(invalid("search.max_search_iterations", "must be > 0"));
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidSetting {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
