//! Error handling for threatpath
//!
//! Provides error types for all layers of the planner:
//! - Geometry errors (degenerate paths, radii and partitions)
//! - Planning errors (precondition violations, search failures)
//! - Configuration errors (loading, saving, validation)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;

/// Geometry error type
///
/// Raised while constructing or querying geometric value types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A path needs at least two points
    #[error("Invalid path: expected at least 2 points, got {points}")]
    InvalidPath {
        /// Number of points supplied.
        points: usize,
    },

    /// Circle radius must be strictly positive
    #[error("Invalid radius: {radius} (must be > 0)")]
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },

    /// Outer ring offset must be finite and strictly positive
    #[error("Invalid robustness epsilon: {epsilon} (must be > 0)")]
    InvalidEpsilon {
        /// The rejected offset.
        epsilon: f64,
    },

    /// The partition line could not be truncated to a single chord
    #[error("Degenerate partition: {reason}")]
    DegeneratePartition {
        /// Why the partition could not be built.
        reason: String,
    },
}

/// Planning error type
///
/// Represents precondition and postcondition failures of the path planners.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanningError {
    /// The source lies inside the threat
    #[error("Source ({x}, {y}) lies inside the threat")]
    SourceInsideThreat {
        /// Source x coordinate.
        x: f64,
        /// Source y coordinate.
        y: f64,
    },

    /// The target lies inside the threat
    #[error("Target ({x}, {y}) lies inside the threat")]
    TargetInsideThreat {
        /// Target x coordinate.
        x: f64,
        /// Target y coordinate.
        y: f64,
    },

    /// Risk budget must not be negative
    #[error("Negative budget: {budget}")]
    NegativeBudget {
        /// The rejected budget.
        budget: f64,
    },

    /// The budget search hit its iteration cap before reaching tolerance
    #[error("Budget search did not converge after {iterations} iterations (residual {residual})")]
    SearchDivergence {
        /// Iterations performed.
        iterations: usize,
        /// Absolute risk error of the best candidate.
        residual: f64,
    },
}

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file format is not supported.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting {
        /// The offending key.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Main error type for threatpath
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Planning error
    #[error(transparent)]
    Planning(#[from] PlanningError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a planning error
    pub fn is_planning_error(&self) -> bool {
        matches!(self, Error::Planning(_))
    }

    /// Check if an endpoint violated the outside-the-threat precondition
    pub fn is_endpoint_inside(&self) -> bool {
        matches!(
            self,
            Error::Planning(PlanningError::SourceInsideThreat { .. })
                | Error::Planning(PlanningError::TargetInsideThreat { .. })
        )
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
