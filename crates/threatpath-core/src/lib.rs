//! # threatpath Core
//!
//! Core types shared by the threatpath crates: the error taxonomy and the
//! tunable planner configuration.

pub mod config;
pub mod error;

pub use config::{GeometrySettings, PlannerConfig, SearchSettings};
pub use error::{ConfigError, Error, GeometryError, PlanningError, Result};
