//! Scoring Configuration Module
//!
//! Provides per-asset scoring configuration loaded from TOML files. All
//! calibration constants of the scoring heuristics live here as named,
//! overridable values.
//!
//! ## Loading Order
//!
//! 1. `JOINTWATCH_CONFIG` environment variable (path to TOML file)
//! 2. `jointwatch.toml` in the current working directory
//! 3. Built-in defaults (see `defaults`)
//!
//! The configuration is a plain value: build it once and pass it to
//! `ScoringPipeline::new`. It is never mutated during a run and can be shared
//! across concurrent runs.

mod scoring_config;
pub mod defaults;
pub mod validation;

pub use scoring_config::*;
