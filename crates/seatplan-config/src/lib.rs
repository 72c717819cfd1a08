//! Configuration system for seatplan.
//!
//! Load scoring weights and planner options from TOML or YAML files
//! without code changes. Every field has a default, and the defaults
//! reproduce the stock compatibility heuristic.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use seatplan_config::{SeatPlanConfig, TableScan};
//!
//! let config = SeatPlanConfig::from_toml_str(r#"
//!     [scoring]
//!     same_side_bonus = 20
//!
//!     [planner]
//!     table_scan = "parallel"
//! "#).unwrap();
//!
//! assert_eq!(config.scoring.same_side_bonus, 20);
//! assert_eq!(config.scoring.prefer_bonus, 30);
//! assert_eq!(config.planner.table_scan, TableScan::Parallel);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use seatplan_config::SeatPlanConfig;
//!
//! let config = SeatPlanConfig::load("seatplan.toml").unwrap_or_default();
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main optimizer configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SeatPlanConfig {
    /// Weights of the pairwise compatibility heuristic.
    #[serde(default)]
    pub scoring: ScoringWeights,

    /// Planner options.
    #[serde(default)]
    pub planner: PlannerConfig,
}

impl SeatPlanConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML,
    /// or fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the scoring weights.
    pub fn with_scoring(mut self, scoring: ScoringWeights) -> Self {
        self.scoring = scoring;
        self
    }

    /// Sets how eligible tables are scanned.
    pub fn with_table_scan(mut self, table_scan: TableScan) -> Self {
        self.planner.table_scan = table_scan;
        self
    }

    /// Checks values that deserialize fine but cannot be planned with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scoring.max_reasons == 0 {
            return Err(ConfigError::Invalid(
                "scoring.max_reasons must be at least 1".to_string(),
            ));
        }
        for (name, weight) in self.scoring.weights() {
            if !(-MAX_WEIGHT..=MAX_WEIGHT).contains(&weight) {
                return Err(ConfigError::Invalid(format!(
                    "scoring.{name} must be within -{MAX_WEIGHT}..={MAX_WEIGHT}, got {weight}"
                )));
            }
        }
        if !(0..=100).contains(&self.scoring.empty_table_score) {
            return Err(ConfigError::Invalid(format!(
                "scoring.empty_table_score must be within 0..=100, got {}",
                self.scoring.empty_table_score
            )));
        }
        Ok(())
    }
}

/// Largest magnitude accepted for a single scoring weight.
pub const MAX_WEIGHT: i64 = 1000;

/// Weights of the additive compatibility heuristic.
///
/// A pair starts at `base` and each triggered rule adds its weight. The sum
/// is clamped to `0..=100` afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ScoringWeights {
    pub base: i64,

    /// Either guest prefers the other.
    pub prefer_bonus: i64,

    /// Either guest avoids the other. Large enough to cancel every bonus.
    pub avoid_penalty: i64,

    pub same_side_bonus: i64,

    pub same_age_group_bonus: i64,

    /// Per interest present in both sets.
    pub shared_interest_bonus: i64,

    /// Per language present in both sets.
    pub shared_language_bonus: i64,

    /// Score of a candidate at a table with no occupants.
    pub empty_table_score: i64,

    /// Reasons kept per assignment.
    pub max_reasons: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base: 50,
            prefer_bonus: 30,
            avoid_penalty: -100,
            same_side_bonus: 15,
            same_age_group_bonus: 10,
            shared_interest_bonus: 5,
            shared_language_bonus: 8,
            empty_table_score: 50,
            max_reasons: 5,
        }
    }
}

impl ScoringWeights {
    /// Additive weights by field name.
    fn weights(&self) -> [(&'static str, i64); 7] {
        [
            ("base", self.base),
            ("prefer_bonus", self.prefer_bonus),
            ("avoid_penalty", self.avoid_penalty),
            ("same_side_bonus", self.same_side_bonus),
            ("same_age_group_bonus", self.same_age_group_bonus),
            ("shared_interest_bonus", self.shared_interest_bonus),
            ("shared_language_bonus", self.shared_language_bonus),
        ]
    }
}

/// Planner options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PlannerConfig {
    /// How eligible tables are scored for each guest.
    pub table_scan: TableScan,

    /// Minimum number of open tables before a parallel scan is used.
    pub parallel_threshold: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            table_scan: TableScan::Sequential,
            parallel_threshold: 16,
        }
    }
}

/// Table scan strategy.
///
/// Both strategies pick the same table: scores are collected in table order
/// and the first maximum wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableScan {
    #[default]
    Sequential,

    /// Score tables on the rayon pool.
    Parallel,
}
