//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every field has a default, so a partial file only
//! overrides what it names.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command line flags (applied by the binary)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [simulation]
//! grid_size = 300
//! iterations = 200
//! total_count = 120
//! density = 3
//! predator_life_period = 30
//! reproductive_period = 20
//! seed = 42
//!
//! [movement]
//! direction_policy = "legacy"
//!
//! [display]
//! tick_interval_ms = 500
//! ```
//!
//! The engine itself never range-checks these values; callers run
//! [`SimulationConfig::validate`] before starting a run.

use crate::error::ConfigError;
use crate::movement::DirectionPolicy;
use predation_data::CELL_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

pub const SIZE_RANGE: RangeInclusive<i32> = 100..=700;
pub const ITERATIONS_RANGE: RangeInclusive<u32> = 20..=1000;
pub const COUNT_RANGE: RangeInclusive<usize> = 10..=300;
pub const DENSITY_RANGE: RangeInclusive<u32> = 1..=10;
pub const PREDATOR_LIFE_RANGE: RangeInclusive<u32> = 1..=1000;
pub const REPRODUCTIVE_RANGE: RangeInclusive<u32> = 2..=1000;

/// Parameters of a single simulation run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Side of the square field in world units, a multiple of `CELL_SIZE`.
    pub grid_size: i32,
    /// Tick budget before the run ends with "Iterations end".
    pub iterations: u32,
    /// Initial number of agents across both species.
    pub total_count: usize,
    /// Victims per predator at spawn time.
    pub density: u32,
    /// Ticks a predator survives without eating.
    pub predator_life_period: u32,
    /// Ticks between reproductions.
    pub reproductive_period: u32,
    /// Seed for deterministic runs; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: 300,
            iterations: 200,
            total_count: 100,
            density: 3,
            predator_life_period: 30,
            reproductive_period: 20,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Number of predators placed at start: `round(total / (1 + density))`,
    /// halves rounding up.
    #[must_use]
    pub fn predator_count(&self) -> usize {
        let divisor = 1 + self.density as usize;
        (2 * self.total_count + divisor) / (2 * divisor)
    }

    #[must_use]
    pub fn victim_count(&self) -> usize {
        self.total_count.saturating_sub(self.predator_count())
    }

    /// Starting life budget of a newborn predator: half the adult budget,
    /// rounded half up.
    #[must_use]
    pub fn juvenile_life_period(&self) -> u32 {
        self.predator_life_period.div_ceil(2)
    }

    /// Checks every parameter against its accepted range and reports all
    /// violations at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut violations = Vec::new();

        if !SIZE_RANGE.contains(&self.grid_size) {
            violations.push(range_message("size", &SIZE_RANGE));
        } else if self.grid_size % CELL_SIZE != 0 {
            violations.push(format!("Check size. Must be a multiple of {CELL_SIZE}"));
        }
        if !ITERATIONS_RANGE.contains(&self.iterations) {
            violations.push(range_message("iterations count", &ITERATIONS_RANGE));
        }
        if !COUNT_RANGE.contains(&self.total_count) {
            violations.push(range_message("life objects count", &COUNT_RANGE));
        }
        if !DENSITY_RANGE.contains(&self.density) {
            violations.push(range_message("density", &DENSITY_RANGE));
        }
        if !PREDATOR_LIFE_RANGE.contains(&self.predator_life_period) {
            violations.push(range_message(
                "predators life period",
                &PREDATOR_LIFE_RANGE,
            ));
        }
        if !REPRODUCTIVE_RANGE.contains(&self.reproductive_period) {
            violations.push(range_message("reproductive period", &REPRODUCTIVE_RANGE));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(violations))
        }
    }
}

fn range_message<T: std::fmt::Display>(what: &str, range: &RangeInclusive<T>) -> String {
    format!(
        "Check {what}. Max - {}, min - {}",
        range.end(),
        range.start()
    )
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MovementConfig {
    pub direction_policy: DirectionPolicy,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Wall-clock period between ticks.
    pub tick_interval_ms: u64,
    /// Number of ticks kept for the population sparklines.
    pub history_len: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 500,
            history_len: 120,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub movement: MovementConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
