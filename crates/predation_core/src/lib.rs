//! # Predation Core
//!
//! The simulation engine for a predator/prey grid world.
//!
//! This crate contains the deterministic simulation logic, including:
//! - Grid geometry and random-walk movement
//! - Initial placement with unique cells
//! - The per-agent reproduce/move/eat/age cycle
//! - Tick orchestration and termination checks
//! - Metrics collection and structured logging
//!
//! ## Example
//!
//! ```
//! use predation_core::config::AppConfig;
//! use predation_core::engine::PopulationEngine;
//! use predation_core::render::NullSink;
//!
//! let mut config = AppConfig::default();
//! config.simulation.seed = Some(42);
//!
//! let mut engine = PopulationEngine::new();
//! engine.start(&config).expect("default config fits the grid");
//! let outcome = engine.run_to_end(&mut NullSink);
//! assert!(outcome.is_some_and(|o| o.is_terminal()));
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Tick orchestration over both populations
pub mod engine;
/// Error types
pub mod error;
/// Field geometry
pub mod grid;
/// Per-agent state machine
pub mod lifecycle;
/// Performance metrics collection and logging
pub mod metrics;
/// Random-walk movement resolver
pub mod movement;
/// Render sink abstraction
pub mod render;
/// Initial placement of agents
pub mod spawn;
/// Per-cell victim index for predation lookups
pub mod spatial_hash;
/// Population statistics
pub mod stats;
/// End-of-run conditions
pub mod termination;

pub use engine::{PopulationEngine, SimulationState};
pub use error::{ConfigError, SimulationError};
pub use metrics::{init_logging, Metrics};
pub use render::RenderSink;
pub use termination::Termination;
