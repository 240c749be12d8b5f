use anyhow::{Context, Result};
use serde::Serialize;
use std::time::Instant;

use crate::model::config::AppConfig;
use crate::model::engine::PopulationEngine;
use crate::model::metrics::Metrics;
use crate::model::render::FrameBuffer;
use crate::model::stats::RunTotals;
use crate::model::termination::Termination;

/// Summary of a run executed without a display.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub outcome: Termination,
    pub message: Option<String>,
    pub seed: Option<u64>,
    pub ticks: u64,
    pub predators: usize,
    pub victims: usize,
    pub totals: RunTotals,
    pub avg_tick_us: u64,
    pub slowest_tick_us: u64,
}

/// Runs ticks back-to-back until the simulation ends.
pub fn run_headless(config: &AppConfig) -> Result<RunReport> {
    let mut engine = PopulationEngine::new();
    engine.start(config)?;

    let mut sink = FrameBuffer::default();
    let mut metrics = Metrics::new(config.simulation.iterations.max(10) as u64 / 10);

    let outcome = loop {
        let started = Instant::now();
        let outcome = engine
            .advance(&mut sink)
            .context("engine stopped before the run ended")?;
        if outcome.is_terminal() {
            break outcome;
        }
        if let Some(state) = engine.state() {
            metrics.record_tick(started.elapsed(), state.predators.len(), state.victims.len());
        }
    };

    let state = engine
        .state()
        .context("finished run has no state")?;
    let report = RunReport {
        outcome,
        message: sink.message.clone(),
        seed: config.simulation.seed,
        ticks: state.tick,
        predators: state.predators.len(),
        victims: state.victims.len(),
        totals: state.totals,
        avg_tick_us: metrics.average_tick().as_micros() as u64,
        slowest_tick_us: metrics.slowest_tick().as_micros() as u64,
    };

    tracing::info!(
        outcome = ?report.outcome,
        ticks = report.ticks,
        predators = report.predators,
        victims = report.victims,
        peak_victims = report.totals.peak_victims,
        "Headless run complete"
    );

    Ok(report)
}
