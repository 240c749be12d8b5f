use anyhow::Result;
use std::time::{Duration, Instant};

use crate::model::config::AppConfig;
use crate::model::engine::PopulationEngine;
use crate::model::metrics::Metrics;
use crate::model::stats::{PopulationHistory, TickStats};
use crate::model::termination::Termination;
use predation_tui::FieldFrame;

pub const MIN_TIME_SCALE: f64 = 0.5;
pub const MAX_TIME_SCALE: f64 = 4.0;

pub struct App {
    pub running: bool,
    pub paused: bool,
    pub config: AppConfig,
    pub engine: PopulationEngine,
    /// What the engine drew on its last tick.
    pub frame: FieldFrame,
    pub history: PopulationHistory,
    pub metrics: Metrics,
    pub time_scale: f64,
    pub last_outcome: Termination,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let mut engine = PopulationEngine::new();
        engine.start(&config)?;

        Ok(Self {
            running: true,
            paused: false,
            frame: FieldFrame::new(config.simulation.grid_size),
            history: PopulationHistory::new(config.display.history_len),
            metrics: Metrics::default(),
            time_scale: 1.0,
            last_outcome: Termination::Continue,
            engine,
            config,
        })
    }

    /// Throws the current run away and starts a fresh one from the same
    /// config.
    pub fn restart(&mut self) -> Result<()> {
        self.engine.stop();
        self.frame = FieldFrame::new(self.config.simulation.grid_size);
        self.history.clear();
        self.metrics.reset();
        self.last_outcome = Termination::Continue;
        self.engine.start(&self.config)?;
        Ok(())
    }

    /// Advances the engine one tick, feeding the frame, history and metrics.
    pub fn tick(&mut self) -> Option<Termination> {
        let started = Instant::now();
        let outcome = self.engine.advance(&mut self.frame)?;
        let elapsed = started.elapsed();

        if outcome == Termination::Continue {
            let stats = self.current_stats();
            self.metrics
                .record_tick(elapsed, stats.predators, stats.victims);
            self.history.push(stats);
        }
        self.last_outcome = outcome;
        Some(outcome)
    }

    pub fn is_finished(&self) -> bool {
        self.last_outcome.is_terminal()
    }

    pub fn current_stats(&self) -> TickStats {
        self.engine
            .state()
            .map(|s| s.last_stats)
            .unwrap_or_default()
    }

    pub fn iterations_left(&self) -> u32 {
        self.engine.state().map_or(0, |s| s.iterations_left)
    }

    pub fn tick_number(&self) -> u64 {
        self.engine.state().map_or(0, |s| s.tick)
    }

    /// Wall-clock time between ticks at the current speed.
    pub fn tick_interval(&self) -> Duration {
        let base = Duration::from_millis(self.config.display.tick_interval_ms);
        Duration::from_secs_f64(base.as_secs_f64() / self.time_scale)
    }

    pub fn speed_up(&mut self) {
        self.time_scale = (self.time_scale + 0.5).min(MAX_TIME_SCALE);
    }

    pub fn slow_down(&mut self) {
        self.time_scale = (self.time_scale - 0.5).max(MIN_TIME_SCALE);
    }
}
