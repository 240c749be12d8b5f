//! Tick timing metrics and logging setup.
//!
//! Provides structured logging and metrics tracking for monitoring
//! simulation performance.

use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Accumulates tick durations and population gauges for one run.
#[derive(Debug, Clone)]
pub struct Metrics {
    tick_count: u64,
    predators: usize,
    victims: usize,
    total_tick_time: Duration,
    slowest_tick: Duration,
    log_every: u64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Metrics {
    /// Creates a collector that logs a summary every `log_every` ticks.
    #[must_use]
    pub fn new(log_every: u64) -> Self {
        Self {
            tick_count: 0,
            predators: 0,
            victims: 0,
            total_tick_time: Duration::ZERO,
            slowest_tick: Duration::ZERO,
            log_every: log_every.max(1),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&mut self, duration: Duration, predators: usize, victims: usize) {
        self.tick_count += 1;
        self.predators = predators;
        self.victims = victims;
        self.total_tick_time += duration;
        self.slowest_tick = self.slowest_tick.max(duration);

        if self.tick_count % self.log_every == 0 {
            tracing::info!(
                tick = self.tick_count,
                predators = predators,
                victims = victims,
                avg_tick_us = self.average_tick().as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn population(&self) -> (usize, usize) {
        (self.predators, self.victims)
    }

    #[must_use]
    pub fn average_tick(&self) -> Duration {
        if self.tick_count == 0 {
            Duration::ZERO
        } else {
            self.total_tick_time / self.tick_count as u32
        }
    }

    #[must_use]
    pub fn slowest_tick(&self) -> Duration {
        self.slowest_tick
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.log_every);
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honors `RUST_LOG`, defaulting to `info`. Output goes to stderr so the
/// terminal UI on stdout stays intact.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
