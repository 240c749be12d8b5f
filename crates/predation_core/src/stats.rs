//! Running population statistics.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Counters collected during a single tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickStats {
    pub tick: u64,
    pub predator_births: usize,
    pub victim_births: usize,
    /// Victims eaten this tick.
    pub predations: usize,
    /// Predators that ran out of life this tick.
    pub starvations: usize,
    /// Population sizes after the tick.
    pub predators: usize,
    pub victims: usize,
}

/// Totals over a whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTotals {
    pub ticks: u64,
    pub predator_births: usize,
    pub victim_births: usize,
    pub predations: usize,
    pub starvations: usize,
    pub peak_predators: usize,
    pub peak_victims: usize,
}

impl RunTotals {
    pub fn record(&mut self, stats: &TickStats) {
        self.ticks = stats.tick;
        self.predator_births += stats.predator_births;
        self.victim_births += stats.victim_births;
        self.predations += stats.predations;
        self.starvations += stats.starvations;
        self.peak_predators = self.peak_predators.max(stats.predators);
        self.peak_victims = self.peak_victims.max(stats.victims);
    }
}

/// Bounded window of recent ticks for sparklines.
#[derive(Debug, Clone)]
pub struct PopulationHistory {
    capacity: usize,
    samples: VecDeque<TickStats>,
}

impl Default for PopulationHistory {
    fn default() -> Self {
        Self::new(120)
    }
}

impl PopulationHistory {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            samples: VecDeque::with_capacity(capacity.max(1)),
        }
    }

    pub fn push(&mut self, stats: TickStats) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(stats);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&TickStats> {
        self.samples.back()
    }

    #[must_use]
    pub fn predator_series(&self) -> Vec<u64> {
        self.samples.iter().map(|s| s.predators as u64).collect()
    }

    #[must_use]
    pub fn victim_series(&self) -> Vec<u64> {
        self.samples.iter().map(|s| s.victims as u64).collect()
    }
}
