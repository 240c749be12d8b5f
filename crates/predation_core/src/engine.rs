//! Population engine: owns both agent collections and advances them one
//! tick at a time.
//!
//! A tick runs the termination check, then every predator's cycle in index
//! order, then every victim's, then hands the scene to a [`RenderSink`].
//!
//! Collections are never resized while they are being walked. Offspring are
//! queued and appended once their collection's pass is over, and predators
//! that starve are compacted out after the predator pass. Victims eaten
//! during the predator pass are marked in a [`VictimIndex`] the moment they
//! are eaten, so no later predator can find them, and are dropped from the
//! collection before the victim pass. A victim is eaten at most once per
//! tick.

use crate::config::AppConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::lifecycle::{self, LifeRules};
use crate::render::RenderSink;
use crate::spatial_hash::VictimIndex;
use crate::spawn::spawn_population;
use crate::stats::{RunTotals, TickStats};
use crate::termination::{self, Termination};
use predation_data::Agent;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Everything a run mutates, threaded explicitly through each tick.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub rules: LifeRules,
    pub predators: Vec<Agent>,
    pub victims: Vec<Agent>,
    pub iterations_left: u32,
    pub tick: u64,
    pub termination: Termination,
    pub last_stats: TickStats,
    pub totals: RunTotals,
    rng: ChaCha8Rng,
}

impl SimulationState {
    /// Builds a fresh run: places the initial population and seeds the RNG.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let sim = &config.simulation;
        let grid = Grid::new(sim.grid_size)?;
        let mut rng = match sim.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let (predators, victims) = spawn_population(sim, &grid, &mut rng)?;
        let rules = LifeRules::from_app_config(grid, config);
        Ok(Self::from_parts(
            rules,
            predators,
            victims,
            sim.iterations,
            rng,
        ))
    }

    /// Assembles a state from explicit parts, bypassing the spawn
    /// allocator.
    #[must_use]
    pub fn from_parts(
        rules: LifeRules,
        predators: Vec<Agent>,
        victims: Vec<Agent>,
        iterations: u32,
        rng: ChaCha8Rng,
    ) -> Self {
        let last_stats = TickStats {
            tick: 0,
            predators: predators.len(),
            victims: victims.len(),
            ..TickStats::default()
        };
        Self {
            rules,
            predators,
            victims,
            iterations_left: iterations,
            tick: 0,
            termination: Termination::Continue,
            last_stats,
            totals: RunTotals::default(),
            rng,
        }
    }

    #[must_use]
    pub fn evaluate(&self) -> Termination {
        termination::evaluate(
            self.predators.len(),
            self.victims.len(),
            self.iterations_left,
        )
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.termination.is_terminal()
    }

    /// Advances one tick and renders the result.
    ///
    /// Returns the termination state observed before the tick. Once a
    /// terminal state has been reported further calls change nothing and
    /// do not touch the sink.
    pub fn step<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> Termination {
        if self.termination.is_terminal() {
            return self.termination;
        }

        sink.clear();
        let condition = self.evaluate();
        if let Some(message) = condition.message() {
            self.termination = condition;
            tracing::info!(
                tick = self.tick,
                predators = self.predators.len(),
                victims = self.victims.len(),
                outcome = ?condition,
                "Simulation finished"
            );
            sink.show_message(message);
            return condition;
        }

        self.iterations_left -= 1;
        self.tick += 1;

        let mut stats = TickStats {
            tick: self.tick,
            ..TickStats::default()
        };
        self.predators_pass(&mut stats);
        self.victims_pass(&mut stats);
        stats.predators = self.predators.len();
        stats.victims = self.victims.len();

        tracing::debug!(
            tick = stats.tick,
            predators = stats.predators,
            victims = stats.victims,
            predations = stats.predations,
            starvations = stats.starvations,
            "Tick"
        );

        self.totals.record(&stats);
        self.last_stats = stats;

        for agent in self.predators.iter().chain(&self.victims) {
            sink.draw(agent.cell());
        }

        Termination::Continue
    }

    fn predators_pass(&mut self, stats: &mut TickStats) {
        let Self {
            rules,
            predators,
            victims,
            rng,
            ..
        } = self;

        let mut prey = VictimIndex::build(rules.grid, victims);
        let mut newborn = Vec::new();
        for predator in predators.iter_mut() {
            let outcome = lifecycle::run_cycle(predator, &mut prey, rules, rng);
            newborn.extend(outcome.offspring);
            stats.predations += outcome.eaten;
            if outcome.died {
                stats.starvations += 1;
            }
        }

        prey.apply(victims);
        predators.retain(|p| p.life_period() != Some(0));
        stats.predator_births = newborn.len();
        predators.extend(newborn);
    }

    fn victims_pass(&mut self, stats: &mut TickStats) {
        let Self {
            rules, victims, rng, ..
        } = self;

        let mut newborn = Vec::new();
        for victim in victims.iter_mut() {
            newborn.extend(lifecycle::reproduce(victim, rules, rng));
            lifecycle::move_agent(victim, rules, rng);
        }

        stats.victim_births = newborn.len();
        victims.extend(newborn);
    }
}

/// Drives runs for an external tick source.
///
/// `start` replaces any run in progress, `advance` is called once per tick
/// and `stop` discards the current run.
#[derive(Debug, Default)]
pub struct PopulationEngine {
    state: Option<SimulationState>,
}

impl PopulationEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, config: &AppConfig) -> Result<()> {
        if self.state.take().is_some() {
            tracing::info!("Discarding previous run");
        }
        let state = SimulationState::new(config)?;
        tracing::info!(
            grid_size = config.simulation.grid_size,
            predators = state.predators.len(),
            victims = state.victims.len(),
            iterations = state.iterations_left,
            "Simulation started"
        );
        self.state = Some(state);
        Ok(())
    }

    /// Starts from a prepared state instead of a config.
    pub fn start_with(&mut self, state: SimulationState) {
        self.state = Some(state);
    }

    /// Advances the current run one tick. `None` when no run is active.
    pub fn advance<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> Option<Termination> {
        self.state.as_mut().map(|state| state.step(sink))
    }

    pub fn stop(&mut self) {
        if let Some(state) = self.state.take() {
            tracing::info!(tick = state.tick, "Simulation stopped");
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.as_ref().is_some_and(|s| !s.is_finished())
    }

    #[must_use]
    pub fn state(&self) -> Option<&SimulationState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut SimulationState> {
        self.state.as_mut()
    }

    /// Advances until the run ends, returning its outcome.
    pub fn run_to_end<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> Option<Termination> {
        loop {
            match self.advance(sink)? {
                Termination::Continue => continue,
                outcome => return Some(outcome),
            }
        }
    }
}
