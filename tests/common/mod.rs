pub mod macros;

use predation_data::{Agent, Cell, Species};
use predation_lib::model::config::AppConfig;
use predation_lib::model::engine::{PopulationEngine, SimulationState};
use predation_lib::model::grid::Grid;
use predation_lib::model::lifecycle::LifeRules;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Assembles a `SimulationState` with hand-placed agents.
///
/// Reproduction is pushed far out by default so scenarios only see the
/// behavior they set up.
#[allow(dead_code)]
pub struct SimulationBuilder {
    config: AppConfig,
    predators: Vec<Agent>,
    victims: Vec<Agent>,
    seed: u64,
}

#[allow(dead_code)]
impl SimulationBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.simulation.grid_size = 300;
        config.simulation.iterations = 100;
        config.simulation.predator_life_period = 10;
        config.simulation.reproductive_period = 1000;
        Self {
            config,
            predators: Vec::new(),
            victims: Vec::new(),
            seed: 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_predator(mut self, x: i32, y: i32) -> Self {
        let sim = &self.config.simulation;
        self.predators.push(Agent::predator(
            Cell::new(x, y, Species::Predator),
            sim.reproductive_period,
            sim.predator_life_period,
        ));
        self
    }

    /// Adds a predator whose reproduction fires on the first tick.
    pub fn with_ready_predator(mut self, x: i32, y: i32) -> Self {
        self = self.with_predator(x, y);
        if let Some(p) = self.predators.last_mut() {
            p.state_mut().reproductive_index = 0;
        }
        self
    }

    pub fn with_victim(mut self, x: i32, y: i32) -> Self {
        self.victims.push(Agent::victim(
            Cell::new(x, y, Species::Victim),
            self.config.simulation.reproductive_period,
        ));
        self
    }

    /// Adds a victim on each of the eight cells around `(x, y)`.
    pub fn with_victim_ring(mut self, x: i32, y: i32) -> Self {
        for dx in [-10, 0, 10] {
            for dy in [-10, 0, 10] {
                if dx != 0 || dy != 0 {
                    self = self.with_victim(x + dx, y + dy);
                }
            }
        }
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn build(self) -> SimulationState {
        let grid = Grid::new(self.config.simulation.grid_size)
            .expect("Failed to create grid in test builder");
        let rules = LifeRules::from_app_config(grid, &self.config);
        SimulationState::from_parts(
            rules,
            self.predators,
            self.victims,
            self.config.simulation.iterations,
            ChaCha8Rng::seed_from_u64(self.seed),
        )
    }

    pub fn build_engine(self) -> PopulationEngine {
        let mut engine = PopulationEngine::new();
        engine.start_with(self.build());
        engine
    }
}

/// Small seeded config for full runs.
#[allow(dead_code)]
pub fn small_config(seed: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.simulation.grid_size = 100;
    config.simulation.iterations = 20;
    config.simulation.total_count = 10;
    config.simulation.density = 1;
    config.simulation.predator_life_period = 5;
    config.simulation.reproductive_period = 2;
    config.simulation.seed = Some(seed);
    config
}
