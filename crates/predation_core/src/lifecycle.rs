//! Per-agent state machine: reproduce, move, eat, age.
//!
//! Victims only reproduce and move. Predators additionally eat every victim
//! sharing their cell and starve when their life budget runs out.

use crate::config::{AppConfig, SimulationConfig};
use crate::grid::Grid;
use crate::movement::{choose_direction, DirectionPolicy};
use crate::spatial_hash::PreyField;
use predation_data::Agent;
use rand::Rng;

/// Fixed parameters consulted by every transition of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeRules {
    pub grid: Grid,
    pub direction_policy: DirectionPolicy,
    pub reproductive_period: u32,
    pub predator_life_period: u32,
    pub juvenile_life_period: u32,
}

impl LifeRules {
    #[must_use]
    pub fn new(grid: Grid, config: &SimulationConfig, direction_policy: DirectionPolicy) -> Self {
        Self {
            grid,
            direction_policy,
            reproductive_period: config.reproductive_period,
            predator_life_period: config.predator_life_period,
            juvenile_life_period: config.juvenile_life_period(),
        }
    }

    pub fn from_app_config(grid: Grid, config: &AppConfig) -> Self {
        Self::new(grid, &config.simulation, config.movement.direction_policy)
    }
}

/// What happened to one agent during its cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleOutcome {
    pub offspring: Option<Agent>,
    pub eaten: usize,
    pub died: bool,
}

/// Reproduce-check. Fires when the countdown reads zero, placing one
/// offspring a single random step away from the parent; the countdown then
/// drops by one whether or not it fired.
pub fn reproduce<R: Rng + ?Sized>(
    agent: &mut Agent,
    rules: &LifeRules,
    rng: &mut R,
) -> Option<Agent> {
    let state = agent.state_mut();
    let mut offspring = None;
    if state.reproductive_index == 0 {
        let cell = choose_direction(&rules.grid, &state.cell, rules.direction_policy, rng);
        state.reproductive_index = rules.reproductive_period;
        offspring = Some(match agent {
            Agent::Victim(_) => Agent::victim(cell, rules.reproductive_period),
            Agent::Predator { .. } => Agent::predator(
                cell,
                rules.reproductive_period,
                rules.juvenile_life_period,
            ),
        });
    }
    let state = agent.state_mut();
    state.reproductive_index = state.reproductive_index.saturating_sub(1);
    offspring
}

pub fn move_agent<R: Rng + ?Sized>(agent: &mut Agent, rules: &LifeRules, rng: &mut R) {
    let state = agent.state_mut();
    state.cell = choose_direction(&rules.grid, &state.cell, rules.direction_policy, rng);
}

/// Removes every victim standing on the predator's cell and refills the
/// predator's life budget if anything was eaten. Victims never eat.
pub fn eat<P: PreyField + ?Sized>(agent: &mut Agent, prey: &mut P, rules: &LifeRules) -> usize {
    match agent {
        Agent::Predator { state, life_period } => {
            let eaten = prey.take_at(&state.cell);
            if eaten > 0 {
                *life_period = rules.predator_life_period;
            }
            eaten
        }
        Agent::Victim(_) => 0,
    }
}

/// Decrements a predator's life budget. Returns `true` on the tick it hits
/// zero. Victims do not age.
pub fn age(agent: &mut Agent) -> bool {
    match agent {
        Agent::Predator { life_period, .. } => {
            *life_period = life_period.saturating_sub(1);
            *life_period == 0
        }
        Agent::Victim(_) => false,
    }
}

/// Runs the full cycle for one agent. `prey` is where predators hunt.
pub fn run_cycle<P: PreyField + ?Sized, R: Rng + ?Sized>(
    agent: &mut Agent,
    prey: &mut P,
    rules: &LifeRules,
    rng: &mut R,
) -> CycleOutcome {
    let offspring = reproduce(agent, rules, rng);
    move_agent(agent, rules, rng);
    match agent {
        Agent::Predator { .. } => {
            let eaten = eat(agent, prey, rules);
            let died = age(agent);
            CycleOutcome {
                offspring,
                eaten,
                died,
            }
        }
        Agent::Victim(_) => CycleOutcome {
            offspring,
            ..CycleOutcome::default()
        },
    }
}
