use super::cell::{Cell, Species};
use serde::{Deserialize, Serialize};

/// State shared by every living agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeState {
    pub cell: Cell,
    /// Ticks left before the next reproduction. Reproduction fires when
    /// this reads zero at the start of a tick.
    pub reproductive_index: u32,
}

impl LifeState {
    #[must_use]
    pub fn new(cell: Cell, reproductive_period: u32) -> Self {
        Self {
            cell,
            reproductive_index: reproductive_period,
        }
    }
}

/// A live agent on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Agent {
    Victim(LifeState),
    Predator {
        state: LifeState,
        /// Ticks left before starvation; refilled by eating.
        life_period: u32,
    },
}

impl Agent {
    #[must_use]
    pub fn victim(cell: Cell, reproductive_period: u32) -> Self {
        Agent::Victim(LifeState::new(
            cell.with_species(Species::Victim),
            reproductive_period,
        ))
    }

    #[must_use]
    pub fn predator(cell: Cell, reproductive_period: u32, life_period: u32) -> Self {
        Agent::Predator {
            state: LifeState::new(cell.with_species(Species::Predator), reproductive_period),
            life_period,
        }
    }

    #[must_use]
    pub fn species(&self) -> Species {
        match self {
            Agent::Victim(_) => Species::Victim,
            Agent::Predator { .. } => Species::Predator,
        }
    }

    #[must_use]
    pub fn state(&self) -> &LifeState {
        match self {
            Agent::Victim(state) | Agent::Predator { state, .. } => state,
        }
    }

    pub fn state_mut(&mut self) -> &mut LifeState {
        match self {
            Agent::Victim(state) | Agent::Predator { state, .. } => state,
        }
    }

    #[must_use]
    pub fn cell(&self) -> &Cell {
        &self.state().cell
    }

    /// Remaining life of a predator; `None` for victims, which do not age.
    #[must_use]
    pub fn life_period(&self) -> Option<u32> {
        match self {
            Agent::Predator { life_period, .. } => Some(*life_period),
            Agent::Victim(_) => None,
        }
    }
}
