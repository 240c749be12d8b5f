//! Initial placement of agents.
//!
//! Every agent placed at start gets a cell no other initial agent holds,
//! across both species. Once the run starts agents may overlap freely.

use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::grid::Grid;
use predation_data::{Agent, Cell, Species};
use rand::Rng;
use std::collections::HashSet;

/// Random draws attempted before falling back to picking among free cells.
const MAX_SPAWN_DRAWS: usize = 256;

/// Hands out unique cells for the initial population.
#[derive(Debug, Default)]
pub struct SpawnAllocator {
    occupied: HashSet<Cell>,
}

impl SpawnAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn occupied(&self) -> usize {
        self.occupied.len()
    }

    #[must_use]
    pub fn is_occupied(&self, cell: &Cell) -> bool {
        self.occupied.contains(cell)
    }

    /// Draws random aligned cells until a free one turns up, registers it
    /// and returns it.
    pub fn allocate<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        species: Species,
        rng: &mut R,
    ) -> Result<Cell> {
        let capacity = grid.capacity();
        if self.occupied.len() >= capacity {
            return Err(SimulationError::CapacityExceeded {
                requested: self.occupied.len() + 1,
                capacity,
            });
        }

        for _ in 0..MAX_SPAWN_DRAWS {
            let cell = grid.random_cell(species, rng);
            if self.occupied.insert(cell) {
                return Ok(cell);
            }
        }

        // Saturated field: pick directly among what is left.
        let free: Vec<Cell> = grid
            .cells(species)
            .filter(|c| !self.occupied.contains(c))
            .collect();
        let cell = free[rng.gen_range(0..free.len())];
        self.occupied.insert(cell);
        Ok(cell)
    }

    /// Allocates `count` cells of one species.
    pub fn allocate_many<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        species: Species,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Cell>> {
        (0..count)
            .map(|_| self.allocate(grid, species, rng))
            .collect()
    }
}

/// Builds the initial predator and victim collections for a run.
///
/// Fails fast when the field cannot hold `config.total_count` agents.
pub fn spawn_population<R: Rng + ?Sized>(
    config: &SimulationConfig,
    grid: &Grid,
    rng: &mut R,
) -> Result<(Vec<Agent>, Vec<Agent>)> {
    let capacity = grid.capacity();
    if config.total_count > capacity {
        return Err(SimulationError::CapacityExceeded {
            requested: config.total_count,
            capacity,
        });
    }

    let mut allocator = SpawnAllocator::new();
    let predators = allocator
        .allocate_many(grid, Species::Predator, config.predator_count(), rng)?
        .into_iter()
        .map(|cell| {
            Agent::predator(
                cell,
                config.reproductive_period,
                config.predator_life_period,
            )
        })
        .collect();
    let victims = allocator
        .allocate_many(grid, Species::Victim, config.victim_count(), rng)?
        .into_iter()
        .map(|cell| Agent::victim(cell, config.reproductive_period))
        .collect();

    Ok((predators, victims))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_allocate_fills_small_grid_without_duplicates() {
        let grid = Grid::new(30).unwrap();
        let mut allocator = SpawnAllocator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let cells = allocator
            .allocate_many(&grid, Species::Victim, grid.capacity(), &mut rng)
            .unwrap();
        let unique: HashSet<_> = cells.iter().collect();
        assert_eq!(unique.len(), 9);
        assert_eq!(allocator.occupied(), 9);
    }

    #[test]
    fn test_allocate_past_capacity_fails() {
        let grid = Grid::new(20).unwrap();
        let mut allocator = SpawnAllocator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        allocator
            .allocate_many(&grid, Species::Predator, 4, &mut rng)
            .unwrap();
        let err = allocator
            .allocate(&grid, Species::Victim, &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            SimulationError::CapacityExceeded {
                requested: 5,
                capacity: 4
            }
        );
    }

    #[test]
    fn test_spawn_population_splits_by_density() {
        let config = SimulationConfig {
            grid_size: 100,
            total_count: 10,
            density: 1,
            ..SimulationConfig::default()
        };
        let grid = Grid::new(config.grid_size).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let (predators, victims) = spawn_population(&config, &grid, &mut rng).unwrap();
        assert_eq!(predators.len(), 5);
        assert_eq!(victims.len(), 5);
        assert!(predators.iter().all(|p| p.species() == Species::Predator));
        assert!(victims.iter().all(|v| v.species() == Species::Victim));

        let cells: HashSet<_> = predators.iter().chain(&victims).map(|a| *a.cell()).collect();
        assert_eq!(cells.len(), 10);
    }

    #[test]
    fn test_spawn_population_rejects_overfull_grid() {
        let config = SimulationConfig {
            grid_size: 30,
            total_count: 10,
            ..SimulationConfig::default()
        };
        let grid = Grid::new(config.grid_size).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        assert!(matches!(
            spawn_population(&config, &grid, &mut rng),
            Err(SimulationError::CapacityExceeded {
                requested: 10,
                capacity: 9
            })
        ));
    }
}
