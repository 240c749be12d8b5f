//! Square field geometry.
//!
//! Valid coordinates run from `0` to `size - CELL_SIZE` inclusive on both
//! axes, aligned to `CELL_SIZE`.

use crate::error::{Result, SimulationError};
use predation_data::{Cell, Species, CELL_SIZE};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: i32,
}

impl Grid {
    pub fn new(size: i32) -> Result<Self> {
        if size < CELL_SIZE {
            return Err(SimulationError::GridTooSmall(size));
        }
        Ok(Self { size })
    }

    #[must_use]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Largest valid coordinate on either axis.
    #[must_use]
    pub fn border(&self) -> i32 {
        self.size - CELL_SIZE
    }

    /// Number of cells along one side.
    #[must_use]
    pub fn columns(&self) -> usize {
        (self.size / CELL_SIZE) as usize
    }

    /// Number of distinct cells on the field.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.columns() * self.columns()
    }

    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let border = self.border();
        (0..=border).contains(&x) && (0..=border).contains(&y)
    }

    #[must_use]
    pub fn contains_cell(&self, cell: &Cell) -> bool {
        self.contains(cell.x, cell.y)
    }

    /// Draws a random aligned coordinate.
    ///
    /// The raw draw is `[0, border)` and is then rounded to the nearest
    /// multiple of `CELL_SIZE`, halves rounding up. Both edge cells are
    /// therefore half as likely as interior ones.
    pub fn random_coordinate<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        let border = self.border();
        if border <= 0 {
            return 0;
        }
        let raw = rng.gen_range(0..border);
        (raw + CELL_SIZE / 2) / CELL_SIZE * CELL_SIZE
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, species: Species, rng: &mut R) -> Cell {
        let x = self.random_coordinate(rng);
        let y = self.random_coordinate(rng);
        Cell::new(x, y, species)
    }

    /// Every cell of the field in row-major order.
    pub fn cells(&self, species: Species) -> impl Iterator<Item = Cell> + '_ {
        let columns = self.columns() as i32;
        (0..columns).flat_map(move |row| {
            (0..columns).map(move |col| Cell::new(col * CELL_SIZE, row * CELL_SIZE, species))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_grid_geometry() {
        let grid = Grid::new(100).unwrap();
        assert_eq!(grid.border(), 90);
        assert_eq!(grid.columns(), 10);
        assert_eq!(grid.capacity(), 100);
        assert!(grid.contains(0, 90));
        assert!(!grid.contains(-10, 0));
        assert!(!grid.contains(0, 100));
    }

    #[test]
    fn test_grid_too_small() {
        assert_eq!(Grid::new(5), Err(SimulationError::GridTooSmall(5)));
        assert!(Grid::new(CELL_SIZE).is_ok());
    }

    #[test]
    fn test_random_coordinates_are_aligned_and_cover_field() {
        let grid = Grid::new(100).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            let c = grid.random_coordinate(&mut rng);
            assert_eq!(c % CELL_SIZE, 0);
            assert!((0..=grid.border()).contains(&c));
            seen.insert(c);
        }
        assert_eq!(seen.len(), grid.columns());
    }

    #[test]
    fn test_single_cell_grid_coordinate() {
        let grid = Grid::new(CELL_SIZE).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(grid.random_coordinate(&mut rng), 0);
    }

    #[test]
    fn test_cells_enumerates_capacity() {
        let grid = Grid::new(50).unwrap();
        let cells: HashSet<_> = grid.cells(Species::Victim).collect();
        assert_eq!(cells.len(), grid.capacity());
        assert!(cells.iter().all(|c| grid.contains_cell(c)));
    }
}
