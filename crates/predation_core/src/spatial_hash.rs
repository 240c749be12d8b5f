use crate::grid::Grid;
use predation_data::{Agent, Cell};

/// Anything a predator can eat from.
pub trait PreyField {
    /// Removes every victim standing on `cell` and returns how many there
    /// were.
    fn take_at(&mut self, cell: &Cell) -> usize;
}

impl PreyField for Vec<Agent> {
    fn take_at(&mut self, cell: &Cell) -> usize {
        let before = self.len();
        self.retain(|victim| victim.cell() != cell);
        before - self.len()
    }
}

/// Per-cell index of the victim collection for one predator pass.
///
/// Uses the offset-array layout: `cell_offsets[i]..cell_offsets[i + 1]`
/// slices `victim_indices` to the victims standing on grid cell `i`. Taking
/// a cell marks its victims as eaten; [`VictimIndex::apply`] then drops them
/// from the collection in one pass, preserving the order of survivors.
///
/// Victims do not move while predators act, so the index stays valid for
/// the whole pass.
#[derive(Debug, Clone)]
pub struct VictimIndex {
    grid: Grid,
    cell_offsets: Vec<usize>,
    victim_indices: Vec<usize>,
    cell_taken: Vec<bool>,
    eaten: Vec<bool>,
    eaten_count: usize,
}

impl VictimIndex {
    pub fn build(grid: Grid, victims: &[Agent]) -> Self {
        let cells = grid.capacity();
        let mut counts = vec![0usize; cells + 1];
        let slots: Vec<Option<usize>> = victims
            .iter()
            .map(|v| Self::slot(&grid, v.cell()))
            .collect();
        for slot in slots.iter().flatten() {
            counts[*slot + 1] += 1;
        }
        for i in 1..counts.len() {
            counts[i] += counts[i - 1];
        }

        let cell_offsets = counts.clone();
        let mut cursor = counts;
        let mut victim_indices = vec![0usize; cell_offsets[cells]];
        for (victim, slot) in slots.iter().enumerate() {
            if let Some(slot) = slot {
                victim_indices[cursor[*slot]] = victim;
                cursor[*slot] += 1;
            }
        }

        Self {
            grid,
            cell_offsets,
            victim_indices,
            cell_taken: vec![false; cells],
            eaten: vec![false; victims.len()],
            eaten_count: 0,
        }
    }

    fn slot(grid: &Grid, cell: &Cell) -> Option<usize> {
        if !grid.contains_cell(cell) {
            return None;
        }
        let (col, row) = cell.grid_index();
        Some(row as usize * grid.columns() + col as usize)
    }

    /// Victims eaten so far in this pass.
    #[must_use]
    pub fn eaten_count(&self) -> usize {
        self.eaten_count
    }

    #[must_use]
    pub fn is_eaten(&self, victim: usize) -> bool {
        self.eaten.get(victim).copied().unwrap_or(false)
    }

    /// Drops every eaten victim from `victims`.
    pub fn apply(self, victims: &mut Vec<Agent>) {
        if self.eaten_count == 0 {
            return;
        }
        let mut idx = 0;
        victims.retain(|_| {
            let keep = !self.eaten[idx];
            idx += 1;
            keep
        });
    }
}

impl PreyField for VictimIndex {
    fn take_at(&mut self, cell: &Cell) -> usize {
        let Some(slot) = Self::slot(&self.grid, cell) else {
            return 0;
        };
        if self.cell_taken[slot] {
            return 0;
        }
        self.cell_taken[slot] = true;

        let range = self.cell_offsets[slot]..self.cell_offsets[slot + 1];
        for &victim in &self.victim_indices[range.clone()] {
            self.eaten[victim] = true;
        }
        self.eaten_count += range.len();
        range.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use predation_data::Species;

    fn victims_at(coords: &[(i32, i32)]) -> Vec<Agent> {
        coords
            .iter()
            .map(|&(x, y)| Agent::victim(Cell::new(x, y, Species::Victim), 5))
            .collect()
    }

    #[test]
    fn test_take_removes_whole_cell_once() {
        let grid = Grid::new(100).unwrap();
        let mut victims = victims_at(&[(10, 10), (20, 10), (10, 10), (90, 90), (10, 10)]);
        let mut index = VictimIndex::build(grid, &victims);

        let spot = Cell::new(10, 10, Species::Predator);
        assert_eq!(index.take_at(&spot), 3);
        assert_eq!(index.take_at(&spot), 0);
        assert_eq!(index.take_at(&Cell::new(50, 50, Species::Predator)), 0);
        assert!(index.is_eaten(0));
        assert!(!index.is_eaten(1));
        assert_eq!(index.eaten_count(), 3);

        index.apply(&mut victims);
        let left: Vec<_> = victims.iter().map(|v| (v.cell().x, v.cell().y)).collect();
        assert_eq!(left, vec![(20, 10), (90, 90)]);
    }

    #[test]
    fn test_vec_field_matches_index() {
        let grid = Grid::new(50).unwrap();
        let coords = [(0, 0), (40, 40), (0, 0), (10, 0)];
        let mut plain = victims_at(&coords);
        let mut indexed = victims_at(&coords);
        let mut index = VictimIndex::build(grid, &indexed);

        let spot = Cell::new(0, 0, Species::Predator);
        assert_eq!(plain.take_at(&spot), index.take_at(&spot));
        index.apply(&mut indexed);
        assert_eq!(plain, indexed);
    }

    #[test]
    fn test_out_of_grid_cell_is_ignored() {
        let grid = Grid::new(50).unwrap();
        let mut index = VictimIndex::build(grid, &victims_at(&[(0, 0)]));
        assert_eq!(index.take_at(&Cell::new(-10, 0, Species::Predator)), 0);
    }
}
