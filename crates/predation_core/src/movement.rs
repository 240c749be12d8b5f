//! Random-walk movement resolver.
//!
//! A move picks one of nine directions (eight neighbours plus "stay") and
//! applies its offset. Candidates that leave the field are discarded and the
//! whole resolution starts over from the original cell.

use crate::grid::Grid;
use predation_data::{Cell, CELL_SIZE};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Upper bound on redraws in [`random_int_from_range`].
const MAX_RANGE_DRAWS: usize = 64;
/// Upper bound on out-of-bounds retries in [`choose_direction`].
const MAX_DIRECTION_ATTEMPTS: usize = 64;

/// Index 0 is "stay"; 1..=8 walk the compass starting north-west.
pub const DIRECTION_OFFSETS: [(i32, i32); 9] = [
    (0, 0),
    (-CELL_SIZE, -CELL_SIZE),
    (-CELL_SIZE, 0),
    (-CELL_SIZE, CELL_SIZE),
    (0, CELL_SIZE),
    (CELL_SIZE, CELL_SIZE),
    (CELL_SIZE, 0),
    (CELL_SIZE, -CELL_SIZE),
    (0, -CELL_SIZE),
];

/// How direction indices are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionPolicy {
    /// Draw from `[0, 8]` and redraw whenever the result equals the lower
    /// bound, so agents never stay in place.
    #[default]
    Legacy,
    /// Uniform over all nine directions, "stay" included.
    Uniform,
}

/// Draws an integer from `[min, max]`, redrawing while the draw equals
/// `min`. The upper bound is never re-checked.
///
/// Returns `max` if every draw in the bounded loop hit `min`, which only
/// matters for degenerate ranges such as `min == max`.
pub fn random_int_from_range<R: Rng + ?Sized>(min: u32, max: u32, rng: &mut R) -> u32 {
    for _ in 0..MAX_RANGE_DRAWS {
        let number = rng.gen_range(0..=max);
        if number != min {
            return number;
        }
    }
    max
}

fn draw_direction<R: Rng + ?Sized>(policy: DirectionPolicy, rng: &mut R) -> usize {
    let last = (DIRECTION_OFFSETS.len() - 1) as u32;
    match policy {
        DirectionPolicy::Legacy => random_int_from_range(0, last, rng) as usize,
        DirectionPolicy::Uniform => rng.gen_range(0..=last) as usize,
    }
}

fn candidate_indices(policy: DirectionPolicy) -> std::ops::RangeInclusive<usize> {
    match policy {
        DirectionPolicy::Legacy => 1..=DIRECTION_OFFSETS.len() - 1,
        DirectionPolicy::Uniform => 0..=DIRECTION_OFFSETS.len() - 1,
    }
}

/// Picks a neighbouring cell (or the same spot under
/// [`DirectionPolicy::Uniform`]) that lies inside `grid`.
///
/// Always returns a freshly built cell. When the retry bound runs out the
/// choice falls back to a uniform pick among in-bounds candidates, which is
/// the distribution the retries converge to. If no candidate is in bounds
/// the agent stays where it is.
pub fn choose_direction<R: Rng + ?Sized>(
    grid: &Grid,
    cell: &Cell,
    policy: DirectionPolicy,
    rng: &mut R,
) -> Cell {
    for _ in 0..MAX_DIRECTION_ATTEMPTS {
        let (dx, dy) = DIRECTION_OFFSETS[draw_direction(policy, rng)];
        let candidate = cell.offset(dx, dy);
        if grid.contains_cell(&candidate) {
            return candidate;
        }
    }

    let valid: Vec<Cell> = candidate_indices(policy)
        .map(|i| {
            let (dx, dy) = DIRECTION_OFFSETS[i];
            cell.offset(dx, dy)
        })
        .filter(|c| grid.contains_cell(c))
        .collect();

    if valid.is_empty() {
        tracing::trace!(x = cell.x, y = cell.y, "No in-bounds move, staying");
        return cell.offset(0, 0);
    }
    valid[rng.gen_range(0..valid.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use predation_data::Species;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_legacy_sampler_never_returns_lower_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut counts = [0usize; 9];
        for _ in 0..9000 {
            counts[random_int_from_range(0, 8, &mut rng) as usize] += 1;
        }
        assert_eq!(counts[0], 0);
        assert!(counts[1..].iter().all(|&c| c > 800));
    }

    #[test]
    fn test_degenerate_range_terminates() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(random_int_from_range(0, 0, &mut rng), 0);
    }

    #[test]
    fn test_legacy_policy_always_moves() {
        let grid = Grid::new(100).unwrap();
        let start = Cell::new(50, 50, Species::Victim);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..500 {
            let next = choose_direction(&grid, &start, DirectionPolicy::Legacy, &mut rng);
            assert_ne!(next, start);
            assert_eq!(next.species, Species::Victim);
        }
    }

    #[test]
    fn test_uniform_policy_can_stay() {
        let grid = Grid::new(100).unwrap();
        let start = Cell::new(50, 50, Species::Victim);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let stayed = (0..500)
            .map(|_| choose_direction(&grid, &start, DirectionPolicy::Uniform, &mut rng))
            .any(|c| c == start);
        assert!(stayed);
    }

    #[test]
    fn test_corner_moves_stay_in_bounds() {
        let grid = Grid::new(100).unwrap();
        let corner = Cell::new(0, 0, Species::Predator);
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for _ in 0..200 {
            let next = choose_direction(&grid, &corner, DirectionPolicy::Legacy, &mut rng);
            assert!(grid.contains_cell(&next));
            assert!([(10, 0), (0, 10), (10, 10)].contains(&(next.x, next.y)));
        }
    }

    #[test]
    fn test_single_cell_grid_stays_put() {
        let grid = Grid::new(CELL_SIZE).unwrap();
        let only = Cell::new(0, 0, Species::Predator);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let next = choose_direction(&grid, &only, DirectionPolicy::Legacy, &mut rng);
        assert_eq!(next, only);
    }
}
