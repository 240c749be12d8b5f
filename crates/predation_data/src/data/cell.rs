use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Side length of a single grid cell, in world units.
pub const CELL_SIZE: i32 = 10;

/// Species tag carried by every cell; doubles as the display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Predator,
    Victim,
}

impl Species {
    /// Canvas color name used by the browser front-end.
    #[must_use]
    pub fn color_name(self) -> &'static str {
        match self {
            Species::Predator => "red",
            Species::Victim => "black",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Species::Predator => "predator",
            Species::Victim => "victim",
        }
    }
}

/// Grid-aligned position of an agent.
///
/// Equality and hashing only look at the coordinates: two agents of
/// different species standing on the same spot share a cell. Movement
/// never mutates a cell in place, it builds a new one via [`Cell::offset`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub species: Species,
}

impl Cell {
    #[must_use]
    pub fn new(x: i32, y: i32, species: Species) -> Self {
        Self { x, y, species }
    }

    /// Returns a new cell shifted by `(dx, dy)`, keeping the species tag.
    #[must_use]
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            species: self.species,
        }
    }

    /// Same coordinates, different species tag. Used when an offspring is
    /// placed relative to its parent.
    #[must_use]
    pub fn with_species(&self, species: Species) -> Self {
        Self { species, ..*self }
    }

    /// Column/row index of this cell on a grid of `CELL_SIZE` squares.
    #[must_use]
    pub fn grid_index(&self) -> (i32, i32) {
        (self.x / CELL_SIZE, self.y / CELL_SIZE)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}
