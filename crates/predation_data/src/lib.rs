//! Plain data types shared by the simulation crates.

pub mod data;

pub use data::agent::{Agent, LifeState};
pub use data::cell::{Cell, Species, CELL_SIZE};
