//! Core data structures for the predator/prey simulation.

pub mod agent;
pub mod cell;
