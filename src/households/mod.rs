//! Household construction
//!
//! Assigns sampled people to households, reserving the oldest for the
//! per-household adult requirement.

pub mod partition;
pub mod population;

pub use partition::{partition, Household, HouseholdAssignment};
pub use population::{Person, Population};
