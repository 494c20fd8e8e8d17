//! Household Synth - synthetic households and household contact networks
//!
//! Samples ages from a weighted age distribution, partitions the sampled
//! people into households with a fixed number of adults each, and exposes
//! the resulting household cliques as a contact network.

pub mod core;
pub mod demographics;
pub mod generation;
pub mod households;
pub mod network;
pub mod output;

pub use crate::core::config::GeneratorConfig;
pub use crate::core::error::{HouseholdError, Result};
pub use demographics::{sample, AgeDistribution, DemographicSample, HouseholdSizeRange};
pub use generation::generate;
pub use households::{partition, Household, HouseholdAssignment, Population};
pub use network::ContactNetwork;
pub use output::GenerationOutput;
