//! Demographic sampling
//!
//! Turns an age distribution and a household size range into a population
//! of ages and a sequence of household target sizes.

pub mod distribution;
pub mod sampler;

pub use distribution::{AgeBand, AgeDistribution, AgeRange, HouseholdSizeRange};
pub use sampler::{sample, DemographicSample};
