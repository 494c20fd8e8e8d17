//! Generator configuration
//!
//! Defaults reproduce the reference household run: five age bands, household
//! sizes between 2 and 6, ten households with two adults each.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{HouseholdError, Result};
use crate::demographics::{AgeDistribution, HouseholdSizeRange};

/// Configuration for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Age-range label (`"min-max"`) to weight in [0, 1]
    ///
    /// Weights may sum to less than 1; they are normalized when converted
    /// to head counts. Bands are sampled in label order.
    pub age_distribution: BTreeMap<String, f64>,

    /// Inclusive range each household's target size is drawn from
    pub household_size_range: HouseholdSizeRange,

    pub num_households: usize,

    /// Oldest people reserved per household
    pub adults_per_household: usize,

    /// Seed for the run's random source
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let age_distribution = [
            ("1-12", 0.15),
            ("13-18", 0.15),
            ("19-40", 0.3),
            ("41-70", 0.3),
            ("71-100", 0.01),
        ]
        .into_iter()
        .map(|(label, weight)| (label.to_string(), weight))
        .collect();

        Self {
            age_distribution,
            household_size_range: HouseholdSizeRange::default(),
            num_households: 10,
            adults_per_household: 2,
            seed: 12345,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| HouseholdError::Config(e.to_string()))
    }

    /// Load a config from a TOML file; missing keys take default values
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| HouseholdError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parsed and validated age distribution
    pub fn distribution(&self) -> Result<AgeDistribution> {
        AgeDistribution::from_map(&self.age_distribution)
    }

    /// Check the distribution and size range before any sampling
    pub fn validate(&self) -> Result<()> {
        self.distribution()?;
        self.household_size_range.validate()
    }
}
