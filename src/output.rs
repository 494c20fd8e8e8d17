//! Generation output and serialization

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{Age, HouseholdId, PersonId};
use crate::households::HouseholdAssignment;
use crate::network::ContactNetwork;

/// Complete output of one generation run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationOutput {
    pub seed: u64,
    pub households: Vec<HouseholdRecord>,
    pub statistics: GenerationStats,
}

/// Serializable view of one household
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HouseholdRecord {
    pub id: HouseholdId,
    pub target_size: usize,
    pub members: Vec<PersonId>,
    /// Ages of `members`, in the same order
    pub ages: Vec<Age>,
    pub adults: usize,
    pub shortfall: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationStats {
    pub people_sampled: usize,
    pub people_housed: usize,
    pub people_unused: usize,
    pub households: usize,
    pub households_truncated: usize,
    pub contact_edges: usize,
    pub mean_degree: f64,
    pub degree_histogram: BTreeMap<usize, usize>,
    pub generation_time_ms: u64,
}

impl GenerationOutput {
    pub fn new(
        seed: u64,
        assignment: &HouseholdAssignment,
        network: &ContactNetwork,
        elapsed: Duration,
    ) -> Self {
        let households = assignment
            .households
            .iter()
            .map(|h| HouseholdRecord {
                id: h.id,
                target_size: h.target_size,
                members: h.members().collect(),
                ages: h.ages(&assignment.population),
                adults: h.adults.len(),
                shortfall: h.shortfall(),
            })
            .collect();

        Self {
            seed,
            households,
            statistics: GenerationStats {
                people_sampled: assignment.population.count(),
                people_housed: assignment.housed_count(),
                people_unused: assignment.unused.len(),
                households: assignment.households.len(),
                households_truncated: assignment.truncated_count(),
                contact_edges: network.edge_count(),
                mean_degree: network.mean_degree(),
                degree_histogram: network.degree_histogram(),
                generation_time_ms: elapsed.as_millis() as u64,
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        format!(
            "Generated {} households from {} people in {}ms (seed {})\n\
             {} housed, {} unused, {} truncated households, \
             {} contact edges, mean degree {:.2}",
            self.statistics.households,
            self.statistics.people_sampled,
            self.statistics.generation_time_ms,
            self.seed,
            self.statistics.people_housed,
            self.statistics.people_unused,
            self.statistics.households_truncated,
            self.statistics.contact_edges,
            self.statistics.mean_degree,
        )
    }
}
