//! Household contact network
//!
//! Every household becomes a clique: each pair of members shares one
//! undirected edge. People left out of every household are not nodes.

use std::collections::BTreeMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{HouseholdId, PersonId};
use crate::households::HouseholdAssignment;

/// Undirected contact edge between two members of the same household
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactEdge {
    pub a: PersonId,
    pub b: PersonId,
    pub household: HouseholdId,
}

#[derive(Debug, Clone, Default)]
pub struct ContactNetwork {
    pub edges: Vec<ContactEdge>,
    degrees: AHashMap<PersonId, usize>,
}

/// Edges in a complete graph over `size` members
pub fn clique_edge_count(size: usize) -> usize {
    size * size.saturating_sub(1) / 2
}

impl ContactNetwork {
    pub fn from_households(assignment: &HouseholdAssignment) -> Self {
        let mut network = Self::default();

        for household in &assignment.households {
            let members: Vec<PersonId> = household.members().collect();
            for &person in &members {
                network.degrees.entry(person).or_insert(0);
            }

            for (i, &a) in members.iter().enumerate() {
                for &b in &members[i + 1..] {
                    network.edges.push(ContactEdge { a, b, household: household.id });
                    *network.degrees.entry(a).or_insert(0) += 1;
                    *network.degrees.entry(b).or_insert(0) += 1;
                }
            }
        }

        network
    }

    pub fn node_count(&self) -> usize {
        self.degrees.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn degree(&self, person: PersonId) -> Option<usize> {
        self.degrees.get(&person).copied()
    }

    /// Degree -> number of people with that degree
    pub fn degree_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for &degree in self.degrees.values() {
            *histogram.entry(degree).or_insert(0) += 1;
        }
        histogram
    }

    pub fn mean_degree(&self) -> f64 {
        if self.degrees.is_empty() {
            return 0.0;
        }
        2.0 * self.edges.len() as f64 / self.degrees.len() as f64
    }
}
