//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Age in whole years
pub type Age = u8;

/// Oldest age a person may be sampled with
pub const MAX_AGE: Age = 120;

/// Unique identifier for a sampled person (index into the population arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(pub u32);

impl PersonId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Unique identifier for a household (position in the requested size sequence)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HouseholdId(pub u32);

impl HouseholdId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}
