//! Population arena
//!
//! Every sampled age becomes a person with its own id, so two people of the
//! same age stay distinct when grouped into a household.

use serde::{Deserialize, Serialize};

use crate::core::error::{HouseholdError, Result};
use crate::core::types::{Age, PersonId, MAX_AGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub age: Age,
}

/// All sampled people, indexed by `PersonId`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Population {
    ages: Vec<Age>,
}

impl Population {
    /// Create one person per age, ids assigned in input order
    pub fn from_ages(ages: &[Age]) -> Result<Self> {
        let mut population = Self { ages: Vec::with_capacity(ages.len()) };
        for &age in ages {
            population.spawn(age)?;
        }
        Ok(population)
    }

    pub fn spawn(&mut self, age: Age) -> Result<PersonId> {
        if age > MAX_AGE {
            return Err(HouseholdError::AgeOutOfRange(age));
        }
        let id = PersonId::new(self.ages.len() as u32);
        self.ages.push(age);
        Ok(id)
    }

    pub fn age(&self, id: PersonId) -> Option<Age> {
        self.ages.get(id.index()).copied()
    }

    pub fn count(&self) -> usize {
        self.ages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Person> + '_ {
        self.ages
            .iter()
            .enumerate()
            .map(|(idx, &age)| Person { id: PersonId::new(idx as u32), age })
    }

    /// Ids ordered oldest first; equal ages keep id order
    pub fn ids_by_age_desc(&self) -> Vec<PersonId> {
        let mut ids: Vec<PersonId> = (0..self.ages.len() as u32).map(PersonId::new).collect();
        ids.sort_by(|a, b| self.ages[b.index()].cmp(&self.ages[a.index()]));
        ids
    }
}
