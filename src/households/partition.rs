//! Household partitioner
//!
//! Splits a sampled population into households of (approximately) the
//! requested sizes. The oldest people form an adult pool large enough to
//! seat `num_adults` in every household; everyone else fills the remaining
//! places in household order until they run out.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{HouseholdError, Result};
use crate::core::types::{Age, HouseholdId, PersonId};
use crate::households::population::Population;

/// A household: its adult-pool members followed by its other members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    pub id: HouseholdId,
    pub target_size: usize,
    /// Members drawn from the adult pool
    pub adults: Vec<PersonId>,
    /// Members drawn from the remainder pool
    pub others: Vec<PersonId>,
}

impl Household {
    pub fn members(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.adults.iter().chain(self.others.iter()).copied()
    }

    pub fn size(&self) -> usize {
        self.adults.len() + self.others.len()
    }

    /// Places left empty because the remainder pool ran out
    pub fn shortfall(&self) -> usize {
        self.target_size.saturating_sub(self.size())
    }

    pub fn is_truncated(&self) -> bool {
        self.shortfall() > 0
    }

    pub fn ages(&self, population: &Population) -> Vec<Age> {
        self.members().filter_map(|id| population.age(id)).collect()
    }
}

/// Result of partitioning: the population arena and the households over it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdAssignment {
    pub population: Population,
    pub households: Vec<Household>,
    /// Remainder-pool people no household had room for
    pub unused: Vec<PersonId>,
}

impl HouseholdAssignment {
    pub fn truncated_count(&self) -> usize {
        self.households.iter().filter(|h| h.is_truncated()).count()
    }

    pub fn housed_count(&self) -> usize {
        self.households.iter().map(|h| h.size()).sum()
    }
}

/// Partition `ages` into one household per entry of `household_sizes`
///
/// Fails with `InsufficientAdults` before building anything when there are
/// fewer people than `household_sizes.len() * num_adults`. A household that
/// cannot be filled from the remainder pool is returned short rather than
/// rejected; check [`Household::shortfall`] when exact sizes matter.
///
/// A target smaller than `num_adults` still receives all `num_adults`
/// adults, so its `size()` exceeds `target_size` and `shortfall()` is 0.
pub fn partition<R: Rng + ?Sized>(
    ages: &[Age],
    household_sizes: &[usize],
    num_adults: usize,
    rng: &mut R,
) -> Result<HouseholdAssignment> {
    let required = household_sizes.len().saturating_mul(num_adults);
    if ages.len() < required {
        return Err(HouseholdError::InsufficientAdults {
            required,
            available: ages.len(),
        });
    }

    let population = Population::from_ages(ages)?;

    let mut adult_pool = population.ids_by_age_desc();
    let mut remainder_pool = adult_pool.split_off(required);
    adult_pool.shuffle(rng);
    remainder_pool.shuffle(rng);

    let mut adults = adult_pool.into_iter();
    let mut remainder = remainder_pool.into_iter();
    let mut households = Vec::with_capacity(household_sizes.len());

    for (idx, &target_size) in household_sizes.iter().enumerate() {
        let household_adults: Vec<PersonId> = adults.by_ref().take(num_adults).collect();
        let capacity = target_size.saturating_sub(num_adults);
        let others: Vec<PersonId> = remainder.by_ref().take(capacity).collect();

        let household = Household {
            id: HouseholdId::new(idx as u32),
            target_size,
            adults: household_adults,
            others,
        };

        tracing::debug!(
            "Household {}: target {}, ages {:?}",
            idx,
            target_size,
            household.ages(&population)
        );

        households.push(household);
    }

    let unused: Vec<PersonId> = remainder.collect();

    let assignment = HouseholdAssignment { population, households, unused };

    let truncated = assignment.truncated_count();
    if truncated > 0 {
        tracing::warn!(
            "{} of {} households are below target size",
            truncated,
            assignment.households.len()
        );
    }

    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_oldest_people_become_adults() {
        let ages = [5, 70, 8, 65, 12, 50, 3, 45];
        let result = partition(&ages, &[4, 4], 2, &mut rng()).unwrap();

        assert_eq!(result.households.len(), 2);
        for household in &result.households {
            assert_eq!(household.adults.len(), 2);
            for id in &household.adults {
                assert!(result.population.age(*id).unwrap() >= 45);
            }
            for id in &household.others {
                assert!(result.population.age(*id).unwrap() <= 12);
            }
        }
    }

    #[test]
    fn test_every_person_used_at_most_once() {
        let ages: Vec<Age> = (0..40).map(|i| (i * 3 % 90) as Age).collect();
        let result = partition(&ages, &[2, 3, 4, 5, 6], 2, &mut rng()).unwrap();

        let mut seen: Vec<PersonId> = result
            .households
            .iter()
            .flat_map(|h| h.members())
            .chain(result.unused.iter().copied())
            .collect();
        let total = seen.len();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), total);
        assert_eq!(total, ages.len());
    }

    #[test]
    fn test_same_age_members_are_not_collapsed() {
        let ages = [40, 40, 40, 40];
        let result = partition(&ages, &[4], 2, &mut rng()).unwrap();
        assert_eq!(result.households[0].size(), 4);
        assert_eq!(result.households[0].ages(&result.population), vec![40, 40, 40, 40]);
    }

    #[test]
    fn test_remainder_exhaustion_truncates() {
        let ages = [60, 55, 50, 45, 10];
        let result = partition(&ages, &[3, 4], 2, &mut rng()).unwrap();

        assert_eq!(result.households[0].size(), 3);
        assert_eq!(result.households[1].size(), 2);
        assert_eq!(result.households[1].shortfall(), 2);
        assert_eq!(result.truncated_count(), 1);
        assert!(result.unused.is_empty());
    }

    #[test]
    fn test_leftover_people_reported_unused() {
        let ages = [60, 55, 10, 9, 8, 7];
        let result = partition(&ages, &[3], 2, &mut rng()).unwrap();
        assert_eq!(result.households[0].size(), 3);
        assert_eq!(result.unused.len(), 3);
        assert_eq!(result.housed_count(), 3);
    }

    #[test]
    fn test_household_smaller_than_adult_requirement_keeps_adults() {
        let ages = [60, 55, 10];
        let result = partition(&ages, &[1], 2, &mut rng()).unwrap();
        assert_eq!(result.households[0].adults.len(), 2);
        assert!(result.households[0].others.is_empty());
        assert_eq!(result.households[0].size(), 2);
        assert_eq!(result.households[0].shortfall(), 0);
        assert!(!result.households[0].is_truncated());
        assert_eq!(result.unused.len(), 1);
    }

    #[test]
    fn test_insufficient_adults() {
        let ages = [60, 55, 50];
        let result = partition(&ages, &[2, 2], 2, &mut rng());
        assert!(matches!(
            result,
            Err(HouseholdError::InsufficientAdults { required: 4, available: 3 })
        ));
    }

    #[test]
    fn test_no_households() {
        let result = partition(&[], &[], 2, &mut rng()).unwrap();
        assert!(result.households.is_empty());
        assert!(result.unused.is_empty());
    }

    #[test]
    fn test_zero_adults_fills_from_remainder() {
        let ages = [1, 2, 3, 4];
        let result = partition(&ages, &[2, 2], 0, &mut rng()).unwrap();
        assert!(result.households.iter().all(|h| h.adults.is_empty() && h.size() == 2));
    }

    #[test]
    fn test_households_keep_input_order() {
        let ages: Vec<Age> = (1..=30).collect();
        let sizes = [6, 2, 5, 3];
        let result = partition(&ages, &sizes, 2, &mut rng()).unwrap();
        for (idx, (household, &size)) in result.households.iter().zip(sizes.iter()).enumerate() {
            assert_eq!(household.id, HouseholdId(idx as u32));
            assert_eq!(household.target_size, size);
            assert_eq!(household.size(), size);
        }
    }
}
