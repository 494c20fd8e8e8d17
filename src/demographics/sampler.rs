//! Demographic sampler
//!
//! Draws a population of ages from a weighted age distribution and a
//! target size for every household.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::Age;
use crate::demographics::distribution::{AgeDistribution, HouseholdSizeRange};

/// Output of [`sample`]: raw ages plus one target size per household
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemographicSample {
    /// Ages of every sampled person, band after band
    pub ages: Vec<Age>,
    /// Target size of each household, in household order
    pub household_sizes: Vec<usize>,
}

/// Number of people to draw for a band
///
/// Enough people are generated to fill every household at the largest
/// possible size, split across bands by normalized weight.
pub fn band_head_count(
    weight: f64,
    total_weight: f64,
    num_households: usize,
    max_size: usize,
) -> usize {
    if total_weight <= 0.0 {
        return 0;
    }
    (num_households as f64 * (weight / total_weight) * max_size as f64).round() as usize
}

/// Sample ages and household target sizes
///
/// Ages are drawn uniformly within each band; the concatenation order across
/// bands follows the distribution's band order but callers should not rely on
/// grouping. Exactly `num_households` sizes are drawn uniformly from
/// `size_range`.
pub fn sample<R: Rng + ?Sized>(
    distribution: &AgeDistribution,
    size_range: HouseholdSizeRange,
    num_households: usize,
    adults_per_household: usize,
    rng: &mut R,
) -> Result<DemographicSample> {
    size_range.validate()?;

    if size_range.min < adults_per_household {
        tracing::warn!(
            "Household size range {}-{} allows households smaller than {} adults",
            size_range.min,
            size_range.max,
            adults_per_household
        );
    }

    let total_weight = distribution.total_weight();
    let mut ages = Vec::new();

    for band in distribution.bands() {
        let count = band_head_count(band.weight, total_weight, num_households, size_range.max);
        tracing::debug!("Sampling {} people aged {}", count, band.range);

        ages.extend((0..count).map(|_| rng.gen_range(band.range.min..=band.range.max)));
    }

    let household_sizes = (0..num_households)
        .map(|_| rng.gen_range(size_range.min..=size_range.max))
        .collect();

    Ok(DemographicSample { ages, household_sizes })
}
