//! Age bands, weighted age distributions and household size ranges

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{HouseholdError, Result};
use crate::core::types::{Age, MAX_AGE};

/// Inclusive age band parsed from a `"min-max"` label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: Age,
    pub max: Age,
}

impl AgeRange {
    pub fn new(min: Age, max: Age) -> Result<Self> {
        if min > max {
            return Err(HouseholdError::InvalidAgeRange(format!(
                "{}-{}: min exceeds max",
                min, max
            )));
        }
        if max > MAX_AGE {
            return Err(HouseholdError::InvalidAgeRange(format!(
                "{}-{}: max exceeds {}",
                min, max, MAX_AGE
            )));
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, age: Age) -> bool {
        (self.min..=self.max).contains(&age)
    }

    /// Number of distinct ages in the band
    pub fn width(&self) -> usize {
        (self.max - self.min) as usize + 1
    }
}

impl FromStr for AgeRange {
    type Err = HouseholdError;

    fn from_str(label: &str) -> Result<Self> {
        let (min, max) = label.split_once('-').ok_or_else(|| {
            HouseholdError::InvalidAgeRange(format!("'{}' is not min-max", label))
        })?;

        let parse = |s: &str| {
            s.trim().parse::<Age>().map_err(|e| {
                HouseholdError::InvalidAgeRange(format!("'{}': {}", label, e))
            })
        };

        Self::new(parse(min)?, parse(max)?)
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// One weighted band of an age distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeBand {
    pub range: AgeRange,
    pub weight: f64,
}

/// Weighted age bands, kept in a fixed order so sampling is reproducible
///
/// Weights must each lie in [0, 1] and sum to at most 1. They are
/// normalized by their total when converting to head counts, so they do
/// not need to sum to exactly 1.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeDistribution {
    bands: Vec<AgeBand>,
}

impl AgeDistribution {
    /// Build a distribution from `(label, weight)` pairs, in the given order
    pub fn new<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let raw: Vec<(&str, f64)> = entries.into_iter().collect();

        // Weights are checked before any label is parsed so a bad total
        // is reported first.
        let total: f64 = raw.iter().map(|(_, w)| w).sum();
        if total > 1.0 {
            return Err(HouseholdError::InvalidDistribution(format!(
                "total weight {} exceeds 1",
                total
            )));
        }

        for (label, weight) in &raw {
            if !weight.is_finite() || *weight < 0.0 || *weight > 1.0 {
                return Err(HouseholdError::InvalidDistribution(format!(
                    "weight {} for age range {} outside [0, 1]",
                    weight, label
                )));
            }
        }

        let bands = raw
            .into_iter()
            .map(|(label, weight)| -> Result<AgeBand> {
                Ok(AgeBand { range: label.parse()?, weight })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { bands })
    }

    /// Build from a label map; bands are ordered by label
    pub fn from_map(map: &BTreeMap<String, f64>) -> Result<Self> {
        Self::new(map.iter().map(|(label, weight)| (label.as_str(), *weight)))
    }

    pub fn bands(&self) -> &[AgeBand] {
        &self.bands
    }

    pub fn total_weight(&self) -> f64 {
        self.bands.iter().map(|b| b.weight).sum()
    }

}

/// Inclusive range household target sizes are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdSizeRange {
    pub min: usize,
    pub max: usize,
}

impl HouseholdSizeRange {
    pub fn new(min: usize, max: usize) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(HouseholdError::InvalidSizeRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for HouseholdSizeRange {
    fn default() -> Self {
        Self { min: 2, max: 6 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_age_range() {
        let range: AgeRange = "19-40".parse().unwrap();
        assert_eq!(range, AgeRange { min: 19, max: 40 });
        assert_eq!(range.width(), 22);
        assert!(range.contains(19));
        assert!(range.contains(40));
        assert!(!range.contains(41));
        assert_eq!(range.to_string(), "19-40");
    }

    #[test]
    fn test_parse_single_age_range() {
        let range: AgeRange = "5-5".parse().unwrap();
        assert_eq!(range.width(), 1);
    }

    #[test]
    fn test_parse_rejects_malformed_labels() {
        assert!(matches!("19".parse::<AgeRange>(), Err(HouseholdError::InvalidAgeRange(_))));
        assert!(matches!("a-b".parse::<AgeRange>(), Err(HouseholdError::InvalidAgeRange(_))));
        assert!(matches!("40-19".parse::<AgeRange>(), Err(HouseholdError::InvalidAgeRange(_))));
        assert!(matches!("90-130".parse::<AgeRange>(), Err(HouseholdError::InvalidAgeRange(_))));
    }

    #[test]
    fn test_distribution_keeps_order() {
        let dist = AgeDistribution::new([("19-100", 0.5), ("1-18", 0.5)]).unwrap();
        assert_eq!(dist.bands()[0].range, AgeRange { min: 19, max: 100 });
        assert_eq!(dist.bands()[1].range, AgeRange { min: 1, max: 18 });
        assert!((dist.total_weight() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_distribution_rejects_total_above_one() {
        let result = AgeDistribution::new([("1-18", 0.6), ("19-100", 0.6)]);
        assert!(matches!(result, Err(HouseholdError::InvalidDistribution(_))));
    }

    #[test]
    fn test_distribution_rejects_total_just_above_one() {
        let result = AgeDistribution::new([("0-10", 0.5), ("11-20", 0.5000000005)]);
        assert!(matches!(result, Err(HouseholdError::InvalidDistribution(_))));
    }

    #[test]
    fn test_distribution_accepts_total_of_exactly_one() {
        assert!(AgeDistribution::new([("0-10", 0.5), ("11-20", 0.5)]).is_ok());
    }

    #[test]
    fn test_distribution_rejects_negative_weight() {
        let result = AgeDistribution::new([("1-18", -0.1), ("19-100", 0.5)]);
        assert!(matches!(result, Err(HouseholdError::InvalidDistribution(_))));
    }

    #[test]
    fn test_distribution_rejects_nan_weight() {
        let result = AgeDistribution::new([("1-18", f64::NAN)]);
        assert!(matches!(result, Err(HouseholdError::InvalidDistribution(_))));
    }

    #[test]
    fn test_distribution_allows_total_below_one() {
        let dist = AgeDistribution::new([
            ("1-12", 0.15),
            ("13-18", 0.15),
            ("19-40", 0.3),
            ("41-70", 0.3),
            ("71-100", 0.01),
        ])
        .unwrap();
        assert_eq!(dist.bands().len(), 5);
    }

    #[test]
    fn test_from_map_orders_by_label() {
        let mut map = BTreeMap::new();
        map.insert("19-100".to_string(), 0.5);
        map.insert("1-18".to_string(), 0.5);
        let dist = AgeDistribution::from_map(&map).unwrap();
        assert_eq!(dist.bands()[0].range.min, 1);
    }

    #[test]
    fn test_size_range_validation() {
        assert!(HouseholdSizeRange::new(2, 6).is_ok());
        assert!(HouseholdSizeRange::new(3, 3).is_ok());
        assert!(matches!(
            HouseholdSizeRange::new(6, 2),
            Err(HouseholdError::InvalidSizeRange { min: 6, max: 2 })
        ));
    }
}
