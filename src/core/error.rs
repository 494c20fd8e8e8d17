use thiserror::Error;

use crate::core::types::Age;

#[derive(Error, Debug)]
pub enum HouseholdError {
    #[error("Invalid age distribution: {0}")]
    InvalidDistribution(String),

    #[error("Invalid age range: {0}")]
    InvalidAgeRange(String),

    #[error("Invalid household size range: min {min} > max {max}")]
    InvalidSizeRange { min: usize, max: usize },

    #[error("Not enough adults to fill houses: need {required}, have {available}")]
    InsufficientAdults { required: usize, available: usize },

    #[error("Age {0} outside supported range")]
    AgeOutOfRange(Age),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HouseholdError>;
