//! Error types for the estimator
//!
//! Lookup misses never produce errors: every weight table falls back to its
//! `default` entry. Errors only arise when building validated inputs or when
//! loading weight tables from external configuration.

use crate::types::{MAX_BATHROOMS, MAX_BEDROOMS};

/// Estimator input and configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimatorError {
    /// Area is zero, negative, or not a finite number
    #[error("area must be a positive number of square feet, got {0}")]
    InvalidArea(f64),

    /// Bedroom count outside the supported range
    #[error("bedrooms must be between 1 and {max}, got {0}", max = MAX_BEDROOMS)]
    BedroomsOutOfRange(u8),

    /// Bathroom count outside the supported range
    #[error("bathrooms must be between 1 and {max}, got {0}", max = MAX_BATHROOMS)]
    BathroomsOutOfRange(u8),

    /// Property type label not recognized
    #[error("unknown property type: {0}")]
    UnknownPropertyType(String),

    /// Weight table has no `default` entry
    #[error("weight table is missing its `default` entry")]
    MissingDefault,

    /// Weight configuration rejected
    #[error("invalid weights: {0}")]
    InvalidWeights(String),
}
