//! Core input types for price estimation
//!
//! - Property types offered by the prediction form
//! - Validated prediction requests

use crate::error::EstimatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest bedroom count the form offers ("5+ BHK")
pub const MAX_BEDROOMS: u8 = 5;

/// Largest bathroom count the form offers ("4+")
pub const MAX_BATHROOMS: u8 = 4;

/// Property type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    /// Flat in a multi-unit building
    #[default]
    Apartment,
    /// Standalone villa
    Villa,
    /// Independent house
    #[serde(rename = "Independent House")]
    IndependentHouse,
    /// Single floor of a builder-constructed building
    #[serde(rename = "Builder Floor")]
    BuilderFloor,
    /// Land plot
    Plot,
}

impl PropertyType {
    /// All property types, in form order
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Apartment,
        PropertyType::Villa,
        PropertyType::IndependentHouse,
        PropertyType::BuilderFloor,
        PropertyType::Plot,
    ];

    /// Display label, also the weight-table key
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::IndependentHouse => "Independent House",
            PropertyType::BuilderFloor => "Builder Floor",
            PropertyType::Plot => "Plot",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EstimatorError::UnknownPropertyType(s.to_string()))
    }
}

/// Validated prediction request
///
/// Construction guarantees a positive finite area and bedroom/bathroom
/// counts inside the ranges the form offers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    area: f64,
    location: String,
    bedrooms: u8,
    bathrooms: u8,
    property_type: PropertyType,
}

impl PredictionRequest {
    /// Create a validated request for an apartment
    ///
    /// # Errors
    /// Returns error if area is not positive or a count is out of range
    pub fn new(
        area: f64,
        location: impl Into<String>,
        bedrooms: u8,
        bathrooms: u8,
    ) -> Result<Self, EstimatorError> {
        if !area.is_finite() || area <= 0.0 {
            return Err(EstimatorError::InvalidArea(area));
        }
        if !(1..=MAX_BEDROOMS).contains(&bedrooms) {
            return Err(EstimatorError::BedroomsOutOfRange(bedrooms));
        }
        if !(1..=MAX_BATHROOMS).contains(&bathrooms) {
            return Err(EstimatorError::BathroomsOutOfRange(bathrooms));
        }

        Ok(Self {
            area,
            location: location.into(),
            bedrooms,
            bathrooms,
            property_type: PropertyType::default(),
        })
    }

    /// With property type
    #[inline]
    #[must_use]
    pub fn with_property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = property_type;
        self
    }

    /// Built-up area in square feet
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Locality name
    #[inline]
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Bedroom count (BHK)
    #[inline]
    #[must_use]
    pub fn bedrooms(&self) -> u8 {
        self.bedrooms
    }

    /// Bathroom count
    #[inline]
    #[must_use]
    pub fn bathrooms(&self) -> u8 {
        self.bathrooms
    }

    /// Property type
    #[inline]
    #[must_use]
    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }
}
