//! Local heuristic price estimator
//!
//! Price is a weighted linear combination of feature factors anchored on a
//! base price per square foot:
//!
//! ```text
//! raw   = (base + base*location + base*bedrooms + base*bathrooms) * property_type * area
//! price = max(round(raw / 1000) * 1000, 1000)
//! ```
//!
//! Every factor comes from a [`FeatureWeightTable`](crate::FeatureWeightTable),
//! so unrecognized inputs fall back to the table's default and estimation
//! never fails.

use crate::types::PredictionRequest;
use crate::weights::FeatureWeights;
use serde::Serialize;

/// Model whose estimate is used when none is requested
pub const DEFAULT_MODEL: &str = "Random Forest";

/// Smallest price the heuristic reports
pub const MIN_PRICE: f64 = 1000.0;

/// Round to the nearest multiple of 1000
#[inline]
#[must_use]
pub fn round_to_thousand(value: f64) -> f64 {
    (value / 1000.0).round() * 1000.0
}

/// Every intermediate value of one estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimateBreakdown {
    /// Resolved locality factor
    pub location_factor: f64,
    /// Resolved bedroom factor
    pub bedroom_factor: f64,
    /// Resolved bathroom factor
    pub bathroom_factor: f64,
    /// Resolved property-type multiplier
    pub property_type_factor: f64,
    /// `area * area_weight`; reported only, does not enter the price
    pub area_component: f64,
    /// `base_price * location_factor`
    pub location_component: f64,
    /// `base_price * bedroom_factor`
    pub bedroom_component: f64,
    /// `base_price * bathroom_factor`
    pub bathroom_component: f64,
    /// Unrounded price
    pub raw_price: f64,
    /// Price rounded to the nearest thousand, at least [`MIN_PRICE`]
    pub price: f64,
}

/// Feature-weighted heuristic estimator
#[derive(Debug, Clone, Default)]
pub struct HeuristicEstimator {
    weights: FeatureWeights,
}

impl HeuristicEstimator {
    /// Create estimator over the given weights
    #[inline]
    #[must_use]
    pub fn new(weights: FeatureWeights) -> Self {
        Self { weights }
    }

    /// Weights in use
    #[inline]
    #[must_use]
    pub fn weights(&self) -> &FeatureWeights {
        &self.weights
    }

    /// Compute every factor and component for one property
    ///
    /// Categorical inputs are raw form values: bedroom and bathroom counts
    /// as strings ("2"), property type as its label ("Independent House").
    #[must_use]
    pub fn breakdown(
        &self,
        area: f64,
        location: &str,
        bedrooms: &str,
        bathrooms: &str,
        property_type: &str,
    ) -> EstimateBreakdown {
        let w = &self.weights;

        let location_factor = w.location.resolve(location);
        let bedroom_factor = w.bedrooms.resolve(bedrooms);
        let bathroom_factor = w.bathrooms.resolve(bathrooms);
        let property_type_factor = w.property_type.resolve(property_type);

        if location_factor.is_fallback() {
            tracing::debug!(location, "unknown location, using default factor");
        }

        let location_factor = location_factor.value();
        let bedroom_factor = bedroom_factor.value();
        let bathroom_factor = bathroom_factor.value();
        let property_type_factor = property_type_factor.value();

        let area_component = area * w.area;
        let location_component = w.base_price * location_factor;
        let bedroom_component = w.base_price * bedroom_factor;
        let bathroom_component = w.base_price * bathroom_factor;

        let raw_price = (w.base_price + location_component + bedroom_component + bathroom_component)
            * property_type_factor
            * area;

        EstimateBreakdown {
            location_factor,
            bedroom_factor,
            bathroom_factor,
            property_type_factor,
            area_component,
            location_component,
            bedroom_component,
            bathroom_component,
            raw_price,
            price: round_to_thousand(raw_price).max(MIN_PRICE),
        }
    }

    /// Estimate price from raw form values
    #[inline]
    #[must_use]
    pub fn estimate(
        &self,
        area: f64,
        location: &str,
        bedrooms: &str,
        bathrooms: &str,
        property_type: &str,
    ) -> f64 {
        self.breakdown(area, location, bedrooms, bathrooms, property_type)
            .price
    }

    /// Estimate price for a validated request
    #[must_use]
    pub fn estimate_request(&self, request: &PredictionRequest) -> f64 {
        self.breakdown_request(request).price
    }

    /// Breakdown for a validated request
    #[must_use]
    pub fn breakdown_request(&self, request: &PredictionRequest) -> EstimateBreakdown {
        self.breakdown(
            request.area(),
            request.location(),
            &request.bedrooms().to_string(),
            &request.bathrooms().to_string(),
            request.property_type().as_str(),
        )
    }

    /// Estimate price using the named model
    ///
    /// Only the Random Forest heuristic is implemented; other model names
    /// resolve to it.
    #[must_use]
    pub fn estimate_with_model(&self, model: &str, request: &PredictionRequest) -> f64 {
        if model != DEFAULT_MODEL {
            tracing::debug!(model, fallback = DEFAULT_MODEL, "no dedicated estimator for model");
        }
        self.estimate_request(request)
    }
}
