//! BHP Estimator - Bangalore housing price estimation
//!
//! Pure, synchronous building blocks of the price dashboard:
//! - [`HeuristicEstimator`]: feature-weighted price estimate, rounded to ₹1000
//! - [`FeatureWeightTable`]: category factors with a mandatory `default` fallback
//! - [`MODEL_METRICS`]: pre-computed accuracy of the trained regression models
//! - [`generate_history`]: illustrative month-by-month price trend
//! - [`market`]: static market datasets and comparison chart series
//!
//! # Example
//!
//! ```rust
//! use bhp_estimator::HeuristicEstimator;
//!
//! let estimator = HeuristicEstimator::default();
//! let price = estimator.estimate(1200.0, "Koramangala", "2", "2", "Apartment");
//! assert_eq!(price, 11_466_000.0);
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod error;
pub mod estimator;
pub mod history;
pub mod market;
pub mod metrics;
pub mod types;
pub mod weights;

// Re-exports for convenience
pub use error::EstimatorError;
pub use estimator::{
    round_to_thousand, EstimateBreakdown, HeuristicEstimator, DEFAULT_MODEL, MIN_PRICE,
};
pub use history::{
    generate_history, generate_history_from, PricePoint, DEFAULT_HISTORY_MONTHS,
    MAX_HISTORY_MONTHS, MONTH_NAMES,
};
pub use metrics::{
    best_by, find_metric, model_metrics, ranked_by, MetricKind, ModelMetric, MODEL_METRICS,
};
pub use types::{PredictionRequest, PropertyType, MAX_BATHROOMS, MAX_BEDROOMS};
pub use weights::{FeatureWeightTable, FeatureWeights, Resolved, AREA_WEIGHT, BASE_PRICE};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn estimate_then_history() {
        let estimator = HeuristicEstimator::default();
        let request = PredictionRequest::new(1200.0, "Koramangala", 2, 2).unwrap();
        let price = estimator.estimate_with_model(DEFAULT_MODEL, &request);

        let history = generate_history(price, DEFAULT_HISTORY_MONTHS);
        assert_eq!(history.len(), DEFAULT_HISTORY_MONTHS);
        assert!(history.iter().all(|p| (p.price - price).abs() <= price * 0.1));
    }

    #[test]
    fn default_model_has_metrics() {
        assert!(find_metric(DEFAULT_MODEL).is_some());
        assert_eq!(best_by(MetricKind::R2).name, DEFAULT_MODEL);
    }
}
