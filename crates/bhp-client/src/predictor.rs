//! Predictor seam
//!
//! Callers pick the local heuristic or the remote service at runtime
//! through [`PricePredictor`]; the two variants keep their own contracts.

use crate::client::PredictionClient;
use crate::error::PredictionError;
use async_trait::async_trait;
use bhp_estimator::{HeuristicEstimator, PredictionRequest, DEFAULT_MODEL};

/// Source of price predictions
#[async_trait]
pub trait PricePredictor: Send + Sync {
    /// Predict a price for the request
    async fn predict(&self, request: &PredictionRequest) -> Result<f64, PredictionError>;

    /// Short label for logs and output
    fn name(&self) -> &str;
}

/// Local heuristic predictor; never fails
#[derive(Debug, Clone)]
pub struct LocalPredictor {
    estimator: HeuristicEstimator,
    model: String,
}

impl LocalPredictor {
    /// Create predictor over an estimator, using the default model
    #[inline]
    #[must_use]
    pub fn new(estimator: HeuristicEstimator) -> Self {
        Self {
            estimator,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// With model name
    #[inline]
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Underlying estimator
    #[inline]
    #[must_use]
    pub fn estimator(&self) -> &HeuristicEstimator {
        &self.estimator
    }
}

impl Default for LocalPredictor {
    fn default() -> Self {
        Self::new(HeuristicEstimator::default())
    }
}

#[async_trait]
impl PricePredictor for LocalPredictor {
    async fn predict(&self, request: &PredictionRequest) -> Result<f64, PredictionError> {
        let price = self.estimator.estimate_with_model(&self.model, request);
        tracing::info!(price, model = %self.model, "local estimate complete");
        Ok(price)
    }

    fn name(&self) -> &str {
        "local"
    }
}

#[async_trait]
impl PricePredictor for PredictionClient {
    async fn predict(&self, request: &PredictionRequest) -> Result<f64, PredictionError> {
        PredictionClient::predict(self, request).await
    }

    fn name(&self) -> &str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_predictor_matches_estimator() {
        let predictor = LocalPredictor::default().with_model("XGBoost");
        let request = PredictionRequest::new(1200.0, "Koramangala", 2, 2).unwrap();

        let price = tokio_test::block_on(predictor.predict(&request)).unwrap();
        assert_eq!(price, 11_466_000.0);
        assert_eq!(predictor.name(), "local");
    }

    #[test]
    fn predictors_are_object_safe() {
        let predictors: Vec<Box<dyn PricePredictor>> = vec![Box::new(LocalPredictor::default())];
        assert_eq!(predictors[0].name(), "local");
    }
}
