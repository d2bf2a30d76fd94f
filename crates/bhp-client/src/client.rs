//! HTTP client for the prediction service
//!
//! Endpoints, relative to the configured base URL:
//! - `POST /predict` `{area, location, bedrooms, bathrooms}` → `{predicted_price}`
//! - `GET /locations` → `{locations: [..]}`
//! - `GET /model_metadata` → [`ModelMetadata`]
//!
//! Every call is fire-once: no retries, no cancellation.

use crate::config::{ClientConfig, ConfigError};
use crate::error::PredictionError;
use bhp_estimator::PredictionRequest;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Body of `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictBody<'a> {
    /// Area in square feet
    pub area: f64,
    /// Locality name
    pub location: &'a str,
    /// Bedroom count
    pub bedrooms: u8,
    /// Bathroom count
    pub bathrooms: u8,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    predicted_price: f64,
}

#[derive(Debug, Deserialize)]
struct LocationsResponse {
    locations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Description of the model served by the prediction service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Input feature columns
    pub features: Vec<String>,
    /// Target column
    pub target: String,
    /// Model family
    pub model_type: String,
    /// Model version
    pub version: String,
}

/// Prediction service client
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PredictionClient {
    /// Create client for the configured service
    ///
    /// # Errors
    /// Returns error if the base URL is not an http(s) URL
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create client reusing an existing HTTP client
    ///
    /// # Errors
    /// Returns error if the base URL is not an http(s) URL
    pub fn with_http_client(
        config: ClientConfig,
        http: reqwest::Client,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { http, config })
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Ask the service for a price
    ///
    /// The returned price is passed through unrounded.
    ///
    /// # Errors
    /// Returns error on network failure, error status, or malformed body
    pub async fn estimate(
        &self,
        area: f64,
        location: &str,
        bedrooms: u8,
        bathrooms: u8,
    ) -> Result<f64, PredictionError> {
        let url = self.config.endpoint("predict");
        let body = PredictBody {
            area,
            location,
            bedrooms,
            bathrooms,
        };

        tracing::debug!(%url, area, location, bedrooms, bathrooms, "requesting prediction");
        let response = self.http.post(&url).json(&body).send().await?;
        let parsed: PredictResponse = read_json(response).await?;

        tracing::info!(price = parsed.predicted_price, "remote prediction complete");
        Ok(parsed.predicted_price)
    }

    /// Ask the service for a price for a validated request
    ///
    /// The service does not take a property type; it is ignored.
    ///
    /// # Errors
    /// Returns error on network failure, error status, or malformed body
    pub async fn predict(&self, request: &PredictionRequest) -> Result<f64, PredictionError> {
        self.estimate(
            request.area(),
            request.location(),
            request.bedrooms(),
            request.bathrooms(),
        )
        .await
    }

    /// Localities known to the service
    ///
    /// # Errors
    /// Returns error on network failure, error status, or malformed body
    pub async fn try_list_locations(&self) -> Result<Vec<String>, PredictionError> {
        let parsed: LocationsResponse = self.get_json("locations").await?;
        Ok(parsed.locations)
    }

    /// Localities known to the service, or an empty list on any failure
    pub async fn list_locations(&self) -> Vec<String> {
        match self.try_list_locations().await {
            Ok(locations) => locations,
            Err(e) => {
                tracing::warn!("Failed to load locations: {}", e);
                Vec::new()
            }
        }
    }

    /// Metadata of the served model
    ///
    /// # Errors
    /// Returns error on network failure, error status, or malformed body
    pub async fn model_metadata(&self) -> Result<ModelMetadata, PredictionError> {
        self.get_json("model_metadata").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, PredictionError> {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, PredictionError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown error").to_string());
        return Err(PredictionError::Status {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&text).map_err(|e| PredictionError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_body_shape() {
        let body = PredictBody {
            area: 1200.0,
            location: "Whitefield",
            bedrooms: 2,
            bathrooms: 2,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "area": 1200.0,
                "location": "Whitefield",
                "bedrooms": 2,
                "bathrooms": 2
            })
        );
    }

    #[test]
    fn rejects_bad_base_url() {
        let config = ClientConfig::new().with_base_url("not a url");
        assert!(PredictionClient::new(config).is_err());
    }

    #[tokio::test]
    async fn unreachable_service_degrades() {
        // port 9 (discard) on localhost is expected to refuse connections
        let config = ClientConfig::new().with_base_url("http://127.0.0.1:9/api");
        let client = PredictionClient::new(config).unwrap();

        assert!(client.list_locations().await.is_empty());

        let err = client.estimate(1200.0, "Whitefield", 2, 2).await.unwrap_err();
        assert!(matches!(err, PredictionError::Transport(_)));
        assert_eq!(err.user_message(), crate::error::USER_MESSAGE);
    }
}
