//! Testing utilities for BHP workspace
//!
//! Shared fixtures and an in-process stub of the prediction API.

#![allow(missing_docs)]

use bhp_estimator::{PredictionRequest, PropertyType};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::Filter;

/// How the stub answers
#[derive(Debug, Clone, PartialEq)]
pub enum StubBehavior {
    /// Answer every endpoint successfully
    Healthy {
        predicted_price: f64,
        locations: Vec<String>,
    },
    /// Answer every endpoint with 500 and an error body
    ServerError(String),
    /// Answer 200 with bodies missing the documented fields
    Malformed,
}

impl StubBehavior {
    pub fn healthy(predicted_price: f64) -> Self {
        Self::Healthy {
            predicted_price,
            locations: sample_locations(),
        }
    }

    fn predict_reply(&self) -> (Value, StatusCode) {
        match self {
            Self::Healthy {
                predicted_price, ..
            } => (
                json!({ "predicted_price": predicted_price, "status": "success" }),
                StatusCode::OK,
            ),
            Self::ServerError(message) => error_reply(message),
            Self::Malformed => (json!({ "price": "a lot" }), StatusCode::OK),
        }
    }

    fn locations_reply(&self) -> (Value, StatusCode) {
        match self {
            Self::Healthy { locations, .. } => (
                json!({ "locations": locations, "status": "success" }),
                StatusCode::OK,
            ),
            Self::ServerError(message) => error_reply(message),
            Self::Malformed => (json!({ "locations": 42 }), StatusCode::OK),
        }
    }

    fn metadata_reply(&self) -> (Value, StatusCode) {
        match self {
            Self::Healthy { .. } => (
                json!({
                    "features": ["location", "total_sqft", "bath", "bhk"],
                    "target": "price",
                    "model_type": "XGBoost",
                    "version": "1.0"
                }),
                StatusCode::OK,
            ),
            Self::ServerError(message) => error_reply(message),
            Self::Malformed => (json!({ "version": 1 }), StatusCode::OK),
        }
    }
}

fn error_reply(message: &str) -> (Value, StatusCode) {
    (
        json!({ "error": message, "status": "error" }),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}

/// Running stub of the prediction API
#[derive(Debug, Clone)]
pub struct StubApi {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl StubApi {
    /// Start the stub on an ephemeral localhost port
    ///
    /// Must be called inside a tokio runtime; the server runs until the
    /// runtime shuts down.
    pub fn spawn(behavior: StubBehavior) -> Self {
        let behavior = Arc::new(behavior);
        let requests = Arc::new(Mutex::new(Vec::new()));

        let predict = {
            let behavior = Arc::clone(&behavior);
            let requests = Arc::clone(&requests);
            warp::path!("api" / "predict")
                .and(warp::post())
                .and(warp::body::json())
                .map(move |body: Value| {
                    requests.lock().push(body);
                    let (payload, status) = behavior.predict_reply();
                    warp::reply::with_status(warp::reply::json(&payload), status)
                })
        };

        let locations = {
            let behavior = Arc::clone(&behavior);
            warp::path!("api" / "locations")
                .and(warp::get())
                .map(move || {
                    let (payload, status) = behavior.locations_reply();
                    warp::reply::with_status(warp::reply::json(&payload), status)
                })
        };

        let metadata = {
            let behavior = Arc::clone(&behavior);
            warp::path!("api" / "model_metadata")
                .and(warp::get())
                .map(move || {
                    let (payload, status) = behavior.metadata_reply();
                    warp::reply::with_status(warp::reply::json(&payload), status)
                })
        };

        let routes = predict.or(locations).or(metadata);
        let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        Self { addr, requests }
    }

    /// Base URL to configure clients with
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// JSON bodies received by `POST /predict`, in arrival order
    pub fn predict_requests(&self) -> Vec<Value> {
        self.requests.lock().clone()
    }
}

pub fn sample_locations() -> Vec<String> {
    ["Electronic City", "HSR Layout", "Koramangala", "Whitefield"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// 1200 sq.ft 2BHK apartment in Koramangala, priced at ₹11,466,000 by the heuristic
pub fn koramangala_request() -> PredictionRequest {
    PredictionRequest::new(1200.0, "Koramangala", 2, 2).unwrap()
}

pub fn villa_request(location: &str) -> PredictionRequest {
    PredictionRequest::new(2400.0, location, 4, 3)
        .unwrap()
        .with_property_type(PropertyType::Villa)
}
