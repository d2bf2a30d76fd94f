//! BHP Client - remote prediction service
//!
//! Talks to the housing-price prediction API and exposes both estimator
//! variants behind one async seam:
//! - [`PredictionClient`]: `POST /predict`, `GET /locations`, `GET /model_metadata`
//! - [`PricePredictor`]: implemented by [`LocalPredictor`] and [`PredictionClient`]
//! - [`ClientConfig`]: base URL from TOML and `BHP_API_BASE_URL`
//!
//! # Example
//!
//! ```rust,ignore
//! use bhp_client::{ClientConfig, PredictionClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PredictionClient::new(ClientConfig::default())?;
//! let price = client.estimate(1200.0, "Whitefield", 2, 2).await?;
//! let locations = client.list_locations().await;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod client;
pub mod config;
pub mod error;
pub mod predictor;

pub use client::{ModelMetadata, PredictBody, PredictionClient};
pub use config::{ClientConfig, ConfigError, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::{PredictionError, USER_MESSAGE};
pub use predictor::{LocalPredictor, PricePredictor};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
