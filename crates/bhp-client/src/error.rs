//! Prediction errors
//!
//! Transport failures, error statuses and malformed bodies are kept apart
//! for logging, but all of them surface to users as the same message.

/// Message shown to users for any remote failure
pub const USER_MESSAGE: &str =
    "Failed to get prediction. Please check if the API server is running.";

/// Remote prediction failure
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    /// Connection, timeout or body-decoding failure
    #[error("prediction request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("prediction service returned {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error text from the body, if any
        message: String,
    },

    /// Body did not match the documented shape
    #[error("malformed prediction response: {0}")]
    MalformedResponse(String),
}

impl PredictionError {
    /// Message for user-facing display
    ///
    /// Identical for every variant.
    #[inline]
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        USER_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_is_uniform() {
        let status = PredictionError::Status {
            status: 500,
            message: "model not loaded".to_string(),
        };
        let malformed = PredictionError::MalformedResponse("missing predicted_price".to_string());

        assert_eq!(status.user_message(), malformed.user_message());
        assert!(status.to_string().contains("500"));
        assert!(malformed.to_string().contains("predicted_price"));
    }
}
