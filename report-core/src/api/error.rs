//! Error handling for the report API client

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure or a request that could not be sent.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("HTTP error with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not a record or a record list.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Status { status, message }
    }

    /// True when the backend reported that the addressed row does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}
