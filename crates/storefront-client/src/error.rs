use reqwest::StatusCode;
use serde::Deserialize;
use storefront_types::ports::token_store::TokenStoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("api error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("session expired")]
    SessionExpired,

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error(transparent)]
    TokenStorage(#[from] TokenStoreError),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    /// Non-2xx responses carry `{"message": ...}` (or `{"error": ...}` from
    /// older backend revisions); fall back to the status line.
    pub(crate) async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status();
        let message = match res.json::<ErrorBody>().await {
            Ok(body) => body
                .message
                .or(body.error)
                .unwrap_or_else(|| status.to_string()),
            Err(_) => status.to_string(),
        };
        ApiError::Api { status, message }
    }

    /// The status of an `Api` error, if that is what this is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
