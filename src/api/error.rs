//! API error types for the iTransact REST API client.

use thiserror::Error;

/// Every way a signed request can fail.
///
/// Each call yields exactly one of these or a parsed success value; nothing is
/// retried or recovered locally.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No HTTP response was obtained (DNS, connect, timeout) or its body could not be read
    #[cfg(feature = "http")]
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a status other than 200 or 201
    #[error("API error (status {status}): {body}")]
    Api {
        status: u16,
        /// Response body, unparsed. Bytes are kept as received; only invalid
        /// UTF-8 sequences are replaced with U+FFFD.
        body: String,
    },

    /// Status 200/201 but the body is not JSON of the expected shape
    #[error("Malformed response: {source}")]
    MalformedResponse {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request payload could not be serialized; nothing was sent
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ApiError {
    /// HTTP status of an [`ApiError::Api`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, for failures that received one.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } | Self::MalformedResponse { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// Whether the failure happened before any HTTP response was obtained.
    pub fn is_transport(&self) -> bool {
        #[cfg(feature = "http")]
        {
            matches!(self, Self::Transport(_))
        }
        #[cfg(not(feature = "http"))]
        {
            false
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Classify a received response into a parsed value or an error.
///
/// Only 200 and 201 count as success. No schema validation happens beyond
/// deserializing into `T`.
pub fn classify_response<T: serde::de::DeserializeOwned>(status: u16, body: String) -> ApiResult<T> {
    if status != 200 && status != 201 {
        return Err(ApiError::Api { status, body });
    }
    match serde_json::from_str::<T>(&body) {
        Ok(parsed) => Ok(parsed),
        Err(source) => Err(ApiError::MalformedResponse { body, source }),
    }
}
