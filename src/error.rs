//! Error types with HTTP status code mapping.
//!
//! [`ApiError`] is the only error type that reaches the HTTP layer. Data
//! source failures ([`SourceError`], [`CmsError`]) are recovered inside the
//! content service and never surface to clients directly.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// { "error": "Event not found" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorResponse {
    /// Creates a body with just a message.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// HTTP-facing error enum.
///
/// | Variant            | HTTP Status               |
/// |--------------------|---------------------------|
/// | `NotFound`         | 404 Not Found             |
/// | `MethodNotAllowed` | 405 Method Not Allowed    |
/// | `Internal`         | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource or collection does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The path exists but only serves `GET`.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Unexpected failure. The message is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message sent to the client.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(message) = &self {
            tracing::error!(%message, "request failed");
        }
        let status = self.status_code();
        let body = ErrorResponse::new(self.public_message());
        (status, axum::Json(body)).into_response()
    }
}

/// Startup configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `LISTEN_ADDR` was set but is not a socket address.
    #[error("invalid LISTEN_ADDR {value:?}: {source}")]
    ListenAddr {
        /// The raw value.
        value: String,
        /// Parse failure.
        source: std::net::AddrParseError,
    },

    /// The CMS HTTP client could not be constructed.
    #[error("failed to build CMS client: {0}")]
    CmsClient(#[source] reqwest::Error),
}

/// Failures talking to the headless CMS.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// The query endpoint could not be assembled into a URL.
    #[error("invalid CMS endpoint {url}: {source}")]
    Endpoint {
        /// The endpoint that failed to parse.
        url: String,
        /// Parse failure.
        source: url::ParseError,
    },

    /// HTTP request failed (network, DNS, TLS, timeout).
    #[error("CMS request failed for {url}: {source}")]
    Http {
        /// Request URL without query string.
        url: String,
        /// Transport failure.
        source: reqwest::Error,
    },

    /// The CMS answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus {
        /// Request URL without query string.
        url: String,
        /// Returned status.
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode CMS response from {url}: {source}")]
    Decode {
        /// Request URL without query string.
        url: String,
        /// Decode failure.
        source: reqwest::Error,
    },

    /// A query parameter could not be encoded as JSON.
    #[error("failed to encode query parameter {name}: {source}")]
    Param {
        /// Parameter name without the `$` prefix.
        name: String,
        /// Encode failure.
        source: serde_json::Error,
    },
}

/// Errors from a [`crate::source::ContentSource`].
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// A fixture file could not be read.
    #[error("failed to read fixture {path}: {source}")]
    FixtureRead {
        /// Fixture path.
        path: PathBuf,
        /// I/O failure.
        source: std::io::Error,
    },

    /// A fixture file is not valid JSON of the expected shape.
    #[error("failed to parse fixture {path}: {source}")]
    FixtureParse {
        /// Fixture path.
        path: PathBuf,
        /// Parse failure.
        source: serde_json::Error,
    },

    /// The CMS query failed.
    #[error(transparent)]
    Cms(#[from] CmsError),
}
