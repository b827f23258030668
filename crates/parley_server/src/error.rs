use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use parley_domain::Provider;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned for upstream failures that carry no provider message.
pub const GENERIC_FAILURE: &str = "Failed to generate response";

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or missing client input.
    #[error("{0}")]
    Validation(String),

    /// The provider has no API key configured.
    #[error("{} API key not configured", .0.label())]
    MissingCredentials(Provider),

    /// The provider call failed.
    #[error("{provider} request failed: {source:#}")]
    Upstream {
        provider: Provider,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// JSON envelope of every failed request.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::MissingCredentials(_) | Error::Upstream { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to the caller. Upstream failures only expose what the
    /// provider itself reported.
    pub fn public_message(&self) -> String {
        match self {
            Error::Upstream { source, .. } => source
                .downcast_ref::<parley_provider::Error>()
                .and_then(|error| error.upstream_message())
                .unwrap_or(GENERIC_FAILURE)
                .to_string(),
            error => error.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = ErrorResponse { error: self.public_message() };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_missing_credentials_message() {
        let fixture = Error::MissingCredentials(Provider::Anthropic);
        assert_eq!(fixture.public_message(), "Anthropic API key not configured");
        assert_eq!(fixture.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_status() {
        let fixture = Error::validation("Message is required");
        assert_eq!(fixture.status(), StatusCode::BAD_REQUEST);
        assert_eq!(fixture.public_message(), "Message is required");
    }

    #[test]
    fn test_upstream_hides_transport_details() {
        let fixture = Error::Upstream {
            provider: Provider::OpenAI,
            source: anyhow::anyhow!("connection refused (os error 111) at 10.0.0.3:443"),
        };
        assert_eq!(fixture.public_message(), GENERIC_FAILURE);
        assert_eq!(fixture.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_exposes_provider_message() {
        let source = parley_provider::Error::upstream(
            Provider::OpenAI,
            400,
            r#"{"error":{"message":"max_tokens is too large"}}"#,
        );
        let fixture = Error::Upstream { provider: Provider::OpenAI, source: source.into() };
        assert_eq!(fixture.public_message(), "max_tokens is too large");
    }
}
