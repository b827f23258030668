use derive_setters::Setters;
use parley_domain::Provider;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{provider} responded with status {status}: {}", .message.as_deref().unwrap_or("[Unknown]"))]
    Upstream {
        provider: Provider,
        status: u16,
        /// Error message from the provider's error envelope, if any.
        message: Option<String>,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds an upstream error from a non-success response body.
    pub fn upstream(provider: Provider, status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|response| response.message_deep().map(str::to_string));
        Error::Upstream { provider, status, message }
    }

    /// The message the provider itself reported, safe to pass to a caller.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            Error::Upstream { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Upstream { status, .. } => Some(*status),
            Error::Http(error) => error.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}

/// Error envelope shared by both providers:
/// `{"error": {"type": "...", "message": "..."}}`, optionally nested.
#[derive(Default, Debug, Deserialize, Serialize, Clone, Setters)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Box<ErrorResponse>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_of: Option<String>,
}

impl ErrorResponse {
    /// Innermost message of the envelope.
    pub fn message_deep(&self) -> Option<&str> {
        if let Some(ref error) = self.error {
            if let Some(message) = error.message_deep() {
                return Some(message);
            }
        }
        self.message.as_deref().filter(|message| !message.is_empty())
    }
}
