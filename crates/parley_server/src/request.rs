use parley_domain::{ModelParameters, ParameterOverrides, Provider};
use serde_json::Value;

use crate::{Error, Result};

/// A validated generation request for one panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// Prompt text, trimmed and never empty.
    pub message: String,
    pub parameters: ModelParameters,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, parameters: ModelParameters) -> Self {
        Self { message: message.into(), parameters }
    }

    /// Validates a raw `{message, parameters}` body and fills missing
    /// parameters from the provider defaults.
    pub fn parse(provider: Provider, body: Value) -> Result<Self> {
        let Value::Object(mut body) = body else {
            return Err(Error::validation("Request body must be a JSON object"));
        };

        let message = match body.remove("message") {
            Some(Value::String(message)) if !message.trim().is_empty() => {
                message.trim().to_string()
            }
            _ => return Err(Error::validation("Message is required and must be a string")),
        };

        let parameters = match body.remove("parameters") {
            Some(parameters @ Value::Object(_)) => parameters,
            _ => {
                return Err(Error::validation(
                    "Parameters are required and must be an object",
                ))
            }
        };
        let parameters: ParameterOverrides = serde_json::from_value(parameters)
            .map_err(|error| Error::validation(format!("Invalid parameters: {error}")))?;

        Ok(Self { message, parameters: parameters.resolve(provider) })
    }
}
