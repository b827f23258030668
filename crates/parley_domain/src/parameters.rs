use derive_setters::Setters;
use serde::{Deserialize, Serialize};

use crate::Provider;

/// Generation settings of a single panel.
///
/// Ranges are only enforced by the input widgets of the client, the server
/// forwards whatever it receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Setters)]
#[serde(rename_all = "camelCase")]
#[setters(into)]
pub struct ModelParameters {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl ModelParameters {
    pub const DEFAULT_TEMPERATURE: f64 = 0.7;
    pub const DEFAULT_MAX_TOKENS: u32 = 1000;
    pub const DEFAULT_TOP_P: f64 = 1.0;
}

/// A possibly partial parameter set as sent by a client. Absent (or `null`)
/// fields are filled from the provider defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Setters)]
#[serde(rename_all = "camelCase")]
#[setters(strip_option, into)]
pub struct ParameterOverrides {
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f64>,
    pub frequency_penalty: Option<f64>,
    pub presence_penalty: Option<f64>,
}

impl ParameterOverrides {
    pub fn resolve(self, provider: Provider) -> ModelParameters {
        let defaults = provider.default_parameters();
        ModelParameters {
            model: self
                .model
                .filter(|model| !model.trim().is_empty())
                .unwrap_or(defaults.model),
            temperature: self.temperature.unwrap_or(defaults.temperature),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            top_p: self.top_p.unwrap_or(defaults.top_p),
            frequency_penalty: self.frequency_penalty.unwrap_or(defaults.frequency_penalty),
            presence_penalty: self.presence_penalty.unwrap_or(defaults.presence_penalty),
        }
    }
}
