use strum_macros::{Display, EnumIter, EnumString};

use crate::ModelParameters;

/// One of the two upstream model vendors a panel can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Provider {
    OpenAI,
    Anthropic,
}

/// An entry of the selectable-model list shown for a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelOption {
    pub id: &'static str,
    pub label: &'static str,
}

impl ModelOption {
    const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

const OPENAI_MODELS: &[ModelOption] = &[
    ModelOption::new("gpt-4o", "GPT-4o (Latest)"),
    ModelOption::new("gpt-4o-mini", "GPT-4o Mini"),
    ModelOption::new("gpt-4-turbo", "GPT-4 Turbo"),
    ModelOption::new("gpt-3.5-turbo", "GPT-3.5 Turbo"),
];

const ANTHROPIC_MODELS: &[ModelOption] = &[
    ModelOption::new("claude-sonnet-4-20250514", "Claude Sonnet 4 (Latest)"),
    ModelOption::new("claude-3-5-sonnet-20241022", "Claude 3.5 Sonnet"),
    ModelOption::new("claude-3-5-haiku-20241022", "Claude 3.5 Haiku"),
    ModelOption::new("claude-3-opus-20240229", "Claude 3 Opus"),
];

impl Provider {
    /// Display-friendly name used in response metadata.
    pub fn label(&self) -> &'static str {
        match self {
            Provider::OpenAI => "OpenAI",
            Provider::Anthropic => "Anthropic",
        }
    }

    /// Environment variable holding the provider's API key.
    pub fn key_var(&self) -> &'static str {
        match self {
            Provider::OpenAI => "OPENAI_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
        }
    }

    /// Environment variable that overrides the provider's base URL.
    pub fn url_var(&self) -> &'static str {
        match self {
            Provider::OpenAI => "OPENAI_BASE_URL",
            Provider::Anthropic => "ANTHROPIC_BASE_URL",
        }
    }

    pub fn default_url(&self) -> &'static str {
        match self {
            Provider::OpenAI => "https://api.openai.com/v1/",
            Provider::Anthropic => "https://api.anthropic.com/v1/",
        }
    }

    /// Model used when a request names none, and whose price applies to
    /// models missing from the price table.
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::OpenAI => "gpt-4o",
            Provider::Anthropic => "claude-sonnet-4-20250514",
        }
    }

    pub fn default_parameters(&self) -> ModelParameters {
        ModelParameters {
            model: self.default_model().to_string(),
            temperature: ModelParameters::DEFAULT_TEMPERATURE,
            max_tokens: ModelParameters::DEFAULT_MAX_TOKENS,
            top_p: ModelParameters::DEFAULT_TOP_P,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }

    pub fn models(&self) -> &'static [ModelOption] {
        match self {
            Provider::OpenAI => OPENAI_MODELS,
            Provider::Anthropic => ANTHROPIC_MODELS,
        }
    }
}
