use serde::Deserialize;

use crate::Provider;

/// Usage block of an OpenAI chat completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OpenAIUsage {
    pub prompt_tokens: Option<u64>,
    pub completion_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
}

/// Usage block of an Anthropic message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnthropicUsage {
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
}

/// Token accounting exactly as reported by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageRecord {
    OpenAI(OpenAIUsage),
    Anthropic(AnthropicUsage),
}

/// Provider independent token counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizedUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
}

impl UsageRecord {
    /// Reads a raw usage object in the shape of the given provider. Anything
    /// that doesn't match the shape is treated as a record without counts.
    pub fn from_value(provider: Provider, value: serde_json::Value) -> Self {
        match provider {
            Provider::OpenAI => {
                UsageRecord::OpenAI(serde_json::from_value(value).unwrap_or_default())
            }
            Provider::Anthropic => {
                UsageRecord::Anthropic(serde_json::from_value(value).unwrap_or_default())
            }
        }
    }

    pub fn provider(&self) -> Provider {
        match self {
            UsageRecord::OpenAI(_) => Provider::OpenAI,
            UsageRecord::Anthropic(_) => Provider::Anthropic,
        }
    }

    pub fn normalize(&self) -> NormalizedUsage {
        let (input, output, total) = match self {
            UsageRecord::OpenAI(usage) => {
                (usage.prompt_tokens, usage.completion_tokens, usage.total_tokens)
            }
            UsageRecord::Anthropic(usage) => {
                (usage.input_tokens, usage.output_tokens, usage.total_tokens)
            }
        };
        NormalizedUsage::new(input.unwrap_or(0), output.unwrap_or(0), total)
    }
}

impl NormalizedUsage {
    /// Derives the total from input and output unless the provider reported
    /// one.
    pub fn new(input_tokens: u64, output_tokens: u64, total_tokens: Option<u64>) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: total_tokens.unwrap_or(input_tokens + output_tokens),
        }
    }
}

/// Normalizes an optional usage record, absent usage counts as zero.
pub fn normalize(usage: Option<&UsageRecord>) -> NormalizedUsage {
    usage.map(UsageRecord::normalize).unwrap_or_default()
}
