use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{estimate_cost, normalize, Provider, UsageRecord};

/// Timing, token and cost summary of a single generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    /// Wall-clock duration of the upstream call in milliseconds.
    pub response_time: i64,
    pub token_count: u64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub estimated_cost: f64,
    pub model: String,
    /// Display label of the provider, e.g. `OpenAI`.
    pub provider: String,
}

/// The result of one successful generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AIResponse {
    pub response: String,
    pub metadata: ResponseMetadata,
}

impl AIResponse {
    pub fn new(response: impl Into<String>, metadata: ResponseMetadata) -> Self {
        Self { response: response.into(), metadata }
    }
}

/// Builds the metadata of a call that started at `start` and returned at
/// `end`. The duration is not clamped, `end` before `start` yields a negative
/// response time.
pub fn build_metadata(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    usage: Option<&UsageRecord>,
    model: &str,
    provider: Provider,
) -> ResponseMetadata {
    build_priced_metadata(start, end, usage, model, model, provider)
}

/// Like [`build_metadata`], but prices the call at `priced_model` while
/// reporting `model`. Providers answer with dated snapshot ids that the price
/// table doesn't list, so the cost follows the requested id.
pub fn build_priced_metadata(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    usage: Option<&UsageRecord>,
    model: &str,
    priced_model: &str,
    provider: Provider,
) -> ResponseMetadata {
    let usage = normalize(usage);

    ResponseMetadata {
        response_time: (end - start).num_milliseconds(),
        token_count: usage.total_tokens,
        input_tokens: usage.input_tokens,
        output_tokens: usage.output_tokens,
        estimated_cost: estimate_cost(
            provider,
            priced_model,
            usage.input_tokens,
            usage.output_tokens,
        ),
        model: model.to_string(),
        provider: provider.label().to_string(),
    }
}
