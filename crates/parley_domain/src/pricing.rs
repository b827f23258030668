//! Per-model price registry and cost estimation.
//!
//! Prices are in USD per 1000 tokens.

use std::collections::HashMap;

use lazy_static::lazy_static;
use crate::Provider;

/// Decimal places kept in an estimated cost.
pub const COST_PRECISION: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceEntry {
    /// Cost per 1000 input tokens.
    pub input: f64,
    /// Cost per 1000 output tokens.
    pub output: f64,
}

impl PriceEntry {
    const fn new(input: f64, output: f64) -> Self {
        Self { input, output }
    }

    /// Unrounded cost of a call.
    pub fn cost(&self, input_tokens: u64, output_tokens: u64) -> f64 {
        (input_tokens as f64 / 1000.0) * self.input + (output_tokens as f64 / 1000.0) * self.output
    }
}

// OpenAI
const GPT_4O: PriceEntry = PriceEntry::new(0.0025, 0.01);
const GPT_4O_MINI: PriceEntry = PriceEntry::new(0.00015, 0.0006);
const GPT_4_TURBO: PriceEntry = PriceEntry::new(0.01, 0.03);
const GPT_4: PriceEntry = PriceEntry::new(0.03, 0.06);
const GPT_35_TURBO: PriceEntry = PriceEntry::new(0.0015, 0.002);

// Anthropic
const CLAUDE_SONNET_4: PriceEntry = PriceEntry::new(0.003, 0.015);
const CLAUDE_35_SONNET: PriceEntry = PriceEntry::new(0.003, 0.015);
const CLAUDE_35_HAIKU: PriceEntry = PriceEntry::new(0.00025, 0.00125);
const CLAUDE_3_OPUS: PriceEntry = PriceEntry::new(0.015, 0.075);
// Deprecated, kept so older selections still price correctly
const CLAUDE_3_SONNET: PriceEntry = PriceEntry::new(0.003, 0.015);
const CLAUDE_3_HAIKU: PriceEntry = PriceEntry::new(0.00025, 0.00125);

lazy_static! {
    static ref PRICE_TABLE: HashMap<(Provider, &'static str), PriceEntry> = {
        let mut map = HashMap::new();

        map.insert((Provider::OpenAI, "gpt-4o"), GPT_4O);
        map.insert((Provider::OpenAI, "gpt-4o-mini"), GPT_4O_MINI);
        map.insert((Provider::OpenAI, "gpt-4-turbo"), GPT_4_TURBO);
        map.insert((Provider::OpenAI, "gpt-4"), GPT_4);
        map.insert((Provider::OpenAI, "gpt-3.5-turbo"), GPT_35_TURBO);

        map.insert((Provider::Anthropic, "claude-sonnet-4-20250514"), CLAUDE_SONNET_4);
        map.insert((Provider::Anthropic, "claude-3-5-sonnet-20241022"), CLAUDE_35_SONNET);
        map.insert((Provider::Anthropic, "claude-3-5-haiku-20241022"), CLAUDE_35_HAIKU);
        map.insert((Provider::Anthropic, "claude-3-opus-20240229"), CLAUDE_3_OPUS);
        map.insert((Provider::Anthropic, "claude-3-sonnet-20240229"), CLAUDE_3_SONNET);
        map.insert((Provider::Anthropic, "claude-3-haiku-20240307"), CLAUDE_3_HAIKU);

        map
    };
}

/// Exact-match lookup of a model's price.
pub fn get_price(provider: Provider, model: &str) -> Option<PriceEntry> {
    PRICE_TABLE.get(&(provider, model)).copied()
}

/// Price of the provider's default model.
pub fn default_price(provider: Provider) -> PriceEntry {
    match provider {
        Provider::OpenAI => GPT_4O,
        Provider::Anthropic => CLAUDE_SONNET_4,
    }
}

/// Looks up a model's price, falling back to the provider's default model.
pub fn get_price_or_default(provider: Provider, model: &str) -> PriceEntry {
    get_price(provider, model).unwrap_or_else(|| default_price(provider))
}

/// Estimated cost of a call in USD, rounded to [`COST_PRECISION`] decimals.
pub fn estimate_cost(provider: Provider, model: &str, input_tokens: u64, output_tokens: u64) -> f64 {
    let price = get_price_or_default(provider, model);
    round_cost(price.cost(input_tokens, output_tokens))
}

/// Rounds half away from zero to [`COST_PRECISION`] decimals.
pub fn round_cost(cost: f64) -> f64 {
    let factor = 10f64.powi(COST_PRECISION);
    (cost * factor).round() / factor
}
