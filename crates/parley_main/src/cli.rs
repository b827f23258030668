use std::net::IpAddr;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use parley_domain::{ModelParameters, ParameterOverrides, Provider};

use crate::log::LogLevel;

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Log level, overrides PARLEY_LOG_LEVEL and RUST_LOG.
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the chat endpoints over HTTP.
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,

        #[arg(long, default_value_t = 3000)]
        port: u16,
    },

    /// Send one prompt to two panels side by side.
    Compare(CompareArgs),

    /// List the selectable models with their prices.
    Models,
}

#[derive(Args)]
pub struct CompareArgs {
    pub prompt: String,

    /// Left panel as `provider[:model]`.
    #[arg(long, default_value = "openai")]
    pub a: PanelSpec,

    /// Right panel as `provider[:model]`.
    #[arg(long, default_value = "anthropic")]
    pub b: PanelSpec,

    #[arg(long)]
    pub a_temperature: Option<f64>,
    #[arg(long)]
    pub b_temperature: Option<f64>,
    #[arg(long)]
    pub a_max_tokens: Option<u32>,
    #[arg(long)]
    pub b_max_tokens: Option<u32>,
    #[arg(long)]
    pub a_top_p: Option<f64>,
    #[arg(long)]
    pub b_top_p: Option<f64>,
}

impl CompareArgs {
    pub fn panel_a(&self) -> (Provider, ModelParameters) {
        self.a
            .resolve(self.a_temperature, self.a_max_tokens, self.a_top_p)
    }

    pub fn panel_b(&self) -> (Provider, ModelParameters) {
        self.b
            .resolve(self.b_temperature, self.b_max_tokens, self.b_top_p)
    }
}

/// A provider and an optional model id, written `provider[:model]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSpec {
    pub provider: Provider,
    pub model: Option<String>,
}

impl PanelSpec {
    fn resolve(
        &self,
        temperature: Option<f64>,
        max_tokens: Option<u32>,
        top_p: Option<f64>,
    ) -> (Provider, ModelParameters) {
        let overrides = ParameterOverrides {
            model: self.model.clone(),
            temperature,
            max_tokens,
            top_p,
            ..Default::default()
        };
        (self.provider, overrides.resolve(self.provider))
    }
}

impl FromStr for PanelSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (provider, model) = match s.split_once(':') {
            Some((provider, model)) => (provider, Some(model.trim().to_string())),
            None => (s, None),
        };
        let provider = Provider::from_str(provider.trim())
            .map_err(|_| format!("Unknown provider '{provider}', expected openai or anthropic"))?;
        Ok(Self { provider, model: model.filter(|model| !model.is_empty()) })
    }
}
