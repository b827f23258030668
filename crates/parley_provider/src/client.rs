use std::time::Duration;

use anyhow::{Context as _, Result};
use parley_domain::{Completion, ModelParameters, Provider, ProviderEndpoint, ProviderService};

use crate::anthropic::Anthropic;
use crate::openai::OpenAI;

pub enum Client {
    OpenAI(OpenAI),
    Anthropic(Anthropic),
}

impl Client {
    /// Creates a client for `provider`. Returns `None` when the endpoint has
    /// no API key.
    pub fn new(
        provider: Provider,
        endpoint: &ProviderEndpoint,
        timeout: Duration,
    ) -> Result<Option<Self>> {
        let Some(key) = endpoint.key.clone() else {
            return Ok(None);
        };
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let url = endpoint.url.clone();

        let client = match provider {
            Provider::OpenAI => Client::OpenAI(
                OpenAI::builder()
                    .client(client)
                    .api_key(key)
                    .base_url(url.clone())
                    .build()
                    .with_context(|| format!("Failed to initialize OpenAI client with URL: {url}"))?,
            ),
            Provider::Anthropic => Client::Anthropic(
                Anthropic::builder()
                    .client(client)
                    .api_key(key)
                    .base_url(url.clone())
                    .anthropic_version(Anthropic::API_VERSION.to_string())
                    .build()
                    .with_context(|| {
                        format!("Failed to initialize Anthropic client with URL: {url}")
                    })?,
            ),
        };

        Ok(Some(client))
    }
}

#[async_trait::async_trait]
impl ProviderService for Client {
    async fn complete(
        &self,
        message: &str,
        parameters: &ModelParameters,
    ) -> anyhow::Result<Completion> {
        match self {
            Client::OpenAI(provider) => provider.complete(message, parameters).await,
            Client::Anthropic(provider) => provider.complete(message, parameters).await,
        }
    }
}
