use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context as _;
use chrono::Utc;
use parley_domain::{build_priced_metadata, AIResponse, Environment, Provider, ProviderService};
use parley_provider::Client;
use strum::IntoEnumIterator;
use tracing::{debug, error};

use crate::{ChatRequest, Error, Result};

/// Runs generation requests against whichever providers are configured.
#[derive(Clone, Default)]
pub struct ChatService {
    providers: HashMap<Provider, Arc<dyn ProviderService>>,
}

impl ChatService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the service answering for `provider`.
    pub fn provider(mut self, provider: Provider, service: impl ProviderService) -> Self {
        self.providers.insert(provider, Arc::new(service));
        self
    }

    /// Creates a client for every provider with an API key. Providers
    /// without one stay unregistered and answer with a configuration error.
    pub fn from_env(env: &Environment) -> anyhow::Result<Self> {
        let mut service = Self::new();
        for provider in Provider::iter() {
            let client = Client::new(provider, env.endpoint(provider), env.timeout)
                .with_context(|| format!("Failed to create {} client", provider.label()))?;
            match client {
                Some(client) => service = service.provider(provider, client),
                None => debug!(provider = %provider, "Provider not configured"),
            }
        }
        Ok(service)
    }

    pub fn is_configured(&self, provider: Provider) -> bool {
        self.providers.contains_key(&provider)
    }

    /// Sends the request upstream, times it and summarises the result.
    pub async fn generate(&self, provider: Provider, request: ChatRequest) -> Result<AIResponse> {
        let service = self
            .providers
            .get(&provider)
            .ok_or(Error::MissingCredentials(provider))?;

        let model = request.parameters.model.as_str();
        let start = Utc::now();
        let completion = service
            .complete(&request.message, &request.parameters)
            .await
            .map_err(|source| {
                let status = source
                    .downcast_ref::<parley_provider::Error>()
                    .and_then(parley_provider::Error::status);
                error!(
                    provider = %provider,
                    model = %model,
                    status = ?status,
                    error = ?source,
                    "Upstream call failed"
                );
                Error::Upstream { provider, source }
            })?;
        let end = Utc::now();

        debug!(
            provider = %provider,
            requested = %model,
            reported = %completion.model,
            "Completion received"
        );

        let reported = match completion.model.trim() {
            "" => model,
            reported => reported,
        };
        let metadata =
            build_priced_metadata(start, end, completion.usage.as_ref(), reported, model, provider);
        Ok(AIResponse::new(completion.text, metadata))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use parley_domain::{
        AnthropicUsage, Completion, ModelParameters, OpenAIUsage, UsageRecord,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    /// Answers every prompt with a fixed completion or error.
    pub(crate) struct Canned(pub(crate) std::result::Result<Completion, String>);

    #[async_trait::async_trait]
    impl ProviderService for Canned {
        async fn complete(
            &self,
            _message: &str,
            _parameters: &ModelParameters,
        ) -> anyhow::Result<Completion> {
            self.0.clone().map_err(|message| anyhow::anyhow!(message))
        }
    }

    fn openai_completion() -> Completion {
        Completion {
            text: "Four.".to_string(),
            model: "gpt-4o-2024-08-06".to_string(),
            usage: Some(UsageRecord::OpenAI(OpenAIUsage {
                prompt_tokens: Some(1500),
                completion_tokens: Some(500),
                total_tokens: None,
            })),
        }
    }

    fn request(provider: Provider) -> ChatRequest {
        ChatRequest::new("what's 2 + 2 ?", provider.default_parameters())
    }

    #[tokio::test]
    async fn test_generate_builds_metadata() {
        let fixture = ChatService::new().provider(Provider::OpenAI, Canned(Ok(openai_completion())));
        let actual = fixture.generate(Provider::OpenAI, request(Provider::OpenAI)).await.unwrap();

        assert_eq!(actual.response, "Four.");
        assert!(actual.metadata.response_time >= 0);
        assert_eq!(actual.metadata.input_tokens, 1500);
        assert_eq!(actual.metadata.output_tokens, 500);
        assert_eq!(actual.metadata.token_count, 2000);
        assert_eq!(actual.metadata.estimated_cost, 0.0088);
        assert_eq!(actual.metadata.model, "gpt-4o-2024-08-06");
        assert_eq!(actual.metadata.provider, "OpenAI");
    }

    #[tokio::test]
    async fn test_generate_unconfigured_provider() {
        let fixture = ChatService::new().provider(Provider::OpenAI, Canned(Ok(openai_completion())));
        let actual = fixture
            .generate(Provider::Anthropic, request(Provider::Anthropic))
            .await
            .unwrap_err();
        assert!(matches!(actual, Error::MissingCredentials(Provider::Anthropic)));
    }

    #[tokio::test]
    async fn test_generate_upstream_failure() {
        let fixture = ChatService::new()
            .provider(Provider::Anthropic, Canned(Err("socket hang up".to_string())));
        let actual = fixture
            .generate(Provider::Anthropic, request(Provider::Anthropic))
            .await
            .unwrap_err();
        assert!(matches!(actual, Error::Upstream { provider: Provider::Anthropic, .. }));
        assert_eq!(actual.public_message(), "Failed to generate response");
    }

    #[tokio::test]
    async fn test_generate_unknown_model_priced_as_default() {
        let completion = Completion {
            text: String::new(),
            model: "claude-next".to_string(),
            usage: Some(UsageRecord::Anthropic(AnthropicUsage {
                input_tokens: Some(1000),
                output_tokens: Some(1000),
                total_tokens: None,
            })),
        };
        let fixture = ChatService::new().provider(Provider::Anthropic, Canned(Ok(completion)));
        let request = ChatRequest::new(
            "Hi",
            Provider::Anthropic.default_parameters().model("claude-next"),
        );
        let actual = fixture.generate(Provider::Anthropic, request).await.unwrap();

        // 0.003 + 0.015 at the claude-sonnet-4 price
        assert_eq!(actual.metadata.estimated_cost, 0.018);
        assert_eq!(actual.metadata.model, "claude-next");
        assert_eq!(actual.response, "");
    }

    #[tokio::test]
    async fn test_generate_reports_provider_model_priced_as_requested() {
        let completion = Completion {
            model: "gpt-4o-mini-2024-07-18".to_string(),
            ..openai_completion()
        };
        let fixture = ChatService::new().provider(Provider::OpenAI, Canned(Ok(completion)));
        let request = ChatRequest::new(
            "Hi",
            Provider::OpenAI.default_parameters().model("gpt-4o-mini"),
        );
        let actual = fixture.generate(Provider::OpenAI, request).await.unwrap();

        assert_eq!(actual.metadata.model, "gpt-4o-mini-2024-07-18");
        // 1.5 * 0.00015 + 0.5 * 0.0006 at the gpt-4o-mini price
        assert_eq!(actual.metadata.estimated_cost, 0.0005);
    }

    #[tokio::test]
    async fn test_generate_blank_reported_model_falls_back_to_requested() {
        let completion = Completion { model: String::new(), ..openai_completion() };
        let fixture = ChatService::new().provider(Provider::OpenAI, Canned(Ok(completion)));
        let actual = fixture
            .generate(Provider::OpenAI, request(Provider::OpenAI))
            .await
            .unwrap();
        assert_eq!(actual.metadata.model, "gpt-4o");
    }

    #[test]
    fn test_is_configured() {
        let fixture = ChatService::new().provider(Provider::OpenAI, Canned(Ok(openai_completion())));
        assert!(fixture.is_configured(Provider::OpenAI));
        assert!(!fixture.is_configured(Provider::Anthropic));
    }
}
