use crate::{ModelParameters, UsageRecord};

/// Text and accounting returned by a provider for one prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// Generated text, empty when the provider returned none.
    pub text: String,
    /// Model id as reported by the provider.
    pub model: String,
    pub usage: Option<UsageRecord>,
}

#[async_trait::async_trait]
pub trait ProviderService: Send + Sync + 'static {
    /// Sends a single user message and waits for the full completion.
    async fn complete(
        &self,
        message: &str,
        parameters: &ModelParameters,
    ) -> anyhow::Result<Completion>;
}
