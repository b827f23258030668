use derive_builder::Builder;
use parley_domain::{Completion, ModelParameters, Provider, ProviderService};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use tracing::debug;

use super::request::Request;
use super::response::Response;
use crate::error::{Error, Result};
use crate::utils::{format_http_context, join_url};

#[derive(Clone, Builder)]
pub struct Anthropic {
    client: Client,
    api_key: String,
    base_url: Url,
    anthropic_version: String,
}

impl Anthropic {
    pub const API_VERSION: &'static str = "2023-06-01";

    pub fn builder() -> AnthropicBuilder {
        AnthropicBuilder::default()
    }

    fn url(&self, path: &str) -> Result<Url> {
        join_url(&self.base_url, path)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        // note: anthropic api requires the api key to be sent in `x-api-key` header.
        headers.insert("x-api-key", HeaderValue::from_str(&self.api_key)?);

        // note: `anthropic-version` header is required by the API.
        headers.insert(
            "anthropic-version",
            HeaderValue::from_str(&self.anthropic_version)?,
        );
        Ok(headers)
    }

    async fn inner_complete(
        &self,
        message: &str,
        parameters: &ModelParameters,
    ) -> Result<Completion> {
        let request = Request::new(message, parameters);
        let url = self.url("messages")?;
        debug!(url = %url, model = %request.model(), "Connecting Upstream");

        let response = self
            .client
            .post(url.clone())
            .headers(self.headers()?)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(
                context = %format_http_context(Some(status), "POST", &url),
                body = %body,
                "Invalid status code"
            );
            return Err(Error::upstream(Provider::Anthropic, status.as_u16(), &body));
        }

        let response: Response = response.json().await?;
        debug!(model = %response.model, "Received completion from Upstream");
        Ok(response.into())
    }
}

#[async_trait::async_trait]
impl ProviderService for Anthropic {
    async fn complete(
        &self,
        message: &str,
        parameters: &ModelParameters,
    ) -> anyhow::Result<Completion> {
        Ok(self.inner_complete(message, parameters).await?)
    }
}
