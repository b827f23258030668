use derive_builder::Builder;
use parley_domain::{Completion, ModelParameters, Provider, ProviderService};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Url};
use tracing::debug;

use super::request::Request;
use super::response::Response;
use crate::error::{Error, Result};
use crate::utils::{format_http_context, join_url};

#[derive(Clone, Builder)]
pub struct OpenAI {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl OpenAI {
    pub fn builder() -> OpenAIBuilder {
        OpenAIBuilder::default()
    }

    fn url(&self, path: &str) -> Result<Url> {
        join_url(&self.base_url, path)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))?,
        );
        Ok(headers)
    }

    async fn inner_complete(
        &self,
        message: &str,
        parameters: &ModelParameters,
    ) -> Result<Completion> {
        let request = Request::new(message, parameters);
        let url = self.url("chat/completions")?;
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
            return Err(Error::upstream(Provider::OpenAI, status.as_u16(), &body));
        }

        let response: Response = response.json().await?;
        debug!(model = %response.model, "Received completion from Upstream");
        Ok(response.into())
    }
}

#[async_trait::async_trait]
impl ProviderService for OpenAI {
    async fn complete(
        &self,
        message: &str,
        parameters: &ModelParameters,
    ) -> anyhow::Result<Completion> {
        Ok(self.inner_complete(message, parameters).await?)
    }
}

#[cfg(test)]
mod tests {
    use parley_domain::{OpenAIUsage, UsageRecord};
    use pretty_assertions::assert_eq;

    use super::*;

    fn openai(base_url: &str) -> OpenAI {
        OpenAI::builder()
            .client(Client::new())
            .api_key("sk-test".to_string())
            .base_url(Url::parse(base_url).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_url_for_completions() {
        let openai = openai("https://api.openai.com/v1/");
        assert_eq!(
            openai.url("/chat/completions").unwrap().as_str(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_complete() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "model": "gpt-4o",
                "messages": [{"role": "user", "content": "Hi"}],
                "max_tokens": 1000
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"model":"gpt-4o-2024-08-06","choices":[{"index":0,"message":{"role":"assistant","content":"Hello!"}}],"usage":{"prompt_tokens":8,"completion_tokens":2,"total_tokens":10}}"#,
            )
            .create_async()
            .await;

        let fixture = openai(&format!("{}/v1/", server.url()));
        let actual = fixture
            .complete("Hi", &Provider::OpenAI.default_parameters())
            .await
            .unwrap();

        mock.assert_async().await;
        let expected = Completion {
            text: "Hello!".to_string(),
            model: "gpt-4o-2024-08-06".to_string(),
            usage: Some(UsageRecord::OpenAI(OpenAIUsage {
                prompt_tokens: Some(8),
                completion_tokens: Some(2),
                total_tokens: Some(10),
            })),
        };
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_complete_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/chat/completions")
            .with_status(429)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"message":"Rate limit reached","type":"requests"}}"#)
            .create_async()
            .await;

        let fixture = openai(&format!("{}/v1/", server.url()));
        let actual = fixture
            .complete("Hi", &Provider::OpenAI.default_parameters())
            .await
            .unwrap_err();

        let actual = actual.downcast_ref::<Error>().unwrap();
        assert_eq!(actual.status(), Some(429));
        assert_eq!(actual.upstream_message(), Some("Rate limit reached"));
    }
}
