use parley_domain::{Completion, Provider, UsageRecord};
use serde::Deserialize;

/// Non-streaming chat completion response. Only the fields the comparison
/// needs are read.
#[derive(Debug, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl From<Response> for Completion {
    fn from(response: Response) -> Self {
        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default();

        Completion {
            text,
            model: response.model,
            usage: response
                .usage
                .map(|usage| UsageRecord::from_value(Provider::OpenAI, usage)),
        }
    }
}
