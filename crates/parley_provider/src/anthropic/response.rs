use parley_domain::{Completion, Provider, UsageRecord};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub usage: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    // tool_use, thinking and whatever gets added later
    #[serde(other)]
    Other,
}

impl From<Response> for Completion {
    fn from(response: Response) -> Self {
        // Only a leading text block counts as the answer.
        let text = match response.content.into_iter().next() {
            Some(ContentBlock::Text { text }) => text,
            _ => String::new(),
        };

        Completion {
            text,
            model: response.model,
            usage: response
                .usage
                .map(|usage| UsageRecord::from_value(Provider::Anthropic, usage)),
        }
    }
}
