use parley_domain::ModelParameters;
use serde::Serialize;

/// Body of `POST /messages`. Anthropic has no frequency or presence penalty,
/// those parameters are not forwarded.
#[derive(Debug, Serialize)]
pub struct Request {
    model: String,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct Message {
    role: Role,
    content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

impl Request {
    pub fn new(message: impl Into<String>, parameters: &ModelParameters) -> Self {
        Self {
            model: parameters.model.clone(),
            max_tokens: parameters.max_tokens,
            temperature: parameters.temperature,
            top_p: parameters.top_p,
            messages: vec![Message { role: Role::User, content: message.into() }],
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}
