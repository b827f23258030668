use parley_domain::ModelParameters;
use serde::Serialize;

/// Body of `POST /chat/completions`.
#[derive(Debug, Serialize)]
pub struct Request {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
    frequency_penalty: f64,
    presence_penalty: f64,
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
            messages: vec![Message { role: Role::User, content: message.into() }],
            temperature: parameters.temperature,
            max_tokens: parameters.max_tokens,
            top_p: parameters.top_p,
            frequency_penalty: parameters.frequency_penalty,
            presence_penalty: parameters.presence_penalty,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}
