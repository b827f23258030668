mod anthropic;
mod client;
mod error;
mod openai;
mod utils;

pub use anthropic::Anthropic;
pub use client::Client;
pub use error::*;
pub use openai::OpenAI;
