mod api;
mod error;
mod request;
mod service;

pub use api::API;
pub use error::*;
pub use request::ChatRequest;
pub use service::ChatService;
