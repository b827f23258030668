use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::routing::post;
use axum::Router;
use parley_domain::{AIResponse, Provider};
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::{ChatRequest, ChatService, Error, Result};

/// HTTP front of the [`ChatService`], one endpoint per provider.
pub struct API {
    service: Arc<ChatService>,
}

impl API {
    pub fn new(service: ChatService) -> Self {
        Self { service: Arc::new(service) }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/chat/openai", post(openai_handler))
            .route("/api/chat/anthropic", post(anthropic_handler))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([axum::http::Method::POST, axum::http::Method::OPTIONS])
                    .allow_headers([axum::http::header::CONTENT_TYPE]),
            )
            .with_state(self.service.clone())
    }

    /// Serves on an already bound listener until the process stops.
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        let app = self.router();
        axum::serve(listener, app).await
    }

    pub async fn launch(self, addr: SocketAddr) -> anyhow::Result<()> {
        let listener = TcpListener::bind(addr).await?;
        info!("Server running on http://{}", listener.local_addr()?);
        self.serve(listener).await?;
        Ok(())
    }
}

async fn openai_handler(
    State(service): State<Arc<ChatService>>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<AIResponse>> {
    chat(&service, Provider::OpenAI, body).await
}

async fn anthropic_handler(
    State(service): State<Arc<ChatService>>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<AIResponse>> {
    chat(&service, Provider::Anthropic, body).await
}

async fn chat(
    service: &ChatService,
    provider: Provider,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<AIResponse>> {
    let Json(body) = body
        .map_err(|rejection| Error::validation(format!("Invalid JSON body: {}", rejection.body_text())))?;
    let request = ChatRequest::parse(provider, body)?;
    let response = service.generate(provider, request).await?;
    Ok(Json(response))
}
