use std::net::SocketAddr;

use axum::extract::State;
use axum::{routing::get, routing::post, Json, Router};
use business_case::{BusinessCaseRequest, BusinessCaseResponse};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::error::ServiceError;
use crate::generate::{generate, GenerateContext};
use crate::llm_client::{LlmClient, MockLlm};

pub fn app(ctx: GenerateContext) -> Router {
    Router::new()
        .route("/v1/health", get(health))
        .route("/v1/version", get(version))
        .route("/generate", post(generate_handler))
        .with_state(ctx)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok", "name": "business-case-service", "version": env!("CARGO_PKG_VERSION")}))
}

async fn version(State(ctx): State<GenerateContext>) -> Json<serde_json::Value> {
    Json(json!({
        "name": "business-case-service",
        "version": env!("CARGO_PKG_VERSION"),
        "model": ctx.llm.model(),
    }))
}

async fn generate_handler(
    State(ctx): State<GenerateContext>,
    Json(req): Json<BusinessCaseRequest>,
) -> Result<Json<BusinessCaseResponse>, ServiceError> {
    let request_id = Uuid::new_v4().to_string();
    let span = info_span!("generate", %request_id);
    async move {
        match generate(&req, &ctx).await {
            Ok(resp) => {
                info!(narrative_chars = resp.generated_output.len(), "business case generated");
                Ok(Json(resp))
            }
            Err(e) => {
                error!(error = %e, "generation failed");
                Err(e)
            }
        }
    }
    .instrument(span)
    .await
}

pub async fn serve(addr: SocketAddr, ctx: GenerateContext) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(ctx)).await
}

pub async fn spawn_test_server(ctx: GenerateContext) -> (SocketAddr, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app(ctx)).await;
    });
    (addr, handle)
}

pub async fn spawn_test_server_with_mock(responses: Vec<String>) -> (SocketAddr, JoinHandle<()>) {
    let ctx = GenerateContext::new(LlmClient::Mock(MockLlm::new(responses)));
    spawn_test_server(ctx).await
}
