// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use shnarf_kernel::engine::{BlobCommitter, SnarkHasher};
use shnarf_kernel::{NextBlobRequest, ShnarfRequest, ShnarfResponse, ShnarfResult};

use crate::api::{ChainHead, HealthResponse, VerificationReport, VerifyRequest};
use crate::engine::Engine;
use crate::errors::EngineError;

pub type SharedEngine<C, H> = Arc<Engine<C, H>>;

use axum::extract::Request as AxumRequest;
use axum::http::header::AUTHORIZATION;
use axum::middleware::{from_fn_with_state, Next};
use axum::response::Response;

async fn auth_guard(
    State(token): State<Arc<String>>,
    req: AxumRequest,
    next: Next,
) -> Result<Response, StatusCode> {
    let provided = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|val| val.to_str().ok())
        .and_then(|val| val.strip_prefix("Bearer "));

    match provided {
        Some(provided) if provided == token.as_str() => Ok(next.run(req).await),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

pub fn build_router<C, H>(state: SharedEngine<C, H>, auth_token: Option<String>) -> Router
where
    C: BlobCommitter + Send + Sync + 'static,
    H: SnarkHasher + Send + Sync + 'static,
{
    let mut app = Router::new()
        .route("/v1/shnarf/calculate", post(calculate::<C, H>))
        .route("/v1/shnarf/next", post(calculate_next::<C, H>))
        .route("/v1/shnarf/head", get(head::<C, H>))
        .route("/v1/shnarf/verify", post(verify::<C, H>))
        .with_state(state);

    if let Some(token) = auth_token {
        tracing::info!("Auth Enabled: Bearer token required");
        app = app.layer(from_fn_with_state(Arc::new(token), auth_guard));
    } else {
        tracing::warn!("Auth Disabled: No token configured");
    }

    // Liveness and metrics stay reachable without a token.
    app.route("/health", get(health))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
}

/// Failures are still a well-formed response record, sent as 422.
fn respond(result: ShnarfResult) -> (StatusCode, Json<ShnarfResponse>) {
    let status = if result.is_success() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (status, Json(result.into()))
}

async fn calculate<C, H>(
    State(state): State<SharedEngine<C, H>>,
    Json(req): Json<ShnarfRequest>,
) -> Result<(StatusCode, Json<ShnarfResponse>), EngineError>
where
    C: BlobCommitter + Send + Sync + 'static,
    H: SnarkHasher + Send + Sync + 'static,
{
    let result = run_blocking(move || Ok(state.calculate(&req))).await?;
    Ok(respond(result))
}

async fn calculate_next<C, H>(
    State(state): State<SharedEngine<C, H>>,
    Json(req): Json<NextBlobRequest>,
) -> Result<(StatusCode, Json<ShnarfResponse>), EngineError>
where
    C: BlobCommitter + Send + Sync + 'static,
    H: SnarkHasher + Send + Sync + 'static,
{
    let result = run_blocking(move || state.calculate_next(&req)).await?;
    Ok(respond(result))
}

async fn head<C, H>(State(state): State<SharedEngine<C, H>>) -> Result<Json<ChainHead>, EngineError>
where
    C: BlobCommitter + Send + Sync + 'static,
    H: SnarkHasher + Send + Sync + 'static,
{
    Ok(Json(state.head()?))
}

async fn verify<C, H>(
    State(state): State<SharedEngine<C, H>>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<VerificationReport>, EngineError>
where
    C: BlobCommitter + Send + Sync + 'static,
    H: SnarkHasher + Send + Sync + 'static,
{
    let report = run_blocking(move || state.verify(&req.request, &req.response)).await?;
    Ok(Json(report))
}

/// KZG work runs on the blocking pool.
async fn run_blocking<T, F>(f: F) -> Result<T, EngineError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, EngineError> + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        tracing::error!("Blocking task failed: {}", e);
        EngineError::Internal
    })?
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn metrics_handler() -> String {
    crate::telemetry::get_metrics()
}
