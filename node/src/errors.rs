// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use shnarf_kernel::error::ShnarfError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Shnarf error: {0}")]
    Shnarf(#[from] ShnarfError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            EngineError::Shnarf(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            EngineError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            EngineError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
