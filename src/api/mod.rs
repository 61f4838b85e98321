//! HTTP lookup API
//!
//! Exposes `GET /company` over the document store. Query-string parameters
//! map one-to-one onto [`LookupQuery`] fields.

use crate::config::ApiConfig;
use crate::lookup::{lookup, CompanyMatch, LookupError, LookupQuery};
use crate::storage::Store;
use crate::FinderError;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;

/// State shared with the lookup handler
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<dyn Store>,
}

/// Builds the axum router for the lookup API
pub fn router(store: Arc<dyn Store>) -> Router {
    Router::new()
        .route("/company", get(company_handler))
        .with_state(ApiState { store })
}

/// Binds the configured address and serves the API until the process exits
pub async fn serve(config: &ApiConfig, store: Arc<dyn Store>) -> Result<(), FinderError> {
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Lookup API listening on {}", listener.local_addr()?);

    axum::serve(listener, router(store)).await?;
    Ok(())
}

async fn company_handler(
    State(state): State<ApiState>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<CompanyMatch>, ApiError> {
    let store = state.store.clone();
    let found = tokio::task::spawn_blocking(move || lookup(store.as_ref(), &query))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(found))
}

/// A lookup failure rendered as an HTTP response
#[derive(Debug)]
pub enum ApiError {
    Lookup(LookupError),
    Internal(String),
}

impl From<LookupError> for ApiError {
    fn from(e: LookupError) -> Self {
        Self::Lookup(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Lookup(LookupError::InvalidInput {
                field,
                message,
                input,
            }) => {
                let body = json!({
                    "detail": [{
                        "type": "value_error",
                        "loc": ["query", field],
                        "msg": message,
                        "input": input,
                        "ctx": { "error": message },
                    }]
                });
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ApiError::Lookup(LookupError::NotFound) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Company not found" })),
            )
                .into_response(),
            ApiError::Lookup(LookupError::Storage(e)) => {
                tracing::error!("Lookup failed: {}", e);
                internal_error()
            }
            ApiError::Internal(message) => {
                tracing::error!("Lookup task failed: {}", message);
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": "Internal Server Error" })),
    )
        .into_response()
}
