//! HTTP route handlers.

use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::query::{QueryRequest, RequestError, query, top_n};
use crate::store::TrainDto;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trains", get(find_trains))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        addr = %listener.local_addr()?,
        records = state.store.len(),
        "train finder listening"
    );
    axum::serve(listener, create_router(state)).await
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Best trains between two stations.
async fn find_trains(
    State(state): State<AppState>,
    Query(req): Query<TrainsRequest>,
) -> Result<Json<Vec<TrainDto>>, AppError> {
    let request = QueryRequest::parse(&req.departure, &req.arrival, &req.criteria)?;

    let results = query(&state.store, &request);
    let limit = state.config.limit(req.limit);

    let trains = top_n(&results, limit)
        .iter()
        .map(|record| TrainDto::from(*record))
        .collect();

    Ok(Json(trains))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<RequestError> for AppError {
    fn from(e: RequestError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
