//! HTTP API for TrustGate
//!
//! Endpoints:
//! - POST /api/start  - Create a session
//! - POST /api/submit - Submit a behavioral report, get the verdict
//! - GET  /health     - Health check
//!
//! Both POST endpoints answer HTTP 200 even on failure; errors travel in
//! the body as `{"error": "..."}` per the frozen wire contract.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::core::lifecycle::{start_session, submit_session, SubmitError};
use crate::core::store::SessionStore;
use crate::types::SubmitRequest;

/// Wire label for the invalid-session soft error
const INVALID_SESSION: &str = "INVALID_SESSION";
/// Wire label for the catch-all soft error
const SERVER_ERROR: &str = "SERVER_ERROR";

/// App state: the one open store handle.
///
/// The mutex is held across a whole submit, so two submissions for the
/// same session cannot interleave their read and finalize.
pub struct AppState {
    pub store: Mutex<SessionStore>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions_total: i64,
}

/// Create the API router around an open store.
pub fn create_router(store: SessionStore) -> Router {
    create_router_with_state(Arc::new(AppState {
        store: Mutex::new(store),
    }))
}

/// Create the API router from pre-built state (shared with tests).
pub fn create_router_with_state(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/start", post(start))
        .route("/api/submit", post(submit))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let store = state.store.lock().await;
    let sessions_total = store.count().unwrap_or(0);
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        sessions_total,
    })
}

/// Create a new session. The request body is ignored.
async fn start(State(state): State<Arc<AppState>>) -> Json<Value> {
    let store = state.store.lock().await;
    match start_session(&store) {
        Ok(outcome) => Json(json!({
            "session_id": outcome.session_id,
            "phrase": outcome.phrase,
            "start_time": outcome.start_time,
        })),
        Err(e) => {
            error!(error = %e, "start failed");
            Json(json!({ "error": SERVER_ERROR }))
        }
    }
}

/// Submit a behavioral report for an open session.
async fn submit(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Json<Value> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection, "unreadable submit payload");
            return Json(json!({ "error": SERVER_ERROR }));
        }
    };

    let store = state.store.lock().await;
    match submit_session(&store, &request) {
        Ok(outcome) => Json(json!({
            "trust_score": outcome.trust_score,
            "status": outcome.status,
            "hash": outcome.hash,
            "timestamp": outcome.timestamp,
        })),
        Err(SubmitError::InvalidSession) => Json(json!({ "error": INVALID_SESSION })),
        Err(SubmitError::Server) => Json(json!({ "error": SERVER_ERROR })),
    }
}

/// Run the API server
pub async fn run_server(addr: &str, store: SessionStore) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr, "TrustGate API listening");
    axum::serve(listener, router).await?;
    Ok(())
}
