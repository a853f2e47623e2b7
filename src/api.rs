// 🌐 Package API - HTTP surface over the package store
//
// GET seeds the store from the embedded default catalog when it is empty,
// so a fresh deployment serves a full storefront on the first request.
// POST replaces the whole catalog; there is no partial update. Writes are
// serialized through the state mutex within this process only; across
// processes the store stays last-writer-wins.

use crate::catalog::default_packages;
use crate::record::{Carrier, PlanRecord};
use crate::store::PackageStore;
use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<Box<dyn PackageStore>>>,
}

impl AppState {
    pub fn new(store: Box<dyn PackageStore>) -> Self {
        AppState {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

// ============================================================================
// Response envelopes
// ============================================================================

#[derive(Serialize)]
struct PackagesResponse {
    success: bool,
    packages: Vec<PlanRecord>,
    timestamp: String,
}

#[derive(Serialize)]
struct MessageResponse {
    success: bool,
    message: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

#[derive(Serialize)]
struct HealthResponse {
    success: bool,
    status: String,
}

fn packages_ok(packages: Vec<PlanRecord>) -> Response {
    (
        StatusCode::OK,
        Json(PackagesResponse {
            success: true,
            packages,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }),
    )
        .into_response()
}

fn bad_request(error: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            success: false,
            error,
        }),
    )
        .into_response()
}

fn server_error(error: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            success: false,
            error,
        }),
    )
        .into_response()
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /health - liveness probe
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        success: true,
        status: "ok".to_string(),
    })
}

/// GET /packages - full catalog, seeded from defaults when empty
async fn get_packages(State(state): State<AppState>) -> Response {
    let mut store = state.store.lock().unwrap();

    match load_or_seed(store.as_mut()) {
        Ok(packages) => packages_ok(packages),
        Err(e) => {
            tracing::error!("failed to load packages: {:#}", e);
            server_error(format!("failed to load packages: {}", e))
        }
    }
}

/// GET /packages/carrier/:carrier - one carrier's slice of the catalog
async fn get_packages_by_carrier(
    State(state): State<AppState>,
    Path(carrier): Path<String>,
) -> Response {
    let Some(carrier) = Carrier::from_tag(&carrier) else {
        return bad_request(format!("unknown carrier '{}'", carrier));
    };

    let mut store = state.store.lock().unwrap();
    match load_or_seed(store.as_mut()) {
        Ok(packages) => {
            let filtered: Vec<PlanRecord> = packages
                .into_iter()
                .filter(|p| p.carrier == carrier)
                .collect();
            packages_ok(filtered)
        }
        Err(e) => {
            tracing::error!("failed to load packages: {:#}", e);
            server_error(format!("failed to load packages: {}", e))
        }
    }
}

/// POST /packages - replace the whole catalog
async fn save_packages(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Response {
    let records = match parse_payload(payload) {
        Ok(records) => records,
        Err(error) => return bad_request(error),
    };

    let mut store = state.store.lock().unwrap();
    match store.save(&records) {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                success: true,
                message: format!("Saved {} packages", records.len()),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to save packages: {:#}", e);
            server_error(format!("failed to save packages: {}", e))
        }
    }
}

/// Shape validation for POST bodies. Anything that fails here is a client
/// error, reported before the store is touched.
fn parse_payload(payload: serde_json::Value) -> Result<Vec<PlanRecord>, String> {
    let Some(object) = payload.as_object() else {
        return Err("body must be a JSON object".to_string());
    };
    let Some(packages) = object.get("packages") else {
        return Err("missing 'packages' field".to_string());
    };
    if !packages.is_array() {
        return Err("'packages' must be an array".to_string());
    }

    let records: Vec<PlanRecord> = serde_json::from_value(packages.clone())
        .map_err(|e| format!("invalid package record: {}", e))?;
    for record in &records {
        if let Err(e) = record.validate() {
            return Err(e.to_string());
        }
    }
    Ok(records)
}

fn load_or_seed(store: &mut dyn PackageStore) -> Result<Vec<PlanRecord>> {
    let records = store.load()?;
    if records.is_empty() {
        let defaults = default_packages();
        store.save(&defaults)?;
        return Ok(defaults);
    }
    Ok(records)
}

// ============================================================================
// Router
// ============================================================================

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/packages", get(get_packages).post(save_packages))
        .route("/packages/carrier/:carrier", get(get_packages_by_carrier))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ============================================================================
// TESTS
// ============================================================================
