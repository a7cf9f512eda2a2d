//! HTTP handlers serving the route table

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use ctamap_core::prelude::*;
use geojson::FeatureCollection;
use serde::Deserialize;
use serde_json::{Value, json};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
}

#[derive(Debug, Deserialize)]
pub struct RoutesQuery {
    /// Comma separated modes, e.g. `Bus,L`. Absent means every mode.
    pub modes: Option<String>,
}

pub fn router(state: AppState, max_concurrent_requests: usize) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes", get(routes))
        .with_state(state)
        .layer(ConcurrencyLimitLayer::new(max_concurrent_requests))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "rail_lines": state.table.count(Mode::Rail),
        "bus_routes": state.table.count(Mode::Bus),
    }))
}

async fn routes(
    State(state): State<AppState>,
    Query(query): Query<RoutesQuery>,
) -> Result<Json<FeatureCollection>, ApiError> {
    let active_modes: ModeSet = match query.modes.as_deref() {
        None => Mode::ALL.into_iter().collect(),
        Some(selection) => parse_modes(selection)?,
    };

    let visible = filter_routes(&state.table, &active_modes);
    tracing::debug!("serving {} of {} routes", visible.len(), state.table.len());
    Ok(Json(visible.to_geojson()?))
}
