//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for the actual projection logic. A filter combination that matches
//! nothing returns an empty projection, never an error.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{
    DefaultsResponse, HealthResponse, MapQuery, MetrosResponse, ScopeQuery, StatesResponse,
    ViewRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::geo::ShapeKind;
use crate::models::WeeklyMetroObservation;
use crate::services::{self, Scope};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        dataset_checksum: state.dataset.checksum.clone(),
        observations: state.dataset.observations.len(),
    }))
}

/// GET /v1/states
///
/// Options for the state selector, "All USA" sentinel first.
pub async fn list_states(State(state): State<AppState>) -> HandlerResult<StatesResponse> {
    let mut states = vec![services::selection::ALL_USA.to_string()];
    states.extend(services::states(&state.dataset.observations));
    Ok(Json(StatesResponse { states }))
}

/// GET /v1/metros?state=CA
///
/// Metro options for the multiselect within the scope.
pub async fn list_metros(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> HandlerResult<MetrosResponse> {
    let scope = Scope::from_query(query.state.as_deref());
    let scoped = services::scope_rows(&state.dataset.observations, &scope);
    let metros = services::metros(&scoped);
    let total = metros.len();
    Ok(Json(MetrosResponse { metros, total }))
}

/// GET /v1/defaults?state=CA
///
/// Default metro selection (`cbsa_init`) for the scope.
pub async fn get_defaults(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> HandlerResult<DefaultsResponse> {
    let scope = Scope::from_query(query.state.as_deref());
    let scoped = services::scope_rows(&state.dataset.observations, &scope);
    let cbsa_init = services::default_metros(&scoped, &scope, &state.config.selection);
    Ok(Json(DefaultsResponse { cbsa_init }))
}

/// GET /v1/weeks
///
/// Timeslider domain: maximum index and the index-to-date mapping.
pub async fn get_weeks(
    State(state): State<AppState>,
) -> HandlerResult<crate::services::views::TimesliderDomain> {
    Ok(Json(services::timeslider_domain(&state.dataset.observations)))
}

/// GET /v1/map?state=CA&week=31
///
/// Point-in-time map projection. `week` defaults to the latest index.
pub async fn get_map(
    State(state): State<AppState>,
    Query(query): Query<MapQuery>,
) -> HandlerResult<crate::services::views::MapView> {
    let scope = Scope::from_query(query.state.as_deref());
    let week = query
        .week
        .unwrap_or_else(|| services::timeslider_domain(&state.dataset.observations).max);
    let scoped = services::scope_rows(&state.dataset.observations, &scope);
    Ok(Json(services::map_view(&scoped, &scope, week)))
}

/// POST /v1/trends
///
/// Time-series rows for the selected metros, all weeks.
pub async fn post_trends(
    State(state): State<AppState>,
    Json(request): Json<ViewRequest>,
) -> HandlerResult<Vec<WeeklyMetroObservation>> {
    let scope = Scope::from_query(request.state.as_deref());
    let scoped = services::scope_rows(&state.dataset.observations, &scope);
    let selection = services::resolve_selection(&scoped, &scope, &request.cbsas);
    Ok(Json(services::trend_view(
        &scoped,
        &selection,
        state.config.nonpositive_policy,
    )))
}

/// POST /v1/table
///
/// Display table for the selected metros.
pub async fn post_table(
    State(state): State<AppState>,
    Json(request): Json<ViewRequest>,
) -> HandlerResult<Vec<crate::services::views::TableRow>> {
    let scope = Scope::from_query(request.state.as_deref());
    let scoped = services::scope_rows(&state.dataset.observations, &scope);
    let selection = services::resolve_selection(&scoped, &scope, &request.cbsas);
    Ok(Json(services::table_view(
        &scoped,
        &selection,
        state.config.nonpositive_policy,
    )))
}

/// POST /v1/export.csv
///
/// CSV download of the current display table.
pub async fn post_export(
    State(state): State<AppState>,
    Json(request): Json<ViewRequest>,
) -> Result<Response, AppError> {
    let scope = Scope::from_query(request.state.as_deref());
    let scoped = services::scope_rows(&state.dataset.observations, &scope);
    let selection = services::resolve_selection(&scoped, &scope, &request.cbsas);
    let table = services::table_view(&scoped, &selection, state.config.nonpositive_policy);
    let csv = services::export_csv(&table)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"covid_metroareas_export.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}

/// GET /v1/sources
///
/// The data-sources manifest.
pub async fn get_sources(
    State(state): State<AppState>,
) -> HandlerResult<Vec<crate::services::SourceEntry>> {
    let sources = services::load_sources(&state.config.sources_path)?;
    Ok(Json(sources))
}

/// GET /v1/shapes/{kind}
///
/// Reference topology (`states` or `cbsa`). A failed upstream fetch returns
/// JSON `null` so the frontend renders without boundaries.
pub async fn get_shapes(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> HandlerResult<Option<serde_json::Value>> {
    let kind = ShapeKind::from_path(&kind)
        .ok_or_else(|| AppError::NotFound(format!("Unknown shape set '{}'", kind)))?;
    let value = state.shapes.fetch(kind).await;
    Ok(Json(value.map(|v| (*v).clone())))
}
