//! Handlers for the exoplanet catalog.
//!
//! Each handler decodes its input, delegates to [`CatalogStore`] and wraps
//! the result in the standard response envelope. Malformed input is rejected
//! before the store is touched.
//!
//! [`CatalogStore`]: exocat_core::catalog::CatalogStore

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use exocat_core::exoplanet::ExoplanetInput;
use exocat_core::types::PlanetId;

use crate::error::AppResult;
use crate::query::FuelParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /exoplanets
pub async fn create_exoplanet(
    State(state): State<AppState>,
    payload: Result<Json<ExoplanetInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let planet = state.catalog.insert(input)?;

    tracing::info!(
        exoplanet_id = %planet.id,
        name = %planet.attributes.name,
        kind = planet.attributes.kind.label(),
        "Exoplanet created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: planet })))
}

/// GET /exoplanets
pub async fn list_exoplanets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let planets = state.catalog.list();

    Ok(Json(DataResponse { data: planets }))
}

/// GET /exoplanets/{id}
pub async fn get_exoplanet(
    State(state): State<AppState>,
    Path(id): Path<PlanetId>,
) -> AppResult<impl IntoResponse> {
    let planet = state.catalog.get(&id)?;

    Ok(Json(DataResponse { data: planet }))
}

/// PUT /exoplanets/{id}
///
/// Full replacement. The path id wins over any id in the body.
pub async fn update_exoplanet(
    State(state): State<AppState>,
    Path(id): Path<PlanetId>,
    payload: Result<Json<ExoplanetInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let planet = state.catalog.update(&id, input)?;

    tracing::info!(exoplanet_id = %id, "Exoplanet updated");

    Ok(Json(DataResponse { data: planet }))
}

/// DELETE /exoplanets/{id}
pub async fn delete_exoplanet(
    State(state): State<AppState>,
    Path(id): Path<PlanetId>,
) -> AppResult<impl IntoResponse> {
    state.catalog.delete(&id)?;

    tracing::info!(exoplanet_id = %id, "Exoplanet deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /exoplanets/{id}/fuel?crew=N
///
/// Crew capacity is checked before the catalog lookup.
pub async fn estimate_fuel(
    State(state): State<AppState>,
    Path(id): Path<PlanetId>,
    params: Result<Query<FuelParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let crew = params.crew_capacity()?;

    let estimate = state.catalog.estimate_fuel(&id, crew)?;

    tracing::debug!(
        exoplanet_id = %id,
        crew,
        fuel = estimate.fuel_estimation,
        "Fuel estimated",
    );

    Ok(Json(DataResponse { data: estimate }))
}
