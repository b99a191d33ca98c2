use axum::routing::get;
use axum::Router;

use crate::handlers::exoplanets;
use crate::state::AppState;

/// Exoplanet catalog routes mounted at `/exoplanets`.
///
/// ```text
/// GET    /            -> list_exoplanets
/// POST   /            -> create_exoplanet
/// GET    /{id}        -> get_exoplanet
/// PUT    /{id}        -> update_exoplanet
/// DELETE /{id}        -> delete_exoplanet
/// GET    /{id}/fuel   -> estimate_fuel
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(exoplanets::list_exoplanets).post(exoplanets::create_exoplanet),
        )
        .route(
            "/{id}",
            get(exoplanets::get_exoplanet)
                .put(exoplanets::update_exoplanet)
                .delete(exoplanets::delete_exoplanet),
        )
        .route("/{id}/fuel", get(exoplanets::estimate_fuel))
}
