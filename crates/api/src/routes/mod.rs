pub mod exoplanets;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// ```text
/// /exoplanets                  list, create
/// /exoplanets/{id}             get, update, delete
/// /exoplanets/{id}/fuel        fuel estimate (?crew=N)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/exoplanets", exoplanets::router())
}
