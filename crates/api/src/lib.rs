//! Exoplanet catalog API server library.
//!
//! Exposes config, state, error handling, handlers and routes so integration
//! tests and the binary entrypoint build the same application.

pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
