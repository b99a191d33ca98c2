//! Exoplanet catalog domain crate.
//!
//! Holds the record model and its validation rules, the physics helpers
//! (surface gravity, fuel estimation) and the in-memory catalog store.
//! Nothing in here knows about HTTP.

pub mod catalog;
pub mod error;
pub mod exoplanet;
pub mod fuel;
pub mod types;
