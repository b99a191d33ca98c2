//! In-memory exoplanet catalog.
//!
//! One [`CatalogStore`] is created per process and shared behind an `Arc`.
//! Every operation takes the single interior `RwLock`: reads share it, writes
//! hold it exclusively. No operation awaits, so the lock is never held across
//! a suspension point.

use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::CoreError;
use crate::exoplanet::{Exoplanet, ExoplanetInput};
use crate::fuel::FuelEstimate;
use crate::types::PlanetId;

/// Entity name used in not-found errors.
pub const ENTITY: &str = "Exoplanet";

/// Owns every catalog record for the lifetime of the process.
#[derive(Debug, Default)]
pub struct CatalogStore {
    records: RwLock<HashMap<PlanetId, Exoplanet>>,
}

impl CatalogStore {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a new record under a freshly generated id.
    ///
    /// Nothing is stored when validation fails.
    pub fn insert(&self, input: ExoplanetInput) -> Result<Exoplanet, CoreError> {
        let mut records = self.records.write();

        let mut id = Uuid::new_v4().to_string();
        while records.contains_key(&id) {
            id = Uuid::new_v4().to_string();
        }

        let planet = Exoplanet::new(id, input);
        planet.validate()?;

        records.insert(planet.id.clone(), planet.clone());
        Ok(planet)
    }

    /// Snapshot of every record. Order is unspecified.
    pub fn list(&self) -> Vec<Exoplanet> {
        self.records.read().values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Result<Exoplanet, CoreError> {
        self.records
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Replace the record stored under `id`, keeping the id.
    ///
    /// Unknown ids are reported before validation runs. A record that fails
    /// validation leaves the stored one untouched.
    pub fn update(&self, id: &str, input: ExoplanetInput) -> Result<Exoplanet, CoreError> {
        let mut records = self.records.write();

        let slot = records.get_mut(id).ok_or_else(|| not_found(id))?;

        let planet = Exoplanet::new(id.to_string(), input);
        planet.validate()?;

        *slot = planet.clone();
        Ok(planet)
    }

    pub fn delete(&self, id: &str) -> Result<(), CoreError> {
        self.records
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    /// Fuel estimate for the record stored under `id`.
    pub fn estimate_fuel(&self, id: &str, crew_capacity: u32) -> Result<FuelEstimate, CoreError> {
        let records = self.records.read();
        let planet = records.get(id).ok_or_else(|| not_found(id))?;
        Ok(FuelEstimate::for_planet(planet, crew_capacity))
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

fn not_found(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY,
        id: id.to_string(),
    }
}
