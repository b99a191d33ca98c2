//! Trip fuel estimation.

use serde::Serialize;

use crate::exoplanet::Exoplanet;
use crate::types::PlanetId;

/// Estimated fuel for a trip: `distance / gravity² * crew_capacity`.
///
/// A zero gravity produces an IEEE infinity (or NaN for a zero distance).
/// Validated records always have positive gravity, so callers that go through
/// the catalog never observe that case.
pub fn fuel_estimation(distance: i64, gravity: f64, crew_capacity: u32) -> f64 {
    distance as f64 / (gravity * gravity) * f64::from(crew_capacity)
}

/// Fuel estimate for a stored planet, with the gravity it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelEstimate {
    pub id: PlanetId,
    pub crew_capacity: u32,
    pub gravity: f64,
    pub fuel_estimation: f64,
}

impl FuelEstimate {
    pub fn for_planet(planet: &Exoplanet, crew_capacity: u32) -> Self {
        let gravity = planet.gravity();
        Self {
            id: planet.id.clone(),
            crew_capacity,
            gravity,
            fuel_estimation: fuel_estimation(planet.attributes.distance, gravity, crew_capacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exoplanet::{ExoplanetInput, PlanetKind};

    #[test]
    fn matches_formula() {
        let fuel = fuel_estimation(100, 2.0, 3);
        assert!((fuel - 75.0).abs() < 1e-12);
    }

    #[test]
    fn doubling_crew_doubles_fuel() {
        let base = fuel_estimation(250, 1.3, 2);
        let doubled = fuel_estimation(250, 1.3, 4);
        assert!((doubled - 2.0 * base).abs() < 1e-9);
    }

    #[test]
    fn doubling_gravity_quarters_fuel() {
        let base = fuel_estimation(250, 0.8, 5);
        let heavier = fuel_estimation(250, 1.6, 5);
        assert!((heavier - base / 4.0).abs() < 1e-9);
    }

    #[test]
    fn zero_gravity_is_infinite() {
        assert!(fuel_estimation(50, 0.0, 1).is_infinite());
    }

    #[test]
    fn kepler_x_estimate() {
        let planet = Exoplanet::new(
            "kepler-x".to_string(),
            ExoplanetInput {
                name: "Kepler-X".to_string(),
                description: "rocky".to_string(),
                distance: 50,
                radius: 1.2,
                kind: PlanetKind::Terrestrial { mass: Some(2.0) },
            },
        );

        let estimate = FuelEstimate::for_planet(&planet, 4);

        assert!((estimate.gravity - 1.3889).abs() < 1e-3);
        assert!((estimate.fuel_estimation - 103.68).abs() < 1e-2);
        assert_eq!(estimate.crew_capacity, 4);
        assert_eq!(estimate.id, "kepler-x");
    }
}
