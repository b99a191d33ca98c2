//! Exoplanet record model, invariants and surface gravity.
//!
//! The wire form is a flat JSON object where `type` selects the planet kind:
//!
//! ```text
//! {"name":"Kepler-X","description":"rocky","distance":50,"radius":1.2,"mass":2.0,"type":"Terrestrial"}
//! ```
//!
//! Mass only exists on [`PlanetKind::Terrestrial`]; a `mass` sent alongside
//! `"type":"GasGiant"` is dropped during decoding.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::PlanetId;

// ---------------------------------------------------------------------------
// Bounds (all exclusive)
// ---------------------------------------------------------------------------

/// Lower distance bound in light years.
pub const MIN_DISTANCE_LY: i64 = 10;
/// Upper distance bound in light years.
pub const MAX_DISTANCE_LY: i64 = 1000;

/// Lower radius bound in Earth radii.
pub const MIN_RADIUS_EARTH: f64 = 0.1;
/// Upper radius bound in Earth radii.
pub const MAX_RADIUS_EARTH: f64 = 10.0;

/// Lower mass bound in Earth masses (terrestrial planets only).
pub const MIN_MASS_EARTH: f64 = 0.1;
/// Upper mass bound in Earth masses (terrestrial planets only).
pub const MAX_MASS_EARTH: f64 = 10.0;

/// Numerator used in place of mass when computing gas giant gravity.
pub const GAS_GIANT_GRAVITY_FACTOR: f64 = 0.5;

// ---------------------------------------------------------------------------
// Planet kind
// ---------------------------------------------------------------------------

/// The two recognised planet types.
///
/// Decoded from the `type` field; any other value is a decoding error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlanetKind {
    GasGiant,
    Terrestrial {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mass: Option<f64>,
    },
}

impl PlanetKind {
    /// Mass in Earth masses, if this kind carries one.
    pub fn mass(&self) -> Option<f64> {
        match self {
            Self::GasGiant => None,
            Self::Terrestrial { mass } => *mass,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::GasGiant => "GasGiant",
            Self::Terrestrial { .. } => "Terrestrial",
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A catalog record without its identifier.
///
/// This is what callers submit on create and update. Any `id` present in the
/// payload is ignored; the store owns identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExoplanetInput {
    pub name: String,
    pub description: String,
    /// Light years.
    pub distance: i64,
    /// Earth radii.
    pub radius: f64,
    #[serde(flatten)]
    pub kind: PlanetKind,
}

impl ExoplanetInput {
    /// Check every record invariant in order, returning the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.description.is_empty() {
            return Err(ValidationError::MissingText);
        }
        if self.distance <= MIN_DISTANCE_LY || self.distance >= MAX_DISTANCE_LY {
            return Err(ValidationError::DistanceOutOfRange(self.distance));
        }
        if !within_exclusive(self.radius, MIN_RADIUS_EARTH, MAX_RADIUS_EARTH) {
            return Err(ValidationError::RadiusOutOfRange(self.radius));
        }
        match self.kind {
            PlanetKind::GasGiant => {}
            PlanetKind::Terrestrial { mass } => {
                let in_range = mass
                    .is_some_and(|m| within_exclusive(m, MIN_MASS_EARTH, MAX_MASS_EARTH));
                if !in_range {
                    return Err(ValidationError::MassOutOfRange(mass));
                }
            }
        }
        Ok(())
    }

    /// Relative surface gravity.
    ///
    /// Gas giants use `0.5 / radius²`; terrestrial planets use
    /// `mass / radius²`, with an unset mass counting as zero. No validation is
    /// performed here, so an unvalidated zero radius yields an IEEE infinity.
    pub fn gravity(&self) -> f64 {
        let radius_sq = self.radius * self.radius;
        match self.kind {
            PlanetKind::GasGiant => GAS_GIANT_GRAVITY_FACTOR / radius_sq,
            PlanetKind::Terrestrial { mass } => mass.unwrap_or(0.0) / radius_sq,
        }
    }
}

/// A stored catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exoplanet {
    pub id: PlanetId,
    #[serde(flatten)]
    pub attributes: ExoplanetInput,
}

impl Exoplanet {
    pub fn new(id: PlanetId, attributes: ExoplanetInput) -> Self {
        Self { id, attributes }
    }

    /// Validate the record's attributes. The identifier is not checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.attributes.validate()
    }

    pub fn gravity(&self) -> f64 {
        self.attributes.gravity()
    }
}

/// `min < value < max`. NaN is never in range.
fn within_exclusive(value: f64, min: f64, max: f64) -> bool {
    value > min && value < max
}
