use crate::types::PlanetId;

/// A broken record invariant. Only the first violation is reported.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("name and description are required")]
    MissingText,

    #[error("distance must be between 10 and 1000 light years")]
    DistanceOutOfRange(i64),

    #[error("radius must be between 0.1 and 10 Earth-radius units")]
    RadiusOutOfRange(f64),

    #[error("mass must be between 0.1 and 10 Earth-mass units for terrestrial planets")]
    MassOutOfRange(Option<f64>),
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: PlanetId },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}
