//! Query parameter types for API handlers.

use serde::Deserialize;

use crate::error::AppError;

/// Query parameters for the fuel estimate endpoint (`?crew=`).
///
/// `crew` is kept as raw text so a missing value and a non-numeric value can
/// be reported with different messages.
#[derive(Debug, Deserialize)]
pub struct FuelParams {
    pub crew: Option<String>,
}

impl FuelParams {
    /// Parse the crew capacity, which must be a positive integer.
    pub fn crew_capacity(&self) -> Result<u32, AppError> {
        let raw = match self.crew.as_deref() {
            None | Some("") => {
                return Err(AppError::BadRequest("crew capacity is required".into()));
            }
            Some(raw) => raw,
        };

        match raw.parse::<u32>() {
            Ok(crew) if crew > 0 => Ok(crew),
            _ => Err(AppError::BadRequest("invalid crew capacity".into())),
        }
    }
}
