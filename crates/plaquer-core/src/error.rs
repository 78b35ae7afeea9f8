//! Error types for Plaquer

use thiserror::Error;

use crate::types::PlaqueId;

/// Main error type for Plaquer operations
///
/// The taxonomy is deliberately narrow: navigation resolution, viewport
/// classification, and location building are total functions and have no
/// error path. Only store lookups and identifier parsing can fail.
#[derive(Error, Debug)]
pub enum PlaquerError {
    /// Plaque id was not a plain decimal integer
    #[error("Invalid plaque id: {0}")]
    InvalidPlaqueId(String),

    /// Plaque was not found in the store
    #[error("Plaque not found: {0}")]
    PlaqueNotFound(PlaqueId),

    /// Collection was not found in the store
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// Route was not found in the store
    #[error("Route not found: {0}")]
    RouteNotFound(String),
}

/// Result type alias using PlaquerError
pub type PlaquerResult<T> = Result<T, PlaquerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlaquerError::PlaqueNotFound(PlaqueId::new(42));
        assert_eq!(format!("{}", err), "Plaque not found: 42");
    }

    #[test]
    fn test_invalid_id_display() {
        let err = PlaquerError::InvalidPlaqueId("abc".to_string());
        assert_eq!(format!("{}", err), "Invalid plaque id: abc");
    }
}
