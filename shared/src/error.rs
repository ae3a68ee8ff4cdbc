use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Required field missing: {0}")]
    MissingField(String),
}

impl SharedError {
    /// Classifies a failed API response by its HTTP status, keeping the
    /// backend's message as the payload.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => SharedError::BadRequest(message),
            401 => SharedError::Unauthorized(message),
            403 => SharedError::Forbidden(message),
            404 => SharedError::NotFound(message),
            422 => SharedError::Validation(message),
            _ => SharedError::Internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SharedError::NotFound("club abc".to_string());
        assert_eq!(err.to_string(), "Not found: club abc");
    }

    #[test]
    fn test_from_status_maps_client_errors() {
        let err = SharedError::from_status(401, "bad token".to_string());
        assert_eq!(err.to_string(), "Unauthorized: bad token");
        let err = SharedError::from_status(403, "admins only".to_string());
        assert_eq!(err.to_string(), "Forbidden: admins only");
        let err = SharedError::from_status(422, "name required".to_string());
        assert_eq!(err.to_string(), "Validation error: name required");
    }

    #[test]
    fn test_from_status_defaults_to_internal() {
        let err = SharedError::from_status(500, "boom".to_string());
        assert_eq!(err.to_string(), "Internal error: boom");
        let err = SharedError::from_status(503, "down".to_string());
        assert_eq!(err.to_string(), "Internal error: down");
    }

    #[test]
    fn test_error_serialization_roundtrip() {
        let err = SharedError::Validation("bad password".to_string());
        let json = serde_json::to_string(&err).unwrap();
        let back: SharedError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), err.to_string());
    }
}
