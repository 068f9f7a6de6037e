//! Error types for GeoJSON decoding and validation.

use thiserror::Error;

use crate::model::GeoJsonType;

/// Caller-facing error codes.
///
/// Every structural problem collapses into [`ErrorCode::InvalidObject`]; the
/// contract is "valid or not". The [`DecodeError`] variants only add a
/// human-readable reason for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E000: The input text is not JSON at all.
    InvalidJson,
    /// E001: The value is not a valid GeoJSON object.
    InvalidObject,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidJson => "E000",
            ErrorCode::InvalidObject => "E001",
        }
    }
}

/// Error during decoding of an untyped value into a typed GeoJSON object.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    // === E000: Invalid JSON ===
    #[error("[E000] invalid JSON: {0}")]
    Json(String),

    // === E001: Invalid object ===
    #[error("[E001] expected a JSON object for {context}")]
    NotAnObject { context: &'static str },

    #[error("[E001] missing or non-string \"type\" member")]
    MissingType,

    #[error("[E001] unknown GeoJSON type {found:?}")]
    UnknownType { found: String },

    #[error("[E001] missing required member {field:?}")]
    MissingField { field: &'static str },

    #[error("[E001] {context}: expected {expected}")]
    UnexpectedShape {
        context: &'static str,
        expected: &'static str,
    },

    #[error("[E001] position has {len} coordinates, at least 2 are required")]
    TooFewCoordinates { len: usize },

    #[error("[E001] position coordinate {index} is not finite")]
    NonFiniteCoordinate { index: usize },

    #[error("[E001] polygon ring {index} is not a linear ring")]
    NotLinearRing { index: usize },

    #[error("[E001] {found:?} is not a geometry")]
    NotAGeometry { found: GeoJsonType },

    #[error("[E001] nesting depth exceeds maximum {max}")]
    DepthExceeded { max: usize },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::Json(_) => ErrorCode::InvalidJson,
            _ => ErrorCode::InvalidObject,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_errors_share_one_code() {
        let errors = [
            DecodeError::MissingType,
            DecodeError::UnknownType {
                found: "Circle".to_string(),
            },
            DecodeError::MissingField {
                field: "coordinates",
            },
            DecodeError::TooFewCoordinates { len: 1 },
            DecodeError::NotLinearRing { index: 0 },
            DecodeError::NotAGeometry {
                found: GeoJsonType::Feature,
            },
            DecodeError::DepthExceeded { max: 4 },
        ];
        for err in errors {
            assert_eq!(err.code(), ErrorCode::InvalidObject);
            assert!(err.to_string().starts_with("[E001]"));
        }
    }

    #[test]
    fn test_json_error_code() {
        let err: DecodeError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), ErrorCode::InvalidJson);
        assert_eq!(err.code().code(), "E000");
    }
}
