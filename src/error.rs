use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors surfaced by the matching core and its repositories
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Invalid input ({}): {message}", .fields.join(", "))]
    InvalidInput {
        fields: Vec<String>,
        message: String,
    },

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: u64 },
}

pub type Result<T> = std::result::Result<T, MatchError>;

impl MatchError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        MatchError::InvalidInput {
            fields: vec![field.into()],
            message: message.into(),
        }
    }

    pub fn faculty_not_found(id: u64) -> Self {
        MatchError::NotFound {
            resource: "faculty",
            id,
        }
    }

    /// Short machine-readable label used in JSON error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            MatchError::InvalidInput { .. } => "invalid_input",
            MatchError::NotFound { .. } => "not_found",
        }
    }
}

impl From<validator::ValidationErrors> for MatchError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();

        MatchError::InvalidInput {
            fields,
            message: errors.to_string(),
        }
    }
}

impl ResponseError for MatchError {
    fn status_code(&self) -> StatusCode {
        match self {
            MatchError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            MatchError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            MatchError::invalid("studentId", "required").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            MatchError::faculty_not_found(9).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_display_names_fields() {
        let err = MatchError::InvalidInput {
            fields: vec!["areaOfInterest".to_string(), "studentId".to_string()],
            message: "missing".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid input (areaOfInterest, studentId): missing");
        assert_eq!(MatchError::faculty_not_found(3).to_string(), "faculty not found: 3");
    }
}
