use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(ThisError, Debug)]
pub enum AppError {
    /// A required key is absent from a create body
    #[error("missing field `{field}`")]
    MissingField { field: String },

    /// The body, or one of its values, has the wrong JSON type
    #[error("{message}")]
    InvalidShape { message: String },

    /// A patch names a field that is not updatable
    #[error("unknown or read-only field `{field}`")]
    InvalidField { field: String },

    #[error("{resource} with ID {id} not found")]
    NotFound { resource: &'static str, id: i32 },

    #[error(transparent)]
    Store(#[from] DbErr),
}

impl AppError {
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        AppError::InvalidShape {
            message: message.into(),
        }
    }

    /// Message safe to return to the caller; store faults are reported generically.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Store(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField { .. }
            | AppError::InvalidShape { .. }
            | AppError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Store(e) = self {
            error!(error = %e, "store operation failed");
        }

        HttpResponse::build(self.status_code())
            .content_type("application/json")
            .json(json!({
                "error": self.user_message()
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        let missing = AppError::MissingField {
            field: "score".to_string(),
        };
        assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(missing.user_message(), "missing field `score`");

        let shape = AppError::invalid_shape("cards must be a list");
        assert_eq!(shape.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(shape.user_message(), "cards must be a list");

        let field = AppError::InvalidField {
            field: "id".to_string(),
        };
        assert_eq!(field.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_names_the_resource() {
        let err = AppError::NotFound {
            resource: "deck",
            id: 7,
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.user_message(), "deck with ID 7 not found");
    }

    #[test]
    fn store_faults_do_not_leak_details() {
        let err = AppError::from(DbErr::Custom("relation \"player\" does not exist".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "Internal server error");
    }
}
