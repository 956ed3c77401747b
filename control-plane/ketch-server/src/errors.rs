use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    #[error("Auth method error: {0}")]
    AuthMethod(#[from] AuthMethodError),

    #[error("Storage error: {0}")]
    Storage(#[from] ketch_cp_storage::StorageError),

    #[error("Validation error: {0}")]
    Validation(#[from] ketch_models::ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Whether the error came out of request validation rather than the
    /// store or the server itself.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ServerError::Validation(_)
                | ServerError::Project(ProjectError::Invalid(_))
                | ServerError::AuthMethod(AuthMethodError::Invalid(_))
        )
    }
}

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("Invalid project: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum AuthMethodError {
    #[error("Auth method not found: {0}")]
    NotFound(String),

    #[error("Invalid auth method: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        use axum::{Json, http::StatusCode};
        use serde_json::json;

        let (status, error_message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
