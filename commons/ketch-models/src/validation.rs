#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error("Duplicate application name: {0}")]
    DuplicateApplication(String),

    #[error("Auth method name cannot be empty")]
    EmptyAuthMethodName,

    #[error("Validator error: {0}")]
    ValidatorError(#[from] validator::ValidationErrors),
}
