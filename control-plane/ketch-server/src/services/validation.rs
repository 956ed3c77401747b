use crate::errors::{AuthMethodError, ProjectError, ServerError};
use ketch_models::{AuthMethod, Project, ValidationError};
use validator::Validate;

pub struct ProjectValidator {
    // Future: add naming policy configuration
}

impl ProjectValidator {
    pub fn new() -> Self {
        Self {}
    }

    pub fn validate(&self, project: &Project) -> Result<(), ServerError> {
        project.validate().map_err(ValidationError::from)?;
        project.validate_business_rules()?;

        if project.name.contains(' ') {
            return Err(ProjectError::Invalid(
                "Project name cannot contain spaces".to_string(),
            )
            .into());
        }

        Ok(())
    }
}

impl Default for ProjectValidator {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AuthMethodValidator {
    // Future: add per-provider config schemas
}

impl AuthMethodValidator {
    pub fn new() -> Self {
        Self {}
    }

    /// Checks the upsert payload before anything touches the store.
    pub fn validate_upsert(
        &self,
        method: &AuthMethod,
    ) -> Result<(), ServerError> {
        method.validate().map_err(ValidationError::from)?;

        if method.name.contains(' ') {
            return Err(AuthMethodError::Invalid(
                "Auth method name cannot contain spaces".to_string(),
            )
            .into());
        }

        Ok(())
    }

    /// Checks the delete request shape before removal.
    pub fn validate_delete(&self, name: &str) -> Result<(), ServerError> {
        if name.is_empty() {
            return Err(ValidationError::EmptyAuthMethodName.into());
        }
        Ok(())
    }
}

impl Default for AuthMethodValidator {
    fn default() -> Self {
        Self::new()
    }
}
