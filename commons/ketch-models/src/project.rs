use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Identity-only reference returned by project listings; drives follow-up
/// lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkspaceRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct Application {
    #[validate(length(min = 1, message = "Application name cannot be empty"))]
    pub name: String,
}

/// A registered project with its workspaces and applications, in the order
/// the server stores them. A project that was registered but never
/// initialized has an empty workspace list; consumers are expected to
/// substitute a default rather than fail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct Project {
    #[validate(length(min = 1, message = "Project name cannot be empty"))]
    pub name: String,
    #[serde(default)]
    pub workspaces: Vec<WorkspaceRef>,
    #[serde(default)]
    #[validate(nested)]
    pub applications: Vec<Application>,
}

impl Project {
    /// Additional validation beyond what the validator provides
    pub fn validate_business_rules(&self) -> Result<(), ValidationError> {
        let mut app_names = std::collections::HashSet::new();
        for app in &self.applications {
            if !app_names.insert(&app.name) {
                return Err(ValidationError::DuplicateApplication(
                    app.name.clone(),
                ));
            }
        }
        Ok(())
    }

    pub fn to_ref(&self) -> ProjectRef {
        ProjectRef {
            name: self.name.clone(),
        }
    }
}
