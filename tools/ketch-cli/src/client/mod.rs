mod error;
mod http;

pub use error::*;
pub use http::*;

use async_trait::async_trait;
use ketch_models::{Project, ProjectRef, StatusReport};

/// The narrow slice of the server API the status command consumes. Kept as a
/// trait so the aggregation logic is testable against an in-memory fake.
#[async_trait]
pub trait ProjectApi: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<ProjectRef>, ClientError>;

    /// A missing project surfaces as [`ClientError::NotFound`].
    async fn get_project(&self, name: &str) -> Result<Project, ClientError>;

    /// The latest report for one application in one workspace.
    /// [`ClientError::NotFound`] here means "no report yet", which callers
    /// treat as absence rather than failure.
    async fn get_latest_status_report(
        &self,
        project: &str,
        application: &str,
        workspace: &str,
    ) -> Result<StatusReport, ClientError>;
}

#[async_trait]
impl ProjectApi for HttpClient {
    async fn list_projects(&self) -> Result<Vec<ProjectRef>, ClientError> {
        self.get("/api/v1/projects").await
    }

    async fn get_project(&self, name: &str) -> Result<Project, ClientError> {
        self.get(&format!("/api/v1/projects/{}", name)).await
    }

    async fn get_latest_status_report(
        &self,
        project: &str,
        application: &str,
        workspace: &str,
    ) -> Result<StatusReport, ClientError> {
        self.get(&format!(
            "/api/v1/projects/{}/applications/{}/status?workspace={}",
            project, application, workspace
        ))
        .await
    }
}
