use crate::error::StorageError;
use async_trait::async_trait;
use ketch_models::{AuthMethod, Project, ProjectRef, StatusReport};

pub type StorageResult<T> = Result<T, StorageError>;

#[async_trait]
pub trait StorageHealth: Send + Sync {
    /// Lightweight connectivity check to the backing store.
    /// Should return Ok(()) if the backend is reachable and responding.
    async fn health(&self) -> StorageResult<()>;
}

#[async_trait]
pub trait ProjectStorage: Send + Sync + StorageHealth {
    async fn store_project(&self, project: &Project) -> StorageResult<()>;
    async fn get_project(&self, name: &str)
    -> StorageResult<Option<Project>>;
    /// Refs come back sorted by name, matching the ordered keyspace of the
    /// persistent backends this trait fronts.
    async fn list_projects(&self) -> StorageResult<Vec<ProjectRef>>;
    async fn delete_project(&self, name: &str) -> StorageResult<()>;
    async fn project_exists(&self, name: &str) -> StorageResult<bool>;
}

#[async_trait]
pub trait StatusReportStorage: Send + Sync + StorageHealth {
    /// Record the latest report for its (project, application, workspace)
    /// slot, replacing any previous report for that slot.
    async fn store_report(&self, report: &StatusReport) -> StorageResult<()>;
    async fn latest_report(
        &self,
        project: &str,
        application: &str,
        workspace: &str,
    ) -> StorageResult<Option<StatusReport>>;
}

#[async_trait]
pub trait AuthMethodStorage: Send + Sync + StorageHealth {
    async fn store_auth_method(
        &self,
        method: &AuthMethod,
    ) -> StorageResult<()>;
    async fn get_auth_method(
        &self,
        name: &str,
    ) -> StorageResult<Option<AuthMethod>>;
    async fn list_auth_methods(&self) -> StorageResult<Vec<AuthMethod>>;
    async fn delete_auth_method(&self, name: &str) -> StorageResult<()>;
}

pub trait StorageFactory {
    type ProjectStorage: ProjectStorage;
    type StatusReportStorage: StatusReportStorage;
    type AuthMethodStorage: AuthMethodStorage;

    fn create_project_storage(&self) -> Self::ProjectStorage;
    fn create_status_report_storage(&self) -> Self::StatusReportStorage;
    fn create_auth_method_storage(&self) -> Self::AuthMethodStorage;
}
