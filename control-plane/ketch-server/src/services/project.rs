use crate::errors::ServerError;
use crate::services::ProjectValidator;
use ketch_cp_storage::{ProjectStorage, StatusReportStorage};
use ketch_models::{Project, ProjectRef, StatusReport};
use std::sync::Arc;
use tracing::{debug, info};

pub struct ProjectService {
    projects: Arc<dyn ProjectStorage>,
    reports: Arc<dyn StatusReportStorage>,
    validator: ProjectValidator,
}

impl ProjectService {
    pub fn new(
        projects: Arc<dyn ProjectStorage>,
        reports: Arc<dyn StatusReportStorage>,
    ) -> Self {
        Self {
            projects,
            reports,
            validator: ProjectValidator::new(),
        }
    }

    pub async fn health(&self) -> Result<(), ServerError> {
        self.projects.health().await?;
        self.reports.health().await.map_err(Into::into)
    }

    pub async fn upsert_project(
        &self,
        project: Project,
    ) -> Result<ProjectRef, ServerError> {
        info!("Upserting project: {}", project.name);

        self.validator.validate(&project)?;
        self.projects.store_project(&project).await?;

        Ok(project.to_ref())
    }

    pub async fn get_project(
        &self,
        name: &str,
    ) -> Result<Option<Project>, ServerError> {
        let project = self.projects.get_project(name).await?;
        Ok(project)
    }

    pub async fn list_projects(&self) -> Result<Vec<ProjectRef>, ServerError> {
        let refs = self.projects.list_projects().await?;
        Ok(refs)
    }

    /// Record the latest report for the application's workspace slot.
    pub async fn report_status(
        &self,
        report: StatusReport,
    ) -> Result<StatusReport, ServerError> {
        debug!(
            project = %report.project,
            application = %report.application,
            workspace = %report.workspace,
            "Recording status report"
        );

        self.reports.store_report(&report).await?;
        Ok(report)
    }

    /// The latest report for (project, application, workspace), or None when
    /// the application has not reported yet.
    pub async fn latest_status(
        &self,
        project: &str,
        application: &str,
        workspace: &str,
    ) -> Result<Option<StatusReport>, ServerError> {
        let report = self
            .reports
            .latest_report(project, application, workspace)
            .await?;
        Ok(report)
    }
}
