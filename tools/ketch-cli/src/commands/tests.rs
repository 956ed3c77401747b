use super::status::*;
use crate::client::{ClientError, ProjectApi};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use ketch_models::{
    Application, HealthStatus, Project, ProjectRef, StatusReport,
    WorkspaceRef,
};
use std::collections::HashMap;

/// In-memory stand-in for the server API. Projects list in insertion order;
/// reports are keyed by (project, application, workspace). Any application
/// named in `fail_status_for` returns a server error from the status call.
#[derive(Default)]
struct FakeApi {
    projects: Vec<Project>,
    reports: HashMap<(String, String, String), StatusReport>,
    fail_status_for: Option<String>,
}

impl FakeApi {
    fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects,
            ..Default::default()
        }
    }

    fn add_report(&mut self, report: StatusReport) {
        self.reports.insert(
            (
                report.project.clone(),
                report.application.clone(),
                report.workspace.clone(),
            ),
            report.clone(),
        );
    }
}

#[async_trait]
impl ProjectApi for FakeApi {
    async fn list_projects(&self) -> Result<Vec<ProjectRef>, ClientError> {
        Ok(self.projects.iter().map(Project::to_ref).collect())
    }

    async fn get_project(&self, name: &str) -> Result<Project, ClientError> {
        self.projects
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .ok_or_else(|| {
                ClientError::NotFound(format!("Project not found: {name}"))
            })
    }

    async fn get_latest_status_report(
        &self,
        project: &str,
        application: &str,
        workspace: &str,
    ) -> Result<StatusReport, ClientError> {
        if self.fail_status_for.as_deref() == Some(application) {
            return Err(ClientError::ApiError {
                status: 500,
                message: "status backend unavailable".to_string(),
            });
        }
        self.reports
            .get(&(
                project.to_string(),
                application.to_string(),
                workspace.to_string(),
            ))
            .cloned()
            .ok_or_else(|| {
                ClientError::NotFound(format!(
                    "No status report for application {application}"
                ))
            })
    }
}

fn project(name: &str, workspaces: &[&str], apps: &[&str]) -> Project {
    Project {
        name: name.to_string(),
        workspaces: workspaces
            .iter()
            .map(|w| WorkspaceRef {
                name: w.to_string(),
            })
            .collect(),
        applications: apps
            .iter()
            .map(|a| Application {
                name: a.to_string(),
            })
            .collect(),
    }
}

fn report(
    project: &str,
    application: &str,
    workspace: &str,
    health: HealthStatus,
    minutes_ago: Option<i64>,
) -> StatusReport {
    StatusReport {
        application: application.to_string(),
        project: project.to_string(),
        workspace: workspace.to_string(),
        health,
        generated_at: minutes_ago.map(|m| Utc::now() - Duration::minutes(m)),
    }
}

mod resolve {
    use super::*;

    #[test]
    fn slash_form_splits_project_and_app() {
        let (spec, warnings) =
            resolve_target(&["proj/app".to_string()], None, None).unwrap();
        assert_eq!(spec.project.as_deref(), Some("proj"));
        assert_eq!(spec.application.as_deref(), Some("app"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn bare_project_leaves_app_empty() {
        let (spec, _) =
            resolve_target(&["proj".to_string()], None, None).unwrap();
        assert_eq!(spec.project.as_deref(), Some("proj"));
        assert_eq!(spec.application, None);
    }

    #[test]
    fn app_flag_fills_empty_app() {
        let (spec, warnings) =
            resolve_target(&["proj".to_string()], Some("api"), None)
                .unwrap();
        assert_eq!(spec.application.as_deref(), Some("api"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn positional_app_wins_conflict_with_warning() {
        let (spec, warnings) =
            resolve_target(&["proj/app".to_string()], Some("other"), None)
                .unwrap();
        assert_eq!(spec.application.as_deref(), Some("app"));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("will be ignored"));
    }

    #[test]
    fn zero_args_fall_back_to_ambient_project() {
        let (spec, _) = resolve_target(&[], None, Some("ambient")).unwrap();
        assert_eq!(spec.project.as_deref(), Some("ambient"));
        assert_eq!(spec.application, None);
    }

    #[test]
    fn more_than_one_arg_is_rejected() {
        let err = resolve_target(
            &["one".to_string(), "two".to_string()],
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, StatusError::TooManyArgs));
        assert!(err.to_string().contains("No more than 1"));
    }

    #[test]
    fn trailing_slash_means_no_app() {
        let (spec, _) =
            resolve_target(&["proj/".to_string()], None, None).unwrap();
        assert_eq!(spec.project.as_deref(), Some("proj"));
        assert_eq!(spec.application, None);
    }
}

mod aggregate {
    use super::*;

    #[tokio::test]
    async fn one_row_per_project_in_listing_order() {
        let mut api = FakeApi::with_projects(vec![
            project("zeta", &["default"], &["api"]),
            project("alpha", &["default"], &["web"]),
        ]);
        api.add_report(report(
            "zeta",
            "api",
            "default",
            HealthStatus::Ready,
            None,
        ));

        let rows = aggregate_all_projects(&api).await.unwrap();
        let names: Vec<&str> =
            rows.iter().map(|r| r.project.as_str()).collect();
        // Listing order is preserved; no re-sort happens client-side
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[tokio::test]
    async fn empty_workspace_list_becomes_default() {
        let api =
            FakeApi::with_projects(vec![project("web", &[], &["api"])]);

        let rows = aggregate_all_projects(&api).await.unwrap();
        assert_eq!(rows[0].workspace, "default");
    }

    #[tokio::test]
    async fn no_reports_summarize_as_not_available() {
        let api = FakeApi::with_projects(vec![project(
            "web",
            &["default"],
            &["api", "worker"],
        )]);

        let rows = aggregate_all_projects(&api).await.unwrap();
        assert_eq!(rows[0].status_summary, "N/A");
    }

    #[tokio::test]
    async fn first_report_drives_the_summary() {
        let mut api = FakeApi::with_projects(vec![project(
            "web",
            &["default"],
            &["api", "worker"],
        )]);
        api.add_report(report(
            "web",
            "api",
            "default",
            HealthStatus::Down,
            Some(5),
        ));
        api.add_report(report(
            "web",
            "worker",
            "default",
            HealthStatus::Ready,
            Some(1),
        ));

        let rows = aggregate_all_projects(&api).await.unwrap();
        // Only the first report in fetch order counts
        assert!(rows[0].status_summary.starts_with("✖ DOWN - "));
        assert!(rows[0].status_summary.contains("minutes ago"));
    }

    #[tokio::test]
    async fn down_without_timestamp_has_no_suffix() {
        let mut api =
            FakeApi::with_projects(vec![project("web", &[], &["api"])]);
        api.add_report(report(
            "web",
            "api",
            "default",
            HealthStatus::Down,
            None,
        ));

        let rows = aggregate_all_projects(&api).await.unwrap();
        assert_eq!(
            rows[0],
            DisplayRow {
                project: "web".to_string(),
                workspace: "default".to_string(),
                status_summary: "✖ DOWN".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn unrecognized_health_falls_back_to_raw_label() {
        let mut api = FakeApi::with_projects(vec![project(
            "web",
            &["default"],
            &["api"],
        )]);
        api.add_report(report(
            "web",
            "api",
            "default",
            HealthStatus::Other("DEGRADED".to_string()),
            None,
        ));

        let rows = aggregate_all_projects(&api).await.unwrap();
        assert_eq!(rows[0].status_summary, "DEGRADED");
    }

    #[tokio::test]
    async fn non_not_found_status_error_aborts_aggregation() {
        let mut api = FakeApi::with_projects(vec![
            project("web", &["default"], &["api"]),
            project("shop", &["default"], &["cart"]),
        ]);
        api.fail_status_for = Some("cart".to_string());

        let err = aggregate_all_projects(&api).await.unwrap_err();
        assert!(matches!(
            err,
            StatusError::Client(ClientError::ApiError { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn named_workspace_is_used_for_lookups() {
        let mut api = FakeApi::with_projects(vec![project(
            "web",
            &["staging", "prod"],
            &["api"],
        )]);
        // Only a report in the first workspace should be found
        api.add_report(report(
            "web",
            "api",
            "staging",
            HealthStatus::Alive,
            None,
        ));

        let rows = aggregate_all_projects(&api).await.unwrap();
        assert_eq!(rows[0].workspace, "staging");
        assert_eq!(rows[0].status_summary, "✔ ALIVE");
    }
}

mod per_application {
    use super::*;

    #[tokio::test]
    async fn project_breakdown_lists_each_application() {
        let mut api = FakeApi::with_projects(vec![project(
            "web",
            &["default"],
            &["api", "worker"],
        )]);
        api.add_report(report(
            "web",
            "api",
            "default",
            HealthStatus::Ready,
            None,
        ));

        let rows =
            aggregate_project_applications(&api, "web").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].application, "api");
        assert_eq!(rows[0].status_summary, "✔ READY");
        assert_eq!(rows[1].application, "worker");
        assert_eq!(rows[1].status_summary, "N/A");
    }

    #[tokio::test]
    async fn missing_project_is_fatal() {
        let api = FakeApi::default();
        let err = aggregate_project_applications(&api, "ghost")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StatusError::Client(ClientError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn single_application_row() {
        let mut api = FakeApi::with_projects(vec![project(
            "web",
            &[],
            &["api"],
        )]);
        api.add_report(report(
            "web",
            "api",
            "default",
            HealthStatus::Partial,
            None,
        ));

        let row = aggregate_single_application(&api, "web", "api")
            .await
            .unwrap();
        assert_eq!(row.workspace, "default");
        assert_eq!(row.status_summary, "● PARTIAL");
    }

    #[tokio::test]
    async fn unknown_application_name_is_rejected() {
        let api = FakeApi::with_projects(vec![project(
            "web",
            &["default"],
            &["api"],
        )]);

        let err = aggregate_single_application(&api, "web", "ghost")
            .await
            .unwrap_err();
        assert!(matches!(err, StatusError::AppNotFound(_)));
        assert!(err.to_string().contains("ghost"));
    }
}

mod policies {
    use super::*;

    #[test]
    fn workspace_policy_prefers_first_entry() {
        let p = project("web", &["staging", "prod"], &[]);
        assert_eq!(resolve_workspace(&p), "staging");
    }

    #[test]
    fn workspace_policy_never_exposes_the_sentinel() {
        let p = project("web", &[], &[]);
        assert_eq!(resolve_workspace(&p), "default");
    }

    #[test]
    fn summary_policy_uses_only_the_first_report() {
        let reports = vec![
            report("web", "api", "default", HealthStatus::Unknown, None),
            report("web", "worker", "default", HealthStatus::Ready, None),
        ];
        assert_eq!(summarize_reports(&reports), "? UNKNOWN");
        assert_eq!(summarize_reports(&[]), "N/A");
    }
}
