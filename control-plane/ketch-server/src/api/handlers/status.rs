use crate::{errors::ApiError, models::StatusReportResponse, server::AppState};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use ketch_models::StatusReport;
use serde::Deserialize;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    #[serde(default = "default_workspace")]
    pub workspace: String,
}

fn default_workspace() -> String {
    "default".to_string()
}

/// Latest report for one application in one workspace. A 404 here means the
/// application has not reported yet, which callers treat as "not deployed"
/// rather than a failure.
pub async fn get_latest_status_report(
    State(state): State<AppState>,
    Path((project, application)): Path<(String, String)>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<StatusReport>, ApiError> {
    info!(
        "API: Getting latest status for {}/{} in workspace {}",
        project, application, query.workspace
    );

    match state
        .project_service
        .latest_status(&project, &application, &query.workspace)
        .await
    {
        Ok(Some(report)) => Ok(Json(report)),
        Ok(None) => Err(ApiError::NotFound(format!(
            "No status report for application {} in project {}",
            application, project
        ))),
        Err(e) => {
            error!(
                "Failed to get status for {}/{}: {}",
                project, application, e
            );
            Err(ApiError::InternalServerError(format!(
                "Failed to get status report: {}",
                e
            )))
        }
    }
}

pub async fn report_status(
    State(state): State<AppState>,
    Json(report): Json<StatusReport>,
) -> Result<(StatusCode, Json<StatusReportResponse>), ApiError> {
    info!(
        "API: Recording status report for {}/{}",
        report.project, report.application
    );

    match state.project_service.report_status(report).await {
        Ok(report) => {
            let response = StatusReportResponse {
                project: report.project,
                application: report.application,
                workspace: report.workspace,
                status: "recorded".to_string(),
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(e) => {
            error!("Failed to record status report: {}", e);
            Err(ApiError::InternalServerError(format!(
                "Failed to record status report: {}",
                e
            )))
        }
    }
}
