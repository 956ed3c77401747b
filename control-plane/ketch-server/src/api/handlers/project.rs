use crate::{errors::ApiError, models::ProjectResponse, server::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use ketch_models::{Project, ProjectRef};
use tracing::{error, info};

pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectRef>>, ApiError> {
    info!("API: Listing projects");

    match state.project_service.list_projects().await {
        Ok(refs) => Ok(Json(refs)),
        Err(e) => {
            error!("Failed to list projects: {}", e);
            Err(ApiError::InternalServerError(format!(
                "Failed to list projects: {}",
                e
            )))
        }
    }
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Project>, ApiError> {
    info!("API: Getting project: {}", name);

    match state.project_service.get_project(&name).await {
        Ok(Some(project)) => Ok(Json(project)),
        Ok(None) => {
            Err(ApiError::NotFound(format!("Project not found: {}", name)))
        }
        Err(e) => {
            error!("Failed to get project {}: {}", name, e);
            Err(ApiError::InternalServerError(format!(
                "Failed to get project: {}",
                e
            )))
        }
    }
}

pub async fn upsert_project(
    State(state): State<AppState>,
    Json(project): Json<Project>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    info!("API: Upserting project: {}", project.name);

    match state.project_service.upsert_project(project).await {
        Ok(project_ref) => {
            let response = ProjectResponse {
                name: project_ref.name,
                status: "stored".to_string(),
                message: Some("Project stored successfully".to_string()),
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(e) if e.is_validation() => {
            Err(ApiError::BadRequest(format!("Invalid project: {}", e)))
        }
        Err(e) => {
            error!("Failed to upsert project: {}", e);
            Err(ApiError::InternalServerError(format!(
                "Failed to upsert project: {}",
                e
            )))
        }
    }
}
