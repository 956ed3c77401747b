use crate::{errors::ApiError, models::AuthMethodResponse, server::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use ketch_models::AuthMethod;
use tracing::{error, info};

pub async fn list_auth_methods(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuthMethod>>, ApiError> {
    info!("API: Listing auth methods");

    match state.auth_method_service.list_auth_methods().await {
        Ok(methods) => Ok(Json(methods)),
        Err(e) => {
            error!("Failed to list auth methods: {}", e);
            Err(ApiError::InternalServerError(format!(
                "Failed to list auth methods: {}",
                e
            )))
        }
    }
}

pub async fn get_auth_method(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<AuthMethod>, ApiError> {
    info!("API: Getting auth method: {}", name);

    match state.auth_method_service.get_auth_method(&name).await {
        Ok(Some(method)) => Ok(Json(method)),
        Ok(None) => Err(ApiError::NotFound(format!(
            "Auth method not found: {}",
            name
        ))),
        Err(e) => {
            error!("Failed to get auth method {}: {}", name, e);
            Err(ApiError::InternalServerError(format!(
                "Failed to get auth method: {}",
                e
            )))
        }
    }
}

pub async fn upsert_auth_method(
    State(state): State<AppState>,
    Json(method): Json<AuthMethod>,
) -> Result<(StatusCode, Json<AuthMethodResponse>), ApiError> {
    info!("API: Upserting auth method: {}", method.name);

    match state.auth_method_service.upsert_auth_method(method).await {
        Ok(method) => {
            let response = AuthMethodResponse {
                name: method.name,
                status: "stored".to_string(),
                message: Some("Auth method stored successfully".to_string()),
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(e) if e.is_validation() => {
            Err(ApiError::BadRequest(format!("Invalid auth method: {}", e)))
        }
        Err(e) => {
            error!("Failed to upsert auth method: {}", e);
            Err(ApiError::InternalServerError(format!(
                "Failed to upsert auth method: {}",
                e
            )))
        }
    }
}

pub async fn delete_auth_method(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    info!("API: Deleting auth method: {}", name);

    match state.auth_method_service.delete_auth_method(&name).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) if e.is_validation() => Err(ApiError::BadRequest(format!(
            "Invalid delete request: {}",
            e
        ))),
        Err(e) => {
            error!("Failed to delete auth method {}: {}", name, e);
            Err(ApiError::InternalServerError(format!(
                "Failed to delete auth method: {}",
                e
            )))
        }
    }
}
