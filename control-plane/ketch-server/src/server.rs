use crate::{
    api::{create_middleware_stack, handlers},
    config::ServerConfig,
    services::{AuthMethodService, ProjectService},
};
use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub project_service: Arc<ProjectService>,
    pub auth_method_service: Arc<AuthMethodService>,
}

pub struct ApiServer {
    app: Router,
    config: ServerConfig,
}

impl ApiServer {
    pub fn new(
        project_service: Arc<ProjectService>,
        auth_method_service: Arc<AuthMethodService>,
        config: ServerConfig,
    ) -> Self {
        let state = AppState {
            project_service,
            auth_method_service,
        };

        let app = Router::new()
            // Project APIs
            .route("/api/v1/projects", get(handlers::list_projects))
            .route("/api/v1/projects", post(handlers::upsert_project))
            .route("/api/v1/projects/{name}", get(handlers::get_project))
            // Status report APIs
            .route(
                "/api/v1/projects/{project}/applications/{application}/status",
                get(handlers::get_latest_status_report),
            )
            .route("/api/v1/status-reports", post(handlers::report_status))
            // Auth method APIs
            .route("/api/v1/auth-methods", get(handlers::list_auth_methods))
            .route("/api/v1/auth-methods", post(handlers::upsert_auth_method))
            .route(
                "/api/v1/auth-methods/{name}",
                get(handlers::get_auth_method),
            )
            .route(
                "/api/v1/auth-methods/{name}",
                delete(handlers::delete_auth_method),
            )
            // Health check endpoint
            .route("/health", get(health_check))
            // Add middleware
            .layer(create_middleware_stack())
            .with_state(state);

        Self { app, config }
    }

    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error>> {
        let listener = tokio::net::TcpListener::bind((
            self.config.host.as_str(),
            self.config.port,
        ))
        .await?;

        info!(
            "Ketch API server listening on {}",
            listener.local_addr()?
        );

        axum::serve(listener, self.app).await?;

        Ok(())
    }

    /// Consume and return the underlying Axum Router so callers can serve it
    /// themselves (e.g., on an ephemeral port in tests) and discover the
    /// bound address.
    pub fn into_router(self) -> Router {
        self.app
    }
}

async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "healthy",
        "service": "ketch-server",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
