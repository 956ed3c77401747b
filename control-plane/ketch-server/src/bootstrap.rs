use anyhow::Result;
use std::sync::Arc;

use crate::{
    config::AppConfig,
    server::ApiServer,
    services::{AuthMethodService, ProjectService},
    storage::create_storage_factory,
};
use ketch_cp_storage::StorageFactory;

/// Build a fully-wired ApiServer from environment variables.
/// Mirrors the logic in main and is useful for tests and embedding.
pub async fn build_api_server_from_env() -> Result<ApiServer> {
    let config = AppConfig::load_from_env()?;

    // Storage factory and storages
    let storage_config = config.storage();
    let storage_factory = create_storage_factory(&storage_config).await?;
    let project_storage = Arc::new(storage_factory.create_project_storage());
    let report_storage =
        Arc::new(storage_factory.create_status_report_storage());
    let auth_method_storage =
        Arc::new(storage_factory.create_auth_method_storage());

    // Services
    let project_service =
        Arc::new(ProjectService::new(project_storage, report_storage));
    let auth_method_service =
        Arc::new(AuthMethodService::new(auth_method_storage));

    // Server
    let server_config = config.server();
    Ok(ApiServer::new(
        project_service,
        auth_method_service,
        server_config,
    ))
}
