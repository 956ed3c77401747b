pub mod api;
pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod models;
pub mod server;
pub mod services;
pub mod storage;

pub use config::*;
pub use errors::*;
pub use models::*;
pub use server::{ApiServer, AppState};
pub use storage::create_storage_factory;

// Re-export services with specific names to avoid conflicts
pub use services::{AuthMethodService, ProjectService};

// Re-export bootstrap helpers
pub use bootstrap::build_api_server_from_env;
