use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

#[tokio::main]
async fn main() -> Result<()> {
    init_log();

    info!("Loading configuration from environment variables...");
    let server = ketch_server::build_api_server_from_env().await?;

    info!("Starting Ketch API server...");
    if let Err(e) = server.serve().await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn init_log() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(
                    tracing::level_filters::LevelFilter::INFO.into(),
                )
                .from_env_lossy(),
        )
        .init();
}
