use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use ketch_cli::KetchCli;

#[tokio::main]
async fn main() {
    let cli = KetchCli::parse();
    init_log(cli.verbose());
    ketch_cli::run(cli).await
}

fn init_log(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .with_env_var("KETCH_LOG")
                .from_env_lossy(),
        )
        .init();
}
