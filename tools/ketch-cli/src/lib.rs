mod client;
mod commands;
mod config;
mod messages;
mod output;
mod types;

use std::process;

pub use types::{
    ContextOperation, KetchCli, KetchCommands, StatusOperation,
};

pub async fn run(cli: KetchCli) {
    match &cli.command {
        KetchCommands::Status { opt } => {
            if let Err(e) = commands::handle_status_command(opt).await {
                eprintln!("Status command failed: {}", e);
                process::exit(1);
            }
        }
        KetchCommands::Context { opt } => {
            if let Err(e) = commands::handle_context_command(opt).await {
                eprintln!("Context command failed: {}", e);
                process::exit(1);
            }
        }
    }
}
