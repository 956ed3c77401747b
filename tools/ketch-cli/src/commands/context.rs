use crate::config::ContextManager;
use crate::types::ContextOperation;
use anyhow::Result;

/// Handle context management commands
pub async fn handle_context_command(
    operation: &ContextOperation,
) -> Result<()> {
    match operation {
        ContextOperation::Set {
            name,
            server,
            project,
        } => {
            handle_context_set(name.clone(), server.clone(), project.clone())
                .await
        }
        ContextOperation::Get => handle_context_get().await,
        ContextOperation::Select { name } => {
            handle_context_select(name.clone()).await
        }
    }
}

async fn handle_context_set(
    name: Option<String>,
    server_url: Option<String>,
    default_project: Option<String>,
) -> Result<()> {
    let mut context_manager = ContextManager::new().await?;

    context_manager
        .set_context(name.clone(), server_url, default_project)
        .await?;

    let context_name = name
        .unwrap_or_else(|| context_manager.config().current_context.clone());
    println!("ctx:'{}' updated successfully", context_name);

    // Show current configuration
    if let Some(context) = context_manager.config().get_context(&context_name)
    {
        println!("Configuration:");
        if let Some(server) = &context.server_url {
            println!("  serverUrl: '{}'", server);
        }
        if let Some(project) = &context.default_project {
            println!("  defaultProject: '{}'", project);
        }
    }

    Ok(())
}

async fn handle_context_get() -> Result<()> {
    let context_manager = ContextManager::new().await?;

    // Pretty print the entire configuration
    let config_json = serde_json::to_string_pretty(context_manager.config())?;
    println!("{}", config_json);

    Ok(())
}

async fn handle_context_select(name: String) -> Result<()> {
    let mut context_manager = ContextManager::new().await?;

    if context_manager.config().get_context(&name).is_none() {
        return Err(anyhow::anyhow!("Context '{}' does not exist", name));
    }

    context_manager.select_context(name.clone()).await?;
    println!("Switched to context '{}'", name);

    Ok(())
}
