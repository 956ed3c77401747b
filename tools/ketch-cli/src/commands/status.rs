use crate::client::{ClientError, HttpClient, ProjectApi};
use crate::config::ContextManager;
use crate::messages::{msg, render};
use crate::output::{self, Table, format_health};
use crate::types::StatusOperation;
use ketch_models::Project;
use thiserror::Error;
use tracing::{debug, info};

// Projects that were registered but never initialized have no workspace
// list. The sentinel marks that case internally; it is rewritten to the
// default workspace before any status lookup, so it never reaches the table.
const MISSING_WORKSPACE_SENTINEL: &str = "???";
const DEFAULT_WORKSPACE: &str = "default";
const NO_REPORT_SUMMARY: &str = "N/A";

const PROJECT_HEADERS: [&str; 3] = ["Project", "Workspace", "App Statuses"];
const APP_HEADERS: [&str; 3] = ["Application", "Workspace", "Status"];

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("{}", msg("error.too-many-args"))]
    TooManyArgs,

    #[error("{0}")]
    AppNotFound(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Resolved target scope for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct TargetSpec {
    pub project: Option<String>,
    pub application: Option<String>,
}

/// One row of the all-projects table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DisplayRow {
    pub project: String,
    pub workspace: String,
    pub status_summary: String,
}

/// One row of the per-application tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AppDisplayRow {
    pub application: String,
    pub workspace: String,
    pub status_summary: String,
}

/// Turn the positional target and the app flag into a scope.
///
/// The positional form wins a conflict with the flag; the loser produces a
/// warning for the caller to surface. Splitting on the first '/' breaks for
/// project names that contain one; such names are not supported here.
pub(crate) fn resolve_target(
    positional: &[String],
    app_flag: Option<&str>,
    default_project: Option<&str>,
) -> Result<(TargetSpec, Vec<&'static str>), StatusError> {
    if positional.len() > 1 {
        return Err(StatusError::TooManyArgs);
    }

    let mut spec = TargetSpec::default();
    match positional.first() {
        Some(target) => match target.split_once('/') {
            Some((project, application)) => {
                if !project.is_empty() {
                    spec.project = Some(project.to_string());
                }
                if !application.is_empty() {
                    spec.application = Some(application.to_string());
                }
            }
            None => {
                if !target.is_empty() {
                    spec.project = Some(target.clone());
                }
            }
        },
        None => {
            spec.project =
                default_project.filter(|p| !p.is_empty()).map(str::to_string);
        }
    }

    let mut warnings = Vec::new();
    if let Some(flag) = app_flag.filter(|f| !f.is_empty()) {
        if spec.application.is_none() {
            spec.application = Some(flag.to_string());
        } else {
            warnings.push(msg("warn.app-flag-ignored"));
        }
    }

    Ok((spec, warnings))
}

/// Workspace shown for a project, including the sentinel rewrite for
/// uninitialized projects. Both steps live here so a future change touches
/// one place.
pub(crate) fn resolve_workspace(project: &Project) -> String {
    let workspace = match project.workspaces.first() {
        Some(ws) => ws.name.clone(),
        None => MISSING_WORKSPACE_SENTINEL.to_string(),
    };

    if workspace == MISSING_WORKSPACE_SENTINEL {
        DEFAULT_WORKSPACE.to_string()
    } else {
        workspace
    }
}

/// Reduce collected reports to one summary cell. Only the first report in
/// fetch order counts; health is not merged across applications.
pub(crate) fn summarize_reports(
    reports: &[ketch_models::StatusReport],
) -> String {
    match reports.first() {
        Some(report) => format_health(report),
        None => NO_REPORT_SUMMARY.to_string(),
    }
}

/// One row per project known to the server, in listing order.
pub(crate) async fn aggregate_all_projects(
    api: &impl ProjectApi,
) -> Result<Vec<DisplayRow>, StatusError> {
    let refs = api.list_projects().await?;
    info!(count = refs.len(), "fetching status for listed projects");

    let mut rows = Vec::with_capacity(refs.len());
    for project_ref in refs {
        rows.push(project_row(api, &project_ref.name).await?);
    }
    Ok(rows)
}

async fn project_row(
    api: &impl ProjectApi,
    name: &str,
) -> Result<DisplayRow, StatusError> {
    let project = api.get_project(name).await?;
    let workspace = resolve_workspace(&project);

    let mut reports = Vec::new();
    for app in &project.applications {
        match api
            .get_latest_status_report(&project.name, &app.name, &workspace)
            .await
        {
            Ok(report) => reports.push(report),
            // No report yet: the app simply has not been deployed
            Err(e) if e.is_not_found() => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(DisplayRow {
        status_summary: summarize_reports(&reports),
        project: project.name,
        workspace,
    })
}

/// One row per application in the project, in project order.
pub(crate) async fn aggregate_project_applications(
    api: &impl ProjectApi,
    project_name: &str,
) -> Result<Vec<AppDisplayRow>, StatusError> {
    let project = api.get_project(project_name).await?;
    let workspace = resolve_workspace(&project);

    let mut rows = Vec::with_capacity(project.applications.len());
    for app in &project.applications {
        rows.push(
            application_row(api, &project, &app.name, &workspace).await?,
        );
    }
    Ok(rows)
}

/// The row for one named application; the application must exist in the
/// project.
pub(crate) async fn aggregate_single_application(
    api: &impl ProjectApi,
    project_name: &str,
    application: &str,
) -> Result<AppDisplayRow, StatusError> {
    let project = api.get_project(project_name).await?;

    if !project.applications.iter().any(|a| a.name == application) {
        return Err(StatusError::AppNotFound(render(
            msg("error.app-not-found"),
            &[("app", application), ("project", project_name)],
        )));
    }

    let workspace = resolve_workspace(&project);
    application_row(api, &project, application, &workspace).await
}

async fn application_row(
    api: &impl ProjectApi,
    project: &Project,
    application: &str,
    workspace: &str,
) -> Result<AppDisplayRow, StatusError> {
    let status_summary = match api
        .get_latest_status_report(&project.name, application, workspace)
        .await
    {
        Ok(report) => format_health(&report),
        Err(e) if e.is_not_found() => NO_REPORT_SUMMARY.to_string(),
        Err(e) => return Err(e.into()),
    };

    Ok(AppDisplayRow {
        application: application.to_string(),
        workspace: workspace.to_string(),
        status_summary,
    })
}

pub async fn handle_status_command(
    opt: &StatusOperation,
) -> anyhow::Result<()> {
    let manager = ContextManager::new().await?;
    let context = manager
        .get_current_context()
        .ok_or_else(|| anyhow::anyhow!("No context selected"))?;
    let server = context.server_url.clone().unwrap_or_default();

    let (target, warnings) = resolve_target(
        &opt.target,
        opt.app.as_deref(),
        context.default_project.as_deref(),
    )?;
    for warning in warnings {
        eprintln!("{warning}");
    }
    debug!(?target, all_projects = opt.all_projects, "resolved status target");

    let client = HttpClient::new(context)?;

    if target.project.is_none() || opt.all_projects {
        let rows = aggregate_all_projects(&client).await?;
        if opt.json {
            return output::print_json_stub();
        }

        println!(
            "{}",
            render(msg("status.all-projects"), &[("server", &server)])
        );
        let mut table = Table::new(PROJECT_HEADERS.to_vec());
        for row in rows {
            table.rich(
                vec![row.project, row.workspace, row.status_summary],
                None,
            );
        }
        println!();
        println!("{}", table.render());
        println!();
        println!("{}", msg("status.footer"));
    } else if let Some(project) = &target.project {
        match &target.application {
            None => {
                let rows =
                    aggregate_project_applications(&client, project).await?;
                if opt.json {
                    return output::print_json_stub();
                }

                println!(
                    "{}",
                    render(
                        msg("status.project"),
                        &[("project", project), ("server", &server)],
                    )
                );
                println!();
                println!("{}", render_app_table(rows));
            }
            Some(application) => {
                let row = aggregate_single_application(
                    &client,
                    project,
                    application,
                )
                .await?;
                if opt.json {
                    return output::print_json_stub();
                }

                println!(
                    "{}",
                    render(
                        msg("status.app"),
                        &[
                            ("app", application),
                            ("project", project),
                            ("server", &server),
                        ],
                    )
                );
                println!();
                println!("{}", render_app_table(vec![row]));
            }
        }
    }

    Ok(())
}

fn render_app_table(rows: Vec<AppDisplayRow>) -> String {
    let mut table = Table::new(APP_HEADERS.to_vec());
    for row in rows {
        table.rich(
            vec![row.application, row.workspace, row.status_summary],
            None,
        );
    }
    table.render()
}
