use std::net::Ipv4Addr;
use std::sync::Arc;

use ketch_cp_storage::{MemoryStorageFactory, StorageFactory};
use ketch_models::{
    Application, AuthMethod, HealthStatus, Project, StatusReport,
    WorkspaceRef,
};
use ketch_server::{
    ApiServer, AuthMethodService, ProjectService, ServerConfig,
};

// Serve a freshly-wired router on an ephemeral port and return its base URL
async fn spawn_server() -> anyhow::Result<String> {
    let factory = MemoryStorageFactory;
    let project_service = Arc::new(ProjectService::new(
        Arc::new(factory.create_project_storage()),
        Arc::new(factory.create_status_report_storage()),
    ));
    let auth_method_service = Arc::new(AuthMethodService::new(Arc::new(
        factory.create_auth_method_storage(),
    )));

    let server = ApiServer::new(
        project_service,
        auth_method_service,
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
    );

    let listener =
        tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;
    let app = server.into_router();
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("test server error: {e}");
        }
    });

    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}

fn sample_project(name: &str) -> Project {
    Project {
        name: name.to_string(),
        workspaces: vec![WorkspaceRef {
            name: "default".to_string(),
        }],
        applications: vec![Application {
            name: "api".to_string(),
        }],
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn health_endpoint_responds() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/health")).send().await?;
    assert!(resp.status().is_success());

    let body: serde_json::Value = resp.json().await?;
    assert_eq!(body["service"], "ketch-server");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn auth_method_crud_flow() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let client = reqwest::Client::new();

    // Empty store lists as an empty sequence, not an error
    let methods: Vec<AuthMethod> = client
        .get(format!("{base}/api/v1/auth-methods"))
        .send()
        .await?
        .json()
        .await?;
    assert!(methods.is_empty());

    // Validation failure is rejected before any write
    let invalid = AuthMethod {
        name: String::new(),
        display_name: None,
        description: None,
        config: Default::default(),
    };
    let resp = client
        .post(format!("{base}/api/v1/auth-methods"))
        .json(&invalid)
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    let methods: Vec<AuthMethod> = client
        .get(format!("{base}/api/v1/auth-methods"))
        .send()
        .await?
        .json()
        .await?;
    assert!(methods.is_empty());

    // Upsert, get, delete
    let method = AuthMethod {
        name: "corp-oidc".to_string(),
        display_name: Some("Corp SSO".to_string()),
        description: Some("OIDC login".to_string()),
        config: Default::default(),
    };
    let resp = client
        .post(format!("{base}/api/v1/auth-methods"))
        .json(&method)
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);

    let loaded: AuthMethod = client
        .get(format!("{base}/api/v1/auth-methods/corp-oidc"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(loaded, method);

    let resp = client
        .delete(format!("{base}/api/v1/auth-methods/corp-oidc"))
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::NO_CONTENT);

    let resp = client
        .get(format!("{base}/api/v1/auth-methods/corp-oidc"))
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn projects_list_in_name_order_and_missing_is_404() -> anyhow::Result<()>
{
    let base = spawn_server().await?;
    let client = reqwest::Client::new();

    for name in ["zeta", "alpha"] {
        let resp = client
            .post(format!("{base}/api/v1/projects"))
            .json(&sample_project(name))
            .send()
            .await?;
        assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    }

    let refs: Vec<serde_json::Value> = client
        .get(format!("{base}/api/v1/projects"))
        .send()
        .await?
        .json()
        .await?;
    let names: Vec<&str> =
        refs.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["alpha", "zeta"]);

    let resp = client
        .get(format!("{base}/api/v1/projects/missing"))
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn status_report_absence_is_a_404_until_reported() -> anyhow::Result<()>
{
    let base = spawn_server().await?;
    let client = reqwest::Client::new();

    client
        .post(format!("{base}/api/v1/projects"))
        .json(&sample_project("web"))
        .send()
        .await?;

    let status_url = format!(
        "{base}/api/v1/projects/web/applications/api/status?workspace=default"
    );

    // No report yet: the dedicated not-found signal
    let resp = client.get(&status_url).send().await?;
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    let report = StatusReport {
        application: "api".to_string(),
        project: "web".to_string(),
        workspace: "default".to_string(),
        health: HealthStatus::Ready,
        generated_at: Some(chrono::Utc::now()),
    };
    let resp = client
        .post(format!("{base}/api/v1/status-reports"))
        .json(&report)
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);

    let latest: StatusReport =
        client.get(&status_url).send().await?.json().await?;
    assert_eq!(latest.health, HealthStatus::Ready);

    Ok(())
}
