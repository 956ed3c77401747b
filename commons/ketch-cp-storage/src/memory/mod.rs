use crate::traits::*;
use async_trait::async_trait;
use ketch_models::{AuthMethod, Project, ProjectRef, StatusReport};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type MemoryStore<T> = Arc<RwLock<HashMap<String, T>>>;

#[derive(Clone, Default)]
pub struct MemoryProjectStorage {
    store: MemoryStore<Project>,
}

#[derive(Clone, Default)]
pub struct MemoryStatusReportStorage {
    store: MemoryStore<StatusReport>,
}

#[derive(Clone, Default)]
pub struct MemoryAuthMethodStorage {
    store: MemoryStore<AuthMethod>,
}

impl MemoryProjectStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MemoryStatusReportStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn report_key(project: &str, application: &str, workspace: &str) -> String {
        format!("{}/{}/{}", project, application, workspace)
    }
}

impl MemoryAuthMethodStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageHealth for MemoryProjectStorage {
    async fn health(&self) -> StorageResult<()> {
        Ok(())
    }
}

#[async_trait]
impl ProjectStorage for MemoryProjectStorage {
    async fn store_project(&self, project: &Project) -> StorageResult<()> {
        let mut store = self.store.write().await;
        store.insert(project.name.clone(), project.clone());
        Ok(())
    }

    async fn get_project(
        &self,
        name: &str,
    ) -> StorageResult<Option<Project>> {
        let store = self.store.read().await;
        Ok(store.get(name).cloned())
    }

    async fn list_projects(&self) -> StorageResult<Vec<ProjectRef>> {
        let store = self.store.read().await;
        let mut refs: Vec<ProjectRef> =
            store.values().map(Project::to_ref).collect();
        refs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(refs)
    }

    async fn delete_project(&self, name: &str) -> StorageResult<()> {
        let mut store = self.store.write().await;
        store.remove(name);
        Ok(())
    }

    async fn project_exists(&self, name: &str) -> StorageResult<bool> {
        let store = self.store.read().await;
        Ok(store.contains_key(name))
    }
}

#[async_trait]
impl StorageHealth for MemoryStatusReportStorage {
    async fn health(&self) -> StorageResult<()> {
        Ok(())
    }
}

#[async_trait]
impl StatusReportStorage for MemoryStatusReportStorage {
    async fn store_report(&self, report: &StatusReport) -> StorageResult<()> {
        let key = Self::report_key(
            &report.project,
            &report.application,
            &report.workspace,
        );
        let mut store = self.store.write().await;
        store.insert(key, report.clone());
        Ok(())
    }

    async fn latest_report(
        &self,
        project: &str,
        application: &str,
        workspace: &str,
    ) -> StorageResult<Option<StatusReport>> {
        let key = Self::report_key(project, application, workspace);
        let store = self.store.read().await;
        Ok(store.get(&key).cloned())
    }
}

#[async_trait]
impl StorageHealth for MemoryAuthMethodStorage {
    async fn health(&self) -> StorageResult<()> {
        Ok(())
    }
}

#[async_trait]
impl AuthMethodStorage for MemoryAuthMethodStorage {
    async fn store_auth_method(
        &self,
        method: &AuthMethod,
    ) -> StorageResult<()> {
        let mut store = self.store.write().await;
        store.insert(method.name.clone(), method.clone());
        Ok(())
    }

    async fn get_auth_method(
        &self,
        name: &str,
    ) -> StorageResult<Option<AuthMethod>> {
        let store = self.store.read().await;
        Ok(store.get(name).cloned())
    }

    async fn list_auth_methods(&self) -> StorageResult<Vec<AuthMethod>> {
        let store = self.store.read().await;
        let mut methods: Vec<AuthMethod> = store.values().cloned().collect();
        methods.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(methods)
    }

    async fn delete_auth_method(&self, name: &str) -> StorageResult<()> {
        let mut store = self.store.write().await;
        store.remove(name);
        Ok(())
    }
}

pub struct MemoryStorageFactory;

impl StorageFactory for MemoryStorageFactory {
    type ProjectStorage = MemoryProjectStorage;
    type StatusReportStorage = MemoryStatusReportStorage;
    type AuthMethodStorage = MemoryAuthMethodStorage;

    fn create_project_storage(&self) -> Self::ProjectStorage {
        MemoryProjectStorage::new()
    }

    fn create_status_report_storage(&self) -> Self::StatusReportStorage {
        MemoryStatusReportStorage::new()
    }

    fn create_auth_method_storage(&self) -> Self::AuthMethodStorage {
        MemoryAuthMethodStorage::new()
    }
}
