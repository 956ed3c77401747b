use crate::errors::ServerError;
use crate::services::AuthMethodValidator;
use ketch_cp_storage::AuthMethodStorage;
use ketch_models::AuthMethod;
use std::sync::Arc;
use tracing::info;

pub struct AuthMethodService {
    storage: Arc<dyn AuthMethodStorage>,
    validator: AuthMethodValidator,
}

impl AuthMethodService {
    pub fn new(storage: Arc<dyn AuthMethodStorage>) -> Self {
        Self {
            storage,
            validator: AuthMethodValidator::new(),
        }
    }

    pub async fn health(&self) -> Result<(), ServerError> {
        self.storage.health().await.map_err(Into::into)
    }

    pub async fn get_auth_method(
        &self,
        name: &str,
    ) -> Result<Option<AuthMethod>, ServerError> {
        let method = self.storage.get_auth_method(name).await?;
        Ok(method)
    }

    /// Create-or-replace keyed by name. Nothing is written when validation
    /// fails.
    pub async fn upsert_auth_method(
        &self,
        method: AuthMethod,
    ) -> Result<AuthMethod, ServerError> {
        info!("Upserting auth method: {}", method.name);

        self.validator.validate_upsert(&method)?;
        self.storage.store_auth_method(&method).await?;

        Ok(method)
    }

    pub async fn delete_auth_method(
        &self,
        name: &str,
    ) -> Result<(), ServerError> {
        info!("Deleting auth method: {}", name);

        self.validator.validate_delete(name)?;
        self.storage.delete_auth_method(name).await?;

        Ok(())
    }

    pub async fn list_auth_methods(
        &self,
    ) -> Result<Vec<AuthMethod>, ServerError> {
        let methods = self.storage.list_auth_methods().await?;
        Ok(methods)
    }
}
