use crate::config::{StorageConfig, StorageType};
use anyhow::Result;
use ketch_cp_storage::MemoryStorageFactory;

/// Build the storage factory for the configured backend. Only the in-memory
/// backend exists today; the factory seam is where a persistent backend
/// plugs in.
pub async fn create_storage_factory(
    config: &StorageConfig,
) -> Result<MemoryStorageFactory> {
    match config.storage_type {
        StorageType::Memory => Ok(MemoryStorageFactory),
    }
}
