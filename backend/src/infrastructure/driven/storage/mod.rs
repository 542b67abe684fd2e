// Object storage behind the media resource gateway

pub mod in_memory;
pub mod local;

pub use in_memory::InMemoryStorageService;
pub use local::LocalStorageService;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::Resource;

/// Flat key/value object store. Keys use `/` as a folder separator.
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Stores `resource` under `name`, replacing any previous object.
    async fn store(&self, name: &str, resource: &Resource) -> Result<()>;
    async fn get(&self, name: &str) -> Result<Option<Resource>>;
    /// Names of every object starting with `prefix`, sorted.
    async fn list(&self, prefix: &str) -> Result<Vec<String>>;
    /// Deletes the named objects; unknown names are ignored.
    async fn delete_all(&self, names: &[String]) -> Result<()>;
}
