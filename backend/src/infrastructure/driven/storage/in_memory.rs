use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::StorageService;
use crate::domain::Resource;

/// Process-local object store for tests and development
#[derive(Clone, Default)]
pub struct InMemoryStorageService {
    objects: Arc<RwLock<HashMap<String, Resource>>>,
}

impl InMemoryStorageService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageService for InMemoryStorageService {
    async fn store(&self, name: &str, resource: &Resource) -> Result<()> {
        let mut objects = self.objects.write().await;
        objects.insert(name.to_string(), resource.clone());
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<Resource>> {
        let objects = self.objects.read().await;
        Ok(objects.get(name).cloned())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let objects = self.objects.read().await;
        let mut names: Vec<String> = objects
            .keys()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect();
        names.sort();
        Ok(names)
    }

    async fn delete_all(&self, names: &[String]) -> Result<()> {
        let mut objects = self.objects.write().await;
        for name in names {
            objects.remove(name);
        }
        Ok(())
    }
}
