use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{CastMemberGateway, CategoryGateway, GenreGateway};
use crate::domain::{CastMemberId, CategoryId, GenreId};

/// In-memory id registry standing in for a catalog owned elsewhere.
#[derive(Clone)]
pub struct InMemoryReferences<Id> {
    ids: Arc<RwLock<HashSet<Id>>>,
}

pub type InMemoryCategoryGateway = InMemoryReferences<CategoryId>;
pub type InMemoryGenreGateway = InMemoryReferences<GenreId>;
pub type InMemoryCastMemberGateway = InMemoryReferences<CastMemberId>;

impl<Id: Eq + Hash + Clone> InMemoryReferences<Id> {
    pub fn new() -> Self {
        Self::with_ids(std::iter::empty())
    }

    pub fn with_ids(ids: impl IntoIterator<Item = Id>) -> Self {
        Self {
            ids: Arc::new(RwLock::new(ids.into_iter().collect())),
        }
    }

    pub async fn insert(&self, id: Id) {
        self.ids.write().await.insert(id);
    }

    pub async fn remove(&self, id: &Id) {
        self.ids.write().await.remove(id);
    }

    async fn existing(&self, ids: &[Id]) -> Vec<Id> {
        let known = self.ids.read().await;
        ids.iter().filter(|id| known.contains(id)).cloned().collect()
    }
}

impl<Id: Eq + Hash + Clone> Default for InMemoryReferences<Id> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryGateway for InMemoryReferences<CategoryId> {
    async fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>> {
        Ok(self.existing(ids).await)
    }
}

#[async_trait]
impl GenreGateway for InMemoryReferences<GenreId> {
    async fn exists_by_ids(&self, ids: &[GenreId]) -> Result<Vec<GenreId>> {
        Ok(self.existing(ids).await)
    }
}

#[async_trait]
impl CastMemberGateway for InMemoryReferences<CastMemberId> {
    async fn exists_by_ids(&self, ids: &[CastMemberId]) -> Result<Vec<CastMemberId>> {
        Ok(self.existing(ids).await)
    }
}
