// Driven port - video persistence

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{Pagination, Video, VideoId, VideoPreview, VideoSearchQuery};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoGateway: Send + Sync {
    async fn create(&self, video: Video) -> Result<Video>;
    async fn update(&self, video: Video) -> Result<Video>;
    async fn find_by_id(&self, id: &VideoId) -> Result<Option<Video>>;
    /// Removes the video and its reference and media rows. Unknown ids are ignored.
    async fn delete_by_id(&self, id: &VideoId) -> Result<()>;
    async fn find_all(&self, query: &VideoSearchQuery) -> Result<Pagination<VideoPreview>>;
}
