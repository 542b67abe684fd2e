// Driven port - binary media storage keyed by (video id, media kind)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{AudioVideoMedia, ImageMedia, Resource, VideoId, VideoMediaType};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaResourceGateway: Send + Sync {
    /// Stores a video or trailer. The returned media is pending encoding.
    async fn store_audio_video(&self, video_id: &VideoId, resource: &Resource) -> Result<AudioVideoMedia>;
    async fn store_image(&self, video_id: &VideoId, resource: &Resource) -> Result<ImageMedia>;
    async fn get_resource(&self, video_id: &VideoId, kind: VideoMediaType) -> Result<Option<Resource>>;
    /// Deletes every object stored for the video. Safe to call repeatedly.
    async fn clean_resources(&self, video_id: &VideoId) -> Result<()>;
}
