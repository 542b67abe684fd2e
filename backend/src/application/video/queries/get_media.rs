use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::MediaResourceGateway;
use crate::domain::{CatalogError, CatalogResult, VideoId, VideoMediaType};

#[derive(Debug, Clone)]
pub struct GetMediaCommand {
    pub video_id: String,
    pub media_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaOutput {
    pub content: Bytes,
    pub content_type: String,
    pub name: String,
}

/// Reads back one stored media object of a video.
pub struct GetMediaUseCase {
    media_resource_gateway: Arc<dyn MediaResourceGateway>,
}

impl GetMediaUseCase {
    pub fn new(media_resource_gateway: Arc<dyn MediaResourceGateway>) -> Self {
        Self {
            media_resource_gateway,
        }
    }

    pub async fn execute(&self, command: GetMediaCommand) -> CatalogResult<MediaOutput> {
        let id = VideoId::from_string(command.video_id);
        let kind = VideoMediaType::of(&command.media_type).ok_or_else(|| {
            CatalogError::NotFound(format!("Media type {} doesn't exists", command.media_type))
        })?;

        let resource = self
            .media_resource_gateway
            .get_resource(&id, kind)
            .await
            .map_err(|e| CatalogError::internal(format!("An error on get media was observed [videoId:{id}]"), e))?
            .ok_or_else(|| CatalogError::NotFound(format!("Resource {kind} not found for video {id}")))?;

        Ok(MediaOutput {
            content: resource.content().clone(),
            content_type: resource.content_type().to_string(),
            name: resource.name().to_string(),
        })
    }
}
