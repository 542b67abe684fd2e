use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::ports::VideoGateway;
use crate::domain::{
    AudioVideoMedia, CatalogError, CatalogResult, ImageMedia, Video, VideoId,
};

/// Full read view of a video.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoOutput {
    pub id: String,
    pub title: String,
    pub description: String,
    pub launched_at: Option<i32>,
    pub duration: f64,
    pub opened: bool,
    pub published: bool,
    pub rating: Option<String>,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    pub cast_members: Vec<String>,
    pub video: Option<AudioVideoMedia>,
    pub trailer: Option<AudioVideoMedia>,
    pub banner: Option<ImageMedia>,
    pub thumbnail: Option<ImageMedia>,
    pub thumbnail_half: Option<ImageMedia>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Video> for VideoOutput {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id().to_string(),
            title: video.title().unwrap_or_default().to_string(),
            description: video.description().unwrap_or_default().to_string(),
            launched_at: video.launched_at(),
            duration: video.duration(),
            opened: video.opened(),
            published: video.published(),
            rating: video.rating().map(|r| r.name().to_string()),
            categories: video.categories().iter().map(ToString::to_string).collect(),
            genres: video.genres().iter().map(ToString::to_string).collect(),
            cast_members: video.cast_members().iter().map(ToString::to_string).collect(),
            video: video.video().cloned(),
            trailer: video.trailer().cloned(),
            banner: video.banner().cloned(),
            thumbnail: video.thumbnail().cloned(),
            thumbnail_half: video.thumbnail_half().cloned(),
            created_at: video.created_at(),
            updated_at: video.updated_at(),
        }
    }
}

pub struct GetVideoByIdUseCase {
    video_gateway: Arc<dyn VideoGateway>,
}

impl GetVideoByIdUseCase {
    pub fn new(video_gateway: Arc<dyn VideoGateway>) -> Self {
        Self { video_gateway }
    }

    pub async fn execute(&self, id: &str) -> CatalogResult<VideoOutput> {
        let id = VideoId::from_string(id);
        let video = self
            .video_gateway
            .find_by_id(&id)
            .await
            .map_err(|e| CatalogError::internal(format!("An error on get video was observed [videoId:{id}]"), e))?
            .ok_or_else(|| CatalogError::not_found("Video", &id))?;

        Ok(VideoOutput::from(&video))
    }
}
