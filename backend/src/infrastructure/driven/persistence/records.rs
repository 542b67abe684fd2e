use chrono::{DateTime, Utc};

use crate::domain::{
    AudioVideoMedia, ImageMedia, Rating, Video, VideoDetails, VideoId, VideoMedia,
};

/// Row of the `videos` table. Media slots hold ids into the media tables.
#[derive(Debug, Clone)]
pub struct VideoRecord {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub year_launched: Option<i32>,
    pub duration: f64,
    pub opened: bool,
    pub published: bool,
    pub rating: Option<String>,
    pub video_id: Option<String>,
    pub trailer_id: Option<String>,
    pub banner_id: Option<String>,
    pub thumbnail_id: Option<String>,
    pub thumbnail_half_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VideoRecord {
    pub fn from_video(video: &Video) -> Self {
        Self {
            id: video.id().to_string(),
            title: video.title().map(str::to_string),
            description: video.description().map(str::to_string),
            year_launched: video.launched_at(),
            duration: video.duration(),
            opened: video.opened(),
            published: video.published(),
            rating: video.rating().map(|r| r.name().to_string()),
            video_id: video.video().map(|m| m.id().to_string()),
            trailer_id: video.trailer().map(|m| m.id().to_string()),
            banner_id: video.banner().map(|m| m.id().to_string()),
            thumbnail_id: video.thumbnail().map(|m| m.id().to_string()),
            thumbnail_half_id: video.thumbnail_half().map(|m| m.id().to_string()),
            created_at: video.created_at(),
            updated_at: video.updated_at(),
        }
    }

    pub fn audio_video_ids(&self) -> impl Iterator<Item = &String> {
        [&self.video_id, &self.trailer_id].into_iter().flatten()
    }

    pub fn image_ids(&self) -> impl Iterator<Item = &String> {
        [&self.banner_id, &self.thumbnail_id, &self.thumbnail_half_id]
            .into_iter()
            .flatten()
    }

    /// Rebuilds the aggregate from this row and its media rows.
    ///
    /// Only the reference sets of `references` are used; they come from the join tables.
    pub fn into_video(
        self,
        references: VideoDetails,
        audio_video: impl Fn(&str) -> Option<AudioVideoMedia>,
        image: impl Fn(&str) -> Option<ImageMedia>,
    ) -> Video {
        let media = VideoMedia {
            video: self.video_id.as_deref().and_then(&audio_video),
            trailer: self.trailer_id.as_deref().and_then(&audio_video),
            banner: self.banner_id.as_deref().and_then(&image),
            thumbnail: self.thumbnail_id.as_deref().and_then(&image),
            thumbnail_half: self.thumbnail_half_id.as_deref().and_then(&image),
        };
        let details = VideoDetails {
            title: self.title,
            description: self.description,
            launched_at: self.year_launched,
            duration: self.duration,
            opened: self.opened,
            published: self.published,
            rating: self.rating.as_deref().and_then(Rating::of),
            ..references
        };
        Video::from_persistence(
            VideoId::from_string(self.id),
            details,
            media,
            self.created_at,
            self.updated_at,
        )
    }
}
