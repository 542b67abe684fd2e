use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};

use super::video_validator::VideoValidator;
use crate::domain::validation::Notification;
use crate::domain::value_objects::{
    AudioVideoMedia, CastMemberId, CategoryId, GenreId, ImageMedia, Rating, VideoId,
    VideoMediaType,
};

/// Scalar and reference fields of a video, replaced as a whole on update.
///
/// `None` means the field was not supplied; the validator reports it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoDetails {
    pub title: Option<String>,
    pub description: Option<String>,
    pub launched_at: Option<i32>,
    pub duration: f64,
    pub opened: bool,
    pub published: bool,
    pub rating: Option<Rating>,
    pub categories: BTreeSet<CategoryId>,
    pub genres: BTreeSet<GenreId>,
    pub cast_members: BTreeSet<CastMemberId>,
}

/// The five optional media slots, as restored from storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoMedia {
    pub video: Option<AudioVideoMedia>,
    pub trailer: Option<AudioVideoMedia>,
    pub banner: Option<ImageMedia>,
    pub thumbnail: Option<ImageMedia>,
    pub thumbnail_half: Option<ImageMedia>,
}

/// Video aggregate root
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    id: VideoId,
    details: VideoDetails,
    media: VideoMedia,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Video {
    /// Create a new video with a fresh id and no media
    pub fn new(details: VideoDetails) -> Self {
        let now = Utc::now();
        Self {
            id: VideoId::generate(),
            details,
            media: VideoMedia::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a stored video without touching its timestamps
    pub fn from_persistence(
        id: VideoId,
        details: VideoDetails,
        media: VideoMedia,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            details,
            media,
            created_at,
            updated_at,
        }
    }

    /// Replace every scalar and reference field
    pub fn update(&mut self, details: VideoDetails) {
        self.details = details;
        self.touch();
    }

    pub fn set_video(&mut self, media: Option<AudioVideoMedia>) {
        self.media.video = media;
        self.touch();
    }

    pub fn set_trailer(&mut self, media: Option<AudioVideoMedia>) {
        self.media.trailer = media;
        self.touch();
    }

    pub fn set_banner(&mut self, media: Option<ImageMedia>) {
        self.media.banner = media;
        self.touch();
    }

    pub fn set_thumbnail(&mut self, media: Option<ImageMedia>) {
        self.media.thumbnail = media;
        self.touch();
    }

    pub fn set_thumbnail_half(&mut self, media: Option<ImageMedia>) {
        self.media.thumbnail_half = media;
        self.touch();
    }

    /// Mark the audio/video slot of `kind` as being encoded.
    ///
    /// Returns `false` when `kind` is an image slot or the slot is empty.
    pub fn processing(&mut self, kind: VideoMediaType) -> bool {
        self.map_audio_video(kind, AudioVideoMedia::processing)
    }

    /// Mark the audio/video slot of `kind` as encoded at `encoded_location`.
    pub fn completed(&mut self, kind: VideoMediaType, encoded_location: &str) -> bool {
        self.map_audio_video(kind, |media| media.completed(encoded_location))
    }

    fn map_audio_video<F>(&mut self, kind: VideoMediaType, f: F) -> bool
    where
        F: FnOnce(&AudioVideoMedia) -> AudioVideoMedia,
    {
        let slot = match kind {
            VideoMediaType::Video => &mut self.media.video,
            VideoMediaType::Trailer => &mut self.media.trailer,
            _ => return false,
        };
        let Some(current) = slot.as_ref() else {
            return false;
        };
        *slot = Some(f(current));
        self.touch();
        true
    }

    pub fn validate(&self) -> Notification {
        VideoValidator::new(self).validate()
    }

    fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }

    pub fn id(&self) -> &VideoId {
        &self.id
    }

    pub fn details(&self) -> &VideoDetails {
        &self.details
    }

    pub fn title(&self) -> Option<&str> {
        self.details.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.details.description.as_deref()
    }

    pub fn launched_at(&self) -> Option<i32> {
        self.details.launched_at
    }

    pub fn duration(&self) -> f64 {
        self.details.duration
    }

    pub fn opened(&self) -> bool {
        self.details.opened
    }

    pub fn published(&self) -> bool {
        self.details.published
    }

    pub fn rating(&self) -> Option<Rating> {
        self.details.rating
    }

    pub fn categories(&self) -> &BTreeSet<CategoryId> {
        &self.details.categories
    }

    pub fn genres(&self) -> &BTreeSet<GenreId> {
        &self.details.genres
    }

    pub fn cast_members(&self) -> &BTreeSet<CastMemberId> {
        &self.details.cast_members
    }

    pub fn media(&self) -> &VideoMedia {
        &self.media
    }

    pub fn video(&self) -> Option<&AudioVideoMedia> {
        self.media.video.as_ref()
    }

    pub fn trailer(&self) -> Option<&AudioVideoMedia> {
        self.media.trailer.as_ref()
    }

    pub fn banner(&self) -> Option<&ImageMedia> {
        self.media.banner.as_ref()
    }

    pub fn thumbnail(&self) -> Option<&ImageMedia> {
        self.media.thumbnail.as_ref()
    }

    pub fn thumbnail_half(&self) -> Option<&ImageMedia> {
        self.media.thumbnail_half.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
