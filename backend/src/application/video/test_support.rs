use std::sync::Arc;

use crate::application::ports::{
    MockCastMemberGateway, MockCategoryGateway, MockGenreGateway, MockMediaResourceGateway,
    MockVideoGateway,
};
use crate::domain::{
    AudioVideoMedia, CastMemberId, CategoryId, GenreId, ImageMedia, Resource, VideoId,
    VideoMediaType,
};

use super::commands::{CreateVideoUseCase, UpdateVideoUseCase};
use super::{VideoAttributes, VideoResources};

/// One mock per port, wired into a use case once expectations are set.
#[derive(Default)]
pub struct Gateways {
    pub videos: MockVideoGateway,
    pub categories: MockCategoryGateway,
    pub genres: MockGenreGateway,
    pub cast_members: MockCastMemberGateway,
    pub media: MockMediaResourceGateway,
}

impl Gateways {
    /// Every reference lookup finds all ids, once per reference set.
    pub fn with_all_references_found(mut self) -> Self {
        self.categories
            .expect_exists_by_ids()
            .times(1)
            .returning(|ids: &[CategoryId]| Ok(ids.to_vec()));
        self.genres
            .expect_exists_by_ids()
            .times(1)
            .returning(|ids: &[GenreId]| Ok(ids.to_vec()));
        self.cast_members
            .expect_exists_by_ids()
            .times(1)
            .returning(|ids: &[CastMemberId]| Ok(ids.to_vec()));
        self
    }

    /// Uploads succeed and return media located the way the real store does.
    pub fn with_uploads(mut self, audio_video: usize, images: usize) -> Self {
        self.media
            .expect_store_audio_video()
            .times(audio_video)
            .returning(|id: &VideoId, resource: &Resource| {
                Ok(AudioVideoMedia::new(
                    resource.checksum(),
                    resource.name(),
                    location(id, resource.kind()),
                ))
            });
        self.media
            .expect_store_image()
            .times(images)
            .returning(|id: &VideoId, resource: &Resource| {
                Ok(ImageMedia::new(
                    resource.checksum(),
                    resource.name(),
                    location(id, resource.kind()),
                ))
            });
        self
    }

    pub fn without_reference_checks(mut self) -> Self {
        self.categories.expect_exists_by_ids().never();
        self.genres.expect_exists_by_ids().never();
        self.cast_members.expect_exists_by_ids().never();
        self
    }

    pub fn without_uploads(mut self) -> Self {
        self.media.expect_store_audio_video().never();
        self.media.expect_store_image().never();
        self
    }

    pub fn without_cleanup(mut self) -> Self {
        self.media.expect_clean_resources().never();
        self
    }

    pub fn into_create(self) -> CreateVideoUseCase {
        CreateVideoUseCase::new(
            Arc::new(self.videos),
            Arc::new(self.categories),
            Arc::new(self.genres),
            Arc::new(self.cast_members),
            Arc::new(self.media),
        )
    }

    pub fn into_update(self) -> UpdateVideoUseCase {
        UpdateVideoUseCase::new(
            Arc::new(self.videos),
            Arc::new(self.categories),
            Arc::new(self.genres),
            Arc::new(self.cast_members),
            Arc::new(self.media),
        )
    }
}

pub fn location(id: &VideoId, kind: VideoMediaType) -> String {
    format!("videoId-{id}/type-{kind}")
}

pub fn resource(kind: VideoMediaType) -> Resource {
    let (content_type, name) = if kind.is_audio_video() {
        ("video/mp4", format!("{}.mp4", kind.name().to_lowercase()))
    } else {
        ("image/png", format!("{}.png", kind.name().to_lowercase()))
    };
    Resource::new(format!("content of {kind}").into_bytes(), content_type, name, kind)
}

pub fn all_resources() -> VideoResources {
    VideoResources {
        video: Some(resource(VideoMediaType::Video)),
        trailer: Some(resource(VideoMediaType::Trailer)),
        banner: Some(resource(VideoMediaType::Banner)),
        thumbnail: Some(resource(VideoMediaType::Thumbnail)),
        thumbnail_half: Some(resource(VideoMediaType::ThumbnailHalf)),
    }
}

pub fn attributes() -> VideoAttributes {
    VideoAttributes {
        title: Some("System Design Interviews".to_string()),
        description: Some("A walkthrough of the questions nobody prepares for".to_string()),
        launch_year: Some(2022),
        duration: 120.10,
        opened: false,
        published: false,
        rating: Some("L".to_string()),
        category_ids: vec!["c1".to_string()],
        genre_ids: vec!["g1".to_string()],
        cast_member_ids: vec!["m1".to_string(), "m2".to_string()],
    }
}
