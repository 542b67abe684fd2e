use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::application::ports::{
    CastMemberGateway, CategoryGateway, GenreGateway, MediaResourceGateway, VideoGateway,
};
use crate::application::video::media_upload::upload_media;
use crate::application::video::references::ReferenceValidator;
use crate::application::video::{VideoAttributes, VideoResources};
use crate::domain::{CatalogError, CatalogResult, Video, VideoId};

/// Command to register a new video with optional media
#[derive(Debug, Clone, Default)]
pub struct CreateVideoCommand {
    pub attributes: VideoAttributes,
    pub resources: VideoResources,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateVideoOutput {
    pub id: VideoId,
}

/// Validates, uploads media and persists a new video.
///
/// If persisting fails after media was uploaded, the uploaded objects are
/// removed before the error is returned.
pub struct CreateVideoUseCase {
    video_gateway: Arc<dyn VideoGateway>,
    category_gateway: Arc<dyn CategoryGateway>,
    genre_gateway: Arc<dyn GenreGateway>,
    cast_member_gateway: Arc<dyn CastMemberGateway>,
    media_resource_gateway: Arc<dyn MediaResourceGateway>,
}

impl CreateVideoUseCase {
    pub fn new(
        video_gateway: Arc<dyn VideoGateway>,
        category_gateway: Arc<dyn CategoryGateway>,
        genre_gateway: Arc<dyn GenreGateway>,
        cast_member_gateway: Arc<dyn CastMemberGateway>,
        media_resource_gateway: Arc<dyn MediaResourceGateway>,
    ) -> Self {
        Self {
            video_gateway,
            category_gateway,
            genre_gateway,
            cast_member_gateway,
            media_resource_gateway,
        }
    }

    pub async fn execute(&self, command: CreateVideoCommand) -> CatalogResult<CreateVideoOutput> {
        let video = Video::new(command.attributes.into_details());
        let id = video.id().clone();

        let notification = video.validate();
        if notification.has_errors() {
            debug!(video_id = %id, errors = %notification, "Rejected invalid video");
            return Err(CatalogError::Validation(notification));
        }

        let references = ReferenceValidator {
            categories: self.category_gateway.as_ref(),
            genres: self.genre_gateway.as_ref(),
            cast_members: self.cast_member_gateway.as_ref(),
        };
        let notification = references
            .validate(&video)
            .await
            .map_err(|e| CatalogError::internal(failure_message(&id), e))?;
        if notification.has_errors() {
            debug!(video_id = %id, errors = %notification, "Rejected video with unknown references");
            return Err(CatalogError::Validation(notification));
        }

        match self.store(video, command.resources).await {
            Ok(created) => {
                info!(video_id = %created.id(), "Video created");
                Ok(CreateVideoOutput {
                    id: created.id().clone(),
                })
            }
            Err(cause) => {
                error!(video_id = %id, error = %cause, "Failed to create video");
                self.clean_resources(&id).await;
                Err(CatalogError::internal(failure_message(&id), cause))
            }
        }
    }

    async fn store(&self, mut video: Video, resources: VideoResources) -> anyhow::Result<Video> {
        upload_media(self.media_resource_gateway.as_ref(), &mut video, resources).await?;
        self.video_gateway.create(video).await
    }

    async fn clean_resources(&self, id: &VideoId) {
        warn!(video_id = %id, "Removing media uploaded for failed video");
        if let Err(e) = self.media_resource_gateway.clean_resources(id).await {
            error!(video_id = %id, error = %e, "Failed to remove uploaded media");
        }
    }
}

fn failure_message(id: &VideoId) -> String {
    format!("An error on create video was observed [videoId:{id}]")
}
