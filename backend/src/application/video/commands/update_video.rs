use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, info};

use crate::application::ports::{
    CastMemberGateway, CategoryGateway, GenreGateway, MediaResourceGateway, VideoGateway,
};
use crate::application::video::media_upload::upload_media;
use crate::application::video::references::ReferenceValidator;
use crate::application::video::{VideoAttributes, VideoResources};
use crate::domain::{CatalogError, CatalogResult, Video, VideoId};

/// Command to replace the fields of an existing video
#[derive(Debug, Clone, Default)]
pub struct UpdateVideoCommand {
    pub id: String,
    pub attributes: VideoAttributes,
    pub resources: VideoResources,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateVideoOutput {
    pub id: VideoId,
}

/// Applies an update to a stored video.
///
/// Unlike creation, a failed update leaves any freshly uploaded media in the
/// store; media keys are derived from the video id, so the next successful
/// upload for the same slot overwrites them.
pub struct UpdateVideoUseCase {
    video_gateway: Arc<dyn VideoGateway>,
    category_gateway: Arc<dyn CategoryGateway>,
    genre_gateway: Arc<dyn GenreGateway>,
    cast_member_gateway: Arc<dyn CastMemberGateway>,
    media_resource_gateway: Arc<dyn MediaResourceGateway>,
}

impl UpdateVideoUseCase {
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

    pub async fn execute(&self, command: UpdateVideoCommand) -> CatalogResult<UpdateVideoOutput> {
        let id = VideoId::from_string(command.id);

        let mut video = self
            .video_gateway
            .find_by_id(&id)
            .await
            .map_err(|e| CatalogError::internal(failure_message(&id), e))?
            .ok_or_else(|| CatalogError::not_found("Video", &id))?;

        video.update(command.attributes.into_details());

        let notification = video.validate();
        if notification.has_errors() {
            debug!(video_id = %id, errors = %notification, "Rejected invalid video update");
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
            debug!(video_id = %id, errors = %notification, "Rejected video update with unknown references");
            return Err(CatalogError::Validation(notification));
        }

        match self.store(video, command.resources).await {
            Ok(updated) => {
                info!(video_id = %updated.id(), "Video updated");
                Ok(UpdateVideoOutput {
                    id: updated.id().clone(),
                })
            }
            Err(cause) => {
                error!(video_id = %id, error = %cause, "Failed to update video");
                Err(CatalogError::internal(failure_message(&id), cause))
            }
        }
    }

    async fn store(&self, mut video: Video, resources: VideoResources) -> anyhow::Result<Video> {
        upload_media(self.media_resource_gateway.as_ref(), &mut video, resources).await?;
        self.video_gateway.update(video).await
    }
}

fn failure_message(id: &VideoId) -> String {
    format!("An error on update video was observed [videoId:{id}]")
}
