use std::sync::Arc;

use tracing::info;

use crate::application::ports::VideoGateway;
use crate::domain::{CatalogError, CatalogResult, VideoId};

#[derive(Debug, Clone)]
pub struct DeleteVideoCommand {
    pub id: String,
}

/// Removes a video. Stored media objects are left untouched.
pub struct DeleteVideoUseCase {
    video_gateway: Arc<dyn VideoGateway>,
}

impl DeleteVideoUseCase {
    pub fn new(video_gateway: Arc<dyn VideoGateway>) -> Self {
        Self { video_gateway }
    }

    pub async fn execute(&self, command: DeleteVideoCommand) -> CatalogResult<()> {
        let id = VideoId::from_string(command.id);
        self.video_gateway.delete_by_id(&id).await.map_err(|e| {
            CatalogError::internal(format!("An error on delete video was observed [videoId:{id}]"), e)
        })?;
        info!(video_id = %id, "Video deleted");
        Ok(())
    }
}
