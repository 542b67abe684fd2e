// Infrastructure layer - external concerns (storage, persistence, process I/O)
// Implements interfaces defined in application layer

use std::sync::Arc;

use tracing::info;

use crate::application::ports::{
    CastMemberGateway, CategoryGateway, GenreGateway, MediaResourceGateway, VideoGateway,
};
use crate::application::video::commands::{CreateVideoUseCase, DeleteVideoUseCase, UpdateVideoUseCase};
use crate::application::video::queries::{GetMediaUseCase, GetVideoByIdUseCase, ListVideosUseCase};
use crate::config::{Settings, StorageBackend};
use crate::domain::{CastMemberId, CategoryId, GenreId};

pub mod driven; // Output adapters (repositories, external services)
pub mod driving; // Input adapters (CLI, etc.)

use driven::{
    DefaultMediaResourceGateway, InMemoryCastMemberGateway, InMemoryCategoryGateway,
    InMemoryGenreGateway, InMemoryStorageService, InMemoryVideoRepository, LocalStorageService,
    StorageService,
};

/// Gateways the use cases are built from
#[derive(Clone)]
pub struct Gateways {
    pub videos: Arc<dyn VideoGateway>,
    pub categories: Arc<dyn CategoryGateway>,
    pub genres: Arc<dyn GenreGateway>,
    pub cast_members: Arc<dyn CastMemberGateway>,
    pub media: Arc<dyn MediaResourceGateway>,
}

impl Gateways {
    pub fn from_settings(settings: &Settings) -> Self {
        let storage: Arc<dyn StorageService> = match settings.storage.backend {
            StorageBackend::Memory => Arc::new(InMemoryStorageService::new()),
            StorageBackend::Local => Arc::new(LocalStorageService::new(&settings.storage.root)),
        };
        info!(backend = ?settings.storage.backend, root = %settings.storage.root.display(), "Media storage ready");

        let references = &settings.references;
        Self {
            videos: Arc::new(InMemoryVideoRepository::new()),
            categories: Arc::new(InMemoryCategoryGateway::with_ids(
                references.categories.iter().map(|id| CategoryId::from_string(id.as_str())),
            )),
            genres: Arc::new(InMemoryGenreGateway::with_ids(
                references.genres.iter().map(|id| GenreId::from_string(id.as_str())),
            )),
            cast_members: Arc::new(InMemoryCastMemberGateway::with_ids(
                references.cast_members.iter().map(|id| CastMemberId::from_string(id.as_str())),
            )),
            media: Arc::new(DefaultMediaResourceGateway::new(storage)),
        }
    }
}

/// Use cases shared by every driving adapter
#[derive(Clone)]
pub struct AppState {
    pub create_video: Arc<CreateVideoUseCase>,
    pub update_video: Arc<UpdateVideoUseCase>,
    pub get_video: Arc<GetVideoByIdUseCase>,
    pub list_videos: Arc<ListVideosUseCase>,
    pub delete_video: Arc<DeleteVideoUseCase>,
    pub get_media: Arc<GetMediaUseCase>,
}

impl AppState {
    pub fn new(gateways: Gateways) -> Self {
        let Gateways {
            videos,
            categories,
            genres,
            cast_members,
            media,
        } = gateways;

        Self {
            create_video: Arc::new(CreateVideoUseCase::new(
                videos.clone(),
                categories.clone(),
                genres.clone(),
                cast_members.clone(),
                media.clone(),
            )),
            update_video: Arc::new(UpdateVideoUseCase::new(
                videos.clone(),
                categories,
                genres,
                cast_members,
                media.clone(),
            )),
            get_video: Arc::new(GetVideoByIdUseCase::new(videos.clone())),
            list_videos: Arc::new(ListVideosUseCase::new(videos.clone())),
            delete_video: Arc::new(DeleteVideoUseCase::new(videos)),
            get_media: Arc::new(GetMediaUseCase::new(media)),
        }
    }
}
