// Video queries

pub mod get_media;
pub mod get_video;
pub mod list_videos;

pub use get_media::{GetMediaCommand, GetMediaUseCase, MediaOutput};
pub use get_video::{GetVideoByIdUseCase, VideoOutput};
pub use list_videos::ListVideosUseCase;
