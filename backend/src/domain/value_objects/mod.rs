pub mod audio_video_media;
pub mod identifiers;
pub mod image_media;
pub mod media_status;
pub mod media_type;
pub mod rating;
pub mod resource;

pub use audio_video_media::AudioVideoMedia;
pub use identifiers::{CastMemberId, CategoryId, GenreId, VideoId};
pub use image_media::ImageMedia;
pub use media_status::MediaStatus;
pub use media_type::VideoMediaType;
pub use rating::Rating;
pub use resource::Resource;
