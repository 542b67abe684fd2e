pub mod video;
pub mod video_validator;

pub use video::{Video, VideoDetails, VideoMedia};
pub use video_validator::VideoValidator;
