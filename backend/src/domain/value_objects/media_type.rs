use serde::{Deserialize, Serialize};
use std::fmt;

/// The five media slots of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoMediaType {
    Video,
    Trailer,
    Banner,
    Thumbnail,
    ThumbnailHalf,
}

impl VideoMediaType {
    pub const ALL: [VideoMediaType; 5] = [
        VideoMediaType::Video,
        VideoMediaType::Trailer,
        VideoMediaType::Banner,
        VideoMediaType::Thumbnail,
        VideoMediaType::ThumbnailHalf,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VideoMediaType::Video => "VIDEO",
            VideoMediaType::Trailer => "TRAILER",
            VideoMediaType::Banner => "BANNER",
            VideoMediaType::Thumbnail => "THUMBNAIL",
            VideoMediaType::ThumbnailHalf => "THUMBNAIL_HALF",
        }
    }

    pub fn of(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Video and trailer go through encoding; the rest are plain images.
    pub fn is_audio_video(self) -> bool {
        matches!(self, VideoMediaType::Video | VideoMediaType::Trailer)
    }
}

impl fmt::Display for VideoMediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
