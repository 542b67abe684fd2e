use super::media_status::MediaStatus;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Encodable media (main video or trailer) stored for a video.
///
/// Two values are equal when they point at the same content in the same raw
/// location; `id`, `name` and the encoding fields do not take part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioVideoMedia {
    id: String,
    checksum: String,
    name: String,
    raw_location: String,
    encoded_location: String,
    status: MediaStatus,
}

impl AudioVideoMedia {
    /// Freshly uploaded media, waiting for encoding.
    pub fn new(checksum: impl Into<String>, name: impl Into<String>, raw_location: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            checksum: checksum.into(),
            name: name.into(),
            raw_location: raw_location.into(),
            encoded_location: String::new(),
            status: MediaStatus::Pending,
        }
    }

    pub fn with(
        id: String,
        checksum: String,
        name: String,
        raw_location: String,
        encoded_location: String,
        status: MediaStatus,
    ) -> Self {
        Self {
            id,
            checksum,
            name,
            raw_location,
            encoded_location,
            status,
        }
    }

    pub fn processing(&self) -> Self {
        Self {
            status: MediaStatus::Processing,
            ..self.clone()
        }
    }

    pub fn completed(&self, encoded_location: impl Into<String>) -> Self {
        Self {
            encoded_location: encoded_location.into(),
            status: MediaStatus::Completed,
            ..self.clone()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_location(&self) -> &str {
        &self.raw_location
    }

    pub fn encoded_location(&self) -> &str {
        &self.encoded_location
    }

    pub fn status(&self) -> MediaStatus {
        self.status
    }
}

impl PartialEq for AudioVideoMedia {
    fn eq(&self, other: &Self) -> bool {
        self.checksum == other.checksum && self.raw_location == other.raw_location
    }
}

impl Eq for AudioVideoMedia {}

impl Hash for AudioVideoMedia {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.checksum.hash(state);
        self.raw_location.hash(state);
    }
}
