use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Banner or thumbnail stored for a video. Equal on checksum and location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageMedia {
    id: String,
    checksum: String,
    name: String,
    location: String,
}

impl ImageMedia {
    pub fn new(checksum: impl Into<String>, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            checksum: checksum.into(),
            name: name.into(),
            location: location.into(),
        }
    }

    pub fn with(id: String, checksum: String, name: String, location: String) -> Self {
        Self {
            id,
            checksum,
            name,
            location,
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

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl PartialEq for ImageMedia {
    fn eq(&self, other: &Self) -> bool {
        self.checksum == other.checksum && self.location == other.location
    }
}

impl Eq for ImageMedia {}

impl Hash for ImageMedia {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.checksum.hash(state);
        self.location.hash(state);
    }
}
