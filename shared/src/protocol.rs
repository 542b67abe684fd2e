use serde::{Deserialize, Serialize};

/// Requests read by the catalog process, one JSON object per line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CatalogRequest {
    /// Register a new video with optional media
    CreateVideo {
        video: VideoPayload,
        #[serde(default)]
        media: MediaPayloads,
    },
    /// Replace the fields of an existing video
    UpdateVideo {
        id: String,
        video: VideoPayload,
        #[serde(default)]
        media: MediaPayloads,
    },
    GetVideo {
        id: String,
    },
    ListVideos(ListQuery),
    DeleteVideo {
        id: String,
    },
    /// Fetch one stored media object of a video
    GetMedia {
        id: String,
        media_type: String,
    },
}

/// Video fields as sent by a client. Missing fields are reported by validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub launch_year: Option<i32>,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub opened: bool,
    #[serde(default)]
    pub published: bool,
    pub rating: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub cast_members: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaPayloads {
    pub video: Option<MediaPayload>,
    pub trailer: Option<MediaPayload>,
    pub banner: Option<MediaPayload>,
    pub thumbnail: Option<MediaPayload>,
    pub thumbnail_half: Option<MediaPayload>,
}

/// One binary upload, base64 encoded on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaPayload {
    pub name: String,
    pub content_type: String,
    #[serde(with = "base64_serde")]
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub page: u32,
    pub per_page: Option<u32>,
    #[serde(default)]
    pub terms: String,
    pub sort: Option<String>,
    pub direction: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub cast_members: Vec<String>,
}

/// Responses written by the catalog process, one JSON object per line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CatalogResponse {
    Created {
        id: String,
    },
    Updated {
        id: String,
    },
    Deleted {
        id: String,
    },
    Video {
        video: serde_json::Value,
    },
    Page {
        page: serde_json::Value,
    },
    Media {
        name: String,
        content_type: String,
        #[serde(with = "base64_serde")]
        content: Vec<u8>,
    },
    /// Request failed; `messages` is safe to show to end users
    Error {
        kind: ErrorKind,
        messages: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// The line could not be parsed as a request
    BadRequest,
    Validation,
    NotFound,
    Internal,
}

/// Helper module for base64 encoding/decoding with serde
mod base64_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use base64::{engine::general_purpose::STANDARD, Engine};
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use base64::{engine::general_purpose::STANDARD, Engine};
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}
