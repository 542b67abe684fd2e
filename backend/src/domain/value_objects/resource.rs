use super::media_type::VideoMediaType;
use crate::domain::hashing;
use bytes::Bytes;

/// Binary payload handed to the media store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    checksum: String,
    content: Bytes,
    content_type: String,
    name: String,
    kind: VideoMediaType,
}

impl Resource {
    /// Builds a resource and computes its checksum from `content`.
    pub fn new(
        content: impl Into<Bytes>,
        content_type: impl Into<String>,
        name: impl Into<String>,
        kind: VideoMediaType,
    ) -> Self {
        let content = content.into();
        Self {
            checksum: hashing::checksum(&content),
            content,
            content_type: content_type.into(),
            name: name.into(),
            kind,
        }
    }

    /// Rebuilds a resource read back from storage, trusting the stored checksum.
    pub fn with_checksum(
        checksum: String,
        content: Bytes,
        content_type: String,
        name: String,
        kind: VideoMediaType,
    ) -> Self {
        Self {
            checksum,
            content,
            content_type,
            name,
            kind,
        }
    }

    /// The same payload filed under another media slot.
    pub fn with_kind(self, kind: VideoMediaType) -> Self {
        Self { kind, ..self }
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> VideoMediaType {
        self.kind
    }
}
