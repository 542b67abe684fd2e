use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info};

use super::storage::StorageService;
use crate::application::ports::MediaResourceGateway;
use crate::domain::{AudioVideoMedia, ImageMedia, Resource, VideoId, VideoMediaType};

/// Folder holding every object of a video.
pub fn folder(video_id: &VideoId) -> String {
    format!("videoId-{video_id}/")
}

/// Storage key of one media slot of a video.
pub fn location(video_id: &VideoId, kind: VideoMediaType) -> String {
    format!("{}type-{kind}", folder(video_id))
}

/// Media gateway laid over any [`StorageService`].
pub struct DefaultMediaResourceGateway {
    storage: Arc<dyn StorageService>,
}

impl DefaultMediaResourceGateway {
    pub fn new(storage: Arc<dyn StorageService>) -> Self {
        Self { storage }
    }

    async fn store(&self, video_id: &VideoId, resource: &Resource) -> Result<String> {
        let key = location(video_id, resource.kind());
        self.storage.store(&key, resource).await?;
        debug!(video_id = %video_id, kind = %resource.kind(), checksum = %resource.checksum(), "Stored media");
        Ok(key)
    }
}

#[async_trait]
impl MediaResourceGateway for DefaultMediaResourceGateway {
    async fn store_audio_video(&self, video_id: &VideoId, resource: &Resource) -> Result<AudioVideoMedia> {
        let key = self.store(video_id, resource).await?;
        Ok(AudioVideoMedia::new(resource.checksum(), resource.name(), key))
    }

    async fn store_image(&self, video_id: &VideoId, resource: &Resource) -> Result<ImageMedia> {
        let key = self.store(video_id, resource).await?;
        Ok(ImageMedia::new(resource.checksum(), resource.name(), key))
    }

    async fn get_resource(&self, video_id: &VideoId, kind: VideoMediaType) -> Result<Option<Resource>> {
        self.storage.get(&location(video_id, kind)).await
    }

    async fn clean_resources(&self, video_id: &VideoId) -> Result<()> {
        let names = self.storage.list(&folder(video_id)).await?;
        if names.is_empty() {
            return Ok(());
        }
        self.storage.delete_all(&names).await?;
        info!(video_id = %video_id, objects = names.len(), "Removed media");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MediaStatus;
    use crate::infrastructure::driven::storage::InMemoryStorageService;
    use proptest::prelude::*;

    fn gateway() -> (DefaultMediaResourceGateway, InMemoryStorageService) {
        let storage = InMemoryStorageService::new();
        (DefaultMediaResourceGateway::new(Arc::new(storage.clone())), storage)
    }

    fn resource(content: &'static [u8], kind: VideoMediaType) -> Resource {
        Resource::new(content, "application/octet-stream", format!("{kind}.bin"), kind)
    }

    #[tokio::test]
    async fn test_store_audio_video_returns_pending_media() {
        let (gateway, _) = gateway();
        let id = VideoId::from_string("abc");
        let resource = resource(b"frames", VideoMediaType::Video);

        let media = gateway.store_audio_video(&id, &resource).await.unwrap();

        assert_eq!(media.raw_location(), "videoId-abc/type-VIDEO");
        assert_eq!(media.encoded_location(), "");
        assert_eq!(media.status(), MediaStatus::Pending);
        assert_eq!(media.checksum(), resource.checksum());
        assert_eq!(media.name(), "VIDEO.bin");
    }

    #[tokio::test]
    async fn test_store_then_get_round_trip() {
        let (gateway, _) = gateway();
        let id = VideoId::from_string("abc");
        let banner = resource(b"png", VideoMediaType::Banner);

        let media = gateway.store_image(&id, &banner).await.unwrap();
        let stored = gateway
            .get_resource(&id, VideoMediaType::Banner)
            .await
            .unwrap();

        assert_eq!(media.location(), "videoId-abc/type-BANNER");
        assert_eq!(stored, Some(banner));
        assert!(gateway
            .get_resource(&id, VideoMediaType::Thumbnail)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_second_store_overwrites() {
        let (gateway, storage) = gateway();
        let id = VideoId::from_string("abc");

        gateway
            .store_audio_video(&id, &resource(b"one", VideoMediaType::Trailer))
            .await
            .unwrap();
        gateway
            .store_audio_video(&id, &resource(b"two", VideoMediaType::Trailer))
            .await
            .unwrap();

        let stored = gateway
            .get_resource(&id, VideoMediaType::Trailer)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.content().as_ref(), b"two");
        assert_eq!(storage.list("").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clean_resources_only_touches_one_video() {
        let (gateway, storage) = gateway();
        let first = VideoId::from_string("1");
        let second = VideoId::from_string("12");
        for kind in VideoMediaType::ALL {
            gateway.store_image(&first, &resource(b"x", kind)).await.unwrap();
        }
        gateway
            .store_image(&second, &resource(b"y", VideoMediaType::Banner))
            .await
            .unwrap();

        gateway.clean_resources(&first).await.unwrap();
        gateway.clean_resources(&first).await.unwrap();

        assert_eq!(
            storage.list("").await.unwrap(),
            vec!["videoId-12/type-BANNER"]
        );
    }

    #[tokio::test]
    async fn test_clean_resources_for_empty_id_is_noop() {
        let (gateway, storage) = gateway();
        let id = VideoId::from_string("abc");
        gateway
            .store_image(&id, &resource(b"x", VideoMediaType::Thumbnail))
            .await
            .unwrap();

        gateway.clean_resources(&VideoId::from_string("")).await.unwrap();

        assert_eq!(storage.list("").await.unwrap().len(), 1);
    }

    proptest! {
        #[test]
        fn location_is_inside_folder(raw in "[a-z0-9]{1,32}") {
            let id = VideoId::from_string(raw);
            for kind in VideoMediaType::ALL {
                let key = location(&id, kind);
                prop_assert!(key.starts_with(&folder(&id)));
                prop_assert!(key.ends_with(kind.name()));
            }
        }

        #[test]
        fn locations_differ_per_kind(raw in "[a-z0-9]{1,32}") {
            let id = VideoId::from_string(raw);
            let keys: std::collections::BTreeSet<_> =
                VideoMediaType::ALL.into_iter().map(|kind| location(&id, kind)).collect();
            prop_assert_eq!(keys.len(), VideoMediaType::ALL.len());
        }
    }
}
