use anyhow::Result;

use crate::application::ports::MediaResourceGateway;
use crate::domain::{AudioVideoMedia, ImageMedia, Resource, Video, VideoId, VideoMediaType};

/// Optional upload payloads, one per media slot.
#[derive(Debug, Clone, Default)]
pub struct VideoResources {
    pub video: Option<Resource>,
    pub trailer: Option<Resource>,
    pub banner: Option<Resource>,
    pub thumbnail: Option<Resource>,
    pub thumbnail_half: Option<Resource>,
}

/// Uploads every present resource concurrently and attaches the results.
///
/// Slots without a resource keep whatever media the video already has.
pub async fn upload_media(
    gateway: &dyn MediaResourceGateway,
    video: &mut Video,
    resources: VideoResources,
) -> Result<()> {
    let id = video.id().clone();

    let (main, trailer, banner, thumbnail, thumbnail_half) = tokio::try_join!(
        store_audio_video(gateway, &id, resources.video, VideoMediaType::Video),
        store_audio_video(gateway, &id, resources.trailer, VideoMediaType::Trailer),
        store_image(gateway, &id, resources.banner, VideoMediaType::Banner),
        store_image(gateway, &id, resources.thumbnail, VideoMediaType::Thumbnail),
        store_image(gateway, &id, resources.thumbnail_half, VideoMediaType::ThumbnailHalf),
    )?;

    if main.is_some() {
        video.set_video(main);
    }
    if trailer.is_some() {
        video.set_trailer(trailer);
    }
    if banner.is_some() {
        video.set_banner(banner);
    }
    if thumbnail.is_some() {
        video.set_thumbnail(thumbnail);
    }
    if thumbnail_half.is_some() {
        video.set_thumbnail_half(thumbnail_half);
    }

    Ok(())
}

async fn store_audio_video(
    gateway: &dyn MediaResourceGateway,
    id: &VideoId,
    resource: Option<Resource>,
    kind: VideoMediaType,
) -> Result<Option<AudioVideoMedia>> {
    match resource {
        Some(resource) => {
            let media = gateway.store_audio_video(id, &resource.with_kind(kind)).await?;
            Ok(Some(media))
        }
        None => Ok(None),
    }
}

async fn store_image(
    gateway: &dyn MediaResourceGateway,
    id: &VideoId,
    resource: Option<Resource>,
    kind: VideoMediaType,
) -> Result<Option<ImageMedia>> {
    match resource {
        Some(resource) => {
            let media = gateway.store_image(id, &resource.with_kind(kind)).await?;
            Ok(Some(media))
        }
        None => Ok(None),
    }
}
