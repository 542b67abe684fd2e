use std::collections::BTreeSet;

use anyhow::Result;
use serde::Serialize;
use shared::{
    CatalogRequest, CatalogResponse, ErrorKind, ListQuery, MediaPayload, MediaPayloads,
    VideoPayload,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::application::video::commands::{CreateVideoCommand, DeleteVideoCommand, UpdateVideoCommand};
use crate::application::video::queries::GetMediaCommand;
use crate::application::video::{VideoAttributes, VideoResources};
use crate::domain::{
    CastMemberId, CatalogError, CatalogResult, CategoryId, GenreId, Resource, SortDirection,
    SortField, ValidationError, VideoMediaType, VideoSearchQuery,
};
use crate::infrastructure::AppState;

const DEFAULT_PER_PAGE: u32 = 10;

/// Serves one JSON request per input line and writes one JSON response per line.
pub struct JsonLinesHandler {
    state: AppState,
}

impl JsonLinesHandler {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Runs until `reader` reaches end of input.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let response = self.handle_line(&line).await;
            let mut encoded = serde_json::to_vec(&response)?;
            encoded.push(b'\n');
            writer.write_all(&encoded).await?;
            writer.flush().await?;
        }
        Ok(())
    }

    pub async fn handle_line(&self, line: &str) -> CatalogResponse {
        let request: CatalogRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Malformed request line");
                return CatalogResponse::Error {
                    kind: ErrorKind::BadRequest,
                    messages: vec![format!("Malformed request: {e}")],
                };
            }
        };

        match self.dispatch(request).await {
            Ok(response) => response,
            Err(e) => {
                debug!(error = %e, "Request failed");
                error_response(&e)
            }
        }
    }

    async fn dispatch(&self, request: CatalogRequest) -> CatalogResult<CatalogResponse> {
        match request {
            CatalogRequest::CreateVideo { video, media } => {
                let command = CreateVideoCommand {
                    attributes: attributes(video),
                    resources: resources(media),
                };
                let output = self.state.create_video.execute(command).await?;
                Ok(CatalogResponse::Created {
                    id: output.id.to_string(),
                })
            }
            CatalogRequest::UpdateVideo { id, video, media } => {
                let command = UpdateVideoCommand {
                    id,
                    attributes: attributes(video),
                    resources: resources(media),
                };
                let output = self.state.update_video.execute(command).await?;
                Ok(CatalogResponse::Updated {
                    id: output.id.to_string(),
                })
            }
            CatalogRequest::GetVideo { id } => {
                let video = self.state.get_video.execute(&id).await?;
                Ok(CatalogResponse::Video {
                    video: to_json(&video)?,
                })
            }
            CatalogRequest::ListVideos(query) => {
                let page = self.state.list_videos.execute(search_query(query)?).await?;
                Ok(CatalogResponse::Page {
                    page: to_json(&page)?,
                })
            }
            CatalogRequest::DeleteVideo { id } => {
                self.state
                    .delete_video
                    .execute(DeleteVideoCommand { id: id.clone() })
                    .await?;
                Ok(CatalogResponse::Deleted { id })
            }
            CatalogRequest::GetMedia { id, media_type } => {
                let media = self
                    .state
                    .get_media
                    .execute(GetMediaCommand {
                        video_id: id,
                        media_type,
                    })
                    .await?;
                Ok(CatalogResponse::Media {
                    name: media.name,
                    content_type: media.content_type,
                    content: media.content.to_vec(),
                })
            }
        }
    }
}

fn error_response(error: &CatalogError) -> CatalogResponse {
    let kind = match error {
        CatalogError::Validation(_) => ErrorKind::Validation,
        CatalogError::NotFound(_) => ErrorKind::NotFound,
        CatalogError::Internal { .. } => ErrorKind::Internal,
    };
    CatalogResponse::Error {
        kind,
        messages: error.client_messages(),
    }
}

fn to_json<T: Serialize>(value: &T) -> CatalogResult<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|e| CatalogError::internal("An error on encoding the response was observed", e.into()))
}

fn attributes(payload: VideoPayload) -> VideoAttributes {
    VideoAttributes {
        title: payload.title,
        description: payload.description,
        launch_year: payload.launch_year,
        duration: payload.duration,
        opened: payload.opened,
        published: payload.published,
        rating: payload.rating,
        category_ids: payload.categories,
        genre_ids: payload.genres,
        cast_member_ids: payload.cast_members,
    }
}

fn resources(payloads: MediaPayloads) -> VideoResources {
    let resource = |payload: Option<MediaPayload>, kind| {
        payload.map(|p| Resource::new(p.content, p.content_type, p.name, kind))
    };
    VideoResources {
        video: resource(payloads.video, VideoMediaType::Video),
        trailer: resource(payloads.trailer, VideoMediaType::Trailer),
        banner: resource(payloads.banner, VideoMediaType::Banner),
        thumbnail: resource(payloads.thumbnail, VideoMediaType::Thumbnail),
        thumbnail_half: resource(payloads.thumbnail_half, VideoMediaType::ThumbnailHalf),
    }
}

fn search_query(query: ListQuery) -> CatalogResult<VideoSearchQuery> {
    let sort = match query.sort.as_deref() {
        None => SortField::default(),
        Some(value) => SortField::parse(value).ok_or_else(|| invalid(format!("Unknown sort field {value}")))?,
    };
    let direction = match query.direction.as_deref() {
        None => SortDirection::default(),
        Some(value) if value.eq_ignore_ascii_case("asc") => SortDirection::Asc,
        Some(value) if value.eq_ignore_ascii_case("desc") => SortDirection::Desc,
        Some(value) => return Err(invalid(format!("Unknown sort direction {value}"))),
    };

    Ok(VideoSearchQuery {
        page: query.page,
        per_page: query.per_page.unwrap_or(DEFAULT_PER_PAGE),
        terms: query.terms,
        sort,
        direction,
        categories: ids(query.categories, CategoryId::from_string),
        genres: ids(query.genres, GenreId::from_string),
        cast_members: ids(query.cast_members, CastMemberId::from_string),
    })
}

fn ids<Id: Ord>(values: Vec<String>, f: fn(String) -> Id) -> BTreeSet<Id> {
    values.into_iter().map(f).collect()
}

fn invalid(message: String) -> CatalogError {
    CatalogError::Validation([ValidationError::new(message)].into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::application::ports::VideoGateway;
    use crate::domain::{Pagination, Video, VideoId, VideoPreview};
    use crate::infrastructure::driven::{
        DefaultMediaResourceGateway, InMemoryCastMemberGateway, InMemoryCategoryGateway,
        InMemoryGenreGateway, InMemoryStorageService, InMemoryVideoRepository, StorageService,
    };
    use crate::infrastructure::Gateways;

    fn gateways(videos: Arc<dyn VideoGateway>, storage: InMemoryStorageService) -> Gateways {
        Gateways {
            videos,
            categories: Arc::new(InMemoryCategoryGateway::with_ids([CategoryId::from_string("c1")])),
            genres: Arc::new(InMemoryGenreGateway::with_ids([GenreId::from_string("g1")])),
            cast_members: Arc::new(InMemoryCastMemberGateway::new()),
            media: Arc::new(DefaultMediaResourceGateway::new(Arc::new(storage))),
        }
    }

    fn handler(storage: InMemoryStorageService) -> JsonLinesHandler {
        let videos = Arc::new(InMemoryVideoRepository::new());
        JsonLinesHandler::new(AppState::new(gateways(videos, storage)))
    }

    // banner content is base64 of "png bytes"
    fn create_line(title: &str) -> String {
        let banner = "cG5nIGJ5dGVz";
        format!(
            r#"{{"type":"create-video","video":{{"title":"{title}","description":"d","launch_year":2020,"rating":"14","categories":["c1"],"genres":["g1"]}},"media":{{"banner":{{"name":"b.png","content_type":"image/png","content":"{banner}"}}}}}}"#
        )
    }

    fn created_id(response: CatalogResponse) -> String {
        match response {
            CatalogResponse::Created { id } => id,
            other => panic!("unexpected response {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_get_and_fetch_media() {
        let handler = handler(InMemoryStorageService::new());

        let id = created_id(handler.handle_line(&create_line("Rust Belt")).await);

        let video = handler
            .handle_line(&format!(r#"{{"type":"get-video","id":"{id}"}}"#))
            .await;
        let CatalogResponse::Video { video } = video else {
            panic!("expected video");
        };
        assert_eq!(video["title"], "Rust Belt");
        assert_eq!(video["rating"], "14");
        assert_eq!(video["banner"]["location"], format!("videoId-{id}/type-BANNER"));

        let media = handler
            .handle_line(&format!(r#"{{"type":"get-media","id":"{id}","media_type":"banner"}}"#))
            .await;
        let CatalogResponse::Media { content, content_type, .. } = media else {
            panic!("expected media");
        };
        assert_eq!(content, b"png bytes");
        assert_eq!(content_type, "image/png");
    }

    #[tokio::test]
    async fn test_reference_ids_keep_their_case() {
        let handler = handler(InMemoryStorageService::new());

        let response = handler
            .handle_line(r#"{"type":"create-video","video":{"title":"t","description":"d","launch_year":2020,"rating":"L","categories":["AbC","abc","c1"]}}"#)
            .await;

        let CatalogResponse::Error { kind, messages } = response else {
            panic!("expected error");
        };
        assert_eq!(kind, ErrorKind::Validation);
        assert_eq!(messages, vec!["Some categories could not be found: AbC, abc"]);
    }

    #[tokio::test]
    async fn test_validation_errors_are_reported() {
        let handler = handler(InMemoryStorageService::new());

        let response = handler
            .handle_line(r#"{"type":"create-video","video":{"description":"d","launch_year":2020,"rating":"L","cast_members":["m9"]}}"#)
            .await;

        let CatalogResponse::Error { kind, messages } = response else {
            panic!("expected error");
        };
        assert_eq!(kind, ErrorKind::Validation);
        assert_eq!(messages, vec!["'title' should not be null"]);

        let response = handler
            .handle_line(r#"{"type":"create-video","video":{"title":"t","description":"d","launch_year":2020,"rating":"L","cast_members":["m9"]}}"#)
            .await;
        let CatalogResponse::Error { messages, .. } = response else {
            panic!("expected error");
        };
        assert_eq!(messages, vec!["Some cast members could not be found: m9"]);
    }

    #[tokio::test]
    async fn test_update_list_and_delete() {
        let handler = handler(InMemoryStorageService::new());
        let id = created_id(handler.handle_line(&create_line("First")).await);
        created_id(handler.handle_line(&create_line("Second")).await);

        let update = format!(
            r#"{{"type":"update-video","id":"{id}","video":{{"title":"Renamed","description":"d","launch_year":2021,"rating":"L"}}}}"#
        );
        assert!(matches!(
            handler.handle_line(&update).await,
            CatalogResponse::Updated { .. }
        ));

        let page = handler
            .handle_line(r#"{"type":"list-videos","terms":"renamed"}"#)
            .await;
        let CatalogResponse::Page { page } = page else {
            panic!("expected page");
        };
        assert_eq!(page["total"], 1);
        assert_eq!(page["items"][0]["title"], "Renamed");

        handler
            .handle_line(&format!(r#"{{"type":"delete-video","id":"{id}"}}"#))
            .await;
        let missing = handler
            .handle_line(&format!(r#"{{"type":"get-video","id":"{id}"}}"#))
            .await;
        let CatalogResponse::Error { kind, messages } = missing else {
            panic!("expected error");
        };
        assert_eq!(kind, ErrorKind::NotFound);
        assert_eq!(messages, vec![format!("Video with ID {id} was not found")]);
    }

    #[tokio::test]
    async fn test_bad_sort_and_malformed_lines() {
        let handler = handler(InMemoryStorageService::new());

        let bad_sort = handler
            .handle_line(r#"{"type":"list-videos","sort":"rating"}"#)
            .await;
        let malformed = handler.handle_line("{not json").await;

        assert!(matches!(
            bad_sort,
            CatalogResponse::Error { kind: ErrorKind::Validation, .. }
        ));
        assert!(matches!(
            malformed,
            CatalogResponse::Error { kind: ErrorKind::BadRequest, .. }
        ));
    }

    #[tokio::test]
    async fn test_run_writes_one_response_per_line() {
        let handler = handler(InMemoryStorageService::new());
        let input = format!("{}\n\n{}\n", create_line("A"), r#"{"type":"list-videos"}"#);
        let mut output = Vec::new();

        handler.run(input.as_bytes(), &mut output).await.unwrap();

        let lines: Vec<&str> = std::str::from_utf8(&output).unwrap().lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(r#""type":"created""#));
        assert!(lines[1].contains(r#""type":"page""#));
    }

    /// Video store whose writes always fail
    struct FailingVideoGateway;

    #[async_trait]
    impl VideoGateway for FailingVideoGateway {
        async fn create(&self, _video: Video) -> Result<Video> {
            anyhow::bail!("disk full")
        }

        async fn update(&self, _video: Video) -> Result<Video> {
            anyhow::bail!("disk full")
        }

        async fn find_by_id(&self, _id: &VideoId) -> Result<Option<Video>> {
            Ok(None)
        }

        async fn delete_by_id(&self, _id: &VideoId) -> Result<()> {
            Ok(())
        }

        async fn find_all(&self, query: &VideoSearchQuery) -> Result<Pagination<VideoPreview>> {
            Ok(Pagination {
                current_page: query.page,
                per_page: query.per_page,
                total: 0,
                items: vec![],
            })
        }
    }

    #[tokio::test]
    async fn test_failed_create_leaves_no_media_behind() {
        let storage = InMemoryStorageService::new();
        let handler = JsonLinesHandler::new(AppState::new(gateways(
            Arc::new(FailingVideoGateway),
            storage.clone(),
        )));

        let response = handler.handle_line(&create_line("Doomed")).await;

        let CatalogResponse::Error { kind, messages } = response else {
            panic!("expected error");
        };
        assert_eq!(kind, ErrorKind::Internal);
        assert!(messages[0].starts_with("An error on create video was observed [videoId:"));
        assert!(!messages[0].contains("disk full"));
        assert!(storage.list("").await.unwrap().is_empty());
    }
}
