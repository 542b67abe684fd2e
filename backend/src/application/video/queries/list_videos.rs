use std::sync::Arc;

use crate::application::ports::VideoGateway;
use crate::domain::{CatalogError, CatalogResult, Pagination, VideoPreview, VideoSearchQuery};

pub struct ListVideosUseCase {
    video_gateway: Arc<dyn VideoGateway>,
}

impl ListVideosUseCase {
    pub fn new(video_gateway: Arc<dyn VideoGateway>) -> Self {
        Self { video_gateway }
    }

    pub async fn execute(&self, query: VideoSearchQuery) -> CatalogResult<Pagination<VideoPreview>> {
        self.video_gateway
            .find_all(&query)
            .await
            .map_err(|e| CatalogError::internal("An error on list videos was observed", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockVideoGateway;
    use crate::domain::aggregates::video::fixtures;

    #[tokio::test]
    async fn test_list_passes_query_through() {
        let preview = VideoPreview::from(&fixtures::video());
        let page = Pagination {
            current_page: 1,
            per_page: 5,
            total: 6,
            items: vec![preview.clone()],
        };
        let returned = page.clone();

        let mut videos = MockVideoGateway::new();
        videos
            .expect_find_all()
            .times(1)
            .withf(|query: &VideoSearchQuery| query.page == 1 && query.terms == "design")
            .returning(move |_| Ok(returned.clone()));

        let query = VideoSearchQuery {
            page: 1,
            per_page: 5,
            terms: "design".to_string(),
            ..Default::default()
        };
        let result = ListVideosUseCase::new(Arc::new(videos))
            .execute(query)
            .await
            .unwrap();

        assert_eq!(result, page);
    }
}
