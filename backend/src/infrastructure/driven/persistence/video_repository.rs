use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::records::VideoRecord;
use crate::application::ports::VideoGateway;
use crate::domain::{
    AudioVideoMedia, CastMemberId, CategoryId, GenreId, ImageMedia, Pagination, SortDirection,
    SortField, Video, VideoDetails, VideoId, VideoPreview, VideoSearchQuery,
};

/// Relational layout kept in memory: one row table, three join tables and
/// two media tables.
#[derive(Default)]
struct Tables {
    videos: HashMap<String, VideoRecord>,
    video_categories: BTreeSet<(String, CategoryId)>,
    video_genres: BTreeSet<(String, GenreId)>,
    video_cast_members: BTreeSet<(String, CastMemberId)>,
    audio_video_media: HashMap<String, AudioVideoMedia>,
    image_media: HashMap<String, ImageMedia>,
}

impl Tables {
    fn insert(&mut self, video: &Video) {
        let key = video.id().to_string();
        for id in video.categories() {
            self.video_categories.insert((key.clone(), id.clone()));
        }
        for id in video.genres() {
            self.video_genres.insert((key.clone(), id.clone()));
        }
        for id in video.cast_members() {
            self.video_cast_members.insert((key.clone(), id.clone()));
        }
        for media in [video.video(), video.trailer()].into_iter().flatten() {
            self.audio_video_media.insert(media.id().to_string(), media.clone());
        }
        for media in [video.banner(), video.thumbnail(), video.thumbnail_half()]
            .into_iter()
            .flatten()
        {
            self.image_media.insert(media.id().to_string(), media.clone());
        }
        self.videos.insert(key, VideoRecord::from_video(video));
    }

    /// Removes join rows and media rows owned by a video, leaving its row.
    fn delete_children(&mut self, key: &str) {
        self.video_categories.retain(|(video, _)| video != key);
        self.video_genres.retain(|(video, _)| video != key);
        self.video_cast_members.retain(|(video, _)| video != key);

        if let Some(record) = self.videos.get(key) {
            for id in record.audio_video_ids() {
                self.audio_video_media.remove(id);
            }
            for id in record.image_ids() {
                self.image_media.remove(id);
            }
        }
    }

    fn load(&self, key: &str) -> Option<Video> {
        let record = self.videos.get(key)?.clone();

        let references = VideoDetails {
            categories: joined(&self.video_categories, key),
            genres: joined(&self.video_genres, key),
            cast_members: joined(&self.video_cast_members, key),
            ..VideoDetails::default()
        };
        Some(record.into_video(
            references,
            |id| self.audio_video_media.get(id).cloned(),
            |id| self.image_media.get(id).cloned(),
        ))
    }
}

fn joined<Id: Ord + Clone>(table: &BTreeSet<(String, Id)>, key: &str) -> BTreeSet<Id> {
    table
        .iter()
        .filter(|(video, _)| video == key)
        .map(|(_, id)| id.clone())
        .collect()
}

fn matches_query(video: &Video, query: &VideoSearchQuery) -> bool {
    let terms = query.terms.trim().to_lowercase();
    let title_matches = terms.is_empty()
        || video
            .title()
            .is_some_and(|title| title.to_lowercase().contains(&terms));

    title_matches
        && intersects(&query.categories, video.categories())
        && intersects(&query.genres, video.genres())
        && intersects(&query.cast_members, video.cast_members())
}

fn intersects<Id: Ord>(filter: &BTreeSet<Id>, values: &BTreeSet<Id>) -> bool {
    filter.is_empty() || !filter.is_disjoint(values)
}

// Ties fall back to the id so pages stay stable across calls.
fn compare(a: &VideoPreview, b: &VideoPreview, sort: SortField) -> Ordering {
    let ordering = match sort {
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    };
    ordering.then_with(|| a.id.cmp(&b.id))
}

/// Video store that keeps rows and join tables in process memory
#[derive(Clone, Default)]
pub struct InMemoryVideoRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoGateway for InMemoryVideoRepository {
    async fn create(&self, video: Video) -> Result<Video> {
        let mut tables = self.tables.write().await;
        if tables.videos.contains_key(video.id().as_str()) {
            bail!("Video {} already exists", video.id());
        }
        tables.insert(&video);
        Ok(video)
    }

    async fn update(&self, video: Video) -> Result<Video> {
        let mut tables = self.tables.write().await;
        let key = video.id().as_str();
        if !tables.videos.contains_key(key) {
            bail!("Video {key} does not exist");
        }
        tables.delete_children(key);
        tables.insert(&video);
        Ok(video)
    }

    async fn find_by_id(&self, id: &VideoId) -> Result<Option<Video>> {
        let tables = self.tables.read().await;
        Ok(tables.load(id.as_str()))
    }

    async fn delete_by_id(&self, id: &VideoId) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.delete_children(id.as_str());
        tables.videos.remove(id.as_str());
        Ok(())
    }

    async fn find_all(&self, query: &VideoSearchQuery) -> Result<Pagination<VideoPreview>> {
        let tables = self.tables.read().await;

        let mut previews: Vec<VideoPreview> = tables
            .videos
            .keys()
            .filter_map(|key| tables.load(key))
            .filter(|video| matches_query(video, query))
            .map(|video| VideoPreview::from(&video))
            .collect();

        previews.sort_by(|a, b| {
            let ordering = compare(a, b, query.sort);
            match query.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let total = previews.len() as u64;
        let skip = query.page as usize * query.per_page as usize;
        let items = previews
            .into_iter()
            .skip(skip)
            .take(query.per_page as usize)
            .collect();

        Ok(Pagination {
            current_page: query.page,
            per_page: query.per_page,
            total,
            items,
        })
    }
}
