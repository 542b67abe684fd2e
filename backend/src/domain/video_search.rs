use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::aggregates::Video;
use super::value_objects::{CastMemberId, CategoryId, GenreId, VideoId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortField {
    #[serde(rename = "title")]
    Title,
    #[default]
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "updatedAt")]
    UpdatedAt,
}

impl SortField {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "title" => Some(SortField::Title),
            "createdAt" => Some(SortField::CreatedAt),
            "updatedAt" => Some(SortField::UpdatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Filters for listing videos.
///
/// `page` is zero-based. Empty reference filters match every video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSearchQuery {
    pub page: u32,
    pub per_page: u32,
    pub terms: String,
    pub sort: SortField,
    pub direction: SortDirection,
    pub categories: BTreeSet<CategoryId>,
    pub genres: BTreeSet<GenreId>,
    pub cast_members: BTreeSet<CastMemberId>,
}

impl Default for VideoSearchQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 10,
            terms: String::new(),
            sort: SortField::default(),
            direction: SortDirection::default(),
            categories: BTreeSet::new(),
            genres: BTreeSet::new(),
            cast_members: BTreeSet::new(),
        }
    }
}

/// Summary row returned by listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoPreview {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Video> for VideoPreview {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id().clone(),
            title: video.title().unwrap_or_default().to_string(),
            description: video.description().unwrap_or_default().to_string(),
            created_at: video.created_at(),
            updated_at: video.updated_at(),
        }
    }
}
