use crate::domain::{CastMemberId, CategoryId, GenreId, Rating, VideoDetails};

/// Raw video fields as received from a caller.
///
/// Ids are plain strings and the rating is a symbol; both are typed on the way
/// into the aggregate. An unknown rating symbol becomes a missing rating.
#[derive(Debug, Clone, Default)]
pub struct VideoAttributes {
    pub title: Option<String>,
    pub description: Option<String>,
    pub launch_year: Option<i32>,
    pub duration: f64,
    pub opened: bool,
    pub published: bool,
    pub rating: Option<String>,
    pub category_ids: Vec<String>,
    pub genre_ids: Vec<String>,
    pub cast_member_ids: Vec<String>,
}

impl VideoAttributes {
    pub fn into_details(self) -> VideoDetails {
        VideoDetails {
            title: self.title,
            description: self.description,
            launched_at: self.launch_year,
            duration: self.duration,
            opened: self.opened,
            published: self.published,
            rating: self.rating.as_deref().and_then(Rating::of),
            categories: self.category_ids.into_iter().map(CategoryId::from_string).collect(),
            genres: self.genre_ids.into_iter().map(GenreId::from_string).collect(),
            cast_members: self
                .cast_member_ids
                .into_iter()
                .map(CastMemberId::from_string)
                .collect(),
        }
    }
}
