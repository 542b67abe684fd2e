// Domain layer - the video aggregate, its value objects and validation
// No dependencies on other layers

pub mod aggregates;
pub mod errors;
pub mod hashing;
pub mod pagination;
pub mod validation;
pub mod value_objects;
pub mod video_search;

pub use aggregates::*;
pub use errors::{CatalogError, CatalogResult};
pub use pagination::Pagination;
pub use validation::{Notification, ValidationError};
pub use value_objects::*;
pub use video_search::{SortDirection, SortField, VideoPreview, VideoSearchQuery};
