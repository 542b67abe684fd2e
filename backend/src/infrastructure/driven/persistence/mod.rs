mod records;

pub mod catalog_gateways;
pub mod video_repository;

pub use catalog_gateways::{
    InMemoryCastMemberGateway, InMemoryCategoryGateway, InMemoryGenreGateway, InMemoryReferences,
};
pub use video_repository::InMemoryVideoRepository;
