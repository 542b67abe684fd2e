// Application ports - Driven ports (output ports implemented by infrastructure)

pub mod cast_member_gateway;
pub mod category_gateway;
pub mod genre_gateway;
pub mod media_resource_gateway;
pub mod video_gateway;

pub use cast_member_gateway::CastMemberGateway;
pub use category_gateway::CategoryGateway;
pub use genre_gateway::GenreGateway;
pub use media_resource_gateway::MediaResourceGateway;
pub use video_gateway::VideoGateway;

#[cfg(test)]
pub use cast_member_gateway::MockCastMemberGateway;
#[cfg(test)]
pub use category_gateway::MockCategoryGateway;
#[cfg(test)]
pub use genre_gateway::MockGenreGateway;
#[cfg(test)]
pub use media_resource_gateway::MockMediaResourceGateway;
#[cfg(test)]
pub use video_gateway::MockVideoGateway;
