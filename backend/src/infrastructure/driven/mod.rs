pub mod media_resource_gateway;
pub mod persistence;
pub mod storage;

pub use media_resource_gateway::DefaultMediaResourceGateway;
pub use persistence::*;
pub use storage::{InMemoryStorageService, LocalStorageService, StorageService};
