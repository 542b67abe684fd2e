// Video commands

pub mod create_video;
pub mod delete_video;
pub mod update_video;

pub use create_video::{CreateVideoCommand, CreateVideoOutput, CreateVideoUseCase};
pub use delete_video::{DeleteVideoCommand, DeleteVideoUseCase};
pub use update_video::{UpdateVideoCommand, UpdateVideoOutput, UpdateVideoUseCase};
