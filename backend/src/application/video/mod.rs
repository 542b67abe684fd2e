// Video use cases - create/update orchestration plus reads and deletes

pub mod commands;
pub mod input;
pub mod media_upload;
pub mod queries;
pub mod references;

pub use input::VideoAttributes;
pub use media_upload::VideoResources;

#[cfg(test)]
pub(crate) mod test_support;
