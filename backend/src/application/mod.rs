// Application layer - use cases over the video aggregate
// Orchestrates domain logic, depends on domain layer only

pub mod ports;
pub mod video;
