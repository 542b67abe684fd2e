//! Video catalog back office.
//!
//! Hexagonal layout: `domain` holds the video aggregate and its validation,
//! `application` the use cases and the ports they drive, `infrastructure`
//! the adapters behind those ports and the process driver.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
