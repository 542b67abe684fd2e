use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Process settings, layered from `config/default.toml` then `CATALOG__*` env vars.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub log: LogSettings,
    pub storage: StorageSettings,
    #[serde(default)]
    pub references: ReferenceSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    pub filter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Local,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    pub root: PathBuf,
}

/// Ids the in-memory category, genre and cast member registries start with.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReferenceSettings {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub cast_members: Vec<String>,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from("config/default")
    }

    pub fn load_from(file: &str) -> Result<Self> {
        Config::builder()
            .set_default("log.filter", "info")?
            .set_default("storage.backend", "memory")?
            .set_default("storage.root", "./storage")?
            .add_source(File::with_name(file).required(false))
            .add_source(
                Environment::with_prefix("CATALOG")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("references.categories")
                    .with_list_parse_key("references.genres")
                    .with_list_parse_key("references.cast_members")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }
}
