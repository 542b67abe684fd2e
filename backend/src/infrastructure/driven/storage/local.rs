use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tokio::fs;

use super::StorageService;
use crate::domain::{Resource, VideoMediaType};

const METADATA_SUFFIX: &str = ".meta.json";
const PARTIAL_SUFFIX: &str = ".partial";

/// Sidecar written next to each object's content
#[derive(Debug, Serialize, Deserialize)]
struct ObjectMetadata {
    checksum: String,
    content_type: String,
    name: String,
    kind: VideoMediaType,
}

/// Filesystem-backed object store rooted at a directory.
///
/// An object `a/b` is kept as `{root}/a/b` with its metadata in
/// `{root}/a/b.meta.json`. The sidecar is written first and the content is
/// renamed into place last, so a half-finished store reads as absent.
pub struct LocalStorageService {
    root: PathBuf,
}

impl LocalStorageService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn content_path(&self, name: &str) -> Result<PathBuf> {
        let relative = Path::new(name);
        if name.is_empty()
            || name.ends_with(METADATA_SUFFIX)
            || name.ends_with(PARTIAL_SUFFIX)
            || !relative.components().all(|c| matches!(c, Component::Normal(_)))
        {
            bail!("Invalid object name: {name}");
        }
        Ok(self.root.join(relative))
    }

    fn metadata_path(content_path: &Path) -> PathBuf {
        with_suffix(content_path, METADATA_SUFFIX)
    }

    fn object_name(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<&str> = relative
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut path = path.as_os_str().to_owned();
    path.push(suffix);
    PathBuf::from(path)
}

async fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Failed to delete {}", path.display())),
    }
}

#[async_trait]
impl StorageService for LocalStorageService {
    async fn store(&self, name: &str, resource: &Resource) -> Result<()> {
        let path = self.content_path(name)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let metadata = ObjectMetadata {
            checksum: resource.checksum().to_string(),
            content_type: resource.content_type().to_string(),
            name: resource.name().to_string(),
            kind: resource.kind(),
        };
        fs::write(Self::metadata_path(&path), serde_json::to_vec(&metadata)?)
            .await
            .with_context(|| format!("Failed to write metadata for {name}"))?;

        let partial = with_suffix(&path, PARTIAL_SUFFIX);
        fs::write(&partial, resource.content())
            .await
            .with_context(|| format!("Failed to write {}", partial.display()))?;
        fs::rename(&partial, &path)
            .await
            .with_context(|| format!("Failed to move {} into place", path.display()))?;

        tracing::debug!(object = %name, bytes = resource.content().len(), "Stored object");
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<Resource>> {
        let path = self.content_path(name)?;
        let content = match fs::read(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("Failed to read {}", path.display())),
        };
        let raw = fs::read(Self::metadata_path(&path))
            .await
            .with_context(|| format!("Missing metadata for {name}"))?;
        let metadata: ObjectMetadata = serde_json::from_slice(&raw)
            .with_context(|| format!("Corrupt metadata for {name}"))?;

        Ok(Some(Resource::with_checksum(
            metadata.checksum,
            Bytes::from(content),
            metadata.content_type,
            metadata.name,
            metadata.kind,
        )))
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let mut entries = match fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(e).with_context(|| format!("Failed to list {}", dir.display())),
            };
            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                if entry.file_type().await?.is_dir() {
                    pending.push(path);
                    continue;
                }
                if let Some(name) = self.object_name(&path) {
                    if !name.ends_with(METADATA_SUFFIX)
                        && !name.ends_with(PARTIAL_SUFFIX)
                        && name.starts_with(prefix)
                    {
                        names.push(name);
                    }
                }
            }
        }

        names.sort();
        Ok(names)
    }

    async fn delete_all(&self, names: &[String]) -> Result<()> {
        for name in names {
            let path = self.content_path(name)?;
            remove_if_exists(&path).await?;
            remove_if_exists(&Self::metadata_path(&path)).await?;
        }
        Ok(())
    }
}
