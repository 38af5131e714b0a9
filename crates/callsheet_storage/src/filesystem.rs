//! JSON documents on disk.

use async_trait::async_trait;
use callsheet_core::{Episode, PreProductionRecord, StoryBible};
use callsheet_error::{CallsheetResult, StorageError, StorageErrorKind};
use callsheet_interface::ProductionRepository;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Filesystem document store.
///
/// # Layout
///
/// ```text
/// {base_path}/
/// ├── story_bibles/
/// │   └── {story_id}.json
/// ├── episodes/
/// │   └── {story_id}/
/// │       ├── 01.json
/// │       └── 02.json
/// └── pre_production/
///     └── {story_id}/
///         └── 01.json
/// ```
///
/// File names inside the per-story directories are free; records are
/// ordered by their `episodeNumber` field.
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    base_path: PathBuf,
}

impl FileSystemRepository {
    /// Create a store rooted at `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Root directory of the store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn validate_id(story_id: &str) -> Result<(), StorageError> {
        let invalid = story_id.is_empty()
            || story_id.contains(['/', '\\'])
            || story_id == "."
            || story_id == "..";
        if invalid {
            return Err(StorageError::new(StorageErrorKind::InvalidPath(
                story_id.to_string(),
            )));
        }
        Ok(())
    }

    async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(path.display().to_string()))
            } else {
                StorageError::new(StorageErrorKind::Read(format!("{}: {}", path.display(), e)))
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            StorageError::new(StorageErrorKind::Decode(format!("{}: {}", path.display(), e)))
        })
    }

    /// Read every `*.json` document in `dir`. A missing directory is empty.
    async fn read_collection<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>, StorageError> {
        let mut entries = match tokio::fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(dir = %dir.display(), "Collection directory missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::Read(format!(
                    "{}: {}",
                    dir.display(),
                    e
                ))));
            }
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            StorageError::new(StorageErrorKind::Read(format!("{}: {}", dir.display(), e)))
        })? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in &paths {
            documents.push(Self::read_document(path).await?);
        }
        Ok(documents)
    }
}

#[async_trait]
impl ProductionRepository for FileSystemRepository {
    #[tracing::instrument(skip(self), fields(base = %self.base_path.display()))]
    async fn story_bible(&self, story_id: &str) -> CallsheetResult<StoryBible> {
        Self::validate_id(story_id)?;
        let path = self
            .base_path
            .join("story_bibles")
            .join(format!("{story_id}.json"));
        let bible = Self::read_document(&path).await?;
        tracing::debug!(path = %path.display(), "Loaded story bible");
        Ok(bible)
    }

    #[tracing::instrument(skip(self), fields(base = %self.base_path.display()))]
    async fn episodes(&self, story_id: &str) -> CallsheetResult<Vec<Episode>> {
        Self::validate_id(story_id)?;
        let mut episodes: Vec<Episode> =
            Self::read_collection(&self.base_path.join("episodes").join(story_id)).await?;
        episodes.sort_by_key(|e| e.episode_number);
        tracing::debug!(count = episodes.len(), "Loaded episodes");
        Ok(episodes)
    }

    #[tracing::instrument(skip(self), fields(base = %self.base_path.display()))]
    async fn pre_production(&self, story_id: &str) -> CallsheetResult<Vec<PreProductionRecord>> {
        Self::validate_id(story_id)?;
        let mut records: Vec<PreProductionRecord> =
            Self::read_collection(&self.base_path.join("pre_production").join(story_id)).await?;
        records.sort_by_key(|r| r.episode_number);
        tracing::debug!(count = records.len(), "Loaded pre-production records");
        Ok(records)
    }
}
