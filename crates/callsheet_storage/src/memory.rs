//! In-memory document store.

use async_trait::async_trait;
use callsheet_core::{Episode, PreProductionRecord, StoryBible};
use callsheet_error::{CallsheetResult, StorageError, StorageErrorKind};
use callsheet_interface::ProductionRepository;
use std::collections::HashMap;

/// Documents held in memory, keyed by story id.
///
/// # Examples
///
/// ```
/// use callsheet_core::StoryBible;
/// use callsheet_storage::InMemoryRepository;
///
/// let bible = StoryBible { id: "sb-1".to_string(), ..Default::default() };
/// let repo = InMemoryRepository::new().with_story(bible, vec![], vec![]);
/// assert_eq!(repo.story_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    bibles: HashMap<String, StoryBible>,
    episodes: HashMap<String, Vec<Episode>>,
    pre_production: HashMap<String, Vec<PreProductionRecord>>,
}

impl InMemoryRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a story keyed by its bible's id.
    pub fn with_story(
        mut self,
        bible: StoryBible,
        mut episodes: Vec<Episode>,
        mut pre_production: Vec<PreProductionRecord>,
    ) -> Self {
        episodes.sort_by_key(|e| e.episode_number);
        pre_production.sort_by_key(|r| r.episode_number);
        let id = bible.id.clone();
        self.episodes.insert(id.clone(), episodes);
        self.pre_production.insert(id.clone(), pre_production);
        self.bibles.insert(id, bible);
        self
    }

    /// Number of stories held.
    pub fn story_count(&self) -> usize {
        self.bibles.len()
    }
}

#[async_trait]
impl ProductionRepository for InMemoryRepository {
    async fn story_bible(&self, story_id: &str) -> CallsheetResult<StoryBible> {
        self.bibles
            .get(story_id)
            .cloned()
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(story_id.to_string())).into())
    }

    async fn episodes(&self, story_id: &str) -> CallsheetResult<Vec<Episode>> {
        Ok(self.episodes.get(story_id).cloned().unwrap_or_default())
    }

    async fn pre_production(&self, story_id: &str) -> CallsheetResult<Vec<PreProductionRecord>> {
        Ok(self.pre_production.get(story_id).cloned().unwrap_or_default())
    }
}
