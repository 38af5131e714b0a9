//! Provider and persistence traits.

use async_trait::async_trait;
use callsheet_core::{Episode, GenerateRequest, GenerateResponse, PreProductionRecord, StoryBible};
use callsheet_error::CallsheetResult;
use std::sync::Arc;

/// Core trait that all generation providers must implement.
///
/// A provider receives a system prompt, a user prompt and sampling
/// parameters, and returns raw text. The text may or may not contain a
/// fenced JSON block and may be malformed; callers handle both.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Generate text for a request.
    async fn generate(&self, req: &GenerateRequest) -> CallsheetResult<GenerateResponse>;

    /// Provider name (e.g., "openai", "ollama").
    fn provider_name(&self) -> &'static str;

    /// Model identifier used when a request carries no override.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: GenerationDriver + ?Sized> GenerationDriver for Arc<T> {
    async fn generate(&self, req: &GenerateRequest) -> CallsheetResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Read access to the production document store.
///
/// The pipeline never writes; persisting the bundle is the caller's job.
#[async_trait]
pub trait ProductionRepository: Send + Sync {
    /// Load a story bible by id.
    async fn story_bible(&self, story_id: &str) -> CallsheetResult<StoryBible>;

    /// Load every episode of a story, ordered by episode number.
    async fn episodes(&self, story_id: &str) -> CallsheetResult<Vec<Episode>>;

    /// Load every pre-production record of a story, ordered by episode number.
    ///
    /// Stories without pre-production return an empty list.
    async fn pre_production(&self, story_id: &str) -> CallsheetResult<Vec<PreProductionRecord>>;
}
