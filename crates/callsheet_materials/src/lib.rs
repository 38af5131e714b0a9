//! Actor-materials generation engine for Callsheet.
//!
//! Given a story bible, an arc's episodes and their pre-production records,
//! the engine resolves the arc's roster, aggregates each character's context
//! and runs three generation phases per character:
//!
//! - **core**: study guide, scene breakdowns, emotional beats, voice and
//!   physical notes
//! - **relationships**: a relationship map seeded with the core output
//! - **practice**: monologues, key scenes and a preparation checklist
//!
//! Each phase tolerates fenced, malformed or truncated JSON and falls back to
//! an empty, well-formed result when generation fails. Progress is reported
//! over a channel and a run can be cancelled with a [`CancellationToken`].
//!
//! # Example
//!
//! ```no_run
//! use callsheet_materials::{ArcMaterialsOrchestrator, ArcMaterialsRequest, CallsheetConfig};
//! use callsheet_models::OpenAICompatibleClient;
//! # use callsheet_core::StoryBible;
//!
//! # async fn run(story_bible: StoryBible) -> Result<(), Box<dyn std::error::Error>> {
//! let config = CallsheetConfig::load()?;
//! let driver = OpenAICompatibleClient::new(config.provider().clone())?;
//! let orchestrator = ArcMaterialsOrchestrator::new(driver, config);
//!
//! let request = ArcMaterialsRequest::builder()
//!     .story_bible(story_bible)
//!     .arc_index(0usize)
//!     .build()?;
//! let bundle = orchestrator.generate_arc_materials(&request).await?;
//! println!("{} characters", bundle.characters().len());
//! # Ok(())
//! # }
//! ```
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bundle;
mod config;
mod extraction;
mod orchestrator;
mod phases;
mod progress;
mod prompts;
mod repair;
mod roster;
mod runner;

pub use bundle::{ArcMaterialsBundle, CharacterMaterials};
pub use config::{
    CallsheetConfig, MAX_AGGREGATION_WORKERS, PhaseConfigs, PipelineConfig, PipelineConfigBuilder,
};
pub use extraction::extract_json;
pub use orchestrator::{ArcMaterialsOrchestrator, ArcMaterialsRequest, ArcMaterialsRequestBuilder};
pub use phases::{
    ChecklistItem, CoreResult, EmotionalBeat, KeyScene, Monologue, PhaseOutcome, PhaseOutput,
    PhysicalNotes, PracticeResult, RelationshipEntry, RelationshipResult, ResultSource,
    SceneBreakdown, StudyGuide, VoiceNotes,
};
pub use progress::{ProgressReporter, character_start, phase_percentage};
pub use prompts::{PromptBuilder, system_prompt};
pub use repair::repair_json;
pub use roster::resolve_roster;
pub use runner::{GenerationPhaseRunner, parse_phase_output};
