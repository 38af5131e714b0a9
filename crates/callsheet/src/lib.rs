//! Callsheet - actor materials for episodic screenplays
//!
//! Callsheet reads a series' story bible, episodes and pre-production
//! breakdowns and generates, for every character of a story arc, a set of
//! actor materials: a study guide with scene and emotional breakdowns, a
//! relationship map, and rehearsal material (monologues, key scenes, a prep
//! checklist).
//!
//! # Features
//!
//! - **Screenplay analysis**: speaker cues and dialogue from loosely formatted text
//! - **Name reconciliation**: `JACE`, `Jace` and `Jace Castro` are one character
//! - **Graceful degradation**: malformed generation output is repaired or
//!   replaced by an empty, well-formed result
//! - **Progress and cancellation**: per-phase progress events over a channel
//! - **Provider agnostic**: any OpenAI-compatible chat completions endpoint
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use callsheet::{
//!     ArcMaterialsOrchestrator, CallsheetConfig, FileSystemRepository,
//!     OpenAICompatibleClient, arc_request,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CallsheetConfig::load()?;
//!     let repository = FileSystemRepository::new("./data");
//!     let request = arc_request(&repository, "harbor", 0, Vec::new(), None).await?;
//!
//!     let driver = OpenAICompatibleClient::new(config.provider().clone())?;
//!     let bundle = ArcMaterialsOrchestrator::new(driver, config)
//!         .generate_arc_materials(&request)
//!         .await?;
//!
//!     println!("{}", serde_json::to_string_pretty(&bundle)?);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Callsheet is organized as a workspace with focused crates:
//!
//! - `callsheet_error` - Error types
//! - `callsheet_core` - Production records, requests, progress events
//! - `callsheet_interface` - `GenerationDriver` and `ProductionRepository` traits
//! - `callsheet_screenplay` - Speaker cues, dialogue, name matching, context aggregation
//! - `callsheet_models` - OpenAI-compatible provider
//! - `callsheet_storage` - Filesystem and in-memory document stores
//! - `callsheet_materials` - Phases, prompts, orchestration, configuration
//!
//! This crate (`callsheet`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod request;

pub use request::arc_request;

// Re-export error types
pub use callsheet_error::{
    CallsheetError, CallsheetErrorKind, CallsheetResult, ConfigError, JsonError,
    MaterialsError, MaterialsErrorKind, ProviderError, ProviderErrorKind, RetryableError,
    StorageError, StorageErrorKind,
};

// Re-export core types
pub use callsheet_core::{
    BibleCharacter, BreakdownScene, CastEntry, CharacterContext, CharacterIdentity,
    CharacterImportance, CharacterRelationship, Episode, EpisodeScene, GenerateRequest,
    GenerateRequestBuilder, GenerateResponse, GenerationParams, GenerationPhase,
    PreProductionRecord, ProgressEvent, ProgressKind, ProviderSettings, ProviderSettingsBuilder,
    SceneNote, SceneReference, ScriptBreakdown, StoryArc, StoryBible, init_tracing,
};

// Re-export traits
pub use callsheet_interface::{GenerationDriver, ProductionRepository};

// Re-export screenplay analysis
pub use callsheet_screenplay::{CharacterContextAggregator, NameMatcher, ScreenplayTextScanner};

// Re-export providers and storage
pub use callsheet_models::OpenAICompatibleClient;
pub use callsheet_storage::{FileSystemRepository, InMemoryRepository};

// Re-export the materials engine
pub use callsheet_materials::{
    ArcMaterialsBundle, ArcMaterialsOrchestrator, ArcMaterialsRequest, ArcMaterialsRequestBuilder,
    CallsheetConfig, CharacterMaterials, ChecklistItem, CoreResult, EmotionalBeat,
    GenerationPhaseRunner, KeyScene, Monologue, PhaseConfigs, PhaseOutcome, PhaseOutput,
    PhysicalNotes, PipelineConfig, PracticeResult, ProgressReporter, PromptBuilder,
    RelationshipEntry, RelationshipResult, ResultSource, SceneBreakdown, StudyGuide, VoiceNotes,
    extract_json, parse_phase_output, repair_json, resolve_roster,
};
