//! Core data types for the Callsheet actor-materials pipeline.
//!
//! This crate provides the production records the pipeline reads (story bibles,
//! episodes, pre-production breakdowns), the per-character context it builds,
//! and the request, phase and progress types shared by every other crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod character;
mod episode;
mod phase;
mod preproduction;
mod progress;
mod provider;
mod request;
mod story;
mod telemetry;

pub use character::{CharacterContext, CharacterIdentity, SceneReference};
pub use episode::{CastEntry, Episode, EpisodeScene};
pub use phase::GenerationPhase;
pub use preproduction::{BreakdownScene, PreProductionRecord, SceneNote, ScriptBreakdown};
pub use progress::{ProgressEvent, ProgressKind};
pub use provider::{ProviderSettings, ProviderSettingsBuilder};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse, GenerationParams};
pub use story::{BibleCharacter, CharacterImportance, CharacterRelationship, StoryArc, StoryBible};
pub use telemetry::init_tracing;
