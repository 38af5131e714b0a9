//! Core phase: study guide, breakdowns, voice and physical notes.

use super::PhaseOutput;
use super::lenient::{lenient, lenient_vec};
use callsheet_core::GenerationPhase;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Overview of the character for the actor's first read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyGuide {
    /// Who the character is
    #[serde(default, deserialize_with = "lenient")]
    pub overview: String,
    /// History before the story begins
    #[serde(default, deserialize_with = "lenient")]
    pub backstory: String,
    /// What the character wants
    #[serde(default, deserialize_with = "lenient_vec")]
    pub objectives: Vec<String>,
    /// What stands in the way
    #[serde(default, deserialize_with = "lenient_vec")]
    pub obstacles: Vec<String>,
    /// How the character changes over the arc
    #[serde(default, deserialize_with = "lenient")]
    pub arc_progression: String,
    /// Recurring themes the character carries
    #[serde(default, deserialize_with = "lenient_vec")]
    pub themes: Vec<String>,
    /// Unrecognized keys, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Actable breakdown of one scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneBreakdown {
    /// Episode number
    #[serde(default, deserialize_with = "lenient")]
    pub episode_number: Option<u32>,
    /// Scene number
    #[serde(default, deserialize_with = "lenient")]
    pub scene_number: Option<u32>,
    /// Scene heading or short title
    #[serde(default, deserialize_with = "lenient")]
    pub heading: String,
    /// What the character wants in the scene
    #[serde(default, deserialize_with = "lenient")]
    pub objective: String,
    /// What goes unsaid
    #[serde(default, deserialize_with = "lenient")]
    pub subtext: String,
    /// Tactics used to pursue the objective
    #[serde(default, deserialize_with = "lenient_vec")]
    pub tactics: Vec<String>,
    /// Unrecognized keys, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A turning point in the character's emotional line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalBeat {
    /// Where in the story the beat lands
    #[serde(default, deserialize_with = "lenient")]
    pub moment: String,
    /// Dominant emotion
    #[serde(default, deserialize_with = "lenient")]
    pub emotion: String,
    /// Intensity, typically 1 to 10
    #[serde(default, deserialize_with = "lenient")]
    pub intensity: Option<f64>,
    /// What provokes it
    #[serde(default, deserialize_with = "lenient")]
    pub trigger: String,
    /// Unrecognized keys, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// How the character sounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceNotes {
    /// Overall tone
    #[serde(default, deserialize_with = "lenient")]
    pub tone: String,
    /// Pace and rhythm of speech
    #[serde(default, deserialize_with = "lenient")]
    pub rhythm: String,
    /// Characteristic vocabulary
    #[serde(default, deserialize_with = "lenient_vec")]
    pub vocabulary: Vec<String>,
    /// Lines or phrases the character returns to
    #[serde(default, deserialize_with = "lenient_vec")]
    pub signature_phrases: Vec<String>,
    /// Unrecognized keys, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// How the character moves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalNotes {
    /// Posture and stance
    #[serde(default, deserialize_with = "lenient")]
    pub posture: String,
    /// Movement quality
    #[serde(default, deserialize_with = "lenient")]
    pub movement: String,
    /// Habitual gestures
    #[serde(default, deserialize_with = "lenient_vec")]
    pub gestures: Vec<String>,
    /// Unrecognized keys, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Output of the core phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreResult {
    /// Character study guide
    #[serde(default, deserialize_with = "lenient")]
    pub study_guide: StudyGuide,
    /// Per-scene breakdowns
    #[serde(default, deserialize_with = "lenient_vec")]
    pub scene_breakdowns: Vec<SceneBreakdown>,
    /// Emotional beats across the arc
    #[serde(default, deserialize_with = "lenient_vec")]
    pub emotional_beats: Vec<EmotionalBeat>,
    /// Voice notes
    #[serde(default, deserialize_with = "lenient")]
    pub voice_notes: VoiceNotes,
    /// Physicality notes
    #[serde(default, deserialize_with = "lenient")]
    pub physical_notes: PhysicalNotes,
    /// Unrecognized keys, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PhaseOutput for CoreResult {
    const PHASE: GenerationPhase = GenerationPhase::Core;
}
