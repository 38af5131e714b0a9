//! Practice phase: monologues, key scenes and a preparation checklist.

use super::PhaseOutput;
use super::lenient::{lenient, lenient_vec};
use callsheet_core::GenerationPhase;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A monologue for audition or rehearsal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monologue {
    /// Short title
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    /// Dramatic situation
    #[serde(default, deserialize_with = "lenient")]
    pub context: String,
    /// The monologue itself
    #[serde(default, deserialize_with = "lenient")]
    pub text: String,
    /// Direction for the actor
    #[serde(default, deserialize_with = "lenient")]
    pub coaching_notes: String,
    /// Unrecognized keys, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A scene worth rehearsing first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyScene {
    /// Episode number
    #[serde(default, deserialize_with = "lenient")]
    pub episode_number: Option<u32>,
    /// Scene number
    #[serde(default, deserialize_with = "lenient")]
    pub scene_number: Option<u32>,
    /// Short title
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    /// Why the scene matters for the character
    #[serde(default, deserialize_with = "lenient")]
    pub significance: String,
    /// Preparation exercises
    #[serde(default, deserialize_with = "lenient_vec")]
    pub exercises: Vec<String>,
    /// Unrecognized keys, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One preparation task. Accepts either a bare string or an object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ChecklistItemRepr")]
pub struct ChecklistItem {
    /// What to do
    pub task: String,
    /// Grouping such as "voice" or "research"
    pub category: String,
    /// Unrecognized keys, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ChecklistItemRepr {
    Text(String),
    Item(ChecklistItemFields),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChecklistItemFields {
    #[serde(default, deserialize_with = "lenient")]
    task: String,
    #[serde(default, deserialize_with = "lenient")]
    category: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<ChecklistItemRepr> for ChecklistItem {
    fn from(repr: ChecklistItemRepr) -> Self {
        match repr {
            ChecklistItemRepr::Text(task) => Self {
                task,
                ..Default::default()
            },
            ChecklistItemRepr::Item(fields) => Self {
                task: fields.task,
                category: fields.category,
                extra: fields.extra,
            },
        }
    }
}

/// Output of the practice phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeResult {
    /// Practice monologues
    #[serde(default, deserialize_with = "lenient_vec")]
    pub monologues: Vec<Monologue>,
    /// Scenes to rehearse first
    #[serde(default, deserialize_with = "lenient_vec")]
    pub key_scenes: Vec<KeyScene>,
    /// Preparation tasks
    #[serde(default, deserialize_with = "lenient_vec")]
    pub prep_checklist: Vec<ChecklistItem>,
    /// Unrecognized keys, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PhaseOutput for PracticeResult {
    const PHASE: GenerationPhase = GenerationPhase::Practice;
}
