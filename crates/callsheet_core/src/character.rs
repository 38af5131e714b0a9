//! Character identity and aggregated context.

use crate::CharacterRelationship;
use serde::{Deserialize, Serialize};

/// A resolved roster member. Immutable for the duration of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterIdentity {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
}

impl CharacterIdentity {
    /// Create an identity.
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A scene attributed to a character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneReference {
    /// Episode the scene belongs to
    pub episode_number: u32,
    /// Scene number within the episode
    pub scene_number: u32,
    /// Best available scene text
    pub text: String,
    /// Slug line
    pub heading: String,
    /// Location name
    pub location: String,
    /// Time of day
    pub time_of_day: String,
    /// Pre-production notes for the scene
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_prod_notes: Option<String>,
}

/// Everything the generation phases know about one character.
///
/// Built fresh per character per run and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterContext {
    /// Who this context describes
    pub identity: CharacterIdentity,
    /// Story bible profile, passed through untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_profile: Option<serde_json::Value>,
    /// Attributed scenes, in episode and scene order
    pub scenes: Vec<SceneReference>,
    /// Dialogue lines across attributed scenes, capped
    pub dialogue_lines: Vec<String>,
    /// Other characters sharing scenes, deduplicated by fuzzy name match
    pub other_character_names: Vec<String>,
    /// Story bible relationships involving this character
    pub relationships: Vec<CharacterRelationship>,
    /// Episodes in which the character appears
    pub episode_numbers: Vec<u32>,
}
