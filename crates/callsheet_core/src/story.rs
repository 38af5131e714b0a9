//! Story bible documents.

use serde::{Deserialize, Serialize};

/// How central a character is to the story.
///
/// Unrecognized values deserialize to [`CharacterImportance::Other`].
///
/// # Examples
///
/// ```
/// use callsheet_core::CharacterImportance;
///
/// let minor: CharacterImportance = serde_json::from_str("\"minor\"").unwrap();
/// assert!(minor.is_minor());
///
/// let cameo: CharacterImportance = serde_json::from_str("\"cameo\"").unwrap();
/// assert_eq!(cameo, CharacterImportance::Other);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum CharacterImportance {
    /// Protagonists and leads
    #[serde(alias = "Lead", alias = "LEAD", alias = "main", alias = "Main")]
    Lead,
    /// Regular supporting cast
    #[serde(alias = "Supporting", alias = "SUPPORTING")]
    Supporting,
    /// Characters who return across episodes
    #[serde(alias = "Recurring", alias = "RECURRING")]
    Recurring,
    /// Background or one-off characters
    #[serde(alias = "Minor", alias = "MINOR")]
    Minor,
    /// Unspecified or unrecognized importance
    #[default]
    #[serde(other)]
    Other,
}

impl CharacterImportance {
    /// Whether this character is excluded from arc rosters.
    pub fn is_minor(&self) -> bool {
        matches!(self, CharacterImportance::Minor)
    }
}

/// A story arc and the episodes it spans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoryArc {
    /// Arc title
    pub title: String,
    /// Arc summary
    pub description: String,
    /// Episode numbers belonging to the arc
    pub episode_numbers: Vec<u32>,
}

/// A character declared in the story bible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BibleCharacter {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Importance rating
    pub importance: CharacterImportance,
    /// Free-form psychological profile, passed through to prompts untouched
    pub deep_profile: Option<serde_json::Value>,
}

/// A declared relationship between two characters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CharacterRelationship {
    /// First character's name
    pub character_a: String,
    /// Second character's name
    pub character_b: String,
    /// Relationship label (e.g. "siblings", "rivals")
    pub relationship_type: String,
    /// Narrative description
    pub description: String,
}

/// A story bible document.
///
/// # Examples
///
/// ```
/// use callsheet_core::StoryBible;
///
/// let bible: StoryBible = serde_json::from_str(r#"{
///     "id": "sb-1",
///     "title": "Harbor Lights",
///     "arcs": [{ "title": "Arrival", "episodeNumbers": [1, 2] }],
///     "mainCharacters": [{ "id": "c1", "name": "Jace Castro", "importance": "lead" }]
/// }"#).unwrap();
///
/// assert_eq!(bible.arcs[0].episode_numbers, vec![1, 2]);
/// assert_eq!(bible.main_characters[0].name, "Jace Castro");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoryBible {
    /// Document identifier
    pub id: String,
    /// Series title
    pub title: String,
    /// Logline or synopsis
    pub logline: String,
    /// Story arcs in order
    pub arcs: Vec<StoryArc>,
    /// Declared main characters
    pub main_characters: Vec<BibleCharacter>,
    /// Declared relationships
    pub relationships: Vec<CharacterRelationship>,
}
