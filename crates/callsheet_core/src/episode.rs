//! Episode documents.

use crate::CharacterImportance;
use serde::{Deserialize, Serialize};

/// One scene of an episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodeScene {
    /// Scene number within the episode
    pub scene_number: u32,
    /// Slug line, e.g. "INT. DOCKS - NIGHT"
    pub heading: String,
    /// Location name
    pub location: String,
    /// Time of day
    pub time_of_day: String,
    /// Narrative summary of the scene
    pub content: String,
    /// Screenplay-formatted text, when written
    pub screenplay: Option<String>,
}

/// An entry in an episode's cast list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CastEntry {
    /// Story bible character id, when linked
    pub character_id: Option<String>,
    /// Character name as written in the cast list
    pub name: String,
    /// Short description
    pub description: String,
    /// Importance rating
    pub importance: CharacterImportance,
}

/// An episode document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Episode {
    /// Episode number within the series
    pub episode_number: u32,
    /// Episode title
    pub title: String,
    /// Scenes in order
    pub scenes: Vec<EpisodeScene>,
    /// Cast list
    pub cast: Vec<CastEntry>,
}
