//! Pre-production documents (script breakdowns and scene notes).

use serde::{Deserialize, Serialize};

/// Breakdown entry for one scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreakdownScene {
    /// Scene number within the episode
    pub scene_number: u32,
    /// Characters appearing in the scene
    pub characters: Vec<String>,
}

/// Structured script breakdown for an episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScriptBreakdown {
    /// Per-scene breakdown entries
    pub scenes: Vec<BreakdownScene>,
}

impl ScriptBreakdown {
    /// Breakdown entry for a scene number, if present.
    pub fn scene(&self, scene_number: u32) -> Option<&BreakdownScene> {
        self.scenes.iter().find(|s| s.scene_number == scene_number)
    }
}

/// Director or writer notes attached to a scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneNote {
    /// Scene number within the episode
    pub scene_number: u32,
    /// Screenplay text linked to the scene during pre-production
    pub linked_scene_content: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

/// Pre-production document for one episode.
///
/// # Examples
///
/// ```
/// use callsheet_core::PreProductionRecord;
///
/// let record: PreProductionRecord = serde_json::from_str(r#"{
///     "episodeNumber": 1,
///     "scriptBreakdown": { "scenes": [{ "sceneNumber": 2, "characters": ["JACE"] }] }
/// }"#).unwrap();
///
/// let breakdown = record.script_breakdown.unwrap();
/// assert_eq!(breakdown.scene(2).unwrap().characters, vec!["JACE"]);
/// assert!(record.scene_notes.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreProductionRecord {
    /// Episode this record belongs to
    pub episode_number: u32,
    /// Structured breakdown, when one was produced
    pub script_breakdown: Option<ScriptBreakdown>,
    /// Per-scene notes
    pub scene_notes: Vec<SceneNote>,
}

impl PreProductionRecord {
    /// Note for a scene number, if present.
    pub fn note(&self, scene_number: u32) -> Option<&SceneNote> {
        self.scene_notes
            .iter()
            .find(|n| n.scene_number == scene_number)
    }
}
