//! Generated materials and the per-run bundle.

use crate::phases::{CoreResult, PracticeResult, RelationshipResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The three phase results for one character, with its identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterMaterials {
    /// Roster id
    pub character_id: String,
    /// Display name
    pub character_name: String,
    /// Roster description
    pub description: String,
    /// Episodes the character appears in
    pub episode_numbers: Vec<u32>,
    /// Scenes attributed to the character
    pub scene_count: usize,
    /// Core phase result
    pub core: CoreResult,
    /// Relationships phase result
    pub relationships: RelationshipResult,
    /// Practice phase result
    pub practice: PracticeResult,
}

/// All materials produced for one arc in one run.
///
/// Created once per invocation. A new run produces a new bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct ArcMaterialsBundle {
    /// Bundle id
    id: Uuid,
    /// Arc position in the story bible
    arc_index: usize,
    /// Arc title
    arc_title: String,
    /// Story bible the arc belongs to
    story_bible_id: String,
    /// Episodes the run covered
    episode_numbers: Vec<u32>,
    /// Materials per character, in roster order
    characters: Vec<CharacterMaterials>,
    /// Creation time
    generated_at: DateTime<Utc>,
    /// Last modification time
    last_updated: DateTime<Utc>,
}

impl ArcMaterialsBundle {
    /// New bundle stamped with a fresh id and the current time.
    pub fn new(
        arc_index: usize,
        arc_title: impl Into<String>,
        story_bible_id: impl Into<String>,
        episode_numbers: Vec<u32>,
        characters: Vec<CharacterMaterials>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            arc_index,
            arc_title: arc_title.into(),
            story_bible_id: story_bible_id.into(),
            episode_numbers,
            characters,
            generated_at: now,
            last_updated: now,
        }
    }

    /// Materials for a character by id.
    pub fn character(&self, character_id: &str) -> Option<&CharacterMaterials> {
        self.characters.iter().find(|c| c.character_id == character_id)
    }

    /// Character names in roster order.
    pub fn character_names(&self) -> Vec<&str> {
        self.characters
            .iter()
            .map(|c| c.character_name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_serializes_camel_case() {
        let bundle = ArcMaterialsBundle::new(
            0,
            "Low Tide",
            "harbor",
            vec![1, 2],
            vec![CharacterMaterials {
                character_id: "jace".into(),
                character_name: "Jace Castro".into(),
                ..Default::default()
            }],
        );
        let value = serde_json::to_value(&bundle).unwrap();
        assert_eq!(value["arcTitle"], "Low Tide");
        assert_eq!(value["storyBibleId"], "harbor");
        assert_eq!(value["generatedAt"], value["lastUpdated"]);
        assert_eq!(value["characters"][0]["characterName"], "Jace Castro");
        assert!(value["characters"][0]["relationships"]["relationshipMap"].is_array());
        assert_eq!(bundle.character_names(), vec!["Jace Castro"]);
        assert!(bundle.character("jace").is_some());
    }
}
