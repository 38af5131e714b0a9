//! Merges everything known about one character into a [`CharacterContext`].

use crate::{NameMatcher, ScreenplayTextScanner};
use callsheet_core::{
    CharacterContext, CharacterIdentity, Episode, EpisodeScene, PreProductionRecord,
    SceneReference, StoryBible,
};
use callsheet_error::{CallsheetResult, MaterialsError, MaterialsErrorKind};

/// Builds per-character context from story, episode and pre-production records.
///
/// Scene text is taken from the first non-empty source, in order: linked
/// pre-production content, the episode scene's screenplay, the episode
/// scene's narrative content. A scene belongs to the character when the
/// breakdown cast lists them or the text mentions them. Missing
/// pre-production records or breakdowns only narrow the evidence; they never
/// fail aggregation.
#[derive(Debug, Clone)]
pub struct CharacterContextAggregator {
    dialogue_limit: usize,
    scanner: ScreenplayTextScanner,
}

impl Default for CharacterContextAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterContextAggregator {
    /// Default cap on dialogue lines across all attributed scenes.
    pub const DEFAULT_DIALOGUE_LIMIT: usize = 30;

    /// Aggregator with default limits.
    pub fn new() -> Self {
        Self::with_limits(
            Self::DEFAULT_DIALOGUE_LIMIT,
            ScreenplayTextScanner::DEFAULT_DIALOGUE_LIMIT,
        )
    }

    /// Aggregator with a total dialogue cap and a per-scene scan cap.
    pub fn with_limits(dialogue_limit: usize, scene_dialogue_limit: usize) -> Self {
        Self {
            dialogue_limit,
            scanner: ScreenplayTextScanner::with_dialogue_limit(scene_dialogue_limit),
        }
    }

    /// Build the context for one character across the given episodes.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialsErrorKind::Aggregation`] when the character has no
    /// usable name. Every other anomaly is logged and tolerated.
    #[tracing::instrument(
        skip(self, character, story_bible, episodes, pre_production),
        fields(character = %character.name, episodes = episodes.len())
    )]
    pub fn aggregate(
        &self,
        character: &CharacterIdentity,
        story_bible: &StoryBible,
        episodes: &[Episode],
        pre_production: &[PreProductionRecord],
    ) -> CallsheetResult<CharacterContext> {
        let name = character.name.trim();
        if NameMatcher::normalize(name).is_empty() {
            return Err(MaterialsError::new(MaterialsErrorKind::Aggregation {
                character: character.id.clone(),
                message: "character has no usable name".to_string(),
            })
            .into());
        }

        let mut ordered: Vec<&Episode> = episodes.iter().collect();
        ordered.sort_by_key(|e| e.episode_number);

        let mut scenes = Vec::new();
        let mut dialogue_lines: Vec<String> = Vec::new();
        let mut others: Vec<String> = Vec::new();
        let mut episode_numbers = Vec::new();

        for episode in ordered {
            let record = pre_production
                .iter()
                .find(|r| r.episode_number == episode.episode_number);
            if record.is_none() {
                tracing::debug!(
                    episode = episode.episode_number,
                    "No pre-production record, using episode text only"
                );
            }

            let mut episode_scenes: Vec<&EpisodeScene> = episode.scenes.iter().collect();
            episode_scenes.sort_by_key(|s| s.scene_number);

            for scene in episode_scenes {
                let note = record.and_then(|r| r.note(scene.scene_number));
                let cast: &[String] = record
                    .and_then(|r| r.script_breakdown.as_ref())
                    .and_then(|b| b.scene(scene.scene_number))
                    .map(|s| s.characters.as_slice())
                    .unwrap_or_default();

                let text = [
                    note.and_then(|n| n.linked_scene_content.as_deref()),
                    scene.screenplay.as_deref(),
                    Some(scene.content.as_str()),
                ]
                .into_iter()
                .flatten()
                .find(|t| !t.trim().is_empty())
                .unwrap_or_default();

                let in_breakdown = NameMatcher::contains(cast, name);
                if !in_breakdown && !NameMatcher::mentions(text, name) {
                    continue;
                }

                let speakers = self.scanner.speakers(text);
                for other in cast.iter().chain(speakers.iter()) {
                    let other = other.trim();
                    if !other.is_empty()
                        && !NameMatcher::matches(other, name)
                        && !NameMatcher::contains(&others, other)
                    {
                        others.push(other.to_string());
                    }
                }

                let remaining = self.dialogue_limit.saturating_sub(dialogue_lines.len());
                if remaining > 0 {
                    dialogue_lines.extend(self.scanner.dialogue(text, name).into_iter().take(remaining));
                }

                if !episode_numbers.contains(&episode.episode_number) {
                    episode_numbers.push(episode.episode_number);
                }

                scenes.push(SceneReference {
                    episode_number: episode.episode_number,
                    scene_number: scene.scene_number,
                    text: text.to_string(),
                    heading: scene.heading.clone(),
                    location: scene.location.clone(),
                    time_of_day: scene.time_of_day.clone(),
                    pre_prod_notes: note.and_then(|n| n.notes.clone()),
                });
            }
        }

        let relationships = story_bible
            .relationships
            .iter()
            .filter(|r| {
                NameMatcher::matches(&r.character_a, name)
                    || NameMatcher::matches(&r.character_b, name)
            })
            .cloned()
            .collect::<Vec<_>>();

        let deep_profile = story_bible
            .main_characters
            .iter()
            .find(|c| c.id == character.id)
            .or_else(|| {
                story_bible
                    .main_characters
                    .iter()
                    .find(|c| NameMatcher::matches(&c.name, name))
            })
            .and_then(|c| c.deep_profile.clone());

        if scenes.is_empty() {
            tracing::warn!(character = %name, "No scenes attributed to character");
        }
        if others.is_empty() {
            tracing::warn!(character = %name, "No other characters found in attributed scenes");
        }
        tracing::debug!(
            character = %name,
            scene_count = scenes.len(),
            dialogue_lines = dialogue_lines.len(),
            other_characters = others.len(),
            relationships = relationships.len(),
            "Aggregated character context"
        );

        Ok(CharacterContext {
            identity: character.clone(),
            deep_profile,
            scenes,
            dialogue_lines,
            other_character_names: others,
            relationships,
            episode_numbers,
        })
    }
}
