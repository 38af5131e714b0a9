//! Typed results of the three generation phases.
//!
//! Every field deserializes leniently: a mistyped field becomes its empty
//! value and mistyped list elements are dropped, so any JSON object yields a
//! well-formed result. The empty value of each type is the fallback used
//! when a phase fails, and it serializes with exactly the keys a populated
//! result has.

mod core_phase;
mod lenient;
mod practice;
mod relationships;

pub use core_phase::{CoreResult, EmotionalBeat, PhysicalNotes, SceneBreakdown, StudyGuide, VoiceNotes};
pub use practice::{ChecklistItem, KeyScene, Monologue, PracticeResult};
pub use relationships::{RelationshipEntry, RelationshipResult};

use callsheet_core::GenerationPhase;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A phase's structured output.
pub trait PhaseOutput:
    Serialize + DeserializeOwned + Default + Clone + PartialEq + Send + Sync + 'static
{
    /// The phase producing this output.
    const PHASE: GenerationPhase;

    /// Canonical empty result, used as the deterministic fallback.
    fn empty() -> Self {
        Self::default()
    }
}

/// How a phase result was obtained.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResultSource {
    /// The response parsed as-is
    Parsed,
    /// The response parsed after repair
    Repaired,
    /// Generation or parsing failed; the empty result was substituted
    Fallback,
}

/// A phase result together with how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseOutcome<T> {
    /// The result; always well-formed
    pub result: T,
    /// Where the result came from
    pub source: ResultSource,
}

impl<T: PhaseOutput> PhaseOutcome<T> {
    /// Outcome carrying the empty fallback result.
    pub fn fallback() -> Self {
        Self {
            result: T::empty(),
            source: ResultSource::Fallback,
        }
    }

    /// Whether the fallback was substituted.
    pub fn is_fallback(&self) -> bool {
        self.source == ResultSource::Fallback
    }

    /// Discard the provenance.
    pub fn into_result(self) -> T {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::collections::BTreeSet;

    fn keys(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
        if let Value::Object(map) = value {
            for (k, v) in map {
                let path = format!("{prefix}.{k}");
                keys(v, &path, out);
                out.insert(path);
            }
        }
    }

    fn key_set<T: Serialize>(value: &T) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        keys(&serde_json::to_value(value).unwrap(), "", &mut out);
        out
    }

    #[test]
    fn test_empty_core_has_every_parsed_key() {
        let parsed: CoreResult = serde_json::from_value(json!({
            "studyGuide": {
                "overview": "A dockhand who never left.",
                "backstory": "",
                "objectives": ["leave"],
                "obstacles": [],
                "arcProgression": "",
                "themes": []
            },
            "sceneBreakdowns": [{ "sceneNumber": 1, "objective": "stall" }],
            "emotionalBeats": [{ "moment": "docks", "emotion": "dread", "intensity": 7 }],
            "voiceNotes": { "tone": "dry" },
            "physicalNotes": { "posture": "hunched" }
        }))
        .unwrap();

        assert_eq!(key_set(&parsed), key_set(&CoreResult::empty()));
        assert_eq!(parsed.scene_breakdowns[0].scene_number, Some(1));
    }

    #[test]
    fn test_empty_results_serialize_top_level_keys() {
        let core = serde_json::to_value(CoreResult::empty()).unwrap();
        for key in ["studyGuide", "sceneBreakdowns", "emotionalBeats", "voiceNotes", "physicalNotes"] {
            assert!(core.get(key).is_some(), "{key}");
        }
        let relationships = serde_json::to_value(RelationshipResult::empty()).unwrap();
        assert_eq!(relationships, json!({ "relationshipMap": [] }));
        let practice = serde_json::to_value(PracticeResult::empty()).unwrap();
        assert_eq!(
            practice,
            json!({ "monologues": [], "keyScenes": [], "prepChecklist": [] })
        );
    }

    #[test]
    fn test_mistyped_fields_degrade_to_empty() {
        let parsed: CoreResult = serde_json::from_value(json!({
            "studyGuide": "not an object",
            "sceneBreakdowns": {"oops": true},
            "emotionalBeats": [{ "moment": "pier", "intensity": "very" }, 42],
            "voiceNotes": { "tone": 3, "rhythm": "clipped" }
        }))
        .unwrap();

        assert_eq!(parsed.study_guide, StudyGuide::default());
        assert!(parsed.scene_breakdowns.is_empty());
        assert_eq!(parsed.emotional_beats.len(), 1);
        assert_eq!(parsed.emotional_beats[0].intensity, None);
        assert_eq!(parsed.voice_notes.tone, "");
        assert_eq!(parsed.voice_notes.rhythm, "clipped");
    }

    #[test]
    fn test_unknown_keys_are_preserved() {
        let parsed: RelationshipResult = serde_json::from_value(json!({
            "relationshipMap": [{ "character": "Marisol", "chemistryScore": 9 }],
            "summary": "Tight-knit crew"
        }))
        .unwrap();

        assert_eq!(parsed.extra["summary"], "Tight-knit crew");
        assert_eq!(parsed.relationship_map[0].extra["chemistryScore"], 9);
        let round = serde_json::to_value(&parsed).unwrap();
        assert_eq!(round["summary"], "Tight-knit crew");
    }

    #[test]
    fn test_checklist_accepts_strings_and_objects() {
        let parsed: PracticeResult = serde_json::from_value(json!({
            "prepChecklist": ["Learn knots", { "task": "Dialect work", "category": "voice" }, 7]
        }))
        .unwrap();

        assert_eq!(parsed.prep_checklist.len(), 2);
        assert_eq!(parsed.prep_checklist[0].task, "Learn knots");
        assert_eq!(parsed.prep_checklist[1].category, "voice");
    }

    #[test]
    fn test_fallback_outcome_is_empty() {
        let outcome: PhaseOutcome<PracticeResult> = PhaseOutcome::fallback();
        assert!(outcome.is_fallback());
        assert_eq!(outcome.into_result(), PracticeResult::empty());
    }
}
