//! Relationships phase: how the character relates to everyone else.

use super::PhaseOutput;
use super::lenient::{lenient, lenient_vec};
use callsheet_core::GenerationPhase;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The character's relationship with one other character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipEntry {
    /// The other character
    #[serde(default, deserialize_with = "lenient")]
    pub character: String,
    /// Relationship label
    #[serde(default, deserialize_with = "lenient")]
    pub relationship: String,
    /// How the two play off each other
    #[serde(default, deserialize_with = "lenient")]
    pub dynamic: String,
    /// Shared history
    #[serde(default, deserialize_with = "lenient")]
    pub history: String,
    /// Scenes or moments that define the relationship
    #[serde(default, deserialize_with = "lenient_vec")]
    pub key_moments: Vec<String>,
    /// Unrecognized keys, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Output of the relationships phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipResult {
    /// One entry per related character
    #[serde(default, deserialize_with = "lenient_vec")]
    pub relationship_map: Vec<RelationshipEntry>,
    /// Unrecognized keys, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PhaseOutput for RelationshipResult {
    const PHASE: GenerationPhase = GenerationPhase::Relationships;
}
