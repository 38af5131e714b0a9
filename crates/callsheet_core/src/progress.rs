//! Progress events emitted during a run.

use crate::GenerationPhase;
use serde::{Deserialize, Serialize};

/// What a progress event marks.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProgressKind {
    /// A character started or completed
    Character,
    /// A phase finished for a character
    Phase,
    /// The run finished
    Complete,
}

/// An ephemeral progress notification.
///
/// # Examples
///
/// ```
/// use callsheet_core::{ProgressEvent, ProgressKind};
///
/// let event = ProgressEvent::complete("Done", 100.0);
/// let json = serde_json::to_value(&event).unwrap();
/// assert_eq!(json["kind"], "complete");
/// assert!(json.get("characterName").is_none());
/// assert_eq!(event.kind, ProgressKind::Complete);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent {
    /// Event kind
    pub kind: ProgressKind,
    /// Character the event concerns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_name: Option<String>,
    /// Zero-based roster position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_index: Option<usize>,
    /// Roster size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_characters: Option<usize>,
    /// Phase that just finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<GenerationPhase>,
    /// Human-readable status line
    pub message: String,
    /// Overall completion, 0 to 100
    pub percentage: f64,
}

impl ProgressEvent {
    /// Event about a character (start or completion).
    pub fn character(
        name: impl Into<String>,
        index: usize,
        total: usize,
        message: impl Into<String>,
        percentage: f64,
    ) -> Self {
        Self {
            kind: ProgressKind::Character,
            character_name: Some(name.into()),
            character_index: Some(index),
            total_characters: Some(total),
            phase: None,
            message: message.into(),
            percentage,
        }
    }

    /// Event marking a finished phase.
    pub fn phase(
        name: impl Into<String>,
        index: usize,
        total: usize,
        phase: GenerationPhase,
        message: impl Into<String>,
        percentage: f64,
    ) -> Self {
        Self {
            kind: ProgressKind::Phase,
            phase: Some(phase),
            ..Self::character(name, index, total, message, percentage)
        }
    }

    /// Final event of a run.
    pub fn complete(message: impl Into<String>, percentage: f64) -> Self {
        Self {
            kind: ProgressKind::Complete,
            character_name: None,
            character_index: None,
            total_characters: None,
            phase: None,
            message: message.into(),
            percentage,
        }
    }
}
