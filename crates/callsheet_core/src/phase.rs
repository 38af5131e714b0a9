//! Generation phases run per character.

use serde::{Deserialize, Serialize};

/// The three generation phases, in execution order.
///
/// # Examples
///
/// ```
/// use callsheet_core::GenerationPhase;
/// use strum::IntoEnumIterator;
///
/// let order: Vec<_> = GenerationPhase::iter().collect();
/// assert_eq!(order[1], GenerationPhase::Relationships);
/// assert_eq!(GenerationPhase::Practice.index(), 2);
/// assert_eq!(GenerationPhase::Core.to_string(), "core");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GenerationPhase {
    /// Study guide, breakdowns, voice and physical notes
    Core,
    /// Relationship map, seeded with the core output
    Relationships,
    /// Monologues, key scenes and prep checklist
    Practice,
}

impl GenerationPhase {
    /// Zero-based position in the per-character sequence.
    pub fn index(&self) -> usize {
        match self {
            GenerationPhase::Core => 0,
            GenerationPhase::Relationships => 1,
            GenerationPhase::Practice => 2,
        }
    }

    /// Number of phases per character.
    pub const COUNT: usize = 3;
}
