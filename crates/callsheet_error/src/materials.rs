//! Actor-materials pipeline error types.

/// Specific error conditions for the materials pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum MaterialsErrorKind {
    /// Requested arc index is outside the story bible's arcs
    #[display("Arc {} not found (story bible has {} arcs)", index, available)]
    ArcNotFound {
        /// Requested arc index
        index: usize,
        /// Number of arcs in the story bible
        available: usize,
    },
    /// Single-character filter matched no roster entry
    #[display("Character '{}' not found in the arc roster", _0)]
    CharacterNotFound(String),
    /// Context aggregation could not produce a context for a character
    #[display("Context aggregation failed for '{}': {}", character, message)]
    Aggregation {
        /// Character being aggregated
        character: String,
        /// Failure description
        message: String,
    },
}

impl MaterialsErrorKind {
    /// Whether this condition indicates caller misuse rather than a runtime failure.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            MaterialsErrorKind::ArcNotFound { .. } | MaterialsErrorKind::CharacterNotFound(_)
        )
    }
}

/// Error type for materials pipeline operations.
///
/// # Examples
///
/// ```
/// use callsheet_error::{MaterialsError, MaterialsErrorKind};
///
/// let err = MaterialsError::new(MaterialsErrorKind::ArcNotFound { index: 4, available: 2 });
/// assert!(format!("{}", err).contains("Arc 4 not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Materials Error: {} at line {} in {}", kind, line, file)]
pub struct MaterialsError {
    /// The specific error condition
    pub kind: MaterialsErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl MaterialsError {
    /// Create a new MaterialsError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MaterialsErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
