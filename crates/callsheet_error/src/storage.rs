//! Document store error types.

/// Kinds of document store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to read a document or directory
    #[display("Failed to read document: {}", _0)]
    Read(String),
    /// Document exists but could not be decoded
    #[display("Failed to decode document: {}", _0)]
    Decode(String),
    /// Requested document does not exist
    #[display("Document not found: {}", _0)]
    NotFound(String),
    /// Failed to write an output document
    #[display("Failed to write document: {}", _0)]
    Write(String),
    /// Invalid storage path
    #[display("Invalid storage path: {}", _0)]
    InvalidPath(String),
}

/// Document store error with location tracking.
///
/// # Examples
///
/// ```
/// use callsheet_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("story_bibles/s1.json".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
