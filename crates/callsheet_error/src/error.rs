//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, MaterialsError, ProviderError, StorageError};

/// Every error condition the Callsheet crates can surface.
///
/// # Examples
///
/// ```
/// use callsheet_error::{CallsheetError, JsonError};
///
/// let json_err = JsonError::new("Unexpected end of input");
/// let err: CallsheetError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CallsheetErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Document store error
    #[from(StorageError)]
    Storage(StorageError),
    /// Generation provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Materials pipeline error
    #[from(MaterialsError)]
    Materials(MaterialsError),
}

/// Callsheet error with kind discrimination.
///
/// # Examples
///
/// ```
/// use callsheet_error::{CallsheetResult, ConfigError};
///
/// fn might_fail() -> CallsheetResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Callsheet Error: {}", _0)]
pub struct CallsheetError(Box<CallsheetErrorKind>);

impl CallsheetError {
    /// Create a new error from a kind.
    pub fn new(kind: CallsheetErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CallsheetErrorKind {
        &self.0
    }

    /// Whether this error is a fail-fast input error (unknown arc or character).
    pub fn is_input_error(&self) -> bool {
        matches!(self.kind(), CallsheetErrorKind::Materials(e) if e.kind.is_input_error())
    }
}

// Generic From implementation for any type that converts to CallsheetErrorKind
impl<T> From<T> for CallsheetError
where
    T: Into<CallsheetErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Callsheet operations.
pub type CallsheetResult<T> = std::result::Result<T, CallsheetError>;
