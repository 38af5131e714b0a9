//! Error types for the Callsheet workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use callsheet_error::{CallsheetResult, MaterialsError, MaterialsErrorKind};
//!
//! fn pick_character() -> CallsheetResult<String> {
//!     Err(MaterialsError::new(MaterialsErrorKind::CharacterNotFound(
//!         "nonexistent".to_string(),
//!     )))?
//! }
//!
//! let err = pick_character().unwrap_err();
//! assert!(err.is_input_error());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod materials;
mod provider;
mod storage;

pub use config::ConfigError;
pub use error::{CallsheetError, CallsheetErrorKind, CallsheetResult};
pub use json::JsonError;
pub use materials::{MaterialsError, MaterialsErrorKind};
pub use provider::{ProviderError, ProviderErrorKind, RetryableError};
pub use storage::{StorageError, StorageErrorKind};
