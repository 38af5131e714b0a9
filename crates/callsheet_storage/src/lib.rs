//! Read-only production document stores for Callsheet.
//!
//! Both stores implement [`callsheet_interface::ProductionRepository`]:
//!
//! - [`FileSystemRepository`] reads JSON documents laid out per story
//! - [`InMemoryRepository`] holds documents in memory for tests and embedding

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod memory;

pub use filesystem::FileSystemRepository;
pub use memory::InMemoryRepository;
