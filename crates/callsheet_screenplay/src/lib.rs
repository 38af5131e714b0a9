//! Screenplay text analysis for the Callsheet pipeline.
//!
//! This crate extracts speaker cues and dialogue from loosely formatted scene
//! text, reconciles character names written differently across sources, and
//! merges everything known about one character into a [`CharacterContext`].
//!
//! [`CharacterContext`]: callsheet_core::CharacterContext

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aggregator;
pub mod denylist;
mod names;
mod scanner;

pub use aggregator::CharacterContextAggregator;
pub use names::NameMatcher;
pub use scanner::ScreenplayTextScanner;
