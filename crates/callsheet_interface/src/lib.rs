//! Trait definitions for the Callsheet actor-materials pipeline.
//!
//! This crate provides the seams between the generation engine and its
//! external collaborators: the text-generation provider and the document
//! store holding production records.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{GenerationDriver, ProductionRepository};
