//! Test utilities for provider tests.
//!
//! This module provides a scripted HTTP endpoint standing in for a provider.

pub mod scripted_server;

#[allow(unused_imports)]
pub use scripted_server::{ScriptedResponse, ScriptedServer};
