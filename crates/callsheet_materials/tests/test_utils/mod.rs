//! Test utilities for the materials engine.
//!
//! This module provides a scripted generation driver and a small production
//! fixture shared across the integration tests.

pub mod fixtures;
pub mod mock_driver;

#[allow(unused_imports)]
pub use fixtures::{episodes, pre_production, request, story_bible};
#[allow(unused_imports)]
pub use mock_driver::{MockCall, MockDriver};
