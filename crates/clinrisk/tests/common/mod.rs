//! Common test utilities
//!
//! Shared fixtures for end-to-end tests: a full code-list bundle and a
//! small synthetic cohort covering the interesting rule combinations.

pub mod fixtures;

pub use fixtures::*;
